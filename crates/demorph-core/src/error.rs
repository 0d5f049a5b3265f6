//! Error types for the DEMORPH site core

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for site core operations
///
/// Nothing here reaches a visitor: rendering code degrades to fallbacks.
/// These errors surface at startup, while specs and locale files are built.
#[derive(Error, Debug)]
pub enum SiteError {
    /// A variant spec failed validation
    #[error("Variant spec error: {0}")]
    Variant(#[from] VariantError),

    /// A locale document is not valid JSON
    #[error("Failed to parse content for locale '{locale}': {source}")]
    ContentParse {
        locale: String,
        #[source]
        source: serde_json::Error,
    },

    /// A locale document's root is not a JSON object
    #[error("Content for locale '{0}' must be a JSON object")]
    ContentShape(String),

    /// Requested locale is not loaded and no fallback applies
    #[error("Unknown locale: {0}")]
    UnknownLocale(String),

    /// Locale directory could not be read
    #[error("Failed to read locale file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Validation failures when building a [`crate::VariantSpec`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VariantError {
    /// Two axes share a name
    #[error("Axis '{0}' is declared twice")]
    DuplicateAxis(String),

    /// An axis declares no values
    #[error("Axis '{0}' has no values")]
    EmptyAxis(String),

    /// The default value is not one of the axis values
    #[error("Default '{default}' is not a value of axis '{axis}'")]
    UnknownDefault { axis: String, default: String },

    /// An axis declares the same value twice
    #[error("Axis '{axis}' declares value '{value}' twice")]
    DuplicateValue { axis: String, value: String },
}
