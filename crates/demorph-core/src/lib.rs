//! DEMORPH Site Core Library
//!
//! Framework-free logic behind the DEMORPH marketing site.
//!
//! ## Overview
//!
//! Every visual primitive on the site is styled from a [`VariantSpec`]: a base
//! set of utility classes plus named axes (intent, size, shape, theme) whose
//! selected values contribute more classes. The resolved class list is then
//! merged so that later utilities win over earlier conflicting ones.
//!
//! Copy comes from a [`ContentSource`] keyed by locale and dotted path, and
//! string keys coming out of that copy (icon names, layouts) are looked up in
//! [`FallbackMap`]s that never fail.
//!
//! ## Quick Start
//!
//! ```
//! use demorph_core::{Selection, VariantSpec};
//!
//! let spec = VariantSpec::builder("inline-flex p-4")
//!     .axis("intent", "primary", [("primary", "bg-primary"), ("gray", "bg-dark-gray")])
//!     .build()
//!     .unwrap();
//!
//! let class = spec
//!     .resolve(&Selection::new().set("intent", "gray"), Some("p-2"))
//!     .merged();
//! assert_eq!(class, "inline-flex bg-dark-gray p-2");
//! ```

pub mod config;
pub mod content;
pub mod disclosure;
pub mod error;
pub mod lookup;
pub mod merge;
pub mod variant;

// Re-exports
pub use config::SiteConfig;
pub use content::{ContentEntry, ContentSource, Translator};
pub use disclosure::{Disclosure, DisclosureEvent};
pub use error::{SiteError, VariantError};
pub use lookup::FallbackMap;
pub use merge::{merge_classes, ClassList};
pub use variant::{ResolvedClassName, Selection, VariantSpec, VariantValue};

/// Result type alias using SiteError
pub type Result<T> = std::result::Result<T, SiteError>;
