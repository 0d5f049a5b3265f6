//! Site configuration assembled by the launcher

use std::path::PathBuf;

/// Locale used when nothing else is requested or loaded
pub const DEFAULT_LOCALE: &str = "en";

/// Startup settings for the site
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Locale requested for rendering (BCP 47 tag, e.g. `en`, `de-AT`)
    pub locale: String,
    /// Locale consulted when a key is missing from `locale`
    pub fallback_locale: String,
    /// Directory with additional `<locale>.json` documents
    pub locale_dir: Option<PathBuf>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_string(),
            fallback_locale: DEFAULT_LOCALE.to_string(),
            locale_dir: None,
        }
    }
}

impl SiteConfig {
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    pub fn with_fallback_locale(mut self, locale: impl Into<String>) -> Self {
        self.fallback_locale = locale.into();
        self
    }

    pub fn with_locale_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.locale_dir = Some(dir.into());
        self
    }
}
