//! Content context provider for the DEMORPH site.
//!
//! Provides the active locale's [`Translator`] to all components via
//! use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(|| get_site_content().translator(&get_site_config().locale));
//!
//! // In child components
//! let t = use_translator();
//! rsx! { h2 { "{t.t(\"about.heading\")}" } }
//! ```

use demorph_core::{ContentSource, SiteConfig, Translator};
use dioxus::prelude::*;

/// Get the site configuration set from command line args.
pub fn get_site_config() -> SiteConfig {
    crate::get_site_config()
}

/// Get the shared copy store.
pub fn get_site_content() -> std::sync::Arc<ContentSource> {
    crate::get_site_content()
}

/// Load the bundled copy plus any documents from the configured locale
/// directory, and make sure both the requested and the fallback locale can
/// be served.
pub fn load_content(config: &SiteConfig) -> demorph_core::Result<ContentSource> {
    let mut source = ContentSource::bundled()?.with_fallback(&config.fallback_locale);

    if let Some(dir) = &config.locale_dir {
        source.load_dir(dir)?;
    }

    // `de-AT` as fallback settles on a loaded `de`
    let fallback = source.require(&config.fallback_locale)?.to_string();
    let source = source.with_fallback(fallback);

    let negotiated = source.require(&config.locale)?;
    if negotiated != config.locale {
        tracing::debug!(requested = %config.locale, negotiated, "Locale negotiated");
    }

    Ok(source)
}

/// Hook to access the active locale's copy from context.
///
/// # Example
///
/// ```ignore
/// let t = use_translator();
/// let cards: Vec<FeatureCardData> = t.records("feature.cards");
/// ```
pub fn use_translator() -> Translator {
    use_context::<Translator>()
}

/// Bundled English copy, for rendering components in tests
#[cfg(test)]
pub fn test_translator() -> Translator {
    std::sync::Arc::new(ContentSource::bundled().expect("bundled copy parses")).translator("en")
}
