#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

use anyhow::Context;
use clap::Parser;
use demorph_core::config::DEFAULT_LOCALE;
use demorph_core::{ContentSource, SiteConfig};
use tracing_subscriber::EnvFilter;

/// Global site configuration, set from command line
static SITE_CONFIG: OnceLock<SiteConfig> = OnceLock::new();

/// Site copy loaded at startup
static SITE_CONTENT: OnceLock<Arc<ContentSource>> = OnceLock::new();

/// Get the site configuration (set from command line or default)
pub fn get_site_config() -> SiteConfig {
    SITE_CONFIG.get().cloned().unwrap_or_default()
}

/// Get the site copy (loaded at startup, bundled copy otherwise)
pub fn get_site_content() -> Arc<ContentSource> {
    SITE_CONTENT
        .get_or_init(|| match ContentSource::bundled() {
            Ok(source) => Arc::new(source),
            Err(e) => {
                tracing::error!("Failed to load bundled copy: {}", e);
                Arc::new(ContentSource::new(DEFAULT_LOCALE))
            }
        })
        .clone()
}

/// DEMORPH - face morphing attack detection
#[derive(Parser, Debug)]
#[command(name = "demorph-site")]
#[command(about = "DEMORPH marketing site")]
struct Args {
    /// Locale to render (e.g. en, de-AT)
    #[arg(short, long, default_value = DEFAULT_LOCALE)]
    locale: String,

    /// Locale used for keys the requested locale lacks
    #[arg(long, default_value = DEFAULT_LOCALE)]
    fallback_locale: String,

    /// Directory with additional <locale>.json copy files
    #[arg(long)]
    locale_dir: Option<PathBuf>,

    /// Window width in logical pixels (desktop)
    #[arg(long, default_value_t = 1280.0)]
    width: f64,

    /// Window height in logical pixels (desktop)
    #[arg(long, default_value_t = 900.0)]
    height: f64,
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    #[cfg(feature = "desktop")]
    let args = Args::parse();
    // No command line in the browser
    #[cfg(not(feature = "desktop"))]
    let args = Args::parse_from(["demorph-site"]);

    let mut config = SiteConfig::default()
        .with_locale(&args.locale)
        .with_fallback_locale(&args.fallback_locale);
    if let Some(dir) = &args.locale_dir {
        config = config.with_locale_dir(dir);
    }

    let content = Arc::new(context::load_content(&config).context("Failed to load site copy")?);
    let translator = content.translator(&config.locale);
    let title = translator.t("meta.title");

    tracing::info!(
        requested = %config.locale,
        locale = %translator.locale(),
        "Starting DEMORPH site"
    );

    let _ = SITE_CONFIG.set(config);
    let _ = SITE_CONTENT.set(content);

    launch(&args, &title);
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    #[cfg(feature = "desktop")]
    tracing_subscriber::fmt().with_env_filter(filter).init();
    // wasm has no system clock for timestamps
    #[cfg(not(feature = "desktop"))]
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .init();
}

#[cfg(feature = "desktop")]
fn launch(args: &Args, title: &str) {
    use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(title)
            .with_inner_size(LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}

#[cfg(not(feature = "desktop"))]
fn launch(_args: &Args, _title: &str) {
    dioxus::launch(app::App);
}
