//! Integration tests for the bundled copy and locale directories

use std::fs;
use std::sync::Arc;

use demorph_core::content::{
    AboutCardData, BenefitPointData, CardLayout, CtaData, FeatureCardData, NavLink, RichSegment,
    SocialLink,
};
use demorph_core::{ContentSource, SiteError};

fn bundled() -> Arc<ContentSource> {
    let _ = tracing_subscriber::fmt::try_init();
    Arc::new(ContentSource::bundled().expect("bundled copy parses"))
}

#[test]
fn bundled_copy_has_every_home_section() {
    let t = bundled().translator("en");

    for key in [
        "meta.title",
        "navbar.brand",
        "navbar.menu_open",
        "navbar.menu_close",
        "hero.headline",
        "hero.paragraph",
        "about.heading",
        "about.subheading",
        "feature.heading",
        "blog.heading",
        "blog.subheading",
        "algorithm.heading",
        "algorithm.ring",
        "benefit.heading",
        "benefit.subheading",
        "footer.message",
        "footer.copyright_href",
        "error.heading",
        "error.message",
        "error.home",
    ] {
        assert_ne!(t.t(key), key, "missing copy for {key}");
    }
}

#[test]
fn bundled_records_decode() {
    let t = bundled().translator("en");

    let links: Vec<NavLink> = t.records("navbar.links");
    assert!(!links.is_empty());
    assert!(links.iter().all(|link| link.href.starts_with('#')));

    for key in ["navbar.cta", "hero.cta", "blog.cta"] {
        assert!(t.record::<CtaData>(key).is_some(), "{key} should be a CTA");
    }

    let about: Vec<AboutCardData> = t.records("about.cards");
    assert_eq!(about.len(), 4);
    assert_eq!(about[0].layout, CardLayout::Horizontal);
    assert_eq!(about[3].layout, CardLayout::Vertical);

    let features: Vec<FeatureCardData> = t.records("feature.cards");
    assert_eq!(features.len(), 4);

    let bullets: Vec<FeatureCardData> = t.records("algorithm.cards");
    assert!(!bullets.is_empty());

    let points: Vec<BenefitPointData> = t.records("benefit.points");
    assert_eq!(points.len(), 3);

    let socials: Vec<SocialLink> = t.records("footer.socials");
    assert_eq!(
        socials.iter().map(|s| s.icon.as_str()).collect::<Vec<_>>(),
        ["linkedin", "twitter", "github"]
    );
}

#[test]
fn copyright_has_one_link_slot() {
    let t = bundled().translator("en");
    let segments = t.rich("footer.copyright", &[("year", "2025")]);
    let tagged: Vec<_> = segments
        .iter()
        .filter(|s| matches!(s, RichSegment::Tagged { index: 0, .. }))
        .collect();
    assert_eq!(tagged.len(), 1);
    assert!(matches!(&segments[0], RichSegment::Text(text) if text.contains("2025")));
}

#[test]
fn locale_dir_adds_and_overrides() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("de.json"),
        r#"{ "hero": { "headline": "Zwei Gesichter." } }"#,
    )
    .unwrap();
    fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

    let mut source = ContentSource::bundled().unwrap();
    assert_eq!(source.load_dir(dir.path()).unwrap(), 1);

    let source = Arc::new(source);
    let t = source.translator("de-DE");
    assert_eq!(t.locale(), "de");
    assert_eq!(t.t("hero.headline"), "Zwei Gesichter.");
    // Untranslated keys come from the fallback locale
    assert_eq!(t.t("about.heading"), "What is a morphing attack?");
}

#[test]
fn locale_dir_reports_bad_json() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("fr.json"), "{ broken").unwrap();

    let mut source = ContentSource::bundled().unwrap();
    let err = source.load_dir(dir.path()).unwrap_err();
    assert!(matches!(err, SiteError::ContentParse { ref locale, .. } if locale == "fr"));
}

#[test]
fn missing_locale_dir_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut source = ContentSource::bundled().unwrap();
    let err = source.load_dir(&dir.path().join("absent")).unwrap_err();
    assert!(matches!(err, SiteError::Io { .. }));
}
