//! Card Component
//!
//! Rounded content panel. The `theme` axis picks its background.

use std::sync::OnceLock;

use demorph_core::{Selection, VariantSpec, VariantValue};
use dioxus::prelude::*;

const CARD_BASE: &str = "block text-white/90 text-xs font-secondary p-5 rounded-lg transition-colors";

static CARD_VARIANTS: OnceLock<VariantSpec> = OnceLock::new();

pub fn card_variants() -> &'static VariantSpec {
    CARD_VARIANTS.get_or_init(|| {
        VariantSpec::builder(CARD_BASE)
            .axis(
                CardTheme::AXIS,
                CardTheme::default().key(),
                [
                    ("lightGray", "bg-foreground"),
                    ("darkGray", "bg-dark-gray"),
                    (
                        "gradient",
                        "bg-gradient-to-br from-primary via-foreground to-foreground",
                    ),
                ],
            )
            .build()
            .expect("card variant spec is well-formed")
    })
}

/// Card background
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum CardTheme {
    #[default]
    LightGray,
    DarkGray,
    /// Primary-to-foreground diagonal gradient
    Gradient,
}

impl VariantValue for CardTheme {
    const AXIS: &'static str = "theme";

    fn key(&self) -> &'static str {
        match self {
            CardTheme::LightGray => "lightGray",
            CardTheme::DarkGray => "darkGray",
            CardTheme::Gradient => "gradient",
        }
    }
}

pub fn card_class(theme: Option<CardTheme>, extra: Option<&str>) -> String {
    card_variants().class(&Selection::new().with(theme), extra)
}

#[component]
pub fn Card(
    #[props(default)] theme: Option<CardTheme>,
    #[props(default)] class: Option<String>,
    children: Element,
) -> Element {
    let class = card_class(theme, class.as_deref());

    rsx! {
        div { class: "{class}", {children} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_is_light_gray() {
        let class = card_class(None, None);
        assert!(class.split_whitespace().any(|t| t == "bg-foreground"));
    }

    #[test]
    fn gradient_replaces_background_color() {
        let class = card_class(Some(CardTheme::Gradient), None);
        assert!(class.contains("bg-gradient-to-br"));
        assert!(class.contains("from-primary"));
        assert!(!class.split_whitespace().any(|t| t == "bg-foreground"));
    }

    #[test]
    fn override_layout_classes() {
        let class = card_class(Some(CardTheme::DarkGray), Some("flex flex-col gap-4 h-fit"));
        let tokens: Vec<&str> = class.split_whitespace().collect();
        assert!(tokens.contains(&"flex"));
        assert!(!tokens.contains(&"block"));
        assert!(tokens.contains(&"bg-dark-gray"));
        assert!(tokens.contains(&"h-fit"));
    }
}
