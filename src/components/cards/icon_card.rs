//! Icon Card Component
//!
//! Icon badge, heading, and text. Horizontal cards put the badge beside
//! the text from `lg` up; vertical cards always stack.

use demorph_core::content::CardLayout;
use demorph_core::ClassList;
use demorph_ui::{Card, Icon, IconKind};
use dioxus::prelude::*;

pub fn icon_card_class(layout: CardLayout, extra: Option<&str>) -> String {
    ClassList::new()
        .push("flex flex-col gap-4")
        .push_if(layout == CardLayout::Horizontal, "lg:flex-row lg:items-start")
        .push_opt(extra)
        .merge()
}

#[component]
pub fn IconCard(
    icon: IconKind,
    heading: String,
    text: String,
    #[props(default)] layout: CardLayout,
    #[props(default)] class: Option<String>,
) -> Element {
    let class = icon_card_class(layout, class.as_deref());

    rsx! {
        Card { class: class,
            div { class: "w-fit shrink-0 rounded-lg bg-primary p-2 text-white",
                Icon { kind: icon }
            }
            div { class: "flex flex-col gap-2",
                h3 { class: "font-primary font-semibold text-base text-white", "{heading}" }
                p { class: "leading-relaxed", "{text}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_cards_go_row_on_large_screens() {
        let class = icon_card_class(CardLayout::Horizontal, None);
        assert!(class.contains("lg:flex-row"));
    }

    #[test]
    fn vertical_cards_stay_stacked() {
        let class = icon_card_class(CardLayout::Vertical, None);
        assert!(!class.contains("lg:flex-row"));
        assert!(class.contains("flex-col"));
    }

    #[test]
    fn caller_class_overrides_gap() {
        let class = icon_card_class(CardLayout::Vertical, Some("gap-6 h-full"));
        let tokens: Vec<&str> = class.split_whitespace().collect();
        assert!(tokens.contains(&"gap-6"));
        assert!(!tokens.contains(&"gap-4"));
        assert!(tokens.contains(&"h-full"));
    }
}
