//! About Section
//!
//! Three cards stacked in the main column, the fourth alone beside them.

use demorph_core::content::AboutCardData;
use demorph_core::FallbackMap;
use demorph_ui::{IconKind, Section};
use dioxus::prelude::*;

use super::SectionHeading;
use crate::components::IconCard;
use crate::context::use_translator;

const MAIN_COLUMN: usize = 3;

/// Icon keys used by about cards; unknown keys get the activity mark.
pub fn about_icons() -> FallbackMap<IconKind> {
    FallbackMap::new(
        IconKind::Activity,
        [
            ("scan", IconKind::Search),
            ("activity", IconKind::Activity),
            ("lock", IconKind::Lock),
            ("file", IconKind::FileText),
        ],
    )
}

#[component]
pub fn About() -> Element {
    let t = use_translator();
    let icons = about_icons();
    let cards: Vec<AboutCardData> = t.records("about.cards");
    let (main, side) = cards.split_at(cards.len().min(MAIN_COLUMN));

    rsx! {
        Section { id: "about",
            SectionHeading {
                heading: t.t("about.heading"),
                subheading: t.t("about.subheading"),
            }
            div { class: "grid gap-4 md:grid-cols-3",
                div { class: "flex flex-col gap-4 md:col-span-2",
                    for (idx, card) in main.iter().enumerate() {
                        IconCard {
                            key: "{idx}",
                            icon: *icons.get(&card.icon),
                            layout: card.layout,
                            heading: card.heading.clone(),
                            text: card.text.clone(),
                        }
                    }
                }
                if let Some(card) = side.first() {
                    IconCard {
                        icon: *icons.get(&card.icon),
                        layout: card.layout,
                        heading: card.heading.clone(),
                        text: card.text.clone(),
                        class: "h-full md:justify-center".to_string(),
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_icon_keys_are_mapped() {
        let icons = about_icons();
        assert_eq!(*icons.get("scan"), IconKind::Search);
        assert_eq!(*icons.get("lock"), IconKind::Lock);
        assert_eq!(*icons.get("file"), IconKind::FileText);
    }

    #[test]
    fn unknown_key_uses_activity() {
        assert_eq!(*about_icons().get("fingerprint"), IconKind::Activity);
    }
}
