//! Feature Section
//!
//! Numbered steps on a two-row grid; the middle two cards are wider.

use demorph_core::content::FeatureCardData;
use demorph_core::ClassList;
use demorph_ui::Section;
use dioxus::prelude::*;

use super::SectionHeading;
use crate::components::StepCard;
use crate::context::use_translator;

/// Grid span for the card at `idx` (0-based)
fn step_span(idx: usize) -> String {
    ClassList::new()
        .push_if(idx == 1 || idx == 2, "md:col-span-2")
        .merge()
}

#[component]
pub fn Feature() -> Element {
    let t = use_translator();
    let cards: Vec<FeatureCardData> = t.records("feature.cards");

    rsx! {
        Section { id: "features",
            SectionHeading { heading: t.t("feature.heading") }
            div { class: "grid gap-4 md:grid-cols-3",
                for (idx, card) in cards.iter().enumerate() {
                    StepCard {
                        key: "{idx}",
                        step: idx + 1,
                        text: card.text.clone(),
                        class: step_span(idx),
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
    fn middle_cards_are_wide() {
        assert_eq!(step_span(0), "");
        assert_eq!(step_span(1), "md:col-span-2");
        assert_eq!(step_span(2), "md:col-span-2");
        assert_eq!(step_span(3), "");
    }
}
