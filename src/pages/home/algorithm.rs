//! Algorithm Section
//!
//! Ring label on one side, bullet cards on the other.

use demorph_core::content::FeatureCardData;
use demorph_ui::Section;
use dioxus::prelude::*;

use super::SectionHeading;
use crate::components::BulletCard;
use crate::context::use_translator;

#[component]
pub fn Algorithm() -> Element {
    let t = use_translator();
    let ring = t.t("algorithm.ring");
    let cards: Vec<FeatureCardData> = t.records("algorithm.cards");

    rsx! {
        Section { id: "algorithm",
            SectionHeading { heading: t.t("algorithm.heading") }
            div { class: "flex flex-col items-center gap-10 lg:flex-row lg:items-start",
                div { class: "flex aspect-square w-64 shrink-0 items-center justify-center rounded-full border-8 border-primary bg-gradient-to-br from-primary/30 to-transparent",
                    p { class: "whitespace-pre-line text-center font-primary font-semibold text-2xl text-white", "{ring}" }
                }
                div { class: "grid w-full gap-4 md:grid-cols-2",
                    for (idx, card) in cards.iter().enumerate() {
                        BulletCard { key: "{idx}", text: card.text.clone(), class: "h-fit".to_string() }
                    }
                }
            }
        }
    }
}
