//! Hero Section
//!
//! Full-height banner with art-directed background, headline, and CTA.

use demorph_core::content::CtaData;
use demorph_ui::{ButtonLink, ButtonSize, Section};
use dioxus::prelude::*;

use crate::context::use_translator;

const HERO_DESKTOP: Asset = asset!("/assets/hero-desktop.svg");
const HERO_MOBILE: Asset = asset!("/assets/hero-mobile.svg");

#[component]
pub fn Hero() -> Element {
    let t = use_translator();
    let headline = t.t("hero.headline");
    let paragraph = t.t("hero.paragraph");
    let cta: Option<CtaData> = t.record("hero.cta");

    rsx! {
        Section {
            id: "hero",
            class: "relative flex min-h-screen items-end overflow-hidden pb-10 md:pb-20 lg:pb-32".to_string(),
            picture {
                source { "media": "(min-width: 768px)", "srcset": HERO_DESKTOP }
                img {
                    class: "absolute inset-0 -z-10 h-full w-full object-cover",
                    src: HERO_MOBILE,
                    alt: "",
                }
            }
            div { class: "flex max-w-3xl flex-col gap-6",
                h1 { class: "whitespace-pre-line font-primary font-bold text-4xl md:text-6xl leading-tight text-white",
                    "{headline}"
                }
                p { class: "max-w-xl text-sm md:text-base text-white/80 leading-relaxed", "{paragraph}" }
                if let Some(cta) = &cta {
                    ButtonLink { href: cta.href.clone(), size: ButtonSize::Large, "{cta.label}" }
                }
            }
        }
    }
}
