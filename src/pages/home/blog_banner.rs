//! Blog Banner Section

use demorph_core::content::CtaData;
use demorph_ui::{ButtonIntent, ButtonLink, ButtonSize, Section};
use dioxus::prelude::*;

use crate::context::use_translator;

#[component]
pub fn BlogBanner() -> Element {
    let t = use_translator();
    let heading = t.t("blog.heading");
    let subheading = t.t("blog.subheading");
    let cta: Option<CtaData> = t.record("blog.cta");

    rsx! {
        Section { id: "blog",
            div { class: "flex flex-col items-start gap-6 rounded-4xl bg-accent p-8 md:flex-row md:items-center md:justify-between md:p-12",
                div { class: "flex max-w-xl flex-col gap-3",
                    h2 { class: "font-primary font-bold text-2xl md:text-3xl text-white", "{heading}" }
                    p { class: "text-sm text-white/80 leading-relaxed", "{subheading}" }
                }
                if let Some(cta) = &cta {
                    ButtonLink {
                        href: cta.href.clone(),
                        external: true,
                        intent: ButtonIntent::White,
                        size: ButtonSize::Large,
                        title: cta.label.clone(),
                        "{cta.label}"
                    }
                }
            }
        }
    }
}
