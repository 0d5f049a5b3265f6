//! Brand Component
//!
//! Logo plus wordmark, shared by the navbar and footer.

use dioxus::prelude::*;

use crate::context::use_translator;

const LOGO: Asset = asset!("/assets/demorph-logo.svg");

#[component]
pub fn Brand(#[props(default = 32)] size: u32) -> Element {
    let t = use_translator();
    let name = t.t("navbar.brand");
    let alt = t.t("navbar.logo_alt");

    rsx! {
        span { class: "flex items-center gap-2",
            img { src: LOGO, alt: "{alt}", width: "{size}", height: "{size}" }
            span { class: "font-primary font-bold text-lg tracking-wide text-white", "{name}" }
        }
    }
}
