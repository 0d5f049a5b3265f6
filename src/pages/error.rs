//! Error Pages
//!
//! `ErrorPage` is shared by the not-found route and the route error
//! boundary.

use demorph_ui::ButtonLink;
use dioxus::prelude::*;

use crate::components::Brand;
use crate::context::use_translator;

#[component]
pub fn ErrorPage() -> Element {
    let t = use_translator();
    let heading = t.t("error.heading");
    let message = t.t("error.message");
    let home = t.t("error.home");

    rsx! {
        div { class: "flex min-h-screen flex-col items-center justify-center gap-6 bg-background px-4 text-center text-white",
            Brand { size: 48 }
            h1 { class: "font-primary font-bold text-3xl", "{heading}" }
            p { class: "max-w-md text-sm text-white/70", "{message}" }
            ButtonLink { href: "/", "{home}" }
        }
    }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    tracing::debug!(path = %format!("/{}", segments.join("/")), "No route matched");

    rsx! {
        ErrorPage {}
    }
}
