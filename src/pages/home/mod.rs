//! Home page: every landing section, top to bottom.

mod about;
mod algorithm;
mod benefit;
mod blog_banner;
mod feature;
mod hero;

use dioxus::prelude::*;

use crate::components::DefaultLayout;

use about::About;
use algorithm::Algorithm;
use benefit::Benefit;
use blog_banner::BlogBanner;
use feature::Feature;
use hero::Hero;

#[component]
pub fn Home() -> Element {
    rsx! {
        DefaultLayout {
            Hero {}
            About {}
            Feature {}
            BlogBanner {}
            Algorithm {}
            Benefit {}
        }
    }
}

/// Shared heading for content sections
#[component]
fn SectionHeading(heading: String, #[props(default)] subheading: Option<String>) -> Element {
    rsx! {
        div { class: "mb-10 flex max-w-2xl flex-col gap-3",
            h2 { class: "font-primary font-bold text-3xl md:text-4xl text-white", "{heading}" }
            if let Some(sub) = subheading {
                p { class: "text-sm md:text-base text-white/70 leading-relaxed", "{sub}" }
            }
        }
    }
}
