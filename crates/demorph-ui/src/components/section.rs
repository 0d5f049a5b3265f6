//! Section Component
//!
//! Full-width band of the page, addressable by `#id` from the navbar.

use demorph_core::merge_classes;
use dioxus::prelude::*;

const SECTION_BASE: &str = "w-full px-4 md:px-8 lg:px-[12vw] pt-20";

/// Page band with responsive horizontal padding
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Section { id: "about", class: "min-h-screen bg-dark-gray".to_string(),
///         h3 { "About" }
///     }
/// }
/// ```
#[component]
pub fn Section(
    id: String,
    #[props(default)] class: Option<String>,
    children: Element,
) -> Element {
    let class = merge_classes([SECTION_BASE, class.as_deref().unwrap_or_default()]);

    rsx! {
        section { id: "{id}", class: "{class}", {children} }
    }
}
