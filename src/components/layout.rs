//! Default page chrome: navbar, page body, footer.

use demorph_core::ClassList;
use dioxus::prelude::*;

use crate::components::{Footer, Navbar};

const LAYOUT_BASE: &str = "relative flex flex-col min-h-screen bg-background text-white";

#[component]
pub fn DefaultLayout(#[props(default)] class: Option<String>, children: Element) -> Element {
    let class = ClassList::new().push(LAYOUT_BASE).push_opt(class).merge();

    rsx! {
        div { class: "{class}",
            Navbar {}
            main { class: "flex-1", {children} }
            Footer {}
        }
    }
}
