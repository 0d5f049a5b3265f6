//! Bullet Card Component
//!
//! Dot-marked paragraph on a dark card, used by the algorithm section.

use demorph_core::ClassList;
use demorph_ui::{Card, CardTheme};
use dioxus::prelude::*;

const BULLET_DOT: &str = "mt-1 h-3 w-3 shrink-0 rounded-full bg-primary";

#[component]
pub fn BulletCard(text: String, #[props(default)] class: Option<String>) -> Element {
    let class = ClassList::new()
        .push("flex items-start gap-3")
        .push_opt(class)
        .merge();

    rsx! {
        Card { theme: CardTheme::DarkGray, class: class,
            span { class: BULLET_DOT, "aria-hidden": "true" }
            p { class: "text-sm leading-relaxed", "{text}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bullet_page() -> Element {
        rsx! {
            BulletCard { text: "Robust to JPEG recompression.", class: "h-fit".to_string() }
        }
    }

    #[test]
    fn dot_precedes_text() {
        let mut dom = VirtualDom::new(bullet_page);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        let dot = html.find(BULLET_DOT).expect("bullet dot rendered");
        let text = html.find("Robust to JPEG recompression.").expect("text rendered");
        assert!(dot < text);
        assert!(html.contains("h-fit"));
        assert!(html.contains("bg-dark-gray"));
    }
}
