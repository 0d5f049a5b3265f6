//! Step Card Component
//!
//! Numbered card for the "how it works" grid.

use demorph_core::ClassList;
use demorph_ui::{Card, CardTheme};
use dioxus::prelude::*;

/// Two-digit step label (`1` -> `01`)
pub fn step_label(step: usize) -> String {
    format!("{step:02}")
}

/// Numbered card
///
/// # Examples
///
/// ```rust,ignore
/// rsx! {
///     StepCard { step: 1, text: "Upload a passport photo." }
/// }
/// ```
#[component]
pub fn StepCard(
    /// 1-based position in the sequence
    step: usize,
    text: String,
    #[props(default = CardTheme::Gradient)] theme: CardTheme,
    #[props(default)] class: Option<String>,
) -> Element {
    let class = ClassList::new()
        .push("flex flex-col justify-between gap-10 min-h-40 p-6")
        .push_opt(class)
        .merge();

    rsx! {
        Card { theme: theme, class: class,
            span { class: "font-primary font-bold text-3xl text-white/40", "{step_label(step)}" }
            p { class: "text-sm leading-relaxed", "{text}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_labels_are_zero_padded() {
        assert_eq!(step_label(1), "01");
        assert_eq!(step_label(4), "04");
        assert_eq!(step_label(12), "12");
    }
}
