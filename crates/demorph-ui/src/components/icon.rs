//! Icon Component
//!
//! Inline Lucide-style SVG glyphs, stroked with `currentColor` so they take
//! the text color of their container.

use dioxus::prelude::*;

/// Every glyph the site draws
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum IconKind {
    Search,
    Activity,
    Lock,
    FileText,
    Target,
    Zap,
    Scale,
    Linkedin,
    XTwitter,
    Github,
    Menu,
    Close,
}

#[component]
pub fn Icon(
    kind: IconKind,
    #[props(default = 24)] size: u32,
    #[props(default)] class: Option<String>,
) -> Element {
    let class = class.unwrap_or_default();

    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            class: "{class}",
            "aria-hidden": "true",
            {glyph(kind)}
        }
    }
}

fn glyph(kind: IconKind) -> Element {
    match kind {
        IconKind::Search => rsx! {
            circle { cx: "11", cy: "11", r: "8" }
            path { d: "m21 21-4.3-4.3" }
        },
        IconKind::Activity => rsx! {
            path { d: "M22 12h-4l-3 9L9 3l-3 9H2" }
        },
        IconKind::Lock => rsx! {
            rect { x: "3", y: "11", width: "18", height: "11", rx: "2", ry: "2" }
            path { d: "M7 11V7a5 5 0 0 1 10 0v4" }
        },
        IconKind::FileText => rsx! {
            path { d: "M15 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7Z" }
            path { d: "M14 2v4a2 2 0 0 0 2 2h4" }
            path { d: "M10 9H8" }
            path { d: "M16 13H8" }
            path { d: "M16 17H8" }
        },
        IconKind::Target => rsx! {
            circle { cx: "12", cy: "12", r: "10" }
            circle { cx: "12", cy: "12", r: "6" }
            circle { cx: "12", cy: "12", r: "2" }
        },
        IconKind::Zap => rsx! {
            path { d: "M13 2 3 14h9l-1 8 10-12h-9l1-8z" }
        },
        IconKind::Scale => rsx! {
            path { d: "m16 16 3-8 3 8c-.87.65-1.92 1-3 1s-2.13-.35-3-1Z" }
            path { d: "m2 16 3-8 3 8c-.87.65-1.92 1-3 1s-2.13-.35-3-1Z" }
            path { d: "M7 21h10" }
            path { d: "M12 3v18" }
            path { d: "M3 7h2c2 0 5-1 7-2 2 1 5 2 7 2h2" }
        },
        IconKind::Linkedin => rsx! {
            path { d: "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z" }
            rect { x: "2", y: "9", width: "4", height: "12" }
            circle { cx: "4", cy: "4", r: "2" }
        },
        IconKind::XTwitter => rsx! {
            path { d: "M4 4l11.733 16h4.267l-11.733 -16z" }
            path { d: "M4 20l6.768 -6.768m2.46 -2.46l6.772 -6.772" }
        },
        IconKind::Github => rsx! {
            path { d: "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4" }
            path { d: "M9 18c-4.51 2-5-2-7-2" }
        },
        IconKind::Menu => rsx! {
            path { d: "M4 6h16" }
            path { d: "M4 12h16" }
            path { d: "M4 18h16" }
        },
        IconKind::Close => rsx! {
            path { d: "M18 6 6 18" }
            path { d: "m6 6 12 12" }
        },
    }
}
