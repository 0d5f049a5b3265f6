//! Button Components
//!
//! One style engine, two elements:
//! - `Button`: a `<button>` for in-page actions
//! - `ButtonLink`: an `<a>` styled as a button, for CTAs and social links
//!
//! Both resolve their classes through [`button_class`].

use std::sync::OnceLock;

use demorph_core::{Selection, VariantSpec, VariantValue};
use dioxus::prelude::*;

const BUTTON_BASE: &str = "inline-flex w-fit items-center justify-center whitespace-nowrap \
    text-sm font-medium font-montserrat transition-colors cursor-pointer \
    focus-visible:outline-none focus-visible:ring-1 focus-visible:ring-ring \
    disabled:pointer-events-none disabled:opacity-50 gap-2";

static BUTTON_VARIANTS: OnceLock<VariantSpec> = OnceLock::new();

/// Variant spec shared by `Button` and `ButtonLink`
pub fn button_variants() -> &'static VariantSpec {
    BUTTON_VARIANTS.get_or_init(|| {
        VariantSpec::builder(BUTTON_BASE)
            .axis(
                ButtonIntent::AXIS,
                ButtonIntent::default().key(),
                [
                    ("primary", "bg-primary text-white hover:bg-primary/90"),
                    ("gray", "bg-dark-gray text-white"),
                    ("white", "bg-white text-accent hover:bg-white/90"),
                ],
            )
            .axis(
                ButtonSize::AXIS,
                ButtonSize::default().key(),
                [
                    ("small", "h-8 px-3 text-xs"),
                    ("medium", "h-9 px-4 py-2"),
                    ("large", "h-10 px-8"),
                    ("icon", "size-9"),
                ],
            )
            .axis(
                ButtonShape::AXIS,
                ButtonShape::default().key(),
                [
                    ("default", "rounded-md"),
                    ("square", "rounded-none"),
                    ("pill", "rounded-full"),
                    ("social", "rounded-4xl"),
                ],
            )
            .build()
            .expect("button variant spec is well-formed")
    })
}

/// Color treatment
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonIntent {
    /// Brand purple, white text
    #[default]
    Primary,
    /// Dark gray, used for footer social links
    Gray,
    /// White with accent text, for use on colored banners
    White,
}

impl VariantValue for ButtonIntent {
    const AXIS: &'static str = "intent";

    fn key(&self) -> &'static str {
        match self {
            ButtonIntent::Primary => "primary",
            ButtonIntent::Gray => "gray",
            ButtonIntent::White => "white",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
    /// Square, icon-only
    Icon,
}

impl VariantValue for ButtonSize {
    const AXIS: &'static str = "size";

    fn key(&self) -> &'static str {
        match self {
            ButtonSize::Small => "small",
            ButtonSize::Medium => "medium",
            ButtonSize::Large => "large",
            ButtonSize::Icon => "icon",
        }
    }
}

/// Corner radius
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonShape {
    #[default]
    Rounded,
    Square,
    Pill,
    Social,
}

impl VariantValue for ButtonShape {
    const AXIS: &'static str = "shape";

    fn key(&self) -> &'static str {
        match self {
            ButtonShape::Rounded => "default",
            ButtonShape::Square => "square",
            ButtonShape::Pill => "pill",
            ButtonShape::Social => "social",
        }
    }
}

/// Resolve button classes. `None` axes use their defaults; `extra` wins last.
pub fn button_class(
    intent: Option<ButtonIntent>,
    size: Option<ButtonSize>,
    shape: Option<ButtonShape>,
    extra: Option<&str>,
) -> String {
    let selection = Selection::new().with(intent).with(size).with(shape);
    button_variants().class(&selection, extra)
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    #[props(default)]
    pub intent: Option<ButtonIntent>,
    #[props(default)]
    pub size: Option<ButtonSize>,
    #[props(default)]
    pub shape: Option<ButtonShape>,
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Leading icon, hidden while loading
    #[props(default)]
    pub icon: Option<Element>,
    #[props(default = false)]
    pub is_loading: bool,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    #[props(default = false)]
    pub disabled: bool,
    /// Optional type attribute (button, submit, reset)
    #[props(default = "button".to_string())]
    pub button_type: String,
    #[props(default)]
    pub aria_label: Option<String>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Variant-styled `<button>`
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         intent: ButtonIntent::Gray,
///         size: ButtonSize::Small,
///         onclick: move |_| open_dialog(),
///         "Details"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let class = button_class(props.intent, props.size, props.shape, props.class.as_deref());

    rsx! {
        button {
            class: "{class}",
            r#type: "{props.button_type}",
            disabled: props.disabled || props.is_loading,
            "aria-busy": props.is_loading,
            "aria-label": props.aria_label.clone(),
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            if !props.is_loading {
                if let Some(icon) = props.icon.clone() {
                    {icon}
                }
            }
            {props.children}
        }
    }
}

/// Properties for the ButtonLink component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonLinkProps {
    pub href: String,
    /// Open in a new tab without leaking the opener
    #[props(default = false)]
    pub external: bool,
    #[props(default)]
    pub intent: Option<ButtonIntent>,
    #[props(default)]
    pub size: Option<ButtonSize>,
    #[props(default)]
    pub shape: Option<ButtonShape>,
    pub children: Element,
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    #[props(default)]
    pub title: Option<String>,
    #[props(default)]
    pub aria_label: Option<String>,
    #[props(default)]
    pub class: Option<String>,
}

/// Anchor rendered with button styling
#[component]
pub fn ButtonLink(props: ButtonLinkProps) -> Element {
    let class = button_class(props.intent, props.size, props.shape, props.class.as_deref());
    let (target, rel) = if props.external {
        (Some("_blank"), Some("noreferrer"))
    } else {
        (None, None)
    };

    rsx! {
        a {
            class: "{class}",
            href: "{props.href}",
            target,
            rel,
            title: props.title.clone(),
            "aria-label": props.aria_label.clone(),
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(class: &str) -> Vec<&str> {
        class.split_whitespace().collect()
    }

    #[test]
    fn defaults_are_primary_medium_rounded() {
        let class = button_class(None, None, None, None);
        let tokens = tokens(&class);
        for expected in ["bg-primary", "h-9", "px-4", "py-2", "rounded-md", "text-sm"] {
            assert!(tokens.contains(&expected), "missing {expected} in {class}");
        }
    }

    #[test]
    fn gray_social_button() {
        let class = button_class(Some(ButtonIntent::Gray), None, Some(ButtonShape::Social), None);
        let tokens = tokens(&class);
        assert!(tokens.contains(&"bg-dark-gray"));
        assert!(tokens.contains(&"rounded-4xl"));
        assert!(!tokens.contains(&"bg-primary"));
        assert!(!tokens.contains(&"rounded-md"));
    }

    #[test]
    fn small_size_replaces_base_text_size() {
        let class = button_class(None, Some(ButtonSize::Small), None, None);
        let tokens = tokens(&class);
        assert!(tokens.contains(&"text-xs"));
        assert!(!tokens.contains(&"text-sm"));
    }

    #[test]
    fn caller_class_wins() {
        let class = button_class(
            Some(ButtonIntent::White),
            Some(ButtonSize::Large),
            None,
            Some("w-full px-2 hidden md:flex"),
        );
        let tokens = tokens(&class);
        assert!(tokens.contains(&"w-full"));
        assert!(!tokens.contains(&"w-fit"));
        assert!(tokens.contains(&"px-2"));
        assert!(!tokens.contains(&"px-8"));
        assert!(tokens.contains(&"hidden"));
        assert!(!tokens.contains(&"inline-flex"));
        assert!(tokens.contains(&"md:flex"));
    }

    #[test]
    fn every_value_is_declared() {
        let spec = button_variants();
        for intent in [ButtonIntent::Primary, ButtonIntent::Gray, ButtonIntent::White] {
            assert!(spec.fragment(ButtonIntent::AXIS, intent.key()).is_some());
        }
        for size in [ButtonSize::Small, ButtonSize::Medium, ButtonSize::Large, ButtonSize::Icon] {
            assert!(spec.fragment(ButtonSize::AXIS, size.key()).is_some());
        }
        for shape in [
            ButtonShape::Rounded,
            ButtonShape::Square,
            ButtonShape::Pill,
            ButtonShape::Social,
        ] {
            assert!(spec.fragment(ButtonShape::AXIS, shape.key()).is_some());
        }
    }
}
