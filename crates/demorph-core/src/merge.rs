//! Utility class merging
//!
//! Tailwind-style class strings are built by concatenating fragments from
//! several places (a component's base classes, its variant axes, the caller).
//! Concatenation alone leaves conflicting utilities in the list, e.g.
//! `p-5 ... p-2`, and the browser then applies whichever rule the stylesheet
//! happens to emit last. [`merge_classes`] removes the losers so the
//! rightmost utility for each property group is the only one left.
//!
//! ## Rules
//!
//! - A token is `modifiers:base`, where modifiers (`hover:`, `md:` ...) are
//!   order-insensitive. `!` marks importance and is part of the identity.
//! - The base utility maps to a property group (`px-4` → `px`,
//!   `text-sm` → `font-size`, `text-white/90` → `text-color`).
//! - Scanning right to left, a token is dropped when a later token with the
//!   same modifiers already claimed its group, or a broader group covering it
//!   (`p` covers `px`, `pt` ...).
//! - Tokens with no known group are kept, only exact duplicates collapse.
//! - Survivors keep their original relative order.

use std::borrow::Cow;
use std::collections::HashSet;
use std::fmt;

/// Merge class fragments into one class string, last utility wins.
///
/// # Example
///
/// ```
/// use demorph_core::merge_classes;
///
/// let merged = merge_classes(["p-5 rounded-lg text-xs", "p-2 text-white"]);
/// assert_eq!(merged, "rounded-lg text-xs p-2 text-white");
/// ```
pub fn merge_classes<'a, I>(fragments: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let tokens: Vec<&str> = fragments
        .into_iter()
        .flat_map(str::split_whitespace)
        .collect();

    let mut exact: HashSet<&str> = HashSet::new();
    let mut claimed: HashSet<(String, Cow<'static, str>)> = HashSet::new();
    let mut keep = vec![false; tokens.len()];

    for (idx, token) in tokens.iter().enumerate().rev() {
        if !exact.insert(*token) {
            continue;
        }

        let parsed = ParsedClass::parse(token);
        let Some(group) = utility_group(parsed.base) else {
            keep[idx] = true;
            continue;
        };

        let scope = parsed.scope();
        if claimed.contains(&(scope.clone(), group.clone())) {
            continue;
        }
        for covered in covered_groups(&group) {
            claimed.insert((scope.clone(), Cow::Borrowed(*covered)));
        }
        claimed.insert((scope, group));
        keep[idx] = true;
    }

    tokens
        .iter()
        .zip(keep)
        .filter_map(|(token, kept)| kept.then_some(*token))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Builder for conditional class lists, merged on output
///
/// # Example
///
/// ```
/// use demorph_core::ClassList;
///
/// let horizontal = true;
/// let class = ClassList::new()
///     .push("flex flex-col gap-4")
///     .push_if(horizontal, "lg:flex-row lg:items-start")
///     .push_opt(Some("h-full"))
///     .merge();
/// assert_eq!(class, "flex flex-col gap-4 lg:flex-row lg:items-start h-full");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    fragments: Vec<String>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fragment. Blank fragments are ignored.
    pub fn push(mut self, fragment: impl AsRef<str>) -> Self {
        let fragment = fragment.as_ref().trim();
        if !fragment.is_empty() {
            self.fragments.push(fragment.to_string());
        }
        self
    }

    /// Append a fragment only when `condition` holds.
    pub fn push_if(self, condition: bool, fragment: impl AsRef<str>) -> Self {
        if condition {
            self.push(fragment)
        } else {
            self
        }
    }

    /// Append a fragment when present.
    pub fn push_opt<S: AsRef<str>>(self, fragment: Option<S>) -> Self {
        match fragment {
            Some(fragment) => self.push(fragment),
            None => self,
        }
    }

    /// Fragments in push order, unmerged
    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    /// Merge all fragments with [`merge_classes`].
    pub fn merge(&self) -> String {
        merge_classes(self.fragments.iter().map(String::as_str))
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.merge())
    }
}

/// A class token split into modifiers, importance and base utility
struct ParsedClass<'a> {
    modifiers: Vec<&'a str>,
    important: bool,
    base: &'a str,
}

impl<'a> ParsedClass<'a> {
    fn parse(token: &'a str) -> Self {
        let mut modifiers = Vec::new();
        let mut depth = 0usize;
        let mut start = 0;

        for (idx, ch) in token.char_indices() {
            match ch {
                '[' | '(' => depth += 1,
                ']' | ')' => depth = depth.saturating_sub(1),
                ':' if depth == 0 => {
                    modifiers.push(&token[start..idx]);
                    start = idx + 1;
                }
                _ => {}
            }
        }

        let mut base = &token[start..];
        let mut important = false;
        if let Some(rest) = base.strip_prefix('!') {
            base = rest;
            important = true;
        } else if let Some(rest) = base.strip_suffix('!') {
            base = rest;
            important = true;
        }
        // Negative values share a group with their positive form
        let base = base.strip_prefix('-').unwrap_or(base);

        modifiers.sort_unstable();
        Self {
            modifiers,
            important,
            base,
        }
    }

    /// Identity of the conditions under which this utility applies
    fn scope(&self) -> String {
        let mut scope = self.modifiers.join(":");
        if self.important {
            scope.push('!');
        }
        scope
    }
}

/// Property group a base utility belongs to, if known
fn utility_group(base: &str) -> Option<Cow<'static, str>> {
    if let Some(property) = arbitrary_property(base) {
        return Some(Cow::Owned(format!("[{property}]")));
    }
    if let Some(group) = keyword_group(base) {
        return Some(Cow::Borrowed(group));
    }

    let special = if let Some(rest) = base.strip_prefix("text-") {
        Some(text_group(rest))
    } else if let Some(rest) = base.strip_prefix("bg-") {
        Some(bg_group(rest))
    } else if let Some(rest) = base.strip_prefix("font-") {
        Some(font_group(rest))
    } else if base == "border" {
        Some("border-w")
    } else if let Some(rest) = base.strip_prefix("border-") {
        Some(border_group(rest))
    } else if base == "ring" {
        Some("ring-w")
    } else if let Some(rest) = base.strip_prefix("ring-") {
        Some(ring_group(rest))
    } else if base == "shadow" {
        Some("shadow")
    } else if let Some(rest) = base.strip_prefix("shadow-") {
        Some(shadow_group(rest))
    } else if base == "outline" {
        Some("outline-style")
    } else if let Some(rest) = base.strip_prefix("outline-") {
        Some(outline_group(rest))
    } else if let Some(rest) = base.strip_prefix("object-") {
        Some(object_group(rest))
    } else if let Some(rest) = base.strip_prefix("decoration-") {
        Some(decoration_group(rest))
    } else if let Some(rest) = base.strip_prefix("stroke-") {
        Some(stroke_group(rest))
    } else if let Some(rest) = base.strip_prefix("list-") {
        Some(list_group(rest))
    } else {
        None
    };

    special.or_else(|| prefix_group(base)).map(Cow::Borrowed)
}

/// `[mask-image:radial-gradient(...)]` → `mask-image`
fn arbitrary_property(base: &str) -> Option<&str> {
    let inner = base.strip_prefix('[')?.strip_suffix(']')?;
    let (property, _) = inner.split_once(':')?;
    (!property.is_empty()).then_some(property)
}

fn keyword_group(base: &str) -> Option<&'static str> {
    let group = match base {
        "block" | "inline-block" | "inline" | "flex" | "inline-flex" | "table"
        | "inline-table" | "grid" | "inline-grid" | "contents" | "flow-root"
        | "list-item" | "hidden" => "display",
        "static" | "fixed" | "absolute" | "relative" | "sticky" => "position",
        "visible" | "invisible" | "collapse" => "visibility",
        "flex-row" | "flex-row-reverse" | "flex-col" | "flex-col-reverse" => "flex-direction",
        "flex-wrap" | "flex-wrap-reverse" | "flex-nowrap" => "flex-wrap",
        "truncate" => "text-overflow",
        "underline" | "overline" | "line-through" | "no-underline" => "text-decoration-line",
        "uppercase" | "lowercase" | "capitalize" | "normal-case" => "text-transform",
        "italic" | "not-italic" => "font-style",
        "antialiased" | "subpixel-antialiased" => "font-smoothing",
        "sr-only" | "not-sr-only" => "sr",
        "isolate" | "isolation-auto" => "isolation",
        "container" => "container",
        "rounded" => "rounded",
        "transition" => "transition",
        "blur" => "blur",
        "grow" => "grow",
        "shrink" => "shrink",
        _ => return None,
    };
    Some(group)
}

/// Prefix families, most specific first
const PREFIX_GROUPS: &[(&str, &str)] = &[
    ("min-w", "min-w"),
    ("min-h", "min-h"),
    ("max-w", "max-w"),
    ("max-h", "max-h"),
    ("size", "size"),
    ("w", "w"),
    ("h", "h"),
    ("px", "px"),
    ("py", "py"),
    ("pt", "pt"),
    ("pr", "pr"),
    ("pb", "pb"),
    ("pl", "pl"),
    ("ps", "ps"),
    ("pe", "pe"),
    ("p", "p"),
    ("mx", "mx"),
    ("my", "my"),
    ("mt", "mt"),
    ("mr", "mr"),
    ("mb", "mb"),
    ("ml", "ml"),
    ("ms", "ms"),
    ("me", "me"),
    ("m", "m"),
    ("space-x", "space-x"),
    ("space-y", "space-y"),
    ("gap-x", "gap-x"),
    ("gap-y", "gap-y"),
    ("gap", "gap"),
    ("inset-x", "inset-x"),
    ("inset-y", "inset-y"),
    ("inset", "inset"),
    ("top", "top"),
    ("right", "right"),
    ("bottom", "bottom"),
    ("left", "left"),
    ("start", "start"),
    ("end", "end"),
    ("z", "z"),
    ("order", "order"),
    ("grid-cols", "grid-cols"),
    ("grid-rows", "grid-rows"),
    ("grid-flow", "grid-flow"),
    ("col-span", "col-span"),
    ("col-start", "col-start"),
    ("col-end", "col-end"),
    ("row-span", "row-span"),
    ("row-start", "row-start"),
    ("row-end", "row-end"),
    ("auto-cols", "auto-cols"),
    ("auto-rows", "auto-rows"),
    ("flex", "flex"),
    ("basis", "basis"),
    ("grow", "grow"),
    ("shrink", "shrink"),
    ("justify-items", "justify-items"),
    ("justify-self", "justify-self"),
    ("justify", "justify-content"),
    ("items", "align-items"),
    ("content", "align-content"),
    ("self", "align-self"),
    ("place-content", "place-content"),
    ("place-items", "place-items"),
    ("place-self", "place-self"),
    ("overflow-x", "overflow-x"),
    ("overflow-y", "overflow-y"),
    ("overflow", "overflow"),
    ("aspect", "aspect"),
    ("columns", "columns"),
    ("float", "float"),
    ("clear", "clear"),
    ("box", "box-sizing"),
    ("whitespace", "whitespace"),
    ("break", "break"),
    ("leading", "leading"),
    ("tracking", "tracking"),
    ("line-clamp", "line-clamp"),
    ("indent", "indent"),
    ("align", "vertical-align"),
    ("underline-offset", "underline-offset"),
    ("rounded-tl", "rounded-tl"),
    ("rounded-tr", "rounded-tr"),
    ("rounded-br", "rounded-br"),
    ("rounded-bl", "rounded-bl"),
    ("rounded-t", "rounded-t"),
    ("rounded-r", "rounded-r"),
    ("rounded-b", "rounded-b"),
    ("rounded-l", "rounded-l"),
    ("rounded-ss", "rounded-ss"),
    ("rounded-se", "rounded-se"),
    ("rounded-es", "rounded-es"),
    ("rounded-ee", "rounded-ee"),
    ("rounded-s", "rounded-s"),
    ("rounded-e", "rounded-e"),
    ("rounded", "rounded"),
    ("opacity", "opacity"),
    ("mix-blend", "mix-blend"),
    ("from", "gradient-from"),
    ("via", "gradient-via"),
    ("to", "gradient-to"),
    ("backdrop-blur", "backdrop-blur"),
    ("blur", "blur"),
    ("brightness", "brightness"),
    ("contrast", "contrast"),
    ("grayscale", "grayscale"),
    ("drop-shadow", "drop-shadow"),
    ("transition", "transition"),
    ("duration", "duration"),
    ("ease", "ease"),
    ("delay", "delay"),
    ("animate", "animate"),
    ("scale-x", "scale-x"),
    ("scale-y", "scale-y"),
    ("scale", "scale"),
    ("rotate", "rotate"),
    ("translate-x", "translate-x"),
    ("translate-y", "translate-y"),
    ("skew-x", "skew-x"),
    ("skew-y", "skew-y"),
    ("origin", "origin"),
    ("cursor", "cursor"),
    ("pointer-events", "pointer-events"),
    ("select", "select"),
    ("resize", "resize"),
    ("appearance", "appearance"),
    ("caret", "caret"),
    ("accent", "accent"),
    ("will-change", "will-change"),
    ("fill", "fill"),
];

fn prefix_group(base: &str) -> Option<&'static str> {
    PREFIX_GROUPS.iter().find_map(|(prefix, group)| {
        let rest = base.strip_prefix(prefix)?;
        (rest.is_empty() || rest.starts_with('-')).then_some(*group)
    })
}

const FONT_SIZES: &[&str] = &[
    "xs", "sm", "base", "md", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl",
    "9xl",
];

const FONT_WEIGHTS: &[&str] = &[
    "thin",
    "extralight",
    "light",
    "normal",
    "medium",
    "semibold",
    "bold",
    "extrabold",
    "black",
];

fn text_group(rest: &str) -> &'static str {
    // `text-sm/6` sets font size and line height together
    let size = rest.split_once('/').map_or(rest, |(size, _)| size);
    if FONT_SIZES.contains(&size) || arbitrary_value(size).is_some_and(is_length) {
        return "font-size";
    }

    match rest {
        "left" | "center" | "right" | "justify" | "start" | "end" => "text-align",
        "ellipsis" | "clip" => "text-overflow",
        "wrap" | "nowrap" | "balance" | "pretty" => "text-wrap",
        _ => "text-color",
    }
}

fn bg_group(rest: &str) -> &'static str {
    match rest {
        "none" => "bg-image",
        "fixed" | "local" | "scroll" => "bg-attachment",
        "repeat" | "no-repeat" => "bg-repeat",
        "auto" | "cover" | "contain" => "bg-size",
        "center" | "top" | "bottom" | "left" | "right" | "left-top" | "left-bottom"
        | "right-top" | "right-bottom" => "bg-position",
        value if value.starts_with("gradient-to-")
            || value.starts_with("linear-to-")
            || value.starts_with("[url(") =>
        {
            "bg-image"
        }
        value if value.starts_with("repeat-") => "bg-repeat",
        value if value.starts_with("clip-") => "bg-clip",
        value if value.starts_with("origin-") => "bg-origin",
        value if value.starts_with("blend-") => "bg-blend",
        _ => "bg-color",
    }
}

fn font_group(rest: &str) -> &'static str {
    if FONT_WEIGHTS.contains(&rest) {
        "font-weight"
    } else {
        "font-family"
    }
}

/// (side, width group, color group)
const BORDER_SIDES: &[(&str, &str, &str)] = &[
    ("x", "border-w-x", "border-color-x"),
    ("y", "border-w-y", "border-color-y"),
    ("t", "border-w-t", "border-color-t"),
    ("r", "border-w-r", "border-color-r"),
    ("b", "border-w-b", "border-color-b"),
    ("l", "border-w-l", "border-color-l"),
    ("s", "border-w-s", "border-color-s"),
    ("e", "border-w-e", "border-color-e"),
];

fn border_group(rest: &str) -> &'static str {
    for (side, width, color) in BORDER_SIDES {
        if rest == *side {
            return *width;
        }
        if let Some(value) = rest.strip_prefix(side).and_then(|r| r.strip_prefix('-')) {
            return if is_width(value) { *width } else { *color };
        }
    }

    match rest {
        "solid" | "dashed" | "dotted" | "double" | "hidden" | "none" => "border-style",
        "collapse" | "separate" => "border-collapse",
        value if is_width(value) => "border-w",
        _ => "border-color",
    }
}

fn ring_group(rest: &str) -> &'static str {
    if rest == "inset" {
        return "ring-inset";
    }
    if let Some(value) = rest.strip_prefix("offset-") {
        return if is_width(value) {
            "ring-offset-w"
        } else {
            "ring-offset-color"
        };
    }
    if is_width(rest) {
        "ring-w"
    } else {
        "ring-color"
    }
}

fn shadow_group(rest: &str) -> &'static str {
    match rest {
        "2xs" | "xs" | "sm" | "md" | "lg" | "xl" | "2xl" | "inner" | "none" => "shadow",
        _ => "shadow-color",
    }
}

fn outline_group(rest: &str) -> &'static str {
    match rest {
        "none" | "solid" | "dashed" | "dotted" | "double" | "hidden" => "outline-style",
        value if value.starts_with("offset-") => "outline-offset",
        value if is_width(value) => "outline-w",
        _ => "outline-color",
    }
}

fn decoration_group(rest: &str) -> &'static str {
    match rest {
        "solid" | "double" | "dotted" | "dashed" | "wavy" => "decoration-style",
        "auto" | "from-font" => "decoration-thickness",
        value if is_width(value) => "decoration-thickness",
        _ => "decoration-color",
    }
}

fn stroke_group(rest: &str) -> &'static str {
    if is_width(rest) {
        "stroke-w"
    } else {
        "stroke-color"
    }
}

fn list_group(rest: &str) -> &'static str {
    match rest {
        "inside" | "outside" => "list-position",
        value if value.starts_with("image-") => "list-image",
        _ => "list-type",
    }
}

fn object_group(rest: &str) -> &'static str {
    match rest {
        "contain" | "cover" | "fill" | "none" | "scale-down" => "object-fit",
        _ => "object-position",
    }
}

fn arbitrary_value(value: &str) -> Option<&str> {
    value.strip_prefix('[')?.strip_suffix(']')
}

fn is_number(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit() || c == '.')
}

fn is_length(value: &str) -> bool {
    if value.starts_with("length:") || value.starts_with("calc(") || value.starts_with("clamp(")
    {
        return true;
    }
    const UNITS: &[&str] = &["px", "rem", "em", "%", "vw", "vh", "ch"];
    UNITS
        .iter()
        .any(|unit| value.strip_suffix(unit).is_some_and(is_number))
}

/// Bare numbers and arbitrary lengths are widths; everything else is a color
fn is_width(value: &str) -> bool {
    is_number(value) || arbitrary_value(value).is_some_and(is_length)
}

/// Narrower groups a utility in `group` overrides as well
fn covered_groups(group: &str) -> &'static [&'static str] {
    match group {
        "p" => &["px", "py", "pt", "pr", "pb", "pl", "ps", "pe"],
        "px" => &["pr", "pl", "ps", "pe"],
        "py" => &["pt", "pb"],
        "m" => &["mx", "my", "mt", "mr", "mb", "ml", "ms", "me"],
        "mx" => &["mr", "ml", "ms", "me"],
        "my" => &["mt", "mb"],
        "inset" => &[
            "inset-x", "inset-y", "top", "right", "bottom", "left", "start", "end",
        ],
        "inset-x" => &["right", "left"],
        "inset-y" => &["top", "bottom"],
        "size" => &["w", "h"],
        "gap" => &["gap-x", "gap-y"],
        "overflow" => &["overflow-x", "overflow-y"],
        "rounded" => &[
            "rounded-t",
            "rounded-r",
            "rounded-b",
            "rounded-l",
            "rounded-s",
            "rounded-e",
            "rounded-tl",
            "rounded-tr",
            "rounded-br",
            "rounded-bl",
            "rounded-ss",
            "rounded-se",
            "rounded-es",
            "rounded-ee",
        ],
        "rounded-t" => &["rounded-tl", "rounded-tr"],
        "rounded-r" => &["rounded-tr", "rounded-br"],
        "rounded-b" => &["rounded-br", "rounded-bl"],
        "rounded-l" => &["rounded-tl", "rounded-bl"],
        "rounded-s" => &["rounded-ss", "rounded-es"],
        "rounded-e" => &["rounded-se", "rounded-ee"],
        "border-w" => &[
            "border-w-x",
            "border-w-y",
            "border-w-t",
            "border-w-r",
            "border-w-b",
            "border-w-l",
            "border-w-s",
            "border-w-e",
        ],
        "border-w-x" => &["border-w-r", "border-w-l"],
        "border-w-y" => &["border-w-t", "border-w-b"],
        "border-color" => &[
            "border-color-x",
            "border-color-y",
            "border-color-t",
            "border-color-r",
            "border-color-b",
            "border-color-l",
            "border-color-s",
            "border-color-e",
        ],
        "border-color-x" => &["border-color-r", "border-color-l"],
        "border-color-y" => &["border-color-t", "border-color-b"],
        "font-size" => &["leading"],
        "scale" => &["scale-x", "scale-y"],
        _ => &[],
    }
}
