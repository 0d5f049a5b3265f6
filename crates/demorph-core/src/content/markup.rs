//! Placeholders and numbered tags inside copy strings
//!
//! - `{{name}}` is replaced by a supplied value.
//! - `<0>inner</0>` marks a span the rendering component wraps in its own
//!   element (a link, a highlight). `<0/>` marks an empty slot.

/// One piece of a rich text string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RichSegment {
    Text(String),
    Tagged { index: usize, text: String },
}

/// Replace `{{name}}` placeholders. Unknown names are left as written.
pub fn interpolate(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find("{{") {
        out.push_str(&rest[..open]);
        let after = &rest[open + 2..];
        let Some(close) = after.find("}}") else {
            out.push_str(&rest[open..]);
            return out;
        };

        let name = after[..close].trim();
        match vars.iter().find(|(key, _)| *key == name) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[open..open + 2 + close + 2]),
        }
        rest = &after[close + 2..];
    }

    out.push_str(rest);
    out
}

/// Split a string on numbered tags.
///
/// Tags without a matching close are kept as literal text.
///
/// ```
/// use demorph_core::content::{parse_rich_text, RichSegment};
///
/// let segments = parse_rich_text("Built by <0>Akshat</0>.");
/// assert_eq!(
///     segments,
///     [
///         RichSegment::Text("Built by ".into()),
///         RichSegment::Tagged { index: 0, text: "Akshat".into() },
///         RichSegment::Text(".".into()),
///     ]
/// );
/// ```
pub fn parse_rich_text(input: &str) -> Vec<RichSegment> {
    let mut segments = Vec::new();
    let mut text = String::new();
    let mut rest = input;

    while let Some(open) = rest.find('<') {
        let after = &rest[open + 1..];

        if let Some(tag) = OpenTag::parse(after) {
            let body = &after[tag.len..];
            if tag.self_closing {
                text.push_str(&rest[..open]);
                flush_text(&mut text, &mut segments);
                segments.push(RichSegment::Tagged {
                    index: tag.index,
                    text: String::new(),
                });
                rest = body;
                continue;
            }

            let close = format!("</{}>", tag.index);
            if let Some(end) = body.find(&close) {
                text.push_str(&rest[..open]);
                flush_text(&mut text, &mut segments);
                segments.push(RichSegment::Tagged {
                    index: tag.index,
                    text: body[..end].to_string(),
                });
                rest = &body[end + close.len()..];
                continue;
            }
        }

        text.push_str(&rest[..=open]);
        rest = after;
    }

    text.push_str(rest);
    flush_text(&mut text, &mut segments);
    segments
}

fn flush_text(text: &mut String, segments: &mut Vec<RichSegment>) {
    if !text.is_empty() {
        segments.push(RichSegment::Text(std::mem::take(text)));
    }
}

struct OpenTag {
    index: usize,
    /// Bytes consumed after the `<`
    len: usize,
    self_closing: bool,
}

impl OpenTag {
    fn parse(after: &str) -> Option<Self> {
        let digits = after.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 {
            return None;
        }
        let index = after[..digits].parse().ok()?;
        let tail = &after[digits..];

        if tail.starts_with('>') {
            Some(Self {
                index,
                len: digits + 1,
                self_closing: false,
            })
        } else if tail.starts_with("/>") {
            Some(Self {
                index,
                len: digits + 2,
                self_closing: true,
            })
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolate_known_placeholders() {
        assert_eq!(
            interpolate("© {{year}} {{ name }}", &[("year", "2025"), ("name", "DEMORPH")]),
            "© 2025 DEMORPH"
        );
    }

    #[test]
    fn interpolate_leaves_unknown_and_unclosed() {
        assert_eq!(interpolate("Hi {{who}}!", &[]), "Hi {{who}}!");
        assert_eq!(interpolate("broken {{year", &[("year", "1")]), "broken {{year");
        assert_eq!(interpolate("plain", &[("x", "y")]), "plain");
    }

    #[test]
    fn rich_text_plain() {
        assert_eq!(
            parse_rich_text("no tags here"),
            [RichSegment::Text("no tags here".into())]
        );
        assert!(parse_rich_text("").is_empty());
    }

    #[test]
    fn rich_text_multiple_tags() {
        assert_eq!(
            parse_rich_text("<0>a</0> and <1>b</1>"),
            [
                RichSegment::Tagged { index: 0, text: "a".into() },
                RichSegment::Text(" and ".into()),
                RichSegment::Tagged { index: 1, text: "b".into() },
            ]
        );
    }

    #[test]
    fn rich_text_unbalanced_is_literal() {
        assert_eq!(
            parse_rich_text("a <0>b < c"),
            [RichSegment::Text("a <0>b < c".into())]
        );
        assert_eq!(
            parse_rich_text("x </0> y"),
            [RichSegment::Text("x </0> y".into())]
        );
    }

    #[test]
    fn rich_text_self_closing_slot() {
        assert_eq!(
            parse_rich_text("line<0/>break"),
            [
                RichSegment::Text("line".into()),
                RichSegment::Tagged { index: 0, text: String::new() },
                RichSegment::Text("break".into()),
            ]
        );
    }
}
