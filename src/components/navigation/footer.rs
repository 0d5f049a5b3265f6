//! Footer Component
//!
//! Brand, closing message, social links, and the copyright line with its
//! linked author credit.

use chrono::Datelike;
use demorph_core::content::{RichSegment, SocialLink};
use demorph_core::FallbackMap;
use demorph_ui::{ButtonIntent, ButtonLink, ButtonShape, Icon, IconKind};
use dioxus::prelude::*;

use crate::components::Brand;
use crate::context::use_translator;

/// Social icon keys used by the copy; unknown keys get the GitHub mark.
pub fn social_icons() -> FallbackMap<IconKind> {
    FallbackMap::new(
        IconKind::Github,
        [
            ("linkedin", IconKind::Linkedin),
            ("twitter", IconKind::XTwitter),
            ("github", IconKind::Github),
        ],
    )
}

#[component]
pub fn Footer() -> Element {
    let t = use_translator();
    let icons = social_icons();

    let socials: Vec<SocialLink> = t.records("footer.socials");
    let message = t.t("footer.message");
    let year = chrono::Utc::now().year().to_string();
    let copyright = t.rich("footer.copyright", &[("year", year.as_str())]);
    let author_href = t.t("footer.copyright_href");

    rsx! {
        footer { class: "w-full px-4 pt-20 pb-10 md:px-8 lg:px-[12vw]",
            div { class: "flex flex-col gap-8 border-t border-white/10 pt-10 md:flex-row md:items-start md:justify-between",
                div { class: "flex max-w-md flex-col gap-4",
                    Brand {}
                    p { class: "text-sm text-white/70 leading-relaxed", "{message}" }
                }

                ul { class: "flex items-center gap-3",
                    for social in socials.iter() {
                        li { key: "{social.href}",
                            ButtonLink {
                                href: social.href.clone(),
                                external: true,
                                intent: ButtonIntent::Gray,
                                shape: ButtonShape::Social,
                                aria_label: social.accessible_label().to_string(),
                                Icon { kind: *icons.get(&social.icon), class: "h-5 w-5 md:h-6 md:w-6".to_string() }
                            }
                        }
                    }
                }
            }

            p { class: "mt-10 text-center text-xs text-white/50",
                for segment in copyright {
                    {match segment {
                        RichSegment::Text(text) => rsx! { "{text}" },
                        RichSegment::Tagged { text, .. } => rsx! {
                            a {
                                class: "font-medium text-secondary hover:underline",
                                href: "{author_href}",
                                target: "_blank",
                                rel: "noreferrer",
                                "{text}"
                            }
                        },
                    }}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_socials_map_to_their_marks() {
        let icons = social_icons();
        assert_eq!(*icons.get("linkedin"), IconKind::Linkedin);
        assert_eq!(*icons.get("twitter"), IconKind::XTwitter);
        assert_eq!(*icons.get("github"), IconKind::Github);
    }

    #[test]
    fn unknown_social_uses_github() {
        assert_eq!(*social_icons().get("mastodon"), IconKind::Github);
    }
}
