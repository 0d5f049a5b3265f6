//! Benefit Section

use demorph_core::content::BenefitPointData;
use demorph_core::FallbackMap;
use demorph_ui::{Icon, IconKind, Section};
use dioxus::prelude::*;

use super::SectionHeading;
use crate::context::use_translator;

/// Icon keys used by benefit points; unknown keys get the scales.
pub fn benefit_icons() -> FallbackMap<IconKind> {
    FallbackMap::new(
        IconKind::Scale,
        [
            ("target", IconKind::Target),
            ("zap", IconKind::Zap),
            ("gavel", IconKind::Scale),
        ],
    )
}

#[component]
pub fn Benefit() -> Element {
    let t = use_translator();
    let icons = benefit_icons();
    let points: Vec<BenefitPointData> = t.records("benefit.points");

    rsx! {
        Section { id: "benefit",
            SectionHeading {
                heading: t.t("benefit.heading"),
                subheading: t.t("benefit.subheading"),
            }
            ul { class: "grid gap-8 md:grid-cols-3",
                for (idx, point) in points.iter().enumerate() {
                    li { key: "{idx}", class: "flex flex-col gap-3",
                        span { class: "w-fit rounded-full bg-primary/20 p-3 text-primary-light",
                            Icon { kind: *icons.get(&point.icon), size: 28 }
                        }
                        h3 { class: "font-primary font-semibold text-lg text-white", "{point.label}" }
                        p { class: "text-sm text-white/70 leading-relaxed", "{point.description}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_icon_keys_are_mapped() {
        let icons = benefit_icons();
        assert_eq!(*icons.get("target"), IconKind::Target);
        assert_eq!(*icons.get("zap"), IconKind::Zap);
        assert_eq!(*icons.get("gavel"), IconKind::Scale);
    }

    #[test]
    fn unknown_key_uses_scales() {
        assert_eq!(*benefit_icons().get("shield"), IconKind::Scale);
    }
}
