//! Localized site copy
//!
//! Copy lives in one JSON document per locale. Components address it by
//! dotted key path (`"hero.headline"`, `"about.cards"`) and get back either a
//! string or records decoded into the types in [`types`].

pub mod markup;
mod source;
pub mod types;

pub use markup::{interpolate, parse_rich_text, RichSegment};
pub use source::{ContentEntry, ContentSource, Translator};
pub use types::{
    AboutCardData, BenefitPointData, CardLayout, CtaData, FeatureCardData, NavLink, SocialLink,
};
