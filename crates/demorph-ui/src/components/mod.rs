//! Reusable UI primitives
//!
//! - `Button` / `ButtonLink`: variant-styled actions
//! - `Card`: themed content panel
//! - `Section`: full-width page band with an anchor id
//! - `Icon`: inline Lucide-style SVG glyphs

mod button;
mod card;
mod icon;
mod section;

pub use button::*;
pub use card::*;
pub use icon::*;
pub use section::*;
