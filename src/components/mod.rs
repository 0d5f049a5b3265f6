//! Site components for DEMORPH.
//!
//! Generic primitives (buttons, cards, icons) live in `demorph-ui`;
//! these compose them with the site's copy.

pub mod cards;
mod layout;
pub mod navigation;

pub use cards::{BulletCard, IconCard, StepCard};
pub use layout::DefaultLayout;
pub use navigation::{Brand, Footer, Navbar};
