//! DEMORPH UI Components
//!
//! Dioxus primitives shared by every section of the DEMORPH site.
//!
//! ## Styling
//!
//! Components are styled with Tailwind utility classes. `Button` and `Card`
//! resolve their classes from a [`demorph_core::VariantSpec`]:
//! - **Button**: `intent` (primary, gray, white), `size` (small, medium,
//!   large, icon), `shape` (default, square, pill, social)
//! - **Card**: `theme` (light gray, dark gray, gradient)
//!
//! Any `class` a caller passes is merged last, so it wins over conflicting
//! base or variant utilities.
//!
//! ## Palette
//!
//! Theme colors come from `tailwind.config.js`: `primary`, `primary-light`,
//! `accent`, `secondary`, `background`, `foreground`, `dark-gray`.

pub mod components;

pub use components::*;
