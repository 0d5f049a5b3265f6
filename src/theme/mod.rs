//! Theme for the DEMORPH site.
//!
//! Colors and fonts live in `tailwind.config.js`; this module carries the
//! few global rules utility classes cannot express.

mod styles;

pub use styles::GLOBAL_STYLES;
