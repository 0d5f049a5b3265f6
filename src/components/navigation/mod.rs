//! Page chrome: brand mark, top navigation, footer.

mod brand;
mod footer;
mod navbar;

pub use brand::Brand;
pub use footer::Footer;
pub use navbar::Navbar;
