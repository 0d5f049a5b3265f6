//! Page components for the DEMORPH site.

mod error;
mod home;

pub use error::{ErrorPage, NotFound};
pub use home::Home;
