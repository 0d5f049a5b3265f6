//! Content Cards
//!
//! Copy-driven cards built on the `demorph-ui` [`Card`](demorph_ui::Card).

mod bullet_card;
mod icon_card;
mod step_card;

pub use bullet_card::BulletCard;
pub use icon_card::IconCard;
pub use step_card::StepCard;
