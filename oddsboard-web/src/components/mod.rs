pub mod error;
pub mod game_card;
pub mod icons;
pub mod loader;
pub mod providers;
pub mod transition;

pub use game_card::GameCard;
pub use transition::Transition;
