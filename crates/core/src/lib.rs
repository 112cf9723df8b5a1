//! Rule engine for the Scoundrel dungeon crawl. Keep this crate free of IO and
//! platform concerns.

pub mod cards;
pub mod deck;
pub mod engine;
pub mod error;
pub mod events;
pub mod player;
pub mod rng;
pub mod room;
pub mod rules;
pub mod weapon;

pub use cards::*;
pub use deck::*;
pub use engine::*;
pub use error::*;
pub use events::*;
pub use player::*;
pub use rng::*;
pub use room::*;
pub use rules::*;
pub use weapon::*;
