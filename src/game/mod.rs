//! Match lifecycle: setup and turn resolution.

mod builder;
mod turn;

pub use builder::{create_match, MatchBuilder};
pub use turn::{place_card, place_card_with, score, winner};
