//! Opponent move selection.
//!
//! Selectors see only the snapshot. They never mutate it; the caller
//! applies the chosen move with `game::place_card`.

mod selector;

pub use selector::{legal_moves, select_move, GreedySelector, Move, MoveSelector, RandomSelector};
