//! Move selection policies.

use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::core::rng::GameRng;
use crate::core::state::GameState;
use crate::rules::resolve_captures;

/// A placement: which hand card goes to which cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Move {
    pub position: usize,
    pub card_index: usize,
}

/// Every legal move for the player to act, hand index major.
#[must_use]
pub fn legal_moves(state: &GameState) -> Vec<Move> {
    if state.game_over {
        return Vec::new();
    }
    let empty: Vec<usize> = state.board.empty_positions().collect();
    (0..state.current_hand().len())
        .flat_map(|card_index| empty.iter().map(move |&position| Move { position, card_index }))
        .collect()
}

/// Chooses a move for the player to act.
///
/// Returns `None` when there is no legal move.
pub trait MoveSelector: Send + Sync {
    fn select(&self, state: &GameState) -> Option<Move>;
}

/// One-ply greedy search on immediate captures.
///
/// Scores each move with capture resolution only (no combo, no triggers)
/// and keeps the first move with the strictly highest score, scanning
/// hand index ascending then position ascending.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedySelector;

impl MoveSelector for GreedySelector {
    fn select(&self, state: &GameState) -> Option<Move> {
        let mover = state.current_player;
        let hand = state.current_hand();
        let ctx = state.context();

        let mut best: Option<(Move, usize)> = None;
        for mv in legal_moves(state) {
            let card = &hand[mv.card_index];
            let gained = resolve_captures(&state.board, mv.position, card, mover, &ctx)
                .captured_count(mover);
            if best.map_or(true, |(_, score)| gained > score) {
                best = Some((mv, gained));
            }
        }

        if let Some((mv, score)) = best {
            log::trace!("greedy pick {mv:?} gains {score}");
        }
        best.map(|(mv, _)| mv)
    }
}

/// Uniformly random legal moves from a seeded RNG.
#[derive(Debug)]
pub struct RandomSelector {
    rng: Mutex<GameRng>,
}

impl RandomSelector {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(GameRng::new(seed)),
        }
    }
}

impl MoveSelector for RandomSelector {
    fn select(&self, state: &GameState) -> Option<Move> {
        let moves = legal_moves(state);
        if moves.is_empty() {
            return None;
        }
        let index = match self.rng.lock() {
            Ok(mut rng) => rng.gen_range_usize(0..moves.len()),
            Err(poisoned) => poisoned.into_inner().gen_range_usize(0..moves.len()),
        };
        moves.get(index).copied()
    }
}

/// Greedy move for the player to act.
#[must_use]
pub fn select_move(state: &GameState) -> Option<Move> {
    GreedySelector.select(state)
}
