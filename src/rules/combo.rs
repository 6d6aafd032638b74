//! Combo propagation.
//!
//! Every cell flipped by the placement (basic, Same, Plus or Reflect)
//! re-attacks its own neighbors as if freshly placed by its new owner.
//! Propagation is a worklist, so chain depth never touches the call stack.

use std::collections::VecDeque;

use smallvec::SmallVec;

use super::capture::{resolve_captures, Flip, FlipCause};
use super::stats::MatchContext;
use crate::core::board::{Board, BOARD_SIZE};
use crate::core::state::{CardStatus, StatusFlags};

/// Board and flags after a combo chain, plus the flips it added.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComboOutcome {
    pub board: Board,
    pub status_flags: StatusFlags,
    /// Flips added by the chain, excluding the seed flips.
    pub flips: Vec<Flip>,
}

/// Chain captures outward from `seed`.
///
/// `board` must already reflect the seed flips. The trigger cell and the
/// seed cells are never flipped again, so the chain terminates after at
/// most one flip per remaining cell.
#[must_use]
pub fn propagate_combo(
    board: &Board,
    trigger: usize,
    seed: &[Flip],
    ctx: &MatchContext<'_>,
) -> ComboOutcome {
    let mut board = board.clone();
    let mut status_flags = ctx.status_flags.clone();
    let mut flips = Vec::new();

    let mut seen: SmallVec<[usize; BOARD_SIZE]> = SmallVec::new();
    seen.push(trigger);
    let mut queue: VecDeque<usize> = VecDeque::with_capacity(BOARD_SIZE);
    for flip in seed {
        if !seen.contains(&flip.position) {
            seen.push(flip.position);
        }
        queue.push_back(flip.position);
    }

    while let Some(position) = queue.pop_front() {
        // Cells can vanish mid-chain; the current owner is always the attacker.
        let Some(slot) = board.get(position).cloned() else {
            continue;
        };

        let step = {
            let step_ctx = ctx.with_status_flags(&status_flags);
            resolve_captures(&board, position, &slot.card, slot.owner, &step_ctx)
        };

        for p in step.armor_absorbed {
            status_flags.insert(p, CardStatus { armor_spent: true });
        }

        for flip in step.flips {
            if seen.contains(&flip.position) {
                continue;
            }
            seen.push(flip.position);
            board.set_owner(flip.position, flip.to);
            status_flags.remove(&flip.position);
            log::trace!("combo from {position} flips {} to {}", flip.position, flip.to);
            flips.push(Flip {
                cause: FlipCause::Combo,
                ..flip
            });
            queue.push_back(flip.position);
        }
    }

    ComboOutcome {
        board,
        status_flags,
        flips,
    }
}
