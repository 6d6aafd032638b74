//! Ability triggers.
//!
//! Passive abilities are folded into stat and capture resolution. The
//! abilities that do something at a point in the turn are dispatched from
//! here through two handler tables keyed by `AbilityKind`:
//!
//! - on-play: fires once, right after the card lands (Curse, Infestation)
//! - on-flip: fires for each card captured this turn (Haunt, Explode,
//!   Self-Destruct)
//!
//! Handlers mutate a `TriggerScope`, which borrows the working board and
//! status flags of the snapshot under construction, and record what they
//! did in a `TriggerReport`.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use rust_triad::cards::{AbilityKind, Card, CardId, Stats};
//! use rust_triad::core::{Board, GameRng, Owner, Slot, StatusFlags};
//! use rust_triad::triggers::{run_on_play, TriggerReport, TriggerScope};
//!
//! let mut board = Board::new();
//! let hive = Card::new(CardId::new(7), "Hive", Stats::uniform(3))
//!     .with_ability(AbilityKind::Infestation);
//! board.set(4, Slot::new(Arc::new(hive), Owner::A));
//!
//! let mut flags = StatusFlags::new();
//! let mut rng = GameRng::new(1);
//! let mut report = TriggerReport::default();
//! let mut scope = TriggerScope::new(&mut board, &mut flags, &mut rng, &mut report);
//! run_on_play(&mut scope, 4);
//!
//! assert!(report.spawned.is_some());
//! ```

mod on_flip;
mod on_play;

use crate::cards::AbilityKind;
use crate::core::board::Board;
use crate::core::owner::Owner;
use crate::core::rng::RandomSource;
use crate::core::state::StatusFlags;
use crate::rules::Flip;

/// Side effects recorded by trigger handlers during one turn.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TriggerReport {
    /// Ownership changes caused by handlers (Haunt).
    pub flips: Vec<Flip>,
    /// Cells emptied by Explode or Self-Destruct.
    pub removed: Vec<usize>,
    pub spawned: Option<usize>,
    pub cursed: Option<usize>,
}

/// Mutable view handed to trigger handlers.
pub struct TriggerScope<'a> {
    pub board: &'a mut Board,
    pub status_flags: &'a mut StatusFlags,
    pub rng: &'a mut dyn RandomSource,
    pub report: &'a mut TriggerReport,
}

impl<'a> TriggerScope<'a> {
    pub fn new(
        board: &'a mut Board,
        status_flags: &'a mut StatusFlags,
        rng: &'a mut dyn RandomSource,
        report: &'a mut TriggerReport,
    ) -> Self {
        Self {
            board,
            status_flags,
            rng,
            report,
        }
    }

    /// Uniformly pick one of `candidates`.
    pub(crate) fn choose(&mut self, candidates: &[usize]) -> Option<usize> {
        if candidates.is_empty() {
            return None;
        }
        candidates.get(self.rng.pick(candidates.len())).copied()
    }

    /// Empty a cell and forget its status.
    pub(crate) fn remove(&mut self, position: usize) {
        if self.board.take(position).is_some() {
            self.status_flags.remove(&position);
            self.report.removed.push(position);
        }
    }
}

/// Handler for a card that was just placed at `position` by `owner`.
pub type OnPlayHandler = fn(&mut TriggerScope<'_>, usize, Owner);

/// Handler for a card captured by `flip`.
pub type OnFlipHandler = fn(&mut TriggerScope<'_>, &Flip);

/// On-play handler for an ability, if it has one.
#[must_use]
pub fn on_play_handler(kind: AbilityKind) -> Option<OnPlayHandler> {
    use AbilityKind::*;
    match kind {
        Curse => Some(on_play::curse),
        Infestation => Some(on_play::infestation),
        CenterBoost | ElementalMastery | BadBreath | PoisonAura | GiantSlayer | AceHunter
        | Fortress | Reflect | HiveMind | Symbiosis | Haunt | Reanimate | Hover | Ambush
        | Scout | Lockdown | SelfDestruct | ArmorPlating | Amplifier | Mirror | Nullifier
        | Scavenge | TenThousandNeedles | Grudge | Explode | Roar => None,
    }
}

/// On-flip handler for an ability, if it has one.
///
/// Reflect is an on-flip ability but resolves inside capture resolution,
/// so it has no handler here.
#[must_use]
pub fn on_flip_handler(kind: AbilityKind) -> Option<OnFlipHandler> {
    use AbilityKind::*;
    match kind {
        Haunt => Some(on_flip::haunt),
        Explode => Some(on_flip::explode),
        SelfDestruct => Some(on_flip::self_destruct),
        CenterBoost | ElementalMastery | BadBreath | PoisonAura | GiantSlayer | AceHunter
        | Fortress | Reflect | HiveMind | Infestation | Symbiosis | Reanimate | Curse | Hover
        | Ambush | Scout | Lockdown | ArmorPlating | Amplifier | Mirror | Nullifier | Scavenge
        | TenThousandNeedles | Grudge | Roar => None,
    }
}

/// Fire the on-play ability of the card at `position`.
pub fn run_on_play(scope: &mut TriggerScope<'_>, position: usize) {
    let Some(slot) = scope.board.get(position) else {
        return;
    };
    let owner = slot.owner;
    let Some(handler) = slot.card.ability.and_then(on_play_handler) else {
        return;
    };
    log::trace!("on-play trigger at {position}");
    handler(scope, position, owner);
}

/// Fire on-flip abilities for each flip, in order.
///
/// A flip only fires if its cell still holds a card owned by the capturer;
/// cells emptied or flipped back by earlier handlers are skipped.
pub fn run_on_flip(scope: &mut TriggerScope<'_>, flips: &[Flip]) {
    for flip in flips {
        let Some(slot) = scope.board.get(flip.position) else {
            continue;
        };
        if slot.owner != flip.to {
            continue;
        }
        if let Some(handler) = slot.card.ability.and_then(on_flip_handler) {
            log::trace!("on-flip trigger at {}", flip.position);
            handler(scope, flip);
        }
    }
}
