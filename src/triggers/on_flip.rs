//! On-flip handlers.

use smallvec::SmallVec;

use super::TriggerScope;
use crate::core::board::neighbors;
use crate::rules::{Flip, FlipCause};

/// The captured card drags one random neighbor held by its captor back
/// to its previous owner. The haunting flip does not chain.
pub(super) fn haunt(scope: &mut TriggerScope<'_>, flip: &Flip) {
    let captor_cells: SmallVec<[usize; 4]> = neighbors(flip.position)
        .map(|(_, p)| p)
        .filter(|&p| scope.board.owner_at(p) == Some(flip.to))
        .collect();
    let Some(target) = scope.choose(&captor_cells) else {
        return;
    };
    log::debug!("haunt at {} takes back {target}", flip.position);
    scope.board.set_owner(target, flip.from);
    scope.status_flags.remove(&target);
    scope.report.flips.push(Flip {
        position: target,
        from: flip.to,
        to: flip.from,
        cause: FlipCause::Haunt,
    });
}

/// Clear every occupied neighbor of the captured card.
pub(super) fn explode(scope: &mut TriggerScope<'_>, flip: &Flip) {
    log::debug!("explosion at {}", flip.position);
    for (_, p) in neighbors(flip.position) {
        scope.remove(p);
    }
}

/// The captured card removes itself.
pub(super) fn self_destruct(scope: &mut TriggerScope<'_>, flip: &Flip) {
    log::debug!("self-destruct at {}", flip.position);
    scope.remove(flip.position);
}
