//! Capture resolution for a single placement.
//!
//! Given a card about to sit at a position, work out which adjacent enemy
//! cards change hands. The board is never mutated: resolution runs on a
//! scratch copy with the attacker placed, so the same call serves real
//! turns, combo steps and speculative move scoring.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::stats::{comparison_stats, MatchContext};
use crate::cards::{AbilityCategory, AbilityKind, Card, MAX_STAT};
use crate::core::board::{neighbors, Board, Slot};
use crate::core::owner::Owner;

/// The rule that caused an ownership change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlipCause {
    Basic,
    Same,
    Plus,
    Reflect,
    Combo,
    Haunt,
}

/// One ownership change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Flip {
    pub position: usize,
    pub from: Owner,
    pub to: Owner,
    pub cause: FlipCause,
}

/// Outcome of resolving one placement.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Resolution {
    /// Deduplicated flips in discovery order.
    pub flips: SmallVec<[Flip; 8]>,
    /// Cells whose Armor Plating absorbed a capture this call.
    pub armor_absorbed: SmallVec<[usize; 4]>,
}

impl Resolution {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flips.is_empty()
    }

    #[must_use]
    pub fn contains(&self, position: usize) -> bool {
        self.flips.iter().any(|f| f.position == position)
    }

    /// Cells gained by `owner`.
    #[must_use]
    pub fn captured_count(&self, owner: Owner) -> usize {
        self.flips.iter().filter(|f| f.to == owner).count()
    }

    pub fn positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.flips.iter().map(|f| f.position)
    }
}

/// One attacker side against one enemy side.
struct Contact<'b> {
    position: usize,
    own: u8,
    opp: u8,
    target: &'b Slot,
}

/// Opponent value after the attacker's slayer ability.
fn slayer_adjusted(ability: Option<AbilityKind>, own: u8, opp: u8) -> u8 {
    match ability {
        Some(AbilityKind::GiantSlayer) if (1..=3).contains(&own) && opp == MAX_STAT => 0,
        Some(AbilityKind::AceHunter) if opp == MAX_STAT => 5,
        Some(AbilityKind::TenThousandNeedles) if opp == MAX_STAT => 0,
        _ => opp,
    }
}

fn resists_basic(card: &Card) -> bool {
    card.has(AbilityKind::Fortress) || card.has(AbilityKind::Lockdown)
}

/// Lockdown always resists Same/Plus. Symbiosis resists while another
/// friendly Swarm card touches it.
fn resists_rule_capture(position: usize, target: &Slot, board: &Board) -> bool {
    if target.card.has(AbilityKind::Lockdown) {
        return true;
    }
    if target.card.has(AbilityKind::Symbiosis) {
        return neighbors(position)
            .filter_map(|(_, p)| board.get(p))
            .any(|slot| {
                slot.owner == target.owner
                    && slot.card.ability.map(AbilityKind::category) == Some(AbilityCategory::Swarm)
            });
    }
    false
}

/// Resolve the captures caused by `card` sitting at `position` for `owner`.
///
/// Runs basic capture, then Same and Plus when enabled, then Armor Plating
/// and Reflect. Combo propagation is not performed here.
#[must_use]
pub fn resolve_captures(
    board: &Board,
    position: usize,
    card: &Arc<Card>,
    owner: Owner,
    ctx: &MatchContext<'_>,
) -> Resolution {
    let mut scratch = board.clone();
    scratch.set(position, Slot::new(Arc::clone(card), owner));
    let board = &scratch;

    let attacker = comparison_stats(card, position, board, owner, ctx);
    let contacts: SmallVec<[Contact<'_>; 4]> = neighbors(position)
        .filter_map(|(dir, p)| {
            let target = board.get(p)?;
            if target.owner == owner {
                return None;
            }
            let defender = comparison_stats(&target.card, p, board, target.owner, ctx);
            let own = attacker.get(dir);
            let opp = slayer_adjusted(card.ability, own, defender.get(dir.opposite()));
            Some(Contact { position: p, own, opp, target })
        })
        .collect();

    let mut candidates: SmallVec<[(usize, FlipCause); 4]> = SmallVec::new();
    let mut push = |position: usize, cause: FlipCause| {
        if !candidates.iter().any(|(p, _)| *p == position) {
            candidates.push((position, cause));
        }
    };

    for c in &contacts {
        if c.own > c.opp && !resists_basic(&c.target.card) {
            push(c.position, FlipCause::Basic);
        }
    }

    if ctx.rules.same {
        let matched = contacts.iter().filter(|c| c.own == c.opp).count();
        if matched >= 2 {
            for c in contacts.iter().filter(|c| c.own == c.opp) {
                if !resists_rule_capture(c.position, c.target, board) {
                    push(c.position, FlipCause::Same);
                }
            }
        }
    }

    if ctx.rules.plus {
        for c in &contacts {
            let sum = u16::from(c.own) + u16::from(c.opp);
            let shared = contacts
                .iter()
                .filter(|o| u16::from(o.own) + u16::from(o.opp) == sum)
                .count();
            if shared >= 2 && !resists_rule_capture(c.position, c.target, board) {
                push(c.position, FlipCause::Plus);
            }
        }
    }

    let mut resolution = Resolution::default();
    for (p, cause) in candidates {
        let Some(target) = board.get(p) else { continue };
        let spent = ctx.status_flags.get(&p).is_some_and(|s| s.armor_spent);
        if target.card.has(AbilityKind::ArmorPlating) && !spent {
            log::trace!("armor at {p} absorbed a {cause:?} capture");
            resolution.armor_absorbed.push(p);
            continue;
        }
        resolution.flips.push(Flip {
            position: p,
            from: target.owner,
            to: owner,
            cause,
        });
    }

    let reflected = resolution
        .flips
        .iter()
        .any(|f| board.get(f.position).is_some_and(|slot| slot.card.has(AbilityKind::Reflect)));
    if reflected {
        resolution.flips.push(Flip {
            position,
            from: owner,
            to: owner.opponent(),
            cause: FlipCause::Reflect,
        });
    }

    resolution
}
