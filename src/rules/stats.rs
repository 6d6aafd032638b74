//! Stat resolution.
//!
//! `effective_stats` computes a card's in-play stats at a board position.
//! The pipeline order is fixed and not commutative:
//!
//! 1. Silence: an adjacent Nullifier suppresses steps 2-4 and 6
//! 2. Mirror: copy the base stats of the card to the left
//! 3. Hive Mind: +1 per other friendly copy on the board
//! 4. Grudge: +1 per card this owner has lost
//! 5. Elemental tile: +/-1 (Hover drops the penalty, Mastery doubles), then clamp to 1..=10
//! 6. Bad Breath: -1 per adjacent enemy carrying it
//!
//! `comparison_stats` then layers the positional auras (Center Boost,
//! Amplifier) that only exist at comparison time.
//!
//! Both functions are pure and safe to call speculatively.

use crate::cards::{AbilityKind, Card, MAX_STAT, MIN_STAT, Stats};
use crate::core::board::{neighbor, neighbors, Board, Direction, CENTER};
use crate::core::elemental::ElementalGrid;
use crate::core::owner::Owner;
use crate::core::state::{MatchCounters, StatusFlags};
use crate::core::RuleSet;

/// Read-only match data that stat and capture resolution depend on.
#[derive(Clone, Copy, Debug)]
pub struct MatchContext<'a> {
    pub rules: RuleSet,
    /// Present only while the Elemental rule is active.
    pub elemental_grid: Option<&'a ElementalGrid>,
    pub counters: &'a MatchCounters,
    pub status_flags: &'a StatusFlags,
}

impl<'a> MatchContext<'a> {
    /// The same context reading a different set of status flags.
    #[must_use]
    pub fn with_status_flags<'b>(&self, status_flags: &'b StatusFlags) -> MatchContext<'b>
    where
        'a: 'b,
    {
        MatchContext {
            rules: self.rules,
            elemental_grid: self.elemental_grid,
            counters: self.counters,
            status_flags,
        }
    }
}

type Working = [i32; 4];

fn add_all(stats: &mut Working, delta: i32) {
    for v in stats.iter_mut() {
        *v += delta;
    }
}

fn clamp(stats: Working) -> Working {
    stats.map(|v| v.clamp(i32::from(MIN_STAT), i32::from(MAX_STAT)))
}

fn finish(stats: Working) -> Stats {
    // Values are already clamped into u8 range.
    Stats(clamp(stats).map(|v| v as u8))
}

/// True when any orthogonal neighbor carries Nullifier, regardless of owner.
#[must_use]
pub fn is_silenced(position: usize, board: &Board) -> bool {
    neighbors(position).any(|(_, p)| {
        board
            .get(p)
            .is_some_and(|slot| slot.card.has(AbilityKind::Nullifier))
    })
}

/// Signed elemental modifier for `card` on the tile at `position`.
fn elemental_modifier(card: &Card, position: usize, ctx: &MatchContext<'_>, silenced: bool) -> i32 {
    let (Some(grid), Some(element)) = (ctx.elemental_grid, card.element) else {
        return 0;
    };
    let Some(tile) = grid.at(position) else {
        return 0;
    };

    let mut modifier = if tile == element { 1 } else { -1 };
    if !silenced {
        if modifier < 0 && card.has(AbilityKind::Hover) {
            modifier = 0;
        }
        if card.has(AbilityKind::ElementalMastery) {
            modifier *= 2;
        }
    }
    modifier
}

/// In-play stats of `card` at `position` for `owner`.
///
/// `board` may or may not already hold the card at `position`; the card
/// never counts itself for Hive Mind.
#[must_use]
pub fn effective_stats(
    card: &Card,
    position: usize,
    board: &Board,
    owner: Owner,
    ctx: &MatchContext<'_>,
) -> Stats {
    let silenced = is_silenced(position, board);
    let mut stats: Working = card.stats.0.map(i32::from);

    if !silenced {
        if card.has(AbilityKind::Mirror) {
            if let Some(left) = neighbor(position, Direction::Left).and_then(|p| board.get(p)) {
                stats = left.card.stats.0.map(i32::from);
            }
        }

        if card.has(AbilityKind::HiveMind) {
            let copies = board
                .occupied()
                .filter(|(p, slot)| {
                    *p != position && slot.owner == owner && slot.card.id == card.id
                })
                .count();
            add_all(&mut stats, copies as i32);
        }

        if card.has(AbilityKind::Grudge) {
            add_all(&mut stats, ctx.counters.lost[owner] as i32);
        }
    }

    add_all(&mut stats, elemental_modifier(card, position, ctx, silenced));
    stats = clamp(stats);

    if !silenced {
        let breath = neighbors(position)
            .filter_map(|(_, p)| board.get(p))
            .filter(|slot| slot.owner != owner && slot.card.has(AbilityKind::BadBreath))
            .count();
        add_all(&mut stats, -(breath as i32));
    }

    finish(stats)
}

/// Effective stats plus the positional auras used only when comparing.
///
/// - Center Boost: a friendly Center Boost card in the middle cell adds +1
///   to the lowest side of each adjacent friendly card (first minimum in
///   top/right/bottom/left order).
/// - Amplifier: each adjacent friendly Amplifier adds +2 to the side that
///   faces it, capped at 10.
#[must_use]
pub fn comparison_stats(
    card: &Card,
    position: usize,
    board: &Board,
    owner: Owner,
    ctx: &MatchContext<'_>,
) -> Stats {
    let mut stats: Working = effective_stats(card, position, board, owner, ctx).0.map(i32::from);

    let touches_center = neighbors(position).any(|(_, p)| p == CENTER);
    if touches_center {
        if let Some(center) = board.get(CENTER) {
            if center.owner == owner && center.card.has(AbilityKind::CenterBoost) {
                let mut lowest = 0;
                for i in 1..stats.len() {
                    if stats[i] < stats[lowest] {
                        lowest = i;
                    }
                }
                stats[lowest] += 1;
            }
        }
    }

    for (dir, p) in neighbors(position) {
        let Some(slot) = board.get(p) else { continue };
        if slot.owner == owner && slot.card.has(AbilityKind::Amplifier) {
            let side = &mut stats[dir.index()];
            *side = (*side + 2).min(i32::from(MAX_STAT));
        }
    }

    finish(stats)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::cards::{CardId, Element};
    use crate::core::board::Slot;

    fn card(id: u32, stats: Stats) -> Card {
        Card::new(CardId::new(id), format!("Card {id}"), stats)
    }

    fn put(board: &mut Board, position: usize, card: Card, owner: Owner) {
        board.set(position, Slot::new(Arc::new(card), owner));
    }

    struct Fixture {
        counters: MatchCounters,
        flags: StatusFlags,
        grid: Option<ElementalGrid>,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                counters: MatchCounters::default(),
                flags: StatusFlags::new(),
                grid: None,
            }
        }

        fn ctx(&self) -> MatchContext<'_> {
            MatchContext {
                rules: RuleSet::new(),
                elemental_grid: self.grid.as_ref(),
                counters: &self.counters,
                status_flags: &self.flags,
            }
        }
    }

    #[test]
    fn test_plain_card_keeps_base_stats() {
        let f = Fixture::new();
        let c = card(1, Stats::new(1, 4, 1, 5));
        assert_eq!(effective_stats(&c, 4, &Board::new(), Owner::A, &f.ctx()), c.stats);
    }

    #[test]
    fn test_mirror_copies_left_base_stats() {
        let f = Fixture::new();
        let mut board = Board::new();
        // Mirror copies base stats regardless of owner
        put(&mut board, 3, card(7, Stats::new(9, 8, 7, 6)), Owner::B);

        let mirror = card(2, Stats::uniform(1)).with_ability(AbilityKind::Mirror);
        assert_eq!(effective_stats(&mirror, 4, &board, Owner::A, &f.ctx()), Stats::new(9, 8, 7, 6));

        // Nothing to the left of column 0
        assert_eq!(effective_stats(&mirror, 3, &board, Owner::A, &f.ctx()), Stats::uniform(1));
    }

    #[test]
    fn test_hive_mind_counts_friendly_copies_only() {
        let f = Fixture::new();
        let hive = card(9, Stats::uniform(2)).with_ability(AbilityKind::HiveMind);
        let mut board = Board::new();
        put(&mut board, 0, hive.clone(), Owner::A);
        put(&mut board, 8, hive.clone(), Owner::A);
        put(&mut board, 6, hive.clone(), Owner::B);
        put(&mut board, 4, hive.clone(), Owner::A);

        assert_eq!(effective_stats(&hive, 4, &board, Owner::A, &f.ctx()), Stats::uniform(4));
    }

    #[test]
    fn test_grudge_adds_lost_cards() {
        let mut f = Fixture::new();
        f.counters.lost[Owner::A] = 3;
        let grudge = card(5, Stats::new(2, 9, 2, 2)).with_ability(AbilityKind::Grudge);

        // 9 + 3 caps at 10
        assert_eq!(
            effective_stats(&grudge, 0, &Board::new(), Owner::A, &f.ctx()),
            Stats::new(5, 10, 5, 5)
        );
        assert_eq!(
            effective_stats(&grudge, 0, &Board::new(), Owner::B, &f.ctx()),
            Stats::new(2, 9, 2, 2)
        );
    }

    #[test]
    fn test_elemental_match_and_mismatch() {
        let mut f = Fixture::new();
        let mut tiles = [None; 9];
        tiles[0] = Some(Element::Fire);
        f.grid = Some(ElementalGrid(tiles));

        let fire = card(1, Stats::new(5, 5, 5, 10)).with_element(Element::Fire);
        let ice = card(2, Stats::new(1, 5, 5, 5)).with_element(Element::Ice);
        let plain = card(3, Stats::uniform(5));

        let ctx = f.ctx();
        let board = Board::new();
        assert_eq!(effective_stats(&fire, 0, &board, Owner::A, &ctx), Stats::new(6, 6, 6, 10));
        assert_eq!(effective_stats(&ice, 0, &board, Owner::A, &ctx), Stats::new(1, 4, 4, 4));
        assert_eq!(effective_stats(&plain, 0, &board, Owner::A, &ctx), Stats::uniform(5));
        // Untagged tile
        assert_eq!(effective_stats(&fire, 1, &board, Owner::A, &ctx), fire.stats);
    }

    #[test]
    fn test_hover_and_mastery() {
        let mut f = Fixture::new();
        f.grid = Some(ElementalGrid([Some(Element::Wind); 9]));

        let hover_miss = card(1, Stats::uniform(5))
            .with_element(Element::Fire)
            .with_ability(AbilityKind::Hover);
        let hover_hit = card(1, Stats::uniform(5))
            .with_element(Element::Wind)
            .with_ability(AbilityKind::Hover);
        let mastery_hit = card(2, Stats::uniform(5))
            .with_element(Element::Wind)
            .with_ability(AbilityKind::ElementalMastery);
        let mastery_miss = card(2, Stats::uniform(5))
            .with_element(Element::Ice)
            .with_ability(AbilityKind::ElementalMastery);

        let ctx = f.ctx();
        let board = Board::new();
        assert_eq!(effective_stats(&hover_miss, 4, &board, Owner::A, &ctx), Stats::uniform(5));
        assert_eq!(effective_stats(&hover_hit, 4, &board, Owner::A, &ctx), Stats::uniform(6));
        assert_eq!(effective_stats(&mastery_hit, 4, &board, Owner::A, &ctx), Stats::uniform(7));
        assert_eq!(effective_stats(&mastery_miss, 4, &board, Owner::A, &ctx), Stats::uniform(3));
    }

    #[test]
    fn test_bad_breath_stacks_from_enemies() {
        let f = Fixture::new();
        let breath = card(4, Stats::uniform(3)).with_ability(AbilityKind::BadBreath);
        let mut board = Board::new();
        put(&mut board, 1, breath.clone(), Owner::B);
        put(&mut board, 3, breath.clone(), Owner::B);
        put(&mut board, 5, breath.clone(), Owner::A);

        let target = card(1, Stats::new(5, 5, 2, 1));
        assert_eq!(effective_stats(&target, 4, &board, Owner::A, &f.ctx()), Stats::new(3, 3, 1, 1));
    }

    #[test]
    fn test_nullifier_silences_abilities_but_not_elements() {
        let mut f = Fixture::new();
        f.counters.lost[Owner::A] = 4;
        f.grid = Some(ElementalGrid([Some(Element::Earth); 9]));

        let mut board = Board::new();
        let null = card(8, Stats::uniform(5)).with_ability(AbilityKind::Nullifier);
        let breath = card(4, Stats::uniform(3)).with_ability(AbilityKind::BadBreath);
        put(&mut board, 1, null, Owner::A);
        put(&mut board, 3, breath, Owner::B);

        let grudge = card(5, Stats::uniform(5))
            .with_element(Element::Earth)
            .with_ability(AbilityKind::Grudge);

        assert!(is_silenced(4, &board));
        // Grudge and Bad Breath skipped, elemental +1 kept
        assert_eq!(effective_stats(&grudge, 4, &board, Owner::A, &f.ctx()), Stats::uniform(6));
    }

    #[test]
    fn test_center_boost_raises_first_lowest_side() {
        let f = Fixture::new();
        let mut board = Board::new();
        let booster = card(6, Stats::uniform(5)).with_ability(AbilityKind::CenterBoost);
        put(&mut board, CENTER, booster, Owner::A);

        let c = card(1, Stats::new(4, 2, 9, 2));
        assert_eq!(comparison_stats(&c, 1, &board, Owner::A, &f.ctx()), Stats::new(4, 3, 9, 2));
        // Enemies of the booster get nothing
        assert_eq!(comparison_stats(&c, 1, &board, Owner::B, &f.ctx()), c.stats);
        // Corners do not touch the center
        assert_eq!(comparison_stats(&c, 0, &board, Owner::A, &f.ctx()), c.stats);
    }

    #[test]
    fn test_center_boost_needs_the_middle_cell() {
        let f = Fixture::new();
        let mut board = Board::new();
        let booster = card(6, Stats::uniform(5)).with_ability(AbilityKind::CenterBoost);
        put(&mut board, 0, booster, Owner::A);

        let c = card(1, Stats::uniform(2));
        assert_eq!(comparison_stats(&c, 1, &board, Owner::A, &f.ctx()), c.stats);
    }

    #[test]
    fn test_amplifier_boosts_facing_side_and_stacks() {
        let f = Fixture::new();
        let amp = card(3, Stats::uniform(1)).with_ability(AbilityKind::Amplifier);
        let mut board = Board::new();
        put(&mut board, 1, amp.clone(), Owner::A);
        put(&mut board, 5, amp.clone(), Owner::A);
        put(&mut board, 3, amp.clone(), Owner::B);

        let c = card(1, Stats::new(9, 4, 4, 4));
        // Top 9+2 caps at 10, right +2, enemy amplifier on the left ignored
        assert_eq!(comparison_stats(&c, 4, &board, Owner::A, &f.ctx()), Stats::new(10, 6, 4, 4));
    }
}
