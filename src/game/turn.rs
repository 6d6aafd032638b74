//! Turn resolution.
//!
//! `place_card` is the single state transition of a match. It validates
//! the move, then applies every phase to a working copy of the snapshot:
//!
//! 1. place the card
//! 2. on-play triggers
//! 3. capture resolution (basic, Same, Plus, Armor, Reflect)
//! 4. combo propagation
//! 5. on-flip triggers
//! 6. counters, hand, terminal check, turn handoff
//!
//! The input snapshot is never modified; an invalid move returns an error
//! and nothing else.

use std::sync::Arc;

use crate::core::board::{in_range, Board, Slot};
use crate::core::error::InvalidMove;
use crate::core::owner::{Owner, OwnerMap};
use crate::core::rng::RandomSource;
use crate::core::state::{CardStatus, GameState, LastMove, MatchResult};
use crate::core::Rule;
use crate::rules::{propagate_combo, resolve_captures, Flip};
use crate::triggers::{run_on_flip, run_on_play, TriggerReport, TriggerScope};

/// Occupied cells per owner.
#[must_use]
pub fn score(board: &Board) -> OwnerMap<usize> {
    board.counts()
}

/// Outcome by occupied-cell majority.
#[must_use]
pub fn winner(board: &Board) -> MatchResult {
    let counts = score(board);
    match counts[Owner::A].cmp(&counts[Owner::B]) {
        std::cmp::Ordering::Greater => MatchResult::Winner(Owner::A),
        std::cmp::Ordering::Less => MatchResult::Winner(Owner::B),
        std::cmp::Ordering::Equal => MatchResult::Draw,
    }
}

fn validate(state: &GameState, position: usize, card_index: usize) -> Result<(), InvalidMove> {
    if state.game_over {
        return Err(InvalidMove::MatchOver);
    }
    if !in_range(position) {
        return Err(InvalidMove::OutOfRange { position });
    }
    if !state.board.is_empty(position) {
        return Err(InvalidMove::CellOccupied { position });
    }
    let hand_len = state.current_hand().len();
    if card_index >= hand_len {
        return Err(InvalidMove::InvalidHandIndex {
            index: card_index,
            hand_len,
        });
    }
    Ok(())
}

/// Play the current player's `card_index`-th card at `position`.
///
/// Random trigger targets are drawn from the snapshot's own RNG, whose
/// advanced state is stored in the returned snapshot.
pub fn place_card(
    state: &GameState,
    position: usize,
    card_index: usize,
) -> Result<GameState, InvalidMove> {
    let mut rng = state.rng.clone();
    let mut next = place_card_with(state, position, card_index, &mut rng)?;
    next.rng = rng;
    Ok(next)
}

/// `place_card` with an injected random source.
///
/// The returned snapshot keeps the input's RNG state unchanged.
pub fn place_card_with(
    state: &GameState,
    position: usize,
    card_index: usize,
    rng: &mut dyn RandomSource,
) -> Result<GameState, InvalidMove> {
    validate(state, position, card_index)?;

    let mover = state.current_player;
    let mut next = state.clone();
    let card: Arc<_> = next.hand_mut(mover).remove(card_index);
    next.board.set(position, Slot::new(Arc::clone(&card), mover));

    let mut report = TriggerReport::default();
    run_on_play(
        &mut TriggerScope::new(&mut next.board, &mut next.status_flags, &mut *rng, &mut report),
        position,
    );

    let resolution = resolve_captures(&next.board, position, &card, mover, &next.context());
    for &p in &resolution.armor_absorbed {
        next.status_flags.insert(p, CardStatus { armor_spent: true });
    }
    let mut flips: Vec<Flip> = resolution.flips.into_vec();
    for flip in &flips {
        next.board.set_owner(flip.position, flip.to);
        next.status_flags.remove(&flip.position);
    }

    if next.rule_set.contains(Rule::Combo) && !flips.is_empty() {
        let outcome = propagate_combo(&next.board, position, &flips, &next.context());
        next.board = outcome.board;
        next.status_flags = outcome.status_flags;
        flips.extend(outcome.flips);
    }

    run_on_flip(
        &mut TriggerScope::new(&mut next.board, &mut next.status_flags, &mut *rng, &mut report),
        &flips,
    );
    flips.append(&mut report.flips);

    for flip in &flips {
        next.counters.lost[flip.from] += 1;
    }
    next.counters.placed[mover] += 1;

    let up_next = mover.opponent();
    if next.board.is_full() || next.hand(up_next).is_empty() {
        let result = winner(&next.board);
        log::debug!("match over: {result:?}");
        next.game_over = true;
        next.winner = Some(result);
    } else {
        next.current_player = up_next;
    }

    log::debug!(
        "{mover} played {} at {position}: {} flips, {} removed",
        card.name,
        flips.len(),
        report.removed.len()
    );
    next.last_move = Some(LastMove {
        owner: mover,
        position,
        card_index,
        flips,
        removed: report.removed,
        spawned: report.spawned,
        cursed: report.cursed,
    });
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{AbilityKind, Card, CardId, Stats};
    use crate::core::RuleSet;
    use crate::game::create_match;
    use crate::rules::FlipCause;

    fn card(id: u32, stats: Stats) -> Card {
        Card::new(CardId::new(id), format!("Card {id}"), stats)
    }

    fn uniform_deck(base: u32, value: u8) -> Vec<Card> {
        (0..5).map(|i| card(base + i, Stats::uniform(value))).collect()
    }

    /// Random source that always takes the last candidate.
    struct Last;

    impl RandomSource for Last {
        fn pick(&mut self, len: usize) -> usize {
            len - 1
        }

        fn chance(&mut self, _probability: f64) -> bool {
            false
        }
    }

    #[test]
    fn test_invalid_moves() {
        let state = create_match(uniform_deck(1, 5), uniform_deck(10, 5), RuleSet::new(), None);

        assert_eq!(place_card(&state, 9, 0), Err(InvalidMove::OutOfRange { position: 9 }));
        assert_eq!(
            place_card(&state, 0, 5),
            Err(InvalidMove::InvalidHandIndex { index: 5, hand_len: 5 })
        );

        let next = place_card(&state, 0, 0).unwrap();
        assert_eq!(place_card(&next, 0, 0), Err(InvalidMove::CellOccupied { position: 0 }));

        let mut over = next.clone();
        over.game_over = true;
        assert_eq!(place_card(&over, 1, 0), Err(InvalidMove::MatchOver));
    }

    #[test]
    fn test_placement_updates_state() {
        let state = create_match(uniform_deck(1, 5), uniform_deck(10, 5), RuleSet::new(), None);
        let next = place_card(&state, 4, 2).unwrap();

        assert_eq!(next.board.get(4).unwrap().card.id, CardId::new(3));
        assert_eq!(next.board.owner_at(4), Some(Owner::A));
        assert_eq!(next.hand(Owner::A).len(), 4);
        assert_eq!(next.current_player, Owner::B);
        assert_eq!(next.counters.placed[Owner::A], 1);

        let last = next.last_move.as_ref().unwrap();
        assert_eq!(last.position, 4);
        assert_eq!(last.card_index, 2);
        assert!(last.flips.is_empty());

        // Input untouched
        assert!(state.board.is_empty(4));
        assert_eq!(state.hand(Owner::A).len(), 5);
    }

    #[test]
    fn test_basic_capture_counts_losses() {
        let state = create_match(uniform_deck(1, 2), uniform_deck(10, 8), RuleSet::new(), None);
        let state = place_card(&state, 0, 0).unwrap();
        let state = place_card(&state, 1, 0).unwrap();

        assert_eq!(state.board.owner_at(0), Some(Owner::B));
        assert_eq!(state.counters.lost[Owner::A], 1);
        let last = state.last_move.as_ref().unwrap();
        assert_eq!(
            last.flips,
            vec![Flip {
                position: 0,
                from: Owner::A,
                to: Owner::B,
                cause: FlipCause::Basic,
            }]
        );
    }

    #[test]
    fn test_basic_flips_seed_the_combo() {
        let mut deck_a = uniform_deck(1, 5);
        deck_a[0] = card(1, Stats::new(5, 1, 1, 1));
        let combo = RuleSet::new().with(Rule::Combo);
        let mut state = create_match(deck_a, uniform_deck(10, 5), combo, None);
        state.board.set(1, Slot::new(Arc::new(card(20, Stats::new(1, 1, 2, 9))), Owner::B));
        state.board.set(0, Slot::new(Arc::new(card(21, Stats::new(1, 3, 1, 1))), Owner::B));

        let next = place_card(&state, 4, 0).unwrap();
        let flips = &next.last_move.as_ref().unwrap().flips;
        let causes: Vec<_> = flips.iter().map(|f| f.cause).collect();
        assert_eq!(causes, vec![FlipCause::Basic, FlipCause::Combo]);
        assert_eq!(next.board.owner_at(0), Some(Owner::A));

        state.rule_set = RuleSet::new();
        let plain = place_card(&state, 4, 0).unwrap();
        assert_eq!(plain.board.owner_at(0), Some(Owner::B));
    }

    #[test]
    fn test_full_board_ends_match() {
        let mut state = create_match(uniform_deck(1, 5), uniform_deck(10, 5), RuleSet::new(), None);
        for position in 0..9 {
            assert!(!state.game_over);
            state = place_card(&state, position, 0).unwrap();
        }

        assert!(state.game_over);
        assert_eq!(state.winner, Some(MatchResult::Winner(Owner::A)));
        assert_eq!(score(&state.board), OwnerMap::new(5, 4));
        assert_eq!(state.hand(Owner::A).len(), 0);
        assert_eq!(state.hand(Owner::B).len(), 1);
    }

    #[test]
    fn test_winner() {
        let mut board = Board::new();
        assert_eq!(winner(&board), MatchResult::Draw);
        board.set(0, Slot::new(Arc::new(card(1, Stats::uniform(1))), Owner::B));
        assert_eq!(winner(&board), MatchResult::Winner(Owner::B));

        board.set(1, Slot::new(Arc::new(card(2, Stats::uniform(1))), Owner::A));
        assert_eq!(winner(&board), MatchResult::Draw);
        board.set(2, Slot::new(Arc::new(card(3, Stats::uniform(1))), Owner::A));
        assert_eq!(winner(&board), MatchResult::Winner(Owner::A));
        assert_eq!(score(&board), OwnerMap::new(2, 1));
    }

    #[test]
    fn test_injected_rng_chooses_targets() {
        let mut deck_a = uniform_deck(1, 5);
        deck_a[0] = card(1, Stats::uniform(5)).with_ability(AbilityKind::Infestation);
        let state = create_match(deck_a, uniform_deck(10, 5), RuleSet::new(), None);

        // Center has empties at 1, 5, 7, 3; the last candidate is 3
        let next = place_card_with(&state, 4, 0, &mut Last).unwrap();
        assert_eq!(next.last_move.as_ref().unwrap().spawned, Some(3));
        assert_eq!(next.rng, state.rng);
    }

    #[test]
    fn test_snapshot_rng_is_deterministic() {
        let mut deck_a = uniform_deck(1, 5);
        deck_a[0] = card(1, Stats::uniform(5)).with_ability(AbilityKind::Infestation);
        let state = create_match(deck_a, uniform_deck(10, 5), RuleSet::new(), None);

        let a = place_card(&state, 4, 0).unwrap();
        let b = place_card(&state, 4, 0).unwrap();
        assert_eq!(a, b);
        assert_ne!(a.rng, state.rng);
    }

    #[test]
    fn test_armor_flag_set_then_cleared() {
        let mut deck_b = uniform_deck(10, 1);
        deck_b[0] = card(10, Stats::uniform(1)).with_ability(AbilityKind::ArmorPlating);
        let state = create_match(uniform_deck(1, 9), deck_b, RuleSet::new(), None);

        let state = place_card(&state, 8, 0).unwrap();
        let state = place_card(&state, 4, 0).unwrap();
        // First hit absorbed
        let state = place_card(&state, 1, 0).unwrap();
        assert_eq!(state.board.owner_at(4), Some(Owner::B));
        assert_eq!(state.status_flags.get(&4), Some(&CardStatus { armor_spent: true }));

        let state = place_card(&state, 0, 0).unwrap();
        // Second hit lands
        let state = place_card(&state, 3, 0).unwrap();
        assert_eq!(state.board.owner_at(4), Some(Owner::A));
        assert!(state.status_flags.get(&4).is_none());
    }

    #[test]
    fn test_opponent_out_of_cards_ends_match() {
        let deck_b = vec![card(10, Stats::uniform(5))];
        let state = create_match(uniform_deck(1, 5), deck_b, RuleSet::new(), None);
        let state = place_card(&state, 0, 0).unwrap();
        let state = place_card(&state, 8, 0).unwrap();
        assert!(!state.game_over);
        assert_eq!(state.current_player, Owner::A);

        // B has nothing left, so A's move is the last one
        let state = place_card(&state, 4, 0).unwrap();
        assert!(state.game_over);
        assert_eq!(state.winner, Some(MatchResult::Winner(Owner::A)));
        assert_eq!(state.current_player, Owner::A);
    }
}
