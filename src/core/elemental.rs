//! Elemental tiles.
//!
//! When the Elemental rule is active each board cell may carry an element.
//! The grid is generated once at match start and never changes.

use serde::{Deserialize, Serialize};

use super::board::BOARD_SIZE;
use super::rng::RandomSource;
use crate::cards::Element;

/// Per-cell element tags, aligned with board positions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementalGrid(pub [Option<Element>; BOARD_SIZE]);

impl ElementalGrid {
    /// A grid with no elemental tiles.
    #[must_use]
    pub const fn empty() -> Self {
        Self([None; BOARD_SIZE])
    }

    /// Each tile independently receives a uniformly chosen element with
    /// probability `chance`.
    pub fn generate(rng: &mut dyn RandomSource, chance: f64) -> Self {
        let mut tiles = [None; BOARD_SIZE];
        for tile in &mut tiles {
            if rng.chance(chance) {
                *tile = Element::ALL.get(rng.pick(Element::ALL.len())).copied();
            }
        }
        Self(tiles)
    }

    /// The element on a tile, if any.
    #[must_use]
    pub fn at(&self, position: usize) -> Option<Element> {
        self.0.get(position).copied().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameRng;

    #[test]
    fn test_generate_is_deterministic() {
        let a = ElementalGrid::generate(&mut GameRng::new(5), 0.5);
        let b = ElementalGrid::generate(&mut GameRng::new(5), 0.5);
        assert_eq!(a, b);
    }

    #[test]
    fn test_generate_extremes() {
        let none = ElementalGrid::generate(&mut GameRng::new(1), 0.0);
        assert_eq!(none, ElementalGrid::empty());

        let full = ElementalGrid::generate(&mut GameRng::new(1), 1.0);
        assert!(full.0.iter().all(Option::is_some));
    }

    /// Answers every pick with an index past the end.
    struct OutOfBounds;

    impl RandomSource for OutOfBounds {
        fn pick(&mut self, len: usize) -> usize {
            len
        }

        fn chance(&mut self, _probability: f64) -> bool {
            true
        }
    }

    #[test]
    fn test_generate_tolerates_bad_picks() {
        assert_eq!(ElementalGrid::generate(&mut OutOfBounds, 1.0), ElementalGrid::empty());
    }

    #[test]
    fn test_at() {
        let mut tiles = [None; BOARD_SIZE];
        tiles[4] = Some(Element::Holy);
        let grid = ElementalGrid(tiles);

        assert_eq!(grid.at(4), Some(Element::Holy));
        assert_eq!(grid.at(0), None);
        assert_eq!(grid.at(42), None);
    }
}
