//! The 3x3 board.
//!
//! Cells are stored row-major (`row * 3 + col`). Neighbors are orthogonal
//! only and never wrap around an edge.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::owner::{Owner, OwnerMap};
use crate::cards::Card;

/// Number of cells on the board.
pub const BOARD_SIZE: usize = 9;

/// Index of the middle cell.
pub const CENTER: usize = 4;

const WIDTH: usize = 3;

/// One of the four orthogonal directions, in stat order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Top,
    Right,
    Bottom,
    Left,
}

impl Direction {
    /// Scan order used everywhere a deterministic direction order matters.
    pub const ALL: [Direction; 4] = [
        Direction::Top,
        Direction::Right,
        Direction::Bottom,
        Direction::Left,
    ];

    /// Index into a `Stats` array.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Direction::Top => 0,
            Direction::Right => 1,
            Direction::Bottom => 2,
            Direction::Left => 3,
        }
    }

    /// The side of a neighbor that faces back towards us.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Top => Direction::Bottom,
            Direction::Right => Direction::Left,
            Direction::Bottom => Direction::Top,
            Direction::Left => Direction::Right,
        }
    }
}

/// An occupied cell: a card and whoever currently owns it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub card: Arc<Card>,
    pub owner: Owner,
}

impl Slot {
    #[must_use]
    pub fn new(card: Arc<Card>, owner: Owner) -> Self {
        Self { card, owner }
    }
}

/// Check that a position names a cell.
#[must_use]
pub const fn in_range(position: usize) -> bool {
    position < BOARD_SIZE
}

/// The cell next to `position` in `dir`, if it is on the board.
#[must_use]
pub const fn neighbor(position: usize, dir: Direction) -> Option<usize> {
    let row = position / WIDTH;
    let col = position % WIDTH;
    match dir {
        Direction::Top if row > 0 => Some(position - WIDTH),
        Direction::Right if col < WIDTH - 1 => Some(position + 1),
        Direction::Bottom if row < WIDTH - 1 => Some(position + WIDTH),
        Direction::Left if col > 0 => Some(position - 1),
        _ => None,
    }
}

/// All on-board neighbors of `position` in top/right/bottom/left order.
pub fn neighbors(position: usize) -> impl Iterator<Item = (Direction, usize)> {
    Direction::ALL
        .into_iter()
        .filter_map(move |dir| neighbor(position, dir).map(|n| (dir, n)))
}

/// Nine cells, each empty or holding a `Slot`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [Option<Slot>; BOARD_SIZE],
}

impl Board {
    /// An empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, position: usize) -> Option<&Slot> {
        self.cells.get(position).and_then(Option::as_ref)
    }

    /// Place a slot, replacing whatever was there.
    pub fn set(&mut self, position: usize, slot: Slot) {
        self.cells[position] = Some(slot);
    }

    /// Empty a cell, returning what it held.
    pub fn take(&mut self, position: usize) -> Option<Slot> {
        self.cells[position].take()
    }

    /// Change the owner of an occupied cell. Empty cells are left alone.
    pub fn set_owner(&mut self, position: usize, owner: Owner) {
        if let Some(slot) = self.cells[position].as_mut() {
            slot.owner = owner;
        }
    }

    /// Swap the card in an occupied cell, keeping its owner.
    pub fn replace_card(&mut self, position: usize, card: Arc<Card>) {
        if let Some(slot) = self.cells[position].as_mut() {
            slot.card = card;
        }
    }

    #[must_use]
    pub fn is_empty(&self, position: usize) -> bool {
        self.cells[position].is_none()
    }

    #[must_use]
    pub fn owner_at(&self, position: usize) -> Option<Owner> {
        self.get(position).map(|slot| slot.owner)
    }

    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.occupied_count() == BOARD_SIZE
    }

    /// Empty positions in ascending order.
    pub fn empty_positions(&self) -> impl Iterator<Item = usize> + '_ {
        (0..BOARD_SIZE).filter(move |&p| self.is_empty(p))
    }

    /// Occupied cells with their positions, in ascending order.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, &Slot)> {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(p, cell)| cell.as_ref().map(|slot| (p, slot)))
    }

    /// Occupied cells per owner.
    #[must_use]
    pub fn counts(&self) -> OwnerMap<usize> {
        let mut counts = OwnerMap::default();
        for (_, slot) in self.occupied() {
            counts[slot.owner] += 1;
        }
        counts
    }
}
