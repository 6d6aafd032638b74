//! Owner identification and per-owner data storage.
//!
//! ## Owner
//!
//! The game is strictly two-player: every occupied cell and every hand
//! belongs to either `Owner::A` or `Owner::B`.
//!
//! ## OwnerMap
//!
//! Fixed two-slot storage indexed by `Owner`, used for hands, counters
//! and scores.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two players.
///
/// `A` moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Owner {
    A,
    B,
}

impl Owner {
    /// Both owners in turn order.
    pub const ALL: [Owner; 2] = [Owner::A, Owner::B];

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Owner::A => Owner::B,
            Owner::B => Owner::A,
        }
    }

    /// Slot index (A = 0, B = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Owner::A => 0,
            Owner::B => 1,
        }
    }
}

impl std::fmt::Display for Owner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Owner::A => write!(f, "Player A"),
            Owner::B => write!(f, "Player B"),
        }
    }
}

/// Per-owner data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use rust_triad::core::{Owner, OwnerMap};
///
/// let mut lost: OwnerMap<u32> = OwnerMap::default();
/// lost[Owner::B] += 2;
///
/// assert_eq!(lost[Owner::A], 0);
/// assert_eq!(lost[Owner::B], 2);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OwnerMap<T> {
    a: T,
    b: T,
}

impl<T> OwnerMap<T> {
    /// Create a map from explicit values.
    #[must_use]
    pub const fn new(a: T, b: T) -> Self {
        Self { a, b }
    }

    /// Create a map with values from a factory function.
    pub fn from_fn(factory: impl Fn(Owner) -> T) -> Self {
        Self {
            a: factory(Owner::A),
            b: factory(Owner::B),
        }
    }

    /// Get a reference to an owner's data.
    #[must_use]
    pub fn get(&self, owner: Owner) -> &T {
        match owner {
            Owner::A => &self.a,
            Owner::B => &self.b,
        }
    }

    /// Get a mutable reference to an owner's data.
    pub fn get_mut(&mut self, owner: Owner) -> &mut T {
        match owner {
            Owner::A => &mut self.a,
            Owner::B => &mut self.b,
        }
    }

    /// Iterate over (Owner, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (Owner, &T)> {
        [(Owner::A, &self.a), (Owner::B, &self.b)].into_iter()
    }
}

impl<T> Index<Owner> for OwnerMap<T> {
    type Output = T;

    fn index(&self, owner: Owner) -> &Self::Output {
        self.get(owner)
    }
}

impl<T> IndexMut<Owner> for OwnerMap<T> {
    fn index_mut(&mut self, owner: Owner) -> &mut Self::Output {
        self.get_mut(owner)
    }
}
