//! Built-in card catalog.
//!
//! The standard 68-card set, exposed as a process-wide registry that is
//! built on first use and never mutated. Cost equals level.

use once_cell::sync::Lazy;

use super::definition::{Card, CardId, Element, Stats};
use super::registry::CardRegistry;

/// Shared registry of the standard card set.
pub static STANDARD_CARDS: Lazy<CardRegistry> = Lazy::new(|| {
    let mut registry = CardRegistry::new();
    for &(id, name, level, stats, element) in TABLE.iter() {
        let mut card = Card::new(CardId::new(id), name, Stats(stats)).with_level(level);
        card.element = element;
        if let Err(err) = registry.register(card) {
            log::error!("standard catalog entry rejected: {err}");
        }
    }
    registry
});

/// The standard card set.
#[must_use]
pub fn standard_cards() -> &'static CardRegistry {
    &STANDARD_CARDS
}

#[rustfmt::skip]
const TABLE: [(u32, &str, u8, [u8; 4], Option<Element>); 68] = [
    (1, "Geezard", 1, [1, 4, 1, 5], None),
    (2, "Funguar", 1, [5, 1, 1, 3], None),
    (3, "Bite Bug", 1, [1, 3, 3, 5], None),
    (4, "Red Bat", 1, [6, 1, 1, 2], None),
    (5, "Blobra", 1, [2, 3, 1, 5], None),
    (6, "Gayla", 1, [2, 1, 4, 4], Some(Element::Thunder)),
    (7, "Gesper", 1, [1, 5, 4, 1], None),
    (8, "Fastitocalon-F", 1, [3, 5, 2, 1], Some(Element::Earth)),
    (9, "Blood Soul", 1, [2, 1, 6, 1], None),
    (10, "Caterchipillar", 1, [4, 2, 4, 3], None),
    (11, "Cockatrice", 1, [2, 1, 2, 6], Some(Element::Thunder)),
    (12, "Grat", 2, [7, 1, 3, 1], None),
    (13, "Buel", 2, [6, 2, 2, 3], None),
    (14, "Mesmerize", 2, [5, 3, 3, 4], None),
    (15, "Glacial Eye", 2, [6, 1, 4, 3], Some(Element::Ice)),
    (16, "Belhelmel", 2, [3, 3, 4, 5], None),
    (17, "Thrustaevis", 2, [5, 3, 2, 5], Some(Element::Wind)),
    (18, "Anacondaur", 2, [5, 1, 3, 5], Some(Element::Poison)),
    (19, "Creeps", 2, [5, 2, 5, 2], Some(Element::Thunder)),
    (20, "Grendel", 2, [4, 4, 5, 2], Some(Element::Thunder)),
    (21, "Forbidden", 3, [6, 6, 3, 2], None),
    (22, "Armadodo", 3, [6, 3, 1, 6], Some(Element::Earth)),
    (23, "Tri-Face", 3, [3, 5, 5, 5], Some(Element::Poison)),
    (24, "Fastitocalon", 3, [7, 5, 1, 3], Some(Element::Earth)),
    (25, "Snow Lion", 3, [7, 1, 5, 3], Some(Element::Ice)),
    (26, "Ochu", 3, [5, 6, 3, 3], None),
    (27, "SAM08G", 3, [5, 6, 2, 4], Some(Element::Fire)),
    (28, "Death Claw", 3, [4, 4, 7, 2], Some(Element::Fire)),
    (29, "Cactuar", 3, [6, 2, 6, 3], None),
    (30, "Tonberry", 3, [3, 6, 4, 4], None),
    (31, "T-Rexaur", 4, [4, 6, 2, 7], None),
    (32, "Bomb", 4, [2, 7, 6, 3], Some(Element::Fire)),
    (33, "Blitz", 4, [1, 6, 4, 7], Some(Element::Thunder)),
    (34, "Wendigo", 4, [7, 3, 1, 6], None),
    (35, "Torama", 4, [7, 4, 4, 4], None),
    (36, "Adamantoise", 4, [4, 5, 5, 6], Some(Element::Earth)),
    (37, "Iron Giant", 5, [6, 5, 5, 6], None),
    (38, "Behemoth", 5, [3, 6, 5, 7], None),
    (39, "Chimera", 5, [7, 6, 5, 3], Some(Element::Water)),
    (40, "PuPu", 5, [3, 10, 2, 1], None),
    (41, "Elastoid", 5, [6, 2, 6, 7], None),
    (42, "Malboro", 5, [7, 7, 4, 2], Some(Element::Poison)),
    (43, "Ruby Dragon", 5, [7, 4, 2, 7], Some(Element::Fire)),
    (44, "Elvoret", 6, [7, 8, 3, 4], Some(Element::Wind)),
    (45, "X-ATM092", 6, [4, 3, 8, 7], None),
    (46, "Granaldo", 6, [7, 2, 8, 5], None),
    (47, "Gerogero", 6, [1, 8, 8, 6], Some(Element::Poison)),
    (48, "Propagator", 7, [8, 4, 4, 8], None),
    (49, "Jumbo Cactuar", 7, [8, 8, 4, 4], None),
    (50, "Tri-Point", 7, [8, 5, 2, 8], Some(Element::Thunder)),
    (51, "Gargantua", 7, [5, 6, 6, 8], None),
    (52, "MiniMog", 8, [9, 3, 2, 6], None),
    (53, "Chicobo", 8, [9, 4, 4, 8], None),
    (54, "Quezacotl", 8, [2, 9, 9, 4], Some(Element::Thunder)),
    (55, "Shiva", 8, [6, 7, 4, 9], Some(Element::Ice)),
    (56, "Ifrit", 8, [9, 6, 2, 8], Some(Element::Fire)),
    (57, "Siren", 8, [8, 2, 9, 6], None),
    (58, "Carbuncle", 9, [8, 4, 10, 4], None),
    (59, "Diablos", 9, [5, 10, 8, 3], None),
    (60, "Leviathan", 9, [7, 10, 1, 7], Some(Element::Water)),
    (61, "Odin", 9, [8, 10, 3, 5], None),
    (62, "Bahamut", 9, [10, 8, 2, 6], None),
    (63, "Squall", 10, [10, 4, 6, 9], None),
    (64, "Rinoa", 10, [10, 2, 8, 4], None),
    (65, "Quistis", 10, [9, 6, 2, 10], None),
    (66, "Selphie", 10, [10, 8, 6, 4], None),
    (67, "Zell", 10, [8, 5, 10, 6], None),
    (68, "Irvine", 10, [2, 10, 9, 6], None),
];
