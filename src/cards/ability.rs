//! Ability catalog.
//!
//! Every ability is a variant of the closed `AbilityKind` enum. Static
//! metadata (id, display name, category, trigger timing) lives in one
//! exhaustive table, so adding a variant forces every handler table in the
//! engine to be revisited at compile time.
//!
//! Some catalogued abilities (Poison Aura, Reanimate, Ambush, Scout,
//! Scavenge, Roar) have no rule in the engine and behave like plain cards.

use serde::{Deserialize, Serialize};

/// Ability family, used for cross-card conditions such as Symbiosis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AbilityCategory {
    Support,
    Sabotage,
    Slayer,
    Shield,
    Swarm,
    Undead,
    Flying,
    Heavy,
    Tactical,
}

/// When an ability does its work.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TriggerTiming {
    /// Continuously in effect while on the board.
    Passive,
    /// Once, right after the card is placed.
    OnPlay,
    /// Once, when the card is captured.
    OnFlip,
    /// In response to other events.
    Reactive,
}

/// Static description of an ability.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AbilityInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: AbilityCategory,
    pub timing: TriggerTiming,
}

/// Every ability a card can carry.
///
/// Serializes as its registry id (`"center_boost"`, `"10000_needles"`, ...).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbilityKind {
    CenterBoost,
    ElementalMastery,
    BadBreath,
    PoisonAura,
    GiantSlayer,
    AceHunter,
    Fortress,
    Reflect,
    HiveMind,
    Infestation,
    Symbiosis,
    Haunt,
    Reanimate,
    Curse,
    Hover,
    Ambush,
    Scout,
    Lockdown,
    SelfDestruct,
    ArmorPlating,
    Amplifier,
    Mirror,
    Nullifier,
    Scavenge,
    #[serde(rename = "10000_needles")]
    TenThousandNeedles,
    Grudge,
    Explode,
    Roar,
}

impl AbilityKind {
    pub const ALL: [AbilityKind; 28] = [
        AbilityKind::CenterBoost,
        AbilityKind::ElementalMastery,
        AbilityKind::BadBreath,
        AbilityKind::PoisonAura,
        AbilityKind::GiantSlayer,
        AbilityKind::AceHunter,
        AbilityKind::Fortress,
        AbilityKind::Reflect,
        AbilityKind::HiveMind,
        AbilityKind::Infestation,
        AbilityKind::Symbiosis,
        AbilityKind::Haunt,
        AbilityKind::Reanimate,
        AbilityKind::Curse,
        AbilityKind::Hover,
        AbilityKind::Ambush,
        AbilityKind::Scout,
        AbilityKind::Lockdown,
        AbilityKind::SelfDestruct,
        AbilityKind::ArmorPlating,
        AbilityKind::Amplifier,
        AbilityKind::Mirror,
        AbilityKind::Nullifier,
        AbilityKind::Scavenge,
        AbilityKind::TenThousandNeedles,
        AbilityKind::Grudge,
        AbilityKind::Explode,
        AbilityKind::Roar,
    ];

    /// Look up an ability by registry id.
    ///
    /// Unknown ids return `None`; a card carrying one simply has no ability.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.info().id == id)
    }

    #[must_use]
    pub fn id(self) -> &'static str {
        self.info().id
    }

    #[must_use]
    pub fn category(self) -> AbilityCategory {
        self.info().category
    }

    #[must_use]
    pub fn timing(self) -> TriggerTiming {
        self.info().timing
    }

    /// Static metadata for this ability.
    #[must_use]
    pub fn info(self) -> AbilityInfo {
        use AbilityCategory::*;
        use TriggerTiming::*;

        let (id, name, description, category, timing) = match self {
            AbilityKind::CenterBoost => (
                "center_boost",
                "Center Support",
                "If in center position, adjacent friendly cards get +1 to their lowest side",
                Support,
                Passive,
            ),
            AbilityKind::ElementalMastery => (
                "elemental_mastery",
                "Elemental Mastery",
                "Doubles element bonus (+2 instead of +1 on matching element)",
                Support,
                Passive,
            ),
            AbilityKind::BadBreath => (
                "bad_breath",
                "Bad Breath",
                "Adjacent enemy cards have their stats reduced by 1",
                Sabotage,
                Passive,
            ),
            AbilityKind::PoisonAura => (
                "poison_aura",
                "Poison Aura",
                "Enemy cards placed adjacent this turn get -2 to all sides",
                Sabotage,
                Reactive,
            ),
            AbilityKind::GiantSlayer => (
                "giant_slayer",
                "Giant Slayer",
                "Your 1-3 stats beat enemy A (10) stats",
                Slayer,
                Passive,
            ),
            AbilityKind::AceHunter => (
                "ace_hunter",
                "Ace Hunter",
                "Treats all enemy A (10) values as 5",
                Slayer,
                Passive,
            ),
            AbilityKind::Fortress => (
                "fortress",
                "Fortress",
                "Cannot be flipped by basic comparison (only Same/Plus)",
                Shield,
                Passive,
            ),
            AbilityKind::Reflect => (
                "reflect",
                "Reflect",
                "When flipped, also flip the card that captured it",
                Shield,
                OnFlip,
            ),
            AbilityKind::HiveMind => (
                "hive_mind",
                "Hive Mind",
                "Gain +1 to all stats for every other copy of this card on the board",
                Swarm,
                Passive,
            ),
            AbilityKind::Infestation => (
                "infestation",
                "Infestation",
                "When played, spawn a weak token (1/1/1/1) in a random adjacent empty slot",
                Swarm,
                OnPlay,
            ),
            AbilityKind::Symbiosis => (
                "symbiosis",
                "Symbiosis",
                "If placed next to another Swarm card, both cannot be flipped by Same/Plus",
                Swarm,
                Passive,
            ),
            AbilityKind::Haunt => (
                "haunt",
                "Haunt",
                "When flipped, immediately flip one random adjacent card",
                Undead,
                OnFlip,
            ),
            AbilityKind::Reanimate => (
                "reanimate",
                "Reanimate",
                "If this card is in your hand at game end, it counts as captured",
                Undead,
                Passive,
            ),
            AbilityKind::Curse => (
                "curse",
                "Curse",
                "When played, permanently reduce one adjacent enemy card's stats by 1",
                Undead,
                OnPlay,
            ),
            AbilityKind::Hover => (
                "hover",
                "Hover",
                "Ignores elemental tile penalties (but still gains bonuses)",
                Flying,
                Passive,
            ),
            AbilityKind::Ambush => (
                "ambush",
                "Ambush",
                "Can be played on top of an existing card if its total power is less than 10",
                Flying,
                OnPlay,
            ),
            AbilityKind::Scout => (
                "scout",
                "Scout",
                "When played, reveal one random card from opponent's hand",
                Flying,
                OnPlay,
            ),
            AbilityKind::Lockdown => (
                "lockdown",
                "Lockdown",
                "Cannot be flipped by combo rules (Same/Plus). Only direct comparison",
                Heavy,
                Passive,
            ),
            AbilityKind::SelfDestruct => (
                "self_destruct",
                "Self-Destruct",
                "When flipped, remove this card from the board entirely (empty space)",
                Heavy,
                OnFlip,
            ),
            AbilityKind::ArmorPlating => (
                "armor_plating",
                "Armor Plating",
                "The first time this would be flipped, prevent it (requires two attacks)",
                Heavy,
                Passive,
            ),
            AbilityKind::Amplifier => (
                "amplifier",
                "Amplifier",
                "Adjacent friendly cards gain +2 to the side touching this card",
                Tactical,
                Passive,
            ),
            AbilityKind::Mirror => (
                "mirror",
                "Mirror",
                "Copies the stats of the card to its left",
                Tactical,
                Passive,
            ),
            AbilityKind::Nullifier => (
                "nullifier",
                "Nullifier",
                "Silences the abilities of all adjacent cards",
                Tactical,
                Passive,
            ),
            AbilityKind::Scavenge => (
                "scavenge",
                "Scavenge",
                "If you win the match with this card on the board, gain bonus points",
                Support,
                Passive,
            ),
            AbilityKind::TenThousandNeedles => (
                "10000_needles",
                "10,000 Needles",
                "If this card attacks a side with value A (10), it wins automatically",
                Slayer,
                Passive,
            ),
            AbilityKind::Grudge => (
                "grudge",
                "Grudge",
                "Gain +1 to all sides for every card you have lost (flipped) this match",
                Undead,
                Passive,
            ),
            AbilityKind::Explode => (
                "explode",
                "Explode",
                "When flipped, turn all adjacent cards into empty spaces",
                Heavy,
                OnFlip,
            ),
            AbilityKind::Roar => (
                "roar",
                "Roar",
                "When played, opponent cannot place cards adjacent to this on their next turn",
                Heavy,
                OnPlay,
            ),
        };

        AbilityInfo {
            id,
            name,
            description,
            category,
            timing,
        }
    }
}

impl std::fmt::Display for AbilityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.info().name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<_> = AbilityKind::ALL.iter().map(|k| k.id()).collect();
        assert_eq!(ids.len(), AbilityKind::ALL.len());
    }

    #[test]
    fn test_from_id_round_trip() {
        for kind in AbilityKind::ALL {
            assert_eq!(AbilityKind::from_id(kind.id()), Some(kind));
        }
    }

    #[test]
    fn test_unknown_id_is_none() {
        assert_eq!(AbilityKind::from_id("time_stop"), None);
        assert_eq!(AbilityKind::from_id(""), None);
    }

    #[test]
    fn test_serde_uses_registry_id() {
        for kind in AbilityKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.id()));
        }
    }

    #[test]
    fn test_categories_and_timing() {
        assert_eq!(AbilityKind::Symbiosis.category(), AbilityCategory::Swarm);
        assert_eq!(AbilityKind::HiveMind.category(), AbilityCategory::Swarm);
        assert_eq!(AbilityKind::Curse.timing(), TriggerTiming::OnPlay);
        assert_eq!(AbilityKind::Explode.timing(), TriggerTiming::OnFlip);
        assert_eq!(AbilityKind::TenThousandNeedles.to_string(), "10,000 Needles");
    }
}
