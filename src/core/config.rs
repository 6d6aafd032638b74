//! Match configuration types.
//!
//! - `Rule` / `RuleSet`: the optional capture rules chosen at match start
//! - `MatchConfig`: deck limits, elemental tile density and the RNG seed
//!
//! Both are fixed for the lifetime of a match.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// An optional match-wide rule toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rule {
    /// Two or more equal facing pairs flip all of them.
    Same,
    /// Two or more facing pairs with the same sum flip all of them.
    Plus,
    /// Freshly captured cards capture again.
    Combo,
    /// Board tiles carry elements that shift stats by one.
    Elemental,
}

impl Rule {
    pub const ALL: [Rule; 4] = [Rule::Same, Rule::Plus, Rule::Combo, Rule::Elemental];
}

/// The subset of rules active for a match.
///
/// ```
/// use rust_triad::core::{Rule, RuleSet};
///
/// let rules = RuleSet::new().with(Rule::Same).with(Rule::Combo);
/// assert!(rules.contains(Rule::Same));
/// assert!(!rules.contains(Rule::Plus));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RuleSet {
    pub same: bool,
    pub plus: bool,
    pub combo: bool,
    pub elemental: bool,
}

impl RuleSet {
    /// Basic rules only.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            same: false,
            plus: false,
            combo: false,
            elemental: false,
        }
    }

    /// Every optional rule enabled.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            same: true,
            plus: true,
            combo: true,
            elemental: true,
        }
    }

    /// Build from a list of rules.
    #[must_use]
    pub fn from_rules(rules: &[Rule]) -> Self {
        rules.iter().fold(Self::new(), |set, &rule| set.with(rule))
    }

    /// Enable a rule (builder pattern).
    #[must_use]
    pub fn with(mut self, rule: Rule) -> Self {
        *self.flag_mut(rule) = true;
        self
    }

    /// Check whether a rule is active.
    #[must_use]
    pub fn contains(&self, rule: Rule) -> bool {
        match rule {
            Rule::Same => self.same,
            Rule::Plus => self.plus,
            Rule::Combo => self.combo,
            Rule::Elemental => self.elemental,
        }
    }

    /// Iterate over active rules.
    pub fn iter(&self) -> impl Iterator<Item = Rule> + '_ {
        Rule::ALL.into_iter().filter(move |&rule| self.contains(rule))
    }

    fn flag_mut(&mut self, rule: Rule) -> &mut bool {
        match rule {
            Rule::Same => &mut self.same,
            Rule::Plus => &mut self.plus,
            Rule::Combo => &mut self.combo,
            Rule::Elemental => &mut self.elemental,
        }
    }
}

/// Match setup parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Cards per deck (and starting hand size).
    pub deck_size: usize,

    /// Maximum summed card cost of a deck.
    pub deck_cost_limit: u32,

    /// Probability that a tile receives an element when the grid is generated.
    pub elemental_tile_chance: f64,

    /// Seed for the match RNG.
    /// Same seed produces identical trigger targets and elemental grids.
    pub seed: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            deck_size: 5,
            deck_cost_limit: 30,
            elemental_tile_chance: 0.3,
            seed: 42,
        }
    }
}

impl MatchConfig {
    /// Parse and validate a JSON config. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.elemental_tile_chance) {
            return Err(ConfigError::TileChance(self.elemental_tile_chance));
        }
        if !(1..=9).contains(&self.deck_size) {
            return Err(ConfigError::DeckSize(self.deck_size));
        }
        Ok(())
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_deck_cost_limit(mut self, limit: u32) -> Self {
        self.deck_cost_limit = limit;
        self
    }

    pub fn with_elemental_tile_chance(mut self, chance: f64) -> Self {
        self.elemental_tile_chance = chance;
        self
    }
}
