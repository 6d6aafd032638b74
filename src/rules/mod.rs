//! Capture rules.
//!
//! Everything here is pure: functions take a board and a read-only
//! `MatchContext` and return values. The turn orchestrator in `game`
//! commits the results.
//!
//! - `stats`: effective and comparison stats for a card at a position
//! - `capture`: basic, Same and Plus captures plus Armor and Reflect
//! - `combo`: worklist propagation of rule-based captures

pub mod capture;
pub mod combo;
pub mod stats;

pub use capture::{resolve_captures, Flip, FlipCause, Resolution};
pub use combo::{propagate_combo, ComboOutcome};
pub use stats::{comparison_stats, effective_stats, is_silenced, MatchContext};
