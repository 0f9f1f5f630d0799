//! Transition rules.
//!
//! - `TransitionRule`: the seam the step kernel evaluates per cell
//! - `RuleTable`: birth/survival lookup tables, the standard implementation
//!
//! The grid never interprets rules itself; it counts neighbors and asks.

pub mod table;
pub mod transition;

pub use table::RuleTable;
pub use transition::{TransitionRule, MAX_NEIGHBORS};
