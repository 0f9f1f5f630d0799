//! Engine configuration.
//!
//! Collaborators build an `EngineConfig` once and hand it to
//! `LifeEngine::from_config`. Validation is deferred to construction so a
//! config can be deserialized or edited freely before use.

use serde::{Deserialize, Serialize};

use crate::rules::RuleTable;

/// Default live-cell probability for random fills.
pub const DEFAULT_DENSITY: f64 = 0.18;

/// Default grid height.
pub const DEFAULT_ROWS: i64 = 20;

/// Default grid width.
pub const DEFAULT_COLS: i64 = 30;

/// Complete engine configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Grid height. Must be positive.
    pub rows: i64,

    /// Grid width. Must be positive.
    pub cols: i64,

    /// Birth/survival tables.
    pub rules: RuleTable,

    /// Seed for the engine's built-in random source.
    pub seed: u64,

    /// Fill the grid randomly at construction with this density.
    /// `None` starts with an all-dead grid.
    pub initial_density: Option<f64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLS)
    }
}

impl EngineConfig {
    /// Create a configuration with default rules, seed 0 and an empty grid.
    #[must_use]
    pub fn new(rows: i64, cols: i64) -> Self {
        Self {
            rows,
            cols,
            rules: RuleTable::default(),
            seed: 0,
            initial_density: None,
        }
    }

    /// Set the rule table.
    #[must_use]
    pub fn with_rules(mut self, rules: RuleTable) -> Self {
        self.rules = rules;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Randomize the grid at construction.
    #[must_use]
    pub fn with_initial_density(mut self, density: f64) -> Self {
        self.initial_density = Some(density);
        self
    }
}
