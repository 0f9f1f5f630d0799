//! The grid engine.
//!
//! `LifeEngine` owns the current generation, a scratch buffer of the same
//! shape, the rule table and a seeded random source. Collaborators (display,
//! input, scheduling) only ever go through the methods here; raw storage is
//! never handed out.
//!
//! ## Stepping
//!
//! `step()` reads the current buffer, writes every next state into the
//! scratch buffer, then swaps the two. No cell ever observes another cell's
//! already-computed next state, and no allocation happens per generation.
//!
//! ## Errors
//!
//! Coordinates are signed and checked. A rejected call returns `Err` and
//! leaves the grid exactly as it was.
//!
//! ```
//! use moore_life::LifeEngine;
//!
//! let mut engine = LifeEngine::new(5, 5).unwrap();
//! engine.toggle(2, 1).unwrap();
//! engine.toggle(2, 2).unwrap();
//! engine.toggle(2, 3).unwrap();
//!
//! engine.step();
//! assert!(engine.is_alive(1, 2).unwrap());
//! assert!(!engine.is_alive(2, 1).unwrap());
//! assert!(engine.toggle(5, 0).is_err());
//! ```

use rand::Rng;
use tracing::{debug, trace};

use super::buffer::CellBuffer;
use super::pattern;
use crate::core::config::{EngineConfig, DEFAULT_DENSITY};
use crate::core::error::{LifeError, Result};
use crate::core::rng::{LifeRng, LifeRngState};
use crate::core::Dimensions;
use crate::rules::{RuleTable, TransitionRule};

/// Double-buffered Life-like automaton on a bounded grid.
#[derive(Clone, Debug)]
pub struct LifeEngine {
    current: CellBuffer,
    scratch: CellBuffer,
    rules: RuleTable,
    rng: LifeRng,
    generation: u64,
}

fn check_density(density: f64) -> Result<()> {
    if (0.0..=1.0).contains(&density) {
        Ok(())
    } else {
        Err(LifeError::InvalidParameter { name: "density", value: density })
    }
}

impl LifeEngine {
    /// Create an all-dead grid with the default B36/S23 rules.
    ///
    /// Fails with `InvalidDimensions` unless both extents are positive.
    pub fn new(rows: i64, cols: i64) -> Result<Self> {
        Self::with_rules(rows, cols, RuleTable::default())
    }

    /// Create an all-dead grid with the given rules.
    pub fn with_rules(rows: i64, cols: i64, rules: RuleTable) -> Result<Self> {
        let dims = Dimensions::new(rows, cols)?;
        Ok(Self::from_buffer(CellBuffer::new(dims), rules, LifeRng::new(0)))
    }

    /// Create an engine from a full configuration.
    ///
    /// If `initial_density` is set the grid is randomized once with the
    /// configured seed; otherwise it starts all dead.
    pub fn from_config(config: &EngineConfig) -> Result<Self> {
        let dims = Dimensions::new(config.rows, config.cols)?;
        if let Some(density) = config.initial_density {
            check_density(density)?;
        }

        let mut engine = Self::from_buffer(CellBuffer::new(dims), config.rules, LifeRng::new(config.seed));
        if let Some(density) = config.initial_density {
            engine.randomize(density)?;
        }
        Ok(engine)
    }

    /// Create an engine sized exactly to a text pattern, with default rules.
    ///
    /// See [`pattern`](super::pattern) for the format.
    pub fn from_pattern(text: &str) -> Result<Self> {
        let buffer = pattern::parse(text)?;
        Ok(Self::from_buffer(buffer, RuleTable::default(), LifeRng::new(0)))
    }

    fn from_buffer(current: CellBuffer, rules: RuleTable, rng: LifeRng) -> Self {
        let dims = current.dims();
        debug!(%dims, %rules, seed = rng.seed(), "created grid engine");
        Self {
            scratch: CellBuffer::new(dims),
            current,
            rules,
            rng,
            generation: 0,
        }
    }

    // === Queries ===

    /// Grid extent. Fixed for the lifetime of the engine.
    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        self.current.dims()
    }

    /// Liveness of one cell.
    pub fn is_alive(&self, row: i64, col: i64) -> Result<bool> {
        let (r, c) = self.dimensions().check(row, col)?;
        Ok(self.current.get(r, c))
    }

    /// Live Moore neighbors of one cell, as `step()` would count them.
    pub fn neighbor_count(&self, row: i64, col: i64) -> Result<u8> {
        let (r, c) = self.dimensions().check(row, col)?;
        Ok(self.current.neighbor_count(r, c))
    }

    /// Number of live cells.
    #[must_use]
    pub fn population(&self) -> usize {
        self.current.population()
    }

    /// Generations stepped since construction or the last reset.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Active rule table.
    #[must_use]
    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// Live cell coordinates in row-major order.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.current.live_cells()
    }

    /// Position of the built-in random source.
    ///
    /// Pass it back to `restore_rng` to replay the same fills.
    #[must_use]
    pub fn rng_state(&self) -> LifeRngState {
        self.rng.state()
    }

    /// Rewind or advance the built-in random source to a captured position.
    /// The grid itself is not touched.
    pub fn restore_rng(&mut self, state: &LifeRngState) {
        self.rng = LifeRng::from_state(state);
        debug!(seed = state.seed, "restored rng state");
    }

    // === Mutation ===

    /// Flip one cell. No other cell is affected.
    pub fn toggle(&mut self, row: i64, col: i64) -> Result<()> {
        let (r, c) = self.dimensions().check(row, col)?;
        self.current[(r, c)] = !self.current[(r, c)];
        Ok(())
    }

    /// Set one cell's liveness.
    pub fn set_alive(&mut self, row: i64, col: i64, alive: bool) -> Result<()> {
        let (r, c) = self.dimensions().check(row, col)?;
        self.current.set(r, c, alive);
        Ok(())
    }

    /// Kill every cell and reset the generation counter. Idempotent.
    pub fn clear(&mut self) {
        self.current.fill(false);
        self.generation = 0;
        debug!("cleared grid");
    }

    /// Refill every cell from the built-in seeded source.
    ///
    /// Each cell is independently alive with probability `density`, which
    /// must lie in `[0, 1]`. Resets the generation counter.
    pub fn randomize(&mut self, density: f64) -> Result<()> {
        check_density(density)?;
        self.fill_random(density);
        Ok(())
    }

    /// `randomize` with the default density of 0.18.
    pub fn randomize_default(&mut self) {
        self.fill_random(DEFAULT_DENSITY);
    }

    /// Fill from the built-in source. `density` is already validated.
    fn fill_random(&mut self, density: f64) {
        let rng = &mut self.rng;
        self.current.fill_with(|| rng.gen_bool(density));
        self.after_randomize(density);
    }

    /// Refill every cell from an injected random source.
    pub fn randomize_with<G: Rng>(&mut self, density: f64, rng: &mut G) -> Result<()> {
        check_density(density)?;
        self.current.fill_with(|| rng.gen_bool(density));
        self.after_randomize(density);
        Ok(())
    }

    fn after_randomize(&mut self, density: f64) {
        self.generation = 0;
        debug!(density, population = self.current.population(), "randomized grid");
    }

    /// Copy a text pattern onto the grid with its top-left cell at
    /// `(row, col)`. Dead pattern cells overwrite live grid cells.
    ///
    /// The whole pattern must fit; otherwise `OutOfBounds` is returned for
    /// the first corner that falls outside and nothing is written.
    pub fn stamp(&mut self, text: &str, row: i64, col: i64) -> Result<()> {
        let pattern = pattern::parse(text)?;
        let dims = self.dimensions();
        let (r0, c0) = dims.check(row, col)?;

        let size = pattern.dims();
        let far_row = row.saturating_add(size.rows() as i64 - 1);
        let far_col = col.saturating_add(size.cols() as i64 - 1);
        dims.check(far_row, far_col)?;

        for r in 0..size.rows() {
            for c in 0..size.cols() {
                self.current.set(r0 + r, c0 + c, pattern.get(r, c));
            }
        }
        Ok(())
    }

    /// Replace the rule table. Takes effect from the next `step()`.
    pub fn set_rules(&mut self, rules: RuleTable) {
        debug!(from = %self.rules, to = %rules, "rules changed");
        self.rules = rules;
    }

    // === Transition ===

    /// Advance one generation under the engine's rules.
    pub fn step(&mut self) {
        let rules = self.rules;
        self.step_with(&rules);
    }

    /// Advance one generation under an arbitrary transition rule.
    ///
    /// The engine's own rule table is left untouched.
    pub fn step_with<R: TransitionRule + ?Sized>(&mut self, rule: &R) {
        self.current.advance_into(rule, &mut self.scratch);
        std::mem::swap(&mut self.current, &mut self.scratch);
        self.generation += 1;
        trace!(generation = self.generation, population = self.current.population(), "stepped");
    }

    /// Advance `n` generations.
    pub fn step_n(&mut self, n: u64) {
        for _ in 0..n {
            self.step();
        }
    }
}

impl std::fmt::Display for LifeEngine {
    /// One line per row, `#` for live and `.` for dead cells.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let dims = self.dimensions();
        for r in 0..dims.rows() {
            for c in 0..dims.cols() {
                f.write_str(if self.current.get(r, c) { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::pattern::{BLINKER, BLOCK, GLIDER};

    fn snapshot(engine: &LifeEngine) -> Vec<(usize, usize)> {
        engine.live_cells().collect()
    }

    #[test]
    fn test_new_is_empty() {
        let engine = LifeEngine::new(20, 30).unwrap();
        assert_eq!(engine.dimensions(), Dimensions::new(20, 30).unwrap());
        assert_eq!(engine.population(), 0);
        assert_eq!(engine.generation(), 0);
        assert_eq!(*engine.rules(), RuleTable::default());
    }

    #[test]
    fn test_new_rejects_bad_dimensions() {
        assert!(matches!(LifeEngine::new(0, 5), Err(LifeError::InvalidDimensions { .. })));
        assert!(matches!(LifeEngine::new(5, -1), Err(LifeError::InvalidDimensions { .. })));
    }

    #[test]
    fn test_toggle_roundtrip() {
        let mut engine = LifeEngine::new(4, 4).unwrap();
        engine.toggle(1, 2).unwrap();
        assert!(engine.is_alive(1, 2).unwrap());
        assert_eq!(engine.population(), 1);

        engine.toggle(1, 2).unwrap();
        assert!(!engine.is_alive(1, 2).unwrap());
        assert_eq!(engine.population(), 0);
    }

    #[test]
    fn test_rejected_calls_leave_grid() {
        let mut engine = LifeEngine::from_pattern(BLOCK).unwrap();
        let before = snapshot(&engine);

        assert!(matches!(engine.toggle(2, 0), Err(LifeError::OutOfBounds { row: 2, col: 0, .. })));
        assert!(matches!(engine.toggle(-1, 0), Err(LifeError::OutOfBounds { .. })));
        assert!(matches!(engine.is_alive(0, 2), Err(LifeError::OutOfBounds { .. })));
        assert!(matches!(engine.set_alive(0, -3, false), Err(LifeError::OutOfBounds { .. })));
        assert!(matches!(engine.randomize(1.5), Err(LifeError::InvalidParameter { .. })));
        assert!(matches!(engine.randomize(-0.1), Err(LifeError::InvalidParameter { .. })));
        assert!(matches!(engine.randomize(f64::NAN), Err(LifeError::InvalidParameter { .. })));

        assert_eq!(snapshot(&engine), before);
    }

    #[test]
    fn test_isolated_cell_dies() {
        let mut engine = LifeEngine::new(5, 5).unwrap();
        engine.toggle(2, 2).unwrap();
        assert_eq!(engine.neighbor_count(2, 2).unwrap(), 0);
        assert_eq!(engine.neighbor_count(1, 1).unwrap(), 1);

        engine.step();
        assert_eq!(engine.population(), 0);
        assert_eq!(engine.generation(), 1);
    }

    #[test]
    fn test_blinker_oscillates() {
        let mut engine = LifeEngine::new(5, 5).unwrap();
        engine.stamp(BLINKER, 2, 1).unwrap();
        let horizontal = snapshot(&engine);

        engine.step();
        assert_eq!(snapshot(&engine), vec![(1, 2), (2, 2), (3, 2)]);

        engine.step();
        assert_eq!(snapshot(&engine), horizontal);
    }

    #[test]
    fn test_birth_on_six_only_with_default_rules() {
        // Centre cell is dead with exactly six live neighbors.
        let six = "###\n...\n###";
        let mut high_life = LifeEngine::new(3, 3).unwrap();
        high_life.stamp(six, 0, 0).unwrap();
        assert_eq!(high_life.neighbor_count(1, 1).unwrap(), 6);
        high_life.step();
        assert!(high_life.is_alive(1, 1).unwrap());

        let mut conway = LifeEngine::with_rules(3, 3, RuleTable::conway()).unwrap();
        conway.stamp(six, 0, 0).unwrap();
        conway.step();
        assert!(!conway.is_alive(1, 1).unwrap());
    }

    #[test]
    fn test_stamp_bounds() {
        let mut engine = LifeEngine::new(4, 4).unwrap();
        assert!(engine.stamp(GLIDER, 1, 1).is_ok());
        assert_eq!(engine.population(), 5);

        engine.clear();
        assert!(matches!(engine.stamp(GLIDER, 2, 0), Err(LifeError::OutOfBounds { .. })));
        assert!(matches!(engine.stamp(GLIDER, -1, 0), Err(LifeError::OutOfBounds { .. })));
        assert!(matches!(engine.stamp("#?", 0, 0), Err(LifeError::InvalidPattern(_))));
        assert_eq!(engine.population(), 0);
    }

    #[test]
    fn test_stamp_overwrites_region() {
        let mut engine = LifeEngine::new(3, 3).unwrap();
        engine.randomize(1.0).unwrap();
        engine.stamp("..\n..", 0, 0).unwrap();
        assert_eq!(engine.population(), 5);
    }

    #[test]
    fn test_clear_resets() {
        let mut engine = LifeEngine::new(6, 6).unwrap();
        engine.randomize(0.5).unwrap();
        engine.step_n(3);
        assert_eq!(engine.generation(), 3);

        engine.clear();
        assert_eq!(engine.population(), 0);
        assert_eq!(engine.generation(), 0);

        engine.clear();
        assert_eq!(engine.population(), 0);
    }

    #[test]
    fn test_randomize_extremes() {
        let mut engine = LifeEngine::new(10, 10).unwrap();
        engine.randomize(1.0).unwrap();
        assert_eq!(engine.population(), 100);
        engine.randomize(0.0).unwrap();
        assert_eq!(engine.population(), 0);
    }

    #[test]
    fn test_randomize_default_density() {
        let mut engine = LifeEngine::new(100, 100).unwrap();
        engine.randomize_default();
        let fraction = engine.population() as f64 / 10_000.0;
        assert!((fraction - DEFAULT_DENSITY).abs() < 0.03, "fraction {fraction}");
    }

    #[test]
    fn test_randomize_default_resets_generation() {
        let mut engine = LifeEngine::new(6, 6).unwrap();
        engine.step_n(2);
        engine.randomize_default();
        assert_eq!(engine.generation(), 0);

        let mut explicit = LifeEngine::new(6, 6).unwrap();
        explicit.randomize(DEFAULT_DENSITY).unwrap();
        assert_eq!(snapshot(&engine), snapshot(&explicit));
    }

    #[test]
    fn test_restore_rng_replays_fill() {
        let mut engine = LifeEngine::from_config(&EngineConfig::new(10, 10).with_seed(9)).unwrap();
        engine.randomize(0.5).unwrap();
        let saved = engine.rng_state();

        engine.randomize(0.5).unwrap();
        let first = snapshot(&engine);
        engine.randomize(0.5).unwrap();
        assert_ne!(snapshot(&engine), first);

        engine.restore_rng(&saved);
        assert_eq!(engine.rng_state(), saved);
        engine.randomize(0.5).unwrap();
        assert_eq!(snapshot(&engine), first);
    }

    #[test]
    fn test_randomize_with_injected_rng() {
        let mut a = LifeEngine::new(8, 8).unwrap();
        let mut b = LifeEngine::new(8, 8).unwrap();
        a.randomize_with(0.4, &mut LifeRng::new(11)).unwrap();
        b.randomize_with(0.4, &mut LifeRng::new(11)).unwrap();
        assert_eq!(snapshot(&a), snapshot(&b));
    }

    #[test]
    fn test_from_config_seeds_fill() {
        let config = EngineConfig::new(12, 12).with_seed(5).with_initial_density(0.3);
        let a = LifeEngine::from_config(&config).unwrap();
        let b = LifeEngine::from_config(&config).unwrap();
        assert_eq!(snapshot(&a), snapshot(&b));
        assert!(a.population() > 0);
        assert_eq!(a.rng_state(), b.rng_state());

        let bad = EngineConfig::new(3, 3).with_initial_density(2.0);
        assert!(matches!(LifeEngine::from_config(&bad), Err(LifeError::InvalidParameter { .. })));
        assert!(LifeEngine::from_config(&EngineConfig::new(0, 3)).is_err());
    }

    #[test]
    fn test_set_rules_applies_next_step() {
        let mut engine = LifeEngine::from_pattern(BLOCK).unwrap();
        engine.set_rules("B/S".parse().unwrap());
        engine.step();
        assert_eq!(engine.population(), 0);
    }

    #[test]
    fn test_step_with_custom_rule() {
        struct AllAlive;
        impl TransitionRule for AllAlive {
            fn next_state(&self, _alive: bool, _neighbors: u8) -> bool {
                true
            }
        }

        let mut engine = LifeEngine::new(3, 4).unwrap();
        engine.step_with(&AllAlive);
        assert_eq!(engine.population(), 12);
        assert_eq!(*engine.rules(), RuleTable::default());
    }

    #[test]
    fn test_display() {
        let engine = LifeEngine::from_pattern(GLIDER).unwrap();
        assert_eq!(engine.to_string(), ".#.\n..#\n###\n");
    }
}
