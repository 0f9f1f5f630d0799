//! # moore-life
//!
//! A Life-like cellular automaton engine on a bounded two-dimensional grid.
//!
//! ## Design Principles
//!
//! 1. **Engine Only**: No rendering, input handling or timers. Display and
//!    input layers call into `LifeEngine` and read its state back.
//!
//! 2. **Bounded Edges**: The grid does not wrap. Neighbor positions outside
//!    the grid do not exist and are never counted.
//!
//! 3. **Configurable Rules**: Birth and survival are lookup tables over the
//!    Moore neighbor count 0..=8. The default is B36/S23, not classical Life.
//!
//! ## Architecture
//!
//! - **Double Buffering**: Each step writes into a scratch buffer and swaps
//!   it with the current one, so every next state is computed from a frozen
//!   generation without per-step allocation.
//!
//! - **Reproducible Fills**: Random fills use a seeded ChaCha8 source or any
//!   injected `rand::Rng`.
//!
//! ## Modules
//!
//! - `core`: Errors, dimensions, RNG, configuration
//! - `rules`: `TransitionRule` trait and `RuleTable`
//! - `grid`: Cell buffers, text patterns and the `LifeEngine`

pub mod core;
pub mod rules;
pub mod grid;

// Re-export commonly used types
pub use crate::core::{
    Dimensions, EngineConfig, LifeError, LifeRng, LifeRngState, Result,
    DEFAULT_DENSITY,
};

pub use crate::rules::{RuleTable, TransitionRule, MAX_NEIGHBORS};

pub use crate::grid::{CellBuffer, LifeEngine};
