//! Core engine types: errors, coordinates, RNG, configuration.
//!
//! These are the building blocks shared by the rules and grid modules.

pub mod error;
pub mod coord;
pub mod rng;
pub mod config;

pub use error::{LifeError, Result};
pub use coord::Dimensions;
pub use rng::{LifeRng, LifeRngState};
pub use config::{EngineConfig, DEFAULT_COLS, DEFAULT_DENSITY, DEFAULT_ROWS};
