//! Grid state and the generation step.
//!
//! - `buffer`: one generation's storage and the Moore-neighborhood kernel
//! - `engine`: `LifeEngine`, the public operation surface
//! - `pattern`: plain-text patterns for seeding and stamping

pub mod buffer;
pub mod engine;
pub mod pattern;

pub use buffer::CellBuffer;
pub use engine::LifeEngine;
