//! Transition rule trait.
//!
//! The step kernel asks a `TransitionRule` for every cell's next state.
//! Neighbor counts are always in `0..=8`, so implementations must be total
//! over that domain.

/// Maximum number of Moore neighbors a cell can have.
pub const MAX_NEIGHBORS: u8 = 8;

/// Decides a cell's next state from its current state and live neighbor count.
///
/// ## Implementation Notes
///
/// - Must be deterministic: the same inputs always give the same output
/// - Must be pure: `step()` relies on it having no side effects
pub trait TransitionRule {
    /// Next liveness of a cell that is currently `alive` with `neighbors`
    /// live Moore neighbors.
    fn next_state(&self, alive: bool, neighbors: u8) -> bool;
}

impl<R: TransitionRule + ?Sized> TransitionRule for &R {
    fn next_state(&self, alive: bool, neighbors: u8) -> bool {
        (**self).next_state(alive, neighbors)
    }
}
