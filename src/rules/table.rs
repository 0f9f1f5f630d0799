//! Birth/survival lookup tables.
//!
//! A `RuleTable` holds one entry per possible Moore neighbor count (0..=8)
//! for each of two predicates:
//!
//! - `born[n]`: does a dead cell with `n` live neighbors come alive?
//! - `survives[n]`: does a live cell with `n` live neighbors stay alive?
//!
//! ## Rulestrings
//!
//! Tables round-trip through the usual `B<digits>/S<digits>` notation:
//!
//! ```
//! use moore_life::rules::RuleTable;
//!
//! let rules: RuleTable = "B36/S23".parse().unwrap();
//! assert_eq!(rules, RuleTable::default());
//! assert_eq!(RuleTable::conway().to_string(), "B3/S23");
//! ```
//!
//! The default table is B36/S23, which births on 6 as well as 3. It is not
//! classical Life; use `RuleTable::conway()` for B3/S23.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::transition::{TransitionRule, MAX_NEIGHBORS};
use crate::core::error::{LifeError, Result};

const TABLE_LEN: usize = MAX_NEIGHBORS as usize + 1;

/// Birth and survival tables indexed by live neighbor count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RuleTable {
    born: [bool; TABLE_LEN],
    survives: [bool; TABLE_LEN],
}

impl Default for RuleTable {
    /// B36/S23.
    fn default() -> Self {
        Self::high_life()
    }
}

impl RuleTable {
    /// Build a table from explicit lookup arrays.
    #[must_use]
    pub const fn new(born: [bool; TABLE_LEN], survives: [bool; TABLE_LEN]) -> Self {
        Self { born, survives }
    }

    /// Build a table from lists of neighbor counts.
    ///
    /// Fails with `InvalidRule` if any count exceeds 8.
    pub fn from_counts(born: &[u8], survives: &[u8]) -> Result<Self> {
        Ok(Self {
            born: counts_to_table(born)?,
            survives: counts_to_table(survives)?,
        })
    }

    /// Classical Conway's Life, B3/S23.
    #[must_use]
    pub const fn conway() -> Self {
        let mut table = Self::new([false; TABLE_LEN], [false; TABLE_LEN]);
        table.born[3] = true;
        table.survives[2] = true;
        table.survives[3] = true;
        table
    }

    /// HighLife, B36/S23. This is also the engine default.
    #[must_use]
    pub const fn high_life() -> Self {
        let mut table = Self::conway();
        table.born[6] = true;
        table
    }

    /// Does a dead cell with `neighbors` live neighbors come alive?
    ///
    /// Counts above 8 never fire.
    #[must_use]
    pub fn born(&self, neighbors: u8) -> bool {
        self.born.get(usize::from(neighbors)).copied().unwrap_or(false)
    }

    /// Does a live cell with `neighbors` live neighbors stay alive?
    ///
    /// Counts above 8 never fire.
    #[must_use]
    pub fn survives(&self, neighbors: u8) -> bool {
        self.survives.get(usize::from(neighbors)).copied().unwrap_or(false)
    }

    /// Neighbor counts that cause a birth, ascending.
    pub fn birth_counts(&self) -> impl Iterator<Item = u8> + '_ {
        table_counts(&self.born)
    }

    /// Neighbor counts that let a live cell survive, ascending.
    pub fn survival_counts(&self) -> impl Iterator<Item = u8> + '_ {
        table_counts(&self.survives)
    }
}

impl TransitionRule for RuleTable {
    #[inline]
    fn next_state(&self, alive: bool, neighbors: u8) -> bool {
        if alive {
            self.survives(neighbors)
        } else {
            self.born(neighbors)
        }
    }
}

fn counts_to_table(counts: &[u8]) -> Result<[bool; TABLE_LEN]> {
    let mut table = [false; TABLE_LEN];
    for &n in counts {
        let slot = table
            .get_mut(usize::from(n))
            .ok_or_else(|| LifeError::InvalidRule(format!("neighbor count {n} exceeds {MAX_NEIGHBORS}")))?;
        *slot = true;
    }
    Ok(table)
}

fn table_counts(table: &[bool; TABLE_LEN]) -> impl Iterator<Item = u8> + '_ {
    (0..=MAX_NEIGHBORS).filter(move |&n| table[usize::from(n)])
}

/// Parse the digit run after a `B` or `S` prefix.
fn parse_half(part: &str, prefix: char, whole: &str) -> Result<Vec<u8>> {
    let mut chars = part.chars();
    match chars.next() {
        Some(c) if c.eq_ignore_ascii_case(&prefix) => {}
        _ => {
            return Err(LifeError::InvalidRule(format!("{whole:?}: expected '{prefix}' section")));
        }
    }
    chars
        .map(|c| {
            c.to_digit(10)
                .filter(|&d| d <= u32::from(MAX_NEIGHBORS))
                .map(|d| d as u8)
                .ok_or_else(|| LifeError::InvalidRule(format!("{whole:?}: unexpected {c:?}")))
        })
        .collect()
}

impl FromStr for RuleTable {
    type Err = LifeError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let (birth, survival) = trimmed
            .split_once('/')
            .ok_or_else(|| LifeError::InvalidRule(format!("{trimmed:?}: expected B<digits>/S<digits>")))?;
        let born = parse_half(birth, 'B', trimmed)?;
        let survives = parse_half(survival, 'S', trimmed)?;
        Self::from_counts(&born, &survives)
    }
}

impl std::fmt::Display for RuleTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "B")?;
        for n in self.birth_counts() {
            write!(f, "{n}")?;
        }
        write!(f, "/S")?;
        for n in self.survival_counts() {
            write!(f, "{n}")?;
        }
        Ok(())
    }
}
