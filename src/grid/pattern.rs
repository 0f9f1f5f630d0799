//! Plain-text patterns.
//!
//! One line per row. `#`, `O` and `*` are live cells, `.` is a dead cell.
//! Leading/trailing whitespace on each line and blank lines are ignored, so
//! patterns can be written as indented raw strings:
//!
//! ```
//! use moore_life::grid::pattern::parse;
//!
//! let glider = parse("
//!     .#.
//!     ..#
//!     ####
//! ").unwrap();
//! assert_eq!(glider.population(), 5);
//! ```

use super::buffer::CellBuffer;
use crate::core::error::{LifeError, Result};
use crate::core::Dimensions;

/// 2x2 still life.
pub const BLOCK: &str = "##\n##";

/// Period-2 oscillator, horizontal phase.
pub const BLINKER: &str = "###";

/// Diagonal spaceship moving toward increasing row and column.
pub const GLIDER: &str = ".#.\n..#\n###";

fn glyph(c: char) -> Option<bool> {
    match c {
        '#' | 'O' | '*' => Some(true),
        '.' => Some(false),
        _ => None,
    }
}

/// Parse a text pattern into a buffer sized exactly to it.
///
/// Fails with `InvalidPattern` on empty input, rows of unequal width, or an
/// unknown glyph.
pub fn parse(text: &str) -> Result<CellBuffer> {
    let lines: Vec<&str> = text.lines().map(str::trim).filter(|l| !l.is_empty()).collect();

    let width = match lines.first() {
        Some(first) => first.chars().count(),
        None => return Err(LifeError::InvalidPattern("pattern is empty".into())),
    };

    let dims = Dimensions::new(lines.len() as i64, width as i64)?;
    let mut buffer = CellBuffer::new(dims);

    for (row, line) in lines.iter().enumerate() {
        let len = line.chars().count();
        if len != width {
            return Err(LifeError::InvalidPattern(format!(
                "row {row} has width {len}, expected {width}"
            )));
        }
        for (col, c) in line.chars().enumerate() {
            let alive = glyph(c)
                .ok_or_else(|| LifeError::InvalidPattern(format!("unexpected {c:?} at ({row}, {col})")))?;
            buffer.set(row, col, alive);
        }
    }

    Ok(buffer)
}
