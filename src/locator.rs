//! Find every straight-line occurrence of a word in a [`Grid`].
//!
//! The scan is exhaustive: each cell holding the word's first character is
//! tried in every direction of [`DIRECTIONS`], and every successful walk is
//! reported. Matches come back in scan order (row-major start cell, then
//! direction table order) and are never deduplicated.
//!
//! ```
//! use gridseek::grid::Grid;
//! use gridseek::locator::locate;
//!
//! let grid = Grid::parse_from_str("C,A,T\nX,X,X\nX,X,X")?;
//! let matches = locate(&grid, "cat");
//! assert_eq!(matches.len(), 1);
//! assert_eq!(matches[0].to_string(), "E: (1,1)->(1,3)");
//! # Ok::<(), gridseek::errors::GridError>(())
//! ```

use std::fmt;

use crate::direction::{Direction, DIRECTIONS};
use crate::grid::Grid;
use crate::grid_char::trim_cell;

/// A 1-indexed (row, column) position, as shown to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }

    // internal coordinates are 0-indexed
    fn from_zero_based(row: usize, col: usize) -> Self {
        Position { row: row + 1, col: col + 1 }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// One occurrence of a word: where it starts, where it ends, and which way it runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Match {
    pub start: Position,
    pub end: Position,
    pub direction: Direction,
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}->{}", self.direction, self.start, self.end)
    }
}

/// Normalize a query word the same way grid cells are normalized.
#[must_use]
pub fn normalize_word(raw_word: &str) -> Vec<char> {
    trim_cell(raw_word).to_uppercase().chars().collect()
}

/// Every match of `raw_word` in `grid`.
///
/// Never fails: a word that is empty after trimming, or a grid with no
/// cells, yields an empty vector.
#[must_use]
pub fn locate(grid: &Grid, raw_word: &str) -> Vec<Match> {
    let word = normalize_word(raw_word);
    let Some(&first) = word.first() else {
        return Vec::new();
    };
    if grid.is_empty() {
        return Vec::new();
    }

    let mut results = Vec::new();
    for (r, row) in grid.iter_rows().enumerate() {
        for (c, &cell) in row.iter().enumerate() {
            if cell != first {
                continue;
            }
            for direction in DIRECTIONS {
                if let Some(end) = walk(grid, &word[1..], r, c, direction) {
                    results.push(Match {
                        start: Position::from_zero_based(r, c),
                        end,
                        direction,
                    });
                }
            }
        }
    }

    log::debug!(
        "'{}': {} match(es) in {} grid",
        word.iter().collect::<String>(),
        results.len(),
        grid.dimensions_label()
    );
    results
}

// Step from (r, c) once per remaining character; the end position if all of them match.
fn walk(grid: &Grid, rest: &[char], r: usize, c: usize, direction: Direction) -> Option<Position> {
    // grid dimensions are far below isize::MAX
    let (mut rr, mut cc) = (r as isize, c as isize);
    for &expected in rest {
        rr += direction.row_delta;
        cc += direction.col_delta;
        if grid.get_signed(rr, cc)? != expected {
            return None;
        }
    }
    Some(Position::new(rr as usize + 1, cc as usize + 1))
}
