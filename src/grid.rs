//! `grid` — turn raw comma-delimited text into a rectangular letter grid
//!
//! The source text can come from a file on disk (native builds) or from a
//! string handed over by JavaScript (WASM builds), so the parsing entry point
//! takes a `&str` and never touches the filesystem.
//!
//! The normalization rules:
//! - Lines are split on `\n` or `\r\n`, trimmed (byte-order marks included),
//!   and dropped when empty.
//! - Each line is split on `,`; every field is trimmed and uppercased.
//! - An empty field becomes one BLANK cell; a field of several characters
//!   becomes one cell per character.
//! - Shorter rows are right-padded with BLANK so every row has the same width.
//!
//! ```
//! use gridseek::grid::Grid;
//!
//! let grid = Grid::parse_from_str("c,a,t\nd,og")?;
//! assert_eq!((grid.rows(), grid.cols()), (2, 3));
//! assert_eq!(grid.row(1), Some(&['D', 'O', 'G'][..]));
//! # Ok::<(), gridseek::errors::GridError>(())
//! ```

use std::str::FromStr;

use crate::errors::GridError;
use crate::grid_char::{trim_cell, BLANK, FIELD_DELIMITER};

/// An immutable R x C grid of single-character cells.
///
/// Cells live in one row-major `Vec<char>`; every row has exactly `cols`
/// cells, and both dimensions are at least 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<char>,
    rows: usize,
    cols: usize,
}

impl Grid {
    /// Parse raw delimited text into a grid.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::EmptyInput`] if no line is left after dropping
    /// blank lines.
    pub fn parse_from_str(contents: &str) -> Result<Grid, GridError> {
        let lines: Vec<Vec<char>> = contents
            .lines()
            .map(trim_cell)
            .filter(|line| !line.is_empty())
            .map(expand_line)
            .collect();

        if lines.is_empty() {
            return Err(GridError::EmptyInput);
        }

        // every line yields at least one cell, so cols >= 1
        let cols = lines.iter().map(Vec::len).max().unwrap_or(0);
        let rows = lines.len();

        let mut cells = Vec::with_capacity(rows * cols);
        for mut line in lines {
            line.resize(cols, BLANK);
            cells.extend(line);
        }

        log::debug!("parsed {rows}x{cols} grid");

        Ok(Grid { cells, rows, cols })
    }

    /// Native-only convenience method: read a grid file and parse it.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Io`] if the file can't be read, or any error
    /// from [`Grid::parse_from_str`].
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Grid, GridError> {
        let path_ref = path.as_ref();
        let data = std::fs::read_to_string(path_ref).map_err(|e| GridError::Io {
            path: path_ref.display().to_string(),
            message: e.to_string(),
        })?;
        Self::parse_from_str(&data)
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// The cell at a 0-indexed position, or `None` outside the grid.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        if row < self.rows && col < self.cols {
            Some(self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    /// Like [`Grid::get`], but for coordinates produced by stepping with
    /// signed deltas; negative coordinates are simply out of bounds.
    pub(crate) fn get_signed(&self, row: isize, col: isize) -> Option<char> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        self.get(row, col)
    }

    /// One full row of cells (0-indexed).
    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[char]> {
        if row < self.rows {
            Some(&self.cells[row * self.cols..(row + 1) * self.cols])
        } else {
            None
        }
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[char]> {
        self.cells.chunks(self.cols.max(1))
    }

    /// `"RxC"`, as shown to users after a load.
    #[must_use]
    pub fn dimensions_label(&self) -> String {
        format!("{}x{}", self.rows, self.cols)
    }
}

impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Grid::parse_from_str(s)
    }
}

// Split one trimmed line into cells, exploding multi-character fields.
fn expand_line(line: &str) -> Vec<char> {
    line.split(FIELD_DELIMITER)
        .flat_map(|field| {
            let field = trim_cell(field).to_uppercase();
            if field.is_empty() {
                vec![BLANK]
            } else {
                field.chars().collect()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows_of(grid: &Grid) -> Vec<String> {
        grid.iter_rows().map(|r| r.iter().collect()).collect()
    }

    #[test]
    fn test_parse_basic() {
        let grid = Grid::parse_from_str("C,A,T\nX,X,X\nX,X,X").unwrap();
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 3);
        assert_eq!(rows_of(&grid), vec!["CAT", "XXX", "XXX"]);
    }

    #[test]
    fn test_parse_uppercases_and_trims_fields() {
        let grid = Grid::parse_from_str("  c , a ,t  ").unwrap();
        assert_eq!(rows_of(&grid), vec!["CAT"]);
    }

    #[test]
    fn test_parse_handles_crlf() {
        let grid = Grid::parse_from_str("a,b\r\nc,d\r\n").unwrap();
        assert_eq!(rows_of(&grid), vec!["AB", "CD"]);
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let grid = Grid::parse_from_str("\n\na,b\n   \n\t\nc,d\n\n").unwrap();
        assert_eq!(grid.rows(), 2);
        assert_eq!(rows_of(&grid), vec!["AB", "CD"]);
    }

    #[test]
    fn test_parse_multi_char_field_expands() {
        let grid = Grid::parse_from_str("x,AB,y").unwrap();
        assert_eq!(grid.row(0), Some(&['X', 'A', 'B', 'Y'][..]));
    }

    #[test]
    fn test_parse_whole_row_in_one_field() {
        let grid = Grid::parse_from_str("dog\ncat").unwrap();
        assert_eq!(rows_of(&grid), vec!["DOG", "CAT"]);
    }

    #[test]
    fn test_parse_empty_field_is_single_blank() {
        let grid = Grid::parse_from_str("a,,b").unwrap();
        assert_eq!(grid.row(0), Some(&['A', BLANK, 'B'][..]));
    }

    #[test]
    fn test_parse_delimiters_only_line_is_blank_row() {
        let grid = Grid::parse_from_str("a,b,c\n , , ").unwrap();
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.row(1), Some(&[BLANK, BLANK, BLANK][..]));
    }

    #[test]
    fn test_parse_pads_short_rows() {
        let grid = Grid::parse_from_str("a\nb,c,d\ne,f").unwrap();
        assert_eq!(grid.cols(), 3);
        assert_eq!(rows_of(&grid), vec!["A  ", "BCD", "EF "]);
        for row in grid.iter_rows() {
            assert_eq!(row.len(), grid.cols());
        }
    }

    #[test]
    fn test_parse_keeps_non_letters() {
        let grid = Grid::parse_from_str("1,#,z").unwrap();
        assert_eq!(grid.row(0), Some(&['1', '#', 'Z'][..]));
    }

    #[test]
    fn test_parse_strips_leading_byte_order_mark() {
        let grid = Grid::parse_from_str("\u{FEFF}C,A,T\nX,X,X\nX,X,X").unwrap();
        assert_eq!(grid.cols(), 3);
        assert_eq!(rows_of(&grid), vec!["CAT", "XXX", "XXX"]);
    }

    #[test]
    fn test_parse_byte_order_mark_around_fields() {
        let grid = Grid::parse_from_str("\u{FEFF} c ,\u{FEFF}a\u{FEFF}, t").unwrap();
        assert_eq!(rows_of(&grid), vec!["CAT"]);
        assert_eq!(Grid::parse_from_str("\u{FEFF}\n \u{FEFF} "), Err(GridError::EmptyInput));
    }

    #[test]
    fn test_parse_empty_input() {
        assert_eq!(Grid::parse_from_str(""), Err(GridError::EmptyInput));
        assert_eq!(Grid::parse_from_str("  \n\r\n\t"), Err(GridError::EmptyInput));
    }

    #[test]
    fn test_from_str() {
        let grid: Grid = "a,b".parse().unwrap();
        assert_eq!(grid.dimensions_label(), "1x2");
    }

    #[test]
    fn test_get_bounds() {
        let grid = Grid::parse_from_str("a,b\nc,d").unwrap();
        assert_eq!(grid.get(0, 0), Some('A'));
        assert_eq!(grid.get(1, 1), Some('D'));
        assert_eq!(grid.get(2, 0), None);
        assert_eq!(grid.get(0, 2), None);
        assert_eq!(grid.get_signed(-1, 0), None);
        assert_eq!(grid.get_signed(0, -1), None);
        assert_eq!(grid.get_signed(1, 0), Some('C'));
        assert_eq!(grid.row(2), None);
    }

    #[test]
    fn test_is_never_empty_after_parse() {
        let grid = Grid::parse_from_str(",").unwrap();
        assert!(!grid.is_empty());
        assert_eq!(grid.dimensions_label(), "1x2");
    }
}
