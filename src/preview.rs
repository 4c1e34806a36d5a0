//! Plain-text preview of a grid with 1-based row and column numbers.
//!
//! ```text
//!     1  2  3
//!  1  C  A  T
//!  2  X  ·  X
//! ```

use crate::grid::Grid;
use crate::grid_char::GridChar;

/// Render `grid` as a numbered table; BLANK cells show as `·`.
#[must_use]
pub fn render_preview(grid: &Grid) -> String {
    if grid.is_empty() {
        return String::new();
    }
    let rows = grid.rows();
    let cols = grid.cols();
    let num_width = digits(rows).max(digits(cols)).max(2);
    let cell_width = digits(cols).max(2);

    let header = format!(
        "{}{}",
        " ".repeat(num_width + 1),
        (1..=cols)
            .map(|c| format!("{c:>cell_width$}"))
            .collect::<Vec<_>>()
            .join(" ")
    );

    let mut lines = Vec::with_capacity(rows + 1);
    lines.push(header);
    for (idx, row) in grid.iter_rows().enumerate() {
        let cells = row
            .iter()
            .map(|ch| format!("{:>cell_width$}", ch.display_char()))
            .collect::<Vec<_>>()
            .join(" ");
        lines.push(format!("{:>num_width$} {cells}", idx + 1));
    }
    lines.join("\n")
}

fn digits(n: usize) -> usize {
    n.to_string().len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_small_grid() {
        let grid = Grid::parse_from_str("C,A,T\nX,,X").unwrap();
        let expected = "    1  2  3\n 1  C  A  T\n 2  X  ·  X";
        assert_eq!(render_preview(&grid), expected);
    }

    #[test]
    fn test_preview_padding_shows_blank_marker() {
        let grid = Grid::parse_from_str("A\nB,C").unwrap();
        assert_eq!(render_preview(&grid), "    1  2\n 1  A  ·\n 2  B  C");
    }

    #[test]
    fn test_preview_wide_grid_widens_columns() {
        let grid = Grid::parse_from_str(&"A".repeat(100)).unwrap();
        let preview = render_preview(&grid);
        let mut lines = preview.lines();
        let header = lines.next().unwrap();
        let row = lines.next().unwrap();
        assert!(header.starts_with("      1   2"), "header was {header:?}");
        assert!(header.ends_with(" 100"));
        assert!(row.starts_with("  1   A   A"), "row was {row:?}");
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_preview_line_count() {
        let grid = Grid::parse_from_str("a\nb\nc\nd").unwrap();
        assert_eq!(render_preview(&grid).lines().count(), 5);
    }

    #[test]
    fn test_digits() {
        assert_eq!(digits(1), 1);
        assert_eq!(digits(10), 2);
        assert_eq!(digits(100), 3);
    }
}
