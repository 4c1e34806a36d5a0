use std::fmt;

/// A unit step through the grid plus the short label users see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Direction {
    pub row_delta: isize,
    pub col_delta: isize,
    pub label: &'static str,
}

impl Direction {
    const fn new(row_delta: isize, col_delta: isize, label: &'static str) -> Self {
        Direction { row_delta, col_delta, label }
    }
}

/// Every direction a word may run in. The order here is the order matches
/// are reported in for a given start cell.
pub const DIRECTIONS: [Direction; 8] = [
    Direction::new(0, 1, "E"),
    Direction::new(0, -1, "W"),
    Direction::new(1, 0, "S"),
    Direction::new(-1, 0, "N"),
    Direction::new(1, 1, "SE"),
    Direction::new(1, -1, "SW"),
    Direction::new(-1, 1, "NE"),
    Direction::new(-1, -1, "NW"),
];

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}
