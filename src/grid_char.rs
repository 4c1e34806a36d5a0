// Cell constants
/// Marker stored in a cell that had no letter in the source.
pub const BLANK: char = ' ';
/// How a BLANK cell is shown in a preview.
pub const BLANK_DISPLAY: char = '·';
/// Separates fields within a grid line and words within a query.
pub const FIELD_DELIMITER: char = ',';
/// Spreadsheet exports often lead with one; it is never part of a cell.
pub(crate) const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Trim whitespace and byte-order marks from both ends of a line, field or word.
pub(crate) fn trim_cell(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || c == BYTE_ORDER_MARK)
}

pub(crate) trait GridChar {
    fn is_blank(&self) -> bool;
    fn display_char(&self) -> char;
}

impl GridChar for char {
    fn is_blank(&self) -> bool {
        *self == BLANK
    }
    fn display_char(&self) -> char {
        if self.is_blank() { BLANK_DISPLAY } else { *self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_blank() {
        assert!(BLANK.is_blank());
        assert!(!'A'.is_blank());
        assert!(!BLANK_DISPLAY.is_blank());
        assert!(!'\t'.is_blank());
    }

    #[test]
    fn test_trim_cell() {
        assert_eq!(trim_cell("  ab \t"), "ab");
        assert_eq!(trim_cell("\u{FEFF}C,A,T"), "C,A,T");
        assert_eq!(trim_cell("\u{FEFF} c "), "c");
        assert_eq!(trim_cell("a\u{FEFF}b"), "a\u{FEFF}b");
        assert_eq!(trim_cell("\u{FEFF}"), "");
    }

    #[test]
    fn test_display_char() {
        assert_eq!(BLANK.display_char(), '·');
        assert_eq!('Q'.display_char(), 'Q');
        assert_eq!('7'.display_char(), '7');
    }
}
