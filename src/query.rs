//! Run a comma-separated word list against a grid and format the results.
//!
//! ```
//! use gridseek::grid::Grid;
//! use gridseek::query::{parse_word_list, search_words};
//!
//! let grid = Grid::parse_from_str("C,A,T\nX,X,X\nX,X,X")?;
//! let words = parse_word_list(" cat, ,dog ");
//! let results = search_words(&grid, &words);
//! assert_eq!(results[0].locations(), "E: (1,1)->(1,3)");
//! assert_eq!(results[1].locations(), "not found");
//! # Ok::<(), gridseek::errors::GridError>(())
//! ```

use crate::errors::GridError;
use crate::grid::Grid;
use crate::grid_char::{trim_cell, FIELD_DELIMITER};
use crate::locator::{locate, Match};

/// Shown in place of locations when a word has no match.
pub const NOT_FOUND: &str = "not found";
/// Joins the descriptors of several matches of one word.
pub const LOCATION_SEPARATOR: &str = ", ";

/// The outcome of searching for one word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordResult {
    /// The query word, uppercased (surrounding whitespace kept out).
    pub word: String,
    pub matches: Vec<Match>,
}

impl WordResult {
    #[must_use]
    pub fn is_found(&self) -> bool {
        !self.matches.is_empty()
    }

    /// `not found`, or every match descriptor in scan order.
    #[must_use]
    pub fn locations(&self) -> String {
        if self.matches.is_empty() {
            NOT_FOUND.to_string()
        } else {
            self.matches
                .iter()
                .map(Match::to_string)
                .collect::<Vec<_>>()
                .join(LOCATION_SEPARATOR)
        }
    }
}

/// Split a comma-separated query into words, dropping empty entries.
#[must_use]
pub fn parse_word_list(raw: &str) -> Vec<String> {
    raw.split(FIELD_DELIMITER)
        .map(trim_cell)
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

/// Like [`parse_word_list`], but an empty list is an error.
///
/// # Errors
///
/// Returns [`GridError::NoWords`] if `raw` holds no words.
pub fn require_word_list(raw: &str) -> Result<Vec<String>, GridError> {
    let words = parse_word_list(raw);
    if words.is_empty() {
        Err(GridError::NoWords)
    } else {
        Ok(words)
    }
}

/// Search for each word in turn; results keep the input order.
#[must_use]
pub fn search_words<S: AsRef<str>>(grid: &Grid, words: &[S]) -> Vec<WordResult> {
    let results: Vec<WordResult> = words
        .iter()
        .map(|w| {
            let w = w.as_ref();
            WordResult {
                word: trim_cell(w).to_uppercase(),
                matches: locate(grid, w),
            }
        })
        .collect();
    log::debug!("searched {} word(s)", results.len());
    results
}
