//! Error types for grid loading and word queries, with error codes and helpful messages.
//!
//! # Error Codes
//!
//! Each error variant has a unique code (G001-G003) for documentation lookup:
//!
//! - G001: `EmptyInput` (No non-blank lines in the grid source)
//! - G002: `NoWords` (Word query contained no words)
//! - G003: `Io` (Grid file could not be read)
//!
//! The word locator itself never fails; an absent word is an empty result,
//! not an error.
//!
//! # Examples
//!
//! ```
//! use gridseek::errors::GridError;
//! use gridseek::grid::Grid;
//!
//! match Grid::parse_from_str("\n  \n") {
//!     Err(e) => {
//!         assert_eq!(e.code(), "G001");
//!         println!("Error: {}", e.display_detailed());
//!     }
//!     Ok(_) => unreachable!(),
//! }
//! ```

use std::io;

/// Everything that can go wrong before a search runs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("Empty CSV content")]
    EmptyInput,

    #[error("No words to search for")]
    NoWords,

    #[error("failed to read grid from '{path}': {message}")]
    Io { path: String, message: String },
}

impl From<GridError> for io::Error {
    fn from(ge: GridError) -> Self {
        let kind = match ge {
            GridError::Io { .. } => io::ErrorKind::Other,
            _ => io::ErrorKind::InvalidInput,
        };
        io::Error::new(kind, ge.to_string())
    }
}

impl GridError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            GridError::EmptyInput => "G001",
            GridError::NoWords => "G002",
            GridError::Io { .. } => "G003",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            GridError::EmptyInput => "Grid source has no content",
            GridError::NoWords => "Word query is empty",
            GridError::Io { .. } => "Grid file could not be read",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            GridError::EmptyInput => {
                Some("Provide at least one line of comma-separated letters, e.g. 'C,A,T'")
            }
            GridError::NoWords => Some("Please enter words, comma-separated."),
            GridError::Io { .. } => None,
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(
    base_msg: &str,
    code: &str,
    help: Option<&str>,
) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}
