//! Error types for loading puzzle inputs, with error codes and helpful messages.
//!
//! # Error Codes
//!
//! Each error variant has a unique code (E001-E002) for documentation lookup:
//!
//! - E001: `InvalidInput` (Dictionary word shorter than 2 characters)
//! - E002: `MalformedGrid` (Grid row length disagrees with the first row)
//!
//! A rejected dictionary load is wholesale: no partially accumulated word
//! list survives an `InvalidInput`. Likewise a `MalformedGrid` retains no
//! partial puzzle. Neither failure is retryable — both are structural
//! problems with the input file.
//!
//! # Examples
//!
//! ```
//! use boggle::dictionary::Dictionary;
//!
//! match Dictionary::parse_from_str("CAT\nA\n") {
//!     Err(e) => {
//!         println!("Error: {}", e);
//!         println!("Code: {}", e.code());
//!         if let Some(help) = e.help() {
//!             println!("Help: {}", help);
//!         }
//!     }
//!     Ok(_) => println!("Success"),
//! }
//! ```

use std::io;

/// Custom error type for dictionary and grid loading.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// A dictionary line shorter than 2 characters. The offending word is
    /// carried for the message; the whole load is rejected.
    #[error("invalid input: dictionary word \"{word}\" is shorter than 2 characters")]
    InvalidInput { word: String },

    /// A grid row whose length disagrees with the first row's length.
    /// Raised immediately on detection; no partial grid is kept.
    #[error("malformed grid: row {row} has {actual} characters, expected {expected}")]
    MalformedGrid {
        row: usize,
        expected: usize,
        actual: usize,
    },
}

impl From<LoadError> for io::Error {
    fn from(le: LoadError) -> Self {
        // String version is the least fragile (no Send/Sync bounds issues)
        io::Error::new(io::ErrorKind::InvalidInput, le.to_string())
    }
}

impl LoadError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            LoadError::InvalidInput { .. } => "E001",
            LoadError::MalformedGrid { .. } => "E002",
        }
    }

    /// Returns a helpful suggestion or example for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            LoadError::InvalidInput { .. } => {
                Some("Every dictionary word must be at least 2 characters long; remove or fix the short line")
            }
            LoadError::MalformedGrid { .. } => {
                Some("Every row of the puzzle must have the same number of characters as the first row")
            }
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}
