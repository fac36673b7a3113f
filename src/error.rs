//! Error types for the offkey library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`OffkeyError`] enum.
//!
//! # Examples
//!
//! ```
//! use offkey::error::{OffkeyError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(OffkeyError::layout("duplicate key letter 'a'"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for offkey operations.
#[derive(Error, Debug)]
pub enum OffkeyError {
    /// I/O errors (layout files, frequency files, stdin)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Keyboard layout errors (malformed records, duplicate letters, no caps key)
    #[error("Layout error: {0}")]
    Layout(String),

    /// Word-frequency table errors
    #[error("Frequency error: {0}")]
    Frequency(String),

    /// A typed character has no key in the keyboard's reverse index,
    /// so the word cannot be corrected.
    #[error("No key maps the character {0:?}")]
    UnmappedChar(char),

    /// Every candidate reinterpretation was discarded.
    #[error("Uncorrectable: {0}")]
    Uncorrectable(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with OffkeyError.
pub type Result<T> = std::result::Result<T, OffkeyError>;

impl OffkeyError {
    /// Create a new layout error.
    pub fn layout<S: Into<String>>(msg: S) -> Self {
        OffkeyError::Layout(msg.into())
    }

    /// Create a new frequency-table error.
    pub fn frequency<S: Into<String>>(msg: S) -> Self {
        OffkeyError::Frequency(msg.into())
    }

    /// Create a new uncorrectable-word error.
    pub fn uncorrectable<S: Into<String>>(msg: S) -> Self {
        OffkeyError::Uncorrectable(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        OffkeyError::Other(msg.into())
    }

    /// True when the error is terminal for a single word only and the
    /// interactive loop should keep reading input.
    pub fn is_word_local(&self) -> bool {
        matches!(
            self,
            OffkeyError::UnmappedChar(_) | OffkeyError::Uncorrectable(_)
        )
    }
}
