//! # Error Types
//!
//! All fallible operations in the crate return [`ChordSheetError`].
//!
//! Malformed chord text is never an error: anything that does not match the
//! chord grammar is left in place. Errors come from the song sheet metadata,
//! the song library file and the filesystem.
//!
//! ## Usage
//! ```rust
//! use chordsheet::{transpose_text, ChordSheetError};
//!
//! match transpose_text("(Am) la la (G)", 2) {
//!     Ok(text) => assert_eq!(text, "(Bm) la la (A)"),
//!     Err(ChordSheetError::InvalidRoot(root)) => eprintln!("bad root {}", root),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChordSheetError {
    /// A chord root that matched the grammar but is not a known pitch name.
    ///
    /// # Example
    /// ```
    /// # use chordsheet::ChordSheetError;
    /// let err = ChordSheetError::InvalidRoot("H7".to_string());
    /// assert_eq!(err.to_string(), "Invalid chord root: H7");
    /// ```
    #[error("Invalid chord root: {0}")]
    InvalidRoot(String),

    /// Invalid YAML frontmatter in a song sheet or config file.
    #[error("Invalid metadata: {0}")]
    MetadataError(String),

    #[error("Song not found: {0}")]
    SongNotFound(u64),

    /// The song library file could not be read or written as YAML.
    #[error("Library storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ChordSheetError>;
