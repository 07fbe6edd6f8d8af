//! Error types for parsing dish grids and lens sequences.

use thiserror::Error;

/// Errors raised while turning puzzle text into dish or lens models.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The grid text contained no rows.
    #[error("grid is empty")]
    EmptyGrid,

    /// A row's width differs from the first row's.
    #[error("ragged grid: row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        /// Zero-based row index.
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of this row.
        found: usize,
    },

    /// A character other than `O`, `.` or `#`.
    #[error("invalid cell {found:?} at row {row}, column {col}")]
    InvalidCell {
        /// Zero-based row index.
        row: usize,
        /// Zero-based column index.
        col: usize,
        /// The offending character.
        found: char,
    },

    /// The initialization sequence contained no steps.
    #[error("initialization sequence is empty")]
    EmptySequence,

    /// A step does not match `<letters>-` or `<letters>=<1-9>`.
    #[error("invalid step {step:?}: {reason}")]
    InvalidStep {
        /// The raw step text.
        step: String,
        /// What was wrong with it.
        reason: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
