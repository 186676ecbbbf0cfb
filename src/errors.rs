//! Custom error types for CIGAR construction and parsing.

use thiserror::Error;

/// Result type alias for cigar-clip operations
pub type Result<T> = std::result::Result<T, CigarClipError>;

/// Error type for cigar-clip operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CigarClipError {
    /// Operation character is not one of `MIDNSHP=X`
    #[error("Invalid CIGAR operation '{op}'")]
    InvalidOperation {
        /// The offending operation character
        op: char,
    },

    /// Structurally malformed CIGAR text
    #[error("Invalid CIGAR string '{cigar}': {reason}")]
    InvalidCigar {
        /// The full CIGAR text being parsed
        cigar: String,
        /// Explanation of the problem
        reason: String,
    },
}
