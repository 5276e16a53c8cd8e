//! Error types for the expression builder
//!
//! This module provides error handling using the `thiserror` crate.
//! Errors are categorized by their source: argument shape at construction
//! time, capture bookkeeping, or compilation by the regex engine.

use thiserror::Error;

/// The main error type for the expression builder
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VerexError {
    /// `range` received bounds that do not pair up
    #[error("range expects an even number of bounds, got {count}")]
    OddRangeBounds {
        /// Number of bounds that were supplied
        count: usize,
    },

    /// `range` received no bounds at all
    #[error("range expects at least one pair of bounds")]
    EmptyRange,

    /// `end_capture` was called while no capture group was open
    #[error("end_capture called without a matching begin_capture")]
    UnbalancedCapture,

    /// The engine rejected the assembled pattern
    #[error("compilation error: {0}")]
    Compile(#[from] regex::Error),
}

/// Result type alias for builder operations
pub type Result<T> = std::result::Result<T, VerexError>;
