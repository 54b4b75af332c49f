//! Error types for tweet decoding.
//!
//! Decoding either produces a fully populated value or aborts with a
//! [`DecodeError`]; malformed optional fields never reach this module, they
//! simply decode as absent.

use thiserror::Error;

/// Raised when a value object is handed an argument it cannot hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("display text range should have only two elements, got {len}")]
pub struct InvalidArgument {
    /// Number of elements that were supplied.
    pub len: usize,
}

/// Errors returned while decoding a tweet payload.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// `display_text_range` was an array with a length other than two.
    #[error("unexpected display_text_range size of {0}")]
    DisplayTextRangeSize(usize),

    /// The raw payload was not valid JSON, or the nested `entities` object
    /// did not match the expected shape.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
