//! Core error type.
//!
//! Raised only when constructing domain values.  Sub-crates wrap it in their
//! own error enums via `#[from]`.

use thiserror::Error;

use crate::SegmentId;

#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("segment {segment} has invalid distance {distance} km (must be finite and >= 0)")]
    InvalidDistance { segment: SegmentId, distance: f64 },

    #[error("station code must not be empty")]
    EmptyCode,
}

/// Shorthand result type for `rr-core` constructors.
pub type CoreResult<T> = Result<T, CoreError>;
