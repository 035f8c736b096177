//! Routing error type.

use thiserror::Error;

use rr_core::StationId;

/// Every way a routing query can fail.
///
/// All variants except [`InternalInconsistency`](Self::InternalInconsistency)
/// are routine outcomes the caller is expected to branch on.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RoutingError {
    #[error("station not found: {0}")]
    StationNotFound(String),

    #[error("start and end stations must be different")]
    SameStationRequested,

    #[error("no network segments available")]
    NoSegmentsAvailable,

    #[error("no path found between {from} and {to}")]
    NoPathFound { from: String, to: String },

    /// The predecessor chain did not lead back to the source.  Indicates a
    /// bug in the search, never bad input.
    #[error("internal inconsistency: predecessor chain broken at {station}")]
    InternalInconsistency { station: StationId },
}

pub type RoutingResult<T> = Result<T, RoutingError>;
