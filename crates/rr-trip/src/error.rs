//! Error types for rr-trip.

use thiserror::Error;

use rr_core::StationId;

/// Errors that can occur when building or recording a trip.
#[derive(Debug, Error)]
pub enum TripError {
    #[error("analytic code not found: {0} (available codes: PASSAGER, FRET, MAINTENANCE, TEST, TOURISME)")]
    UnknownAnalyticCode(String),

    #[error("station {0} is not in the directory")]
    UnknownStation(StationId),

    #[error("trip has no stations")]
    EmptyPath,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),
}

/// Alias for `Result<T, TripError>`.
pub type TripResult<T> = Result<T, TripError>;
