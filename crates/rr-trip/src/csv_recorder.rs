//! CSV trip backend.
//!
//! Creates two files in the configured directory:
//! - `trips.csv`: one row per trip, path codes joined with `-`, an empty
//!   `train` when none is known, `created_at` in RFC 3339
//! - `trip_segments.csv`: one row per leg, keyed by `trip_id` and `sequence_order`

use std::fs::File;
use std::path::Path;

use csv::Writer;
use tracing::debug;

use crate::recorder::TripRecorder;
use crate::{TripRecord, TripResult};

/// Writes trips to two CSV files.
pub struct CsvTripRecorder {
    trips:    Writer<File>,
    legs:     Writer<File>,
    next_id:  u64,
    finished: bool,
}

impl CsvTripRecorder {
    /// Create (truncating) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> TripResult<Self> {
        let mut trips = Writer::from_path(dir.join("trips.csv"))?;
        trips.write_record([
            "trip_id", "from", "to", "analytic_code", "train", "distance_km", "path", "created_at",
        ])?;

        let mut legs = Writer::from_path(dir.join("trip_segments.csv"))?;
        legs.write_record(["trip_id", "sequence_order", "segment_id", "from", "to", "distance_km"])?;

        Ok(Self { trips, legs, next_id: 1, finished: false })
    }
}

impl TripRecorder for CsvTripRecorder {
    fn record(&mut self, trip: &TripRecord) -> TripResult<u64> {
        let id = self.next_id;
        self.trips.write_record(&[
            id.to_string(),
            trip.from_code.clone(),
            trip.to_code.clone(),
            trip.analytic_code.to_string(),
            trip.train.clone().unwrap_or_default(),
            format!("{:.2}", trip.distance_km),
            trip.path.join("-"),
            trip.created_at_rfc3339(),
        ])?;
        for leg in &trip.legs {
            self.legs.write_record(&[
                id.to_string(),
                leg.sequence_order.to_string(),
                leg.segment_id.0.to_string(),
                leg.from_code.clone(),
                leg.to_code.clone(),
                format!("{:.2}", leg.distance_km),
            ])?;
        }
        self.next_id += 1;
        debug!(trip_id = id, legs = trip.legs.len(), "trip recorded");
        Ok(id)
    }

    fn finish(&mut self) -> TripResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.trips.flush()?;
        self.legs.flush()?;
        Ok(())
    }
}
