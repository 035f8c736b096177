//! The `TripRecorder` trait implemented by all trip backends.

use crate::{TripRecord, TripResult};

/// Persists computed trips.
pub trait TripRecorder {
    /// Store one trip and return its id.  Ids start at 1 and increase by one
    /// per recorded trip.
    fn record(&mut self, trip: &TripRecord) -> TripResult<u64>;

    /// Flush and close any underlying handles.
    ///
    /// Idempotent; calling it more than once is fine.
    fn finish(&mut self) -> TripResult<()>;
}

/// Keeps trips in memory.  Useful for tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryTripRecorder {
    trips: Vec<(u64, TripRecord)>,
}

impl MemoryTripRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded trips with their ids, in recording order.
    pub fn trips(&self) -> &[(u64, TripRecord)] {
        &self.trips
    }
}

impl TripRecorder for MemoryTripRecorder {
    fn record(&mut self, trip: &TripRecord) -> TripResult<u64> {
        let id = self.trips.len() as u64 + 1;
        self.trips.push((id, trip.clone()));
        Ok(id)
    }

    fn finish(&mut self) -> TripResult<()> {
        Ok(())
    }
}
