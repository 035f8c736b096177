//! The result of a routing query.

use crate::{Segment, StationId};

/// An ordered station sequence, its total distance, and the segment used for
/// every hop.
///
/// Invariant: `segments.len() == stations.len() - 1`, and `segments[i]` goes
/// from `stations[i]` to `stations[i + 1]`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathResult {
    /// Stations in travel order, starting at the source and ending at the target.
    pub stations: Vec<StationId>,
    /// Total distance as computed by the search (not re-summed from `segments`).
    pub total_distance_km: f64,
    /// Segments in travel order.
    pub segments: Vec<Segment>,
}

impl PathResult {
    /// Number of segments travelled.
    pub fn hop_count(&self) -> usize {
        self.segments.len()
    }

    pub fn source(&self) -> Option<StationId> {
        self.stations.first().copied()
    }

    pub fn target(&self) -> Option<StationId> {
        self.stations.last().copied()
    }
}
