//! Ordered list of directed segments.

use rr_core::{Segment, SegmentId, StationId};
use rr_routing::SegmentSource;

use crate::{NetworkError, NetworkResult};

/// Directed segments in insertion order, with sequential [`SegmentId`]s.
///
/// Order matters: routing reports the first-listed segment for every hop.
#[derive(Debug, Clone, Default)]
pub struct SegmentTable {
    segments: Vec<Segment>,
}

impl SegmentTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate for the expected number of segments.
    pub fn with_capacity(segments: usize) -> Self {
        Self { segments: Vec::with_capacity(segments) }
    }

    fn next_id(&self) -> NetworkResult<SegmentId> {
        segment_id(self.segments.len())
    }

    /// Add a one-way segment `from → to`.
    pub fn add_directed(&mut self, from: StationId, to: StationId, distance_km: f64) -> NetworkResult<SegmentId> {
        let segment = Segment::new(self.next_id()?, from, to, distance_km)?;
        self.segments.push(segment);
        Ok(segment.id)
    }

    /// Add `a → b` and its reverse `b → a` with the same distance.
    pub fn add_bidirectional(
        &mut self,
        a:           StationId,
        b:           StationId,
        distance_km: f64,
    ) -> NetworkResult<(SegmentId, SegmentId)> {
        let forward = self.add_directed(a, b, distance_km)?;
        let reverse = self.segments[forward.index()].reversed(self.next_id()?);
        self.segments.push(reverse);
        Ok((forward, reverse.id))
    }

    pub fn get(&self, id: SegmentId) -> Option<&Segment> {
        self.segments.get(id.index())
    }

    pub fn as_slice(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl SegmentSource for SegmentTable {
    fn segments(&self) -> Vec<Segment> {
        self.segments.clone()
    }
}

/// The id for the segment stored at `position`.  Fails once positions no
/// longer fit the id type.
pub(crate) fn segment_id(position: usize) -> NetworkResult<SegmentId> {
    SegmentId::try_from(position).map_err(|_| NetworkError::TableFull(position))
}
