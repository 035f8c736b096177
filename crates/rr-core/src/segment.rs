//! Directed, weighted network segment.

use crate::{CoreError, CoreResult, SegmentId, StationId};

/// A directed connection `from → to` measured in kilometres.
///
/// Segments are never implicitly symmetric: a track usable in both
/// directions is stored as two segments (see [`Segment::reversed`]).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    pub id:          SegmentId,
    pub from:        StationId,
    pub to:          StationId,
    /// Always finite and `>= 0` when built through [`Segment::new`].
    pub distance_km: f64,
}

impl Segment {
    /// Validate and build a segment.
    ///
    /// Dijkstra is only correct for non-negative weights, so negative, NaN and
    /// infinite distances are rejected here rather than at query time.
    pub fn new(id: SegmentId, from: StationId, to: StationId, distance_km: f64) -> CoreResult<Self> {
        if !distance_km.is_finite() || distance_km < 0.0 {
            return Err(CoreError::InvalidDistance { segment: id, distance: distance_km });
        }
        Ok(Self { id, from, to, distance_km })
    }

    /// The opposite-direction twin of this segment, with the same distance.
    pub fn reversed(&self, id: SegmentId) -> Self {
        Self { id, from: self.to, to: self.from, distance_km: self.distance_km }
    }

    /// `true` if this segment goes exactly `from → to`.
    #[inline]
    pub fn connects(&self, from: StationId, to: StationId) -> bool {
        self.from == from && self.to == to
    }
}
