//! Turn search tables into an ordered station and segment sequence.

use rr_core::{PathResult, Segment, StationId};

use crate::finder::SearchTables;
use crate::{RoutingError, RoutingResult};

/// Walk the predecessor chain from `target` back to `source` and attach the
/// segment used for every hop.
///
/// For each hop `a → b` the *first* segment in `all_segments` going `a → b`
/// is chosen.  [`Graph::build`](crate::Graph::build) keeps the *last* one, so
/// with duplicate pairs the reported segment may differ from the weight the
/// search used.  The total distance always comes from the search.
pub fn reconstruct(
    tables:       &SearchTables,
    source:       StationId,
    target:       StationId,
    all_segments: &[Segment],
) -> RoutingResult<PathResult> {
    let total_distance_km = tables
        .distance_to(target)
        .ok_or(RoutingError::InternalInconsistency { station: target })?;

    // ── Predecessor walk (target → source) ────────────────────────────────
    let mut stations = vec![target];
    let mut current = target;
    while let Some(prev) = tables.predecessor_of(current) {
        // A valid chain can never be longer than the predecessor table.
        if stations.len() > tables.predecessor.len() {
            return Err(RoutingError::InternalInconsistency { station: current });
        }
        stations.push(prev);
        current = prev;
    }
    if current != source {
        return Err(RoutingError::InternalInconsistency { station: current });
    }
    stations.reverse();

    // ── Segment lookup per hop ────────────────────────────────────────────
    let segments = stations
        .windows(2)
        .map(|hop| {
            all_segments
                .iter()
                .find(|s| s.connects(hop[0], hop[1]))
                .copied()
                .ok_or(RoutingError::InternalInconsistency { station: hop[0] })
        })
        .collect::<RoutingResult<Vec<Segment>>>()?;

    Ok(PathResult { stations, total_distance_km, segments })
}
