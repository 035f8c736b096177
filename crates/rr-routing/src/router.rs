//! The routing operation and the collaborator traits it consumes.
//!
//! # Collaborators
//!
//! | Trait             | Provides                                  | Closure form                      |
//! |-------------------|-------------------------------------------|-----------------------------------|
//! | [`StationLookup`] | station code → `StationId`                | `Fn(&str) -> Option<StationId>`   |
//! | [`SegmentSource`] | snapshot of every directed segment        | `Fn() -> Vec<Segment>`            |
//!
//! `rr-network` implements both for its in-memory directory and segment
//! table; tests usually pass closures.

use rr_core::{PathResult, Segment, StationId};

use crate::finder::{SearchTables, find_path_with};
use crate::frontier::{FrontierKind, HeapFrontier, LinearScanFrontier};
use crate::graph::Graph;
use crate::reconstruct::reconstruct;
use crate::{RoutingError, RoutingResult};

// ── Collaborator traits ───────────────────────────────────────────────────────

/// Resolves a station short code to its identity.
pub trait StationLookup {
    fn station_id(&self, code: &str) -> Option<StationId>;
}

impl<F> StationLookup for F
where
    F: Fn(&str) -> Option<StationId>,
{
    fn station_id(&self, code: &str) -> Option<StationId> {
        self(code)
    }
}

/// Supplies the complete, unfiltered set of directed segments.
///
/// Called once per query; the returned `Vec` is treated as a point-in-time
/// snapshot.
pub trait SegmentSource {
    fn segments(&self) -> Vec<Segment>;
}

impl<F> SegmentSource for F
where
    F: Fn() -> Vec<Segment>,
{
    fn segments(&self) -> Vec<Segment> {
        self()
    }
}

// ── Router ────────────────────────────────────────────────────────────────────

/// Shortest-path router.  Holds configuration only, never graph state.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Router {
    pub frontier: FrontierKind,
}

impl Router {
    pub fn new(frontier: FrontierKind) -> Self {
        Self { frontier }
    }

    /// Compute the shortest path between two station codes.
    ///
    /// Checks run in this order, and each failure short-circuits:
    ///
    /// 1. The segment snapshot must be non-empty
    ///    ([`RoutingError::NoSegmentsAvailable`]), whatever the codes.
    /// 2. `source_code`, then `target_code`, must resolve
    ///    ([`RoutingError::StationNotFound`]).
    /// 3. They must resolve to different stations
    ///    ([`RoutingError::SameStationRequested`]); no graph is built.
    /// 4. The target must be reachable ([`RoutingError::NoPathFound`]).
    pub fn route(
        &self,
        source_code: &str,
        target_code: &str,
        lookup:      &impl StationLookup,
        segments:    &impl SegmentSource,
    ) -> RoutingResult<PathResult> {
        let all_segments = segments.segments();
        if all_segments.is_empty() {
            return Err(RoutingError::NoSegmentsAvailable);
        }

        let source = lookup
            .station_id(source_code)
            .ok_or_else(|| RoutingError::StationNotFound(source_code.to_owned()))?;
        let target = lookup
            .station_id(target_code)
            .ok_or_else(|| RoutingError::StationNotFound(target_code.to_owned()))?;

        if source == target {
            return Err(RoutingError::SameStationRequested);
        }

        let graph = Graph::build(&all_segments);
        let tables = self.search(&graph, source, target).ok_or_else(|| RoutingError::NoPathFound {
            from: source_code.to_owned(),
            to:   target_code.to_owned(),
        })?;

        reconstruct(&tables, source, target, &all_segments)
    }

    /// Run the search with this router's frontier.
    pub fn search(&self, graph: &Graph, source: StationId, target: StationId) -> Option<SearchTables> {
        match self.frontier {
            FrontierKind::LinearScan => {
                find_path_with(graph, source, target, LinearScanFrontier::default())
            }
            FrontierKind::Heap => find_path_with(graph, source, target, HeapFrontier::default()),
        }
    }
}

/// [`Router::route`] with the default linear-scan frontier.
pub fn compute_shortest_path(
    source_code: &str,
    target_code: &str,
    lookup:      &impl StationLookup,
    segments:    &impl SegmentSource,
) -> RoutingResult<PathResult> {
    Router::default().route(source_code, target_code, lookup, segments)
}
