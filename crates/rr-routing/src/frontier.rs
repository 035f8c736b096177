//! Node-selection strategies for Dijkstra.
//!
//! The search asks its [`Frontier`] for "the unvisited station with the
//! smallest tentative distance" once per iteration.  Two implementations:
//!
//! | Type                   | `pop_min` cost | Notes                                  |
//! |------------------------|----------------|----------------------------------------|
//! | [`LinearScanFrontier`] | O(V)           | Default; O(V²) overall, fine for ~100s of stations |
//! | [`HeapFrontier`]       | O(log V)       | Binary heap with lazy deletion         |
//!
//! # Tie-breaking
//!
//! Both select the smallest `StationId` among equally distant candidates, so
//! swapping one for the other never changes the chosen path.

use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap};

use ordered_float::OrderedFloat;
use rustc_hash::FxHashSet;

use rr_core::StationId;

// ── Frontier trait ────────────────────────────────────────────────────────────

/// Priority structure over unvisited stations.
pub trait Frontier {
    /// Record the tentative distance of `station`.  Called once per node when
    /// seeding (with `f64::INFINITY`) and again on every strict improvement.
    fn update(&mut self, station: StationId, distance: f64);

    /// Remove and return the unvisited station with the smallest finite
    /// distance.  `None` once no reachable station remains.
    fn pop_min(&mut self) -> Option<(StationId, f64)>;
}

/// Runtime choice of frontier, for callers that pick it from configuration.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum FrontierKind {
    #[default]
    LinearScan,
    Heap,
}

impl FrontierKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FrontierKind::LinearScan => "linear",
            FrontierKind::Heap       => "heap",
        }
    }
}

impl std::fmt::Display for FrontierKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── LinearScanFrontier ────────────────────────────────────────────────────────

/// Scans every unvisited station on each `pop_min`.
///
/// Unvisited stations live in a `BTreeMap`, so the scan runs in ascending id
/// order and the strict `<` comparison keeps the first (smallest) id on ties.
#[derive(Debug, Default)]
pub struct LinearScanFrontier {
    unvisited: BTreeMap<StationId, f64>,
}

impl Frontier for LinearScanFrontier {
    fn update(&mut self, station: StationId, distance: f64) {
        self.unvisited.insert(station, distance);
    }

    fn pop_min(&mut self) -> Option<(StationId, f64)> {
        let mut best: Option<(StationId, f64)> = None;
        let mut best_distance = f64::INFINITY;
        for (&station, &distance) in &self.unvisited {
            if distance < best_distance {
                best_distance = distance;
                best = Some((station, distance));
            }
        }
        if let Some((station, _)) = best {
            self.unvisited.remove(&station);
        }
        best
    }
}

// ── HeapFrontier ──────────────────────────────────────────────────────────────

/// Binary min-heap keyed by `(distance, station)`.
///
/// Improvements push a new entry instead of decreasing a key; stale entries
/// are skipped when popped because their station is already settled.
/// Unreachable (infinite) stations are never pushed.
#[derive(Debug, Default)]
pub struct HeapFrontier {
    // Reverse makes BinaryHeap (max) behave as a min-heap.  The secondary
    // StationId key gives the same tie-breaking as the linear scan.
    heap:    BinaryHeap<Reverse<(OrderedFloat<f64>, StationId)>>,
    settled: FxHashSet<StationId>,
}

impl Frontier for HeapFrontier {
    fn update(&mut self, station: StationId, distance: f64) {
        if distance.is_finite() {
            self.heap.push(Reverse((OrderedFloat(distance), station)));
        }
    }

    fn pop_min(&mut self) -> Option<(StationId, f64)> {
        while let Some(Reverse((OrderedFloat(distance), station))) = self.heap.pop() {
            if self.settled.insert(station) {
                return Some((station, distance));
            }
        }
        None
    }
}
