//! Single-source Dijkstra with early exit at the target.

use rustc_hash::{FxHashMap, FxHashSet};

use rr_core::StationId;

use crate::frontier::{Frontier, LinearScanFrontier};
use crate::graph::Graph;

/// Distance and predecessor tables left behind by a successful search.
///
/// Both are owned by the query that produced them.  Distances of stations
/// beyond the target are not final: the search stops as soon as the target is
/// settled.
#[derive(Debug, Clone, Default)]
pub struct SearchTables {
    /// Best known distance from the source.  `f64::INFINITY` for stations
    /// never reached.
    pub distance:    FxHashMap<StationId, f64>,
    /// Station immediately before each reached station on its best path.
    /// The source and unreached stations have no entry.
    pub predecessor: FxHashMap<StationId, StationId>,
}

impl SearchTables {
    /// Finite distance to `station`, or `None` if it was never reached.
    pub fn distance_to(&self, station: StationId) -> Option<f64> {
        self.distance.get(&station).copied().filter(|d| d.is_finite())
    }

    pub fn predecessor_of(&self, station: StationId) -> Option<StationId> {
        self.predecessor.get(&station).copied()
    }
}

/// Run Dijkstra from `source` to `target` with the default linear-scan
/// frontier.
///
/// Returns `None` when `target` is unreachable from `source`.
pub fn find_path(graph: &Graph, source: StationId, target: StationId) -> Option<SearchTables> {
    find_path_with(graph, source, target, LinearScanFrontier::default())
}

/// Like [`find_path`] but with a caller-supplied [`Frontier`].
pub fn find_path_with<F: Frontier>(
    graph:        &Graph,
    source:       StationId,
    target:       StationId,
    mut frontier: F,
) -> Option<SearchTables> {
    // ── Seed: sources and sink-only stations alike start at +inf ──────────
    let nodes = graph.nodes();
    let mut distance: FxHashMap<StationId, f64> =
        FxHashMap::with_capacity_and_hasher(nodes.len() + 1, Default::default());
    for &station in &nodes {
        distance.insert(station, f64::INFINITY);
        frontier.update(station, f64::INFINITY);
    }
    distance.insert(source, 0.0);
    frontier.update(source, 0.0);

    let mut predecessor: FxHashMap<StationId, StationId> = FxHashMap::default();
    let mut visited: FxHashSet<StationId> = FxHashSet::default();

    // ── Main loop ─────────────────────────────────────────────────────────
    while let Some((current, current_distance)) = frontier.pop_min() {
        if current == target {
            break;
        }
        visited.insert(current);

        for (neighbor, weight) in graph.neighbors(current) {
            if visited.contains(&neighbor) {
                continue;
            }
            let candidate = current_distance + weight;
            let best = distance.entry(neighbor).or_insert(f64::INFINITY);
            // Strict: an equal-cost alternative never replaces the first one found.
            if candidate < *best {
                *best = candidate;
                predecessor.insert(neighbor, current);
                frontier.update(neighbor, candidate);
            }
        }
    }

    let tables = SearchTables { distance, predecessor };
    tables.distance_to(target)?;
    Some(tables)
}
