//! Adjacency-map graph built from a flat segment list.
//!
//! # Shape
//!
//! ```text
//! from ──▶ { to ──▶ distance_km }
//! ```
//!
//! Both levels are `BTreeMap`s, so neighbor iteration follows `StationId`
//! order and repeated searches over the same input visit nodes identically.
//!
//! Only stations that appear as a segment *source* are keys.  A station that
//! is only ever a destination (a terminus served by one-way segments) shows
//! up solely as a neighbor; [`Graph::nodes`] folds both sets together.

use std::collections::{BTreeMap, BTreeSet};

use rr_core::{Segment, StationId};

/// Directed weighted graph keyed by station identity.
///
/// Immutable after [`Graph::build`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Graph {
    adjacency: BTreeMap<StationId, BTreeMap<StationId, f64>>,
}

impl Graph {
    /// Build the adjacency map from `segments`.
    ///
    /// When several segments share the same ordered `(from, to)` pair the
    /// last one in iteration order wins.
    pub fn build(segments: &[Segment]) -> Self {
        let mut adjacency: BTreeMap<StationId, BTreeMap<StationId, f64>> = BTreeMap::new();
        for s in segments {
            adjacency.entry(s.from).or_default().insert(s.to, s.distance_km);
        }
        Self { adjacency }
    }

    /// Outgoing `(neighbor, distance_km)` pairs of `station`, in id order.
    ///
    /// Empty for stations with no outgoing segment.
    pub fn neighbors(&self, station: StationId) -> impl Iterator<Item = (StationId, f64)> + '_ {
        self.adjacency
            .get(&station)
            .into_iter()
            .flat_map(|m| m.iter().map(|(&to, &d)| (to, d)))
    }

    /// Every station that appears as a source or as a neighbor, ascending.
    pub fn nodes(&self) -> Vec<StationId> {
        let mut all: BTreeSet<StationId> = self.adjacency.keys().copied().collect();
        for targets in self.adjacency.values() {
            all.extend(targets.keys().copied());
        }
        all.into_iter().collect()
    }
}

// Inspection helpers for unit tests.
#[cfg(test)]
impl Graph {
    /// Weight of the edge `from → to`, if present.
    pub(crate) fn weight(&self, from: StationId, to: StationId) -> Option<f64> {
        self.adjacency.get(&from)?.get(&to).copied()
    }

    /// `true` if `station` has at least one outgoing edge.
    pub(crate) fn has_source(&self, station: StationId) -> bool {
        self.adjacency.contains_key(&station)
    }

    /// Number of distinct stations with outgoing edges.
    pub(crate) fn source_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of distinct `(from, to)` edges after duplicate collapsing.
    pub(crate) fn edge_count(&self) -> usize {
        self.adjacency.values().map(BTreeMap::len).sum()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}
