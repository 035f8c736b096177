//! Unit tests for rr-routing.
//!
//! All tests use hand-crafted segment lists and closure collaborators, so
//! nothing here depends on `rr-network`.

#[cfg(test)]
mod helpers {
    use rr_core::{Segment, SegmentId, StationId};

    pub const A: StationId = StationId(1);
    pub const B: StationId = StationId(2);
    pub const C: StationId = StationId(3);
    pub const D: StationId = StationId(4);

    /// Directed segments from `(from, to, km)` triples, ids assigned in order.
    pub fn segments(spec: &[(StationId, StationId, f64)]) -> Vec<Segment> {
        spec.iter()
            .enumerate()
            .map(|(i, &(from, to, km))| Segment::new(SegmentId(i as u32), from, to, km).unwrap())
            .collect()
    }

    /// Code lookup over single-letter codes `"A"`..`"D"`.
    pub fn lookup() -> impl Fn(&str) -> Option<StationId> {
        |code: &str| match code {
            "A" => Some(A),
            "B" => Some(B),
            "C" => Some(C),
            "D" => Some(D),
            _ => None,
        }
    }

    /// Segment source returning a fixed snapshot.
    pub fn source(segs: Vec<Segment>) -> impl Fn() -> Vec<Segment> {
        move || segs.clone()
    }

    /// A↔B 10, B↔C 15, A↔C 30.  Shortest A→C is 25 via B.
    pub fn triangle() -> Vec<Segment> {
        segments(&[
            (A, B, 10.0),
            (B, A, 10.0),
            (B, C, 15.0),
            (C, B, 15.0),
            (A, C, 30.0),
            (C, A, 30.0),
        ])
    }
}

// ── Graph construction ────────────────────────────────────────────────────────

#[cfg(test)]
mod graph {
    use super::helpers::*;
    use crate::Graph;

    #[test]
    fn empty_build() {
        let g = Graph::build(&[]);
        assert!(g.is_empty());
        assert!(g.nodes().is_empty());
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn keys_are_sources_only() {
        // C is a sink: it never appears as a source.
        let g = Graph::build(&segments(&[(A, B, 1.0), (B, C, 2.0)]));
        assert!(g.has_source(A));
        assert!(g.has_source(B));
        assert!(!g.has_source(C));
        assert_eq!(g.source_count(), 2);
    }

    #[test]
    fn nodes_include_sinks_sorted() {
        let g = Graph::build(&segments(&[(C, A, 1.0), (B, D, 2.0)]));
        assert_eq!(g.nodes(), vec![A, B, C, D]);
    }

    #[test]
    fn duplicate_pair_last_write_wins() {
        let g = Graph::build(&segments(&[(A, B, 10.0), (A, B, 4.0)]));
        assert_eq!(g.weight(A, B), Some(4.0));
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn directed_only() {
        let g = Graph::build(&segments(&[(A, B, 5.0)]));
        assert_eq!(g.weight(A, B), Some(5.0));
        assert_eq!(g.weight(B, A), None);
        assert_eq!(g.neighbors(B).count(), 0);
    }

    #[test]
    fn neighbors_in_id_order() {
        let g = Graph::build(&segments(&[(A, D, 1.0), (A, B, 2.0), (A, C, 3.0)]));
        let order: Vec<_> = g.neighbors(A).map(|(to, _)| to).collect();
        assert_eq!(order, vec![B, C, D]);
    }
}

// ── Frontiers ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod frontier {
    use rr_core::StationId;

    use crate::{Frontier, HeapFrontier, LinearScanFrontier};

    fn drain<F: Frontier>(mut f: F) -> Vec<(StationId, f64)> {
        f.update(StationId(5), 3.0);
        f.update(StationId(2), 7.0);
        f.update(StationId(9), f64::INFINITY);
        f.update(StationId(1), 3.0);
        f.update(StationId(2), 1.0); // improvement
        std::iter::from_fn(|| f.pop_min()).collect()
    }

    #[test]
    fn linear_scan_order() {
        let got = drain(LinearScanFrontier::default());
        assert_eq!(got, vec![(StationId(2), 1.0), (StationId(1), 3.0), (StationId(5), 3.0)]);
    }

    #[test]
    fn heap_matches_linear_scan() {
        assert_eq!(drain(HeapFrontier::default()), drain(LinearScanFrontier::default()));
    }

    #[test]
    fn infinite_nodes_never_selected() {
        let mut f = LinearScanFrontier::default();
        f.update(StationId(1), f64::INFINITY);
        assert!(f.pop_min().is_none());

        let mut h = HeapFrontier::default();
        h.update(StationId(1), f64::INFINITY);
        assert!(h.pop_min().is_none());
    }
}

// ── Finder & reconstruction ───────────────────────────────────────────────────

#[cfg(test)]
mod search {
    use super::helpers::*;
    use crate::{Graph, RoutingError, find_path, reconstruct};

    #[test]
    fn triangle_distances() {
        let g = Graph::build(&triangle());
        let t = find_path(&g, A, C).unwrap();
        assert_eq!(t.distance_to(C), Some(25.0));
        assert_eq!(t.predecessor_of(C), Some(B));
        assert_eq!(t.predecessor_of(B), Some(A));
        assert_eq!(t.predecessor_of(A), None);
    }

    #[test]
    fn unreachable_is_none() {
        let g = Graph::build(&segments(&[(A, B, 1.0), (C, D, 1.0)]));
        assert!(find_path(&g, A, D).is_none());
    }

    #[test]
    fn target_outside_graph_is_none() {
        let g = Graph::build(&segments(&[(A, B, 1.0)]));
        assert!(find_path(&g, A, D).is_none());
    }

    #[test]
    fn source_without_outgoing_edges_is_none() {
        let g = Graph::build(&segments(&[(A, B, 1.0)]));
        assert!(find_path(&g, B, A).is_none());
    }

    #[test]
    fn reaches_sink_only_station() {
        // D only ever appears as a destination.
        let g = Graph::build(&segments(&[(A, B, 1.0), (B, D, 2.0)]));
        assert_eq!(find_path(&g, A, D).unwrap().distance_to(D), Some(3.0));
    }

    #[test]
    fn early_exit_leaves_far_nodes_unsettled() {
        // Search stops once B is settled, so D is never relaxed.
        let g = Graph::build(&segments(&[(A, B, 1.0), (B, C, 1.0), (A, C, 100.0), (C, D, 1.0)]));
        let t = find_path(&g, A, B).unwrap();
        assert_eq!(t.distance_to(B), Some(1.0));
        assert_eq!(t.distance_to(D), None);
    }

    #[test]
    fn reconstruct_orders_stations_and_segments() {
        let segs = triangle();
        let g = Graph::build(&segs);
        let t = find_path(&g, A, C).unwrap();
        let p = reconstruct(&t, A, C, &segs).unwrap();
        assert_eq!(p.stations, vec![A, B, C]);
        assert_eq!(p.total_distance_km, 25.0);
        assert_eq!(p.segments.len(), 2);
        assert!(p.segments[0].connects(A, B));
        assert!(p.segments[1].connects(B, C));
    }

    #[test]
    fn broken_chain_is_inconsistency() {
        let segs = triangle();
        let g = Graph::build(&segs);
        let t = find_path(&g, A, C).unwrap();
        // Claim the walk should have started at D.
        let err = reconstruct(&t, D, C, &segs).unwrap_err();
        assert_eq!(err, RoutingError::InternalInconsistency { station: A });
    }

    #[test]
    fn missing_segment_is_inconsistency() {
        let segs = triangle();
        let g = Graph::build(&segs);
        let t = find_path(&g, A, C).unwrap();
        let err = reconstruct(&t, A, C, &segs[..1]).unwrap_err();
        assert_eq!(err, RoutingError::InternalInconsistency { station: B });
    }

    #[test]
    fn cyclic_chain_is_inconsistency() {
        let mut t = crate::SearchTables::default();
        t.distance.insert(C, 2.0);
        t.predecessor.insert(C, B);
        t.predecessor.insert(B, C);
        assert!(matches!(
            reconstruct(&t, A, C, &triangle()),
            Err(RoutingError::InternalInconsistency { .. })
        ));
    }
}

// ── compute_shortest_path ─────────────────────────────────────────────────────

#[cfg(test)]
mod routing {
    use std::cell::Cell;

    use rr_core::{Segment, StationId};

    use super::helpers::*;
    use crate::{FrontierKind, Router, RoutingError, compute_shortest_path};

    #[test]
    fn triangle_improvement() {
        let p = compute_shortest_path("A", "C", &lookup(), &source(triangle())).unwrap();
        assert_eq!(p.total_distance_km, 25.0);
        assert_eq!(p.stations, vec![A, B, C]);
    }

    #[test]
    fn unreachable_target() {
        let segs = segments(&[(A, C, 1.0), (C, A, 1.0), (B, D, 1.0), (D, B, 1.0)]);
        let err = compute_shortest_path("A", "B", &lookup(), &source(segs)).unwrap_err();
        assert_eq!(err, RoutingError::NoPathFound { from: "A".into(), to: "B".into() });
        assert_eq!(err.to_string(), "no path found between A and B");
    }

    #[test]
    fn empty_network() {
        let err = compute_shortest_path("A", "B", &lookup(), &source(vec![])).unwrap_err();
        assert_eq!(err, RoutingError::NoSegmentsAvailable);
    }

    #[test]
    fn same_station_rejected_even_when_connected() {
        let err = compute_shortest_path("A", "A", &lookup(), &source(triangle())).unwrap_err();
        assert_eq!(err, RoutingError::SameStationRequested);
        assert_eq!(err.to_string(), "start and end stations must be different");
    }

    #[test]
    fn segments_fetched_once_per_query() {
        let fetches = Cell::new(0);
        let segs = || {
            fetches.set(fetches.get() + 1);
            triangle()
        };
        compute_shortest_path("A", "C", &lookup(), &segs).unwrap();
        let _ = compute_shortest_path("A", "A", &lookup(), &segs);
        assert_eq!(fetches.get(), 2);
    }

    #[test]
    fn codes_aliasing_one_station_are_rejected() {
        let alias = |code: &str| match code {
            "MX" | "MONTREUX" => Some(StationId(46)),
            _ => None,
        };
        let err = compute_shortest_path("MX", "MONTREUX", &alias, &source(triangle())).unwrap_err();
        assert_eq!(err, RoutingError::SameStationRequested);
    }

    #[test]
    fn unknown_source_code() {
        let err = compute_shortest_path("ZZZ", "A", &lookup(), &source(triangle())).unwrap_err();
        assert_eq!(err, RoutingError::StationNotFound("ZZZ".into()));
        assert_eq!(err.to_string(), "station not found: ZZZ");
    }

    #[test]
    fn unknown_target_code() {
        let err = compute_shortest_path("A", "ZZZ", &lookup(), &source(triangle())).unwrap_err();
        assert_eq!(err, RoutingError::StationNotFound("ZZZ".into()));
    }

    #[test]
    fn empty_network_regardless_of_codes() {
        for (from, to) in [("ZZZ", "A"), ("A", "ZZZ"), ("A", "A"), ("ZZZ", "YYY")] {
            let err = compute_shortest_path(from, to, &lookup(), &source(vec![])).unwrap_err();
            assert_eq!(err, RoutingError::NoSegmentsAvailable);
        }
    }

    #[test]
    fn directionality() {
        let segs = segments(&[(A, B, 5.0)]);
        assert!(compute_shortest_path("A", "B", &lookup(), &source(segs.clone())).is_ok());
        let err = compute_shortest_path("B", "A", &lookup(), &source(segs)).unwrap_err();
        assert!(matches!(err, RoutingError::NoPathFound { .. }));
    }

    #[test]
    fn deterministic_under_fixed_input() {
        // Two equal-cost routes A→B→D and A→C→D.
        let segs = segments(&[(A, B, 5.0), (A, C, 5.0), (B, D, 5.0), (C, D, 5.0)]);
        let first = compute_shortest_path("A", "D", &lookup(), &source(segs.clone())).unwrap();
        for _ in 0..20 {
            let again = compute_shortest_path("A", "D", &lookup(), &source(segs.clone())).unwrap();
            assert_eq!(again, first);
        }
    }

    #[test]
    fn equal_cost_tie_goes_through_smaller_id() {
        let segs = segments(&[(A, C, 5.0), (A, B, 5.0), (C, D, 5.0), (B, D, 5.0)]);
        let p = compute_shortest_path("A", "D", &lookup(), &source(segs)).unwrap();
        // C is listed first, but B has the smaller id.
        assert_eq!(p.stations, vec![A, B, D]);
    }

    #[test]
    fn path_and_segment_counts_agree() {
        let p = compute_shortest_path("A", "C", &lookup(), &source(triangle())).unwrap();
        assert_eq!(p.segments.len(), p.stations.len() - 1);
        for (i, seg) in p.segments.iter().enumerate() {
            assert_eq!(seg.from, p.stations[i]);
            assert_eq!(seg.to, p.stations[i + 1]);
        }
    }

    #[test]
    fn duplicate_segment_seam() {
        // Graph keeps the later 4 km segment, reconstruction reports the
        // first-listed 10 km one.
        let segs = segments(&[(A, B, 10.0), (A, B, 4.0)]);
        let first_id = segs[0].id;
        let p = compute_shortest_path("A", "B", &lookup(), &source(segs)).unwrap();
        assert_eq!(p.total_distance_km, 4.0);
        assert_eq!(p.segments.len(), 1);
        assert_eq!(p.segments[0].id, first_id);
        assert_eq!(p.segments[0].distance_km, 10.0);
        let summed: f64 = p.segments.iter().map(|s: &Segment| s.distance_km).sum();
        assert_ne!(summed, p.total_distance_km);
    }

    #[test]
    fn heap_router_matches_default() {
        let heap = Router::new(FrontierKind::Heap);
        let a = heap.route("A", "C", &lookup(), &source(triangle())).unwrap();
        let b = Router::default().route("A", "C", &lookup(), &source(triangle())).unwrap();
        assert_eq!(a, b);
        assert_eq!(Router::default().frontier, FrontierKind::LinearScan);
    }

    #[test]
    fn zero_distance_segments() {
        let segs = segments(&[(A, B, 0.0), (B, C, 0.0)]);
        let p = compute_shortest_path("A", "C", &lookup(), &source(segs)).unwrap();
        assert_eq!(p.total_distance_km, 0.0);
        assert_eq!(p.stations, vec![A, B, C]);
    }
}

// ── Property tests ────────────────────────────────────────────────────────────

#[cfg(test)]
mod proptests {
    use proptest::prelude::*;

    use rr_core::{Segment, SegmentId, StationId};

    use crate::{FrontierKind, Graph, Router, RoutingError};

    fn code_lookup(n: u32) -> impl Fn(&str) -> Option<StationId> {
        move |code: &str| {
            code.strip_prefix('S')
                .and_then(|rest| rest.parse::<u32>().ok())
                .filter(|&i| i < n)
                .map(StationId)
        }
    }

    /// Up to 8 stations, up to 24 segments with integer weights so that sums
    /// are exact in `f64`.
    fn network() -> impl Strategy<Value = (u32, Vec<Segment>)> {
        (2u32..8).prop_flat_map(|n| {
            let seg = (0..n, 0..n, 0u32..50);
            (Just(n), proptest::collection::vec(seg, 1..24)).prop_map(|(n, raw)| {
                let segs = raw
                    .into_iter()
                    .enumerate()
                    .map(|(i, (f, t, w))| {
                        Segment::new(SegmentId(i as u32), StationId(f), StationId(t), w as f64)
                            .unwrap()
                    })
                    .collect();
                (n, segs)
            })
        })
    }

    /// Bellman-Ford over the same collapsed graph, as an independent oracle.
    fn oracle(graph: &Graph, source: StationId, target: StationId) -> Option<f64> {
        let nodes = graph.nodes();
        let mut dist: std::collections::HashMap<StationId, f64> =
            nodes.iter().map(|&n| (n, f64::INFINITY)).collect();
        dist.insert(source, 0.0);
        for _ in 0..nodes.len() {
            for &u in &nodes {
                let du = dist[&u];
                if !du.is_finite() {
                    continue;
                }
                for (v, w) in graph.neighbors(u) {
                    if du + w < dist[&v] {
                        dist.insert(v, du + w);
                    }
                }
            }
        }
        dist.get(&target).copied().filter(|d| d.is_finite())
    }

    proptest! {
        #[test]
        fn matches_bellman_ford((n, segs) in network()) {
            let target = format!("S{}", n - 1);
            let result = Router::default().route("S0", &target, &code_lookup(n), &|| segs.clone());
            let expected = oracle(&Graph::build(&segs), StationId(0), StationId(n - 1));
            match (result, expected) {
                (Ok(p), Some(d)) => prop_assert_eq!(p.total_distance_km, d),
                (Err(RoutingError::NoPathFound { .. }), None) => {}
                (other, exp) => prop_assert!(false, "got {:?}, expected {:?}", other, exp),
            }
        }

        #[test]
        fn segments_chain_through_stations((n, segs) in network()) {
            let target = format!("S{}", n - 1);
            if let Ok(p) = Router::default().route("S0", &target, &code_lookup(n), &|| segs.clone()) {
                prop_assert_eq!(p.segments.len(), p.stations.len() - 1);
                for (i, s) in p.segments.iter().enumerate() {
                    prop_assert_eq!(s.from, p.stations[i]);
                    prop_assert_eq!(s.to, p.stations[i + 1]);
                }
                let mut seen = p.stations.clone();
                seen.sort();
                seen.dedup();
                prop_assert_eq!(seen.len(), p.stations.len());
            }
        }

        #[test]
        fn frontiers_agree((n, segs) in network()) {
            let target = format!("S{}", n - 1);
            let lookup = code_lookup(n);
            let linear = Router::new(FrontierKind::LinearScan).route("S0", &target, &lookup, &|| segs.clone());
            let heap = Router::new(FrontierKind::Heap).route("S0", &target, &lookup, &|| segs.clone());
            prop_assert_eq!(linear, heap);
        }
    }
}
