//! Unit tests for nav-graph.
//!
//! All tests use hand-crafted floors so they run without any map file.

#[cfg(test)]
mod helpers {
    use nav_core::{FeatureIdx, IndoorFeature, NodeId, Point2};

    use crate::{CorridorPart, Graph, GraphNode, NodeRole};

    pub fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    /// One 10×10 corridor, a room sharing its east wall, and an elevator
    /// point one unit west of it.
    ///
    /// ```text
    ///        (0,10) ┌──────────┬──────┐ (16,10)
    ///               │ corridor │ room │
    ///   elev ●      │  (f0)    │ (f1) │
    ///   (-1,5)      │          │ 101  │
    ///         (0,0) └──────────┴──────┘ (16,0)
    /// ```
    ///
    /// Feature indices: corridor 0, room 1, elevator 2.
    pub fn unit_square_floor() -> Vec<IndoorFeature> {
        vec![
            IndoorFeature::polygon([p(0.0, 0.0), p(10.0, 0.0), p(10.0, 10.0), p(0.0, 10.0), p(0.0, 0.0)])
                .with_tag("indoor", "corridor"),
            IndoorFeature::polygon([p(10.0, 0.0), p(16.0, 0.0), p(16.0, 10.0), p(10.0, 10.0)])
                .with_tag("indoor", "room")
                .with_tag("ref", "101"),
            IndoorFeature::point(p(-1.0, 5.0)).with_tag("highway", "elevator"),
        ]
    }

    /// Closed axis-aligned rectangle ring.
    pub fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Vec<Point2> {
        vec![p(x0, y0), p(x1, y0), p(x1, y1), p(x0, y1), p(x0, y0)]
    }

    /// Two corridors meeting at a corner, a room off the far end of the
    /// second, and stairs at the start of the first.
    ///
    /// ```text
    ///                          ┌──┬─────┐
    ///                          │  │ 301 │ (f2)
    ///                          │  └─────┘
    ///                          │f1│
    ///   stairs ● ┌─────────────┤  │
    ///     (f3)   │     f0      │  │
    ///            └─────────────┴──┘
    ///          (0,0)        (30,0) (34,0)
    /// ```
    pub fn corner_floor() -> Vec<IndoorFeature> {
        vec![
            IndoorFeature::polygon(rect(0.0, 0.0, 30.0, 4.0)).with_tag("indoor", "corridor"),
            IndoorFeature::polygon(rect(30.0, 0.0, 34.0, 30.0)).with_tag("indoor", "corridor"),
            IndoorFeature::polygon(rect(34.0, 24.0, 40.0, 30.0))
                .with_tag("indoor", "room")
                .with_tag("ref", "301"),
            IndoorFeature::point(p(-1.0, 2.0))
                .with_tag("entrance", "yes")
                .with_tag("stairs", "yes"),
        ]
    }

    /// A single corridor far longer than the merge radius.
    pub fn long_corridor() -> Vec<IndoorFeature> {
        vec![IndoorFeature::polygon(rect(0.0, 0.0, 100.0, 4.0)).with_tag("indoor", "corridor")]
    }

    /// Insert a bare corridor node belonging to feature `f`.
    pub fn corridor(g: &mut Graph, id: &str, pos: Point2, f: u32) {
        g.insert_node(GraphNode::new(
            NodeId::from(id),
            pos,
            FeatureIdx(f),
            NodeRole::Corridor(CorridorPart::Boundary),
        ));
    }

    pub fn room(g: &mut Graph, id: &str, pos: Point2, reference: &str) {
        g.insert_node(GraphNode::new(
            NodeId::from(id),
            pos,
            FeatureIdx(99),
            NodeRole::Room { reference: reference.to_owned() },
        ));
    }

    /// Small weighted grid for search tests.
    ///
    /// ```text
    ///   a(0,0) ── b(4,0) ── c(8,1)
    ///     │                   │
    ///   d(0,6) ───────────── e(8,6)
    /// ```
    ///
    /// Shortest a→e: a–b–c–e = 4 + √17 + 5 ≈ 13.12, versus a–d–e = 6 + 8 = 14.
    pub fn grid_graph() -> Graph {
        let mut g = Graph::new();
        corridor(&mut g, "a", p(0.0, 0.0), 0);
        corridor(&mut g, "b", p(4.0, 0.0), 0);
        corridor(&mut g, "c", p(8.0, 1.0), 0);
        corridor(&mut g, "d", p(0.0, 6.0), 0);
        corridor(&mut g, "e", p(8.0, 6.0), 0);
        for (x, y) in [("a", "b"), ("b", "c"), ("c", "e"), ("a", "d"), ("d", "e")] {
            g.add_edge(x, y).unwrap();
        }
        g
    }
}

// ── Feature classification ────────────────────────────────────────────────────

#[cfg(test)]
mod classify {
    use nav_core::{IndoorFeature, TransportKind};

    use super::helpers::{p, unit_square_floor};
    use crate::classify;
    use crate::classify::EntryShape;

    fn square() -> Vec<nav_core::Point2> {
        vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)]
    }

    #[test]
    fn partitions_scenario_floor() {
        let features = unit_square_floor();
        let floor = classify(&features);
        assert_eq!(floor.corridors.len(), 1);
        assert_eq!(floor.rooms.len(), 1);
        assert_eq!(floor.entry_points.len(), 1);
        assert_eq!(floor.rooms[0].reference, "101");
        assert_eq!(floor.entry_points[0].kind, TransportKind::Elevator);
        assert!(matches!(floor.entry_points[0].shape, EntryShape::At(_)));
    }

    #[test]
    fn room_without_ref_gets_placeholder() {
        let features = vec![
            IndoorFeature::polygon(square()).with_tag("indoor", "corridor"),
            IndoorFeature::polygon(square()).with_tag("indoor", "room"),
        ];
        let floor = classify(&features);
        assert_eq!(floor.rooms[0].reference, "room-1");
    }

    #[test]
    fn polygon_entry_kinds() {
        let features = vec![
            IndoorFeature::polygon(square()).with_tag("highway", "elevator"),
            IndoorFeature::polygon(square()).with_tag("highway", "steps"),
            IndoorFeature::polygon(square()).with_tag("escalators", "yes"),
        ];
        let kinds: Vec<_> = classify(&features).entry_points.iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            [TransportKind::Elevator, TransportKind::Stairs, TransportKind::Escalator]
        );
    }

    #[test]
    fn entrance_points_use_secondary_tags() {
        let at = p(0.0, 0.0);
        let features = vec![
            IndoorFeature::point(at).with_tag("entrance", "yes").with_tag("escalators", "yes"),
            IndoorFeature::point(at).with_tag("entrance", "yes").with_tag("highway", "steps"),
            IndoorFeature::point(at).with_tag("entrance", "yes").with_tag("stairs", "yes"),
            IndoorFeature::point(at).with_tag("entrance", "yes"),
            IndoorFeature::point(at).with_tag("entrance", "no"),
            // Point steps without entrance=yes are not entry points.
            IndoorFeature::point(at).with_tag("highway", "steps"),
        ];
        let kinds: Vec<_> = classify(&features).entry_points.iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            [
                TransportKind::Escalator,
                TransportKind::Stairs,
                TransportKind::Stairs,
                TransportKind::Any,
            ]
        );
    }

    #[test]
    fn views_are_disjoint_and_untagged_ignored() {
        let features = vec![
            // Both corridor and elevator tags: corridor wins.
            IndoorFeature::polygon(square())
                .with_tag("indoor", "corridor")
                .with_tag("highway", "elevator"),
            IndoorFeature::polygon(square()).with_tag("indoor", "wall"),
            IndoorFeature::point(p(0.0, 0.0)).with_tag("indoor", "room"),
        ];
        let floor = classify(&features);
        assert_eq!(floor.corridors.len(), 1);
        assert!(floor.rooms.is_empty());
        assert!(floor.entry_points.is_empty());
    }

    #[test]
    fn empty_ring_skipped() {
        let features = vec![IndoorFeature::polygon([]).with_tag("indoor", "corridor")];
        assert!(classify(&features).corridors.is_empty());
    }

    #[test]
    fn non_finite_geometry_skipped() {
        let mut ring = square();
        ring[2] = p(f64::NAN, 1.0);
        let features = vec![
            IndoorFeature::polygon(ring).with_tag("indoor", "corridor"),
            IndoorFeature::polygon(square()).with_tag("indoor", "room").with_tag("ref", "7"),
            IndoorFeature::point(p(f64::INFINITY, 0.0)).with_tag("highway", "elevator"),
        ];
        let floor = classify(&features);
        assert!(floor.corridors.is_empty());
        assert_eq!(floor.rooms.len(), 1);
        assert!(floor.entry_points.is_empty());
    }
}

// ── Node synthesis ────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use nav_core::{IndoorFeature, Point2, TransportKind};

    use super::helpers::{p, unit_square_floor};
    use crate::builder::{boundary_sample_indices, centerline_points};
    use crate::{build_floor_graph, build_nodes, classify, CorridorPart, GraphBuildConfig, NodeRole};

    #[test]
    fn boundary_stride_and_minimum() {
        assert_eq!(boundary_sample_indices(12, 3, 3), vec![0, 3, 6, 9]);
        // Stride 3 on a 4-vertex ring keeps only 2; shrinks to stride 1.
        assert_eq!(boundary_sample_indices(4, 3, 3), vec![0, 1, 2, 3]);
        assert_eq!(boundary_sample_indices(4, 3, 2), vec![0, 3]);
        assert_eq!(boundary_sample_indices(2, 3, 5), vec![0, 1]);
        assert!(boundary_sample_indices(0, 3, 3).is_empty());
    }

    #[test]
    fn centerline_pulls_toward_centroid() {
        let ring = [p(0.0, 0.0), p(10.0, 0.0), p(10.0, 10.0), p(0.0, 10.0)];
        let line = centerline_points(&ring, 6, 0.7);
        assert_eq!(line.len(), 5, "4 interior points + centroid");
        assert_eq!(line[0], p(3.5, 3.5));
        assert_eq!(line[1], p(6.5, 3.5));
        assert_eq!(*line.last().unwrap(), p(5.0, 5.0));
    }

    #[test]
    fn centerline_samples_are_bounded() {
        let ring: Vec<Point2> = (0..20).map(|i| p(i as f64, (i % 2) as f64)).collect();
        let line = centerline_points(&ring, 6, 0.7);
        assert_eq!(line.len(), 7);
    }

    #[test]
    fn nodes_for_scenario_floor() {
        let features = unit_square_floor();
        let graph = build_nodes(&classify(&features), &GraphBuildConfig::default()).unwrap();

        let boundary = graph
            .nodes()
            .filter(|n| n.role == NodeRole::Corridor(CorridorPart::Boundary))
            .count();
        let centerline = graph
            .nodes()
            .filter(|n| n.role == NodeRole::Corridor(CorridorPart::Centerline))
            .count();
        assert_eq!(boundary, 4);
        assert_eq!(centerline, 5);

        let room = graph.node("room-1").unwrap();
        assert_eq!(room.position, p(13.0, 5.0));
        assert_eq!(room.role.room_ref(), Some("101"));

        let elevator = graph.node("entry-2").unwrap();
        assert_eq!(elevator.position, p(-1.0, 5.0));
        assert_eq!(elevator.role.entry_kind(), Some(TransportKind::Elevator));
    }

    #[test]
    fn only_centerline_chain_is_linked() {
        let features = unit_square_floor();
        let graph = build_nodes(&classify(&features), &GraphBuildConfig::default()).unwrap();
        assert_eq!(graph.edge_count(), 4, "5 centerline points → 4 links");
        let c0 = graph.node("corridor-0-centerline-0").unwrap();
        assert!(c0.has_neighbor("corridor-0-centerline-1"));
        assert_eq!(graph.node("corridor-0-boundary-0").unwrap().degree(), 0);
        assert_eq!(graph.node("room-1").unwrap().degree(), 0);
    }

    #[test]
    fn polygon_entry_point_sits_at_centroid() {
        let features = vec![
            IndoorFeature::polygon([p(0.0, 0.0), p(2.0, 0.0), p(2.0, 2.0), p(0.0, 2.0)])
                .with_tag("highway", "steps"),
        ];
        let graph = build_nodes(&classify(&features), &GraphBuildConfig::default()).unwrap();
        let n = graph.node("entry-0").unwrap();
        assert_eq!(n.position, p(1.0, 1.0));
        assert_eq!(n.role.entry_kind(), Some(TransportKind::Stairs));
    }

    #[test]
    fn builds_are_deterministic() {
        let features = unit_square_floor();
        let cfg = GraphBuildConfig::default();
        let a = build_floor_graph(&features, &cfg).unwrap();
        let b = build_floor_graph(&features, &cfg).unwrap();

        assert_eq!(a.len(), b.len());
        for (x, y) in a.nodes().zip(b.nodes()) {
            assert_eq!(x.id, y.id);
            assert_eq!(x.position, y.position);
            let nx: Vec<_> = x.neighbors().collect();
            let ny: Vec<_> = y.neighbors().collect();
            assert_eq!(nx, ny);
        }
    }

    #[test]
    fn non_finite_corridor_builds_without_it() {
        let mut features = unit_square_floor();
        features.push(
            IndoorFeature::polygon([p(20.0, 0.0), p(f64::NAN, 0.0), p(25.0, 5.0)])
                .with_tag("indoor", "corridor"),
        );
        let graph = build_floor_graph(&features, &GraphBuildConfig::default()).unwrap();
        assert!(graph.nodes().all(|n| n.position.is_finite()));
        assert!(!graph.contains("corridor-3-centerline-0"));
        assert!(graph.contains("corridor-0-centerline-0"));
    }

    #[test]
    fn invalid_config_rejected() {
        let cfg = GraphBuildConfig { sampling_stride: 0, ..GraphBuildConfig::default() };
        assert!(build_floor_graph(&unit_square_floor(), &cfg).is_err());
    }
}

// ── Configuration ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod config {
    use crate::config::MAX_CENTERLINE_SAMPLES;
    use crate::{GraphBuildConfig, GraphError};

    #[test]
    fn default_is_valid() {
        GraphBuildConfig::default().validate().unwrap();
        GraphBuildConfig::wgs84().validate().unwrap();
    }

    #[test]
    fn scaling_touches_distances_only() {
        let cfg = GraphBuildConfig::default().scaled(0.5);
        assert_eq!(cfg.corridor_merge_radius, 6.0);
        assert_eq!(cfg.room_max_distance, 7.5);
        assert_eq!(cfg.room_k_default, 2);
        assert_eq!(cfg.centerline_pull, 0.7);
    }

    #[test]
    fn rejects_bad_values() {
        let base = GraphBuildConfig::default();
        let cases = [
            GraphBuildConfig { corridor_tight_radius: 13.0, ..base.clone() },
            GraphBuildConfig { room_max_distance: -1.0, ..base.clone() },
            GraphBuildConfig { entrypoint_max_distance: f64::NAN, ..base.clone() },
            GraphBuildConfig { centerline_samples: MAX_CENTERLINE_SAMPLES + 1, ..base.clone() },
            GraphBuildConfig { centerline_pull: 0.0, ..base.clone() },
        ];
        for cfg in cases {
            assert!(matches!(cfg.validate(), Err(GraphError::InvalidConfig(_))), "{cfg:?}");
        }
    }
}

// ── Connectivity ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod connect {
    use nav_core::IndoorFeature;

    use super::helpers::{corner_floor, corridor, long_corridor, p, rect, room, unit_square_floor};
    use crate::{build_floor_graph, connect, AStar, CorridorPart, Graph, GraphBuildConfig, NodeRole, Pathfinder};

    /// Every node reachable from the first one.
    fn is_connected(g: &Graph) -> bool {
        let Some(first) = g.nodes().next() else { return true };
        g.nodes().all(|n| {
            AStar
                .find_path(g, first.id.as_str(), n.id.as_str())
                .unwrap()
                .is_some()
        })
    }

    /// `true` if every corridor boundary node has an edge to a centerline
    /// node of its own corridor.
    fn boundaries_reach_centerline(g: &Graph) -> bool {
        g.nodes()
            .filter(|n| n.role == NodeRole::Corridor(CorridorPart::Boundary))
            .all(|n| {
                n.neighbors().any(|m| {
                    let m = g.node(m.as_str()).unwrap();
                    m.feature == n.feature && m.role == NodeRole::Corridor(CorridorPart::Centerline)
                })
            })
    }

    #[test]
    fn floors_are_symmetric_connected_and_meshed() {
        let hallway = vec![
            IndoorFeature::polygon(rect(0.0, 0.0, 30.0, 8.0)).with_tag("indoor", "corridor"),
        ];
        for (name, features) in [
            ("square", unit_square_floor()),
            ("corner", corner_floor()),
            ("long", long_corridor()),
            ("hallway", hallway),
        ] {
            let g = build_floor_graph(&features, &GraphBuildConfig::default()).unwrap();
            assert!(g.is_symmetric(), "{name}");
            assert!(is_connected(&g), "{name}");
            assert!(boundaries_reach_centerline(&g), "{name}");
        }
    }

    #[test]
    fn hallway_corners_link_without_anchoring() {
        // 30×8: corner to nearest centerline point is ≈10.87, inside the
        // default merge radius.
        let features = vec![
            IndoorFeature::polygon(rect(0.0, 0.0, 30.0, 8.0)).with_tag("indoor", "corridor"),
        ];
        let g = build_floor_graph(&features, &GraphBuildConfig::default()).unwrap();
        let corner = g.node("corridor-0-boundary-0").unwrap();
        assert!(corner.has_neighbor("corridor-0-boundary-3"));
        assert!(corner.has_neighbor("corridor-0-centerline-0"));
        assert!(corner.has_neighbor("corridor-0-centerline-3"));
    }

    #[test]
    fn long_corridor_corners_are_anchored() {
        let g = build_floor_graph(&long_corridor(), &GraphBuildConfig::default()).unwrap();
        // Corner (0,0) is 35 from centerline point (35,1.4), far past the
        // merge radius; it still gets exactly that one centerline edge.
        let corner = g.node("corridor-0-boundary-0").unwrap();
        assert_eq!(corner.degree(), 2);
        assert!(corner.has_neighbor("corridor-0-boundary-3"));
        assert!(corner.has_neighbor("corridor-0-centerline-0"));
        let far = g.node("corridor-0-boundary-2").unwrap();
        assert!(far.has_neighbor("corridor-0-centerline-2"));
    }

    #[test]
    fn adjacent_corridors_are_bridged() {
        let g = build_floor_graph(&corner_floor(), &GraphBuildConfig::default()).unwrap();
        // Shared corner (30,0): distance 0 across features.
        assert!(g.node("corridor-0-boundary-1").unwrap().has_neighbor("corridor-1-boundary-0"));

        let path = AStar.find_path(&g, "entry-3", "room-2").unwrap().unwrap();
        let visits = |prefix: &str| path.nodes.iter().any(|id| id.as_str().starts_with(prefix));
        assert!(visits("corridor-0-"));
        assert!(visits("corridor-1-"));
    }

    #[test]
    fn anchoring_only_targets_own_corridor() {
        // Corridor f0 is long; corridor f1 sits right next to its west corners.
        let features = vec![
            IndoorFeature::polygon(rect(0.0, 0.0, 100.0, 4.0)).with_tag("indoor", "corridor"),
            IndoorFeature::polygon(rect(-6.0, 0.0, -1.0, 4.0)).with_tag("indoor", "corridor"),
        ];
        let g = build_floor_graph(&features, &GraphBuildConfig::default()).unwrap();
        let corner = g.node("corridor-0-boundary-0").unwrap();
        assert!(corner.has_neighbor("corridor-0-centerline-0"));
        assert!(!corner.neighbors().any(|m| m.as_str().starts_with("corridor-1-centerline")));
    }

    #[test]
    fn scenario_graph_is_symmetric_and_attached() {
        let graph = build_floor_graph(&unit_square_floor(), &GraphBuildConfig::default()).unwrap();
        assert!(graph.is_symmetric());
        assert_eq!(graph.node("room-1").unwrap().degree(), 2);
        assert_eq!(graph.node("entry-2").unwrap().degree(), 5);
    }

    #[test]
    fn corridor_radii() {
        let mut g = Graph::new();
        corridor(&mut g, "a", p(0.0, 0.0), 0);
        corridor(&mut g, "b", p(2.0, 0.0), 1);
        corridor(&mut g, "c", p(6.0, 0.0), 2);
        corridor(&mut g, "d", p(7.0, 0.0), 0);
        connect(&mut g, &GraphBuildConfig::default()).unwrap();

        let linked = |x: &str, y: &str| g.node(x).unwrap().has_neighbor(y);
        assert!(linked("a", "b"), "within tight radius across corridors");
        assert!(!linked("b", "c"), "4 apart, different corridors");
        assert!(!linked("a", "c"), "6 apart, different corridors");
        assert!(linked("a", "d"), "7 apart, same corridor");
        assert!(linked("c", "d"), "within tight radius");
        assert!(!linked("b", "d"), "5 apart, different corridors");
        assert!(g.is_symmetric());
    }

    fn row_with_room(reference: &str, room_at: (f64, f64)) -> Graph {
        let mut g = Graph::new();
        for i in 0..5 {
            // Spread past the merge radius so corridor edges don't matter.
            corridor(&mut g, &format!("c{i}"), p(i as f64 * 20.0, 0.0), i);
        }
        room(&mut g, "r", p(room_at.0, room_at.1), reference);
        g
    }

    #[test]
    fn ordinary_room_gets_k_default() {
        let mut g = row_with_room("101", (10.0, 5.0));
        connect(&mut g, &GraphBuildConfig::default()).unwrap();
        let r = g.node("r").unwrap();
        assert_eq!(r.degree(), 2);
        assert!(r.has_neighbor("c0") && r.has_neighbor("c1"));
    }

    #[test]
    fn priority_room_gets_k_priority_within_distance() {
        let mut g = row_with_room("lobby", (30.0, 0.0));
        let cfg = GraphBuildConfig {
            room_max_distance: 100.0,
            entrypoint_max_distance: 100.0,
            ..GraphBuildConfig::default()
        }
        .with_priority_rooms(["lobby"]);
        connect(&mut g, &cfg).unwrap();
        assert_eq!(g.node("r").unwrap().degree(), 4);
    }

    #[test]
    fn priority_room_out_of_range_is_forced() {
        let mut g = row_with_room("lobby", (40.0, 500.0));
        let cfg = GraphBuildConfig::default().with_priority_rooms(["lobby"]);
        connect(&mut g, &cfg).unwrap();
        let r = g.node("r").unwrap();
        assert_eq!(r.degree(), 1);
        assert!(r.has_neighbor("c2"));
    }

    #[test]
    fn ordinary_room_out_of_range_stays_isolated() {
        let mut g = row_with_room("101", (40.0, 500.0));
        connect(&mut g, &GraphBuildConfig::default()).unwrap();
        assert_eq!(g.node("r").unwrap().degree(), 0);
    }

    #[test]
    fn entry_point_out_of_range_is_forced() {
        use nav_core::{FeatureIdx, NodeId, TransportKind};
        use crate::{GraphNode, NodeRole};

        let mut g = row_with_room("101", (0.0, 5.0));
        g.insert_node(GraphNode::new(
            NodeId::from("lift"),
            p(80.0, 300.0),
            FeatureIdx(7),
            NodeRole::EntryPoint { kind: TransportKind::Elevator },
        ));
        connect(&mut g, &GraphBuildConfig::default()).unwrap();
        let lift = g.node("lift").unwrap();
        assert_eq!(lift.degree(), 1);
        assert!(lift.has_neighbor("c4"));
    }

    #[test]
    fn no_corridors_means_no_edges() {
        let mut g = Graph::new();
        room(&mut g, "r1", p(0.0, 0.0), "lobby");
        room(&mut g, "r2", p(1.0, 0.0), "102");
        let cfg = GraphBuildConfig::default().with_priority_rooms(["lobby"]);
        connect(&mut g, &cfg).unwrap();
        assert_eq!(g.edge_count(), 0);
    }
}

// ── A* search ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod pathfinder {
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    use super::helpers::{corridor, grid_graph, p};
    use crate::{AStar, Graph, GraphError, Pathfinder};

    #[test]
    fn trivial_same_node() {
        let g = grid_graph();
        let path = AStar.find_path(&g, "a", "a").unwrap().unwrap();
        assert!(path.is_trivial());
        assert_eq!(path.nodes, ["a"]);
        assert_eq!(path.length, 0.0);
    }

    #[test]
    fn shortest_path_correct() {
        let g = grid_graph();
        let path = AStar.find_path(&g, "a", "e").unwrap().unwrap();
        assert_eq!(path.nodes, ["a", "b", "c", "e"]);
        let expected = 4.0 + p(4.0, 0.0).distance(p(8.0, 1.0)) + 5.0;
        assert!((path.length - expected).abs() < 1e-9);
    }

    #[test]
    fn no_route_disconnected() {
        let mut g = Graph::new();
        corridor(&mut g, "a", p(0.0, 0.0), 0);
        corridor(&mut g, "b", p(1.0, 0.0), 0);
        corridor(&mut g, "x", p(5.0, 0.0), 1);
        corridor(&mut g, "y", p(6.0, 0.0), 1);
        g.add_edge("a", "b").unwrap();
        g.add_edge("x", "y").unwrap();
        assert!(AStar.find_path(&g, "a", "y").unwrap().is_none());
    }

    #[test]
    fn missing_endpoint_is_an_error() {
        let g = grid_graph();
        assert!(matches!(
            AStar.find_path(&g, "a", "nowhere"),
            Err(GraphError::NodeNotFound(id)) if id == "nowhere"
        ));
        assert!(AStar.find_path(&g, "nowhere", "a").is_err());
    }

    // ── Admissibility: A* agrees with exhaustive Dijkstra ─────────────────

    fn random_graph(seed: u64, n: usize, edge_prob: f64) -> Graph {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut g = Graph::new();
        for i in 0..n {
            let pos = p(rng.gen_range(0.0..100.0), rng.gen_range(0.0..100.0));
            corridor(&mut g, &format!("n{i}"), pos, 0);
        }
        for i in 0..n {
            for j in (i + 1)..n {
                if rng.gen_bool(edge_prob) {
                    g.add_edge(&format!("n{i}"), &format!("n{j}")).unwrap();
                }
            }
        }
        g
    }

    /// O(n²) Dijkstra from `src`, by slot.
    fn brute_force(g: &Graph, src: usize) -> Vec<f64> {
        let n = g.len();
        let mut dist = vec![f64::INFINITY; n];
        let mut done = vec![false; n];
        dist[src] = 0.0;
        loop {
            let next = (0..n)
                .filter(|&v| !done[v] && dist[v].is_finite())
                .min_by(|&a, &b| dist[a].total_cmp(&dist[b]));
            let Some(u) = next else { break };
            done[u] = true;
            let node = g.node_at(u);
            for m in node.neighbors() {
                let v = g.slot_of(m.as_str()).unwrap();
                let d = dist[u] + node.position.distance(g.node_at(v).position);
                if d < dist[v] {
                    dist[v] = d;
                }
            }
        }
        dist
    }

    #[test]
    fn matches_brute_force_on_random_graphs() {
        for seed in 0..20 {
            let g = random_graph(seed, 12, 0.2);
            for s in 0..g.len() {
                let truth = brute_force(&g, s);
                for t in 0..g.len() {
                    let (from, to) = (g.node_at(s).id.as_str(), g.node_at(t).id.as_str());
                    let found = AStar.find_path(&g, from, to).unwrap();
                    match found {
                        Some(path) => {
                            assert!(
                                (path.length - truth[t]).abs() < 1e-9,
                                "seed {seed}: {from}->{to} got {} want {}",
                                path.length,
                                truth[t]
                            );
                            // Heuristic never overestimates.
                            let h = g.node_at(s).position.distance(g.node_at(t).position);
                            assert!(h <= truth[t] + 1e-9);
                        }
                        None => assert!(truth[t].is_infinite(), "seed {seed}: {from}->{to} missed"),
                    }
                }
            }
        }
    }

    #[test]
    fn paths_follow_edges() {
        let g = random_graph(7, 15, 0.3);
        for t in 1..g.len() {
            let to = g.node_at(t).id.as_str();
            if let Some(path) = AStar.find_path(&g, "n0", to).unwrap() {
                assert_eq!(path.nodes.first().unwrap(), "n0");
                assert_eq!(path.nodes.last().unwrap(), to);
                let mut walked = 0.0;
                for w in path.nodes.windows(2) {
                    let a = g.node(w[0].as_str()).unwrap();
                    assert!(a.has_neighbor(w[1].as_str()));
                    walked += a.position.distance(g.node(w[1].as_str()).unwrap().position);
                }
                assert!((walked - path.length).abs() < 1e-9);
            }
        }
    }
}

// ── Projection ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod project {
    use nav_core::NodeId;

    use super::helpers::unit_square_floor;
    use crate::{build_floor_graph, project, AStar, GraphBuildConfig, GraphError, Pathfinder};

    #[test]
    fn scenario_elevator_to_room() {
        let graph = build_floor_graph(&unit_square_floor(), &GraphBuildConfig::default()).unwrap();
        let path = AStar.find_path(&graph, "entry-2", "room-1").unwrap().unwrap();
        assert!(path.nodes.len() >= 3);
        assert_eq!(path.nodes.first().unwrap(), "entry-2");
        assert_eq!(path.nodes.last().unwrap(), "room-1");

        let coords = project(&path.nodes, &graph).unwrap();
        assert_eq!(coords.len(), path.nodes.len());
        for (id, c) in path.nodes.iter().zip(&coords) {
            assert_eq!(graph.node(id.as_str()).unwrap().position, *c);
        }
    }

    #[test]
    fn unknown_id_is_an_error() {
        let graph = build_floor_graph(&unit_square_floor(), &GraphBuildConfig::default()).unwrap();
        let result = project(&[NodeId::from("room-1"), NodeId::from("ghost")], &graph);
        assert!(matches!(result, Err(GraphError::NodeNotFound(_))));
    }

    #[test]
    fn empty_path_projects_to_empty_line() {
        let graph = build_floor_graph(&unit_square_floor(), &GraphBuildConfig::default()).unwrap();
        assert!(project(&[], &graph).unwrap().is_empty());
    }
}
