//! Node synthesis.
//!
//! [`build_nodes`] turns a [`ClassifiedFloor`] into graph nodes:
//!
//! | Source          | Nodes                                                    |
//! |-----------------|----------------------------------------------------------|
//! | corridor        | sampled boundary vertices + approximate centerline chain |
//! | room            | one `Room` node at the approximate centroid              |
//! | entry point     | one `EntryPoint` node (centroid or literal position)     |
//!
//! The only edges created here link consecutive centerline points of the
//! same corridor.  Everything crossing feature boundaries is added by
//! [`connect`](crate::connect).
//!
//! Centroids are vertex means ([`approximate_centroid`]), which can fall
//! outside strongly non-convex polygons.

use nav_core::geo::approximate_centroid;
use nav_core::{FeatureIdx, IndoorFeature, NodeId, Point2, TransportKind};

use crate::classify::{ClassifiedFloor, EntryShape};
use crate::{classify, connect, CorridorPart, Graph, GraphBuildConfig, GraphNode, GraphResult, NodeRole};

// ── Public entry points ───────────────────────────────────────────────────────

/// Classify, synthesize nodes, and resolve connectivity in one go.
///
/// # Errors
///
/// [`GraphError::InvalidConfig`](crate::GraphError::InvalidConfig) if
/// `config` fails validation.
pub fn build_floor_graph(features: &[IndoorFeature], config: &GraphBuildConfig) -> GraphResult<Graph> {
    config.validate()?;
    let floor = classify(features);
    let mut graph = build_nodes(&floor, config)?;
    connect(&mut graph, config)?;

    tracing::debug!(
        corridors    = floor.corridors.len(),
        rooms        = floor.rooms.len(),
        entry_points = floor.entry_points.len(),
        nodes        = graph.len(),
        edges        = graph.edge_count(),
        "built floor graph"
    );
    Ok(graph)
}

/// Synthesize all nodes for `floor` plus intra-corridor centerline links.
pub fn build_nodes(floor: &ClassifiedFloor<'_>, config: &GraphBuildConfig) -> GraphResult<Graph> {
    let mut graph = Graph::new();

    // ── Corridors ─────────────────────────────────────────────────────────
    for corridor in &floor.corridors {
        let ring = corridor.ring;
        let feature = corridor.feature;

        for (k, &vi) in boundary_sample_indices(ring.len(), config.sampling_stride, config.min_boundary_nodes)
            .iter()
            .enumerate()
        {
            graph.insert_node(GraphNode::new(
                NodeId::corridor_boundary(feature, k),
                ring[vi],
                feature,
                NodeRole::Corridor(CorridorPart::Boundary),
            ));
        }

        let line = centerline_points(ring, config.centerline_samples, config.centerline_pull);
        let ids: Vec<NodeId> = (0..line.len())
            .map(|k| NodeId::corridor_centerline(feature, k))
            .collect();
        for (id, &pos) in ids.iter().zip(&line) {
            graph.insert_node(GraphNode::new(
                id.clone(),
                pos,
                feature,
                NodeRole::Corridor(CorridorPart::Centerline),
            ));
        }
        for pair in ids.windows(2) {
            graph.add_edge(pair[0].as_str(), pair[1].as_str())?;
        }
    }

    // ── Rooms ─────────────────────────────────────────────────────────────
    for room in &floor.rooms {
        if let Some(center) = approximate_centroid(room.ring) {
            graph.insert_node(GraphNode::new(
                NodeId::room(room.feature),
                center,
                room.feature,
                NodeRole::Room { reference: room.reference.clone() },
            ));
        }
    }

    // ── Entry points ──────────────────────────────────────────────────────
    for entry in &floor.entry_points {
        let pos = match entry.shape {
            EntryShape::At(p) => Some(p),
            EntryShape::Footprint(ring) => approximate_centroid(ring),
        };
        if let Some(pos) = pos {
            graph.insert_node(entry_node(entry.feature, pos, entry.kind));
        }
    }

    Ok(graph)
}

// ── Sampling helpers ──────────────────────────────────────────────────────────

fn entry_node(feature: FeatureIdx, pos: Point2, kind: TransportKind) -> GraphNode {
    GraphNode::new(NodeId::entry_point(feature), pos, feature, NodeRole::EntryPoint { kind })
}

/// Ring vertex indices kept as boundary nodes.
///
/// Starts at every `stride`-th vertex and shrinks the stride until at least
/// `min_nodes` vertices (or all of them) are kept.
pub(crate) fn boundary_sample_indices(ring_len: usize, stride: usize, min_nodes: usize) -> Vec<usize> {
    let target = min_nodes.min(ring_len);
    let mut stride = stride.max(1);
    loop {
        let picked: Vec<usize> = (0..ring_len).step_by(stride).collect();
        if picked.len() >= target || stride == 1 {
            return picked;
        }
        stride -= 1;
    }
}

/// Approximate centerline: for up to `samples` evenly spaced ring vertices,
/// the point `pull` of the way toward the centroid; then the centroid itself.
///
/// Returns an empty vector for an empty ring.
pub(crate) fn centerline_points(ring: &[Point2], samples: usize, pull: f64) -> Vec<Point2> {
    let Some(center) = approximate_centroid(ring) else {
        return Vec::new();
    };
    let samples = samples.min(ring.len());
    let mut out = Vec::with_capacity(samples + 1);
    if samples > 0 {
        let step = ring.len() as f64 / samples as f64;
        for k in 0..samples {
            let vi = (k as f64 * step).floor() as usize;
            out.push(ring[vi].lerp(center, pull));
        }
    }
    out.push(center);
    out
}
