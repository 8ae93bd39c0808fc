//! Cross-feature edge synthesis.
//!
//! Runs after [`build_nodes`](crate::build_nodes) and adds, in order:
//!
//! 1. **Corridor ↔ corridor** — every pair within `corridor_merge_radius` is
//!    linked if it is closer than `corridor_tight_radius` or both nodes come
//!    from the same corridor polygon.  Dense mesh inside a corridor, sparse
//!    bridges between neighbouring ones.  O(n²) over corridor nodes.
//!    A boundary node left without an edge into its own corridor's
//!    centerline is then linked to the nearest centerline node of that
//!    corridor, so long corridors never strand their corners.
//! 2. **Room → corridor** — the `k` nearest corridor nodes within
//!    `room_max_distance` (`k = room_k_priority` for allowlisted rooms).
//!    An allowlisted room left without edges is forced onto its nearest
//!    corridor node.
//! 3. **Entry point → corridor** — the `entrypoint_k` nearest corridor nodes
//!    within `entrypoint_max_distance`, forced onto the nearest if none
//!    qualify.
//!
//! Straight-line attachment does not test for wall crossings: a room's
//! nearest corridor node may sit on the far side of a wall.  Adding that
//! check would change which routes are produced, so it is left out.
//!
//! A floor without corridor nodes gets no room or entry-point edges at all.

use rustc_hash::FxHashSet;

use nav_core::{FeatureIdx, NodeId, Point2};

use crate::{CorridorIndex, CorridorPart, Graph, GraphBuildConfig, GraphResult, NodeRole};

/// Add all cross-feature edges to `graph`.
pub fn connect(graph: &mut Graph, config: &GraphBuildConfig) -> GraphResult<()> {
    link_corridors(graph, config)?;

    let index = graph.corridor_index();
    if index.is_empty() {
        tracing::debug!("no corridor nodes; rooms and entry points stay unattached");
        return Ok(());
    }

    let priority: FxHashSet<&str> = config
        .priority_room_refs
        .iter()
        .map(String::as_str)
        .collect();

    // Snapshot attachment targets first; `graph` is mutated below.
    let rooms: Vec<(NodeId, Point2, bool)> = graph
        .nodes()
        .filter_map(|n| {
            n.role
                .room_ref()
                .map(|r| (n.id.clone(), n.position, priority.contains(r)))
        })
        .collect();
    let entries: Vec<(NodeId, Point2)> = graph
        .entry_points(None)
        .map(|n| (n.id.clone(), n.position))
        .collect();

    for (id, pos, is_priority) in rooms {
        let k = if is_priority { config.room_k_priority } else { config.room_k_default };
        let linked = attach(graph, &index, &id, pos, k, config.room_max_distance, is_priority)?;
        if linked == 0 {
            tracing::debug!(room = %id, "room has no corridor within reach");
        }
    }

    for (id, pos) in entries {
        attach(graph, &index, &id, pos, config.entrypoint_k, config.entrypoint_max_distance, true)?;
    }

    Ok(())
}

fn link_corridors(graph: &mut Graph, config: &GraphBuildConfig) -> GraphResult<()> {
    let corridor: Vec<CorridorSample> = graph
        .nodes()
        .filter_map(|n| match n.role {
            NodeRole::Corridor(part) => Some(CorridorSample {
                id:       n.id.clone(),
                pos:      n.position,
                feature:  n.feature,
                boundary: part == CorridorPart::Boundary,
            }),
            _ => None,
        })
        .collect();

    // Whether a node already has an edge to a centerline node of its own corridor.
    let mut anchored = vec![false; corridor.len()];

    for (i, a) in corridor.iter().enumerate() {
        for (j, b) in corridor.iter().enumerate().skip(i + 1) {
            let d = a.pos.distance(b.pos);
            let same = a.feature == b.feature;
            if d < config.corridor_merge_radius && (d < config.corridor_tight_radius || same) {
                graph.add_edge(a.id.as_str(), b.id.as_str())?;
                if same {
                    anchored[i] |= !b.boundary;
                    anchored[j] |= !a.boundary;
                }
            }
        }
    }

    for (a, &done) in corridor.iter().zip(&anchored) {
        if !a.boundary || done {
            continue;
        }
        let nearest = corridor
            .iter()
            .filter(|c| !c.boundary && c.feature == a.feature)
            .min_by(|x, y| a.pos.distance(x.pos).total_cmp(&a.pos.distance(y.pos)));
        if let Some(c) = nearest {
            tracing::debug!(
                node = %a.id,
                target = %c.id,
                distance = a.pos.distance(c.pos),
                "anchoring corridor boundary to centerline"
            );
            graph.add_edge(a.id.as_str(), c.id.as_str())?;
        }
    }
    Ok(())
}

struct CorridorSample {
    id:       NodeId,
    pos:      Point2,
    feature:  FeatureIdx,
    boundary: bool,
}

/// Link `id` to up to `k` nearest corridor nodes no further than `max_dist`.
/// With `force` set and nothing in range, link the single nearest one.
/// Returns the number of edges added.
fn attach(
    graph:    &mut Graph,
    index:    &CorridorIndex,
    id:       &NodeId,
    pos:      Point2,
    k:        usize,
    max_dist: f64,
    force:    bool,
) -> GraphResult<usize> {
    let targets: Vec<NodeId> = index
        .k_nearest(pos, k)
        .into_iter()
        .filter(|&(_, d)| d <= max_dist)
        .map(|(slot, _)| graph.node_at(slot).id.clone())
        .collect();

    let mut linked = 0;
    for t in &targets {
        if graph.add_edge(id.as_str(), t.as_str())? {
            linked += 1;
        }
    }

    if linked == 0 && force {
        if let Some((slot, d)) = index.nearest(pos) {
            let nearest = graph.node_at(slot).id.clone();
            tracing::debug!(node = %id, target = %nearest, distance = d, "forcing connectivity edge");
            if graph.add_edge(id.as_str(), nearest.as_str())? {
                linked = 1;
            }
        }
    }
    Ok(linked)
}
