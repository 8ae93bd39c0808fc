//! One full routing pass as a pure function.
//!
//! [`plan_route`] is what the controller runs on every input change.  It is
//! public so hosts that manage their own state (or run the engine on a worker
//! thread) can call it directly.

use nav_core::{FloorId, IndoorFeature, TransportKind};
use nav_graph::{build_floor_graph, project, Graph, GraphBuildConfig, GraphNode, Pathfinder};

use crate::{ControllerResult, Route, StartSource, UnreachableReason};

/// Selection inputs for one routing pass.
#[derive(Copy, Clone, Debug)]
pub struct RouteRequest<'a> {
    /// Room the user starts from, if known.
    pub origin:      Option<&'a str>,
    /// Room reference to route to.
    pub destination: &'a str,
    /// Biases which entry point is used when there is no origin.
    pub transport:   TransportKind,
}

/// Result of [`plan_route`].
#[derive(Debug, Clone, PartialEq)]
pub enum PlanOutcome {
    Routed(Route),
    Unreachable(UnreachableReason),
}

/// Build the floor graph from scratch and route `request` across it.
///
/// `generation` is copied into the returned [`Route`].
///
/// # Errors
///
/// Only configuration and internal graph errors.  An unknown destination or
/// a disconnected graph is reported as [`PlanOutcome::Unreachable`].
pub fn plan_route<P: Pathfinder>(
    floor:      &FloorId,
    features:   &[IndoorFeature],
    request:    &RouteRequest<'_>,
    config:     &GraphBuildConfig,
    pathfinder: &P,
    generation: u64,
) -> ControllerResult<PlanOutcome> {
    let graph = build_floor_graph(features, config)?;

    let Some(end) = resolve_end(&graph, request.destination) else {
        tracing::warn!(%floor, destination = request.destination, "destination room not on this floor");
        return Ok(PlanOutcome::Unreachable(UnreachableReason::DestinationNotFound));
    };
    let Some((start, source)) = resolve_start(&graph, request, end) else {
        tracing::warn!(%floor, "no origin, entry point, or corridor node to start from");
        return Ok(PlanOutcome::Unreachable(UnreachableReason::NoStartNode));
    };
    tracing::debug!(start = %start.id, end = %end.id, ?source, "resolved route endpoints");

    let Some(path) = pathfinder.find_path(&graph, start.id.as_str(), end.id.as_str())? else {
        tracing::info!(%floor, start = %start.id, end = %end.id, "no path between endpoints");
        return Ok(PlanOutcome::Unreachable(UnreachableReason::NoPath));
    };

    let coordinates = project(&path.nodes, &graph)?;
    tracing::info!(%floor, nodes = path.nodes.len(), length = path.length, "route found");

    Ok(PlanOutcome::Routed(Route {
        floor: floor.clone(),
        nodes: path.nodes,
        coordinates,
        length: path.length,
        start: source,
        generation,
    }))
}

/// The `Room` node matching `destination`.
pub fn resolve_end<'g>(graph: &'g Graph, destination: &str) -> Option<&'g GraphNode> {
    graph.room(destination)
}

/// Pick the start node.
///
/// 1. the origin room, when an origin is given and present on this floor;
/// 2. the entry point of the preferred kind nearest to `end`;
/// 3. the entry point of any kind nearest to `end`;
/// 4. the first corridor node.
///
/// A preference of [`TransportKind::Any`] skips step 2.  Distance ties go to
/// the node inserted first.
pub fn resolve_start<'g>(
    graph:   &'g Graph,
    request: &RouteRequest<'_>,
    end:     &GraphNode,
) -> Option<(&'g GraphNode, StartSource)> {
    if let Some(origin) = request.origin.and_then(|o| graph.room(o)) {
        return Some((origin, StartSource::Origin));
    }

    let nearest = |kind: Option<TransportKind>| {
        graph
            .entry_points(kind)
            .min_by(|a, b| {
                a.position
                    .distance(end.position)
                    .total_cmp(&b.position.distance(end.position))
            })
    };

    if request.transport != TransportKind::Any {
        if let Some(n) = nearest(Some(request.transport)) {
            return Some((n, StartSource::PreferredEntry));
        }
    }
    if let Some(n) = nearest(None) {
        return Some((n, StartSource::AnyEntry));
    }
    graph.first_corridor().map(|n| (n, StartSource::FirstCorridor))
}
