//! Node path → coordinate line string.

use nav_core::{NodeId, Point2};

use crate::{Graph, GraphError, GraphResult};

/// Map each id in `path` to its stored position, preserving order.
///
/// No simplification: the output has exactly one coordinate per node.
pub fn project(path: &[NodeId], graph: &Graph) -> GraphResult<Vec<Point2>> {
    path.iter()
        .map(|id| {
            graph
                .node(id.as_str())
                .map(|n| n.position)
                .ok_or_else(|| GraphError::NodeNotFound(id.clone()))
        })
        .collect()
}
