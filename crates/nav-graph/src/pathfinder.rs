//! Pathfinding trait and default A* implementation.
//!
//! # Pluggability
//!
//! The controller calls pathfinding via the [`Pathfinder`] trait, so hosts can
//! swap in another search (e.g. a cost model that penalises stairs) without
//! touching graph construction.  The default [`AStar`] minimises Euclidean
//! walking distance.
//!
//! # Outcomes
//!
//! | Situation                         | Result                        |
//! |-----------------------------------|-------------------------------|
//! | goal reached                      | `Ok(Some(path))`              |
//! | `start == end`                    | `Ok(Some(single-node path))`  |
//! | frontier exhausted                | `Ok(None)` — unreachable      |
//! | `start` or `end` not in the graph | `Err(GraphError::NodeNotFound)` |

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use nav_core::NodeId;

use crate::{Graph, GraphError, GraphResult};

// ── GraphPath ─────────────────────────────────────────────────────────────────

/// An ordered node sequence from start to goal plus its walking length.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphPath {
    /// Node ids in travel order; first is the start, last the goal.
    pub nodes:  Vec<NodeId>,
    /// Sum of Euclidean edge lengths along `nodes`.
    pub length: f64,
}

impl GraphPath {
    /// `true` if start and goal are the same node.
    pub fn is_trivial(&self) -> bool {
        self.nodes.len() <= 1
    }
}

// ── Pathfinder trait ──────────────────────────────────────────────────────────

/// Pluggable search over a [`Graph`].
pub trait Pathfinder {
    /// Shortest path from `start` to `end`, `Ok(None)` if unreachable.
    ///
    /// # Errors
    ///
    /// [`GraphError::NodeNotFound`] if either endpoint is absent.  That is a
    /// caller bug, distinct from an unreachable goal.
    fn find_path(&self, graph: &Graph, start: &str, end: &str) -> GraphResult<Option<GraphPath>>;
}

// ── AStar ─────────────────────────────────────────────────────────────────────

/// Classic A* with a straight-line-distance heuristic.
///
/// Edge cost is the Euclidean distance between neighbours, so the heuristic
/// is admissible and consistent and the first time the goal leaves the
/// frontier its path is shortest.  Frontier ties on `f` are broken by
/// insertion order only.
#[derive(Copy, Clone, Debug, Default)]
pub struct AStar;

impl Pathfinder for AStar {
    fn find_path(&self, graph: &Graph, start: &str, end: &str) -> GraphResult<Option<GraphPath>> {
        astar(graph, start, end)
    }
}

// ── A* internals ──────────────────────────────────────────────────────────────

/// Frontier entry.  Ordered so that `BinaryHeap` (a max-heap) pops the lowest
/// `f` first and, among equal `f`, the earliest pushed.
struct Open {
    f:    f64,
    seq:  u64,
    slot: usize,
}

impl PartialEq for Open {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Open {}

impl PartialOrd for Open {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Open {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

fn astar(graph: &Graph, start: &str, end: &str) -> GraphResult<Option<GraphPath>> {
    let from = graph
        .slot_of(start)
        .ok_or_else(|| GraphError::NodeNotFound(NodeId::from(start)))?;
    let to = graph
        .slot_of(end)
        .ok_or_else(|| GraphError::NodeNotFound(NodeId::from(end)))?;

    if from == to {
        return Ok(Some(GraphPath { nodes: vec![graph.node_at(from).id.clone()], length: 0.0 }));
    }

    let n = graph.len();
    let goal_pos = graph.node_at(to).position;
    let heuristic = |slot: usize| graph.node_at(slot).position.distance(goal_pos);

    // g[v] = best known cost from start; came_from[v] = predecessor slot.
    let mut g         = vec![f64::INFINITY; n];
    let mut came_from = vec![usize::MAX; n];
    let mut closed    = vec![false; n];

    let mut seq = 0u64;
    let mut frontier = BinaryHeap::new();
    g[from] = 0.0;
    frontier.push(Open { f: heuristic(from), seq, slot: from });

    while let Some(Open { slot: current, .. }) = frontier.pop() {
        if current == to {
            return Ok(Some(reconstruct(graph, &came_from, from, to, g[to])));
        }
        // Stale duplicate of an already expanded node.
        if closed[current] {
            continue;
        }
        closed[current] = true;

        let node = graph.node_at(current);
        for neighbor in node.neighbors() {
            let Some(next) = graph.slot_of(neighbor.as_str()) else {
                continue;
            };
            if closed[next] {
                continue;
            }
            let tentative = g[current] + node.position.distance(graph.node_at(next).position);
            if tentative < g[next] {
                came_from[next] = current;
                g[next] = tentative;
                seq += 1;
                frontier.push(Open { f: tentative + heuristic(next), seq, slot: next });
            }
        }
    }

    Ok(None)
}

fn reconstruct(graph: &Graph, came_from: &[usize], from: usize, to: usize, length: f64) -> GraphPath {
    let mut nodes = vec![graph.node_at(to).id.clone()];
    let mut cur = to;
    while cur != from {
        cur = came_from[cur];
        nodes.push(graph.node_at(cur).id.clone());
    }
    nodes.reverse();
    GraphPath { nodes, length }
}
