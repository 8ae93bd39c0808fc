//! Floor graph representation.
//!
//! # Data layout
//!
//! Nodes live in an insertion-ordered map keyed by [`NodeId`].  Insertion
//! order is part of the contract: "the first corridor node" is well defined,
//! iteration is deterministic across builds, and pathfinding can address
//! nodes by their dense slot (`0..len`) instead of hashing strings in its
//! inner loop.
//!
//! Adjacency is stored per node as an insertion-ordered set of neighbour ids.
//! Edges are undirected: [`Graph::add_edge`] always writes both directions,
//! and there is no API for adding a one-sided reference.
//!
//! # Spatial index
//!
//! [`CorridorIndex`] is an R-tree (via `rstar`) over corridor nodes only.  It
//! answers the k-nearest-corridor queries used to attach rooms and entry
//! points.

use indexmap::{IndexMap, IndexSet};
use rstar::{PointDistance, RTree, RTreeObject, AABB};

use nav_core::{FeatureIdx, NodeId, Point2, TransportKind};

use crate::{GraphError, GraphResult};

// ── Node roles ────────────────────────────────────────────────────────────────

/// Where on a corridor polygon a corridor node was sampled.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum CorridorPart {
    /// A vertex of the outer ring.
    Boundary,
    /// An interior point pulled toward the centroid, or the centroid itself.
    Centerline,
}

/// What a node stands for.  Roles are mutually exclusive.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum NodeRole {
    Corridor(CorridorPart),
    Room { reference: String },
    EntryPoint { kind: TransportKind },
}

impl NodeRole {
    #[inline]
    pub fn is_corridor(&self) -> bool {
        matches!(self, NodeRole::Corridor(_))
    }

    /// Room reference for `Room` nodes.
    pub fn room_ref(&self) -> Option<&str> {
        match self {
            NodeRole::Room { reference } => Some(reference),
            _ => None,
        }
    }

    /// Transport kind for `EntryPoint` nodes.
    pub fn entry_kind(&self) -> Option<TransportKind> {
        match self {
            NodeRole::EntryPoint { kind } => Some(*kind),
            _ => None,
        }
    }
}

// ── GraphNode ─────────────────────────────────────────────────────────────────

/// A routable point.
#[derive(Clone, Debug)]
pub struct GraphNode {
    pub id:       NodeId,
    pub position: Point2,
    /// Index of the feature this node was synthesized from.
    pub feature:  FeatureIdx,
    pub role:     NodeRole,
    neighbors:    IndexSet<NodeId>,
}

impl GraphNode {
    pub fn new(id: NodeId, position: Point2, feature: FeatureIdx, role: NodeRole) -> Self {
        Self { id, position, feature, role, neighbors: IndexSet::new() }
    }

    /// Neighbour ids in the order the edges were added.
    pub fn neighbors(&self) -> impl Iterator<Item = &NodeId> + '_ {
        self.neighbors.iter()
    }

    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }

    pub fn has_neighbor(&self, id: &str) -> bool {
        self.neighbors.contains(id)
    }
}

// ── Graph ─────────────────────────────────────────────────────────────────────

/// Undirected floor graph, keyed by node id in insertion order.
///
/// Build with [`build_floor_graph`](crate::build_floor_graph); the lower-level
/// `insert_node` / `add_edge` API is public for tests and custom builders.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    nodes: IndexMap<NodeId, GraphNode>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(GraphNode::degree).sum::<usize>() / 2
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Insert `node`.  Ids are derived from feature index and role, so a
    /// duplicate indicates a builder bug.
    pub fn insert_node(&mut self, node: GraphNode) {
        let previous = self.nodes.insert(node.id.clone(), node);
        debug_assert!(previous.is_none(), "duplicate graph node id");
    }

    /// Link `a` and `b` in both directions.
    ///
    /// Returns `Ok(false)` for self-loops and edges that already exist.
    pub fn add_edge(&mut self, a: &str, b: &str) -> GraphResult<bool> {
        let (ia, ib) = (self.require_slot(a)?, self.require_slot(b)?);
        if ia == ib {
            return Ok(false);
        }
        let id_a = self.nodes[ia].id.clone();
        let id_b = self.nodes[ib].id.clone();
        let added = self.nodes[ia].neighbors.insert(id_b);
        self.nodes[ib].neighbors.insert(id_a);
        Ok(added)
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// All nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &GraphNode> + '_ {
        self.nodes.values()
    }

    /// Dense slot (`0..len`) of `id`.
    pub fn slot_of(&self, id: &str) -> Option<usize> {
        self.nodes.get_index_of(id)
    }

    /// Node at dense slot `slot`.
    ///
    /// # Panics
    /// Panics if `slot >= len()`.
    pub fn node_at(&self, slot: usize) -> &GraphNode {
        &self.nodes[slot]
    }

    /// First corridor node in insertion order.
    pub fn first_corridor(&self) -> Option<&GraphNode> {
        self.nodes().find(|n| n.role.is_corridor())
    }

    /// First room node carrying `reference`.
    pub fn room(&self, reference: &str) -> Option<&GraphNode> {
        self.nodes().find(|n| n.role.room_ref() == Some(reference))
    }

    /// Entry-point nodes, optionally restricted to one transport kind.
    pub fn entry_points(&self, kind: Option<TransportKind>) -> impl Iterator<Item = &GraphNode> + '_ {
        self.nodes().filter(move |n| match n.role.entry_kind() {
            Some(k) => kind.is_none_or(|want| want == k),
            None => false,
        })
    }

    /// `true` if every neighbour reference has a matching back-reference.
    pub fn is_symmetric(&self) -> bool {
        self.nodes().all(|n| {
            n.neighbors().all(|m| {
                self.node(m.as_str()).is_some_and(|other| other.has_neighbor(n.id.as_str()))
            })
        })
    }

    /// Spatial index over the current corridor nodes.
    pub fn corridor_index(&self) -> CorridorIndex {
        let entries = self
            .nodes
            .values()
            .enumerate()
            .filter(|(_, n)| n.role.is_corridor())
            .map(|(slot, n)| CorridorEntry { point: n.position.to_array(), slot })
            .collect();
        CorridorIndex { tree: RTree::bulk_load(entries) }
    }

    fn require_slot(&self, id: &str) -> GraphResult<usize> {
        self.slot_of(id)
            .ok_or_else(|| GraphError::NodeNotFound(NodeId::from(id)))
    }
}

// ── Corridor R-tree ───────────────────────────────────────────────────────────

/// Entry stored in the R-tree: a corridor node's position and graph slot.
#[derive(Clone)]
struct CorridorEntry {
    point: [f64; 2],
    slot:  usize,
}

impl RTreeObject for CorridorEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for CorridorEntry {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

/// Nearest-corridor-node lookups for one graph snapshot.
///
/// Slots refer to the graph the index was built from; rebuild the index
/// after inserting nodes.
pub struct CorridorIndex {
    tree: RTree<CorridorEntry>,
}

impl CorridorIndex {
    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    /// Up to `k` corridor nodes nearest to `pos` as `(slot, distance)`,
    /// sorted by ascending distance.
    pub fn k_nearest(&self, pos: Point2, k: usize) -> Vec<(usize, f64)> {
        self.tree
            .nearest_neighbor_iter_with_distance_2(&pos.to_array())
            .take(k)
            .map(|(e, d2)| (e.slot, d2.sqrt()))
            .collect()
    }

    /// Nearest corridor node to `pos`, or `None` if there are none.
    pub fn nearest(&self, pos: Point2) -> Option<(usize, f64)> {
        self.k_nearest(pos, 1).into_iter().next()
    }
}
