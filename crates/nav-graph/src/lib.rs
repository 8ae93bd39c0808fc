//! `nav-graph` — walkable floor graph synthesis and pathfinding.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`classify`]   | `classify` — corridors / rooms / entry-point candidates   |
//! | [`builder`]    | `build_nodes`, `build_floor_graph`                        |
//! | [`connect`]    | `connect` — cross-feature edge synthesis                  |
//! | [`graph`]      | `Graph`, `GraphNode`, `NodeRole`, `CorridorIndex`          |
//! | [`config`]     | `GraphBuildConfig`                                        |
//! | [`pathfinder`] | `Pathfinder` trait, `GraphPath`, `AStar`                  |
//! | [`project`]    | `project` — node path → coordinate line string            |
//! | [`error`]      | `GraphError`, `GraphResult<T>`                            |
//!
//! # Pipeline
//!
//! ```text
//! &[IndoorFeature] ─classify→ ClassifiedFloor ─build_nodes→ Graph (nodes +
//!   centerline links) ─connect→ Graph (all edges) ─AStar→ GraphPath ─project→ Vec<Point2>
//! ```
//!
//! Graphs are rebuilt from scratch for every input change and never patched.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `GraphBuildConfig`.     |

pub mod builder;
pub mod classify;
pub mod config;
pub mod connect;
pub mod error;
pub mod graph;
pub mod pathfinder;
pub mod project;

#[cfg(test)]
mod tests;

pub use builder::{build_floor_graph, build_nodes};
pub use classify::{classify, ClassifiedFloor};
pub use config::GraphBuildConfig;
pub use connect::connect;
pub use error::{GraphError, GraphResult};
pub use graph::{CorridorIndex, CorridorPart, Graph, GraphNode, NodeRole};
pub use pathfinder::{AStar, GraphPath, Pathfinder};
pub use project::project;
