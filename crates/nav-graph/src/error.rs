//! Graph-subsystem error type.

use thiserror::Error;

use nav_core::NodeId;

/// Errors produced by `nav-graph`.
///
/// An unreachable goal is **not** an error: [`Pathfinder::find_path`]
/// returns `Ok(None)` for that case.
///
/// [`Pathfinder::find_path`]: crate::Pathfinder::find_path
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("node {0} not found in graph")]
    NodeNotFound(NodeId),

    #[error("invalid graph build configuration: {0}")]
    InvalidConfig(String),
}

pub type GraphResult<T> = Result<T, GraphError>;
