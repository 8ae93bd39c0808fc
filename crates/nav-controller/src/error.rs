use nav_graph::GraphError;
use thiserror::Error;

/// Failures that abort a controller call.
///
/// "No route" is not one of them; it is reported through
/// [`NavState::Unreachable`](crate::NavState::Unreachable).
#[derive(Debug, Error)]
pub enum ControllerError {
    #[error("graph error: {0}")]
    Graph(#[from] GraphError),
}

pub type ControllerResult<T> = Result<T, ControllerError>;
