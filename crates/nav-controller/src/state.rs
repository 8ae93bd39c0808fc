//! Controller state.

/// Why the last computation produced no route.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum UnreachableReason {
    /// No `Room` node carries the destination reference on this floor.
    DestinationNotFound,
    /// The graph has no origin room, entry point, or corridor node to start from.
    NoStartNode,
    /// Search exhausted the reachable component without meeting the goal.
    NoPath,
}

/// Where the controller is in its route lifecycle.
///
/// `Computing` only exists for the duration of a synchronous recomputation;
/// callers observe `Idle`, `Routed`, or `Unreachable`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum NavState {
    /// No destination, or no floor data yet.
    #[default]
    Idle,
    Computing,
    Routed,
    Unreachable(UnreachableReason),
}

impl NavState {
    pub fn is_routed(self) -> bool {
        matches!(self, NavState::Routed)
    }
}
