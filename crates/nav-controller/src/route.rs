//! Computed routes.

use nav_core::{FloorId, NodeId, Point2};

/// Which rule picked the start node.
///
/// Resolution order: origin room, nearest entry point of the preferred
/// transport kind, nearest entry point of any kind, first corridor node.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StartSource {
    Origin,
    PreferredEntry,
    AnyEntry,
    FirstCorridor,
}

/// A found route, ready for an external renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    /// Floor the route was computed for; drives the display gate.
    pub floor:       FloorId,
    /// Node ids from start to destination room.
    pub nodes:       Vec<NodeId>,
    /// Line string, one coordinate per node.
    pub coordinates: Vec<Point2>,
    /// Walking length in floor units.
    pub length:      f64,
    pub start:       StartSource,
    /// Controller generation that produced this route.  Hosts running the
    /// engine off-thread drop results whose generation is stale.
    pub generation:  u64,
}

/// Outcome of one engine invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteResult {
    NoRoute,
    Route(Route),
}

impl RouteResult {
    pub fn route(&self) -> Option<&Route> {
        match self {
            RouteResult::Route(r) => Some(r),
            RouteResult::NoRoute  => None,
        }
    }

    pub fn coordinates(&self) -> Option<&[Point2]> {
        self.route().map(|r| r.coordinates.as_slice())
    }

    pub fn is_route(&self) -> bool {
        matches!(self, RouteResult::Route(_))
    }
}

impl From<Option<Route>> for RouteResult {
    fn from(r: Option<Route>) -> Self {
        r.map_or(RouteResult::NoRoute, RouteResult::Route)
    }
}
