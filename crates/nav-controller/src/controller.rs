//! The navigation state machine.

use nav_core::{FloorId, IndoorFeature, TransportKind};
use nav_graph::{AStar, GraphBuildConfig, Pathfinder};

use crate::planner::{plan_route, PlanOutcome, RouteRequest};
use crate::{ControllerResult, NavState, Route, RouteResult, RouteSink};

/// Features of the floor routes are computed on.
#[derive(Debug, Clone)]
struct FloorData {
    id:       FloorId,
    features: Vec<IndoorFeature>,
}

/// Owns the selection inputs, the last route, and the display gate.
///
/// # Type parameter
///
/// `P` must implement [`Pathfinder`] (default [`AStar`]).  Swap it at compile
/// time for a different search with no runtime overhead.
///
/// # Two kinds of floor
///
/// - [`set_floor`](Self::set_floor) supplies the floor whose features are
///   routed over.  Changing it recomputes the route.
/// - [`view_floor`](Self::view_floor) records which floor is on screen.  It
///   never recomputes or discards anything; it only decides whether
///   [`visible_route`](Self::visible_route) returns the stored route.
pub struct NavigationController<P: Pathfinder = AStar> {
    config:      GraphBuildConfig,
    pathfinder:  P,

    // ── Inputs ────────────────────────────────────────────────────────────
    floor:       Option<FloorData>,
    transport:   TransportKind,
    origin:      Option<String>,
    destination: Option<String>,

    // ── Display gate ──────────────────────────────────────────────────────
    viewed_floor: Option<FloorId>,

    // ── Output ────────────────────────────────────────────────────────────
    state:      NavState,
    route:      Option<Route>,
    generation: u64,
}

impl NavigationController<AStar> {
    /// A* search with [`GraphBuildConfig::default`].
    pub fn new() -> Self {
        Self::from_parts(AStar, GraphBuildConfig::default())
    }
}

impl Default for NavigationController<AStar> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Pathfinder> NavigationController<P> {
    /// Create a controller with a custom search and configuration.
    ///
    /// # Errors
    ///
    /// Fails if `config` does not validate.
    pub fn with_pathfinder(pathfinder: P, config: GraphBuildConfig) -> ControllerResult<Self> {
        config.validate()?;
        Ok(Self::from_parts(pathfinder, config))
    }

    fn from_parts(pathfinder: P, config: GraphBuildConfig) -> Self {
        Self {
            config,
            pathfinder,
            floor:        None,
            transport:    TransportKind::Any,
            origin:       None,
            destination:  None,
            viewed_floor: None,
            state:        NavState::Idle,
            route:        None,
            generation:   0,
        }
    }

    // ── Input setters ─────────────────────────────────────────────────────

    /// Replace the routed floor's features.  Always recomputes.
    pub fn set_floor(&mut self, id: FloorId, features: Vec<IndoorFeature>) -> ControllerResult<NavState> {
        self.floor = Some(FloorData { id, features });
        self.recompute()
    }

    /// Recomputes only if the preference actually changed.
    pub fn set_transport(&mut self, transport: TransportKind) -> ControllerResult<NavState> {
        if self.transport == transport {
            return Ok(self.state);
        }
        self.transport = transport;
        self.recompute()
    }

    /// Recomputes only if the origin actually changed.
    pub fn set_origin(&mut self, origin: Option<String>) -> ControllerResult<NavState> {
        if self.origin == origin {
            return Ok(self.state);
        }
        self.origin = origin;
        self.recompute()
    }

    /// `None` returns to `Idle` and clears the route.
    pub fn set_destination(&mut self, destination: Option<String>) -> ControllerResult<NavState> {
        if self.destination == destination {
            return Ok(self.state);
        }
        self.destination = destination;
        self.recompute()
    }

    /// Record the floor currently on screen.  Display gate only.
    pub fn view_floor(&mut self, floor: FloorId) {
        self.viewed_floor = Some(floor);
    }

    // ── Output ────────────────────────────────────────────────────────────

    pub fn state(&self) -> NavState {
        self.state
    }

    /// Number of recomputations so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn config(&self) -> &GraphBuildConfig {
        &self.config
    }

    /// Last computed route, whichever floor it belongs to.
    pub fn route(&self) -> Option<&Route> {
        self.route.as_ref()
    }

    /// The stored route if it belongs to the floor on screen.
    pub fn visible_route(&self) -> Option<&Route> {
        let viewed = self.viewed_floor.as_ref()?;
        self.route.as_ref().filter(|r| &r.floor == viewed)
    }

    /// Snapshot of [`visible_route`](Self::visible_route) as a `RouteResult`.
    pub fn result(&self) -> RouteResult {
        self.visible_route().cloned().into()
    }

    /// Push the display decision to `sink`.
    pub fn present<S: RouteSink>(&self, sink: &mut S) {
        match self.visible_route() {
            Some(r) => sink.show_route(&r.floor, &r.coordinates),
            None => sink.clear_route(),
        }
    }

    // ── Recomputation ─────────────────────────────────────────────────────

    fn recompute(&mut self) -> ControllerResult<NavState> {
        self.generation += 1;

        let (Some(destination), Some(floor)) = (self.destination.as_deref(), self.floor.as_ref()) else {
            self.route = None;
            self.state = NavState::Idle;
            return Ok(self.state);
        };

        self.state = NavState::Computing;
        let request = RouteRequest {
            origin: self.origin.as_deref(),
            destination,
            transport: self.transport,
        };
        let outcome = plan_route(
            &floor.id,
            &floor.features,
            &request,
            &self.config,
            &self.pathfinder,
            self.generation,
        );

        match outcome {
            Ok(PlanOutcome::Routed(route)) => {
                self.route = Some(route);
                self.state = NavState::Routed;
            }
            Ok(PlanOutcome::Unreachable(reason)) => {
                self.route = None;
                self.state = NavState::Unreachable(reason);
            }
            Err(e) => {
                self.route = None;
                self.state = NavState::Idle;
                return Err(e);
            }
        }
        Ok(self.state)
    }
}
