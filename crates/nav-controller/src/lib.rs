//! `nav-controller` — route orchestration for the indoor-nav engine.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                    |
//! |----------------|-------------------------------------------------------------|
//! | [`controller`] | `NavigationController<P>` — input setters + display gate    |
//! | [`planner`]    | `plan_route`, `RouteRequest`, endpoint resolution           |
//! | [`state`]      | `NavState`, `UnreachableReason`                             |
//! | [`route`]      | `Route`, `RouteResult`, `StartSource`                       |
//! | [`sink`]       | `RouteSink` trait, `NoopSink`                               |
//! | [`error`]      | `ControllerError`, `ControllerResult<T>`                    |
//!
//! # Recomputation model
//!
//! ```text
//! set_floor / set_origin / set_destination / set_transport
//!   └─ destination set and floor loaded?
//!        no  → Idle, route cleared
//!        yes → Computing → build graph → resolve end → resolve start → search
//!                ├─ path found → Routed      (route + its floor stored)
//!                └─ otherwise  → Unreachable (route cleared)
//!
//! view_floor  → display gate only; never recomputes or clears
//! ```
//!
//! Every recomputation is synchronous and starts from a fresh graph.  The
//! only state carried between runs is the last route and the floor it was
//! computed for.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use nav_controller::NavigationController;
//!
//! let mut nav = NavigationController::new();
//! nav.set_floor("L2".into(), features)?;
//! nav.view_floor("L2".into());
//! nav.set_destination(Some("2.104".into()))?;
//! if let Some(route) = nav.visible_route() {
//!     draw(&route.coordinates);
//! }
//! ```

pub mod controller;
pub mod error;
pub mod planner;
pub mod route;
pub mod sink;
pub mod state;


pub use controller::NavigationController;
pub use error::{ControllerError, ControllerResult};
pub use planner::{plan_route, PlanOutcome, RouteRequest};
pub use route::{Route, RouteResult, StartSource};
pub use sink::{NoopSink, RouteSink};
pub use state::{NavState, UnreachableReason};
