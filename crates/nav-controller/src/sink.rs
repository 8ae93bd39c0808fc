//! Render-sink trait for handing routes to whatever draws them.

use nav_core::{FloorId, Point2};

/// Receives the display decision from
/// [`NavigationController::present`][crate::NavigationController::present].
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — console renderer
///
/// ```rust,ignore
/// struct Console;
///
/// impl RouteSink for Console {
///     fn show_route(&mut self, floor: &FloorId, line: &[Point2]) {
///         println!("{floor}: {} points", line.len());
///     }
/// }
/// ```
pub trait RouteSink {
    /// A route exists and belongs to the floor currently on screen.
    fn show_route(&mut self, _floor: &FloorId, _line: &[Point2]) {}

    /// Nothing to draw on the current floor.
    fn clear_route(&mut self) {}
}

/// A [`RouteSink`] that does nothing.
pub struct NoopSink;

impl RouteSink for NoopSink {}
