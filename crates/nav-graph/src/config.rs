//! Graph construction parameters.
//!
//! Every distance is in the floor's coordinate unit (see [`nav_core::geo`]).
//! [`GraphBuildConfig::default`] is calibrated for planar metres;
//! [`GraphBuildConfig::wgs84`] rescales the same values to degrees for floors
//! loaded straight from GeoJSON.

use crate::{GraphError, GraphResult};

/// Upper bound on centerline samples per corridor.
pub const MAX_CENTERLINE_SAMPLES: usize = 6;

/// Approximate metres per degree of latitude.
const METRES_PER_DEGREE: f64 = 111_320.0;

/// Tunable constants for node synthesis and edge resolution.
///
/// Typically loaded from a JSON file by the host application and passed to
/// the controller.  Recalibrate per building rather than editing code.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GraphBuildConfig {
    /// Corridor node pairs closer than this are edge candidates.  Default: 12.
    pub corridor_merge_radius: f64,

    /// Candidate pairs closer than this are always linked, even across
    /// corridors; pairs within the same corridor only need the merge radius.
    /// Default: 3.
    pub corridor_tight_radius: f64,

    /// Corridor neighbours tried per ordinary room.  Default: 2.
    pub room_k_default: usize,

    /// Corridor neighbours tried per allowlisted room.  Default: 4.
    pub room_k_priority: usize,

    /// Room-to-corridor edges longer than this are dropped.  Default: 15.
    pub room_max_distance: f64,

    /// Corridor neighbours tried per entry point.  Default: 5.
    pub entrypoint_k: usize,

    /// Entry-point-to-corridor edges longer than this are dropped.
    /// Default: 20.
    pub entrypoint_max_distance: f64,

    /// Room references that get `room_k_priority` neighbours and a forced
    /// edge when the distance filter leaves them isolated.
    pub priority_room_refs: Vec<String>,

    /// Keep every n-th boundary vertex of a corridor ring.  Default: 3.
    pub sampling_stride: usize,

    /// Lower bound on boundary samples per corridor; the stride shrinks
    /// until it is met (or every vertex is kept).  Default: 3.
    pub min_boundary_nodes: usize,

    /// Boundary vertices used to derive centerline points, at most
    /// [`MAX_CENTERLINE_SAMPLES`].  Default: 6.
    pub centerline_samples: usize,

    /// Fraction of the way from a boundary vertex toward the corridor
    /// centroid at which its centerline point sits.  Default: 0.7.
    pub centerline_pull: f64,
}

impl Default for GraphBuildConfig {
    fn default() -> Self {
        Self {
            corridor_merge_radius:   12.0,
            corridor_tight_radius:   3.0,
            room_k_default:          2,
            room_k_priority:         4,
            room_max_distance:       15.0,
            entrypoint_k:            5,
            entrypoint_max_distance: 20.0,
            priority_room_refs:      Vec::new(),
            sampling_stride:         3,
            min_boundary_nodes:      3,
            centerline_samples:      MAX_CENTERLINE_SAMPLES,
            centerline_pull:         0.7,
        }
    }
}

impl GraphBuildConfig {
    /// Defaults expressed in WGS-84 degrees instead of metres.
    pub fn wgs84() -> Self {
        Self::default().scaled(1.0 / METRES_PER_DEGREE)
    }

    /// Multiply every distance threshold by `factor`.  Counts and fractions
    /// are unchanged.
    pub fn scaled(mut self, factor: f64) -> Self {
        self.corridor_merge_radius   *= factor;
        self.corridor_tight_radius   *= factor;
        self.room_max_distance       *= factor;
        self.entrypoint_max_distance *= factor;
        self
    }

    /// Builder-style allowlist replacement.
    pub fn with_priority_rooms<I, S>(mut self, refs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.priority_room_refs = refs.into_iter().map(Into::into).collect();
        self
    }

    /// Reject values that would make graph construction meaningless.
    pub fn validate(&self) -> GraphResult<()> {
        let positive = [
            ("corridor_merge_radius", self.corridor_merge_radius),
            ("corridor_tight_radius", self.corridor_tight_radius),
            ("room_max_distance", self.room_max_distance),
            ("entrypoint_max_distance", self.entrypoint_max_distance),
        ];
        for (name, v) in positive {
            if !(v.is_finite() && v > 0.0) {
                return Err(invalid(format!("{name} must be a positive finite distance, got {v}")));
            }
        }
        if self.corridor_tight_radius > self.corridor_merge_radius {
            return Err(invalid(format!(
                "corridor_tight_radius ({}) exceeds corridor_merge_radius ({})",
                self.corridor_tight_radius, self.corridor_merge_radius
            )));
        }
        if self.sampling_stride == 0 {
            return Err(invalid("sampling_stride must be at least 1".into()));
        }
        if self.centerline_samples > MAX_CENTERLINE_SAMPLES {
            return Err(invalid(format!(
                "centerline_samples must be at most {MAX_CENTERLINE_SAMPLES}, got {}",
                self.centerline_samples
            )));
        }
        if !(self.centerline_pull > 0.0 && self.centerline_pull <= 1.0) {
            return Err(invalid(format!(
                "centerline_pull must be in (0, 1], got {}",
                self.centerline_pull
            )));
        }
        Ok(())
    }
}

fn invalid(msg: String) -> GraphError {
    GraphError::InvalidConfig(msg)
}
