//! Planar coordinate type and polygon helpers.
//!
//! The engine works in whatever planar space the floor provider uses: local
//! metres for CAD-derived floors, or raw `(lon, lat)` degrees for GeoJSON.
//! All distances are plain Euclidean distances in that space; distance
//! thresholds in the graph configuration must be expressed in the same unit.

/// A 2-D position.  For GeoJSON input `x` is longitude and `y` latitude.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance.
    #[inline]
    pub fn distance(self, other: Point2) -> f64 {
        self.distance_sq(other).sqrt()
    }

    /// Squared Euclidean distance; cheaper for comparisons.
    #[inline]
    pub fn distance_sq(self, other: Point2) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Point at fraction `t` of the way from `self` to `toward`
    /// (`t = 0` → `self`, `t = 1` → `toward`).
    #[inline]
    pub fn lerp(self, toward: Point2, t: f64) -> Point2 {
        Point2::new(
            self.x + (toward.x - self.x) * t,
            self.y + (toward.y - self.y) * t,
        )
    }

    /// `true` if neither coordinate is NaN or infinite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    #[inline]
    pub fn to_array(self) -> [f64; 2] {
        [self.x, self.y]
    }
}

impl From<[f64; 2]> for Point2 {
    fn from([x, y]: [f64; 2]) -> Self {
        Point2::new(x, y)
    }
}

impl std::fmt::Display for Point2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.x, self.y)
    }
}

// ── Centroids ─────────────────────────────────────────────────────────────────

/// Arithmetic mean of the ring's vertices.
///
/// This is **not** the area centroid: vertex-dense edges pull the result
/// toward them, and for non-convex rings (L- or U-shaped corridors) the point
/// may fall outside the polygon.  Graph construction uses it regardless; use
/// [`area_centroid`] where geometric accuracy matters.
///
/// Returns `None` for an empty ring.
pub fn approximate_centroid(ring: &[Point2]) -> Option<Point2> {
    if ring.is_empty() {
        return None;
    }
    let n = ring.len() as f64;
    let (sx, sy) = ring
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    Some(Point2::new(sx / n, sy / n))
}

/// Area-weighted centroid (shoelace formula) of an open or closed ring.
///
/// Falls back to [`approximate_centroid`] when the ring has zero area
/// (fewer than three vertices, or collinear vertices).
pub fn area_centroid(ring: &[Point2]) -> Option<Point2> {
    if ring.len() < 3 {
        return approximate_centroid(ring);
    }
    let mut twice_area = 0.0;
    let mut cx = 0.0;
    let mut cy = 0.0;
    for (i, a) in ring.iter().enumerate() {
        let b = ring[(i + 1) % ring.len()];
        let cross = a.x * b.y - b.x * a.y;
        twice_area += cross;
        cx += (a.x + b.x) * cross;
        cy += (a.y + b.y) * cross;
    }
    if twice_area.abs() < f64::EPSILON {
        return approximate_centroid(ring);
    }
    let k = 1.0 / (3.0 * twice_area);
    Some(Point2::new(cx * k, cy * k))
}

/// Total length of a polyline.
pub fn polyline_length(points: &[Point2]) -> f64 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}
