//! Raw indoor map features as supplied by the floor provider.
//!
//! A floor is a flat `Vec<IndoorFeature>`: each feature is a point or a
//! polygon plus a bag of OSM-style tags (`indoor=corridor`, `highway=elevator`,
//! `ref=2.104`, …).  The engine only ever reads features; classification into
//! corridors, rooms, and entry points happens in `nav-graph`.

use std::borrow::Cow;
use std::collections::BTreeMap;

use crate::Point2;

// ── Tag values ────────────────────────────────────────────────────────────────

/// A single tag value.  GeoJSON property bags mix strings, numbers, and
/// booleans; predicates compare their textual form.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum TagValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl TagValue {
    /// Textual form: strings as-is, `true`/`false`, numbers in shortest form
    /// (`12.0` → `"12"`).
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            TagValue::Text(s)   => Cow::Borrowed(s),
            TagValue::Bool(b)   => Cow::Borrowed(if *b { "true" } else { "false" }),
            TagValue::Number(n) => Cow::Owned(n.to_string()),
        }
    }
}

impl From<&str> for TagValue {
    fn from(s: &str) -> Self {
        TagValue::Text(s.to_owned())
    }
}

impl From<String> for TagValue {
    fn from(s: String) -> Self {
        TagValue::Text(s)
    }
}

impl From<f64> for TagValue {
    fn from(n: f64) -> Self {
        TagValue::Number(n)
    }
}

impl From<bool> for TagValue {
    fn from(b: bool) -> Self {
        TagValue::Bool(b)
    }
}

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Feature geometry.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Geometry {
    Point(Point2),
    /// Outer ring, stored **open**: the closing duplicate of the first vertex
    /// is removed by [`Geometry::polygon`].
    Polygon(Vec<Point2>),
}

impl Geometry {
    /// Build a polygon from a ring that may or may not repeat its first
    /// vertex at the end.
    pub fn polygon(ring: impl IntoIterator<Item = Point2>) -> Self {
        let mut ring: Vec<Point2> = ring.into_iter().collect();
        if ring.len() > 1 && ring.first() == ring.last() {
            ring.pop();
        }
        Geometry::Polygon(ring)
    }

    /// Open outer ring for polygons, `None` for points.
    pub fn ring(&self) -> Option<&[Point2]> {
        match self {
            Geometry::Polygon(ring) => Some(ring),
            Geometry::Point(_)      => None,
        }
    }

    pub fn is_polygon(&self) -> bool {
        matches!(self, Geometry::Polygon(_))
    }
}

// ── IndoorFeature ─────────────────────────────────────────────────────────────

/// One geometric object on a floor.
///
/// # Example
///
/// ```
/// use nav_core::{IndoorFeature, Point2};
///
/// let hall = IndoorFeature::polygon([
///     Point2::new(0.0, 0.0),
///     Point2::new(10.0, 0.0),
///     Point2::new(10.0, 10.0),
///     Point2::new(0.0, 10.0),
///     Point2::new(0.0, 0.0),
/// ])
/// .with_tag("indoor", "corridor");
///
/// assert!(hall.tag_is("indoor", "corridor"));
/// assert_eq!(hall.geometry.ring().unwrap().len(), 4); // closing vertex dropped
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndoorFeature {
    pub geometry: Geometry,
    pub tags:     BTreeMap<String, TagValue>,
}

impl IndoorFeature {
    pub fn new(geometry: Geometry) -> Self {
        Self { geometry, tags: BTreeMap::new() }
    }

    pub fn point(p: Point2) -> Self {
        Self::new(Geometry::Point(p))
    }

    pub fn polygon(ring: impl IntoIterator<Item = Point2>) -> Self {
        Self::new(Geometry::polygon(ring))
    }

    /// Builder-style tag insertion.
    pub fn with_tag(mut self, key: &str, value: impl Into<TagValue>) -> Self {
        self.tags.insert(key.to_owned(), value.into());
        self
    }

    /// Textual value of tag `key`, if present.
    pub fn tag(&self, key: &str) -> Option<Cow<'_, str>> {
        self.tags.get(key).map(TagValue::as_text)
    }

    /// `true` if tag `key` is present and its textual form equals `value`.
    pub fn tag_is(&self, key: &str, value: &str) -> bool {
        self.tag(key).is_some_and(|v| v == value)
    }
}
