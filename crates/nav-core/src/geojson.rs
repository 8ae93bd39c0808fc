//! GeoJSON floor loader — enabled with the `geojson` Cargo feature.
//!
//! # Usage
//!
//! ```ignore
//! use std::path::Path;
//! use nav_core::geojson::load_feature_collection;
//!
//! let features = load_feature_collection(Path::new("level_2.geojson"))?;
//! ```
//!
//! # What is loaded
//!
//! | GeoJSON geometry | Result                                             |
//! |------------------|----------------------------------------------------|
//! | `Point`          | `Geometry::Point`                                  |
//! | `Polygon`        | `Geometry::Polygon` (outer ring only)              |
//! | `MultiPolygon`   | `Geometry::Polygon` of the first member's outer ring |
//! | anything else    | skipped                                            |
//!
//! Properties become tags.  String, number, and boolean values are kept;
//! `null`, arrays, and objects are dropped.  Coordinates beyond the first two
//! (altitude) are ignored.  The loader does no floor filtering: the caller
//! passes one floor's collection.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::{Geometry, IndoorFeature, NavError, NavResult, Point2, TagValue};

// ── Raw GeoJSON records ───────────────────────────────────────────────────────

#[derive(Deserialize)]
struct RawCollection {
    features: Vec<RawFeature>,
}

#[derive(Deserialize)]
struct RawFeature {
    geometry:   Option<RawGeometry>,
    #[serde(default)]
    properties: Option<serde_json::Map<String, Value>>,
}

#[derive(Deserialize)]
#[serde(tag = "type")]
enum RawGeometry {
    Point { coordinates: Vec<f64> },
    Polygon { coordinates: Vec<Vec<Vec<f64>>> },
    MultiPolygon { coordinates: Vec<Vec<Vec<Vec<f64>>>> },
    #[serde(other)]
    Unsupported,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a floor's features from a GeoJSON `FeatureCollection` file.
pub fn load_feature_collection(path: &Path) -> NavResult<Vec<IndoorFeature>> {
    let file = std::fs::File::open(path)?;
    read_feature_collection(std::io::BufReader::new(file))
}

/// Like [`load_feature_collection`] but accepts any `Read` source.
pub fn read_feature_collection<R: Read>(reader: R) -> NavResult<Vec<IndoorFeature>> {
    let raw: RawCollection = serde_json::from_reader(reader)?;
    convert(raw)
}

/// Parse a `FeatureCollection` held in memory.
pub fn parse_feature_collection(json: &str) -> NavResult<Vec<IndoorFeature>> {
    let raw: RawCollection = serde_json::from_str(json)?;
    convert(raw)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn convert(raw: RawCollection) -> NavResult<Vec<IndoorFeature>> {
    let mut out = Vec::with_capacity(raw.features.len());
    for (i, f) in raw.features.into_iter().enumerate() {
        let Some(geometry) = f.geometry.map(|g| to_geometry(g, i)).transpose()?.flatten() else {
            continue;
        };
        let tags = f
            .properties
            .unwrap_or_default()
            .into_iter()
            .filter_map(|(k, v)| to_tag(v).map(|t| (k, t)))
            .collect::<BTreeMap<_, _>>();
        out.push(IndoorFeature { geometry, tags });
    }
    Ok(out)
}

fn to_geometry(raw: RawGeometry, feature: usize) -> NavResult<Option<Geometry>> {
    Ok(match raw {
        RawGeometry::Point { coordinates } => Some(Geometry::Point(to_point(&coordinates, feature)?)),
        RawGeometry::Polygon { coordinates } => match coordinates.first() {
            Some(outer) => Some(to_polygon(outer, feature)?),
            None => None,
        },
        RawGeometry::MultiPolygon { coordinates } => {
            match coordinates.first().and_then(|poly| poly.first()) {
                Some(outer) => Some(to_polygon(outer, feature)?),
                None => None,
            }
        }
        RawGeometry::Unsupported => None,
    })
}

fn to_polygon(ring: &[Vec<f64>], feature: usize) -> NavResult<Geometry> {
    let points = ring
        .iter()
        .map(|c| to_point(c, feature))
        .collect::<NavResult<Vec<_>>>()?;
    Ok(Geometry::polygon(points))
}

fn to_point(coords: &[f64], feature: usize) -> NavResult<Point2> {
    match coords {
        [x, y, ..] => Ok(Point2::new(*x, *y)),
        _ => Err(NavError::Parse(format!(
            "feature {feature}: coordinate needs at least 2 values, got {}",
            coords.len()
        ))),
    }
}

fn to_tag(v: Value) -> Option<TagValue> {
    match v {
        Value::String(s) => Some(TagValue::Text(s)),
        Value::Bool(b)   => Some(TagValue::Bool(b)),
        Value::Number(n) => n.as_f64().map(TagValue::Number),
        _ => None,
    }
}
