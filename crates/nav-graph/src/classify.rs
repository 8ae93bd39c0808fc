//! Tag-based partition of a floor's features.
//!
//! | View          | Geometry | Predicate                                            |
//! |---------------|----------|------------------------------------------------------|
//! | corridor      | polygon  | `indoor=corridor`                                    |
//! | room          | polygon  | `indoor=room`                                        |
//! | entry point   | polygon  | `highway=elevator`, `highway=steps`, `escalators=yes` |
//! | entry point   | point    | `highway=elevator`, `entrance=yes`                   |
//!
//! The first matching row wins, so the three views are disjoint.  Features
//! matching nothing (walls, doors, labels) are ignored.

use nav_core::{FeatureIdx, Geometry, IndoorFeature, Point2, TransportKind};

/// A corridor polygon.
#[derive(Clone, Debug)]
pub struct CorridorFeature<'a> {
    pub feature: FeatureIdx,
    pub ring:    &'a [Point2],
}

/// A room polygon with its human-facing reference.
#[derive(Clone, Debug)]
pub struct RoomFeature<'a> {
    pub feature:   FeatureIdx,
    pub ring:      &'a [Point2],
    pub reference: String,
}

/// Where an entry point sits: a polygon footprint or a single point.
#[derive(Clone, Debug)]
pub enum EntryShape<'a> {
    Footprint(&'a [Point2]),
    At(Point2),
}

/// A vertical-transport access location or unclassified entrance.
#[derive(Clone, Debug)]
pub struct EntryCandidate<'a> {
    pub feature: FeatureIdx,
    pub shape:   EntryShape<'a>,
    pub kind:    TransportKind,
}

/// Disjoint views over one floor's features, borrowing their geometry.
#[derive(Clone, Debug, Default)]
pub struct ClassifiedFloor<'a> {
    pub corridors:    Vec<CorridorFeature<'a>>,
    pub rooms:        Vec<RoomFeature<'a>>,
    pub entry_points: Vec<EntryCandidate<'a>>,
}

/// Partition `features`.  Pure and O(n).
///
/// Polygons with an empty ring are skipped: they have no centroid and would
/// only yield unplaceable nodes.  Geometry with NaN or infinite coordinates
/// is skipped too.  Feature indices are `u32`; features past that range are
/// ignored.
pub fn classify(features: &[IndoorFeature]) -> ClassifiedFloor<'_> {
    let mut out = ClassifiedFloor::default();

    for (i, f) in features.iter().enumerate() {
        let Ok(feature) = FeatureIdx::try_from(i) else {
            tracing::warn!(ignored = features.len() - i, "feature index exceeds u32 range");
            break;
        };
        match &f.geometry {
            Geometry::Polygon(ring) if ring.is_empty() => {
                tracing::debug!(feature = i, "skipping polygon with empty ring");
            }
            Geometry::Polygon(ring) if !ring.iter().all(|p| p.is_finite()) => {
                tracing::debug!(feature = i, "skipping polygon with non-finite coordinates");
            }
            Geometry::Point(p) if !p.is_finite() => {
                tracing::debug!(feature = i, "skipping point with non-finite coordinates");
            }
            Geometry::Polygon(ring) => {
                if f.tag_is("indoor", "corridor") {
                    out.corridors.push(CorridorFeature { feature, ring });
                } else if f.tag_is("indoor", "room") {
                    let reference = f
                        .tag("ref")
                        .map(|r| r.into_owned())
                        .unwrap_or_else(|| format!("room-{feature}"));
                    out.rooms.push(RoomFeature { feature, ring, reference });
                } else if let Some(kind) = polygon_entry_kind(f) {
                    out.entry_points.push(EntryCandidate {
                        feature,
                        shape: EntryShape::Footprint(ring),
                        kind,
                    });
                }
            }
            Geometry::Point(p) => {
                if let Some(kind) = point_entry_kind(f) {
                    out.entry_points.push(EntryCandidate {
                        feature,
                        shape: EntryShape::At(*p),
                        kind,
                    });
                }
            }
        }
    }

    out
}

fn polygon_entry_kind(f: &IndoorFeature) -> Option<TransportKind> {
    if f.tag_is("highway", "elevator") {
        Some(TransportKind::Elevator)
    } else if f.tag_is("highway", "steps") {
        Some(TransportKind::Stairs)
    } else if f.tag_is("escalators", "yes") {
        Some(TransportKind::Escalator)
    } else {
        None
    }
}

fn point_entry_kind(f: &IndoorFeature) -> Option<TransportKind> {
    if f.tag_is("highway", "elevator") {
        return Some(TransportKind::Elevator);
    }
    if !f.tag_is("entrance", "yes") {
        return None;
    }
    // Entrances are refined by secondary tags.
    Some(if f.tag_is("escalators", "yes") {
        TransportKind::Escalator
    } else if f.tag_is("highway", "steps") || f.tag_is("stairs", "yes") {
        TransportKind::Stairs
    } else {
        TransportKind::Any
    })
}
