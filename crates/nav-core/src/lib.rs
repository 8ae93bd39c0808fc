//! `nav-core` — foundational types for the indoor-nav engine.
//!
//! This crate is a dependency of every other `nav-*` crate.  It intentionally
//! has no `nav-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde` / `serde_json`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `FeatureIdx`, `NodeId`, `FloorId`                     |
//! | [`geo`]         | `Point2`, approximate and area centroids              |
//! | [`feature`]     | `IndoorFeature`, `Geometry`, `TagValue`               |
//! | [`transport`]   | `TransportKind` enum                                  |
//! | [`geojson`]     | FeatureCollection loader (feature = `"geojson"`)      |
//! | [`error`]       | `NavError`, `NavResult`                               |
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                   |
//! |-----------|----------------------------------------------------------|
//! | `serde`   | Adds `Serialize`/`Deserialize` to all public types.      |
//! | `geojson` | Enables [`geojson::parse_feature_collection`].           |

pub mod error;
pub mod feature;
pub mod geo;
pub mod ids;
pub mod transport;

#[cfg(feature = "geojson")]
pub mod geojson;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{NavError, NavResult};
pub use feature::{Geometry, IndoorFeature, TagValue};
pub use geo::Point2;
pub use ids::{FeatureIdx, FloorId, NodeId};
pub use transport::TransportKind;
