//! Embedded sample floor.
//!
//! A 30×8 m hallway with a short side corridor, three rooms, stairs at the
//! west end and an elevator at the east end.  Planar metres, so the default
//! [`GraphBuildConfig`](nav_graph::GraphBuildConfig) applies unscaled.
//!
//! ```text
//!        ┌──────┐ ┌──────┐
//!        │ 101  │ │ 102  │          ┌──────┐
//!        └──────┘ └──────┘          │ 103  │
//!  ▲ ════════════ hallway ══════╦══ └──────┘ ■
//! stairs                        ║ side       elevator
//! ```

pub const FLOOR_L1: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    {
      "type": "Feature",
      "properties": { "indoor": "corridor", "name": "Main hallway" },
      "geometry": { "type": "Polygon", "coordinates": [[[0,0],[30,0],[30,8],[0,8],[0,0]]] }
    },
    {
      "type": "Feature",
      "properties": { "indoor": "corridor", "name": "Side corridor" },
      "geometry": { "type": "Polygon", "coordinates": [[[22,-12],[28,-12],[28,0],[22,0],[22,-12]]] }
    },
    {
      "type": "Feature",
      "properties": { "indoor": "room", "ref": "101", "name": "Lecture hall" },
      "geometry": { "type": "Polygon", "coordinates": [[[4,8],[10,8],[10,14],[4,14],[4,8]]] }
    },
    {
      "type": "Feature",
      "properties": { "indoor": "room", "ref": "102" },
      "geometry": { "type": "Polygon", "coordinates": [[[11,8],[17,8],[17,14],[11,14],[11,8]]] }
    },
    {
      "type": "Feature",
      "properties": { "indoor": "room", "ref": "103", "level": 1 },
      "geometry": { "type": "Polygon", "coordinates": [[[28,-10],[34,-10],[34,-4],[28,-4],[28,-10]]] }
    },
    {
      "type": "Feature",
      "properties": { "entrance": "yes", "stairs": "yes" },
      "geometry": { "type": "Point", "coordinates": [-1, 4] }
    },
    {
      "type": "Feature",
      "properties": { "highway": "elevator" },
      "geometry": { "type": "Point", "coordinates": [31, 4] }
    },
    {
      "type": "Feature",
      "properties": { "amenity": "toilets" },
      "geometry": { "type": "LineString", "coordinates": [[0,0],[1,1]] }
    }
  ]
}"#;
