//! Core error type.
//!
//! Sub-crates define their own error enums (`GraphError`, `ControllerError`)
//! and keep this one for input-side failures: unreadable or malformed floor
//! data and unparseable values.

use thiserror::Error;

/// Errors produced while ingesting or validating engine inputs.
#[derive(Debug, Error)]
pub enum NavError {
    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "geojson")]
    #[error("GeoJSON decode error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Shorthand result type for `nav-core`.
pub type NavResult<T> = Result<T, NavError>;
