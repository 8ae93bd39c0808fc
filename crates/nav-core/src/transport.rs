//! Vertical-transport kinds.
//!
//! The same enum serves two purposes: it tags `EntryPoint` graph nodes with
//! the kind of access they provide, and it expresses the user's transport
//! preference when the controller has to pick a fallback start node.

/// Kind of vertical transport an entry point gives access to.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TransportKind {
    Elevator,
    Escalator,
    Stairs,
    /// Unclassified entrance, or "no preference" when used as a preference.
    #[default]
    Any,
}

impl TransportKind {
    /// Human-readable label, used in log fields.
    pub fn as_str(self) -> &'static str {
        match self {
            TransportKind::Elevator  => "elevator",
            TransportKind::Escalator => "escalator",
            TransportKind::Stairs    => "stairs",
            TransportKind::Any       => "any",
        }
    }
}

impl std::fmt::Display for TransportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TransportKind {
    type Err = crate::NavError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "elevator"  => Ok(TransportKind::Elevator),
            "escalator" => Ok(TransportKind::Escalator),
            "stairs"    => Ok(TransportKind::Stairs),
            "any"       => Ok(TransportKind::Any),
            other => Err(crate::NavError::Parse(format!(
                "invalid transport kind {other:?}: expected elevator, escalator, stairs, or any"
            ))),
        }
    }
}
