//! Identifier wrappers.
//!
//! Two flavours live here:
//!
//! - [`FeatureIdx`] — a `Copy` integer wrapper indexing into a floor's feature
//!   list.  Used to tie graph nodes back to the polygon they were sampled
//!   from (e.g. "same corridor" checks).
//! - [`NodeId`] / [`FloorId`] — string identifiers.  Node ids are derived
//!   deterministically from feature index and role, so two builds of the same
//!   floor produce identical ids; floor ids come from the external floor
//!   provider and are opaque to the engine.

use std::borrow::Borrow;
use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

/// Generate an owned string identifier that can be looked up by `&str`.
macro_rules! string_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident;) => {
        $(#[$attr])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        $vis struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad(&self.0)
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

typed_id! {
    /// Position of a feature in the floor's feature list.
    pub struct FeatureIdx(u32);
}

string_id! {
    /// Graph node identifier, unique within one graph build.
    pub struct NodeId;
}

string_id! {
    /// Opaque floor identifier supplied by the floor provider.
    pub struct FloorId;
}

impl NodeId {
    /// `corridor-<i>-boundary-<k>`
    pub fn corridor_boundary(feature: FeatureIdx, k: usize) -> Self {
        Self(format!("corridor-{feature}-boundary-{k}"))
    }

    /// `corridor-<i>-centerline-<k>`
    pub fn corridor_centerline(feature: FeatureIdx, k: usize) -> Self {
        Self(format!("corridor-{feature}-centerline-{k}"))
    }

    /// `room-<i>`
    pub fn room(feature: FeatureIdx) -> Self {
        Self(format!("room-{feature}"))
    }

    /// `entry-<i>`
    pub fn entry_point(feature: FeatureIdx) -> Self {
        Self(format!("entry-{feature}"))
    }
}
