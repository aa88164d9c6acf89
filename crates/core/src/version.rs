//! Schema version stamps
//!
//! Every group and every tag carries a three-component version stamp that is
//! written next to its payload in snapshot files. On load, the stored stamp
//! is compared against the live schema's stamp to decide whether a payload
//! is still acceptable (see `tagdb-storage`).
//!
//! ## Wire image
//!
//! ```text
//! ┌───────────────┬───────────────┬───────────────┐
//! │ major: u32 LE │ minor: u32 LE │ build: u32 LE │
//! └───────────────┴───────────────┴───────────────┘
//! ```
//!
//! 12 bytes, no padding.

use serde::{Deserialize, Serialize};

/// Three-component schema version stamp.
///
/// Attached to groups and tags at construction and immutable afterwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Version {
    /// Major component
    pub major: u32,
    /// Minor component
    pub minor: u32,
    /// Build component
    pub build: u32,
}

impl Version {
    /// Size of the wire image in bytes.
    pub const WIRE_SIZE: usize = 12;

    /// Create a new version stamp.
    pub const fn new(major: u32, minor: u32, build: u32) -> Self {
        Version {
            major,
            minor,
            build,
        }
    }

    /// Component-wise "any field exceeds" comparison.
    ///
    /// `a.exceeds(b)` is true when any single component of `a` is greater
    /// than the same component of `b`. This is intentionally NOT a
    /// lexicographic ordering: `(1, 9, 0).exceeds((2, 9, 5))` is false while
    /// `(1, 0, 50).exceeds((1, 0, 10))` is true. The snapshot engine's
    /// upgrade gating depends on this exact rule.
    pub const fn exceeds(&self, other: &Version) -> bool {
        self.major > other.major || self.minor > other.minor || self.build > other.build
    }

    /// Serialize to the 12-byte wire image.
    pub fn to_bytes(&self) -> [u8; Self::WIRE_SIZE] {
        let mut bytes = [0u8; Self::WIRE_SIZE];
        bytes[0..4].copy_from_slice(&self.major.to_le_bytes());
        bytes[4..8].copy_from_slice(&self.minor.to_le_bytes());
        bytes[8..12].copy_from_slice(&self.build.to_le_bytes());
        bytes
    }

    /// Parse from a 12-byte wire image.
    pub fn from_bytes(bytes: &[u8; Self::WIRE_SIZE]) -> Self {
        Version {
            major: u32::from_le_bytes(bytes[0..4].try_into().unwrap()),
            minor: u32::from_le_bytes(bytes[4..8].try_into().unwrap()),
            build: u32::from_le_bytes(bytes[8..12].try_into().unwrap()),
        }
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.build)
    }
}
