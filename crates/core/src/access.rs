//! Access capability model
//!
//! Every tag is bound to a capability at construction: read-only,
//! write-only, or read-write. The direct typed path enforces capability at
//! compile time through the marker types below; the ID-routed path consults
//! the runtime [`Capability`] on every access.

use serde::{Deserialize, Serialize};

/// Runtime access capability of a tag.
///
/// Fixed at construction, immutable for the tag's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Capability {
    /// Value may be fetched but not stored
    ReadOnly,
    /// Value may be stored but not fetched
    WriteOnly,
    /// Value may be fetched and stored
    ReadWrite,
}

impl Capability {
    /// Whether the gated fetch path is permitted.
    pub const fn can_read(self) -> bool {
        matches!(self, Capability::ReadOnly | Capability::ReadWrite)
    }

    /// Whether the gated store path is permitted.
    pub const fn can_write(self) -> bool {
        matches!(self, Capability::WriteOnly | Capability::ReadWrite)
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Capability::ReadOnly => write!(f, "ro"),
            Capability::WriteOnly => write!(f, "wo"),
            Capability::ReadWrite => write!(f, "rw"),
        }
    }
}

/// Read-only access marker.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReadOnly;

/// Write-only access marker.
#[derive(Debug, Clone, Copy, Default)]
pub struct WriteOnly;

/// Read-write access marker.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReadWrite;

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::ReadOnly {}
    impl Sealed for super::WriteOnly {}
    impl Sealed for super::ReadWrite {}
}

/// Type-level access marker, resolved to a runtime [`Capability`].
///
/// The set of markers is closed: exactly [`ReadOnly`], [`WriteOnly`] and
/// [`ReadWrite`].
pub trait Access: sealed::Sealed + 'static {
    /// The runtime capability this marker stands for.
    const CAPABILITY: Capability;
}

/// Markers whose capability permits the gated fetch path.
pub trait ReadAccess: Access {}

/// Markers whose capability permits the gated store path.
pub trait WriteAccess: Access {}

impl Access for ReadOnly {
    const CAPABILITY: Capability = Capability::ReadOnly;
}

impl Access for WriteOnly {
    const CAPABILITY: Capability = Capability::WriteOnly;
}

impl Access for ReadWrite {
    const CAPABILITY: Capability = Capability::ReadWrite;
}

impl ReadAccess for ReadOnly {}
impl ReadAccess for ReadWrite {}
impl WriteAccess for WriteOnly {}
impl WriteAccess for ReadWrite {}
