//! Snapshot persistence for tagdb groups
//!
//! This crate implements the versioned binary snapshot format: each group
//! persists to one file holding the group's version stamp followed by every
//! tag's stamp and payload in declaration order. Reads reconcile stored
//! stamps against the live schema and report a [`SnapshotStatus`] instead
//! of failing.
//!
//! The operations are grafted onto [`Group`](tagdb_registry::Group) through
//! the [`GroupSnapshotExt`] extension trait.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod snapshot;
pub mod status;

pub use snapshot::GroupSnapshotExt;
pub use status::{SnapshotError, SnapshotStatus};
