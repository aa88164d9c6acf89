//! tagdb - Embedded typed tag registry with versioned binary snapshots
//!
//! tagdb is a static catalogue of named, versioned, access-controlled value
//! cells ("tags") grouped into ID-routable collections ("groups"), with a
//! dispatcher routing numeric ids across groups and a per-group binary
//! snapshot format that tolerates schema evolution.
//!
//! # Quick Start
//!
//! ```ignore
//! use tagdb::{Bounded, Group, GroupInfo, GroupSnapshotExt, Tag, Version};
//!
//! const PLANT: GroupInfo = GroupInfo::new(0x4000, "plant", Version::new(1, 0, 0));
//!
//! let mut plant = Group::new(
//!     PLANT,
//!     (
//!         Tag::<u32>::new(&PLANT, 0x01, "rpm", Version::new(1, 0, 0)),
//!         Tag::with_value(&PLANT, 0x02, "temperature", Version::new(1, 0, 0),
//!                         Bounded::new(20i32, -40, 85)),
//!     ),
//! );
//!
//! // Direct typed access (capability enforced at compile time)...
//! plant.tags.0.set(1200);
//!
//! // ...or dynamic routing by id.
//! let result = plant.set_tag(0x4002, Bounded::new(25i32, -40, 85));
//! assert!(result.success);
//!
//! // Persist the whole group to one snapshot file.
//! let status = plant.save_snapshot("plant.snap");
//! assert!(status.result);
//! ```
//!
//! # Architecture
//!
//! - `tagdb-core`: version stamps, capability model, range checking, the
//!   value codec
//! - `tagdb-registry`: tags, groups, dispatcher
//! - `tagdb-storage`: the snapshot engine and file front-ends
//!
//! Instances are constructed explicitly and owned by the host; the registry
//! is single-threaded by design and callers provide any synchronization.

pub use tagdb_core::{
    Access, Bounded, ByteReader, Capability, CheckResult, FixedValue, Persistence, RangeCheck,
    ReadAccess, ReadOnly, ReadWrite, TagValue, Version, WireError, WriteAccess, WriteOnly,
};
pub use tagdb_registry::{AnyTag, Dispatcher, Group, GroupInfo, GroupRoute, Tag, TagSet};
pub use tagdb_storage::{GroupSnapshotExt, SnapshotError, SnapshotStatus};
