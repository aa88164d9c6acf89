//! Group snapshot engine
//!
//! Writes a group's tags to a byte sink and reads them back, reconciling
//! schema versions tag by tag. One snapshot covers one group.
//!
//! ## Snapshot format
//!
//! All multi-byte fields little-endian, no magic, no checksum, no padding:
//!
//! ```text
//! ┌────────────────────┐
//! │ group Version (12B)│
//! ├────────────────────┤
//! │ tag 1 Version (12B)│
//! │ tag 1 payload      │  payload shapes per TagValue:
//! ├────────────────────┤  scalar/struct: fixed image
//! │ tag 2 Version (12B)│  array: whole element run
//! │ tag 2 payload      │  text: u64 length prefix + bytes
//! ├────────────────────┤
//! │ ...                │
//! └────────────────────┘
//! ```
//!
//! Tags appear in declaration order.
//!
//! ## Version reconciliation on read
//!
//! A stored stamp is rejected when the live stamp `exceeds` it
//! (component-wise, see [`Version::exceeds`]) and the owner disallows
//! upgrade. A rejected group stamp is a soft flag: reading continues and
//! `result` stays true. A rejected tag stamp discards that tag's decoded
//! payload (the tag keeps its in-memory value), clears `result`, and
//! escalates the error code `None → TagVersion`,
//! `GroupVersion → GroupAndTagVersion`.
//!
//! Reading stops before any read that would run past the end of the
//! snapshot; remaining tags keep their values. Leftover bytes with an
//! otherwise clean read report `NotAllBytesRead` without clearing `result`.

use std::fs;
use std::io::Write;
use std::path::Path;

use byteorder::{LittleEndian, WriteBytesExt};
use tracing::{debug, warn};

use tagdb_core::{ByteReader, Version};
use tagdb_registry::{AnyTag, Group, TagSet};

use crate::status::{SnapshotError, SnapshotStatus};

fn write_version<W: Write>(sink: &mut W, version: &Version) -> std::io::Result<()> {
    sink.write_u32::<LittleEndian>(version.major)?;
    sink.write_u32::<LittleEndian>(version.minor)?;
    sink.write_u32::<LittleEndian>(version.build)
}

fn read_version(reader: &mut ByteReader<'_>) -> Option<Version> {
    let bytes = reader.take(Version::WIRE_SIZE).ok()?;
    Some(Version::from_bytes(bytes.try_into().unwrap()))
}

/// Snapshot operations on a [`Group`].
pub trait GroupSnapshotExt {
    /// Write the snapshot image to `sink`.
    ///
    /// `size` counts bytes written; `result` is false only when the sink
    /// fails. The error code is always `None` on writes.
    fn write_snapshot<W: Write>(&self, sink: &mut W) -> SnapshotStatus;

    /// The snapshot image as an owned buffer.
    fn snapshot_to_bytes(&self) -> Vec<u8>;

    /// Read a snapshot image back into the group's tags.
    fn read_snapshot_bytes(&mut self, bytes: &[u8]) -> SnapshotStatus;

    /// Write the snapshot to a file.
    fn save_snapshot<P: AsRef<Path>>(&self, path: P) -> SnapshotStatus;

    /// Read a snapshot file back into the group's tags.
    fn load_snapshot<P: AsRef<Path>>(&mut self, path: P) -> SnapshotStatus;
}

impl<S: TagSet> GroupSnapshotExt for Group<S> {
    fn write_snapshot<W: Write>(&self, sink: &mut W) -> SnapshotStatus {
        let mut size = 0;
        if write_version(sink, &self.info().version).is_err() {
            return SnapshotStatus {
                result: false,
                size,
                error: SnapshotError::None,
            };
        }
        size += Version::WIRE_SIZE;

        let mut failed = false;
        self.tags.visit(&mut |tag| {
            if failed {
                return;
            }
            if write_version(sink, &tag.version()).is_err() {
                failed = true;
                return;
            }
            size += Version::WIRE_SIZE;

            let mut payload = Vec::with_capacity(tag.payload_len());
            tag.encode_payload(&mut payload);
            if sink.write_all(&payload).is_err() {
                failed = true;
                return;
            }
            size += payload.len();
        });

        SnapshotStatus {
            result: !failed,
            size,
            error: SnapshotError::None,
        }
    }

    fn snapshot_to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        let status = self.write_snapshot(&mut buf);
        debug_assert!(status.result);
        buf
    }

    fn read_snapshot_bytes(&mut self, bytes: &[u8]) -> SnapshotStatus {
        let snapshot_size = bytes.len();
        let mut reader = ByteReader::new(bytes);
        let mut result = true;
        let mut error = SnapshotError::None;

        let stored_group = match read_version(&mut reader) {
            Some(version) => version,
            None => {
                return SnapshotStatus {
                    result: false,
                    size: 0,
                    error: SnapshotError::None,
                }
            }
        };
        let info = *self.info();
        if info.version.exceeds(&stored_group) && !info.allow_upgrade {
            error = SnapshotError::GroupVersion;
        }

        let mut stopped = false;
        self.tags.visit_mut(&mut |tag| {
            if stopped {
                return;
            }
            let stored = match read_version(&mut reader) {
                Some(version) => version,
                None => {
                    stopped = true;
                    return;
                }
            };

            let rejected = tag.version().exceeds(&stored) && !tag.upgrade_allowed();
            if tag.decode_payload(&mut reader, !rejected).is_err() {
                stopped = true;
                return;
            }
            if rejected {
                result = false;
                error = match error {
                    SnapshotError::None => SnapshotError::TagVersion,
                    SnapshotError::GroupVersion => SnapshotError::GroupAndTagVersion,
                    other => other,
                };
            }
        });

        let size = reader.position();
        if size < snapshot_size && error == SnapshotError::None {
            error = SnapshotError::NotAllBytesRead;
        }
        SnapshotStatus {
            result,
            size,
            error,
        }
    }

    fn save_snapshot<P: AsRef<Path>>(&self, path: P) -> SnapshotStatus {
        let path = path.as_ref();
        let mut file = match fs::File::create(path) {
            Ok(file) => file,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "snapshot create failed");
                return SnapshotStatus {
                    result: false,
                    size: 0,
                    error: SnapshotError::None,
                };
            }
        };

        let status = self.write_snapshot(&mut file);
        debug!(
            path = %path.display(),
            group = self.info().name,
            size = status.size,
            result = status.result,
            "snapshot written"
        );
        status
    }

    fn load_snapshot<P: AsRef<Path>>(&mut self, path: P) -> SnapshotStatus {
        let path = path.as_ref();
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "snapshot read failed");
                return SnapshotStatus {
                    result: false,
                    size: 0,
                    error: SnapshotError::None,
                };
            }
        };

        let status = self.read_snapshot_bytes(&bytes);
        debug!(
            path = %path.display(),
            group = self.info().name,
            size = status.size,
            result = status.result,
            error = %status.error,
            "snapshot loaded"
        );
        status
    }
}
