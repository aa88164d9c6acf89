//! Snapshot status reporting
//!
//! Persistence failures are data, not panics: every snapshot write/read
//! returns a [`SnapshotStatus`] carrying a result flag, the number of bytes
//! moved, and an error code from a small closed taxonomy.

/// Error taxonomy for snapshot reads.
///
/// Writes always report [`SnapshotError::None`]; the codes below are
/// produced while reading a snapshot back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SnapshotError {
    /// No error
    #[default]
    None,
    /// The stored group stamp is no longer accepted by the live group
    GroupVersion,
    /// A stored tag stamp is no longer accepted by its live tag
    TagVersion,
    /// Both the group stamp and at least one tag stamp were rejected
    GroupAndTagVersion,
    /// The snapshot holds more bytes than the schema consumed
    NotAllBytesRead,
}

impl std::fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SnapshotError::None => write!(f, "none"),
            SnapshotError::GroupVersion => write!(f, "group version mismatch"),
            SnapshotError::TagVersion => write!(f, "tag version mismatch"),
            SnapshotError::GroupAndTagVersion => {
                write!(f, "group and tag version mismatch")
            }
            SnapshotError::NotAllBytesRead => write!(f, "not all bytes read"),
        }
    }
}

/// Outcome of one snapshot write or read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SnapshotStatus {
    /// False on sink failure or any rejected tag stamp; trailing bytes and
    /// a rejected group stamp alone do not clear it
    pub result: bool,
    /// Bytes written, respectively bytes actually consumed
    pub size: usize,
    /// Error code (reads only; writes always report `None`)
    pub error: SnapshotError,
}
