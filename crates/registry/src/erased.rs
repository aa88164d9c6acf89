//! Type-erased tag view
//!
//! ID routing and the snapshot engine cannot know tag value types
//! statically, so every [`Tag`](crate::tag::Tag) also exposes this
//! object-safe view. Erased reads and writes re-check capability and value
//! type at runtime; the payload hooks are ungated because the snapshot
//! engine serializes whole groups regardless of per-tag capability.

use std::any::Any;

use tagdb_core::{ByteReader, Capability, RangeCheck, Version, WireError};

/// Object-safe view of a tag for ID routing and snapshotting.
pub trait AnyTag {
    /// The tag's registry-wide id.
    fn id(&self) -> u16;

    /// The tag's name.
    fn name(&self) -> &'static str;

    /// The tag's schema version stamp.
    fn version(&self) -> Version;

    /// The tag's access capability.
    fn capability(&self) -> Capability;

    /// Whether snapshot payloads from mismatched schemas are accepted.
    fn upgrade_allowed(&self) -> bool;

    /// Copy the value into `out` if the capability permits reads and `out`
    /// is of the tag's value type. Returns false (leaving `out` untouched)
    /// otherwise.
    fn get_erased(&self, out: &mut dyn Any) -> bool;

    /// Store `candidate` if the capability permits writes and `candidate`
    /// is of the tag's value type. Returns the range-check outcome on a
    /// match, `None` otherwise.
    fn set_erased(&mut self, candidate: &dyn Any) -> Option<RangeCheck>;

    /// Number of bytes [`AnyTag::encode_payload`] will append.
    fn payload_len(&self) -> usize;

    /// Append the value's payload image to `buf`. Not capability-gated.
    fn encode_payload(&self, buf: &mut Vec<u8>);

    /// Decode one payload image from `reader`.
    ///
    /// With `commit` the decoded candidate replaces the value (through the
    /// range check; out-of-range candidates are dropped silently). Without
    /// it the bytes are consumed and the value is untouched. Not
    /// capability-gated.
    fn decode_payload(&mut self, reader: &mut ByteReader<'_>, commit: bool)
        -> Result<(), WireError>;
}
