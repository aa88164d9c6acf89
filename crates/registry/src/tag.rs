//! Typed tag cells
//!
//! A [`Tag`] is a single named, identified, versioned storage cell. Its
//! access capability is part of the type: `Tag<u32, ReadOnly>` simply has no
//! `set`, so the direct typed path costs nothing at runtime. The ID-routed
//! path goes through the type-erased [`AnyTag`](crate::erased::AnyTag) view,
//! which re-checks capability and value type dynamically.

use std::any::Any;
use std::marker::PhantomData;

use tagdb_core::{
    Access, Bounded, ByteReader, Capability, FixedValue, RangeCheck, ReadAccess, ReadWrite,
    TagValue, Version, WireError, WriteAccess,
};

use crate::erased::AnyTag;
use crate::group::GroupInfo;

/// A named, versioned, capability-tagged value cell.
///
/// The cell's id is `group.base_id + offset`, fixed at construction. Only
/// the value ever changes after construction; id, name, version, capability
/// and upgrade flag are immutable.
#[derive(Debug, Clone)]
pub struct Tag<T: TagValue, A: Access = ReadWrite> {
    id: u16,
    name: &'static str,
    version: Version,
    allow_upgrade: bool,
    value: T,
    _access: PhantomData<A>,
}

impl<T: TagValue, A: Access> Tag<T, A> {
    /// Create a tag holding `T::default()`.
    pub fn new(group: &GroupInfo, offset: u16, name: &'static str, version: Version) -> Self
    where
        T: Default,
    {
        Self::with_value(group, offset, name, version, T::default())
    }

    /// Create a tag holding an explicit initial value.
    pub fn with_value(
        group: &GroupInfo,
        offset: u16,
        name: &'static str,
        version: Version,
        value: T,
    ) -> Self {
        Tag {
            id: group.base_id + offset,
            name,
            version,
            allow_upgrade: false,
            value,
            _access: PhantomData,
        }
    }

    /// Accept snapshot payloads stamped by schemas this tag's own stamp
    /// exceeds.
    pub fn allow_upgrade(mut self) -> Self {
        self.allow_upgrade = true;
        self
    }

    /// The tag's registry-wide id.
    pub fn id(&self) -> u16 {
        self.id
    }

    /// The tag's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The tag's schema version stamp.
    pub fn version(&self) -> Version {
        self.version
    }

    /// The tag's access capability.
    pub fn capability(&self) -> Capability {
        A::CAPABILITY
    }

    /// Whether snapshot payloads from older schemas are accepted.
    pub fn upgrade_allowed(&self) -> bool {
        self.allow_upgrade
    }

    /// Peek at the current value. Always permitted, any capability.
    pub fn read(&self) -> T {
        self.value.clone()
    }

    /// Checked store: commits `candidate` only on [`RangeCheck::Ok`].
    pub(crate) fn store(&mut self, candidate: T) -> RangeCheck {
        let check = candidate.range_check();
        if check == RangeCheck::Ok {
            self.value = candidate;
        }
        check
    }
}

impl<T: TagValue, A: ReadAccess> Tag<T, A> {
    /// Borrow the current value.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// The value's payload image (the same bytes a snapshot would carry).
    pub fn serialize(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.value.payload_len());
        self.value.encode(&mut buf);
        buf
    }
}

impl<T: TagValue, A: WriteAccess> Tag<T, A> {
    /// Store a new value, range-checked if the value type opts in.
    pub fn set(&mut self, value: T) -> RangeCheck {
        self.store(value)
    }

    /// Overwrite the value from a payload image. No range check is applied;
    /// this is the in-memory mirror of [`Tag::serialize`], not the versioned
    /// snapshot path.
    pub fn deserialize(&mut self, bytes: &[u8]) -> Result<(), WireError> {
        let mut reader = ByteReader::new(bytes);
        self.value = self.value.decode(&mut reader)?;
        Ok(())
    }
}

#[allow(clippy::len_without_is_empty)]
impl<T: FixedValue, const N: usize, A: Access> Tag<[T; N], A> {
    /// Number of elements.
    pub const fn len(&self) -> usize {
        N
    }
}

impl<T: FixedValue, const N: usize, A: ReadAccess> Tag<[T; N], A> {
    /// Borrow one element. An out-of-range index is a schema/caller bug and
    /// panics.
    pub fn at(&self, index: usize) -> &T {
        &self.value[index]
    }
}

impl<T: FixedValue, const N: usize, A: WriteAccess> Tag<[T; N], A> {
    /// Replace one element. Element writes are not range-checked. An
    /// out-of-range index panics.
    pub fn set_at(&mut self, index: usize, element: T) {
        self.value[index] = element;
    }
}

impl<T, A> Tag<Bounded<T>, A>
where
    T: FixedValue + PartialOrd,
    A: WriteAccess,
{
    /// Store a bare value into a bounded tag, reusing the tag's bounds.
    pub fn set_value(&mut self, value: T) -> RangeCheck {
        let candidate = self.value.with_value(value);
        self.store(candidate)
    }
}

impl<T: TagValue, A: Access> AnyTag for Tag<T, A> {
    fn id(&self) -> u16 {
        self.id
    }

    fn name(&self) -> &'static str {
        self.name
    }

    fn version(&self) -> Version {
        self.version
    }

    fn capability(&self) -> Capability {
        A::CAPABILITY
    }

    fn upgrade_allowed(&self) -> bool {
        self.allow_upgrade
    }

    fn get_erased(&self, out: &mut dyn Any) -> bool {
        if !A::CAPABILITY.can_read() {
            return false;
        }
        match out.downcast_mut::<T>() {
            Some(slot) => {
                *slot = self.value.clone();
                true
            }
            None => false,
        }
    }

    fn set_erased(&mut self, candidate: &dyn Any) -> Option<RangeCheck> {
        if !A::CAPABILITY.can_write() {
            return None;
        }
        let candidate = candidate.downcast_ref::<T>()?;
        Some(self.store(candidate.clone()))
    }

    fn payload_len(&self) -> usize {
        self.value.payload_len()
    }

    fn encode_payload(&self, buf: &mut Vec<u8>) {
        self.value.encode(buf);
    }

    fn decode_payload(
        &mut self,
        reader: &mut ByteReader<'_>,
        commit: bool,
    ) -> Result<(), WireError> {
        let candidate = self.value.decode(reader)?;
        if commit && candidate.range_check() == RangeCheck::Ok {
            self.value = candidate;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tagdb_core::{Persistence, ReadOnly, WriteOnly};

    fn info() -> GroupInfo {
        GroupInfo::new(0x4000, "test-group", Version::new(1, 2, 3))
            .with_persistence(Persistence::None)
    }

    #[test]
    fn test_id_is_base_plus_offset() {
        let tag: Tag<u32> = Tag::new(&info(), 0x0004, "rpm", Version::new(1, 0, 22));
        assert_eq!(tag.id(), 0x4004);
        assert_eq!(tag.name(), "rpm");
        assert_eq!(tag.version(), Version::new(1, 0, 22));
        assert_eq!(tag.capability(), Capability::ReadWrite);
        assert!(!tag.upgrade_allowed());
    }

    #[test]
    fn test_default_and_explicit_initial_value() {
        let defaulted: Tag<u32> = Tag::new(&info(), 0, "a", Version::default());
        assert_eq!(defaulted.read(), 0);

        let seeded: Tag<u32> = Tag::with_value(&info(), 1, "b", Version::default(), 4711);
        assert_eq!(seeded.read(), 4711);
    }

    #[test]
    fn test_set_then_get_roundtrips() {
        let mut tag: Tag<u32> = Tag::new(&info(), 0, "a", Version::default());
        assert_eq!(tag.set(42), RangeCheck::Ok);
        assert_eq!(*tag.get(), 42);
        assert_eq!(tag.read(), 42);
    }

    #[test]
    fn test_read_is_permitted_on_write_only() {
        let mut tag: Tag<u32, WriteOnly> = Tag::new(&info(), 0, "a", Version::default());
        assert_eq!(tag.set(7), RangeCheck::Ok);
        // No `get` exists for WriteOnly, but the peek path works.
        assert_eq!(tag.read(), 7);
    }

    #[test]
    fn test_bounded_set_commits_only_in_range() {
        let mut tag: Tag<Bounded<i32>> = Tag::with_value(
            &info(),
            2,
            "temperature",
            Version::default(),
            Bounded::new(20, -40, 85),
        );

        assert_eq!(tag.set_value(25), RangeCheck::Ok);
        assert_eq!(tag.read().value(), 25);

        assert_eq!(tag.set_value(-41), RangeCheck::Underflow);
        assert_eq!(tag.read().value(), 25);

        assert_eq!(tag.set_value(86), RangeCheck::Overflow);
        assert_eq!(tag.read().value(), 25);

        // Full-candidate form behaves the same.
        assert_eq!(
            tag.set(Bounded::new(30, -40, 85)),
            RangeCheck::Ok
        );
        assert_eq!(tag.read().value(), 30);
    }

    #[test]
    fn test_serialize_deserialize_roundtrip() {
        let mut source: Tag<u64> = Tag::with_value(&info(), 3, "a", Version::default(), 0xFEED);
        let bytes = source.serialize();
        assert_eq!(bytes, 0xFEEDu64.to_le_bytes());

        source.deserialize(&0xBEEFu64.to_le_bytes()).unwrap();
        assert_eq!(source.read(), 0xBEEF);
    }

    #[test]
    fn test_deserialize_applies_no_range_check() {
        let mut tag: Tag<Bounded<u8>> = Tag::with_value(
            &info(),
            4,
            "level",
            Version::default(),
            Bounded::new(5, 0, 10),
        );
        // 200 is far out of range, but the raw overwrite path does not care.
        tag.deserialize(&[200]).unwrap();
        assert_eq!(tag.read().value(), 200);
    }

    #[test]
    fn test_array_accessors() {
        let mut tag: Tag<[u32; 5]> = Tag::new(&info(), 5, "samples", Version::default());
        assert_eq!(tag.len(), 5);
        assert_eq!(*tag.at(0), 0);

        tag.set_at(2, 99);
        assert_eq!(*tag.at(2), 99);
        assert_eq!(tag.read(), [0, 0, 99, 0, 0]);
    }

    #[test]
    #[should_panic]
    fn test_array_index_out_of_range_panics() {
        let tag: Tag<[u32; 3]> = Tag::new(&info(), 6, "samples", Version::default());
        let _ = tag.at(3);
    }

    #[test]
    fn test_erased_get_respects_capability_and_type() {
        let tag: Tag<u32, WriteOnly> = Tag::with_value(&info(), 0, "a", Version::default(), 5);
        let mut out = 0u32;
        assert!(!tag.get_erased(&mut out));
        assert_eq!(out, 0);

        let readable: Tag<u32, ReadOnly> =
            Tag::with_value(&info(), 1, "b", Version::default(), 5);
        assert!(readable.get_erased(&mut out));
        assert_eq!(out, 5);

        // Wrong type leaves the output untouched.
        let mut wrong = 0u64;
        assert!(!readable.get_erased(&mut wrong));
        assert_eq!(wrong, 0);
    }

    #[test]
    fn test_erased_set_respects_capability_and_type() {
        let mut tag: Tag<u32, ReadOnly> = Tag::with_value(&info(), 0, "a", Version::default(), 5);
        assert_eq!(tag.set_erased(&7u32), None);
        assert_eq!(tag.read(), 5);

        let mut writable: Tag<u32> = Tag::with_value(&info(), 1, "b", Version::default(), 5);
        assert_eq!(writable.set_erased(&7u32), Some(RangeCheck::Ok));
        assert_eq!(writable.read(), 7);
        assert_eq!(writable.set_erased(&9u64), None);
        assert_eq!(writable.read(), 7);
    }

    #[test]
    fn test_decode_payload_commit_and_discard() {
        let mut tag: Tag<u32> = Tag::with_value(&info(), 0, "a", Version::default(), 1);

        let bytes = 42u32.to_le_bytes();
        let mut reader = ByteReader::new(&bytes);
        tag.decode_payload(&mut reader, true).unwrap();
        assert_eq!(tag.read(), 42);

        // Discarded decode still consumes the payload bytes.
        let bytes = 77u32.to_le_bytes();
        let mut reader = ByteReader::new(&bytes);
        tag.decode_payload(&mut reader, false).unwrap();
        assert_eq!(tag.read(), 42);
        assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn test_decode_payload_out_of_range_keeps_previous() {
        let mut tag: Tag<Bounded<u8>> = Tag::with_value(
            &info(),
            0,
            "level",
            Version::default(),
            Bounded::new(5, 0, 10),
        );
        let mut reader = ByteReader::new(&[200]);
        tag.decode_payload(&mut reader, true).unwrap();
        assert_eq!(tag.read().value(), 5);
    }
}
