//! Value codec for tag payloads
//!
//! Every type storable in a tag implements [`TagValue`], which fixes the
//! payload image used both by the in-memory serialize/deserialize pair on a
//! tag and by the group snapshot engine. All multi-byte fields are
//! little-endian; the format carries no framing beyond the text length
//! prefix.
//!
//! ## Payload shapes
//!
//! ```text
//! scalar / struct:  raw field image, fixed width
//! array [T; N]:     N element images back to back, element order
//! text:             [len: u64 LE][len raw UTF-8 bytes]
//! Bounded<T>:       inner value image only (bounds never hit the wire)
//! ```
//!
//! Decoding is prototype-based: `decode` runs on the live value so that
//! types carrying non-serialized state (the bounds of [`Bounded`]) can
//! rebuild a candidate around it. Host applications implement [`TagValue`]
//! by hand for their own structs and enums, encoding fields in declaration
//! order.

use crate::range::{Bounded, RangeCheck};
use crate::wire::{ByteReader, WireError};

/// A value type storable in a tag.
pub trait TagValue: Clone + 'static {
    /// Number of bytes [`TagValue::encode`] will append.
    fn payload_len(&self) -> usize;

    /// Append this value's payload image to `buf`.
    fn encode(&self, buf: &mut Vec<u8>);

    /// Decode a candidate value from `reader`, using `self` as prototype.
    ///
    /// Consumes exactly the candidate's payload image on success; on
    /// [`WireError::Truncated`] the reader is left before the missing read.
    fn decode(&self, reader: &mut ByteReader<'_>) -> Result<Self, WireError>;

    /// Validate this value as a store candidate. Unbounded types pass.
    fn range_check(&self) -> RangeCheck {
        RangeCheck::Ok
    }
}

/// Fixed-width values, usable as array elements.
pub trait FixedValue: TagValue + Copy {
    /// Payload width in bytes, independent of the value.
    const WIDTH: usize;
}

macro_rules! impl_fixed_tag_value {
    ($($ty:ty),* $(,)?) => {$(
        impl TagValue for $ty {
            fn payload_len(&self) -> usize {
                std::mem::size_of::<$ty>()
            }

            fn encode(&self, buf: &mut Vec<u8>) {
                buf.extend_from_slice(&self.to_le_bytes());
            }

            fn decode(&self, reader: &mut ByteReader<'_>) -> Result<Self, WireError> {
                let bytes = reader.take(std::mem::size_of::<$ty>())?;
                Ok(<$ty>::from_le_bytes(bytes.try_into().unwrap()))
            }
        }

        impl FixedValue for $ty {
            const WIDTH: usize = std::mem::size_of::<$ty>();
        }
    )*};
}

impl_fixed_tag_value!(u8, i8, u16, i16, u32, i32, u64, i64, f32, f64);

impl TagValue for bool {
    fn payload_len(&self) -> usize {
        1
    }

    fn encode(&self, buf: &mut Vec<u8>) {
        buf.push(*self as u8);
    }

    fn decode(&self, reader: &mut ByteReader<'_>) -> Result<Self, WireError> {
        Ok(reader.take(1)?[0] != 0)
    }
}

impl FixedValue for bool {
    const WIDTH: usize = 1;
}

impl<T: FixedValue, const N: usize> TagValue for [T; N] {
    fn payload_len(&self) -> usize {
        N * T::WIDTH
    }

    fn encode(&self, buf: &mut Vec<u8>) {
        for element in self {
            element.encode(buf);
        }
    }

    fn decode(&self, reader: &mut ByteReader<'_>) -> Result<Self, WireError> {
        // The whole image is claimed up front so a short buffer rejects the
        // array without consuming a partial element run.
        let mut image = ByteReader::new(reader.take(N * T::WIDTH)?);
        let mut out = *self;
        for slot in out.iter_mut() {
            *slot = slot.decode(&mut image)?;
        }
        Ok(out)
    }
}

impl TagValue for String {
    fn payload_len(&self) -> usize {
        8 + self.len()
    }

    fn encode(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(&(self.len() as u64).to_le_bytes());
        buf.extend_from_slice(self.as_bytes());
    }

    fn decode(&self, reader: &mut ByteReader<'_>) -> Result<Self, WireError> {
        let len = reader.take_u64()? as usize;
        let bytes = reader.take(len)?;
        Ok(String::from_utf8_lossy(bytes).into_owned())
    }
}

impl<T> TagValue for Bounded<T>
where
    T: FixedValue + PartialOrd,
{
    fn payload_len(&self) -> usize {
        T::WIDTH
    }

    fn encode(&self, buf: &mut Vec<u8>) {
        self.value().encode(buf);
    }

    fn decode(&self, reader: &mut ByteReader<'_>) -> Result<Self, WireError> {
        let value = self.value().decode(reader)?;
        Ok(self.with_value(value))
    }

    fn range_check(&self) -> RangeCheck {
        self.check()
    }
}
