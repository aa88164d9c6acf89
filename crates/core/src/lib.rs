//! Core types for tagdb
//!
//! This crate defines the foundational types used throughout the system:
//! - Version: three-component schema stamp with the component-wise
//!   comparison the snapshot engine gates upgrades on
//! - Capability / Access markers: read/write permission, runtime and
//!   type-level
//! - RangeCheck / CheckResult / Bounded: bounds validation for opted-in
//!   value types
//! - TagValue / FixedValue: the payload codec every storable type implements
//! - ByteReader / WireError: slice-cursor read primitives for the wire
//!   format
//! - Persistence: group flush-policy metadata

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod access;
pub mod policy;
pub mod range;
pub mod value;
pub mod version;
pub mod wire;

pub use access::{Access, Capability, ReadAccess, ReadOnly, ReadWrite, WriteAccess, WriteOnly};
pub use policy::Persistence;
pub use range::{Bounded, CheckResult, RangeCheck};
pub use value::{FixedValue, TagValue};
pub use version::Version;
pub use wire::{ByteReader, WireError};
