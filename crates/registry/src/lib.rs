//! Tag registry for tagdb
//!
//! This crate holds the object model:
//! - Tag: a typed, versioned, capability-tagged value cell
//! - AnyTag: the type-erased view used by ID routing and snapshotting
//! - TagSet: the fixed, ordered binding of a group's tags
//! - Group / GroupInfo: named tag collections with combined ID routing
//! - Dispatcher: ID routing across groups
//!
//! Everything is constructed explicitly and owned by the host — there are
//! no global registries.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod dispatcher;
pub mod erased;
pub mod group;
pub mod set;
pub mod tag;

pub use dispatcher::Dispatcher;
pub use erased::AnyTag;
pub use group::{Group, GroupInfo, GroupRoute};
pub use set::TagSet;
pub use tag::Tag;
