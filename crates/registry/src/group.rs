//! Groups: named, versioned tag collections with ID routing
//!
//! A [`Group`] owns its tags (a [`TagSet`]) and routes ID-based get/set to
//! them. The typed schema value stays publicly reachable through
//! [`Group::tags`], so hosts keep the zero-overhead direct path alongside
//! the routed one.

use std::any::Any;

use tagdb_core::{CheckResult, Persistence, TagValue, Version};
use tracing::info;

use crate::erased::AnyTag;
use crate::set::TagSet;

/// Static identity and policy of a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupInfo {
    /// Base id; every owned tag's id is `base_id + offset`
    pub base_id: u16,
    /// Group name
    pub name: &'static str,
    /// Group schema version stamp
    pub version: Version,
    /// Whether snapshots stamped by mismatched schemas are accepted
    pub allow_upgrade: bool,
    /// Flush policy metadata (trigger scheduling is the host's concern)
    pub persistence: Persistence,
}

impl GroupInfo {
    /// Create a group identity with upgrade disabled and no flush policy.
    pub const fn new(base_id: u16, name: &'static str, version: Version) -> Self {
        GroupInfo {
            base_id,
            name,
            version,
            allow_upgrade: false,
            persistence: Persistence::None,
        }
    }

    /// Set the flush policy.
    pub const fn with_persistence(mut self, persistence: Persistence) -> Self {
        self.persistence = persistence;
        self
    }

    /// Accept snapshots stamped by schemas this group's own stamp exceeds.
    pub const fn with_upgrade(mut self) -> Self {
        self.allow_upgrade = true;
        self
    }
}

/// A named, versioned collection of tags with combined ID routing.
///
/// The tag list is fixed at construction: cardinality and order never
/// change, and routing scans in declaration order.
#[derive(Debug)]
pub struct Group<S> {
    info: GroupInfo,
    /// The typed tag schema; public for the direct typed path.
    pub tags: S,
}

impl<S: TagSet> Group<S> {
    /// Bind `tags` to a group identity.
    pub fn new(info: GroupInfo, tags: S) -> Self {
        Group { info, tags }
    }

    /// The group's static identity and policy.
    pub fn info(&self) -> &GroupInfo {
        &self.info
    }

    /// Store `value` into the tag owning `id`.
    ///
    /// A tag matches on id, exact value type, and write capability jointly;
    /// anything else yields `{ success: false, check: NotChecked }`. The
    /// scan covers every tag and combines results by logical OR.
    pub fn set_tag<T: TagValue>(&mut self, id: u16, value: T) -> CheckResult {
        self.route_set(id, &value)
    }

    /// Copy the value of the tag owning `id` into `out`.
    ///
    /// A tag matches on id, exact value type, and read capability jointly;
    /// on no match `out` is left untouched and false is returned.
    pub fn get_tag<T: TagValue>(&self, id: u16, out: &mut T) -> bool {
        self.route_get(id, out)
    }

    /// Emit one diagnostic line per tag.
    pub fn log_tags(&self) {
        info!(group = self.info.name, base_id = self.info.base_id, "group");
        self.tags.visit(&mut |tag| {
            info!(
                name = tag.name(),
                id = %format_args!("{:#06x}", tag.id()),
                version = %tag.version(),
                capability = %tag.capability(),
                "tag"
            );
        });
    }

    fn route_set(&mut self, id: u16, candidate: &dyn Any) -> CheckResult {
        let mut result = CheckResult::default();
        self.tags.visit_mut(&mut |tag| {
            if tag.id() != id {
                return;
            }
            if let Some(check) = tag.set_erased(candidate) {
                result = CheckResult {
                    success: true,
                    check,
                };
            }
        });
        result
    }

    fn route_get(&self, id: u16, out: &mut dyn Any) -> bool {
        let mut found = false;
        self.tags.visit(&mut |tag| {
            if tag.id() != id {
                return;
            }
            found |= tag.get_erased(out);
        });
        found
    }
}

/// Object-safe routing view of a group, for the dispatcher.
pub trait GroupRoute {
    /// The group's static identity and policy.
    fn info(&self) -> &GroupInfo;

    /// ID-routed store with a type-erased candidate.
    fn set_erased(&mut self, id: u16, candidate: &dyn Any) -> CheckResult;

    /// ID-routed fetch into a type-erased output.
    fn get_erased(&self, id: u16, out: &mut dyn Any) -> bool;

    /// Emit one diagnostic line per tag.
    fn log_tags(&self);
}

impl<S: TagSet> GroupRoute for Group<S> {
    fn info(&self) -> &GroupInfo {
        &self.info
    }

    fn set_erased(&mut self, id: u16, candidate: &dyn Any) -> CheckResult {
        self.route_set(id, candidate)
    }

    fn get_erased(&self, id: u16, out: &mut dyn Any) -> bool {
        self.route_get(id, out)
    }

    fn log_tags(&self) {
        Group::log_tags(self);
    }
}
