//! Dispatcher: ID routing across groups
//!
//! The dispatcher holds non-owning references to groups (in declaration
//! order) and tries each group's routing for every request. At most one
//! group is expected to own any id; the scan covers all groups and combines
//! results by logical OR, keeping the matching group's check result.

use tagdb_core::{CheckResult, TagValue};
use tracing::info;

use crate::group::GroupRoute;

/// Routes ID-based get/set across multiple groups.
pub struct Dispatcher<'a> {
    groups: Vec<&'a mut dyn GroupRoute>,
}

impl<'a> Dispatcher<'a> {
    /// Bind groups in routing order.
    pub fn new(groups: Vec<&'a mut dyn GroupRoute>) -> Self {
        Dispatcher { groups }
    }

    /// Number of bound groups.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Store `value` into whichever group owns `id`.
    ///
    /// Success is OR-combined across groups; the check result of the
    /// matching group is propagated. No match yields
    /// `{ success: false, check: NotChecked }`.
    pub fn set_tag<T: TagValue>(&mut self, id: u16, value: T) -> CheckResult {
        let mut result = CheckResult::default();
        for group in self.groups.iter_mut() {
            let routed = group.set_erased(id, &value);
            if routed.success {
                result = routed;
            }
        }
        result
    }

    /// Copy the value owned by `id` into `out`, whichever group holds it.
    pub fn get_tag<T: TagValue>(&self, id: u16, out: &mut T) -> bool {
        let mut found = false;
        for group in self.groups.iter() {
            found |= group.get_erased(id, out);
        }
        found
    }

    /// Emit the whole registry structure, group by group.
    pub fn log_structure(&self) {
        info!(groups = self.groups.len(), "registry structure");
        for group in self.groups.iter() {
            group.log_tags();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::group::{Group, GroupInfo};
    use crate::tag::Tag;
    use tagdb_core::{Bounded, RangeCheck, Version};

    const FIRST: GroupInfo = GroupInfo::new(0x4000, "first", Version::new(1, 0, 0));
    const SECOND: GroupInfo = GroupInfo::new(0x5000, "second", Version::new(1, 0, 0));

    #[test]
    fn test_routes_to_owning_group() {
        let mut first = Group::new(
            FIRST,
            (Tag::<u32>::with_value(&FIRST, 1, "a", Version::default(), 10),),
        );
        let mut second = Group::new(
            SECOND,
            (Tag::<u32>::with_value(&SECOND, 1, "b", Version::default(), 20),),
        );

        let mut dispatcher = Dispatcher::new(vec![&mut first as &mut dyn GroupRoute, &mut second]);
        assert_eq!(dispatcher.group_count(), 2);

        // Second group's id resolves even though the first group is scanned
        // before it.
        let result = dispatcher.set_tag(0x5001, 99u32);
        assert!(result.success);
        assert_eq!(result.check, RangeCheck::Ok);

        let mut out = 0u32;
        assert!(dispatcher.get_tag(0x5001, &mut out));
        assert_eq!(out, 99);

        assert!(dispatcher.get_tag(0x4001, &mut out));
        assert_eq!(out, 10);
    }

    #[test]
    fn test_unknown_id_across_all_groups() {
        let mut first = Group::new(
            FIRST,
            (Tag::<u32>::new(&FIRST, 1, "a", Version::default()),),
        );
        let mut dispatcher = Dispatcher::new(vec![&mut first as &mut dyn GroupRoute]);

        let result = dispatcher.set_tag(0x7777, 1u32);
        assert_eq!(result, CheckResult::default());

        let mut out = 5u32;
        assert!(!dispatcher.get_tag(0x7777, &mut out));
        assert_eq!(out, 5);
    }

    #[test]
    fn test_matching_check_survives_later_groups() {
        // The matching group is scanned first; later groups must not
        // overwrite its check result with NotChecked.
        let mut first = Group::new(
            FIRST,
            (Tag::<Bounded<i32>>::with_value(
                &FIRST,
                1,
                "bounded",
                Version::default(),
                Bounded::new(5, 0, 10),
            ),),
        );
        let mut second = Group::new(
            SECOND,
            (Tag::<u32>::new(&SECOND, 1, "other", Version::default()),),
        );

        let mut dispatcher = Dispatcher::new(vec![&mut first as &mut dyn GroupRoute, &mut second]);
        let result = dispatcher.set_tag(0x4001, Bounded::new(50, 0, 10));
        assert!(result.success);
        assert_eq!(result.check, RangeCheck::Overflow);
    }
}
