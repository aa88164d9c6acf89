//! Tag set binding
//!
//! A group's tags are bound as one value implementing [`TagSet`]: a schema
//! struct with one field per tag, or a plain tuple for small schemas. The
//! visitor runs in declaration order, which is also snapshot order.

use crate::erased::AnyTag;

/// An ordered, fixed set of tags.
///
/// Implementations must visit every tag, in declaration order, on both
/// visitors. Schema structs implement this by hand:
///
/// ```ignore
/// struct EngineTags {
///     rpm: Tag<u32>,
///     label: Tag<String, ReadOnly>,
/// }
///
/// impl TagSet for EngineTags {
///     fn visit(&self, f: &mut dyn FnMut(&dyn AnyTag)) {
///         f(&self.rpm);
///         f(&self.label);
///     }
///
///     fn visit_mut(&mut self, f: &mut dyn FnMut(&mut dyn AnyTag)) {
///         f(&mut self.rpm);
///         f(&mut self.label);
///     }
/// }
/// ```
pub trait TagSet {
    /// Visit every tag in declaration order.
    fn visit(&self, f: &mut dyn FnMut(&dyn AnyTag));

    /// Visit every tag mutably in declaration order.
    fn visit_mut(&mut self, f: &mut dyn FnMut(&mut dyn AnyTag));

    /// Number of tags in the set.
    fn len(&self) -> usize {
        let mut count = 0;
        self.visit(&mut |_| count += 1);
        count
    }

    /// Whether the set holds no tags.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

macro_rules! impl_tag_set_for_tuple {
    ($(($($name:ident . $idx:tt),+)),+ $(,)?) => {$(
        impl<$($name: AnyTag),+> TagSet for ($($name,)+) {
            fn visit(&self, f: &mut dyn FnMut(&dyn AnyTag)) {
                $( f(&self.$idx); )+
            }

            fn visit_mut(&mut self, f: &mut dyn FnMut(&mut dyn AnyTag)) {
                $( f(&mut self.$idx); )+
            }
        }
    )+};
}

impl_tag_set_for_tuple!(
    (T0.0),
    (T0.0, T1.1),
    (T0.0, T1.1, T2.2),
    (T0.0, T1.1, T2.2, T3.3),
    (T0.0, T1.1, T2.2, T3.3, T4.4),
    (T0.0, T1.1, T2.2, T3.3, T4.4, T5.5),
    (T0.0, T1.1, T2.2, T3.3, T4.4, T5.5, T6.6),
    (T0.0, T1.1, T2.2, T3.3, T4.4, T5.5, T6.6, T7.7),
    (T0.0, T1.1, T2.2, T3.3, T4.4, T5.5, T6.6, T7.7, T8.8),
    (T0.0, T1.1, T2.2, T3.3, T4.4, T5.5, T6.6, T7.7, T8.8, T9.9),
    (T0.0, T1.1, T2.2, T3.3, T4.4, T5.5, T6.6, T7.7, T8.8, T9.9, T10.10),
    (T0.0, T1.1, T2.2, T3.3, T4.4, T5.5, T6.6, T7.7, T8.8, T9.9, T10.10, T11.11),
);
