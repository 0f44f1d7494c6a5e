//! Result ordering strategies.

use std::cmp::Ordering;

use tfm_core::{natural_cmp, ValueEntry};

/// Comparator applied to the mapped entries before they are returned.
pub trait EntryOrder {
    fn compare(&self, a: &ValueEntry, b: &ValueEntry) -> Ordering;
}

impl<F> EntryOrder for F
where
    F: Fn(&ValueEntry, &ValueEntry) -> Ordering,
{
    fn compare(&self, a: &ValueEntry, b: &ValueEntry) -> Ordering {
        self(a, b)
    }
}

/// Natural order on display text; entries with equal display text are ordered
/// by name so the output never depends on input order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalDisplayOrder;

impl EntryOrder for NaturalDisplayOrder {
    fn compare(&self, a: &ValueEntry, b: &ValueEntry) -> Ordering {
        natural_cmp(&a.display_name, &b.display_name).then_with(|| natural_cmp(&a.name, &b.name))
    }
}
