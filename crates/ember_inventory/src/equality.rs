//! Injected item-kind equality
//!
//! Stacking groups items by "kind", not by identity or by the item type's
//! built-in equality. The relation is supplied by the caller at construction
//! time so the same item type can stack differently in different containers
//! (e.g. ignoring durability, or comparing only an id field).

/// Decides whether two item values belong to the same stack.
pub trait ItemEquality<T> {
    /// Returns true if `a` and `b` are interchangeable for stacking.
    fn same_kind(&self, a: &T, b: &T) -> bool;
}

/// Any plain comparison closure is usable as an equality relation.
impl<T, F> ItemEquality<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    fn same_kind(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// Equality relation that delegates to the item type's [`PartialEq`].
///
/// The default relation for [`SlotInventory`](crate::SlotInventory).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ValueEquality;

impl<T: PartialEq> ItemEquality<T> for ValueEquality {
    fn same_kind(&self, a: &T, b: &T) -> bool {
        a == b
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_equality() {
        assert!(ValueEquality.same_kind(&3, &3));
        assert!(!ValueEquality.same_kind(&3, &4));
    }

    #[test]
    fn test_closure_equality() {
        let ignore_case = |a: &&str, b: &&str| a.eq_ignore_ascii_case(b);
        assert!(ignore_case.same_kind(&"Sword", &"sword"));
        assert!(!ignore_case.same_kind(&"Sword", &"shield"));
    }
}
