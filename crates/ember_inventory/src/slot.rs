//! Inventory slot representation

use serde::{Deserialize, Serialize};

/// One fixed inventory position: either empty, or holding `count` units of a
/// single item kind.
///
/// An occupied slot always has `count >= 1`; when the last unit is removed
/// the slot transitions to [`Slot::Empty`] and the item value is moved out,
/// never retained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Slot<T> {
    /// No item present.
    Empty,
    /// `count` units of one item kind.
    Occupied { item: T, count: u32 },
}

impl<T> Slot<T> {
    /// Whether the slot holds no item.
    pub fn is_empty(&self) -> bool {
        matches!(self, Slot::Empty)
    }

    /// Whether the slot holds an item.
    pub fn is_occupied(&self) -> bool {
        !self.is_empty()
    }

    /// The slot's item, if occupied.
    pub fn item(&self) -> Option<&T> {
        match self {
            Slot::Empty => None,
            Slot::Occupied { item, .. } => Some(item),
        }
    }

    /// Unit count; 0 for an empty slot.
    pub fn count(&self) -> u32 {
        match self {
            Slot::Empty => 0,
            Slot::Occupied { count, .. } => *count,
        }
    }

    /// Item and count together, if occupied.
    pub fn as_pair(&self) -> Option<(&T, u32)> {
        match self {
            Slot::Empty => None,
            Slot::Occupied { item, count } => Some((item, *count)),
        }
    }
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Slot::Empty
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_slot() {
        let slot: Slot<&str> = Slot::Empty;
        assert!(slot.is_empty());
        assert_eq!(slot.count(), 0);
        assert_eq!(slot.item(), None);
        assert_eq!(slot.as_pair(), None);
    }

    #[test]
    fn test_occupied_slot() {
        let slot = Slot::Occupied {
            item: "arrow",
            count: 12,
        };
        assert!(slot.is_occupied());
        assert_eq!(slot.count(), 12);
        assert_eq!(slot.item(), Some(&"arrow"));
        assert_eq!(slot.as_pair(), Some((&"arrow", 12)));
    }
}
