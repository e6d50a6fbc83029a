//! Inventory change events

use serde::{Deserialize, Serialize};

/// Emitted after units were added to a slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemAdded<T> {
    /// The item that was added.
    pub item: T,
    /// Resulting unit count of the slot after the add.
    pub total: u32,
    /// Index of the slot that received the units.
    pub slot: usize,
}

/// Emitted after units were removed from a slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRemoved<T> {
    /// The item that was removed.
    pub item: T,
    /// Units actually removed, clamped to what the slot held.
    pub removed: u32,
    /// Index of the slot the units were removed from.
    pub slot: usize,
}
