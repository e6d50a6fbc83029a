//! # ember_inventory - Slotted Stacking Inventory
//!
//! This crate provides a fixed-capacity, slot-indexed container that groups
//! equal items into stacks.
//!
//! # Features
//!
//! - Capacity bounds distinct item kinds, not unit counts
//! - Stacking by an injected equality relation, not object identity
//! - Stable slot indices with first-empty-slot allocation
//! - Saturating removal with automatic slot reclamation
//! - Synchronous add/remove change notification
//!
//! # Example
//!
//! ```
//! use ember_inventory::prelude::*;
//!
//! let mut inventory = SlotInventory::new(3);
//! inventory.add_item("potion", 2);
//! inventory.add_item("sword", 1);
//! inventory.add_item("potion", 1); // stacks onto slot 0
//!
//! assert_eq!(inventory.item_count(&"potion"), 3);
//! assert_eq!(inventory.occupied_slots(), 2);
//! assert!(inventory.remove_item(&"sword", 1));
//! ```

pub mod equality;
pub mod error;
pub mod event;
pub mod inventory;
pub mod slot;

pub mod prelude {
    pub use crate::equality::{ItemEquality, ValueEquality};
    pub use crate::error::SlotAccessError;
    pub use crate::event::{ItemAdded, ItemRemoved};
    pub use crate::inventory::{Items, SlotInventory};
    pub use crate::slot::Slot;
}

pub use prelude::*;
