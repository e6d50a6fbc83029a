//! Slotted stacking inventory container

use core::mem;

use ember_event::Signal;

use crate::equality::{ItemEquality, ValueEquality};
use crate::error::SlotAccessError;
use crate::event::{ItemAdded, ItemRemoved};
use crate::slot::Slot;

/// Fixed-capacity container that groups equal items into slots.
///
/// Capacity bounds the number of *distinct item kinds*, not the number of
/// units: each slot holds an unbounded count of one kind, and all units of
/// a kind live in exactly one slot. "Same kind" is decided by the injected
/// [`ItemEquality`] relation, not by object identity, so the same item type
/// can stack differently in different containers.
///
/// Every successful mutation emits on [`on_item_added`](Self::on_item_added)
/// or [`on_item_removed`](Self::on_item_removed) before the call returns.
/// The container is single-threaded and performs no internal locking; a
/// handler that mutates the same inventory during delivery is the caller's
/// problem, not a container guarantee.
#[derive(Debug)]
pub struct SlotInventory<T, Q = ValueEquality> {
    slots: Vec<Slot<T>>,
    equality: Q,
    /// Fires after units were added to a slot.
    pub on_item_added: Signal<ItemAdded<T>>,
    /// Fires after units were removed from a slot.
    pub on_item_removed: Signal<ItemRemoved<T>>,
}

impl<T: PartialEq> SlotInventory<T> {
    /// Create an inventory stacking by the item type's own equality.
    pub fn new(capacity: usize) -> Self {
        Self::with_equality(capacity, ValueEquality)
    }
}

impl<T, Q> SlotInventory<T, Q> {
    /// Create an inventory with a caller-supplied equality relation.
    ///
    /// A capacity of 0 is legal: the inventory is permanently empty and
    /// every add is rejected.
    pub fn with_equality(capacity: usize, equality: Q) -> Self {
        Self {
            slots: (0..capacity).map(|_| Slot::Empty).collect(),
            equality,
            on_item_added: Signal::new(),
            on_item_removed: Signal::new(),
        }
    }

    /// Number of slots, fixed at construction.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of slots currently holding an item.
    pub fn occupied_slots(&self) -> usize {
        self.slots.iter().filter(|s| s.is_occupied()).count()
    }

    /// Number of slots currently free.
    pub fn free_slots(&self) -> usize {
        self.capacity() - self.occupied_slots()
    }

    /// Whether no slot holds an item.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(|s| s.is_empty())
    }

    /// Whether every slot holds an item.
    pub fn is_full(&self) -> bool {
        self.slots.iter().all(|s| s.is_occupied())
    }

    /// The equality relation this inventory stacks by.
    pub fn equality(&self) -> &Q {
        &self.equality
    }

    /// The item at `index`.
    ///
    /// Errors discriminate the two contract violations: an index outside
    /// `[0, capacity)` and a valid index whose slot is empty. Check
    /// occupancy first via [`count_at`](Self::count_at) or
    /// [`contains_item`](Self::contains_item) to avoid the latter.
    pub fn item_at(&self, index: usize) -> Result<&T, SlotAccessError> {
        match self.slots.get(index) {
            None => Err(SlotAccessError::OutOfRange {
                index,
                capacity: self.capacity(),
            }),
            Some(Slot::Empty) => Err(SlotAccessError::EmptySlot { index }),
            Some(Slot::Occupied { item, .. }) => Ok(item),
        }
    }

    /// Unit count at `index`; 0 if the slot is empty or the index is out of
    /// range.
    pub fn count_at(&self, index: usize) -> u32 {
        self.slots.get(index).map(Slot::count).unwrap_or(0)
    }

    /// Item values of occupied slots, in ascending slot order.
    ///
    /// Empty slots are skipped entirely. The iterator is lazy and
    /// restartable; a fresh call reflects the current state.
    pub fn items(&self) -> Items<'_, T> {
        Items {
            inner: self.slots.iter(),
        }
    }

    /// `(index, item, count)` for every occupied slot, in ascending slot
    /// order.
    pub fn slots(&self) -> impl Iterator<Item = (usize, &T, u32)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.as_pair().map(|(item, count)| (i, item, count)))
    }

    fn first_empty_slot(&self) -> Option<usize> {
        self.slots.iter().position(Slot::is_empty)
    }
}

impl<T, Q: ItemEquality<T>> SlotInventory<T, Q> {
    /// Create an inventory pre-filled with `(item, count)` pairs.
    ///
    /// Pairs feed through [`add_item`](Self::add_item) in input order:
    /// zero-count pairs are ignored, equal pairs consolidate into one slot,
    /// and once every slot is occupied the remaining distinct kinds are
    /// silently dropped.
    pub fn with_items<I>(capacity: usize, equality: Q, starting_items: I) -> Self
    where
        T: Clone,
        I: IntoIterator<Item = (T, u32)>,
    {
        let mut inventory = Self::with_equality(capacity, equality);
        for (item, count) in starting_items {
            inventory.add_item(item, count);
        }
        inventory
    }

    /// First slot holding an item equal to `item`, as `(index, count)`.
    pub fn find_item(&self, item: &T) -> Option<(usize, u32)> {
        self.slots.iter().enumerate().find_map(|(i, slot)| {
            slot.as_pair()
                .filter(|(stored, _)| self.equality.same_kind(stored, item))
                .map(|(_, count)| (i, count))
        })
    }

    /// Whether any slot holds an item equal to `item`.
    pub fn contains_item(&self, item: &T) -> bool {
        self.find_item(item).is_some()
    }

    /// Index of the slot holding an item equal to `item`.
    pub fn item_index(&self, item: &T) -> Option<usize> {
        self.find_item(item).map(|(index, _)| index)
    }

    /// Unit count of the item equal to `item`; 0 if absent.
    pub fn item_count(&self, item: &T) -> u32 {
        self.find_item(item).map(|(_, count)| count).unwrap_or(0)
    }

    /// Add `amount` units of `item`. Returns whether anything was admitted.
    ///
    /// Units stack onto the existing slot of the same kind if there is one
    /// (counts saturate at `u32::MAX` rather than overflow), otherwise
    /// occupy the lowest-index empty slot. With no equal stack and no empty
    /// slot the add is rejected whole: capacity bounds distinct kinds, so a
    /// new kind is never partially admitted. `amount == 0` and rejection
    /// are silent no-ops with no event.
    pub fn add_item(&mut self, item: T, amount: u32) -> bool
    where
        T: Clone,
    {
        if amount == 0 {
            return false;
        }
        if let Some((index, count)) = self.find_item(&item) {
            let total = count.saturating_add(amount);
            if let Slot::Occupied { count, .. } = &mut self.slots[index] {
                *count = total;
            }
            log::trace!("stacked {} onto slot {} (total {})", amount, index, total);
            self.on_item_added.emit(&ItemAdded {
                item,
                total,
                slot: index,
            });
            true
        } else if let Some(index) = self.first_empty_slot() {
            self.slots[index] = Slot::Occupied {
                item: item.clone(),
                count: amount,
            };
            log::trace!("placed {} into empty slot {}", amount, index);
            self.on_item_added.emit(&ItemAdded {
                item,
                total: amount,
                slot: index,
            });
            true
        } else {
            log::debug!("all {} slots occupied, add rejected", self.capacity());
            false
        }
    }

    /// Remove up to `amount` units of the item equal to `item`.
    ///
    /// Removal saturates: asking for more than the slot holds removes
    /// everything present and never underflows. The slot is cleared when
    /// its count reaches 0 and its index becomes reusable. Returns `false`
    /// with no event if the item is absent or `amount == 0`.
    pub fn remove_item(&mut self, item: &T, amount: u32) -> bool
    where
        T: Clone,
    {
        if amount == 0 {
            return false;
        }
        let Some((index, count)) = self.find_item(item) else {
            return false;
        };
        let removed = amount.min(count);
        let remaining = count - removed;
        let removed_item = if remaining == 0 {
            // find_item only yields occupied slots
            match mem::replace(&mut self.slots[index], Slot::Empty) {
                Slot::Occupied { item, .. } => item,
                Slot::Empty => return false,
            }
        } else {
            match &mut self.slots[index] {
                Slot::Occupied { item, count } => {
                    *count = remaining;
                    item.clone()
                }
                Slot::Empty => return false,
            }
        };
        log::trace!(
            "removed {} from slot {} (remaining {})",
            removed,
            index,
            remaining
        );
        self.on_item_removed.emit(&ItemRemoved {
            item: removed_item,
            removed,
            slot: index,
        });
        true
    }

    /// Remove up to `amount` units from the slot at `index`.
    ///
    /// An index outside `[0, capacity)` is a contract violation and errors;
    /// an empty slot at a valid index is a silent `Ok(false)`. Otherwise
    /// delegates to item-based removal on the slot's current value.
    pub fn remove_at(&mut self, index: usize, amount: u32) -> Result<bool, SlotAccessError>
    where
        T: Clone,
    {
        if index >= self.capacity() {
            return Err(SlotAccessError::OutOfRange {
                index,
                capacity: self.capacity(),
            });
        }
        let Some(item) = self.slots[index].item().cloned() else {
            return Ok(false);
        };
        Ok(self.remove_item(&item, amount))
    }
}

/// Iterator over the item values of occupied slots. See
/// [`SlotInventory::items`].
pub struct Items<'a, T> {
    inner: core::slice::Iter<'a, Slot<T>>,
}

impl<'a, T> Iterator for Items<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        for slot in self.inner.by_ref() {
            if let Slot::Occupied { item, .. } = slot {
                return Some(item);
            }
        }
        None
    }
}

impl<'a, T, Q> IntoIterator for &'a SlotInventory<T, Q> {
    type Item = &'a T;
    type IntoIter = Items<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items()
    }
}
