//! End-to-end inventory scenarios exercising the public surface the way a
//! game system would: mixed adds, stacking, overflow and notification.

use std::cell::RefCell;
use std::rc::Rc;

use ember_inventory::prelude::*;

#[test]
fn mixed_adds_stack_and_leave_trailing_slot_free() {
    let mut inventory = SlotInventory::new(3);
    inventory.add_item("A", 2);
    inventory.add_item("B", 5);
    inventory.add_item("A", 1);

    assert_eq!(inventory.item_at(0), Ok(&"A"));
    assert_eq!(inventory.count_at(0), 3);
    assert_eq!(inventory.item_at(1), Ok(&"B"));
    assert_eq!(inventory.count_at(1), 5);
    assert_eq!(inventory.item_at(2), Err(SlotAccessError::EmptySlot { index: 2 }));

    assert_eq!(inventory.item_count(&"A"), 3);
    assert_eq!(inventory.occupied_slots(), 2);
}

#[test]
fn single_slot_inventory_rejects_second_kind() {
    let mut inventory = SlotInventory::with_items(1, ValueEquality, vec![("X", 1)]);

    assert!(!inventory.add_item("Y", 1));
    assert!(!inventory.contains_item(&"Y"));
    assert_eq!(inventory.item_count(&"X"), 1);
    assert_eq!(inventory.occupied_slots(), 1);
}

#[test]
fn pickup_and_consume_cycle_with_ui_observer() {
    // A UI collaborator mirrors the container through its events alone and
    // must end up agreeing with the queries.
    let mut inventory = SlotInventory::new(4);
    let shown: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));

    let shown_add = shown.clone();
    inventory.on_item_added.subscribe(move |e: &ItemAdded<&str>| {
        shown_add
            .borrow_mut()
            .push(format!("slot {} -> {} x{}", e.slot, e.item, e.total));
    });
    let shown_remove = shown.clone();
    inventory
        .on_item_removed
        .subscribe(move |e: &ItemRemoved<&str>| {
            shown_remove
                .borrow_mut()
                .push(format!("slot {} lost {} x{}", e.slot, e.item, e.removed));
        });

    inventory.add_item("herb", 3);
    inventory.add_item("coin", 10);
    inventory.add_item("herb", 2);
    inventory.remove_item(&"herb", 5);
    inventory.add_item("key", 1);

    assert_eq!(
        shown.borrow().as_slice(),
        [
            "slot 0 -> herb x3",
            "slot 1 -> coin x10",
            "slot 0 -> herb x5",
            "slot 0 lost herb x5",
            "slot 0 -> key x1",
        ]
    );
    // The freed slot was reused for the key; no compaction happened.
    assert_eq!(inventory.item_index(&"key"), Some(0));
    assert_eq!(inventory.item_index(&"coin"), Some(1));
    assert_eq!(inventory.items().copied().collect::<Vec<_>>(), vec!["key", "coin"]);
}

#[test]
fn kind_equality_decouples_stacking_from_value() {
    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: u32,
        durability: u32,
    }

    let by_id = |a: &Item, b: &Item| a.id == b.id;
    let mut inventory = SlotInventory::with_equality(2, by_id);

    inventory.add_item(Item { id: 7, durability: 100 }, 1);
    inventory.add_item(Item { id: 7, durability: 40 }, 1);
    inventory.add_item(Item { id: 9, durability: 100 }, 1);

    // Both id-7 items share one slot; the slot keeps the first value.
    assert_eq!(inventory.occupied_slots(), 2);
    assert_eq!(
        inventory.item_count(&Item { id: 7, durability: 0 }),
        2
    );
    assert_eq!(inventory.item_at(0).map(|item| item.durability), Ok(100));
}

#[test]
fn index_removal_routes_through_kind_removal() {
    let mut inventory = SlotInventory::new(2);
    inventory.add_item("bomb", 4);

    assert_eq!(inventory.remove_at(0, 3), Ok(true));
    assert_eq!(inventory.item_count(&"bomb"), 1);
    assert_eq!(inventory.remove_at(0, 10), Ok(true));
    assert_eq!(inventory.remove_at(0, 1), Ok(false));
    assert!(inventory.remove_at(2, 1).is_err());
}
