#![cfg(test)]

use super::*;

#[test]
fn test_positional_insert() {
    let mut list = DoublyLinkedList::new();
    // [2] <-> [1] <-> [3]
    list.insert(0, 1).expect("in range");
    list.insert(0, 2).expect("in range");
    list.insert(2, 3).expect("in range");
    list.verify_links();

    assert_eq!(list.value(list.get(0).expect("in range")), Some(&2));
    assert_eq!(list.value(list.get(1).expect("in range")), Some(&1));
    assert_eq!(list.value(list.get(2).expect("in range")), Some(&3));
    assert_eq!(list.len(), 3);
}

#[test]
fn test_middle_insert_splices() {
    let mut list: DoublyLinkedList<_> = [1, 2, 4, 5].into_iter().collect();
    list.insert(2, 3).expect("in range");
    list.verify_links();

    assert_eq!(
        list.iter().copied().collect::<Vec<_>>(),
        [1, 2, 3, 4, 5],
        "A middle insert should splice in before the position's old occupant."
    );
}

#[test]
fn test_insert_then_get_round_trip() {
    // Inserting at any valid position and immediately getting it returns the new node.
    for position in 0..=4 {
        let mut list: DoublyLinkedList<_> = [10, 20, 30, 40].into_iter().collect();
        let handle = list.insert(position, 99).expect("in range");
        list.verify_links();

        assert_eq!(
            list.get(position),
            Ok(handle),
            "get({position}) should return the handle insert({position}) produced."
        );
        assert_eq!(list.value(handle), Some(&99));
        assert_eq!(list.len(), 5);
    }
}

#[test]
fn test_positional_remove() {
    // [1] <-> [2] <-> [3]
    let mut list: DoublyLinkedList<_> = [1, 2, 3].into_iter().collect();

    let removed = list.remove(2).expect("in range").expect("non-empty");
    list.verify_links();
    assert_eq!(removed.value, 3, "Removing the tail position should return the tail.");

    let removed = list.remove(0).expect("in range").expect("non-empty");
    list.verify_links();
    assert_eq!(removed.value, 1, "Removing position 0 should return the head.");

    let removed = list.remove(0).expect("in range").expect("non-empty");
    list.verify_links();
    assert_eq!(removed.value, 2);

    assert!(list.is_empty());
    assert_eq!(list.front(), None);
    assert_eq!(list.back(), None);
}

#[test]
fn test_remove_middle() {
    let mut list: DoublyLinkedList<_> = [1, 2, 3, 4, 5].into_iter().collect();

    let removed = list.remove(2).expect("in range").expect("non-empty");
    list.verify_links();
    assert_eq!(removed.value, 3);
    assert_eq!(
        list.iter().copied().collect::<Vec<_>>(),
        [1, 2, 4, 5],
        "A middle remove should rewire both neighbors around the gap."
    );
}

#[test]
fn test_remove_on_empty_is_not_an_error() {
    let mut list = DoublyLinkedList::<i32>::new();
    assert_eq!(
        list.remove(0),
        Ok(None),
        "Removing from an empty list should report nothing to remove, not fail."
    );
    assert_eq!(list.remove(7), Ok(None), "The position is irrelevant on an empty list.");
}

#[test]
fn test_out_of_range() {
    let mut list: DoublyLinkedList<_> = [1, 2].into_iter().collect();

    assert_eq!(list.get(2), Err(OutOfRange { position: 2, len: 2 }));
    assert_eq!(
        list.insert(3, 9),
        Err(OutOfRange { position: 3, len: 2 }),
        "Insert accepts positions up to and including len, not beyond."
    );
    assert!(list.insert(2, 9).is_ok(), "Insert at exactly len should append.");
    assert_eq!(list.remove(3), Err(OutOfRange { position: 3, len: 3 }));

    let mut single: DoublyLinkedList<_> = [1].into_iter().collect();
    assert_eq!(
        single.remove(1),
        Err(OutOfRange { position: 1, len: 1 }),
        "A single-element list should still reject positions past the end."
    );
}

#[test]
fn test_contains_is_identity_based() {
    let mut list = DoublyLinkedList::new();
    let first = list.insert(0, 1).expect("in range");
    let twin = list.insert(1, 1).expect("in range");

    assert!(list.contains(first));
    assert!(list.contains(twin), "Two nodes with equal values are distinct identities.");
    assert_ne!(first, twin);

    list.remove(0).expect("in range");
    assert!(
        !list.contains(first),
        "A handle should stop being contained the moment its node is removed."
    );
    assert!(list.contains(twin), "Removing one twin should not affect the other.");
}

#[test]
fn test_dead_handle_accessors() {
    let mut list = DoublyLinkedList::new();
    let handle = list.insert(0, 5).expect("in range");
    list.remove(0).expect("in range");

    assert_eq!(list.value(handle), None, "A dead handle should not resolve to a value.");
    assert_eq!(list.value_mut(handle), None);
    assert!(!list.contains(handle));
}

#[test]
fn test_handle_reuse_after_removal() {
    let mut list = DoublyLinkedList::new();
    list.insert(0, 1).expect("in range");
    let old = list.insert(1, 2).expect("in range");
    list.remove(1).expect("in range");

    let new = list.insert(1, 3).expect("in range");
    assert_eq!(old, new, "An insert should reuse the most recently freed slot.");
    assert!(list.contains(old), "A reused handle names the new occupant.");
    assert_eq!(list.value(old), Some(&3));
}

#[test]
fn test_handles_stay_stable_across_operations() {
    let mut list = DoublyLinkedList::new();
    let a = list.insert(0, 'a').expect("in range");
    let b = list.insert(1, 'b').expect("in range");
    let c = list.insert(2, 'c').expect("in range");

    list.insert(1, 'x').expect("in range");
    list.remove(0).expect("in range");
    list.verify_links();

    assert_eq!(list.value(a), None, "Only the removed node's handle should die.");
    assert_eq!(list.value(b), Some(&'b'));
    assert_eq!(list.value(c), Some(&'c'));
    assert_eq!(list.get(1), Ok(b), "Surviving handles keep their identity as positions shift.");
}

#[test]
fn test_invariants_across_operation_sequences() {
    let mut list = DoublyLinkedList::new();

    for i in 0..10 {
        list.insert(i / 2, i).expect("in range");
        list.verify_links();
    }

    for position in [9, 0, 4, 0, 5, 0, 3, 0, 1, 0] {
        list.remove(position).expect("in range").expect("non-empty");
        list.verify_links();
    }
    assert!(list.is_empty());
}

#[test]
fn test_ends_and_single_element() {
    let mut list = DoublyLinkedList::new();
    assert_eq!(list.front(), None);

    let only = list.insert(0, 1).expect("in range");
    assert_eq!(list.front(), Some(only), "A single node is both head and tail.");
    assert_eq!(list.back(), Some(only));
    list.verify_links();

    let new_head = list.insert(0, 0).expect("in range");
    let new_tail = list.insert(2, 2).expect("in range");
    assert_eq!(list.front(), Some(new_head));
    assert_eq!(list.back(), Some(new_tail));
    list.verify_links();
}

#[test]
fn test_iteration() {
    let list: DoublyLinkedList<_> = (1..=5).collect();

    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 2, 3, 4, 5]);
    assert_eq!(list.iter().len(), 5);
    assert_eq!(
        list.into_iter().collect::<Vec<_>>(),
        vec![1, 2, 3, 4, 5],
        "The owning iterator should drain head to tail."
    );
}

#[test]
fn test_value_mut() {
    let mut list: DoublyLinkedList<_> = [1, 2, 3].into_iter().collect();
    let handle = list.get(1).expect("in range");

    *list.value_mut(handle).expect("live handle") = 20;
    assert_eq!(list.value(handle), Some(&20));
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 20, 3]);
}

#[test]
fn test_display() {
    let list: DoublyLinkedList<_> = [1, 2, 3].into_iter().collect();
    assert_eq!(format!("{list}"), "(1) <-> (2) <-> (3)");
}
