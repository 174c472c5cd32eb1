#![cfg(test)]

use super::*;
use crate::util::alloc::DropCounter;

#[test]
fn test_fifo_order() {
    let mut queue = ArrayQueue::with_capacity(8);
    for i in 1..=5 {
        queue.add(i);
        assert_eq!(queue.peek(), Ok(&1), "Peek should keep showing the first element.");
    }

    for i in 1..=5 {
        assert_eq!(queue.peek(), Ok(&i), "Elements should surface in insertion order.");
        assert_eq!(queue.remove(), Ok(()));
    }
    assert!(queue.is_empty());
}

#[test]
fn test_empty_errors() {
    let mut queue = ArrayQueue::<i32>::new();
    assert_eq!(queue.remove(), Err(EmptyContainer), "Remove on empty should fail.");
    assert_eq!(queue.peek(), Err(EmptyContainer), "Peek on empty should fail.");

    queue.add(1);
    assert_eq!(queue.remove(), Ok(()));
    assert_eq!(
        queue.remove(),
        Err(EmptyContainer),
        "Remove should fail again once the queue drains."
    );
}

#[test]
fn test_growth_doubles_capacity() {
    let mut queue = ArrayQueue::with_capacity(1);
    queue.add(1);
    assert_eq!(queue.capacity(), 1);
    queue.add(2);
    assert_eq!(queue.capacity(), 2, "Growth from capacity 1 should double to 2.");
    queue.add(3);
    assert_eq!(queue.capacity(), 4, "Growth from capacity 2 should double to 4.");

    assert_eq!(queue.peek(), Ok(&1), "Growth should not disturb the front element.");
    assert_eq!(queue.size(), 3);

    let mut queue = ArrayQueue::new();
    queue.add(1);
    assert_eq!(queue.capacity(), 1, "Growth from an unallocated buffer should start at 1.");
}

#[test]
fn test_full_drain_resets_cursors() {
    let mut queue = ArrayQueue::with_capacity(4);
    queue.add(1);
    queue.add(2);
    queue.remove().expect("non-empty");
    assert_eq!(queue.head, 1, "A partial drain should leave the read cursor advanced.");

    queue.remove().expect("non-empty");
    assert_eq!(queue.head, 0, "A full drain should reset the read cursor.");
    assert_eq!(queue.buf.len(), 0, "A full drain should reset the write cursor.");
    assert_eq!(queue.capacity(), 4, "The buffer should never shrink.");

    queue.add(9);
    assert_eq!(queue.peek(), Ok(&9), "The queue should be reusable after draining.");
}

#[test]
fn test_consumed_slots_release_lazily() {
    let count = DropCounter::counter();

    let mut queue = ArrayQueue::with_capacity(4);
    queue.add(DropCounter::new(&count));
    queue.add(DropCounter::new(&count));
    queue.add(DropCounter::new(&count));

    queue.remove().expect("non-empty");
    assert_eq!(
        count.get(),
        0,
        "Remove only advances the cursor; the consumed slot keeps its value."
    );

    queue.clear();
    assert_eq!(count.get(), 3, "Clear should release consumed and live slots alike.");
}

#[test]
fn test_clear() {
    let mut queue = ArrayQueue::with_capacity(2);
    queue.add(1);
    queue.add(2);
    queue.add(3);
    queue.remove().expect("non-empty");
    queue.clear();

    assert!(queue.is_empty(), "Clear should remove all elements.");
    assert_eq!(queue.head, 0, "Clear should reset the read cursor.");
    assert_eq!(queue.capacity(), 4, "Clear should retain the grown capacity.");
    assert_eq!(queue.peek(), Err(EmptyContainer));
}
