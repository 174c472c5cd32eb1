#![cfg(test)]

use super::*;
use crate::util::alloc::DropCounter;

#[test]
fn test_lifo_order() {
    let mut stack = ArrayStack::new(8);
    for i in 1..=5 {
        stack.push(i);
    }

    for i in (1..=5).rev() {
        assert_eq!(stack.peek(), Ok(&i), "Peek should show the most recent push.");
        assert_eq!(stack.pop(), Ok(i), "Pop should return pushes in reverse order.");
    }
    assert!(stack.is_empty());
}

#[test]
fn test_empty_errors() {
    let mut stack = ArrayStack::<i32>::new(4);
    assert_eq!(stack.pop(), Err(EmptyContainer), "Pop on empty should fail.");
    assert_eq!(stack.peek(), Err(EmptyContainer), "Peek on empty should fail.");

    stack.push(1);
    assert_eq!(stack.pop(), Ok(1));
    assert_eq!(
        stack.pop(),
        Err(EmptyContainer),
        "Pop should fail again once the stack drains."
    );
}

#[test]
fn test_push_at_capacity_drops() {
    let mut stack = ArrayStack::new(2);
    stack.push(1);
    stack.push(2);
    stack.push(3);

    assert_eq!(stack.size(), 2, "Third push into a capacity-2 stack should be a no-op.");
    assert_eq!(stack.peek(), Ok(&2), "The dropped value should not replace the top.");
    assert_eq!(stack.capacity(), 2, "Dropping should not grow the buffer.");

    let count = DropCounter::counter();
    let mut stack = ArrayStack::new(1);
    stack.push(DropCounter::new(&count));
    stack.push(DropCounter::new(&count));
    assert_eq!(count.get(), 1, "A dropped push should release its value immediately.");
}

#[test]
fn test_grow_policy_doubles() {
    let mut stack = ArrayStack::with_policy(1, OnFull::Grow);
    stack.push(1);
    stack.push(2);
    assert_eq!(stack.capacity(), 2, "Growing from capacity 1 should double to 2.");
    stack.push(3);
    assert_eq!(stack.capacity(), 4, "Growing from capacity 2 should double to 4.");
    assert_eq!(stack.size(), 3, "No pushes should be lost under OnFull::Grow.");

    let mut stack = ArrayStack::with_policy(0, OnFull::Grow);
    stack.push(1);
    assert_eq!(stack.capacity(), 1, "Growth from capacity 0 should bottom out at 1.");
    assert_eq!(stack.peek(), Ok(&1));
}

#[test]
fn test_clear() {
    let mut stack = ArrayStack::new(4);
    stack.push(1);
    stack.push(2);
    stack.clear();

    assert!(stack.is_empty(), "Clear should remove all elements.");
    assert_eq!(stack.capacity(), 4, "Clear should retain the capacity.");
    assert_eq!(stack.pop(), Err(EmptyContainer));

    stack.push(7);
    assert_eq!(stack.peek(), Ok(&7), "The stack should be reusable after clear.");
}
