use crate::util::error::EmptyContainer;

/// A last-in-first-out container.
///
/// Implemented by both [`ArrayStack`](crate::collections::contiguous::ArrayStack) and
/// [`LinkedStack`](crate::collections::linked::LinkedStack), which lets the LIFO laws be tested
/// once against each backing.
pub trait Stack<T> {
    /// Places `value` on top of the stack. Whether a full stack grows or drops the value is an
    /// implementation property, so no error is surfaced here.
    fn push(&mut self, value: T);

    /// Removes and returns the top element.
    fn pop(&mut self) -> Result<T, EmptyContainer>;

    /// Returns the top element without removing it.
    fn peek(&self) -> Result<&T, EmptyContainer>;

    /// The number of elements currently stored.
    fn size(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Removes all elements, retaining any allocated storage.
    fn clear(&mut self);
}

/// A first-in-first-out container.
///
/// Implemented by both [`ArrayQueue`](crate::collections::contiguous::ArrayQueue) and
/// [`LinkedQueue`](crate::collections::linked::LinkedQueue).
///
/// `remove` discards the front element rather than returning it; values are observed through
/// [`peek`](Queue::peek) first. This keeps `remove` cheap for the array backing, which leaves
/// consumed slots in place instead of shifting.
pub trait Queue<T> {
    /// Appends `value` at the back of the queue.
    fn add(&mut self, value: T);

    /// Discards the front element.
    fn remove(&mut self) -> Result<(), EmptyContainer>;

    /// Returns the front element without removing it.
    fn peek(&self) -> Result<&T, EmptyContainer>;

    /// The number of elements currently stored.
    fn size(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Removes all elements, retaining any allocated storage.
    fn clear(&mut self);
}
