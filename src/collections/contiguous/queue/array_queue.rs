use std::cmp;
use std::fmt::{self, Debug, Formatter};

use super::super::GROWTH_FACTOR;
use crate::collections::traits::Queue;
#[doc(inline)]
pub use crate::util::error::EmptyContainer;

/// A FIFO container over a contiguous buffer that grows but never shifts its elements.
///
/// Two cursors move monotonically rightward through the buffer: the read side `head`, and the
/// write side, which is simply the buffer's length. The logical contents are the slots between
/// them, so `size` is `tail - head` and every operation is `O(1)` except a growing `add`, which
/// reallocates and copies.
///
/// Because `remove` only advances `head`, consumed slots keep their values until the queue fully
/// drains (which resets both cursors to 0 and releases everything), or until
/// [`clear`](ArrayQueue::clear) or drop. The buffer never shrinks; the full-drain reset is the
/// only compaction.
///
/// ```
/// use linear_collections::collections::contiguous::ArrayQueue;
///
/// let mut queue = ArrayQueue::with_capacity(1);
/// queue.add(1);
/// queue.add(2); // full: capacity doubles to 2
/// queue.add(3); // full again: capacity doubles to 4
/// assert_eq!(queue.capacity(), 4);
/// assert_eq!(queue.peek(), Ok(&1));
///
/// queue.remove()?;
/// assert_eq!(queue.peek(), Ok(&2));
/// assert_eq!(queue.size(), 2);
/// # Ok::<(), linear_collections::collections::EmptyContainer>(())
/// ```
pub struct ArrayQueue<T> {
    pub(crate) buf: Vec<T>,
    pub(crate) head: usize,
}

impl<T> ArrayQueue<T> {
    /// Creates an empty queue with no allocated buffer.
    pub const fn new() -> ArrayQueue<T> {
        ArrayQueue {
            buf: Vec::new(),
            head: 0,
        }
    }

    /// Creates an empty queue with `capacity` slots pre-allocated.
    pub fn with_capacity(capacity: usize) -> ArrayQueue<T> {
        ArrayQueue {
            buf: Vec::with_capacity(capacity),
            head: 0,
        }
    }

    /// Appends `value` at the back of the queue, reallocating to double capacity first if the
    /// write cursor has reached the end of the buffer.
    pub fn add(&mut self, value: T) {
        if self.buf.len() == self.buf.capacity() {
            self.grow();
        }
        self.buf.push(value);
    }

    /// Discards the front element by advancing the read cursor.
    ///
    /// When this empties the queue, both cursors reset to 0 and all consumed slots are released.
    pub fn remove(&mut self) -> Result<(), EmptyContainer> {
        if self.is_empty() {
            return Err(EmptyContainer);
        }

        self.head += 1;
        if self.head == self.buf.len() {
            self.buf.clear();
            self.head = 0;
        }
        Ok(())
    }

    /// Returns the front element without removing it.
    pub fn peek(&self) -> Result<&T, EmptyContainer> {
        self.buf.get(self.head).ok_or(EmptyContainer)
    }

    pub fn size(&self) -> usize {
        self.buf.len() - self.head
    }

    pub fn is_empty(&self) -> bool {
        self.head == self.buf.len()
    }

    /// The number of slots in the backing buffer, consumed ones included.
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Drops all elements (consumed slots included) and resets both cursors to 0. The buffer's
    /// capacity is retained.
    pub fn clear(&mut self) {
        self.buf.clear();
        self.head = 0;
    }
}

impl<T> ArrayQueue<T> {
    /// Reallocates to double capacity, copying all existing slots so the read cursor stays valid.
    fn grow(&mut self) {
        let new_cap = cmp::max(self.buf.capacity() * GROWTH_FACTOR, 1);
        let mut next = Vec::with_capacity(new_cap);
        next.append(&mut self.buf);
        self.buf = next;
    }
}

impl<T> Queue<T> for ArrayQueue<T> {
    fn add(&mut self, value: T) {
        ArrayQueue::add(self, value);
    }

    fn remove(&mut self) -> Result<(), EmptyContainer> {
        ArrayQueue::remove(self)
    }

    fn peek(&self) -> Result<&T, EmptyContainer> {
        ArrayQueue::peek(self)
    }

    fn size(&self) -> usize {
        ArrayQueue::size(self)
    }

    fn is_empty(&self) -> bool {
        ArrayQueue::is_empty(self)
    }

    fn clear(&mut self) {
        ArrayQueue::clear(self);
    }
}

impl<T> Default for ArrayQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for ArrayQueue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayQueue")
            .field("contents", &&self.buf[self.head..])
            .field("head", &self.head)
            .field("cap", &self.buf.capacity())
            .finish()
    }
}
