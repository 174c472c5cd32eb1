use std::cmp;
use std::fmt::{self, Debug, Formatter};

use super::super::GROWTH_FACTOR;
use crate::collections::traits::Stack;
#[doc(inline)]
pub use crate::util::error::EmptyContainer;

/// What [`ArrayStack::push`] does when the stack is already at capacity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OnFull {
    /// Discard the pushed value silently. The default: a bounded stack stays bounded.
    #[default]
    Drop,
    /// Reallocate to double capacity, then push.
    Grow,
}

/// A LIFO container over a contiguous buffer, bounded by default.
///
/// The top of the stack is a single cursor: the buffer's length. `size` is therefore `O(1)` and
/// every operation except a growing `push` avoids touching elements other than the top.
///
/// # Capacity policy
/// Unlike [`ArrayQueue`](crate::collections::contiguous::ArrayQueue), which always grows, a full
/// ArrayStack consults its [`OnFull`] policy. **Under the default [`OnFull::Drop`], pushing into
/// a full stack is a silent no-op** - not an error, not a panic, the value is simply discarded.
/// The asymmetry with the queue lives in an explicit policy rather than being hard-coded, so it
/// is visible at the construction site:
///
/// ```
/// use linear_collections::collections::contiguous::{ArrayStack, OnFull};
///
/// let mut bounded = ArrayStack::new(2);
/// bounded.push(1);
/// bounded.push(2);
/// bounded.push(3); // full: dropped
/// assert_eq!(bounded.size(), 2);
/// assert_eq!(bounded.peek(), Ok(&2));
///
/// let mut growing = ArrayStack::with_policy(2, OnFull::Grow);
/// growing.push(1);
/// growing.push(2);
/// growing.push(3); // full: capacity doubles to 4
/// assert_eq!(growing.size(), 3);
/// assert_eq!(growing.capacity(), 4);
/// ```
pub struct ArrayStack<T> {
    buf: Vec<T>,
    cap: usize,
    on_full: OnFull,
}

impl<T> ArrayStack<T> {
    /// Creates a stack bounded at `capacity` elements, with the [`OnFull::Drop`] policy.
    pub fn new(capacity: usize) -> ArrayStack<T> {
        ArrayStack::with_policy(capacity, OnFull::Drop)
    }

    /// Creates a stack with `capacity` initial slots and the given full-stack policy.
    pub fn with_policy(capacity: usize, on_full: OnFull) -> ArrayStack<T> {
        ArrayStack {
            buf: Vec::with_capacity(capacity),
            cap: capacity,
            on_full,
        }
    }

    /// Places `value` on top of the stack.
    ///
    /// When the stack is full this either discards `value` or doubles the capacity first,
    /// according to the [`OnFull`] policy chosen at construction.
    pub fn push(&mut self, value: T) {
        if self.buf.len() == self.cap {
            match self.on_full {
                OnFull::Drop => return,
                OnFull::Grow => self.grow(),
            }
        }
        self.buf.push(value);
    }

    /// Removes and returns the top element.
    pub fn pop(&mut self) -> Result<T, EmptyContainer> {
        self.buf.pop().ok_or(EmptyContainer)
    }

    /// Returns the top element without removing it.
    pub fn peek(&self) -> Result<&T, EmptyContainer> {
        self.buf.last().ok_or(EmptyContainer)
    }

    pub fn size(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// The number of elements the stack accepts before its [`OnFull`] policy applies.
    pub const fn capacity(&self) -> usize {
        self.cap
    }

    /// Drops all elements. The capacity (and any grown buffer) is retained.
    pub fn clear(&mut self) {
        self.buf.clear();
    }
}

impl<T> ArrayStack<T> {
    fn grow(&mut self) {
        let new_cap = cmp::max(self.cap * GROWTH_FACTOR, 1);
        self.buf.reserve_exact(new_cap - self.buf.len());
        self.cap = new_cap;
    }
}

impl<T> Stack<T> for ArrayStack<T> {
    fn push(&mut self, value: T) {
        ArrayStack::push(self, value);
    }

    fn pop(&mut self) -> Result<T, EmptyContainer> {
        ArrayStack::pop(self)
    }

    fn peek(&self) -> Result<&T, EmptyContainer> {
        ArrayStack::peek(self)
    }

    fn size(&self) -> usize {
        ArrayStack::size(self)
    }

    fn is_empty(&self) -> bool {
        ArrayStack::is_empty(self)
    }

    fn clear(&mut self) {
        ArrayStack::clear(self);
    }
}

impl<T> Default for ArrayStack<T> {
    /// An empty stack with capacity 0. Under [`OnFull::Drop`] every push is discarded, so this is
    /// mostly useful with a policy change or as a placeholder.
    fn default() -> Self {
        Self::new(0)
    }
}

impl<T: Debug> Debug for ArrayStack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayStack")
            .field("contents", &self.buf)
            .field("cap", &self.cap)
            .field("on_full", &self.on_full)
            .finish()
    }
}
