use std::fmt::{self, Debug, Formatter};

use crate::collections::traits::Stack;
#[doc(inline)]
pub use crate::util::error::EmptyContainer;

struct Node<T> {
    value: T,
    next: Option<Box<Node<T>>>,
}

/// A LIFO container over a singly-linked chain of owned nodes.
///
/// Every operation works at the head, so `push`, `pop` and `peek` are all `O(1)` and the stack
/// never needs more than one link direction. The element count is tracked explicitly rather than
/// derived by walking the chain.
///
/// ```
/// use linear_collections::collections::linked::LinkedStack;
///
/// let mut stack = LinkedStack::new();
/// stack.push(1);
/// stack.push(2);
/// assert_eq!(stack.pop(), Ok(2));
/// assert_eq!(stack.pop(), Ok(1));
/// assert!(stack.pop().is_err());
/// ```
pub struct LinkedStack<T> {
    head: Option<Box<Node<T>>>,
    len: usize,
}

impl<T> LinkedStack<T> {
    pub const fn new() -> LinkedStack<T> {
        LinkedStack {
            head: None,
            len: 0,
        }
    }

    /// Prepends `value` as the new head of the chain.
    pub fn push(&mut self, value: T) {
        self.head = Some(Box::new(Node {
            value,
            next: self.head.take(),
        }));
        self.len += 1;
    }

    /// Removes and returns the top element.
    pub fn pop(&mut self) -> Result<T, EmptyContainer> {
        let node = self.head.take().ok_or(EmptyContainer)?;
        self.head = node.next;
        self.len -= 1;
        Ok(node.value)
    }

    /// Returns the top element without removing it.
    pub fn peek(&self) -> Result<&T, EmptyContainer> {
        match &self.head {
            Some(node) => Ok(&node.value),
            None => Err(EmptyContainer),
        }
    }

    pub const fn size(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Drops the whole chain and resets the counter.
    pub fn clear(&mut self) {
        // Unlink iteratively so a long chain can't overflow the stack in Box's recursive drop.
        let mut curr = self.head.take();
        while let Some(mut node) = curr {
            curr = node.next.take();
        }
        self.len = 0;
    }
}

impl<T> Stack<T> for LinkedStack<T> {
    fn push(&mut self, value: T) {
        LinkedStack::push(self, value);
    }

    fn pop(&mut self) -> Result<T, EmptyContainer> {
        LinkedStack::pop(self)
    }

    fn peek(&self) -> Result<&T, EmptyContainer> {
        LinkedStack::peek(self)
    }

    fn size(&self) -> usize {
        LinkedStack::size(self)
    }

    fn is_empty(&self) -> bool {
        LinkedStack::is_empty(self)
    }

    fn clear(&mut self) {
        LinkedStack::clear(self);
    }
}

impl<T> Default for LinkedStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedStack<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Debug> Debug for LinkedStack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        struct Contents<'a, T>(&'a LinkedStack<T>);

        impl<T: Debug> Debug for Contents<'_, T> {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                let mut list = f.debug_list();
                let mut curr = &self.0.head;
                while let Some(node) = curr {
                    list.entry(&node.value);
                    curr = &node.next;
                }
                list.finish()
            }
        }

        f.debug_struct("LinkedStack")
            .field("contents", &Contents(self))
            .field("len", &self.len)
            .finish()
    }
}
