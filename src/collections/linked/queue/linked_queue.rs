use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::collections::traits::Queue;
#[doc(inline)]
pub use crate::util::error::EmptyContainer;

pub(crate) type Link<T> = Option<NodePtr<T>>;

// NOTE: Nodes are allocated through Box and immediately leaked into a NonNull. The queue never
// holds a Box and a derived pointer at the same time; every node is reached exclusively through
// NodePtr copies until take_node reclaims it.

#[derive(Debug)]
pub(crate) struct NodePtr<T>(NonNull<Node<T>>);

impl<T> NodePtr<T> {
    pub fn from_node(node: Node<T>) -> NodePtr<T> {
        NodePtr(NonNull::from(Box::leak(Box::new(node))))
    }

    /// Moves the node off the heap, deallocating its slot. The caller must ensure no other copy
    /// of this pointer is dereferenced afterwards.
    pub fn take_node(self) -> Node<T> {
        // SAFETY: The pointer came from Box::leak in from_node and is reclaimed exactly once;
        // remove, clear and Drop each unlink a node before taking it.
        unsafe { *Box::from_raw(self.0.as_ptr()) }
    }

    pub fn value<'a>(&self) -> &'a T {
        // SAFETY: The node is live for as long as any NodePtr to it is held by the queue.
        unsafe { &(*self.0.as_ptr()).value }
    }

    pub fn next<'a>(&self) -> &'a Link<T> {
        // SAFETY: As for value.
        unsafe { &(*self.0.as_ptr()).next }
    }

    #[allow(clippy::mut_from_ref)]
    pub fn next_mut<'a>(&self) -> &'a mut Link<T> {
        // SAFETY: As for value; callers hold exclusive access to the queue while relinking.
        unsafe { &mut (*self.0.as_ptr()).next }
    }
}

impl<T> Clone for NodePtr<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodePtr<T> {}

impl<T> PartialEq for NodePtr<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

pub(crate) struct Node<T> {
    pub value: T,
    pub next: Link<T>,
}

/// A FIFO container over a singly-linked chain of heap nodes.
///
/// Both ends are plain node pointers: the chain is reached from `head`, and a cursor into the
/// last node makes `add` `O(1)` without a second link direction. The element count is tracked
/// explicitly - with only forward links there is no `O(1)` way to derive it.
///
/// Emptiness is judged by the head alone. When `remove` drains the last node the tail cursor is
/// cleared along with it, so a cursor into a freed node never survives.
///
/// ```
/// use linear_collections::collections::linked::LinkedQueue;
///
/// let mut queue = LinkedQueue::new();
/// queue.add(1);
/// queue.add(2);
/// assert_eq!(queue.peek(), Ok(&1));
/// queue.remove()?;
/// assert_eq!(queue.peek(), Ok(&2));
/// # Ok::<(), linear_collections::collections::EmptyContainer>(())
/// ```
pub struct LinkedQueue<T> {
    pub(crate) head: Link<T>,
    pub(crate) tail: Link<T>,
    pub(crate) len: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> LinkedQueue<T> {
    pub const fn new() -> LinkedQueue<T> {
        LinkedQueue {
            head: None,
            tail: None,
            len: 0,
            _phantom: PhantomData,
        }
    }

    /// Appends `value` at the back of the chain.
    pub fn add(&mut self, value: T) {
        let node = NodePtr::from_node(Node { value, next: None });

        match self.tail {
            Some(tail) => *tail.next_mut() = Some(node),
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.len += 1;
    }

    /// Discards the front element. Clears the tail cursor when this empties the chain.
    pub fn remove(&mut self) -> Result<(), EmptyContainer> {
        let node = self.head.take().ok_or(EmptyContainer)?.take_node();
        self.head = node.next;
        if self.head.is_none() {
            self.tail = None;
        }
        self.len -= 1;
        Ok(())
    }

    /// Returns the front element without removing it.
    pub fn peek(&self) -> Result<&T, EmptyContainer> {
        match &self.head {
            Some(node) => Ok(node.value()),
            None => Err(EmptyContainer),
        }
    }

    pub const fn size(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Drops the whole chain and resets the tail cursor and counter.
    pub fn clear(&mut self) {
        let mut curr = self.head.take();
        while let Some(ptr) = curr {
            curr = ptr.take_node().next;
        }
        self.tail = None;
        self.len = 0;
    }
}

impl<T> Queue<T> for LinkedQueue<T> {
    fn add(&mut self, value: T) {
        LinkedQueue::add(self, value);
    }

    fn remove(&mut self) -> Result<(), EmptyContainer> {
        LinkedQueue::remove(self)
    }

    fn peek(&self) -> Result<&T, EmptyContainer> {
        LinkedQueue::peek(self)
    }

    fn size(&self) -> usize {
        LinkedQueue::size(self)
    }

    fn is_empty(&self) -> bool {
        LinkedQueue::is_empty(self)
    }

    fn clear(&mut self) {
        LinkedQueue::clear(self);
    }
}

impl<T> Default for LinkedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedQueue<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

// SAFETY: Both cursors point into the chain this queue exclusively owns, so a LinkedQueue is a
// self-contained owner of its nodes and can move between threads whenever T can.
unsafe impl<T: Send> Send for LinkedQueue<T> {}
// SAFETY: The safe API never mutates through a shared reference; the links are only written
// through &mut self.
unsafe impl<T: Sync> Sync for LinkedQueue<T> {}

impl<T: Debug> Debug for LinkedQueue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        struct Contents<'a, T>(&'a LinkedQueue<T>);

        impl<T: Debug> Debug for Contents<'_, T> {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                let mut list = f.debug_list();
                let mut curr = self.0.head;
                while let Some(ptr) = curr {
                    list.entry(ptr.value());
                    curr = *ptr.next();
                }
                list.finish()
            }
        }

        f.debug_struct("LinkedQueue")
            .field("contents", &Contents(self))
            .field("len", &self.len)
            .finish()
    }
}
