use std::fmt::{self, Debug, Display, Formatter};

use super::{Arena, Node, NodeHandle};
use super::Iter;
#[doc(inline)]
pub use crate::util::error::OutOfRange;

/// A list with links in both directions, positional access and identity-based membership.
///
/// Nodes are allocated from a flat arena owned by the list and addressed by [`NodeHandle`], so
/// there are no ownership cycles and no raw pointers; a handle plays the role a node reference
/// plays in pointer-based implementations. Positions are 0-based, counted from the head, and
/// positional operations traverse forward from the head.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the DoublyLinkedList.
/// - `i`: The position of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front` | `O(1)` |
/// | `back` | `O(1)` |
/// | `get` | `O(i)` |
/// | `insert` | `O(i)`, `O(1)` at either end |
/// | `remove` | `O(i)`, `O(1)` at either end |
/// | `contains` | `O(n)` |
/// | `value` | `O(1)` |
///
/// # Examples
/// ```
/// use linear_collections::collections::linked::DoublyLinkedList;
///
/// let mut list = DoublyLinkedList::new();
/// list.insert(0, 1)?;
/// list.insert(0, 2)?;
/// list.insert(2, 3)?;
/// // [2] <-> [1] <-> [3]
/// assert_eq!(list.value(list.get(0)?), Some(&2));
/// assert_eq!(list.value(list.get(1)?), Some(&1));
/// assert_eq!(list.value(list.get(2)?), Some(&3));
/// # Ok::<(), linear_collections::collections::OutOfRange>(())
/// ```
pub struct DoublyLinkedList<T> {
    pub(crate) arena: Arena<T>,
    pub(crate) head: Option<NodeHandle>,
    pub(crate) tail: Option<NodeHandle>,
    pub(crate) len: usize,
}

/// A node detached from a [`DoublyLinkedList`] by [`remove`](DoublyLinkedList::remove).
#[derive(Debug, PartialEq, Eq)]
pub struct Removed<T> {
    /// The handle the node held while linked. It no longer resolves, but stays comparable
    /// against handles captured earlier, until the slot is reused by a later insert.
    pub handle: NodeHandle,
    /// The value the node carried.
    pub value: T,
}

impl<T> DoublyLinkedList<T> {
    pub const fn new() -> DoublyLinkedList<T> {
        DoublyLinkedList {
            arena: Arena::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The handle of the first node, if any.
    pub const fn front(&self) -> Option<NodeHandle> {
        self.head
    }

    /// The handle of the last node, if any.
    pub const fn back(&self) -> Option<NodeHandle> {
        self.tail
    }

    /// Returns the handle of the node at `position`, walking forward from the head.
    pub fn get(&self, position: usize) -> Result<NodeHandle, OutOfRange> {
        match self.head {
            Some(head) if position < self.len => Ok(self.seek(head, position)),
            _ => Err(OutOfRange { position, len: self.len }),
        }
    }

    /// The value behind `handle`, or [`None`] if the handle is dead (its node was removed and
    /// the slot has not been reused).
    pub fn value(&self, handle: NodeHandle) -> Option<&T> {
        Some(&self.arena.get(handle)?.value)
    }

    /// Mutable counterpart of [`value`](DoublyLinkedList::value).
    pub fn value_mut(&mut self, handle: NodeHandle) -> Option<&mut T> {
        Some(&mut self.arena.get_mut(handle)?.value)
    }

    /// Inserts a new node holding `value` so that it ends up at `position`, and returns its
    /// handle. Valid positions run from 0 (new head) through `len` (new tail) inclusive.
    pub fn insert(&mut self, position: usize, value: T) -> Result<NodeHandle, OutOfRange> {
        if position > self.len {
            return Err(OutOfRange { position, len: self.len });
        }

        let handle = match (self.head, position) {
            (None, _) => {
                let handle = self.arena.alloc(Node { value, prev: None, next: None });
                self.head = Some(handle);
                self.tail = Some(handle);
                handle
            },
            (Some(head), 0) => {
                let handle = self.arena.alloc(Node { value, prev: None, next: Some(head) });
                self.arena.node_mut(head).prev = Some(handle);
                self.head = Some(handle);
                handle
            },
            (Some(_), pos) if pos == self.len => {
                // UNWRAP: tail is present whenever head is.
                let tail = self.tail.unwrap();
                let handle = self.arena.alloc(Node { value, prev: Some(tail), next: None });
                self.arena.node_mut(tail).next = Some(handle);
                self.tail = Some(handle);
                handle
            },
            (Some(head), pos) => {
                let target = self.seek(head, pos);
                // UNWRAP: target is neither head nor past the tail here, so it has a prev.
                let prev = self.arena.node(target).prev.unwrap();
                let handle = self.arena.alloc(Node {
                    value,
                    prev: Some(prev),
                    next: Some(target),
                });
                self.arena.node_mut(prev).next = Some(handle);
                self.arena.node_mut(target).prev = Some(handle);
                handle
            },
        };

        self.len += 1;
        Ok(handle)
    }

    /// Detaches and returns the node at `position`, rewiring its neighbors.
    ///
    /// On an empty list this returns `Ok(None)` - "nothing to remove" is not a contract
    /// violation. On a non-empty list, `position` must be within `0..len`.
    pub fn remove(&mut self, position: usize) -> Result<Option<Removed<T>>, OutOfRange> {
        let Some(head) = self.head else {
            return Ok(None);
        };
        if position >= self.len {
            return Err(OutOfRange { position, len: self.len });
        }

        let handle = if self.len == 1 {
            self.head = None;
            self.tail = None;
            head
        } else if position == 0 {
            // UNWRAP: len is at least 2, so the head has a next.
            let next = self.arena.node(head).next.unwrap();
            self.arena.node_mut(next).prev = None;
            self.head = Some(next);
            head
        } else if position == self.len - 1 {
            // UNWRAP: tail is present whenever head is.
            let tail = self.tail.unwrap();
            // UNWRAP: len is at least 2, so the tail has a prev.
            let prev = self.arena.node(tail).prev.unwrap();
            self.arena.node_mut(prev).next = None;
            self.tail = Some(prev);
            tail
        } else {
            let target = self.seek(head, position);
            let node = self.arena.node(target);
            // UNWRAP: head and tail positions matched the branches above, so both links exist.
            let (prev, next) = (node.prev.unwrap(), node.next.unwrap());
            self.arena.node_mut(prev).next = Some(next);
            self.arena.node_mut(next).prev = Some(prev);
            target
        };

        self.len -= 1;
        let node = self.arena.free(handle);
        Ok(Some(Removed { handle, value: node.value }))
    }

    /// Whether the node behind `handle` is currently reachable from the head.
    ///
    /// This is an identity check (handle comparison), not a value comparison: two nodes holding
    /// equal values are still distinct. Linear in the length of the list.
    pub fn contains(&self, handle: NodeHandle) -> bool {
        let mut curr = self.head;
        while let Some(h) = curr {
            if h == handle {
                return true;
            }
            curr = self.arena.node(h).next;
        }
        false
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }
}

impl<T> DoublyLinkedList<T> {
    /// Walks `position` steps forward from `start`. Callers have checked `position < len`.
    pub(crate) fn seek(&self, start: NodeHandle, position: usize) -> NodeHandle {
        let mut curr = start;
        for _ in 0..position {
            // UNWRAP: the caller checked the position against len.
            curr = self.arena.node(curr).next.unwrap();
        }
        curr
    }

    /// Asserts the chain invariants: the forward walk from head visits exactly `len` nodes and
    /// ends at tail, every link has a matching back-link, and the end links are clear.
    pub(crate) fn verify_links(&self) {
        let (Some(head), Some(tail)) = (self.head, self.tail) else {
            assert!(self.head.is_none() && self.tail.is_none() && self.len == 0);
            return;
        };

        assert!(self.arena.node(head).prev.is_none());
        assert!(self.arena.node(tail).next.is_none());

        let mut count = 1;
        let mut curr = head;
        while let Some(next) = self.arena.node(curr).next {
            assert!(self.arena.node(next).prev == Some(curr));
            curr = next;
            count += 1;
        }
        assert!(curr == tail);
        assert_eq!(count, self.len);

        let mut count = 1;
        let mut curr = tail;
        while let Some(prev) = self.arena.node(curr).prev {
            assert!(self.arena.node(prev).next == Some(curr));
            curr = prev;
            count += 1;
        }
        assert!(curr == head);
        assert_eq!(count, self.len);
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = DoublyLinkedList::new();
        for item in iter {
            let position = list.len;
            // UNWRAP: inserting at len is always in range.
            list.insert(position, item).unwrap();
        }
        list
    }
}

impl<T: Debug> Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        struct Contents<'a, T>(&'a DoublyLinkedList<T>);

        impl<T: Debug> Debug for Contents<'_, T> {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                f.debug_list().entries(self.0.iter()).finish()
            }
        }

        f.debug_struct("DoublyLinkedList")
            .field("contents", &Contents(self))
            .field("len", &self.len)
            .finish()
    }
}

impl<T: Debug> Display for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({})",
            self.iter()
                .map(|i| format!("{i:?}"))
                .collect::<Vec<String>>()
                .join(") <-> (")
        )
    }
}
