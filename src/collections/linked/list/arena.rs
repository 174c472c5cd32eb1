use std::fmt::{self, Debug, Formatter};

/// A stable identifier for a node in a [`DoublyLinkedList`], standing in for reference identity.
///
/// A handle is just an index into the list's node arena, so it is `Copy` and comparable with
/// `==`. It stays valid for as long as its node is linked. After the node is removed the handle
/// is dead: accessors return [`None`] for it and
/// [`contains`](super::DoublyLinkedList::contains) returns `false` - but it remains *comparable*
/// against handles captured earlier. Only once a later insert reuses the freed slot does the
/// handle start naming the new occupant.
///
/// Handles are meaningful only for the list that produced them.
///
/// [`DoublyLinkedList`]: super::DoublyLinkedList
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeHandle(pub(crate) usize);

impl Debug for NodeHandle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "NodeHandle({})", self.0)
    }
}

/// One unit of a [`DoublyLinkedList`](super::DoublyLinkedList): a value and its two neighbor
/// links. Pure storage, no behavior.
pub(crate) struct Node<T> {
    pub value: T,
    pub prev: Option<NodeHandle>,
    pub next: Option<NodeHandle>,
}

pub(crate) enum Slot<T> {
    Occupied(Node<T>),
    Vacant { next_free: Option<NodeHandle> },
}

use Slot::*;

/// Flat backing storage for list nodes, addressed by [`NodeHandle`].
///
/// Vacant slots form an intrusive free list so allocation reuses the most recently freed slot
/// before growing the backing vector. Handles are therefore stable: a slot never moves, and is
/// only repurposed by an allocation after it was freed.
pub(crate) struct Arena<T> {
    slots: Vec<Slot<T>>,
    free: Option<NodeHandle>,
}

impl<T> Arena<T> {
    pub const fn new() -> Arena<T> {
        Arena {
            slots: Vec::new(),
            free: None,
        }
    }

    pub fn alloc(&mut self, node: Node<T>) -> NodeHandle {
        match self.free {
            Some(handle) => {
                let slot = &mut self.slots[handle.0];
                match *slot {
                    Vacant { next_free } => self.free = next_free,
                    // The free list only ever points at vacant slots.
                    Occupied(_) => unreachable!(),
                }
                *slot = Occupied(node);
                handle
            },
            None => {
                self.slots.push(Occupied(node));
                NodeHandle(self.slots.len() - 1)
            },
        }
    }

    /// Empties the slot, pushing it onto the free list, and returns the node it held.
    ///
    /// # Panics
    /// Panics if `handle` names a vacant slot; callers only free handles they have just unlinked.
    pub fn free(&mut self, handle: NodeHandle) -> Node<T> {
        let slot = std::mem::replace(
            &mut self.slots[handle.0],
            Vacant { next_free: self.free },
        );
        self.free = Some(handle);
        match slot {
            Occupied(node) => node,
            Vacant { .. } => panic!("freed a vacant arena slot"),
        }
    }

    pub fn get(&self, handle: NodeHandle) -> Option<&Node<T>> {
        match self.slots.get(handle.0) {
            Some(Occupied(node)) => Some(node),
            _ => None,
        }
    }

    pub fn get_mut(&mut self, handle: NodeHandle) -> Option<&mut Node<T>> {
        match self.slots.get_mut(handle.0) {
            Some(Occupied(node)) => Some(node),
            _ => None,
        }
    }

    /// The node behind a handle the caller knows to be live (reachable from the list's head).
    ///
    /// # Panics
    /// Panics if the handle is dead; list internals never hold dead handles.
    pub fn node(&self, handle: NodeHandle) -> &Node<T> {
        match self.get(handle) {
            Some(node) => node,
            None => panic!("dead handle in list chain"),
        }
    }

    /// Mutable counterpart of [`node`](Arena::node).
    ///
    /// # Panics
    /// Panics if the handle is dead; list internals never hold dead handles.
    pub fn node_mut(&mut self, handle: NodeHandle) -> &mut Node<T> {
        match self.get_mut(handle) {
            Some(node) => node,
            None => panic!("dead handle in list chain"),
        }
    }
}
