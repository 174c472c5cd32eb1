//! Linked collection types. Revolves around the arena-backed [`DoublyLinkedList`], with
//! [`LinkedStack`] and [`LinkedQueue`] as independent singly-linked peers.

pub mod list;
pub mod queue;
pub mod stack;

#[doc(inline)]
pub use list::{DoublyLinkedList, NodeHandle, Removed};
#[doc(inline)]
pub use queue::LinkedQueue;
#[doc(inline)]
pub use stack::LinkedStack;
