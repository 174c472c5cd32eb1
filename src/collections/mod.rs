//! The four classic linear containers plus the positional doubly linked list.
//!
//! # Purpose
//! Each container family gets its own submodule: [`contiguous`] for the array-backed stack and
//! queue, [`linked`] for the node-backed ones and the [`DoublyLinkedList`](linked::DoublyLinkedList)
//! itself. The [`traits`] module abstracts over the two backings so the LIFO/FIFO laws can be
//! stated (and tested) once.

#[cfg(feature = "contiguous")]
pub mod contiguous;
#[cfg(feature = "linked")]
pub mod linked;
#[cfg(feature = "traits")]
pub mod traits;

#[doc(inline)]
pub use crate::util::error::{ContainerError, EmptyContainer, OutOfRange};
