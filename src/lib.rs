//! Classic linear data structures, written from scratch as a learning exercise.
//!
//! # Purpose
//! This crate builds the four classic stack/queue pairings (array-backed and
//! linked-node-backed) plus a positional [`DoublyLinkedList`], with no expectation of production
//! use. The point is to work through the pointer and index bookkeeping by hand rather than
//! reaching for [`std::collections`], and to pin down every edge case (empty, single element,
//! head, tail, middle) with tests instead of hand-waving.
//!
//! # Method
//! The doubly linked list is the interesting part. Instead of `Rc<RefCell<...>>` cycles or a maze
//! of raw pointers, nodes live in a flat arena owned by the list and link to each other through
//! stable [`NodeHandle`] indices. A handle substitutes for reference identity: it can be stored,
//! compared and checked for membership long after the borrow that produced it has ended.
//!
//! The stack and queue variants are deliberately thin. They exist to contrast the two backings:
//! the array queue grows by doubling and never shifts elements, while the array stack is bounded
//! and (by default) silently drops pushes at capacity. That asymmetry is kept visible through the
//! [`OnFull`] policy rather than hidden in the implementation.
//!
//! # Error Handling
//! Contract violations never surface as panics or unchecked dereferences; they come back as
//! typed [`Result`]s: [`EmptyContainer`] for draining an empty stack or queue, and
//! [`OutOfRange`] for list positions outside the valid bound. Errors are plain structs with a
//! combining enum for callers that mix container kinds; nothing panics on a contract violation.
//!
//! [`DoublyLinkedList`]: collections::linked::DoublyLinkedList
//! [`NodeHandle`]: collections::linked::NodeHandle
//! [`OnFull`]: collections::contiguous::OnFull
//! [`EmptyContainer`]: collections::EmptyContainer
//! [`OutOfRange`]: collections::OutOfRange

#![warn(clippy::missing_panics_doc)]
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;

pub(crate) mod util;
