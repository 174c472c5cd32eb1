use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant};

/// Returned when `pop`, `remove` or `peek` is invoked on a stack or queue with no elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyContainer;

impl Display for EmptyContainer {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Container is empty!")
    }
}

impl Error for EmptyContainer {}

/// Returned when a list position falls outside the valid bound for the operation.
///
/// For `get` and `remove` the valid range is `0..len`; for `insert` it is `0..=len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfRange {
    pub position: usize,
    pub len: usize,
}

impl Display for OutOfRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Position {} out of range for list with {} elements!", self.position, self.len)
    }
}

impl Error for OutOfRange {}

/// Combined error type for callers working across container kinds.
///
/// Both component errors convert into it, so `?` works uniformly:
///
/// ```
/// use linear_collections::collections::ContainerError;
/// use linear_collections::collections::contiguous::ArrayQueue;
/// use linear_collections::collections::linked::DoublyLinkedList;
///
/// fn drain_both(
///     queue: &mut ArrayQueue<i32>,
///     list: &mut DoublyLinkedList<i32>,
/// ) -> Result<(), ContainerError> {
///     queue.remove()?;
///     list.get(0)?;
///     Ok(())
/// }
///
/// let err = drain_both(&mut ArrayQueue::new(), &mut DoublyLinkedList::new()).unwrap_err();
/// assert!(err.is_empty_container());
/// ```
#[derive(Debug, Display, Error, From, IsVariant)]
pub enum ContainerError {
    EmptyContainer(EmptyContainer),
    OutOfRange(OutOfRange),
}
