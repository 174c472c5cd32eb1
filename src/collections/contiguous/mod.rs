//! Array-backed containers. Namely [`ArrayStack`] and [`ArrayQueue`], which keep their elements
//! in a contiguous buffer behind one or two cursor indices.
//!
//! The two deliberately diverge on what happens when the buffer fills: [`ArrayQueue`] always
//! reallocates to double capacity, while [`ArrayStack`] consults its [`OnFull`] policy and by
//! default drops the pushed value on the floor.

pub mod queue;
pub mod stack;

#[doc(inline)]
pub use queue::ArrayQueue;
#[doc(inline)]
pub use stack::{ArrayStack, OnFull};

pub(crate) const GROWTH_FACTOR: usize = 2;
