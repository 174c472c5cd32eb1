//! Traits abstracting over the array- and node-backed container variants.

mod container;

pub use container::*;
