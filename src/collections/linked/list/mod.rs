mod arena;
mod doubly_linked_list;
mod iter;
mod tests;

pub use arena::NodeHandle;
pub(crate) use arena::{Arena, Node};
pub use doubly_linked_list::*;
pub use iter::*;
