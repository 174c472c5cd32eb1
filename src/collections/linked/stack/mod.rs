mod linked_stack;

pub use linked_stack::*;
