mod linked_queue;

pub use linked_queue::*;
