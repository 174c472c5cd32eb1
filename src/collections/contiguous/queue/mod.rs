mod array_queue;
mod tests;

pub use array_queue::*;
