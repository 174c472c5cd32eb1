#[cfg(test)]
pub mod alloc;
pub mod error;
