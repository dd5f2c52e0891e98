//! Post stores that need no external service.

mod memory;

pub use memory::InMemoryPostStore;
