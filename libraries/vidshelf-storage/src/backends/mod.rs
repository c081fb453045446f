//! Key-value store backends

mod disk;
mod memory;

pub use disk::RedbStore;
pub use memory::MemoryStore;
