//! Repository implementations.

pub mod memory;
pub mod user;

pub use memory::MemoryRepository;
pub use user::{MemoryUserDirectory, UserDirectory};
