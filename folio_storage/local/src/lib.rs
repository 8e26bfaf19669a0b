pub use file::{FileStore, FileStoreConfig};
pub use memory::MemoryStore;

mod file;
mod memory;
