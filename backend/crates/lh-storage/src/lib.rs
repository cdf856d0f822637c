//! Persistence area: a durable key-value store addressed by fixed string
//! keys and scoped to one profile.

pub mod error;
pub mod file_store;
pub mod key_value_store;
pub mod memory_store;

pub use error::{Result, StorageError};
pub use file_store::FileStore;
pub use key_value_store::KeyValueStore;
pub use memory_store::MemoryStore;

const FILE_EXTENSION: &str = "json";
const TEMP_SUFFIX: &str = "tmp";
