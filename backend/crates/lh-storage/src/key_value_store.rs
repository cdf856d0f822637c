use crate::Result as StorageErrorResult;

/// Durable string-to-string storage.
///
/// Values are opaque to the store; callers own their encoding. Every
/// operation completes before it returns, so a successful `set` is
/// visible to the next `get` on the same store.
pub trait KeyValueStore: Send + Sync {
    /// Read a value, `None` when the key is absent
    fn get(&self, key: &str) -> StorageErrorResult<Option<String>>;

    /// Insert or replace a value
    fn set(&self, key: &str, value: &str) -> StorageErrorResult<()>;

    /// Delete a value. Removing an absent key succeeds.
    fn remove(&self, key: &str) -> StorageErrorResult<()>;
}
