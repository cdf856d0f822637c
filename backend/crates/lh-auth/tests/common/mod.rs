use lh_auth::{SessionConfig, SessionManager};
use lh_storage::{FileStore, KeyValueStore};

use std::path::Path;
use std::sync::Arc;

/// Open a manager over the file-backed profile in `dir`, as a fresh
/// process would.
pub fn open_profile(dir: &Path) -> SessionManager {
    let store: Arc<dyn KeyValueStore> = Arc::new(FileStore::new(dir));
    SessionManager::new(store, SessionConfig::immediate())
}
