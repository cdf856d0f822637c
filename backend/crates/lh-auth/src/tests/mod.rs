
use crate::{SessionConfig, SessionManager};

use lh_storage::{KeyValueStore, MemoryStore};

use std::sync::Arc;

/// Fresh in-memory profile and a manager over it, without simulated latency
pub(crate) fn memory_manager() -> (Arc<MemoryStore>, SessionManager) {
    let store = Arc::new(MemoryStore::new());
    let manager = SessionManager::new(
        Arc::clone(&store) as Arc<dyn KeyValueStore>,
        SessionConfig::immediate(),
    );
    (store, manager)
}
