//! Single source of truth for "who is logged in".
//!
//! ## Persistence ordering
//!
//! Every transition into or out of `Authenticated` writes (or removes) the
//! `user` key before the in-memory state changes. Once an operation has
//! returned, memory and storage agree.
//!
//! ## Suspension
//!
//! `login` and `signup` sleep for `SessionConfig::simulated_delay` before
//! touching storage. The state lock is never held across that `.await`, so
//! queries, `logout` and the route guard keep working meanwhile. Two
//! overlapping login/signup calls are not ordered against each other: the
//! last one to finish wins. Callers are expected to disable repeated
//! submission while one is pending.
//!
//! ## Cancellation
//!
//! A login/signup future dropped before it resolves (timeout, `select!`,
//! aborted task) leaves storage untouched. Its `PendingTransition` guard
//! then re-reads the `user` key so memory falls back to whatever storage
//! holds instead of staying `Authenticating`.

use crate::{
    AuthError, CredentialStore, Result as AuthErrorResult, SESSION_KEY, SessionConfig,
    SessionState,
};

use lh_core::{LoginForm, SessionRecord, SignupForm};
use lh_storage::KeyValueStore;

use std::panic::Location;
use std::sync::{Arc, RwLock};

use error_location::ErrorLocation;
use log::{debug, info, warn};

pub struct SessionManager {
    store: Arc<dyn KeyValueStore>,
    credentials: CredentialStore,
    config: SessionConfig,
    state: RwLock<SessionState>,
}

impl SessionManager {
    /// Create a manager over `store`, restoring any persisted session.
    ///
    /// A missing or malformed `user` value starts the manager
    /// unauthenticated; neither is treated as fatal.
    pub fn new(store: Arc<dyn KeyValueStore>, config: SessionConfig) -> Self {
        let initial = Self::rehydrate(store.as_ref());

        Self {
            credentials: CredentialStore::new(Arc::clone(&store)),
            store,
            config,
            state: RwLock::new(initial),
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn credentials(&self) -> &CredentialStore {
        &self.credentials
    }

    /// Snapshot of the current state
    pub fn state(&self) -> SessionState {
        self.state
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn current_user(&self) -> Option<SessionRecord> {
        self.state().user().cloned()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state().is_authenticated()
    }

    pub fn is_authenticating(&self) -> bool {
        self.state() == SessionState::Authenticating
    }

    /// Register a new account and log into it.
    pub async fn signup(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> AuthErrorResult<SessionRecord> {
        let pending = self.begin("signup");
        debug!("Signup started for {email}");
        self.simulate_latency().await;

        let result = self
            .credentials
            .register(name, email, password)
            .and_then(|record| self.persist_session(record.to_session()));
        self.settle(pending, result)
    }

    /// Log into an existing account.
    pub async fn login(&self, email: &str, password: &str) -> AuthErrorResult<SessionRecord> {
        let pending = self.begin("login");
        debug!("Login started for {email}");
        self.simulate_latency().await;

        let result = self.credentials.find(email, password).and_then(|found| {
            let record = found.ok_or_else(|| AuthError::InvalidCredentials {
                location: ErrorLocation::from(Location::caller()),
            })?;
            self.persist_session(record.to_session())
        });
        self.settle(pending, result)
    }

    /// Validate the signup screen's input, then `signup`.
    ///
    /// Validation failures return before the state changes.
    pub async fn signup_form(&self, form: &SignupForm) -> AuthErrorResult<SessionRecord> {
        form.validate(self.config.min_password_length)?;
        self.signup(&form.name, &form.email, &form.password).await
    }

    /// Validate the login screen's input, then `login`.
    pub async fn login_form(&self, form: &LoginForm) -> AuthErrorResult<SessionRecord> {
        form.validate()?;
        self.login(&form.email, &form.password).await
    }

    /// Drop the current session. Always succeeds, even with no session.
    pub fn logout(&self) {
        if let Err(e) = self.store.remove(SESSION_KEY) {
            warn!("Failed to remove persisted session on logout: {e}");
        }
        self.set_state(SessionState::Unauthenticated);
        info!("Logged out");
    }

    async fn simulate_latency(&self) {
        if !self.config.simulated_delay.is_zero() {
            tokio::time::sleep(self.config.simulated_delay).await;
        }
    }

    fn begin(&self, operation: &'static str) -> PendingTransition<'_> {
        self.set_state(SessionState::Authenticating);
        PendingTransition {
            manager: self,
            operation,
            settled: false,
        }
    }

    /// Apply the outcome of login/signup to memory; storage is already done.
    fn settle(
        &self,
        mut pending: PendingTransition<'_>,
        result: AuthErrorResult<SessionRecord>,
    ) -> AuthErrorResult<SessionRecord> {
        pending.settled = true;
        let operation = pending.operation;

        match result {
            Ok(session) => {
                self.set_state(SessionState::Authenticated(session.clone()));
                info!("{operation} succeeded for {} ({})", session.email, session.id);
                Ok(session)
            }
            Err(e) => {
                if let Err(clear_err) = self.store.remove(SESSION_KEY) {
                    warn!("Failed to clear persisted session after {operation} failure: {clear_err}");
                }
                self.set_state(SessionState::Unauthenticated);
                warn!("{operation} failed: {}", e.error_code());
                Err(e)
            }
        }
    }

    /// State matching whatever the `user` key currently holds
    fn rehydrate(store: &dyn KeyValueStore) -> SessionState {
        match Self::read_persisted_session(store) {
            Ok(Some(session)) => {
                info!("Restored session for {} ({})", session.email, session.id);
                SessionState::Authenticated(session)
            }
            Ok(None) => {
                debug!("No persisted session");
                SessionState::Unauthenticated
            }
            Err(e) => {
                warn!("Ignoring persisted session: {e}");
                SessionState::Unauthenticated
            }
        }
    }

    #[track_caller]
    fn persist_session(&self, session: SessionRecord) -> AuthErrorResult<SessionRecord> {
        let json = serde_json::to_string(&session).map_err(|e| {
            AuthError::MalformedPersistedState {
                key: SESSION_KEY,
                message: format!("Failed to serialize session: {e}"),
                location: ErrorLocation::from(Location::caller()),
            }
        })?;
        self.store.set(SESSION_KEY, &json)?;
        Ok(session)
    }

    #[track_caller]
    fn read_persisted_session(
        store: &dyn KeyValueStore,
    ) -> AuthErrorResult<Option<SessionRecord>> {
        let Some(raw) = store.get(SESSION_KEY)? else {
            return Ok(None);
        };

        let session = serde_json::from_str(&raw).map_err(|e| {
            AuthError::MalformedPersistedState {
                key: SESSION_KEY,
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?;
        Ok(Some(session))
    }

    fn set_state(&self, next: SessionState) {
        let mut state = self
            .state
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        debug!("Session state {} -> {}", *state, next);
        *state = next;
    }
}

/// Held by an in-flight login/signup from `begin` until `settle`.
struct PendingTransition<'a> {
    manager: &'a SessionManager,
    operation: &'static str,
    settled: bool,
}

impl Drop for PendingTransition<'_> {
    fn drop(&mut self) {
        if self.settled || !self.manager.is_authenticating() {
            return;
        }

        warn!("{} cancelled before completing, restoring from storage", self.operation);
        let restored = SessionManager::rehydrate(self.manager.store.as_ref());
        self.manager.set_state(restored);
    }
}
