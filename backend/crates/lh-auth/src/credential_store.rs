//! Registry of signup records kept under the `users` key.
//!
//! The whole collection is read, modified and written back on every
//! registration. Email uniqueness is checked with exact, case-sensitive
//! comparison; no normalization is applied.

use crate::{AuthError, Result as AuthErrorResult, USERS_KEY};

use lh_core::CredentialRecord;
use lh_storage::KeyValueStore;

use std::panic::Location;
use std::sync::Arc;

use chrono::Utc;
use error_location::ErrorLocation;
use log::{debug, info};

pub struct CredentialStore {
    store: Arc<dyn KeyValueStore>,
}

impl CredentialStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// All registered records in signup order. An absent key is an empty
    /// collection; an unparseable one is an error, never silently replaced.
    #[track_caller]
    pub fn records(&self) -> AuthErrorResult<Vec<CredentialRecord>> {
        let Some(raw) = self.store.get(USERS_KEY)? else {
            return Ok(Vec::new());
        };

        serde_json::from_str(&raw).map_err(|e| AuthError::MalformedPersistedState {
            key: USERS_KEY,
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Append a new record, failing if the email is already taken.
    #[track_caller]
    pub fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> AuthErrorResult<CredentialRecord> {
        let mut records = self.records()?;

        if records.iter().any(|r| r.email == email) {
            debug!("Registration rejected, email already registered: {email}");
            return Err(AuthError::DuplicateEmail {
                email: email.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let record = CredentialRecord::new(
            Self::next_id(&records),
            name.to_string(),
            email.to_string(),
            password.to_string(),
        );
        records.push(record.clone());
        self.persist(&records)?;

        info!("Registered account {} ({})", record.id, record.email);
        Ok(record)
    }

    /// Record whose email and password both match exactly
    #[track_caller]
    pub fn find(&self, email: &str, password: &str) -> AuthErrorResult<Option<CredentialRecord>> {
        let records = self.records()?;
        Ok(records.into_iter().find(|r| r.matches(email, password)))
    }

    #[track_caller]
    fn persist(&self, records: &[CredentialRecord]) -> AuthErrorResult<()> {
        let json = serde_json::to_string(records).map_err(|e| {
            AuthError::MalformedPersistedState {
                key: USERS_KEY,
                message: format!("Failed to serialize credentials: {e}"),
                location: ErrorLocation::from(Location::caller()),
            }
        })?;
        self.store.set(USERS_KEY, &json)?;
        Ok(())
    }

    /// Millisecond timestamp, bumped past any id already in use
    fn next_id(records: &[CredentialRecord]) -> String {
        let mut candidate = Utc::now().timestamp_millis();
        while records.iter().any(|r| r.id == candidate.to_string()) {
            candidate += 1;
        }
        candidate.to_string()
    }
}
