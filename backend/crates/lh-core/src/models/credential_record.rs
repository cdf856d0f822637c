//! Registered account entry in the credential collection.

use crate::SessionRecord;

use std::fmt;

use serde::{Deserialize, Serialize};

/// A stored (name, email, password) registration entry.
///
/// Created on signup and never mutated or deleted afterwards. The email is
/// the unique key of the collection. The password is held in plaintext to
/// keep the persisted `users` layout; `Debug` never prints it.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialRecord {
    /// Opaque unique identifier
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
}

impl CredentialRecord {
    pub fn new(id: String, name: String, email: String, password: String) -> Self {
        Self {
            id,
            name,
            email,
            password,
        }
    }

    /// Exact, case-sensitive match on both email and password
    pub fn matches(&self, email: &str, password: &str) -> bool {
        self.email == email && self.password == password
    }

    /// Session projection of this record (password stripped)
    pub fn to_session(&self) -> SessionRecord {
        SessionRecord {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}

impl fmt::Debug for CredentialRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialRecord")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
