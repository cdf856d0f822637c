use crate::CredentialRecord;

use serde::{Deserialize, Serialize};

/// "Currently logged in as": a credential record minus its password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl From<&CredentialRecord> for SessionRecord {
    fn from(record: &CredentialRecord) -> Self {
        record.to_session()
    }
}
