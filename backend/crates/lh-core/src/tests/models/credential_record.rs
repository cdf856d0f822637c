use crate::{CredentialRecord, SessionRecord};

use googletest::prelude::*;

fn asha() -> CredentialRecord {
    CredentialRecord::new(
        "1700000000000".to_string(),
        "Asha".to_string(),
        "asha@x.com".to_string(),
        "secret1".to_string(),
    )
}

#[test]
fn test_credential_record_matches_is_exact() {
    let record = asha();

    assert!(record.matches("asha@x.com", "secret1"));
    assert!(!record.matches("asha@x.com", "wrong"));
    assert!(!record.matches("Asha@x.com", "secret1"));
    assert!(!record.matches(" asha@x.com", "secret1"));
}

#[test]
fn test_credential_record_to_session_strips_password() {
    let session = SessionRecord::from(&asha());

    assert_eq!(
        session,
        SessionRecord {
            id: "1700000000000".to_string(),
            name: "Asha".to_string(),
            email: "asha@x.com".to_string(),
        }
    );

    let json = serde_json::to_value(&session).unwrap();
    assert_that!(json.get("password"), none());
}

#[test]
fn test_credential_record_debug_redacts_password() {
    let rendered = format!("{:?}", asha());

    assert_that!(rendered, contains_substring("asha@x.com"));
    assert_that!(rendered, not(contains_substring("secret1")));
}

#[test]
fn test_credential_record_uses_persisted_field_names() {
    let json = serde_json::to_value(asha()).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "id": "1700000000000",
            "name": "Asha",
            "email": "asha@x.com",
            "password": "secret1",
        })
    );
}
