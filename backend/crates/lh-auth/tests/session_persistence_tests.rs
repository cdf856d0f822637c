mod common;

use common::open_profile;

use lh_auth::{AuthError, RouteGuard, SessionState};
use lh_core::AppRoute;

use googletest::prelude::*;
use tempfile::TempDir;

#[tokio::test]
async fn given_signup_when_profile_reopened_then_same_session_restored() {
    // Given: A signup in one "process"
    let temp = TempDir::new().unwrap();
    let first = open_profile(temp.path());
    let session = first
        .signup("Asha", "asha@x.com", "secret1")
        .await
        .unwrap();
    drop(first);

    // When: The profile is opened again
    let second = open_profile(temp.path());

    // Then: The persisted session is rehydrated unchanged
    assert_eq!(second.state(), SessionState::Authenticated(session));
    assert!(RouteGuard::new(&second).can_enter());
}

#[tokio::test]
async fn given_logout_when_profile_reopened_then_unauthenticated_but_account_kept() {
    // Given
    let temp = TempDir::new().unwrap();
    let first = open_profile(temp.path());
    first
        .signup("Asha", "asha@x.com", "secret1")
        .await
        .unwrap();
    first.logout();

    // When
    let second = open_profile(temp.path());

    // Then
    assert_eq!(second.state(), SessionState::Unauthenticated);
    assert_that!(second.credentials().records().unwrap(), len(eq(1)));
    assert_eq!(
        RouteGuard::new(&second).check(&AppRoute::Dashboard),
        lh_auth::Navigation::Redirect(AppRoute::Login)
    );
}

#[tokio::test]
async fn given_account_from_earlier_process_when_login_then_authenticated() {
    let temp = TempDir::new().unwrap();
    let first = open_profile(temp.path());
    first
        .signup("Asha", "asha@x.com", "secret1")
        .await
        .unwrap();
    first.logout();
    drop(first);

    let second = open_profile(temp.path());
    let session = second.login("asha@x.com", "secret1").await.unwrap();

    assert_that!(session.name.as_str(), eq("Asha"));
    assert!(second.is_authenticated());
}

#[tokio::test]
async fn given_asha_example_when_wrong_password_then_invalid_credentials() {
    // Given
    let temp = TempDir::new().unwrap();
    let manager = open_profile(temp.path());
    manager
        .signup("Asha", "asha@x.com", "secret1")
        .await
        .unwrap();
    let users_before = std::fs::read_to_string(temp.path().join("users.json")).unwrap();

    // When
    let result = manager.login("asha@x.com", "wrong").await;

    // Then
    assert!(matches!(result, Err(AuthError::InvalidCredentials { .. })));
    assert_eq!(manager.state(), SessionState::Unauthenticated);
    let users_after = std::fs::read_to_string(temp.path().join("users.json")).unwrap();
    assert_that!(users_after, eq(&users_before));
    assert!(!temp.path().join("user.json").exists());
}

#[test]
fn given_corrupted_session_file_when_profile_opened_then_unauthenticated() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("user.json"), "garbage").unwrap();

    let manager = open_profile(temp.path());

    assert_eq!(manager.state(), SessionState::Unauthenticated);
}
