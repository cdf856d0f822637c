use crate::{CoreError, DEFAULT_MIN_PASSWORD_LENGTH, SignupForm};

use googletest::prelude::*;

fn valid_form() -> SignupForm {
    SignupForm {
        name: "Asha".to_string(),
        email: "asha@x.com".to_string(),
        password: "secret1".to_string(),
        confirm_password: "secret1".to_string(),
    }
}

#[test]
fn given_valid_form_when_validated_then_ok() {
    let result = valid_form().validate(DEFAULT_MIN_PASSWORD_LENGTH);

    assert_that!(result, ok(anything()));
}

#[test]
fn given_mismatched_confirmation_when_validated_then_confirm_password_error() {
    let mut form = valid_form();
    form.confirm_password = "secret2".to_string();

    let err = form.validate(DEFAULT_MIN_PASSWORD_LENGTH).unwrap_err();

    assert_that!(err.field(), some(eq("confirm_password")));
    assert_that!(err.user_message().as_str(), eq("Passwords do not match"));
}

#[test]
fn given_short_password_when_validated_then_length_error() {
    let mut form = valid_form();
    form.password = "abc".to_string();
    form.confirm_password = "abc".to_string();

    let err = form.validate(DEFAULT_MIN_PASSWORD_LENGTH).unwrap_err();

    assert_that!(err.field(), some(eq("password")));
    assert_that!(
        err.user_message().as_str(),
        eq("Password must be at least 6 characters")
    );
}

#[test]
fn given_short_mismatched_password_when_validated_then_mismatch_reported_first() {
    let mut form = valid_form();
    form.password = "abc".to_string();
    form.confirm_password = "abd".to_string();

    let err = form.validate(DEFAULT_MIN_PASSWORD_LENGTH).unwrap_err();

    assert_that!(err.field(), some(eq("confirm_password")));
}

#[test]
fn given_multibyte_password_when_validated_then_counts_characters() {
    let mut form = valid_form();
    form.password = "पासवर्ड".to_string();
    form.confirm_password = form.password.clone();

    let result = form.validate(7);

    assert_that!(result, ok(anything()));
}

#[test]
fn given_blank_name_when_validated_then_required_error() {
    let mut form = valid_form();
    form.name = "   ".to_string();

    let result = form.validate(DEFAULT_MIN_PASSWORD_LENGTH);

    assert!(matches!(
        result,
        Err(CoreError::Validation { field: "name", .. })
    ));
}

#[test]
fn given_astral_password_when_validated_then_each_symbol_counts_once() {
    // Each emoji is one character but two UTF-16 units
    let mut form = valid_form();
    form.password = "🔑🔑🔑".to_string();
    form.confirm_password = form.password.clone();

    let err = form.validate(DEFAULT_MIN_PASSWORD_LENGTH).unwrap_err();

    assert_that!(err.field(), some(eq("password")));
}

#[test]
fn given_whitespace_only_password_when_validated_then_required_error() {
    let mut form = valid_form();
    form.password = "      ".to_string();
    form.confirm_password = form.password.clone();

    let err = form.validate(DEFAULT_MIN_PASSWORD_LENGTH).unwrap_err();

    assert_that!(err.user_message().as_str(), eq("Password is required"));
}
