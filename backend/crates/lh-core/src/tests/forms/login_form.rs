use crate::{CoreError, LoginForm};

use googletest::prelude::*;

#[test]
fn given_email_and_password_when_validated_then_ok() {
    let form = LoginForm {
        email: "asha@x.com".to_string(),
        password: "x".to_string(),
    };

    assert_that!(form.validate(), ok(anything()));
}

#[test]
fn given_empty_password_when_validated_then_required_error() {
    let form = LoginForm {
        email: "asha@x.com".to_string(),
        password: String::new(),
    };

    let result = form.validate();

    assert!(matches!(
        result,
        Err(CoreError::Validation {
            field: "password",
            ..
        })
    ));
}
