use super::*;

#[test]
fn validate_login_input_trims_email() {
    assert_eq!(
        validate_login_input("  dana@cinema.test ", "hunter2"),
        Ok(("dana@cinema.test".to_owned(), "hunter2".to_owned()))
    );
}

#[test]
fn validate_login_input_keeps_password_whitespace() {
    assert_eq!(
        validate_login_input("a@b.test", " pass "),
        Ok(("a@b.test".to_owned(), " pass ".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "x"), Err("Enter both email and password."));
    assert_eq!(validate_login_input("a@b.test", ""), Err("Enter both email and password."));
}

#[test]
fn validate_login_input_requires_at_sign() {
    assert_eq!(validate_login_input("dana", "x"), Err("Enter a valid email address."));
}
