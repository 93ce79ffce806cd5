use super::*;

fn form(username: &str, password: &str) -> LoginForm {
    LoginForm {
        username: username.to_owned(),
        password: password.to_owned(),
    }
}

// =============================================================
// validate
// =============================================================

#[test]
fn empty_form_reports_both_fields() {
    let errors = form("", "").validate();
    assert_eq!(errors.username.as_deref(), Some(USERNAME_REQUIRED));
    assert_eq!(errors.password.as_deref(), Some(PASSWORD_REQUIRED));
    assert!(errors.has_errors());
}

#[test]
fn missing_password_reports_only_password() {
    let errors = form("admin", "").validate();
    assert_eq!(errors.username, None);
    assert_eq!(errors.password.as_deref(), Some(PASSWORD_REQUIRED));
    assert!(errors.has_errors());
}

#[test]
fn missing_username_reports_only_username() {
    let errors = form("", "admin123").validate();
    assert_eq!(errors.username.as_deref(), Some(USERNAME_REQUIRED));
    assert_eq!(errors.password, None);
}

#[test]
fn filled_form_passes() {
    let errors = form("admin", "admin123").validate();
    assert!(!errors.has_errors());
    assert_eq!(errors, FieldErrors::default());
}
