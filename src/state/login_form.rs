//! Login form model and its client-side validation.

#[cfg(test)]
#[path = "login_form_test.rs"]
mod login_form_test;

pub const USERNAME_REQUIRED: &str = "Username is required";
pub const PASSWORD_REQUIRED: &str = "Password is required";

/// Raw login form contents.
#[derive(Clone, Debug, Default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Per-field validation errors. An empty value blocks submission; nothing
/// else is checked client-side.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl FieldErrors {
    pub fn has_errors(&self) -> bool {
        self.username.is_some() || self.password.is_some()
    }
}

impl LoginForm {
    /// Validate before any network call is made.
    pub fn validate(&self) -> FieldErrors {
        FieldErrors {
            username: self
                .username
                .is_empty()
                .then(|| USERNAME_REQUIRED.to_owned()),
            password: self
                .password
                .is_empty()
                .then(|| PASSWORD_REQUIRED.to_owned()),
        }
    }
}
