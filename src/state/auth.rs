//! Authentication session state and its lifecycle operations.
//!
//! `AuthState` is the plain in-memory model; `Session` wraps it in a signal
//! and owns the only write paths: hydrate at startup, login, logout, and
//! the reaction to a 401. `is_authenticated` is always derived from the
//! in-memory user record, never read back from storage, so there is a
//! single authoritative source at query time.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::types::{LoginData, UserProfile};
use crate::net::{ApiClient, ApiError};
use crate::storage;

/// In-memory session state, rebuilt from the persisted store on load and
/// destroyed on logout. `loading` stays `true` until hydration completes so
/// route guards can hold rendering instead of flash-redirecting.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub user: Option<UserProfile>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
            error: None,
        }
    }
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// hydrating → ready(authenticated | anonymous).
    pub fn finish_hydration(&mut self, stored: Option<UserProfile>) {
        self.user = stored;
        self.loading = false;
    }

    /// A fresh attempt starts with a clean error banner.
    pub fn begin_login(&mut self) {
        self.error = None;
    }

    pub fn complete_login(&mut self, user: UserProfile) {
        self.user = Some(user);
        self.error = None;
    }

    /// Failed attempt: record the message, stay in the current state.
    pub fn fail_login(&mut self, message: String) {
        self.error = Some(message);
    }

    /// Back to ready(anonymous). Used by logout and session expiry.
    pub fn reset(&mut self) {
        self.user = None;
        self.error = None;
    }
}

/// Banner text for a failed login: the server's message when it sent one,
/// otherwise the generic fallback.
pub fn login_error_message(err: &ApiError) -> String {
    err.server_message().unwrap_or("Login failed").to_owned()
}

/// App-lifetime session handle, provided via context at the root and shared
/// by pages, guards, and the header.
#[derive(Clone, Copy, Debug)]
pub struct Session {
    state: RwSignal<AuthState>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(AuthState::default()),
        }
    }

    /// Populate in-memory state from the persisted store. Synchronous: by
    /// the time this returns, guards observe `loading == false`.
    pub fn hydrate(&self) {
        let stored = storage::stored_session();
        self.state.update(|s| s.finish_hydration(stored));
    }

    /// Exactly one login attempt. On success the persisted store and the
    /// in-memory state are written together; on failure both are left
    /// untouched apart from the error message.
    pub async fn login(&self, api: &ApiClient, username: &str, password: &str) -> bool {
        self.state.update(AuthState::begin_login);
        match api.login(username, password).await {
            Ok(LoginData { token, user, .. }) => {
                storage::store_session(&token, &user);
                self.state.update(|s| s.complete_login(user));
                true
            }
            Err(err) => {
                let message = login_error_message(&err);
                self.state.update(|s| s.fail_login(message));
                false
            }
        }
    }

    /// Clear the persisted store and return to ready(anonymous). Idempotent.
    pub fn logout(&self) {
        storage::clear_session();
        self.state.update(AuthState::reset);
    }

    /// React to a 401: the request pipeline has already cleared the store,
    /// so only the in-memory side falls back to anonymous here.
    pub fn expire(&self) {
        self.state.update(AuthState::reset);
    }

    pub fn loading(&self) -> bool {
        self.state.with(|s| s.loading)
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(AuthState::is_authenticated)
    }

    pub fn user(&self) -> Option<UserProfile> {
        self.state.with(|s| s.user.clone())
    }

    pub fn error(&self) -> Option<String> {
        self.state.with(|s| s.error.clone())
    }
}
