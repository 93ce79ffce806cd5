//! Persisted session store over browser `localStorage`.
//!
//! Holds the auth token, the serialized user profile, and the user id under
//! fixed keys. The three values are written together and cleared together;
//! no expiry is tracked here, so a stale token is only discovered when a
//! request comes back 401.
//!
//! Native builds swap `localStorage` for a thread-local map so the session
//! logic stays exercisable from plain `cargo test`.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use crate::net::types::UserProfile;

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";
pub const USER_ID_KEY: &str = "userId";

/// Current auth token, if a session is persisted.
pub fn token() -> Option<String> {
    backend::get(TOKEN_KEY)
}

/// User profile persisted at login, if present and still parseable.
pub fn stored_user() -> Option<UserProfile> {
    let raw = backend::get(USER_KEY)?;
    serde_json::from_str(&raw).ok()
}

/// The persisted session, honored only when token and user are both
/// present. A half-written store reads as no session at all.
pub fn stored_session() -> Option<UserProfile> {
    token().and_then(|_| stored_user())
}

/// Persist a full session. Token, user, and user id are written as a unit.
pub fn store_session(token: &str, user: &UserProfile) {
    backend::set(TOKEN_KEY, token);
    if let Ok(json) = serde_json::to_string(user) {
        backend::set(USER_KEY, &json);
    }
    match user.user_id {
        Some(id) => backend::set(USER_ID_KEY, &id.to_string()),
        None => backend::remove(USER_ID_KEY),
    }
}

/// Drop every persisted session key. Safe to call on an empty store.
pub fn clear_session() {
    backend::remove(TOKEN_KEY);
    backend::remove(USER_KEY);
    backend::remove(USER_ID_KEY);
}

#[cfg(feature = "csr")]
mod backend {
    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }

    pub fn get(key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    pub fn set(key: &str, value: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(key, value);
        }
    }

    pub fn remove(key: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

#[cfg(not(feature = "csr"))]
mod backend {
    use std::cell::RefCell;
    use std::collections::HashMap;

    thread_local! {
        static STORE: RefCell<HashMap<String, String>> = RefCell::new(HashMap::new());
    }

    pub fn get(key: &str) -> Option<String> {
        STORE.with(|s| s.borrow().get(key).cloned())
    }

    pub fn set(key: &str, value: &str) {
        STORE.with(|s| {
            s.borrow_mut().insert(key.to_owned(), value.to_owned());
        });
    }

    pub fn remove(key: &str) {
        STORE.with(|s| {
            s.borrow_mut().remove(key);
        });
    }
}
