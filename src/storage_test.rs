use super::*;

fn profile(user_id: Option<i64>) -> UserProfile {
    UserProfile {
        user_id,
        username: "admin".to_owned(),
        email: None,
        first_name: Some("Ada".to_owned()),
        full_name: Some("Ada Lovelace".to_owned()),
        role: Some("ADMIN".to_owned()),
    }
}

// =============================================================
// Empty store
// =============================================================

#[test]
fn empty_store_has_no_token() {
    assert!(token().is_none());
}

#[test]
fn empty_store_has_no_user() {
    assert!(stored_user().is_none());
}

// =============================================================
// store_session / clear_session
// =============================================================

#[test]
fn store_session_persists_all_keys() {
    store_session("abc123", &profile(Some(7)));

    assert_eq!(token().as_deref(), Some("abc123"));
    assert_eq!(stored_user(), Some(profile(Some(7))));
}

#[test]
fn stored_user_round_trips_profile_fields() {
    store_session("abc123", &profile(Some(7)));

    let user = stored_user().expect("user should be stored");
    assert_eq!(user.username, "admin");
    assert_eq!(user.first_name.as_deref(), Some("Ada"));
    assert_eq!(user.role.as_deref(), Some("ADMIN"));
}

#[test]
fn store_session_without_user_id_leaves_no_id_key() {
    store_session("abc123", &profile(None));

    assert_eq!(token().as_deref(), Some("abc123"));
    assert!(stored_user().is_some());
}

#[test]
fn clear_session_removes_everything() {
    store_session("abc123", &profile(Some(7)));
    clear_session();

    assert!(token().is_none());
    assert!(stored_user().is_none());
}

#[test]
fn clear_session_on_empty_store_is_a_no_op() {
    clear_session();
    assert!(token().is_none());
}

#[test]
fn unparseable_stored_user_reads_as_absent() {
    backend::set(USER_KEY, "not json");
    assert!(stored_user().is_none());
}

// =============================================================
// stored_session pairing invariant
// =============================================================

#[test]
fn full_store_yields_a_session() {
    store_session("abc123", &profile(Some(7)));
    assert_eq!(stored_session(), Some(profile(Some(7))));
}

#[test]
fn user_without_token_is_not_a_session() {
    store_session("abc123", &profile(Some(7)));
    backend::remove(TOKEN_KEY);

    assert!(stored_user().is_some());
    assert!(stored_session().is_none());
}

#[test]
fn token_without_user_is_not_a_session() {
    store_session("abc123", &profile(Some(7)));
    backend::remove(USER_KEY);

    assert!(token().is_some());
    assert!(stored_session().is_none());
}
