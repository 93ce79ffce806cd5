use super::*;

// =============================================================
// Envelope deserialization
// =============================================================

#[test]
fn login_envelope_parses_backend_shape() {
    let body = r#"{
        "success": true,
        "message": "Login successful",
        "data": {
            "userId": 1,
            "username": "admin",
            "email": "admin@windchill.local",
            "fullName": "System Administrator",
            "role": "ADMIN",
            "token": "abc123",
            "expiresIn": 86400000
        },
        "timestamp": 1722860000000
    }"#;

    let envelope: ApiResponse<LoginData> = serde_json::from_str(body).unwrap();
    let data = envelope.into_result().unwrap();

    assert_eq!(data.token, "abc123");
    assert_eq!(data.expires_in, Some(86_400_000));
    assert_eq!(data.user.user_id, Some(1));
    assert_eq!(data.user.username, "admin");
    assert_eq!(data.user.full_name.as_deref(), Some("System Administrator"));
}

#[test]
fn error_envelope_parses_without_data() {
    let body = r#"{"success": false, "message": "Invalid username or password"}"#;

    let envelope: ApiResponse<LoginData> = serde_json::from_str(body).unwrap();
    assert_eq!(
        envelope.into_result().unwrap_err(),
        ApiError::Rejected {
            message: Some("Invalid username or password".to_owned()),
        }
    );
}

#[test]
fn list_envelope_yields_entity_count() {
    let body = r#"{"success": true, "data": [{"id": 1}, {"id": 2}, {"id": 3}]}"#;

    let envelope: ApiResponse<Vec<serde_json::Value>> = serde_json::from_str(body).unwrap();
    assert_eq!(envelope.into_result().unwrap().len(), 3);
}

#[test]
fn successful_envelope_without_data_is_a_decode_error() {
    let envelope: ApiResponse<LoginData> =
        serde_json::from_str(r#"{"success": true}"#).unwrap();
    assert!(matches!(
        envelope.into_result(),
        Err(ApiError::Decode(_))
    ));
}

// =============================================================
// UserProfile display helpers
// =============================================================

fn minimal_user() -> UserProfile {
    serde_json::from_str(r#"{"username": "jdoe"}"#).unwrap()
}

#[test]
fn minimal_profile_defaults_optional_fields() {
    let user = minimal_user();
    assert_eq!(user.user_id, None);
    assert_eq!(user.first_name, None);
    assert_eq!(user.role, None);
}

#[test]
fn display_name_prefers_full_name() {
    let mut user = minimal_user();
    assert_eq!(user.display_name(), "jdoe");

    user.full_name = Some("Jane Doe".to_owned());
    assert_eq!(user.display_name(), "Jane Doe");
}

#[test]
fn greeting_name_prefers_first_name() {
    let mut user = minimal_user();
    assert_eq!(user.greeting_name(), "jdoe");

    user.first_name = Some("Jane".to_owned());
    assert_eq!(user.greeting_name(), "Jane");
}

#[test]
fn role_label_defaults_to_viewer() {
    let mut user = minimal_user();
    assert_eq!(user.role_label(), "Viewer");

    user.role = Some("ADMIN".to_owned());
    assert_eq!(user.role_label(), "ADMIN");
}
