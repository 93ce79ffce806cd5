use super::*;

// =============================================================
// from_status
// =============================================================

#[test]
fn from_status_keeps_status_and_message() {
    let err = ApiError::from_status(403, Some("Access denied".to_owned()));
    assert_eq!(
        err,
        ApiError::Status {
            status: 403,
            message: Some("Access denied".to_owned()),
        }
    );
}

// =============================================================
// server_message
// =============================================================

#[test]
fn server_message_comes_from_rejection_payload() {
    let err = ApiError::Rejected {
        message: Some("Invalid username or password".to_owned()),
    };
    assert_eq!(err.server_message(), Some("Invalid username or password"));
}

#[test]
fn server_message_ignores_empty_payload_message() {
    let err = ApiError::Rejected {
        message: Some(String::new()),
    };
    assert_eq!(err.server_message(), None);
}

#[test]
fn server_message_absent_for_transport_failures() {
    assert_eq!(ApiError::Timeout.server_message(), None);
    assert_eq!(
        ApiError::Network("connection refused".to_owned()).server_message(),
        None
    );
    assert_eq!(ApiError::Unauthorized.server_message(), None);
}
