//! Wire types shared with the Windchill REST API.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::net::ApiError;

/// Envelope the backend wraps around every response, success and failure
/// alike.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub status_code: Option<u16>,
    #[serde(default)]
    pub timestamp: Option<i64>,
}

impl<T> ApiResponse<T> {
    /// Unwrap the envelope: a flagged-successful response yields its data,
    /// anything else becomes [`ApiError::Rejected`] carrying the server's
    /// message.
    pub fn into_result(self) -> Result<T, ApiError> {
        if !self.success {
            return Err(ApiError::Rejected {
                message: self.message,
            });
        }
        self.data.ok_or_else(|| {
            ApiError::Decode("successful response carried no data".to_owned())
        })
    }
}

/// User record returned by the login endpoint. The client treats it as a
/// pass-through payload: it is persisted verbatim and rendered, never
/// interpreted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default)]
    pub user_id: Option<i64>,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

impl UserProfile {
    /// Name shown in the dashboard welcome card.
    pub fn display_name(&self) -> &str {
        self.full_name.as_deref().unwrap_or(&self.username)
    }

    /// Short name used by the header greeting.
    pub fn greeting_name(&self) -> &str {
        self.first_name.as_deref().unwrap_or(&self.username)
    }

    /// Role label, defaulting to the least-privileged one for display.
    pub fn role_label(&self) -> &str {
        self.role.as_deref().unwrap_or("Viewer")
    }
}

/// Payload of a successful login: the bearer token plus the user profile
/// fields, flattened the way the backend serializes them.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginData {
    pub token: String,
    #[serde(default)]
    pub expires_in: Option<i64>,
    #[serde(flatten)]
    pub user: UserProfile,
}
