//! The shared request pipeline for the Windchill REST API.
//!
//! One `ApiClient` is created at app start and provided via context. Every
//! call goes through the same two phases:
//!
//! - request: attach the persisted bearer token when one exists, always ask
//!   for JSON, enforce the fixed per-client timeout;
//! - response: unwrap the `{success, message, data}` envelope. A 401 clears
//!   the persisted session and bumps the session-expired signal before the
//!   error reaches the caller; every other failure class is logged and
//!   propagated unchanged. One attempt per call, never a retry.
//!
//! Real HTTP only exists in the browser (`csr` feature); native builds keep
//! the same API surface with stubbed transports, mirroring how the rest of
//! the crate stays testable off-WASM.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use leptos::prelude::*;

use crate::config;
use crate::net::error::ApiError;
use crate::net::types::LoginData;

#[cfg(feature = "csr")]
use crate::net::types::ApiResponse;
#[cfg(feature = "csr")]
use crate::storage;
#[cfg(feature = "csr")]
use gloo_net::http::{Request, RequestBuilder, Response};
#[cfg(feature = "csr")]
use serde::Serialize;
#[cfg(feature = "csr")]
use serde::de::DeserializeOwned;
#[cfg(feature = "csr")]
use std::future::Future;

#[cfg(not(feature = "csr"))]
const NATIVE_STUB: &str = "requests require a browser environment";

/// Configured HTTP client: base URL and timeout fixed at construction.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    session_expired: RwSignal<u32>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(base_url.into()),
            session_expired: RwSignal::new(0),
        }
    }

    /// Client pointed at the build-time configured backend.
    pub fn from_env() -> Self {
        Self::new(config::api_base_url())
    }

    /// Number of 401 responses seen so far. Each one has already cleared the
    /// persisted session; the routing layer subscribes and navigates to the
    /// login screen once per increment.
    pub fn session_expired(&self) -> RwSignal<u32> {
        self.session_expired
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Single login attempt against `POST /auth/login`.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginData, ApiError> {
        #[cfg(feature = "csr")]
        {
            let payload = serde_json::json!({
                "username": username,
                "password": password,
            });
            self.post_json(config::paths::LOGIN, &payload).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (username, password);
            Err(ApiError::Network(NATIVE_STUB.to_owned()))
        }
    }

    /// Fetch a list endpoint and reduce it to its length. The entity shape
    /// is owned by the server; the dashboard only consumes counts.
    pub async fn fetch_count(&self, path: &str) -> Result<usize, ApiError> {
        #[cfg(feature = "csr")]
        {
            let entities: Vec<serde_json::Value> = self.get_json(path).await?;
            Ok(entities.len())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = path;
            Err(ApiError::Network(NATIVE_STUB.to_owned()))
        }
    }
}

#[cfg(feature = "csr")]
impl ApiClient {
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path);
        log::debug!("GET {url}");
        let request = self
            .with_auth(Request::get(&url))
            .header("Accept", "application/json");
        let response = send_with_timeout(request.send()).await?;
        self.process(response, &url).await
    }

    async fn post_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        log::debug!("POST {url}");
        let request = self
            .with_auth(Request::post(&url))
            .header("Accept", "application/json")
            .json(body)
            .map_err(|err| ApiError::Network(err.to_string()))?;
        let response = send_with_timeout(request.send()).await?;
        self.process(response, &url).await
    }

    /// Request phase: a persisted token rides along as a bearer credential;
    /// with no token the request goes out bare.
    fn with_auth(&self, request: RequestBuilder) -> RequestBuilder {
        match storage::token() {
            Some(token) => request.header("Authorization", &format!("Bearer {token}")),
            None => request,
        }
    }

    /// Response phase. The 401 branch is the one side-effecting recovery in
    /// the whole client and is not configurable per call.
    async fn process<T: DeserializeOwned>(
        &self,
        response: Response,
        url: &str,
    ) -> Result<T, ApiError> {
        let status = response.status();

        if status == 401 {
            log::warn!("unauthorized response from {url}; clearing session");
            storage::clear_session();
            self.session_expired.update(|n| *n += 1);
            return Err(ApiError::Unauthorized);
        }

        if !(200..300).contains(&status) {
            let message = response
                .json::<ApiResponse<serde_json::Value>>()
                .await
                .ok()
                .and_then(|envelope| envelope.message);
            log_failure(status, message.as_deref(), url);
            return Err(ApiError::from_status(status, message));
        }

        log::debug!("{status} {url}");
        let envelope: ApiResponse<T> = response
            .json()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))?;
        envelope.into_result()
    }
}

#[cfg(feature = "csr")]
fn log_failure(status: u16, message: Option<&str>, url: &str) {
    let message = message.unwrap_or("no message");
    match status {
        400 => log::warn!("bad request: {url}: {message}"),
        403 => log::warn!("access forbidden: {url}: {message}"),
        404 => log::warn!("resource not found: {url}: {message}"),
        s if s >= 500 => log::error!("server error {s}: {url}: {message}"),
        s => log::warn!("request failed with status {s}: {url}: {message}"),
    }
}

/// Race the request against the fixed timeout; whichever side loses is
/// dropped (no cancellation is sent to the server).
#[cfg(feature = "csr")]
async fn send_with_timeout<F>(request: F) -> Result<Response, ApiError>
where
    F: Future<Output = Result<Response, gloo_net::Error>>,
{
    use futures::future::{Either, select};

    let timeout = gloo_timers::future::TimeoutFuture::new(config::REQUEST_TIMEOUT_MS);
    futures::pin_mut!(request, timeout);
    match select(request, timeout).await {
        Either::Left((result, _)) => result.map_err(|err| {
            log::error!("network error: cannot reach server: {err}");
            ApiError::Network(err.to_string())
        }),
        Either::Right(((), _)) => Err(ApiError::Timeout),
    }
}

fn normalize_base_url(mut base: String) -> String {
    while base.ends_with('/') {
        base.pop();
    }
    base
}
