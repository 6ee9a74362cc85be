//! HTTP client for the admin backend.
//!
//! One [`ApiClient`] serves every command. It joins endpoint paths onto the
//! configured base URL, attaches the session's bearer token when present,
//! and normalizes every response body through [`envelope`]. Transport
//! failures are classified here, where the client knows whether the request
//! ever reached the backend.

pub mod envelope;
pub mod types;

pub mod auth;
pub mod finance;
pub mod kyc;
pub mod monitoring;
pub mod pairs;
pub mod payments;
pub mod settings;
pub mod trading;
pub mod users;

use std::sync::Arc;

use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::config::BackendConfig;
use crate::error::ApiError;
use crate::session::SessionStore;

pub use envelope::Envelope;

/// Result alias for backend calls.
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Cloning shares the underlying connection pool and session store.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Arc<dyn SessionStore>,
}

impl ApiClient {
    pub fn new(
        backend: &BackendConfig,
        session: Arc<dyn SessionStore>,
    ) -> crate::error::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(backend.timeout())
            .build()?;

        Ok(Self {
            http,
            base_url: backend.base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn session(&self) -> &Arc<dyn SessionStore> {
        &self.session
    }

    /// Endpoint paths are appended verbatim so the base URL keeps its path
    /// prefix (usually `/api`).
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn request<T, Q, B>(
        &self,
        method: Method,
        path: &str,
        query: Option<&Q>,
        body: Option<&B>,
    ) -> ApiResult<Envelope<T>>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
        B: Serialize + ?Sized,
    {
        let url = self.url(path);
        let mut request = self.http.request(method.clone(), &url);

        if let Some(query) = query {
            request = request.query(query);
        }
        if let Some(token) = self.session.access_token() {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        debug!(%method, %url, "backend request");

        let response = request
            .send()
            .await
            .map_err(|e| self.transport_error(&e))?;
        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| self.transport_error(&e))?;

        debug!(%method, %url, status = status.as_u16(), "backend response");

        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: status_message(&bytes, status),
            });
        }

        let value: serde_json::Value = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).map_err(ApiError::Decode)?
        };

        envelope::normalize(status.as_u16(), value).map_err(ApiError::Decode)
    }

    fn transport_error(&self, err: &reqwest::Error) -> ApiError {
        let detail = if err.is_timeout() {
            "request timed out".to_string()
        } else if err.is_connect() {
            "connection refused".to_string()
        } else {
            err.to_string()
        };

        ApiError::Transport {
            base_url: self.base_url.clone(),
            detail,
        }
    }

    pub(crate) async fn get<T>(&self, path: &str) -> ApiResult<Envelope<T>>
    where
        T: DeserializeOwned,
    {
        self.request(Method::GET, path, None::<&()>, None::<&()>)
            .await
    }

    pub(crate) async fn get_with<T, Q>(&self, path: &str, query: &Q) -> ApiResult<Envelope<T>>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.request(Method::GET, path, Some(query), None::<&()>)
            .await
    }

    pub(crate) async fn post<T, B>(&self, path: &str, body: &B) -> ApiResult<Envelope<T>>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::POST, path, None::<&()>, Some(body))
            .await
    }

    pub(crate) async fn put<T, B>(&self, path: &str, body: &B) -> ApiResult<Envelope<T>>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::PUT, path, None::<&()>, Some(body))
            .await
    }

    pub(crate) async fn patch<T, B>(&self, path: &str, body: &B) -> ApiResult<Envelope<T>>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::PATCH, path, None::<&()>, Some(body))
            .await
    }

    pub(crate) async fn delete<T>(&self, path: &str) -> ApiResult<Envelope<T>>
    where
        T: DeserializeOwned,
    {
        self.request(Method::DELETE, path, None::<&()>, None::<&()>)
            .await
    }

    pub(crate) async fn delete_with<T, B>(&self, path: &str, body: &B) -> ApiResult<Envelope<T>>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::DELETE, path, None::<&()>, Some(body))
            .await
    }
}

/// Extract the backend's error message from a non-2xx body.
///
/// Error responses carry `{ "message": "..." }`; anything else falls back
/// to the HTTP status line.
fn status_message(bytes: &[u8], status: StatusCode) -> String {
    serde_json::from_slice::<serde_json::Value>(bytes)
        .ok()
        .and_then(|value| {
            value
                .get("message")
                .and_then(|message| message.as_str())
                .map(str::to_string)
        })
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| match status.canonical_reason() {
            Some(reason) => format!("HTTP {} - {reason}", status.as_u16()),
            None => format!("HTTP {}", status.as_u16()),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::MemorySession;

    fn client_with_base(base_url: &str) -> ApiClient {
        let backend = BackendConfig {
            base_url: base_url.to_string(),
            timeout_secs: 5,
        };
        ApiClient::new(&backend, Arc::new(MemorySession::new())).unwrap()
    }

    #[test]
    fn test_url_keeps_api_prefix() {
        let client = client_with_base("http://localhost:5022/api");
        assert_eq!(
            client.url("/admin/users"),
            "http://localhost:5022/api/admin/users"
        );
    }

    #[test]
    fn test_url_trims_trailing_slash() {
        let client = client_with_base("http://localhost:5022/api/");
        assert_eq!(
            client.url("/admin/users"),
            "http://localhost:5022/api/admin/users"
        );
    }

    #[test]
    fn test_status_message_prefers_backend_message() {
        let body = br#"{"success": false, "message": "Invalid token"}"#;
        assert_eq!(
            status_message(body, StatusCode::UNAUTHORIZED),
            "Invalid token"
        );
    }

    #[test]
    fn test_status_message_falls_back_to_status_line() {
        assert_eq!(
            status_message(b"<html>bad gateway</html>", StatusCode::BAD_GATEWAY),
            "HTTP 502 - Bad Gateway"
        );
        assert_eq!(
            status_message(br#"{"message": ""}"#, StatusCode::INTERNAL_SERVER_ERROR),
            "HTTP 500 - Internal Server Error"
        );
    }
}
