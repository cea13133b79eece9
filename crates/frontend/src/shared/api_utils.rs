//! API utilities for frontend-backend communication
//!
//! Provides the base URL of the orders API and [`Gateway`], a thin wrapper
//! over `gloo-net` that attaches the bearer token and reports `401` to the
//! session exactly where it happens.

use gloo_net::http::{Method, RequestBuilder};
use leptos::callback::{Callable, Callback};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::shared::config::config;

/// Get the base URL for API requests
///
/// Uses `api.base_url` when configured, otherwise the current window host
/// with `api.port`.
///
/// # Returns
/// - API base URL like "http://localhost:3000"
pub fn api_base() -> String {
    let api = &config().api;
    let window = match web_sys::window() {
        Some(w) => w,
        None => return api.resolve_base("http:", "127.0.0.1"),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    api.resolve_base(&protocol, &hostname)
}

/// Escape a record id for use as a path segment
pub fn path_segment(id: &str) -> String {
    urlencoding::encode(id).into_owned()
}

/// Append a query string built from `query`; empty strings are expected to
/// be skipped by the query type itself
pub fn with_query<Q: Serialize>(path: &str, query: &Q) -> Result<String, ApiError> {
    let qs = serde_qs::to_string(query).map_err(|e| ApiError::Serialize(e.to_string()))?;
    if qs.is_empty() {
        Ok(path.to_string())
    } else {
        Ok(format!("{}?{}", path, qs))
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Session expired, please log in again")]
    Unauthorized,
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("Failed to send request: {0}")]
    Network(String),
    #[error("Failed to parse response: {0}")]
    Parse(String),
    #[error("Failed to serialize request: {0}")]
    Serialize(String),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

#[derive(serde::Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

/// Map a status code and response body to success or an [`ApiError`].
///
/// The server's `{message}` (or `{error}`) is surfaced when present.
pub fn classify_status(status: u16, body: &str) -> Result<(), ApiError> {
    if (200..300).contains(&status) {
        return Ok(());
    }
    if status == 401 {
        return Err(ApiError::Unauthorized);
    }
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message.or(b.error))
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| format!("Request failed: {}", status));
    Err(ApiError::Status { status, message })
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

/// HTTP client of the orders API.
///
/// Every request carries `Authorization: Bearer <token>` when a token is
/// present. A `401` runs `on_unauthorized` before the error is returned;
/// the callback may belong to an owner that is already gone, so it is only
/// tried.
#[derive(Clone)]
pub struct Gateway {
    base: String,
    token: Option<String>,
    on_unauthorized: Option<Callback<()>>,
}

impl Gateway {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            token: None,
            on_unauthorized: None,
        }
    }

    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.is_empty());
        self
    }

    pub fn on_unauthorized(mut self, callback: Callback<()>) -> Self {
        self.on_unauthorized = Some(callback);
        self
    }

    /// Run the 401 callback if it is still alive
    pub fn report_unauthorized(&self) -> bool {
        self.on_unauthorized
            .as_ref()
            .and_then(|callback| callback.try_run(()))
            .is_some()
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = RequestBuilder::new(&self.url(path))
            .method(method)
            .header("Accept", "application/json");
        match &self.token {
            Some(token) => builder.header("Authorization", &bearer(token)),
            None => builder,
        }
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<String, ApiError> {
        let builder = self.request(method, path);
        let request = match body {
            Some(json) => builder
                .header("Content-Type", "application/json")
                .body(json)
                .map_err(|e| ApiError::Serialize(e.to_string()))?,
            None => builder
                .build()
                .map_err(|e| ApiError::Network(e.to_string()))?,
        };

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status();
        let text = response.text().await.unwrap_or_default();

        if let Err(e) = classify_status(status, &text) {
            if e.is_unauthorized() {
                log::warn!("401 from {}", path);
                if !self.report_unauthorized() {
                    log::debug!("401 from {} after its session handler was dropped", path);
                }
            }
            return Err(e);
        }
        Ok(text)
    }

    fn decode<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
        // Empty bodies decode as JSON null so `()` and Option targets work
        let text = if text.trim().is_empty() { "null" } else { text };
        serde_json::from_str(text).map_err(|e| ApiError::Parse(e.to_string()))
    }

    fn encode<B: Serialize>(body: &B) -> Result<String, ApiError> {
        serde_json::to_string(body).map_err(|e| ApiError::Serialize(e.to_string()))
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let text = self.execute(Method::GET, path, None).await?;
        Self::decode(&text)
    }

    /// Raw response body, e.g. the server-side CSV report
    pub async fn get_text(&self, path: &str) -> Result<String, ApiError> {
        self.execute(Method::GET, path, None).await
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let text = self
            .execute(Method::POST, path, Some(Self::encode(body)?))
            .await?;
        Self::decode(&text)
    }

    pub async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let text = self
            .execute(Method::PUT, path, Some(Self::encode(body)?))
            .await?;
        Self::decode(&text)
    }

    pub async fn patch<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let text = self.execute(Method::PATCH, path, None).await?;
        Self::decode(&text)
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let text = self.execute(Method::DELETE, path, None).await?;
        Self::decode(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Query {
        #[serde(skip_serializing_if = "String::is_empty")]
        search: String,
        page: usize,
    }

    #[test]
    fn test_classify_success_range() {
        assert_eq!(classify_status(200, ""), Ok(()));
        assert_eq!(classify_status(204, ""), Ok(()));
    }

    #[test]
    fn test_classify_unauthorized() {
        assert_eq!(
            classify_status(401, r#"{"message":"jwt expired"}"#),
            Err(ApiError::Unauthorized)
        );
    }

    #[test]
    fn test_classify_surfaces_server_message() {
        assert_eq!(
            classify_status(400, r#"{"message":"Invalid category"}"#),
            Err(ApiError::Status {
                status: 400,
                message: "Invalid category".into()
            })
        );
        let err = classify_status(500, "<html>oops</html>").unwrap_err();
        assert_eq!(err.to_string(), "Request failed: 500");
    }

    #[test]
    fn test_query_omits_empty_values() {
        let q = Query {
            search: String::new(),
            page: 2,
        };
        assert_eq!(with_query("/orders", &q).unwrap(), "/orders?page=2");
        let q = Query {
            search: "alice".into(),
            page: 1,
        };
        assert_eq!(
            with_query("/orders", &q).unwrap(),
            "/orders?search=alice&page=1"
        );
    }

    #[test]
    fn test_gateway_url_and_token() {
        let gw = Gateway::new("http://localhost:3000").with_token(Some(String::new()));
        assert!(gw.token.is_none());
        assert_eq!(gw.url("/orders"), "http://localhost:3000/orders");
        assert_eq!(bearer("abc"), "Bearer abc");
        assert_eq!(path_segment("a/b c"), "a%2Fb%20c");
    }

    #[test]
    fn test_unauthorized_outlives_page_owner() {
        let root = Owner::new();
        root.set();
        let fired = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&fired);
        let session_wide = Callback::new(move |_: ()| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        let page = root.child();
        let (shared_gw, page_gw) = page.with(|| {
            let counter = Arc::clone(&fired);
            let page_local = Callback::new(move |_: ()| {
                counter.fetch_add(1, Ordering::SeqCst);
            });
            (
                Gateway::new("http://localhost:3000").on_unauthorized(session_wide),
                Gateway::new("http://localhost:3000").on_unauthorized(page_local),
            )
        });
        drop(page);

        assert!(shared_gw.report_unauthorized());
        assert!(!page_gw.report_unauthorized());
        assert!(!Gateway::new("http://localhost:3000").report_unauthorized());
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }
}
