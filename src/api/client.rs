//! HTTP access to the matching backend.
//!
//! Every request goes through [`ApiClient::request_json`], which resolves the
//! path against the configured base address and collapses transport, status
//! and decoding failures into one [`ApiError`].

use std::fmt;

use log::{debug, warn};
use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Errors that can occur while talking to the backend.
/// Callers usually just log the Display form and fall back to empty data.
#[derive(Debug)]
pub enum ApiError {
    /// Network-level failure (DNS, connection refused, bad URL).
    Network(String),
    /// Backend answered with a non-2xx status. `body` is the raw response text.
    Status { status: u16, body: String },
    /// Response body was not the JSON shape we expected.
    Parse(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::Status { status, body } => write!(f, "Request failed {status}: {body}"),
            ApiError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Normalizes a configured base address.
///
/// Missing or blank values become `""`. Trailing slashes are stripped.
pub fn resolve_base(configured: Option<&str>) -> String {
    match configured.map(str::trim) {
        Some(base) if !base.is_empty() => base.trim_end_matches('/').to_string(),
        _ => String::new(),
    }
}

/// Joins `base` and `path` with exactly one separating slash.
///
/// With an empty base the path is returned as-is, with a leading slash added
/// if it was missing.
pub fn resolve_path(base: &str, path: &str) -> String {
    let path = path.trim_start_matches('/');
    format!("{}/{path}", base.trim_end_matches('/'))
}

/// Thin JSON client bound to one base address.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base: String,
    client: reqwest::Client,
}

impl ApiClient {
    pub fn new(base: Option<&str>) -> Self {
        Self {
            base: resolve_base(base),
            client: reqwest::Client::new(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// The effective request URL for a relative API path.
    pub fn url(&self, path: &str) -> String {
        resolve_path(&self.base, path)
    }

    /// Sends one request and decodes the JSON response.
    ///
    /// Never retries and sets no timeout of its own.
    pub async fn request_json<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.url(path);
        debug!("{} {}", method, url);

        let mut request = self.client.request(method, &url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        debug!("{} -> {}", url, status);

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("API error from {}: {} - {}", url, status.as_u16(), body);
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        serde_json::from_slice(&bytes).map_err(|e| ApiError::Parse(e.to_string()))
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request_json::<T, ()>(Method::GET, path, None).await
    }

    pub async fn post_json<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request_json(Method::POST, path, Some(body)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Macro to generate path resolution cases.
    /// Each case is `name: (base, path) => expected`.
    macro_rules! test_resolve_path {
        ( $($name:ident: ($base:expr, $path:expr) => $expected:expr,)+ ) => {
            $(
                #[test]
                fn $name() {
                    let base = resolve_base($base);
                    assert_eq!(resolve_path(&base, $path), $expected);
                }
            )+
        };
    }

    test_resolve_path! {
        test_no_base_keeps_absolute_path: (None, "/api/internships") => "/api/internships",
        test_no_base_adds_leading_slash: (None, "api/internships") => "/api/internships",
        test_blank_base_counts_as_unset: (Some("   "), "api/candidates") => "/api/candidates",
        test_base_with_trailing_slash: (Some("https://api.example.com/"), "/api/internships") => "https://api.example.com/api/internships",
        test_base_without_trailing_slash: (Some("https://api.example.com"), "/api/internships") => "https://api.example.com/api/internships",
        test_base_and_relative_path: (Some("https://api.example.com/"), "api/internships") => "https://api.example.com/api/internships",
        test_base_with_prefix: (Some("http://localhost:5000/v2"), "api/login") => "http://localhost:5000/v2/api/login",
        test_base_with_repeated_trailing_slashes: (Some("https://api.example.com//"), "/api/internships") => "https://api.example.com/api/internships",
        test_path_with_repeated_leading_slashes: (Some("https://api.example.com"), "//api/internships") => "https://api.example.com/api/internships",
        test_no_base_collapses_leading_slashes: (None, "//api/candidates") => "/api/candidates",
    }

    #[test]
    fn test_resolve_base_strips_trailing_slashes() {
        assert_eq!(resolve_base(Some("http://host/")), "http://host");
        assert_eq!(resolve_base(Some("http://host///")), "http://host");
        assert_eq!(resolve_base(Some(" http://host ")), "http://host");
        assert_eq!(resolve_base(None), "");
    }

    #[test]
    fn test_client_url_uses_resolved_base() {
        let client = ApiClient::new(Some("https://api.example.com/"));
        assert_eq!(client.base(), "https://api.example.com");
        assert_eq!(
            client.url("/api/shortlist/7"),
            "https://api.example.com/api/shortlist/7"
        );
    }

    #[test]
    fn test_status_error_message_carries_status_and_body() {
        let err = ApiError::Status {
            status: 404,
            body: "not found".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("404"));
        assert!(msg.contains("not found"));
    }
}
