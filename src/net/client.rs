//! HTTP client wrapper bound to the kitchen API origin.
//!
//! DESIGN
//! ======
//! `ApiClient` shapes every request the same way: absolute URL from the fixed
//! base origin, JSON content type, and a bearer token read from the
//! `SessionManager` at send time. Reading the token per request means sign-in
//! and sign-out take effect on the next call without rebuilding the client.
//!
//! The actual I/O sits behind the `Transport` trait. The browser build uses
//! `FetchTransport` (gloo-net); tests plug in a recording fake.
//!
//! Each request is sent exactly once. There is no retry, timeout or caching,
//! and the response comes back to the caller untouched.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use std::fmt;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::state::session::SessionManager;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Get => "GET",
            Self::Post => "POST",
        })
    }
}

/// A fully shaped request, ready for a transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl ApiRequest {
    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Raw response as delivered by the transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Turn a non-2xx response into [`ApiError::Status`].
    ///
    /// # Errors
    ///
    /// Returns an error when the status is outside `200..300`.
    pub fn error_for_status(self) -> Result<Self, ApiError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(ApiError::Status { status: self.status })
        }
    }

    /// Decode the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the body is not valid JSON for `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_str(&self.body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Transport(String),
    #[error("http status {status}")]
    Status { status: u16 },
    #[error("response decode failed: {0}")]
    Decode(String),
    #[error("request encode failed: {0}")]
    Encode(String),
}

/// Single seam between the client and the network.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Send `request` once.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] when no response was received.
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
}

/// Request-issuing client bound to one origin.
#[derive(Clone)]
pub struct ApiClient<T> {
    base_url: String,
    session: SessionManager,
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(config: &ClientConfig, session: SessionManager, transport: T) -> Self {
        Self { base_url: config.api_base_url.clone(), session, transport }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &SessionManager {
        &self.session
    }

    /// Absolute URL for an API path such as `/restaurants`.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}/{path}", self.base_url)
        }
    }

    /// Shape a request, attaching the bearer token if one is stored right now.
    pub fn build_request(&self, method: Method, path: &str, body: Option<String>) -> ApiRequest {
        let mut headers = vec![("Content-Type".to_owned(), "application/json".to_owned())];
        if let Some(token) = self.session.token() {
            headers.push(("Authorization".to_owned(), format!("Bearer {token}")));
        }
        ApiRequest { method, url: self.url(path), headers, body }
    }

    /// # Errors
    ///
    /// Propagates the transport's error unchanged.
    pub async fn get(&self, path: &str) -> Result<ApiResponse, ApiError> {
        self.execute(self.build_request(Method::Get, path, None)).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError::Encode`] if `body` cannot be serialized, otherwise
    /// propagates the transport's error unchanged.
    pub async fn post_json<B: Serialize>(&self, path: &str, body: &B) -> Result<ApiResponse, ApiError> {
        let payload = serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        self.execute(self.build_request(Method::Post, path, Some(payload))).await
    }

    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        log::debug!("{} {}", request.method, request.url);
        let response = self.transport.send(request).await?;
        log::debug!("-> {}", response.status);
        Ok(response)
    }
}

/// Browser transport backed by `fetch` through gloo-net.
#[cfg(feature = "csr")]
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

#[cfg(feature = "csr")]
impl Transport for FetchTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let mut builder = match request.method {
            Method::Get => gloo_net::http::Request::get(&request.url),
            Method::Post => gloo_net::http::Request::post(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        let prepared = match request.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Transport(e.to_string()))?;

        let resp = prepared.send().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(ApiResponse { status, body })
    }
}

#[cfg(feature = "csr")]
pub type BrowserClient = ApiClient<FetchTransport>;
