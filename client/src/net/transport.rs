//! HTTP transport seam.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call fails with `AuthError::Transport` since the
//! API is only meaningful from the browser, where the session cookie lives.
//!
//! DESIGN
//! ======
//! Requests are described as plain data (`ApiRequest`) so endpoint builders
//! and response handling can be unit-tested against a scripted transport.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use std::fmt;

use crate::error::AuthError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// Encoded request body plus the content type it implies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RequestBody {
    Empty,
    Form(String),
    Json(String),
}

impl RequestBody {
    #[must_use]
    pub fn content_type(&self) -> Option<&'static str> {
        match self {
            Self::Empty => None,
            Self::Form(_) => Some("application/x-www-form-urlencoded"),
            Self::Json(_) => Some("application/json"),
        }
    }
}

/// A single outbound API call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub url: String,
    pub body: RequestBody,
    /// Send cookies cross-origin (`credentials: "include"`).
    pub with_credentials: bool,
    /// Raw bearer token for the `Authorization` header.
    pub bearer: Option<String>,
}

impl ApiRequest {
    #[must_use]
    pub fn get(url: String) -> Self {
        Self::new(HttpMethod::Get, url)
    }

    #[must_use]
    pub fn post(url: String) -> Self {
        Self::new(HttpMethod::Post, url)
    }

    fn new(method: HttpMethod, url: String) -> Self {
        Self { method, url, body: RequestBody::Empty, with_credentials: false, bearer: None }
    }

    #[must_use]
    pub fn credentialed(mut self) -> Self {
        self.with_credentials = true;
        self
    }

    #[must_use]
    pub fn bearer(mut self, token: &str) -> Self {
        self.bearer = Some(token.to_owned());
        self
    }

    #[must_use]
    pub fn body(mut self, body: RequestBody) -> Self {
        self.body = body;
        self
    }
}

/// Status and raw body of a completed call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends `ApiRequest`s. Futures are `!Send` in the browser, so callers spawn
/// them with `spawn_local`.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Dispatch one request. Non-2xx statuses are returned as `Ok`; only
    /// network-level failures are `Err`.
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, AuthError>;
}

/// `fetch`-backed transport used by the running application.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

impl Transport for BrowserTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            send_fetch(request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(AuthError::Transport("not available on server".to_owned()))
        }
    }
}

#[cfg(feature = "hydrate")]
async fn send_fetch(request: ApiRequest) -> Result<ApiResponse, AuthError> {
    use gloo_net::http::{Method, RequestBuilder};

    let transport_err = |e: gloo_net::Error| AuthError::Transport(e.to_string());

    log::debug!("{:?} {}", request.method, request.url);
    let method = match request.method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
    };
    let mut builder = RequestBuilder::new(&request.url).method(method);
    if request.with_credentials {
        builder = builder.credentials(web_sys::RequestCredentials::Include);
    }
    if let Some(token) = &request.bearer {
        builder = builder.header("Authorization", &format!("Bearer {token}"));
    }
    if let Some(content_type) = request.body.content_type() {
        builder = builder.header("Content-Type", content_type);
    }
    let built = match request.body {
        RequestBody::Empty => builder.build(),
        RequestBody::Form(encoded) | RequestBody::Json(encoded) => builder.body(encoded),
    }
    .map_err(transport_err)?;

    let resp = built.send().await.map_err(transport_err)?;
    completed(resp.status(), resp.text().await)
}

/// Assemble a response once the body has been read. An unreadable body is a
/// transport failure, not an empty body.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn completed<E: fmt::Display>(status: u16, body: Result<String, E>) -> Result<ApiResponse, AuthError> {
    let body = body.map_err(|e| AuthError::Transport(format!("reading response body: {e}")))?;
    Ok(ApiResponse { status, body })
}
