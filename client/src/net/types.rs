//! Wire DTOs for the client/API boundary.
//!
//! DESIGN
//! ======
//! Response bodies are deserialized into these types at the boundary so that
//! a missing or mistyped field becomes `AuthError::MalformedResponse` instead
//! of leaking an unchecked shape into the session store.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// An authenticated user as returned by `GET /profile`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// Account email address.
    pub email: String,
}

/// Opaque bearer credential issued by `POST /auth/jwt/login` or the OAuth
/// callback.
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    /// Wrap a raw token; empty or whitespace-only input is rejected. The
    /// value is otherwise kept byte-for-byte so state and storage agree.
    #[must_use]
    pub fn new(raw: &str) -> Option<Self> {
        if raw.trim().is_empty() { None } else { Some(Self(raw.to_owned())) }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BearerToken(<redacted>)")
    }
}

/// Username + password pair submitted by the login and register forms.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self { username: username.into(), password: password.into() }
    }

    /// `application/x-www-form-urlencoded` body for the login endpoint.
    #[must_use]
    pub fn form_encoded(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .append_pair("username", &self.username)
            .append_pair("password", &self.password)
            .finish()
    }

    /// JSON body for the registration endpoint.
    ///
    /// # Errors
    ///
    /// Returns `MalformedResponse` if serialization fails, which only happens
    /// for non-UTF-8 input that `String` already rules out.
    pub fn to_json(&self) -> Result<String, crate::error::AuthError> {
        serde_json::to_string(self).map_err(|e| crate::error::AuthError::MalformedResponse(e.to_string()))
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Body of a successful token-mode login. `token_type` is always `"bearer"`
/// and is ignored.
#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    pub access_token: String,
}

/// Body of `GET /auth/google/authorize`.
#[derive(Debug, Deserialize)]
pub(crate) struct AuthorizeResponse {
    pub authorization_url: String,
}
