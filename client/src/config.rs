//! API endpoint configuration.
//!
//! The only deployment-supplied value is the API base URL. It is inlined at
//! build time from `LYCEUM_API_BASE_URL`, the way bundlers inline `VITE_*`
//! variables, so the WASM bundle and the SSR host agree on it without a
//! runtime fetch.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";

const LOGIN_PATH: &str = "/auth/jwt/login";
const LOGOUT_PATH: &str = "/auth/jwt/logout";
const REGISTER_PATH: &str = "/auth/register";
const GOOGLE_AUTHORIZE_PATH: &str = "/auth/google/authorize";
const PROFILE_PATH: &str = "/profile";

/// Base URL of the remote API plus endpoint builders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Build a config from an explicit base URL. Surrounding whitespace and
    /// trailing slashes are dropped; an empty value falls back to the default.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        let trimmed = base_url.trim().trim_end_matches('/');
        let base_url = if trimmed.is_empty() { DEFAULT_API_BASE_URL } else { trimmed };
        Self { base_url: base_url.to_owned() }
    }

    /// Config baked in at compile time from `LYCEUM_API_BASE_URL`.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::new(option_env!("LYCEUM_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL))
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn login_url(&self) -> String {
        self.endpoint(LOGIN_PATH)
    }

    #[must_use]
    pub fn logout_url(&self) -> String {
        self.endpoint(LOGOUT_PATH)
    }

    #[must_use]
    pub fn register_url(&self) -> String {
        self.endpoint(REGISTER_PATH)
    }

    #[must_use]
    pub fn google_authorize_url(&self) -> String {
        self.endpoint(GOOGLE_AUTHORIZE_PATH)
    }

    #[must_use]
    pub fn profile_url(&self) -> String {
        self.endpoint(PROFILE_PATH)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}
