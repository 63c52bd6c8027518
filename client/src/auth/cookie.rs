//! Cookie-backed sessions.
//!
//! The API sets an HTTP-only session cookie on login; the client never sees
//! it and derives identity from `GET /profile` instead.

#[cfg(test)]
#[path = "cookie_test.rs"]
mod cookie_test;

use super::SessionMechanism;
use crate::error::AuthError;
use crate::net::api::ApiClient;
use crate::net::transport::Transport;
use crate::net::types::{BearerToken, Credentials, User};
use crate::util::auth::PublicAccess;

#[derive(Clone, Debug)]
pub struct CookieSession<T> {
    api: ApiClient<T>,
}

impl<T: Transport> CookieSession<T> {
    pub fn new(api: ApiClient<T>) -> Self {
        Self { api }
    }

    /// Profile fetch after the server has set a cookie. Any failure becomes
    /// `ProfileFetch`.
    async fn profile_after_sign_in(&self) -> Result<User, AuthError> {
        self.api.fetch_profile(None).await.map_err(|e| {
            log::warn!("signed in but profile fetch failed: {e}");
            AuthError::ProfileFetch
        })
    }
}

impl<T: Transport> SessionMechanism for CookieSession<T> {
    type Identity = User;
    type Net = T;

    const PUBLIC_ACCESS: PublicAccess = PublicAccess::Allow;

    fn api(&self) -> &ApiClient<T> {
        &self.api
    }

    async fn restore(&self) -> Option<User> {
        match self.api.fetch_profile(None).await {
            Ok(user) => Some(user),
            Err(AuthError::ProfileFetch) => None,
            Err(e) => {
                log::warn!("session check failed: {e}");
                None
            }
        }
    }

    async fn sign_in(&self, credentials: &Credentials) -> Result<User, AuthError> {
        self.api.login(credentials).await?;
        self.profile_after_sign_in().await
    }

    async fn accept_oauth_token(&self, _token: &BearerToken) -> Result<User, AuthError> {
        // The backend set the cookie before redirecting here.
        self.profile_after_sign_in().await
    }

    fn remember(&self, _identity: &User) {}

    fn forget(&self) {}

    async fn end_server_session(&self) {
        if let Err(e) = self.api.logout().await {
            log::warn!("best-effort logout failed: {e}");
        }
    }

    async fn load_profile(&self, identity: &User) -> Result<User, AuthError> {
        Ok(identity.clone())
    }
}
