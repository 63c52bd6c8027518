//! Bearer-token sessions.
//!
//! The login endpoint returns `{access_token}` in its body. The token is the
//! identity; it is mirrored into storage on sign-in and removed on sign-out,
//! and sent as `Authorization: Bearer` on protected requests.

#[cfg(test)]
#[path = "bearer_test.rs"]
mod bearer_test;

use super::SessionMechanism;
use crate::error::AuthError;
use crate::net::api::{ApiClient, parse_token_response};
use crate::net::transport::Transport;
use crate::net::types::{BearerToken, Credentials, User};
use crate::util::auth::PublicAccess;
use crate::util::token_storage::TokenStorage;

#[derive(Clone, Debug)]
pub struct BearerSession<T, S> {
    api: ApiClient<T>,
    storage: S,
}

impl<T: Transport, S: TokenStorage> BearerSession<T, S> {
    pub fn new(api: ApiClient<T>, storage: S) -> Self {
        Self { api, storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

impl<T: Transport, S: TokenStorage> SessionMechanism for BearerSession<T, S> {
    type Identity = BearerToken;
    type Net = T;

    const PUBLIC_ACCESS: PublicAccess = PublicAccess::RedirectToProfile;

    fn api(&self) -> &ApiClient<T> {
        &self.api
    }

    async fn restore(&self) -> Option<BearerToken> {
        self.storage.load().as_deref().and_then(BearerToken::new)
    }

    async fn sign_in(&self, credentials: &Credentials) -> Result<BearerToken, AuthError> {
        let resp = self.api.login(credentials).await?;
        parse_token_response(&resp.body)
    }

    async fn accept_oauth_token(&self, token: &BearerToken) -> Result<BearerToken, AuthError> {
        Ok(token.clone())
    }

    fn remember(&self, identity: &BearerToken) {
        self.storage.save(identity.as_str());
    }

    fn forget(&self) {
        self.storage.remove();
    }

    async fn end_server_session(&self) {}

    async fn load_profile(&self, identity: &BearerToken) -> Result<User, AuthError> {
        self.api.fetch_profile(Some(identity)).await
    }
}
