//! Session mechanisms and the auth operations built on them.
//!
//! ARCHITECTURE
//! ============
//! Two mutually exclusive mechanisms exist: `cookie` (the server sets a
//! session cookie and `/profile` is the source of identity) and `bearer` (a
//! token is issued to the client and mirrored into `localStorage`). A build
//! compiles exactly one in as `ActiveSession`, chosen by the `bearer-token`
//! feature; `ops` is written once against the `SessionMechanism` trait.

pub mod bearer;
pub mod cookie;
pub mod ops;

use std::fmt;

use leptos::prelude::*;

use crate::config::ApiConfig;
use crate::error::AuthError;
use crate::net::api::ApiClient;
use crate::net::transport::{BrowserTransport, Transport};
use crate::net::types::{BearerToken, Credentials, User};
use crate::state::auth::AuthState;
use crate::util::auth::PublicAccess;

/// How identity is obtained, persisted, and dropped for one session design.
#[allow(async_fn_in_trait)]
pub trait SessionMechanism {
    type Identity: Clone + fmt::Debug + PartialEq;
    type Net: Transport;

    /// Guard policy for `/login` and `/register` while signed in.
    const PUBLIC_ACCESS: PublicAccess;

    fn api(&self) -> &ApiClient<Self::Net>;

    /// Startup check. `None` means "not signed in"; failures are not surfaced.
    async fn restore(&self) -> Option<Self::Identity>;

    /// Exchange credentials for an identity.
    async fn sign_in(&self, credentials: &Credentials) -> Result<Self::Identity, AuthError>;

    /// Turn a token delivered to the OAuth callback into an identity.
    async fn accept_oauth_token(&self, token: &BearerToken) -> Result<Self::Identity, AuthError>;

    /// Persist a newly authenticated identity.
    fn remember(&self, identity: &Self::Identity);

    /// Drop any persisted identity.
    fn forget(&self);

    /// Best-effort server-side invalidation. Never fails.
    async fn end_server_session(&self);

    /// Profile details for display.
    async fn load_profile(&self, identity: &Self::Identity) -> Result<User, AuthError>;
}

#[cfg(not(feature = "bearer-token"))]
pub type ActiveSession = cookie::CookieSession<BrowserTransport>;

#[cfg(feature = "bearer-token")]
pub type ActiveSession = bearer::BearerSession<BrowserTransport, crate::util::token_storage::LocalTokenStorage>;

/// Identity type held by the active session mechanism.
pub type Identity = <ActiveSession as SessionMechanism>::Identity;

/// Build the mechanism compiled into this binary.
#[must_use]
pub fn active_session(config: ApiConfig) -> ActiveSession {
    let api = ApiClient::new(BrowserTransport, config);
    #[cfg(not(feature = "bearer-token"))]
    {
        cookie::CookieSession::new(api)
    }
    #[cfg(feature = "bearer-token")]
    {
        bearer::BearerSession::new(api, crate::util::token_storage::LocalTokenStorage)
    }
}

/// Session store plus mechanism, provided to every page via context.
#[derive(Clone)]
pub struct SessionContext {
    pub state: RwSignal<AuthState<Identity>>,
    pub mechanism: ActiveSession,
}

impl SessionContext {
    #[must_use]
    pub fn new(mechanism: ActiveSession) -> Self {
        Self { state: RwSignal::new(AuthState::new()), mechanism }
    }
}
