//! Auth operations: one remote call plus one session transition per
//! user-facing action.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages call these from `spawn_local` tasks, passing the context's session
//! signal as the store and `use_navigate()` as the navigator. A failed
//! operation leaves the store exactly as it was.

#[cfg(test)]
#[path = "ops_test.rs"]
mod ops_test;

use leptos_router::NavigateOptions;

use super::SessionMechanism;
use crate::error::{AuthError, REGISTERED_REDIRECT_DELAY, ScheduledRedirect};
use crate::net::types::{BearerToken, Credentials};
use crate::route::AppRoute;
use crate::state::auth::{AuthState, SessionStore};

fn go<N: Fn(&str, NavigateOptions)>(navigate: &N, route: AppRoute) {
    navigate(route.path(), NavigateOptions::default());
}

/// Resolve the startup session check. Runs once, browser only.
pub async fn initialize<M, S>(mechanism: &M, store: &S)
where
    M: SessionMechanism,
    S: SessionStore<M::Identity>,
{
    let identity = mechanism.restore().await;
    let authenticated = identity.is_some();
    let mut resolved = false;
    store.modify(|state| resolved = state.resolve(identity));
    if resolved {
        log::debug!("session initialized (authenticated: {authenticated})");
    } else {
        log::debug!("session already resolved; discarding startup check");
    }
}

/// Enter the authenticated state and persist the identity where applicable.
pub fn set_authenticated<M, S>(mechanism: &M, store: &S, identity: M::Identity)
where
    M: SessionMechanism,
    S: SessionStore<M::Identity>,
{
    mechanism.remember(&identity);
    store.modify(|state| state.set_authenticated(identity));
}

/// Enter the unauthenticated state and drop any persisted identity.
pub fn clear<M, S>(mechanism: &M, store: &S)
where
    M: SessionMechanism,
    S: SessionStore<M::Identity>,
{
    mechanism.forget();
    store.modify(AuthState::clear);
}

/// Sign in with a username and password, then navigate to `/profile`.
///
/// # Errors
///
/// `Authentication` for rejected credentials, `ProfileFetch` if a cookie
/// login succeeded but the follow-up profile fetch did not,
/// `MalformedResponse` for an unusable token body, `Transport` for network
/// failures. The store is untouched on every error.
pub async fn login_with_password<M, S, N>(
    mechanism: &M,
    store: &S,
    credentials: &Credentials,
    navigate: &N,
) -> Result<(), AuthError>
where
    M: SessionMechanism,
    S: SessionStore<M::Identity>,
    N: Fn(&str, NavigateOptions),
{
    let identity = mechanism.sign_in(credentials).await?;
    set_authenticated(mechanism, store, identity);
    log::info!("signed in as {}", credentials.username);
    go(navigate, AppRoute::Profile);
    Ok(())
}

/// Ingest the token handed to the OAuth callback, then navigate to
/// `/profile`.
///
/// # Errors
///
/// `MissingToken` when the callback carried no usable token; callers should
/// schedule `AuthError::fallback_redirect`. Mechanism errors pass through.
pub async fn login_with_oauth_token<M, S, N>(
    mechanism: &M,
    store: &S,
    token: Option<&str>,
    navigate: &N,
) -> Result<(), AuthError>
where
    M: SessionMechanism,
    S: SessionStore<M::Identity>,
    N: Fn(&str, NavigateOptions),
{
    let token = token.and_then(BearerToken::new).ok_or(AuthError::MissingToken)?;
    let identity = mechanism.accept_oauth_token(&token).await?;
    set_authenticated(mechanism, store, identity);
    log::info!("signed in via oauth callback");
    go(navigate, AppRoute::Profile);
    Ok(())
}

/// Sign out and navigate to `/login`. Local state is cleared even if the
/// server-side logout fails.
pub async fn logout<M, S, N>(mechanism: &M, store: &S, navigate: &N)
where
    M: SessionMechanism,
    S: SessionStore<M::Identity>,
    N: Fn(&str, NavigateOptions),
{
    mechanism.end_server_session().await;
    clear(mechanism, store);
    log::info!("signed out");
    go(navigate, AppRoute::Login);
}

/// Create an account. Does not sign in; on success returns the redirect to
/// `/login` the register page should schedule.
///
/// # Errors
///
/// `Registration` when the API rejects the account, `Transport` on network
/// failure.
pub async fn register_user<M>(mechanism: &M, credentials: &Credentials) -> Result<ScheduledRedirect, AuthError>
where
    M: SessionMechanism,
{
    mechanism.api().register(credentials).await?;
    log::info!("registered {}", credentials.username);
    Ok(ScheduledRedirect { delay: REGISTERED_REDIRECT_DELAY, target: AppRoute::Login })
}

/// Fetch the provider consent URL and hand it to `redirect` for a
/// full-document navigation.
///
/// # Errors
///
/// `OAuthInit` if the URL could not be obtained; `redirect` is not called.
pub async fn begin_oauth_login<M, R>(mechanism: &M, redirect: R) -> Result<(), AuthError>
where
    M: SessionMechanism,
    R: FnOnce(&str),
{
    let url = mechanism.api().authorization_url().await?;
    redirect(&url);
    Ok(())
}
