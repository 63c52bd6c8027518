//! Error taxonomy for auth operations.
//!
//! ERROR HANDLING
//! ==============
//! Every variant is caught by the page that started the operation and turned
//! into one inline message. Nothing is retried or reported upstream.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use std::time::Duration;

use crate::route::AppRoute;

/// How long the callback page shows its error before returning to login.
pub const MISSING_TOKEN_REDIRECT_DELAY: Duration = Duration::from_secs(3);

/// How long the register page shows its success message before returning to login.
pub const REGISTERED_REDIRECT_DELAY: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("invalid credentials")]
    Authentication,
    #[error("registration rejected (username likely taken)")]
    Registration,
    #[error("profile fetch failed")]
    ProfileFetch,
    #[error("no token in oauth callback")]
    MissingToken,
    #[error("could not obtain oauth authorization url")]
    OAuthInit,
    #[error("malformed response: {0}")]
    MalformedResponse(String),
    #[error("transport error: {0}")]
    Transport(String),
}

impl AuthError {
    /// Navigation the initiating page should schedule after showing this error.
    #[must_use]
    pub fn fallback_redirect(&self) -> Option<ScheduledRedirect> {
        match self {
            Self::MissingToken => Some(ScheduledRedirect { delay: MISSING_TOKEN_REDIRECT_DELAY, target: AppRoute::Login }),
            _ => None,
        }
    }
}

/// A one-shot navigation to run after a fixed delay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduledRedirect {
    pub delay: Duration,
    pub target: AppRoute,
}
