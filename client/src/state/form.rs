//! Per-form submission status.
//!
//! Pages keep one `FormStatus` signal per form. `begin` refuses to start a
//! second submission while one is in flight, and the submit button's
//! `disabled` attribute reads the same signal.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use leptos::prelude::*;

use crate::net::types::Credentials;

pub const MISSING_CREDENTIALS_MESSAGE: &str = "Enter both a username and a password.";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Failed(String),
    Succeeded(String),
}

impl FormStatus {
    /// Enter `Submitting`. Returns `false` if a submission is already running.
    pub fn begin(&mut self) -> bool {
        if self.is_submitting() {
            return false;
        }
        *self = Self::Submitting;
        true
    }

    /// Validate input and enter `Submitting`. Returns the credentials to send,
    /// or `None` when a submission is already in flight (status untouched) or
    /// the input is blank (status becomes `Failed`).
    pub fn start(&mut self, username: &str, password: &str) -> Option<Credentials> {
        if self.is_submitting() {
            return None;
        }
        match credentials_from_input(username, password) {
            Ok(credentials) => {
                *self = Self::Submitting;
                Some(credentials)
            }
            Err(message) => {
                self.fail(message);
                None
            }
        }
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        *self = Self::Failed(message.into());
    }

    pub fn succeed(&mut self, message: impl Into<String>) {
        *self = Self::Succeeded(message.into());
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    #[must_use]
    pub fn success(&self) -> Option<&str> {
        match self {
            Self::Succeeded(message) => Some(message),
            _ => None,
        }
    }
}

/// Validate raw form input. Both fields must be non-empty; the username is
/// trimmed, the password is sent exactly as typed.
///
/// # Errors
///
/// Returns the inline message to show when either field is blank.
pub fn credentials_from_input(username: &str, password: &str) -> Result<Credentials, &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err(MISSING_CREDENTIALS_MESSAGE);
    }
    Ok(Credentials::new(username, password))
}

/// Inline error text for `status`, for views.
pub fn error_text(status: RwSignal<FormStatus>) -> Signal<Option<String>> {
    Signal::derive(move || status.with(|s| s.error().map(str::to_owned)))
}

/// Inline success text for `status`, for views.
pub fn success_text(status: RwSignal<FormStatus>) -> Signal<Option<String>> {
    Signal::derive(move || status.with(|s| s.success().map(str::to_owned)))
}
