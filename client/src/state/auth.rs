//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the route guard and user-aware pages to coordinate login redirects
//! and identity-dependent rendering. Only auth operations write to it.
//!
//! DESIGN
//! ======
//! The identity is private so "authenticated" cannot disagree with "has an
//! identity". `loading` starts `true` and can only ever move to `false`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::cell::RefCell;

use leptos::prelude::*;

/// Coarse session phase derived from `AuthState`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    Loading,
    Authenticated,
    Unauthenticated,
}

/// Authentication state generic over the identity the active session
/// mechanism holds (a `User` for cookie sessions, a `BearerToken` otherwise).
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState<I> {
    identity: Option<I>,
    loading: bool,
}

impl<I> Default for AuthState<I> {
    fn default() -> Self {
        Self { identity: None, loading: true }
    }
}

impl<I> AuthState<I> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Settle the startup check. Returns `false` (and changes nothing) if the
    /// session was already resolved, e.g. by a login that finished first.
    pub fn resolve(&mut self, identity: Option<I>) -> bool {
        if !self.loading {
            return false;
        }
        self.identity = identity;
        self.loading = false;
        true
    }

    pub fn set_authenticated(&mut self, identity: I) {
        self.identity = Some(identity);
        self.loading = false;
    }

    pub fn clear(&mut self) {
        self.identity = None;
        self.loading = false;
    }

    #[must_use]
    pub fn identity(&self) -> Option<&I> {
        self.identity.as_ref()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        match (self.is_loading(), self.is_authenticated()) {
            (true, _) => SessionPhase::Loading,
            (false, true) => SessionPhase::Authenticated,
            (false, false) => SessionPhase::Unauthenticated,
        }
    }
}

/// Single-writer handle onto an `AuthState`.
///
/// The application uses an `RwSignal`; tests use a `RefCell`.
pub trait SessionStore<I> {
    fn snapshot(&self) -> AuthState<I>;
    fn modify(&self, f: impl FnOnce(&mut AuthState<I>));
}

impl<I> SessionStore<I> for RwSignal<AuthState<I>>
where
    I: Clone + Send + Sync + 'static,
{
    fn snapshot(&self) -> AuthState<I> {
        self.get_untracked()
    }

    fn modify(&self, f: impl FnOnce(&mut AuthState<I>)) {
        self.update(f);
    }
}

impl<I: Clone> SessionStore<I> for RefCell<AuthState<I>> {
    fn snapshot(&self) -> AuthState<I> {
        self.borrow().clone()
    }

    fn modify(&self, f: impl FnOnce(&mut AuthState<I>)) {
        f(&mut self.borrow_mut());
    }
}
