//! Route guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every routed view asks `decide_route` what to show so all routes apply
//! identical placeholder and redirect behavior. The function is pure; the
//! `Guarded` component turns its answer into a view.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::route::AppRoute;
use crate::state::auth::{AuthState, SessionPhase};

/// What an authenticated user sees on `/login` and `/register`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PublicAccess {
    /// Render the public page anyway.
    Allow,
    /// Bounce to `/profile`.
    RedirectToProfile,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    /// Session still loading: render a neutral placeholder, never redirect.
    Placeholder,
    Render,
    Redirect(AppRoute),
}

/// Decide what to render for `route` given the current session.
pub fn decide_route<I>(route: AppRoute, state: &AuthState<I>, public_access: PublicAccess) -> RouteDecision {
    let authenticated = match state.phase() {
        SessionPhase::Loading => return RouteDecision::Placeholder,
        SessionPhase::Authenticated => true,
        SessionPhase::Unauthenticated => false,
    };
    match route {
        AppRoute::Root if authenticated => RouteDecision::Redirect(AppRoute::Profile),
        AppRoute::Root => RouteDecision::Redirect(AppRoute::Login),
        route if route.is_protected() && !authenticated => RouteDecision::Redirect(AppRoute::Login),
        AppRoute::Login | AppRoute::Register
            if authenticated && public_access == PublicAccess::RedirectToProfile =>
        {
            RouteDecision::Redirect(AppRoute::Profile)
        }
        _ => RouteDecision::Render,
    }
}
