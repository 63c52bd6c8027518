//! Client-facing routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages, the route guard, and auth operations all name destinations through
//! `AppRoute` so navigation targets cannot drift from the router table.

#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

/// Every route the router knows about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Root,
    Login,
    Register,
    AuthCallback,
    Profile,
}

impl AppRoute {
    /// Absolute path for this route.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Root => "/",
            Self::Login => "/login",
            Self::Register => "/register",
            Self::AuthCallback => "/auth/callback",
            Self::Profile => "/profile",
        }
    }

    /// Routes that require an authenticated session.
    #[must_use]
    pub const fn is_protected(self) -> bool {
        matches!(self, Self::Profile)
    }
}
