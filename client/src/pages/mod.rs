//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (form status, delayed
//! redirects) and delegates session changes to `auth::ops`.

pub mod auth_callback;
pub mod login;
pub mod profile;
pub mod register;
