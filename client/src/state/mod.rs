//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `auth` holds the process-wide session; `form` holds per-form submission
//! status so pages can refuse re-entrant submits.

pub mod auth;
pub mod form;
