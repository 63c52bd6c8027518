//! Reusable UI components.
//!
//! ARCHITECTURE
//! ============
//! `guarded` applies the route guard around page views; `auth_card` is the
//! shared frame for the public auth forms.

pub mod auth_card;
pub mod guarded;
