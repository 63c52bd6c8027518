//! Networking modules for the remote Lyceum API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` is the single seam every request goes through, `api` turns
//! endpoint calls into typed results, and `types` defines the wire schema.

pub mod api;
pub mod transport;
pub mod types;
