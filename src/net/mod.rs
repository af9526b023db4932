//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP calls, `types` defines the wire schema, and
//! `dispatch` turns action replies into notifications plus the follow-up
//! state refresh.

pub mod api;
pub mod dispatch;
pub mod types;
