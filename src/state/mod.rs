//! Shared application state provided via Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` holds the server snapshots, `notify` the transient notification
//! banner, and `ui` the local tab selection. Each lives behind its own
//! `RwSignal` so widgets subscribe only to what they render.

pub mod notify;
pub mod session;
pub mod ui;
