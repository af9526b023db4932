//! REST API helpers for the garage backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native (tests): stubs returning an error string, since these endpoints
//! are only reachable from inside the webview.
//!
//! ERROR HANDLING
//! ==============
//! Every helper returns `Result<_, String>` instead of panicking; callers
//! absorb transport faults into a notification and leave state untouched.
//! The reply body is decoded regardless of HTTP status because the backend
//! reports domain errors in-band via an `error` field.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ActionReply, LoadReply};

#[cfg(any(test, feature = "csr"))]
fn user_endpoint(id: &str) -> String {
    format!("/api/user/{id}")
}

#[cfg(any(test, feature = "csr"))]
fn tune_valves_endpoint(id: &str) -> String {
    format!("/api/tune/valves/{id}")
}

#[cfg(any(test, feature = "csr"))]
fn tune_engine_endpoint(id: &str) -> String {
    format!("/api/tune/engine/{id}")
}

#[cfg(any(test, feature = "csr"))]
fn upgrade_turbo_endpoint(id: &str, level: u32) -> String {
    format!("/api/upgrade/turbo/{id}?level={level}")
}

#[cfg(any(test, feature = "csr"))]
fn upgrade_suspension_endpoint(id: &str, level: u32) -> String {
    format!("/api/upgrade/suspension/{id}?level={level}")
}

#[cfg(any(test, feature = "csr"))]
fn upgrade_subwoofer_endpoint(id: &str, level: u32, brand: &str, genre: &str) -> String {
    format!("/api/upgrade/subwoofer/{id}?level={level}&brand={brand}&genre={genre}")
}

#[cfg(any(test, feature = "csr"))]
fn race_bot_endpoint(id: &str) -> String {
    format!("/api/race/bot/{id}")
}

/// Fetch the player snapshot from `GET /api/user/{id}`.
///
/// # Errors
///
/// Returns an error string on transport or JSON-decode failure.
pub async fn fetch_user(id: &str) -> Result<LoadReply, String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(&user_endpoint(id))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        resp.json::<LoadReply>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
        Err("not available outside the browser".to_owned())
    }
}

#[cfg(feature = "csr")]
async fn post_action(url: &str) -> Result<ActionReply, String> {
    let resp = gloo_net::http::Request::post(url)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    resp.json::<ActionReply>().await.map_err(|e| e.to_string())
}

#[cfg(not(feature = "csr"))]
async fn post_action(url: &str) -> Result<ActionReply, String> {
    let _ = url;
    Err("not available outside the browser".to_owned())
}

/// `POST /api/tune/valves/{id}`.
///
/// # Errors
///
/// Returns an error string on transport or JSON-decode failure.
pub async fn tune_valves(id: &str) -> Result<ActionReply, String> {
    #[cfg(feature = "csr")]
    let url = tune_valves_endpoint(id);
    #[cfg(not(feature = "csr"))]
    let url = id.to_owned();
    post_action(&url).await
}

/// `POST /api/tune/engine/{id}`.
///
/// # Errors
///
/// Returns an error string on transport or JSON-decode failure.
pub async fn tune_engine(id: &str) -> Result<ActionReply, String> {
    #[cfg(feature = "csr")]
    let url = tune_engine_endpoint(id);
    #[cfg(not(feature = "csr"))]
    let url = id.to_owned();
    post_action(&url).await
}

/// `POST /api/upgrade/turbo/{id}?level={level}`.
///
/// # Errors
///
/// Returns an error string on transport or JSON-decode failure.
pub async fn upgrade_turbo(id: &str, level: u32) -> Result<ActionReply, String> {
    #[cfg(feature = "csr")]
    let url = upgrade_turbo_endpoint(id, level);
    #[cfg(not(feature = "csr"))]
    let url = {
        let _ = level;
        id.to_owned()
    };
    post_action(&url).await
}

/// `POST /api/upgrade/suspension/{id}?level={level}`.
///
/// # Errors
///
/// Returns an error string on transport or JSON-decode failure.
pub async fn upgrade_suspension(id: &str, level: u32) -> Result<ActionReply, String> {
    #[cfg(feature = "csr")]
    let url = upgrade_suspension_endpoint(id, level);
    #[cfg(not(feature = "csr"))]
    let url = {
        let _ = level;
        id.to_owned()
    };
    post_action(&url).await
}

/// `POST /api/upgrade/subwoofer/{id}?level&brand&genre`.
///
/// # Errors
///
/// Returns an error string on transport or JSON-decode failure.
pub async fn upgrade_subwoofer(
    id: &str,
    level: u32,
    brand: &str,
    genre: &str,
) -> Result<ActionReply, String> {
    #[cfg(feature = "csr")]
    let url = upgrade_subwoofer_endpoint(id, level, brand, genre);
    #[cfg(not(feature = "csr"))]
    let url = {
        let _ = (level, brand, genre);
        id.to_owned()
    };
    post_action(&url).await
}

/// `POST /api/race/bot/{id}`.
///
/// # Errors
///
/// Returns an error string on transport or JSON-decode failure.
pub async fn race_bot(id: &str) -> Result<ActionReply, String> {
    #[cfg(feature = "csr")]
    let url = race_bot_endpoint(id);
    #[cfg(not(feature = "csr"))]
    let url = id.to_owned();
    post_action(&url).await
}
