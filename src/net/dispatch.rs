//! Action dispatch and state refresh orchestration.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every user action follows the same contract: POST to its endpoint, show
//! the server's message (or a generic fault notice), and on success resync
//! the whole session from the backend with one reload. There is no
//! optimistic update and no guess about what the action changed.
//!
//! Dispatches are deliberately not guarded against re-entrancy: rapid
//! repeated clicks issue overlapping requests and the last response to
//! resolve wins, overwriting the session snapshot wholesale.

#[cfg(test)]
#[path = "dispatch_test.rs"]
mod dispatch_test;

use std::future::Future;

use leptos::prelude::*;

use super::api;
use super::types::{ActionReply, LoadReply};
use crate::state::notify::{NoticeKind, NoticeState};
use crate::state::session::SessionState;

/// Generic notice when the user load fails at the transport layer.
pub const LOAD_FAILED_NOTICE: &str = "Failed to load your garage data";
/// Terminal notice when the host supplies no player identity.
pub const MISSING_IDENTITY_NOTICE: &str = "Could not resolve your player id";
pub const TUNE_FAILED_NOTICE: &str = "Tuning failed";
pub const PURCHASE_FAILED_NOTICE: &str = "Purchase failed";
pub const INSTALL_FAILED_NOTICE: &str = "Installation failed";
pub const RACE_FAILED_NOTICE: &str = "Race failed to start";
/// Fixed notice for the engine-purchase stub; it never goes to the network.
pub const ENGINE_SHOP_STUB_NOTICE: &str = "Engine purchases are still in development";
/// Fixed notice for the wiring-upgrade stub; it never goes to the network.
pub const WIRING_STUB_NOTICE: &str = "Wiring upgrades arrive in a future update";

/// How an action endpoint signals its outcome sentiment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReplyStyle {
    /// Any non-error reply is styled as a success.
    AlwaysSuccess,
    /// The reply's `success` flag picks the styling (valve tuning).
    SuccessFlag,
    /// The reply's `is_winner` flag picks the styling (races).
    WinnerFlag,
}

/// What the UI does with a dispatcher's reply.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub message: String,
    pub kind: NoticeKind,
    /// Whether to resync session state from the backend.
    pub refresh: bool,
}

/// Turn an action reply (or transport fault) into a notification and an
/// optional refresh.
///
/// A backend-reported `error` and a transport fault both suppress the
/// refresh so in-memory state stays exactly as it was; only a non-error
/// reply triggers the single resync.
pub fn decide(result: Result<ActionReply, String>, style: ReplyStyle, fallback: &str) -> Outcome {
    let Ok(reply) = result else {
        return Outcome {
            message: fallback.to_owned(),
            kind: NoticeKind::Error,
            refresh: false,
        };
    };
    if let Some(error) = reply.error {
        return Outcome {
            message: error,
            kind: NoticeKind::Error,
            refresh: false,
        };
    }
    let kind = match style {
        ReplyStyle::AlwaysSuccess => NoticeKind::Success,
        ReplyStyle::SuccessFlag => NoticeKind::from_outcome(reply.success.unwrap_or(false)),
        ReplyStyle::WinnerFlag => NoticeKind::from_outcome(reply.is_winner.unwrap_or(false)),
    };
    Outcome {
        message: reply.message.unwrap_or_default(),
        kind,
        refresh: true,
    }
}

/// Apply a user-load reply to the session, surfacing failures as notices.
///
/// On a domain error or transport fault the snapshots keep their previous
/// values; only a full snapshot replaces them.
pub fn apply_load(
    session: &mut SessionState,
    notice: &mut NoticeState,
    reply: Result<LoadReply, String>,
) {
    match reply {
        Ok(LoadReply::User(user)) => session.replace(*user),
        Ok(LoadReply::Failure { error }) => notice.post(error, NoticeKind::Error),
        Err(_) => notice.post(LOAD_FAILED_NOTICE, NoticeKind::Error),
    }
}

/// Reload the session snapshot from the backend.
///
/// No-ops when identity resolution failed, keeping the session in its
/// terminal no-network state.
pub async fn refresh(session: RwSignal<SessionState>, notify: RwSignal<NoticeState>) {
    let Some(id) = session.with_untracked(|s| s.identity.clone()) else {
        return;
    };
    let reply = api::fetch_user(&id).await;
    if let Err(err) = &reply {
        log::error!("failed to load user data: {err}");
    }
    session.update(|s| notify.update(|n| apply_load(s, n, reply)));
}

/// Run one action dispatch end to end: await the request, post the outcome
/// notification, and resync state exactly once on success.
pub async fn run(
    session: RwSignal<SessionState>,
    notify: RwSignal<NoticeState>,
    style: ReplyStyle,
    fallback: &'static str,
    request: impl Future<Output = Result<ActionReply, String>>,
) {
    let result = request.await;
    if let Err(err) = &result {
        log::error!("action dispatch failed: {err}");
    }
    let outcome = decide(result, style, fallback);
    notify.update(|n| n.post(outcome.message, outcome.kind));
    if outcome.refresh {
        refresh(session, notify).await;
    }
}
