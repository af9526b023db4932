//! Tuning pane: valve and engine tune dispatchers.

use leptos::prelude::*;

use crate::net::dispatch::{self, ReplyStyle};
use crate::state::notify::NoticeState;
use crate::state::session::SessionState;

/// Tuning pane with one-click valve and engine tunes.
///
/// Dispatches are fire-and-forget: the outcome arrives as a notification
/// plus a full state resync. Nothing blocks a second click while a request
/// is in flight; the last response to land wins.
#[component]
pub fn TuningPanel() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let notify = expect_context::<RwSignal<NoticeState>>();

    let tuned = move |pick: fn(&crate::net::types::CarSnapshot) -> bool| {
        session.with(|s| s.car.as_ref().is_some_and(pick))
    };

    let on_tune_valves = move |_| {
        let Some(id) = session.with_untracked(|s| s.identity.clone()) else {
            return;
        };
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            dispatch::run(
                session,
                notify,
                ReplyStyle::SuccessFlag,
                dispatch::TUNE_FAILED_NOTICE,
                crate::net::api::tune_valves(&id),
            )
            .await;
        });
        #[cfg(not(feature = "csr"))]
        let _ = (id, notify);
    };

    let on_tune_engine = move |_| {
        let Some(id) = session.with_untracked(|s| s.identity.clone()) else {
            return;
        };
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            dispatch::run(
                session,
                notify,
                ReplyStyle::AlwaysSuccess,
                dispatch::TUNE_FAILED_NOTICE,
                crate::net::api::tune_engine(&id),
            )
            .await;
        });
        #[cfg(not(feature = "csr"))]
        let _ = (id, notify);
    };

    view! {
        <section class="tuning-panel">
            <div class="tuning-panel__row">
                <div>
                    <h3>"Valve tuning"</h3>
                    <p class="tuning-panel__hint">
                        {move || {
                            if tuned(|c| c.valves_tuned) {
                                "Valves are dialed in."
                            } else {
                                "Adjust valve clearances for extra power."
                            }
                        }}
                    </p>
                </div>
                <button class="btn btn--primary" on:click=on_tune_valves>
                    "Tune valves"
                </button>
            </div>

            <div class="tuning-panel__row">
                <div>
                    <h3>"Engine tuning"</h3>
                    <p class="tuning-panel__hint">
                        {move || {
                            if tuned(|c| c.engine_tuned) {
                                "Engine calibration applied."
                            } else {
                                "Calibrate the engine for your setup."
                            }
                        }}
                    </p>
                </div>
                <button class="btn btn--primary" on:click=on_tune_engine>
                    "Tune engine"
                </button>
            </div>
        </section>
    }
}
