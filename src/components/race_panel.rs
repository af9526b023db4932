//! Race pane: bot race dispatcher and career readouts.

use leptos::prelude::*;

use crate::net::dispatch::{self, ReplyStyle};
use crate::state::notify::NoticeState;
use crate::state::session::SessionState;

/// Race pane.
///
/// The race result arrives as a message plus an `is_winner` flag that only
/// picks the notification styling; balances and stats update through the
/// usual post-action resync.
#[component]
pub fn RacePanel() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let notify = expect_context::<RwSignal<NoticeState>>();

    let races_won = move || session.with(|s| s.user.as_ref().map_or(0, |u| u.races_won));
    let reputation = move || session.with(|s| s.user.as_ref().map_or(0, |u| u.reputation));

    let on_race = move |_| {
        let Some(id) = session.with_untracked(|s| s.identity.clone()) else {
            return;
        };
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            dispatch::run(
                session,
                notify,
                ReplyStyle::WinnerFlag,
                dispatch::RACE_FAILED_NOTICE,
                crate::net::api::race_bot(&id),
            )
            .await;
        });
        #[cfg(not(feature = "csr"))]
        let _ = (id, notify);
    };

    view! {
        <section class="race-panel">
            <div class="race-panel__stats">
                <span>{move || format!("Races won: {}", races_won())}</span>
                <span>{move || format!("Reputation: {}", reputation())}</span>
            </div>
            <button class="btn btn--primary race-panel__start" on:click=on_race>
                "Race the bot"
            </button>
        </section>
    }
}
