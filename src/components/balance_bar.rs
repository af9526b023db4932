//! Header bar showing player greeting, balances, and garage level.

use leptos::prelude::*;

use crate::state::session::SessionState;
use crate::util::format::{format_cash, format_tokens};

/// Balance bar at the top of the garage page.
#[component]
pub fn BalanceBar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let greeting = move || {
        session.with(|s| {
            s.user
                .as_ref()
                .and_then(|u| u.first_name.clone().or_else(|| u.username.clone()))
                .unwrap_or_else(|| "Driver".to_owned())
        })
    };
    let cash = move || session.with(|s| s.user.as_ref().map(|u| format_cash(u.balance_cash)));
    let tokens = move || session.with(|s| s.user.as_ref().map(|u| format_tokens(u.balance_token)));
    let garage_level = move || session.with(|s| s.user.as_ref().map(|u| u.garage_level));

    view! {
        <header class="balance-bar">
            <span class="balance-bar__greeting">{greeting}</span>
            <span class="balance-bar__cash" title="Cash">
                "$" {cash}
            </span>
            <span class="balance-bar__tokens" title="Tokens">
                {tokens} " GT"
            </span>
            <span class="balance-bar__garage" title="Garage level">
                "Garage " {garage_level}
            </span>
        </header>
    }
}
