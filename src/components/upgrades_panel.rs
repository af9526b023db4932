//! Upgrades pane: turbo, suspension, and subwoofer purchases plus the
//! engine-shop and wiring stubs.

use leptos::prelude::*;

use crate::net::dispatch::{self, ReplyStyle};
use crate::state::notify::{NoticeKind, NoticeState};
use crate::state::session::SessionState;

/// Subwoofer brands offered by the shop.
pub const SUBWOOFER_BRANDS: [&str; 3] = ["Ural", "Alphard", "Pride"];
/// Music genres selectable for the audio system.
pub const MUSIC_GENRES: [&str; 3] = ["chanson", "rap", "rock"];

/// Upgrades pane.
///
/// Each purchase reads its parameters from the select signals, POSTs to
/// the matching endpoint, and lets the dispatch layer handle notification
/// plus resync. The engine-shop and wiring buttons are explicit stubs that
/// never touch the network.
#[component]
pub fn UpgradesPanel() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let notify = expect_context::<RwSignal<NoticeState>>();

    let turbo_level = RwSignal::new("1".to_owned());
    let suspension_level = RwSignal::new("1".to_owned());
    let sub_level = RwSignal::new("1".to_owned());
    let sub_brand = RwSignal::new(SUBWOOFER_BRANDS[0].to_owned());
    let sub_genre = RwSignal::new(MUSIC_GENRES[0].to_owned());

    let on_upgrade_turbo = move |_| {
        let Some(id) = session.with_untracked(|s| s.identity.clone()) else {
            return;
        };
        let level = turbo_level.get_untracked().parse::<u32>().unwrap_or(1);
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            dispatch::run(
                session,
                notify,
                ReplyStyle::AlwaysSuccess,
                dispatch::PURCHASE_FAILED_NOTICE,
                crate::net::api::upgrade_turbo(&id, level),
            )
            .await;
        });
        #[cfg(not(feature = "csr"))]
        let _ = (id, level);
    };

    let on_upgrade_suspension = move |_| {
        let Some(id) = session.with_untracked(|s| s.identity.clone()) else {
            return;
        };
        let level = suspension_level.get_untracked().parse::<u32>().unwrap_or(1);
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            dispatch::run(
                session,
                notify,
                ReplyStyle::AlwaysSuccess,
                dispatch::PURCHASE_FAILED_NOTICE,
                crate::net::api::upgrade_suspension(&id, level),
            )
            .await;
        });
        #[cfg(not(feature = "csr"))]
        let _ = (id, level);
    };

    let on_upgrade_subwoofer = move |_| {
        let Some(id) = session.with_untracked(|s| s.identity.clone()) else {
            return;
        };
        let level = sub_level.get_untracked().parse::<u32>().unwrap_or(1);
        let brand = sub_brand.get_untracked();
        let genre = sub_genre.get_untracked();
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            dispatch::run(
                session,
                notify,
                ReplyStyle::AlwaysSuccess,
                dispatch::INSTALL_FAILED_NOTICE,
                crate::net::api::upgrade_subwoofer(&id, level, &brand, &genre),
            )
            .await;
        });
        #[cfg(not(feature = "csr"))]
        let _ = (id, level, brand, genre);
    };

    // Stubs: fixed notice, no network call.
    let on_buy_engine = move |_| {
        notify.update(|n| n.post(dispatch::ENGINE_SHOP_STUB_NOTICE, NoticeKind::Error));
    };
    let on_upgrade_wiring = move |_| {
        notify.update(|n| n.post(dispatch::WIRING_STUB_NOTICE, NoticeKind::Error));
    };

    let wiring_quality =
        move || session.with(|s| s.car.as_ref().map_or(0, |c| c.wiring_quality));

    view! {
        <section class="upgrades-panel">
            <div class="upgrades-panel__row">
                <h3>"Turbo"</h3>
                <select
                    class="upgrades-panel__select"
                    prop:value=move || turbo_level.get()
                    on:change=move |ev| turbo_level.set(event_target_value(&ev))
                >
                    <option value="1">"Level 1 — +15%"</option>
                    <option value="2">"Level 2 — +30%"</option>
                    <option value="3">"Level 3 — +50%"</option>
                </select>
                <button class="btn btn--primary" on:click=on_upgrade_turbo>
                    "Install turbo"
                </button>
            </div>

            <div class="upgrades-panel__row">
                <h3>"Suspension"</h3>
                <select
                    class="upgrades-panel__select"
                    prop:value=move || suspension_level.get()
                    on:change=move |ev| suspension_level.set(event_target_value(&ev))
                >
                    <option value="1">"Level 1 — +20% handling"</option>
                    <option value="2">"Level 2 — +40% handling"</option>
                    <option value="3">"Level 3 — +70% handling"</option>
                </select>
                <button class="btn btn--primary" on:click=on_upgrade_suspension>
                    "Install suspension"
                </button>
            </div>

            <div class="upgrades-panel__row">
                <h3>"Subwoofer"</h3>
                <select
                    class="upgrades-panel__select"
                    prop:value=move || sub_level.get()
                    on:change=move |ev| sub_level.set(event_target_value(&ev))
                >
                    <option value="1">"Level 1"</option>
                    <option value="2">"Level 2"</option>
                    <option value="3">"Level 3"</option>
                </select>
                <select
                    class="upgrades-panel__select"
                    prop:value=move || sub_brand.get()
                    on:change=move |ev| sub_brand.set(event_target_value(&ev))
                >
                    {SUBWOOFER_BRANDS
                        .into_iter()
                        .map(|brand| view! { <option value=brand>{brand}</option> })
                        .collect::<Vec<_>>()}
                </select>
                <select
                    class="upgrades-panel__select"
                    prop:value=move || sub_genre.get()
                    on:change=move |ev| sub_genre.set(event_target_value(&ev))
                >
                    {MUSIC_GENRES
                        .into_iter()
                        .map(|genre| view! { <option value=genre>{genre}</option> })
                        .collect::<Vec<_>>()}
                </select>
                <button class="btn btn--primary" on:click=on_upgrade_subwoofer>
                    "Install subwoofer"
                </button>
            </div>

            <div class="upgrades-panel__row upgrades-panel__row--stub">
                <h3>"Engine shop"</h3>
                <button class="btn" on:click=on_buy_engine>
                    "Buy engine"
                </button>
            </div>

            <div class="upgrades-panel__row upgrades-panel__row--stub">
                <h3>"Wiring"</h3>
                <span class="upgrades-panel__hint">
                    {move || format!("Current quality: {}/2", wiring_quality())}
                </span>
                <button class="btn" on:click=on_upgrade_wiring>
                    "Upgrade wiring"
                </button>
            </div>
        </section>
    }
}
