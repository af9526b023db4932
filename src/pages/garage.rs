//! The single garage screen: header, tab bar, and one active pane.

use leptos::prelude::*;

use crate::components::balance_bar::BalanceBar;
use crate::components::car_card::CarCard;
use crate::components::notification::NotificationBanner;
use crate::components::race_panel::RacePanel;
use crate::components::tab_bar::TabBar;
use crate::components::tuning_panel::TuningPanel;
use crate::components::upgrades_panel::UpgradesPanel;
use crate::state::session::SessionState;
use crate::state::ui::{GarageTab, UiState};

/// Garage page — balance header, notification banner, and tabbed panes.
///
/// Renders a placeholder until the first snapshot lands; every pane is a
/// pure view over the session signal, so a reload after an action updates
/// the whole screen with no extra wiring.
#[component]
pub fn GaragePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let loaded = move || session.with(|s| s.user.is_some());
    let active_tab = move || ui.get().active_tab;

    view! {
        <div class="garage-page">
            <BalanceBar/>
            <NotificationBanner/>
            <TabBar/>

            <Show
                when=loaded
                fallback=|| view! { <p class="garage-page__loading">"Loading your garage..."</p> }
            >
                <div class="garage-page__pane">
                    {move || match active_tab() {
                        GarageTab::Car => view! { <CarCard/> }.into_any(),
                        GarageTab::Tuning => view! { <TuningPanel/> }.into_any(),
                        GarageTab::Upgrades => view! { <UpgradesPanel/> }.into_any(),
                        GarageTab::Race => view! { <RacePanel/> }.into_any(),
                    }}
                </div>
            </Show>
        </div>
    }
}
