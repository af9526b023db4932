//! Tab selector row for the garage panes.

use leptos::prelude::*;

use crate::state::ui::{GarageTab, UiState};

/// Tab bar with one button per pane.
///
/// Switching is atomic: the active pane is derived from a single enum
/// value, so exactly one selector and one pane carry the active marker at
/// any time.
#[component]
pub fn TabBar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <nav class="tab-bar">
            {GarageTab::ALL
                .into_iter()
                .map(|tab| {
                    let class = move || {
                        if ui.get().active_tab == tab { "tab-btn active" } else { "tab-btn" }
                    };
                    view! {
                        <button class=class on:click=move |_| ui.update(|u| u.active_tab = tab)>
                            {tab.label()}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </nav>
    }
}
