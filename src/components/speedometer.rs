//! Speedometer dial with a rotating needle.

use leptos::prelude::*;

use crate::state::session::SessionState;
use crate::util::format::format_whole_stat;
use crate::util::gauge::needle_transform;

/// Speedometer showing top speed on a -45°..+45° needle arc.
#[component]
pub fn Speedometer() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let top_speed = move || {
        session.with(|s| {
            s.car
                .as_ref()
                .map_or(0.0, |car| car.performance.top_speed)
        })
    };
    let needle_style = move || needle_transform(top_speed());
    let readout = move || format_whole_stat(top_speed());

    view! {
        <div class="speedometer">
            <div class="speedometer__dial">
                <div class="speedometer__needle" style=needle_style></div>
            </div>
            <div class="speedometer__readout">
                <span class="speedometer__value">{readout}</span>
                <span class="speedometer__unit">" km/h"</span>
            </div>
        </div>
    }
}
