//! Car overview pane: stats, speedometer, installed parts, tune statuses.

use leptos::prelude::*;

use crate::components::speedometer::Speedometer;
use crate::net::types::CarSnapshot;
use crate::state::session::SessionState;
use crate::util::format::{
    format_condition, format_fine_stat, format_quality_percent, format_whole_stat,
};
use crate::util::gauge::{suspension_handling_bonus, turbo_boost_percent};

/// Label shown when the backend sends a car without a name.
pub const DEFAULT_CAR_NAME: &str = "Street Machine";

/// Car overview pane.
///
/// Every readout is a pure view over the session's car snapshot; a reload
/// after any action re-derives the whole card. Renders a placeholder when
/// the player owns no car yet.
#[component]
pub fn CarCard() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let car = move || session.with(|s| s.car.clone());

    view! {
        <Show
            when=move || car().is_some()
            fallback=|| view! { <p class="car-card__empty">"No car in the garage yet."</p> }
        >
            {move || car().map(|car| view! { <CarDetails car=car/> })}
        </Show>
    }
}

#[component]
fn CarDetails(car: CarSnapshot) -> impl IntoView {
    let name = car.name.clone().unwrap_or_else(|| DEFAULT_CAR_NAME.to_owned());
    let perf = car.performance.clone();

    view! {
        <section class="car-card">
            <header class="car-card__header">
                <h2 class="car-card__name">{name}</h2>
                <span class="car-card__condition">{format_condition(car.condition)}</span>
            </header>

            <Speedometer/>

            <div class="car-card__stats">
                <Stat label="Power" value=format_whole_stat(perf.power)/>
                <Stat label="0-100" value=format_fine_stat(perf.acceleration)/>
                <Stat label="Handling" value=format_fine_stat(perf.handling)/>
                <Stat label="Top speed" value=format_whole_stat(perf.top_speed)/>
            </div>

            <div class="car-card__parts">
                <Stat label="Engine level" value=car.engine_level.to_string()/>
                <Stat label="Engine multiplier" value=format!("x{}", car.engine_power)/>
                <Stat label="Turbo level" value=car.turbo_level.to_string()/>
                <Stat
                    label="Turbo boost"
                    value=format!("+{}%", turbo_boost_percent(car.turbo_level))
                />
                <Stat label="Suspension level" value=car.suspension_level.to_string()/>
                <Stat
                    label="Handling bonus"
                    value=format!("+{}%", suspension_handling_bonus(car.suspension_level))
                />
                <Stat label="Body kit" value=car.body_kit.clone().unwrap_or_else(|| "stock".to_owned())/>
                <Stat label="Tint" value=format!("Level {}", car.tint_level)/>
            </div>

            <SubwooferInfo car=car.clone()/>
            <TuneStatus car=car/>
        </section>
    }
}

/// One labelled readout cell.
#[component]
fn Stat(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="car-card__stat">
            <span class="car-card__stat-label">{label}</span>
            <span class="car-card__stat-value">{value}</span>
        </div>
    }
}

/// Audio section, rendered only once a subwoofer is installed.
#[component]
fn SubwooferInfo(car: CarSnapshot) -> impl IntoView {
    let installed = car.subwoofer_level > 0;
    let brand = car.subwoofer_brand.clone().unwrap_or_default();
    let genre = car.music_genre.clone().unwrap_or_default();
    let watts = car.subwoofer_power;

    view! {
        <div class="car-card__audio">
            {if installed {
                view! {
                    <p class="car-card__audio-info">
                        {format!("{brand} {watts}W")} <br/> {format!("♪ {genre}")}
                    </p>
                }
                    .into_any()
            } else {
                view! { <p class="car-card__audio-info car-card__audio-info--empty">"No subwoofer installed"</p> }
                    .into_any()
            }}
        </div>
    }
}

/// Two-state valve and engine tune status lines.
#[component]
fn TuneStatus(car: CarSnapshot) -> impl IntoView {
    let (valves_text, valves_class, valves_quality) = if car.valves_tuned {
        (
            "✅ Valves tuned",
            "tune-status tune-status--done",
            format_quality_percent(car.valves_quality),
        )
    } else {
        ("⏹ Valves not tuned", "tune-status", "0%".to_owned())
    };

    let (engine_text, engine_class, engine_bonus) = if car.engine_tuned {
        (
            "✅ Engine tuned",
            "tune-status tune-status--done",
            format_quality_percent(car.engine_tune_power),
        )
    } else {
        ("⏹ Engine not tuned", "tune-status", "0%".to_owned())
    };

    view! {
        <div class="car-card__tune">
            <p class=valves_class>{valves_text} " · " {valves_quality}</p>
            <p class=engine_class>{engine_text} " · " {engine_bonus}</p>
        </div>
    }
}
