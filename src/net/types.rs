//! Wire DTOs for the backend REST API.
//!
//! DESIGN
//! ======
//! These types mirror the server's JSON payloads. Fields the backend may
//! omit (or that older server builds do not send) carry `#[serde(default)]`
//! so a partial payload degrades to defaults instead of failing the load.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The player as returned by `GET /api/user/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserSnapshot {
    /// Messenger username, if the player has one.
    #[serde(default)]
    pub username: Option<String>,
    /// Display name from the host profile.
    #[serde(default)]
    pub first_name: Option<String>,
    /// In-game cash balance.
    pub balance_cash: f64,
    /// Token balance (two-decimal display currency).
    pub balance_token: f64,
    pub garage_level: u32,
    /// Street reputation score.
    #[serde(default)]
    pub reputation: i64,
    #[serde(default)]
    pub races_won: i64,
    /// The player's car, if one is owned.
    #[serde(default)]
    pub car: Option<CarSnapshot>,
}

/// The player's car as embedded in the user payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CarSnapshot {
    /// Car name; a default label is shown when absent.
    #[serde(default)]
    pub name: Option<String>,
    /// Condition percentage, 0–100.
    #[serde(default = "default_condition")]
    pub condition: f64,
    /// Server-computed performance figures.
    pub performance: Performance,
    pub engine_level: u32,
    /// Engine power multiplier (1.0, 1.2, ...).
    pub engine_power: f64,
    /// Turbo upgrade level, 0–3.
    pub turbo_level: i64,
    /// Suspension upgrade level, 0–3.
    pub suspension_level: i64,
    /// Subwoofer level; the audio section renders only when > 0.
    #[serde(default)]
    pub subwoofer_level: i64,
    #[serde(default)]
    pub subwoofer_brand: Option<String>,
    /// Subwoofer output in watts.
    #[serde(default)]
    pub subwoofer_power: i64,
    #[serde(default)]
    pub music_genre: Option<String>,
    #[serde(default)]
    pub valves_tuned: bool,
    /// Valve tune quality, 0.0–1.0.
    #[serde(default)]
    pub valves_quality: f64,
    #[serde(default)]
    pub engine_tuned: bool,
    /// Extra power fraction from the engine tune.
    #[serde(default)]
    pub engine_tune_power: f64,
    /// Wiring quality, 0–2.
    #[serde(default)]
    pub wiring_quality: i64,
    #[serde(default)]
    pub body_kit: Option<String>,
    /// Window tint level, 0–3.
    #[serde(default)]
    pub tint_level: i64,
}

fn default_condition() -> f64 {
    100.0
}

/// Server-computed performance block.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Performance {
    pub power: f64,
    /// 0–100 time in seconds; lower is better.
    pub acceleration: f64,
    pub handling: f64,
    pub top_speed: f64,
}

/// Reply body of the user-load endpoint.
///
/// The backend signals domain failures in-band with an `error` field rather
/// than via HTTP status alone, so the body is decoded before any branching.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum LoadReply {
    /// Domain error, e.g. "User not found".
    Failure { error: String },
    /// Full snapshot of the player and their car.
    User(Box<UserSnapshot>),
}

/// Reply body shared by all action endpoints.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionReply {
    /// Domain error message; when present all other fields are ignored.
    #[serde(default)]
    pub error: Option<String>,
    /// Human-readable outcome message.
    #[serde(default)]
    pub message: Option<String>,
    /// Outcome flag sent by the valve-tune endpoint.
    #[serde(default)]
    pub success: Option<bool>,
    /// Outcome flag sent by the race endpoint.
    #[serde(default)]
    pub is_winner: Option<bool>,
}
