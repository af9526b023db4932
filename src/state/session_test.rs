use super::*;
use crate::net::types::Performance;

fn sample_car(name: Option<&str>) -> CarSnapshot {
    CarSnapshot {
        name: name.map(str::to_owned),
        condition: 92.0,
        performance: Performance {
            power: 148.0,
            acceleration: 8.2,
            handling: 6.5,
            top_speed: 199.3,
        },
        engine_level: 2,
        engine_power: 1.2,
        turbo_level: 1,
        suspension_level: 0,
        subwoofer_level: 0,
        subwoofer_brand: None,
        subwoofer_power: 0,
        music_genre: None,
        valves_tuned: false,
        valves_quality: 0.0,
        engine_tuned: false,
        engine_tune_power: 0.0,
        wiring_quality: 0,
        body_kit: None,
        tint_level: 0,
    }
}

fn sample_user(car: Option<CarSnapshot>) -> UserSnapshot {
    UserSnapshot {
        username: Some("gunter".to_owned()),
        first_name: None,
        balance_cash: 5000.0,
        balance_token: 1.5,
        garage_level: 1,
        reputation: 3,
        races_won: 2,
        car,
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_session_has_no_identity_or_snapshots() {
    let state = SessionState::default();
    assert!(state.identity.is_none());
    assert!(state.user.is_none());
    assert!(state.car.is_none());
}

// =============================================================
// Wholesale replacement
// =============================================================

#[test]
fn replace_stores_user_and_lifts_out_car() {
    let mut state = SessionState::default();
    state.replace(sample_user(Some(sample_car(Some("Lada")))));

    assert_eq!(state.user.as_ref().map(|u| u.garage_level), Some(1));
    assert_eq!(
        state.car.as_ref().and_then(|c| c.name.clone()),
        Some("Lada".to_owned())
    );
}

#[test]
fn replace_overwrites_previous_snapshot_wholesale() {
    let mut state = SessionState::default();
    state.replace(sample_user(Some(sample_car(Some("Lada")))));

    let mut richer = sample_user(None);
    richer.balance_cash = 9000.0;
    state.replace(richer);

    // A carless snapshot clears the car too; nothing is merged.
    assert!(state.car.is_none());
    assert_eq!(state.user.as_ref().map(|u| u.balance_cash), Some(9000.0));
}

#[test]
fn replace_does_not_touch_identity() {
    let mut state = SessionState {
        identity: Some("42".to_owned()),
        ..SessionState::default()
    };
    state.replace(sample_user(None));
    assert_eq!(state.identity.as_deref(), Some("42"));
}
