use super::*;

// =============================================================
// User + car snapshot decoding
// =============================================================

const FULL_USER_JSON: &str = r#"{
    "id": 7,
    "tg_id": 1776341320,
    "username": "gunter",
    "first_name": "Gunter",
    "balance_cash": 4250.5,
    "balance_token": 12.345,
    "garage_level": 2,
    "reputation": 14,
    "races_won": 6,
    "car": {
        "id": 3,
        "name": "Lada Devyatka",
        "engine_level": 2,
        "engine_power": 1.2,
        "turbo_level": 2,
        "suspension_level": 1,
        "valves_tuned": true,
        "valves_quality": 0.85,
        "engine_tuned": false,
        "engine_tune_power": 0.0,
        "wiring_quality": 1,
        "subwoofer_level": 2,
        "subwoofer_brand": "Ural",
        "subwoofer_power": 800,
        "music_genre": "chanson",
        "body_kit": "stock",
        "tint_level": 3,
        "condition": 87.5,
        "performance": {
            "power": 156.0,
            "handling": 7.15,
            "acceleration": 9.22,
            "top_speed": 202.0
        }
    }
}"#;

#[test]
fn decodes_full_user_payload() {
    let user: UserSnapshot = serde_json::from_str(FULL_USER_JSON).expect("decode user");
    assert_eq!(user.username.as_deref(), Some("gunter"));
    assert_eq!(user.balance_cash, 4250.5);
    assert_eq!(user.garage_level, 2);
    assert_eq!(user.races_won, 6);

    let car = user.car.expect("car present");
    assert_eq!(car.name.as_deref(), Some("Lada Devyatka"));
    assert_eq!(car.turbo_level, 2);
    assert!(car.valves_tuned);
    assert_eq!(car.valves_quality, 0.85);
    assert_eq!(car.subwoofer_brand.as_deref(), Some("Ural"));
    assert_eq!(car.performance.top_speed, 202.0);
}

#[test]
fn decodes_user_without_car_or_optional_fields() {
    let user: UserSnapshot = serde_json::from_str(
        r#"{"balance_cash": 5000.0, "balance_token": 0.0, "garage_level": 1, "car": null}"#,
    )
    .expect("decode minimal user");
    assert!(user.car.is_none());
    assert!(user.username.is_none());
    assert_eq!(user.reputation, 0);
}

#[test]
fn car_condition_defaults_to_100_when_absent() {
    let car: CarSnapshot = serde_json::from_str(
        r#"{
            "engine_level": 1,
            "engine_power": 1.0,
            "turbo_level": 0,
            "suspension_level": 0,
            "performance": {"power": 100.0, "handling": 5.0, "acceleration": 9.5, "top_speed": 183.0}
        }"#,
    )
    .expect("decode sparse car");
    assert_eq!(car.condition, 100.0);
    assert!(car.name.is_none());
    assert_eq!(car.subwoofer_level, 0);
    assert!(!car.valves_tuned);
}

// =============================================================
// Load reply envelope
// =============================================================

#[test]
fn load_reply_decodes_error_body() {
    let reply: LoadReply = serde_json::from_str(r#"{"error": "User not found"}"#).expect("decode");
    assert_eq!(
        reply,
        LoadReply::Failure {
            error: "User not found".to_owned()
        }
    );
}

#[test]
fn load_reply_decodes_user_body() {
    let reply: LoadReply = serde_json::from_str(FULL_USER_JSON).expect("decode");
    match reply {
        LoadReply::User(user) => assert_eq!(user.garage_level, 2),
        LoadReply::Failure { error } => panic!("unexpected failure arm: {error}"),
    }
}

// =============================================================
// Action reply envelope
// =============================================================

#[test]
fn action_reply_decodes_error() {
    let reply: ActionReply = serde_json::from_str(r#"{"error": "Not enough cash"}"#).expect("decode");
    assert_eq!(reply.error.as_deref(), Some("Not enough cash"));
    assert!(reply.message.is_none());
}

#[test]
fn action_reply_decodes_message_with_success_flag() {
    let reply: ActionReply =
        serde_json::from_str(r#"{"message": "Valves tuned!", "success": true}"#).expect("decode");
    assert_eq!(reply.message.as_deref(), Some("Valves tuned!"));
    assert_eq!(reply.success, Some(true));
    assert!(reply.is_winner.is_none());
}

#[test]
fn action_reply_decodes_race_result() {
    let reply: ActionReply =
        serde_json::from_str(r#"{"message": "You won 500!", "is_winner": true}"#).expect("decode");
    assert_eq!(reply.is_winner, Some(true));
}

#[test]
fn action_reply_tolerates_empty_body() {
    let reply: ActionReply = serde_json::from_str("{}").expect("decode");
    assert_eq!(reply, ActionReply::default());
}
