use super::*;

// =============================================================
// Needle angle
// =============================================================

#[test]
fn zero_speed_pins_needle_to_minimum() {
    assert_eq!(needle_angle_deg(0.0), NEEDLE_MIN_ANGLE_DEG);
}

#[test]
fn ceiling_speed_pins_needle_to_maximum() {
    assert_eq!(needle_angle_deg(SPEED_GAUGE_CEILING), NEEDLE_MAX_ANGLE_DEG);
}

#[test]
fn midpoint_speed_is_level() {
    assert!((needle_angle_deg(150.0)).abs() < 1e-9);
}

#[test]
fn speeds_beyond_ceiling_stay_clamped() {
    assert_eq!(needle_angle_deg(450.0), NEEDLE_MAX_ANGLE_DEG);
    assert_eq!(needle_angle_deg(10_000.0), NEEDLE_MAX_ANGLE_DEG);
}

#[test]
fn angle_is_monotone_non_decreasing_in_speed() {
    let mut previous = f64::NEG_INFINITY;
    for step in 0..=40 {
        let speed = f64::from(step) * 10.0;
        let angle = needle_angle_deg(speed);
        assert!(angle >= previous, "angle regressed at speed {speed}");
        assert!((NEEDLE_MIN_ANGLE_DEG..=NEEDLE_MAX_ANGLE_DEG).contains(&angle));
        previous = angle;
    }
}

#[test]
fn needle_transform_renders_css_rotation() {
    assert_eq!(needle_transform(300.0), "transform: rotate(45deg)");
    assert_eq!(needle_transform(0.0), "transform: rotate(-45deg)");
}

// =============================================================
// Upgrade lookup tables
// =============================================================

#[test]
fn turbo_boost_matches_installed_levels() {
    assert_eq!(turbo_boost_percent(0), 0);
    assert_eq!(turbo_boost_percent(1), 15);
    assert_eq!(turbo_boost_percent(2), 30);
    assert_eq!(turbo_boost_percent(3), 50);
}

#[test]
fn turbo_boost_defaults_to_zero_for_unmapped_levels() {
    assert_eq!(turbo_boost_percent(-1), 0);
    assert_eq!(turbo_boost_percent(4), 0);
    assert_eq!(turbo_boost_percent(99), 0);
}

#[test]
fn suspension_bonus_matches_installed_levels() {
    assert_eq!(suspension_handling_bonus(0), 0);
    assert_eq!(suspension_handling_bonus(1), 20);
    assert_eq!(suspension_handling_bonus(2), 40);
    assert_eq!(suspension_handling_bonus(3), 70);
}

#[test]
fn suspension_bonus_defaults_to_zero_for_unmapped_levels() {
    assert_eq!(suspension_handling_bonus(5), 0);
    assert_eq!(suspension_handling_bonus(-2), 0);
}
