//! Speedometer needle math and upgrade bonus lookup tables.

#[cfg(test)]
#[path = "gauge_test.rs"]
mod gauge_test;

/// Reference ceiling for the speedometer arc; speeds at or above this pin
/// the needle to the maximum angle.
pub const SPEED_GAUGE_CEILING: f64 = 300.0;
pub const NEEDLE_MIN_ANGLE_DEG: f64 = -45.0;
pub const NEEDLE_MAX_ANGLE_DEG: f64 = 45.0;

/// Needle rotation for a given top speed: a linear map of `0..=300` onto
/// the `-45°..=45°` arc, clamped at both ends.
pub fn needle_angle_deg(top_speed: f64) -> f64 {
    let ratio = (top_speed / SPEED_GAUGE_CEILING).clamp(0.0, 1.0);
    ratio * (NEEDLE_MAX_ANGLE_DEG - NEEDLE_MIN_ANGLE_DEG) + NEEDLE_MIN_ANGLE_DEG
}

/// CSS transform for the needle element.
pub fn needle_transform(top_speed: f64) -> String {
    format!("transform: rotate({}deg)", needle_angle_deg(top_speed))
}

/// Power boost percentage granted by a turbo level.
///
/// Levels outside the installed range display as 0.
pub fn turbo_boost_percent(level: i64) -> u32 {
    match level {
        1 => 15,
        2 => 30,
        3 => 50,
        _ => 0,
    }
}

/// Handling bonus percentage granted by a suspension level.
///
/// Levels outside the installed range display as 0.
pub fn suspension_handling_bonus(level: i64) -> u32 {
    match level {
        1 => 20,
        2 => 40,
        3 => 70,
        _ => 0,
    }
}
