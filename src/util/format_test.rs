use super::*;

#[test]
fn cash_is_floored_not_rounded() {
    assert_eq!(format_cash(4250.99), "4250");
    assert_eq!(format_cash(5000.0), "5000");
}

#[test]
fn tokens_show_two_decimals() {
    assert_eq!(format_tokens(12.345), "12.35");
    assert_eq!(format_tokens(0.0), "0.00");
}

#[test]
fn whole_stats_round_to_nearest() {
    assert_eq!(format_whole_stat(156.4), "156");
    assert_eq!(format_whole_stat(156.5), "157");
}

#[test]
fn fine_stats_keep_one_decimal() {
    assert_eq!(format_fine_stat(9.22), "9.2");
    assert_eq!(format_fine_stat(5.0), "5.0");
}

#[test]
fn quality_fraction_displays_as_whole_percent() {
    assert_eq!(format_quality_percent(0.85), "85%");
    assert_eq!(format_quality_percent(0.0), "0%");
    assert_eq!(format_quality_percent(1.0), "100%");
}

#[test]
fn condition_displays_as_whole_percent() {
    assert_eq!(format_condition(87.5), "88%");
    assert_eq!(format_condition(100.0), "100%");
}
