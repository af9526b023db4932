use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn ui_state_defaults_to_car_tab() {
    assert_eq!(UiState::default().active_tab, GarageTab::Car);
}

#[test]
fn garage_tab_default_is_car() {
    assert_eq!(GarageTab::default(), GarageTab::Car);
}

// =============================================================
// Tab set
// =============================================================

#[test]
fn all_lists_every_tab_once() {
    let tabs = GarageTab::ALL;
    assert_eq!(tabs.len(), 4);
    for (i, a) in tabs.iter().enumerate() {
        for (j, b) in tabs.iter().enumerate() {
            if i == j {
                assert_eq!(a, b);
            } else {
                assert_ne!(a, b);
            }
        }
    }
}

#[test]
fn labels_are_distinct() {
    let labels: Vec<&str> = GarageTab::ALL.iter().map(|t| t.label()).collect();
    for (i, a) in labels.iter().enumerate() {
        for b in &labels[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
