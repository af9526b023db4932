//! Local UI chrome state (tab selection).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the session snapshots so
//! switching tabs never touches server-derived data. Tab selection is not
//! persisted and resets to the default pane on page load.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Tab panes of the garage screen.
///
/// Exactly one tab is active at any time; switching is atomic because the
/// active pane is derived from this single enum value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GarageTab {
    /// Car overview: stats, speedometer, installed parts.
    #[default]
    Car,
    /// Valve and engine tuning.
    Tuning,
    /// Part purchases: turbo, suspension, subwoofer, stubs.
    Upgrades,
    /// Races against the bot.
    Race,
}

impl GarageTab {
    /// All tabs in display order.
    pub const ALL: [GarageTab; 4] = [
        GarageTab::Car,
        GarageTab::Tuning,
        GarageTab::Upgrades,
        GarageTab::Race,
    ];

    /// Label shown on the tab selector button.
    pub fn label(self) -> &'static str {
        match self {
            GarageTab::Car => "Garage",
            GarageTab::Tuning => "Tuning",
            GarageTab::Upgrades => "Upgrades",
            GarageTab::Race => "Race",
        }
    }
}

/// UI state for the garage page chrome.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub active_tab: GarageTab,
}
