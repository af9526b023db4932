//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render garage chrome and action surfaces while reading and
//! writing shared state from Leptos context providers.

pub mod balance_bar;
pub mod car_card;
pub mod notification;
pub mod race_panel;
pub mod speedometer;
pub mod tab_bar;
pub mod tuning_panel;
pub mod upgrades_panel;
