//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The mini-app has a single screen; `garage` owns pane orchestration and
//! delegates rendering details to `components`.

pub mod garage;
