//! Session-scoped snapshots of server game state.
//!
//! DESIGN
//! ======
//! The backend is the single source of truth. Snapshots are replaced
//! wholesale on every successful load — there is no merging, diffing, or
//! local mutation, so a stale in-flight response simply overwrites whatever
//! arrived before it. Nothing here is persisted client-side.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::{CarSnapshot, UserSnapshot};

/// In-memory state for the single logged-in player.
///
/// `identity` is resolved once at startup from the host context and never
/// changes for the lifetime of the session. `user` and `car` are written
/// only by the data loader and read only by render closures.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    /// Host-provided player identifier; `None` means identity resolution
    /// failed and the session is in its terminal no-network state.
    pub identity: Option<String>,
    pub user: Option<UserSnapshot>,
    pub car: Option<CarSnapshot>,
}

impl SessionState {
    /// Replace both snapshots with a freshly loaded one.
    ///
    /// The car snapshot is lifted out of the user payload so car widgets
    /// can subscribe without cloning the whole user each render.
    pub fn replace(&mut self, user: UserSnapshot) {
        self.car = user.car.clone();
        self.user = Some(user);
    }
}
