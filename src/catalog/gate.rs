use std::collections::HashSet;

use super::store::ProfileShowStore;
use crate::models::ProfileId;

/// What the catalog currently knows about a profile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryState {
    /// A fetch has been issued and has not completed yet
    InFlight,
    /// The profile's shows are cached
    Ready,
}

/// Whether a fetch should be issued for a profile in the given state
pub fn should_fetch(state: Option<EntryState>) -> bool {
    state.is_none()
}

/// Tracks in-flight fetches so each profile has at most one outstanding request
///
/// The gate only decides. Callers must hold the same lock over the gate and the
/// store between [`FetchGate::try_begin`] and issuing the fetch, otherwise two
/// callers can both pass the check.
#[derive(Debug, Default)]
pub struct FetchGate {
    in_flight: HashSet<ProfileId>,
}

impl FetchGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entry_state(&self, profile_id: ProfileId, store: &ProfileShowStore) -> Option<EntryState> {
        if store.contains(profile_id) {
            Some(EntryState::Ready)
        } else if self.in_flight.contains(&profile_id) {
            Some(EntryState::InFlight)
        } else {
            None
        }
    }

    /// Marks the profile in flight if a fetch should be issued for it
    pub fn try_begin(&mut self, profile_id: ProfileId, store: &ProfileShowStore) -> bool {
        if !should_fetch(self.entry_state(profile_id, store)) {
            return false;
        }
        self.in_flight.insert(profile_id)
    }

    /// Marks the profile in flight even though its shows are cached.
    ///
    /// Returns false if a fetch for the profile is already outstanding.
    pub fn begin_refetch(&mut self, profile_id: ProfileId) -> bool {
        self.in_flight.insert(profile_id)
    }

    /// Clears the in-flight mark once the fetch succeeded or failed
    pub fn finish(&mut self, profile_id: ProfileId) -> bool {
        self.in_flight.remove(&profile_id)
    }

    pub fn is_in_flight(&self, profile_id: ProfileId) -> bool {
        self.in_flight.contains(&profile_id)
    }

    pub fn reset(&mut self) {
        self.in_flight.clear();
    }
}
