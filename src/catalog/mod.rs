//! Profile-scoped show catalog
//!
//! [`ProfileShowStore`] caches each profile's shows, [`FetchGate`] keeps at most
//! one fetch outstanding per profile, and [`query::apply`] derives the filtered,
//! sorted view. [`ShowCatalog`] ties the store and gate to a session so that a
//! fetch which outlives a logout cannot repopulate the cleared cache.

pub mod gate;
pub mod query;
pub mod store;

pub use gate::{should_fetch, EntryState, FetchGate};
pub use store::{ProfileShowCacheEntry, ProfileShowStore};

use crate::models::{ProfileId, Show};

/// Permission to fetch one profile, issued by [`ShowCatalog::begin_fetch`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "a fetch ticket must be completed or abandoned"]
pub struct FetchTicket {
    profile_id: ProfileId,
    session: u64,
}

impl FetchTicket {
    pub fn profile_id(&self) -> ProfileId {
        self.profile_id
    }
}

/// Show cache and fetch gate for one client session
#[derive(Debug, Default)]
pub struct ShowCatalog {
    store: ProfileShowStore,
    gate: FetchGate,
    session: u64,
}

impl ShowCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a session from an existing store
    pub fn with_store(store: ProfileShowStore) -> Self {
        Self {
            store,
            ..Self::default()
        }
    }

    pub fn store(&self) -> &ProfileShowStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut ProfileShowStore {
        &mut self.store
    }

    pub fn entry_state(&self, profile_id: ProfileId) -> Option<EntryState> {
        self.gate.entry_state(profile_id, &self.store)
    }

    /// Returns a ticket if a fetch should be issued, marking the profile in flight
    pub fn begin_fetch(&mut self, profile_id: ProfileId) -> Option<FetchTicket> {
        self.gate
            .try_begin(profile_id, &self.store)
            .then_some(FetchTicket {
                profile_id,
                session: self.session,
            })
    }

    /// Begins a new fetch for a profile whether or not it is cached.
    ///
    /// The cached entry stays in place until [`ShowCatalog::complete_fetch`]
    /// replaces it, so a failed refresh keeps the previous shows. Returns `None`
    /// while a fetch for the profile is already in flight.
    pub fn begin_refresh(&mut self, profile_id: ProfileId) -> Option<FetchTicket> {
        self.gate.begin_refetch(profile_id).then_some(FetchTicket {
            profile_id,
            session: self.session,
        })
    }

    /// Stores fetched shows. Returns false if the session ended since the ticket was issued.
    pub fn complete_fetch(&mut self, ticket: FetchTicket, shows: Vec<Show>) -> bool {
        if !self.is_current(&ticket) {
            tracing::debug!(profile_id = ticket.profile_id, "Discarding fetch from ended session");
            return false;
        }
        self.gate.finish(ticket.profile_id);
        self.store.on_fetched(ticket.profile_id, shows);
        true
    }

    /// Releases a ticket after a failed fetch, leaving the store as it was
    pub fn abandon_fetch(&mut self, ticket: FetchTicket) {
        if self.is_current(&ticket) {
            self.gate.finish(ticket.profile_id);
        }
    }

    /// Ends the session: drops every entry and forgets in-flight fetches
    pub fn clear(&mut self) {
        self.store.clear();
        self.gate.reset();
        self.session += 1;
    }

    fn is_current(&self, ticket: &FetchTicket) -> bool {
        ticket.session == self.session
    }
}
