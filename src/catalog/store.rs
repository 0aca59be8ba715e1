use std::collections::{BTreeSet, HashMap};

use crate::models::{Facets, ProfileId, Show, ShowId, WatchStatus};

/// Union of every show's genre and streaming service labels
pub fn derive_facets(shows: &[Show]) -> Facets {
    let genres: BTreeSet<String> = shows.iter().flat_map(|s| s.genres.iter().cloned()).collect();
    let streaming_services: BTreeSet<String> = shows
        .iter()
        .flat_map(|s| s.streaming_services.iter().cloned())
        .collect();

    Facets {
        genres,
        streaming_services,
    }
}

/// Cached shows of a single profile along with their derived facets
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileShowCacheEntry {
    shows: Vec<Show>,
    facets: Facets,
}

impl ProfileShowCacheEntry {
    pub fn new(shows: Vec<Show>) -> Self {
        let facets = derive_facets(&shows);
        Self { shows, facets }
    }

    pub fn shows(&self) -> &[Show] {
        &self.shows
    }

    pub fn facets(&self) -> &Facets {
        &self.facets
    }

    fn show_mut(&mut self, show_id: ShowId) -> Option<&mut Show> {
        self.shows.iter_mut().find(|s| s.show_id == show_id)
    }
}

/// Per-profile show cache for one client session
///
/// Entries always hold a profile's full show list. After the initial fetch the
/// only in-place changes are single-show watch status and favorite updates;
/// facets are not re-derived for those.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileShowStore {
    entries: HashMap<ProfileId, ProfileShowCacheEntry>,
}

impl ProfileShowStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with the given profiles' shows
    pub fn with_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (ProfileId, Vec<Show>)>,
    {
        let mut store = Self::new();
        for (profile_id, shows) in entries {
            store.on_fetched(profile_id, shows);
        }
        store
    }

    pub fn contains(&self, profile_id: ProfileId) -> bool {
        self.entries.contains_key(&profile_id)
    }

    pub fn entry(&self, profile_id: ProfileId) -> Option<&ProfileShowCacheEntry> {
        self.entries.get(&profile_id)
    }

    /// Cached shows for a profile; empty when nothing was fetched yet
    pub fn shows_for(&self, profile_id: ProfileId) -> &[Show] {
        self.entries
            .get(&profile_id)
            .map(ProfileShowCacheEntry::shows)
            .unwrap_or_default()
    }

    pub fn facets_for(&self, profile_id: ProfileId) -> Option<&Facets> {
        self.entries.get(&profile_id).map(ProfileShowCacheEntry::facets)
    }

    /// Replaces a profile's entry with freshly fetched shows
    pub fn on_fetched(&mut self, profile_id: ProfileId, shows: Vec<Show>) {
        let entry = ProfileShowCacheEntry::new(shows);
        tracing::debug!(
            profile_id,
            shows = entry.shows.len(),
            genres = entry.facets.genres.len(),
            streaming_services = entry.facets.streaming_services.len(),
            "Cached profile shows"
        );
        self.entries.insert(profile_id, entry);
    }

    /// Sets the watch status of one cached show.
    ///
    /// Returns false, leaving the store untouched, when the profile or show is
    /// not cached.
    pub fn on_watch_status_changed(
        &mut self,
        profile_id: ProfileId,
        show_id: ShowId,
        status: WatchStatus,
    ) -> bool {
        match self.show_mut(profile_id, show_id) {
            Some(show) => {
                show.watch_status = status;
                true
            }
            None => {
                tracing::debug!(profile_id, show_id, "Watch status change for uncached show");
                false
            }
        }
    }

    /// Marks one cached show as a favorite. Same no-op rule as watch status.
    pub fn on_favorite_added(&mut self, profile_id: ProfileId, show_id: ShowId) -> bool {
        match self.show_mut(profile_id, show_id) {
            Some(show) => {
                show.favorite = true;
                true
            }
            None => {
                tracing::debug!(profile_id, show_id, "Favorite added for uncached show");
                false
            }
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn show_mut(&mut self, profile_id: ProfileId, show_id: ShowId) -> Option<&mut Show> {
        self.entries.get_mut(&profile_id)?.show_mut(show_id)
    }
}
