use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{
    catalog::{query, EntryState, FetchTicket, ShowCatalog},
    error::AppResult,
    models::{
        Facets, FilterSpec, LoadStatus, ProfileId, ShowId, ShowListResponse, WatchStatus,
    },
    services::providers::ShowSource,
};

/// Result of asking the catalog to load a profile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Shows were fetched and cached
    Fetched(usize),
    /// The profile was already cached
    Cached,
    /// Another request is fetching this profile; this one was dropped
    InFlight,
    /// The fetch finished after a logout and its result was thrown away
    Discarded,
}

/// Coordinates the session catalog with the upstream show source
///
/// The lock is never held across an upstream call. The fetch gate decision
/// and the in-flight mark happen under one write lock.
#[derive(Clone)]
pub struct CatalogService {
    catalog: Arc<RwLock<ShowCatalog>>,
    source: Arc<dyn ShowSource>,
}

impl CatalogService {
    pub fn new(source: Arc<dyn ShowSource>) -> Self {
        Self::with_catalog(source, ShowCatalog::new())
    }

    pub fn with_catalog(source: Arc<dyn ShowSource>, catalog: ShowCatalog) -> Self {
        Self {
            catalog: Arc::new(RwLock::new(catalog)),
            source,
        }
    }

    /// Fetches a profile's shows unless they are cached or already being fetched
    pub async fn ensure_loaded(&self, profile_id: ProfileId) -> AppResult<LoadOutcome> {
        let ticket = {
            let mut catalog = self.catalog.write().await;
            match catalog.begin_fetch(profile_id) {
                Some(ticket) => ticket,
                None => {
                    return Ok(match catalog.entry_state(profile_id) {
                        Some(EntryState::InFlight) => LoadOutcome::InFlight,
                        _ => LoadOutcome::Cached,
                    })
                }
            }
        };

        self.run_fetch(ticket).await
    }

    /// Fetches the profile's shows again; cached shows are kept until the fetch succeeds
    pub async fn refresh(&self, profile_id: ProfileId) -> AppResult<LoadOutcome> {
        let ticket = {
            let mut catalog = self.catalog.write().await;
            match catalog.begin_refresh(profile_id) {
                Some(ticket) => ticket,
                None => return Ok(LoadOutcome::InFlight),
            }
        };

        tracing::info!(profile_id, "Refreshing profile shows");
        self.run_fetch(ticket).await
    }

    async fn run_fetch(&self, ticket: FetchTicket) -> AppResult<LoadOutcome> {
        let profile_id = ticket.profile_id();
        tracing::debug!(profile_id, source = self.source.name(), "Fetching profile shows");

        let result = self.source.fetch_shows_for_profile(profile_id).await;

        let mut catalog = self.catalog.write().await;
        match result {
            Ok(shows) => {
                let count = shows.len();
                if catalog.complete_fetch(ticket, shows) {
                    Ok(LoadOutcome::Fetched(count))
                } else {
                    Ok(LoadOutcome::Discarded)
                }
            }
            Err(e) => {
                catalog.abandon_fetch(ticket);
                tracing::warn!(profile_id, error = %e, "Profile show fetch failed");
                Err(e)
            }
        }
    }

    /// Filtered, sorted shows for a profile, loading them first if needed
    pub async fn list_shows(
        &self,
        profile_id: ProfileId,
        filter: &FilterSpec,
    ) -> AppResult<ShowListResponse> {
        let outcome = self.ensure_loaded(profile_id).await?;
        tracing::debug!(profile_id, outcome = ?outcome, "Profile load finished");

        Ok(self.view(profile_id, filter).await)
    }

    /// Current view of a profile without triggering a fetch
    pub async fn view(&self, profile_id: ProfileId, filter: &FilterSpec) -> ShowListResponse {
        let catalog = self.catalog.read().await;

        let status = match catalog.entry_state(profile_id) {
            Some(EntryState::Ready) => LoadStatus::Succeeded,
            Some(EntryState::InFlight) => LoadStatus::Pending,
            None => LoadStatus::Idle,
        };
        let shows = query::apply(catalog.store().shows_for(profile_id), filter);
        let facets = catalog
            .store()
            .facets_for(profile_id)
            .cloned()
            .unwrap_or_default();

        ShowListResponse {
            profile_id,
            status,
            count: shows.len(),
            shows,
            facets,
        }
    }

    /// Genre and streaming service filter values; empty when nothing is cached
    pub async fn facets(&self, profile_id: ProfileId) -> Facets {
        self.catalog
            .read()
            .await
            .store()
            .facets_for(profile_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Writes the status upstream, then mirrors it into the cache
    pub async fn update_watch_status(
        &self,
        profile_id: ProfileId,
        show_id: ShowId,
        status: WatchStatus,
    ) -> AppResult<()> {
        self.source
            .update_watch_status(profile_id, show_id, status)
            .await?;

        self.catalog
            .write()
            .await
            .store_mut()
            .on_watch_status_changed(profile_id, show_id, status);
        Ok(())
    }

    /// Writes the favorite upstream, then mirrors it into the cache
    pub async fn add_favorite(&self, profile_id: ProfileId, show_id: ShowId) -> AppResult<()> {
        self.source.add_favorite(profile_id, show_id).await?;

        self.catalog
            .write()
            .await
            .store_mut()
            .on_favorite_added(profile_id, show_id);
        Ok(())
    }

    pub async fn show_details(
        &self,
        profile_id: ProfileId,
        show_id: ShowId,
    ) -> AppResult<serde_json::Value> {
        self.source.fetch_show_details(profile_id, show_id).await
    }

    pub async fn next_watch(&self, profile_id: ProfileId) -> AppResult<serde_json::Value> {
        self.source.fetch_next_watch(profile_id).await
    }

    /// Ends the session, dropping every cached profile
    pub async fn logout(&self) {
        let mut catalog = self.catalog.write().await;
        let profiles = catalog.store().len();
        catalog.clear();
        tracing::info!(profiles, "Cleared show catalog");
    }
}
