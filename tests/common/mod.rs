#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
};

use serde_json::json;
use tokio::sync::{Notify, Semaphore};
use watchlist_api::{
    error::{AppError, AppResult},
    models::{ProfileId, Show, ShowId, WatchStatus, WatchStatusUpdate},
    services::providers::ShowSource,
};

pub fn sample_shows() -> Vec<Show> {
    vec![
        Show::new(1, "The Wire", WatchStatus::Watched)
            .with_genres(["Drama", "Crime"])
            .with_streaming_services(["Max"]),
        Show::new(2, "Breaking Bad", WatchStatus::NotWatched)
            .with_genres(["Drama"])
            .with_streaming_services(["Netflix"]),
        Show::new(3, "Archer", WatchStatus::Watching)
            .with_genres(["Comedy", "Animation"])
            .with_streaming_services(["Hulu", "Netflix"]),
        Show::new(4, "The Expanse", WatchStatus::NotWatched)
            .with_genres(["Science Fiction"])
            .with_streaming_services(["Prime Video"]),
    ]
}

/// In-process stand-in for the upstream watchlist server
#[derive(Default)]
pub struct FakeShowSource {
    shows: HashMap<ProfileId, Vec<Show>>,
    fetch_calls: AtomicUsize,
    failures_remaining: AtomicUsize,
    hold: Option<Arc<Semaphore>>,
    pub fetch_started: Arc<Notify>,
    pub watch_updates: Mutex<Vec<(ProfileId, WatchStatusUpdate)>>,
    pub favorites: Mutex<Vec<(ProfileId, ShowId)>>,
}

impl FakeShowSource {
    pub fn with_profile(mut self, profile_id: ProfileId, shows: Vec<Show>) -> Self {
        self.shows.insert(profile_id, shows);
        self
    }

    /// Makes the next `count` fetches fail with an upstream error
    pub fn failing(self, count: usize) -> Self {
        self.failures_remaining.store(count, Ordering::SeqCst);
        self
    }

    /// Blocks every fetch until the returned semaphore receives a permit
    pub fn held(mut self) -> (Self, Arc<Semaphore>) {
        let semaphore = Arc::new(Semaphore::new(0));
        self.hold = Some(semaphore.clone());
        (self, semaphore)
    }

    pub fn fetch_calls(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl ShowSource for FakeShowSource {
    async fn fetch_shows_for_profile(&self, profile_id: ProfileId) -> AppResult<Vec<Show>> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        self.fetch_started.notify_one();

        if let Some(hold) = &self.hold {
            let _permit = hold
                .acquire()
                .await
                .map_err(|e| AppError::Internal(e.to_string()))?;
        }

        let failed = self
            .failures_remaining
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if failed {
            return Err(AppError::ExternalApi(
                "Upstream API returned status 503 Service Unavailable: ".to_string(),
            ));
        }

        Ok(self.shows.get(&profile_id).cloned().unwrap_or_default())
    }

    async fn update_watch_status(
        &self,
        profile_id: ProfileId,
        show_id: ShowId,
        status: WatchStatus,
    ) -> AppResult<()> {
        self.watch_updates
            .lock()
            .unwrap()
            .push((profile_id, WatchStatusUpdate { show_id, status }));
        Ok(())
    }

    async fn add_favorite(&self, profile_id: ProfileId, show_id: ShowId) -> AppResult<()> {
        self.favorites.lock().unwrap().push((profile_id, show_id));
        Ok(())
    }

    async fn fetch_show_details(
        &self,
        profile_id: ProfileId,
        show_id: ShowId,
    ) -> AppResult<serde_json::Value> {
        let known = self
            .shows
            .get(&profile_id)
            .is_some_and(|shows| shows.iter().any(|s| s.show_id == show_id));
        if !known {
            return Err(AppError::NotFound(format!("show {}", show_id)));
        }
        Ok(json!({ "show_id": show_id, "seasons": [{ "season_number": 1 }] }))
    }

    async fn fetch_next_watch(&self, profile_id: ProfileId) -> AppResult<serde_json::Value> {
        Ok(json!([{ "profile_id": profile_id, "show_id": 3, "episode_title": "Mole Hunt" }]))
    }

    fn name(&self) -> &'static str {
        "fake"
    }
}
