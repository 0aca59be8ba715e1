/// Upstream show data abstraction
///
/// The catalog never talks to the watchlist server directly. It goes through a
/// [`ShowSource`], which performs the remote reads and writes. The HTTP
/// implementation is used in production; tests substitute their own.
use crate::{
    error::AppResult,
    models::{ProfileId, Show, ShowId, WatchStatus},
};

pub mod http;

pub use http::HttpShowSource;

/// Trait for the upstream show collaborator
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait ShowSource: Send + Sync {
    /// Fetch every show on a profile's watchlist
    ///
    /// The result must be the complete list; the catalog never pages.
    async fn fetch_shows_for_profile(&self, profile_id: ProfileId) -> AppResult<Vec<Show>>;

    /// Persist a new watch status for one show
    async fn update_watch_status(
        &self,
        profile_id: ProfileId,
        show_id: ShowId,
        status: WatchStatus,
    ) -> AppResult<()>;

    /// Add a show to the profile's favorites
    async fn add_favorite(&self, profile_id: ProfileId, show_id: ShowId) -> AppResult<()>;

    /// Seasons and episodes of one show, passed through untouched
    async fn fetch_show_details(
        &self,
        profile_id: ProfileId,
        show_id: ShowId,
    ) -> AppResult<serde_json::Value>;

    /// Upcoming episodes for the profile, passed through untouched
    async fn fetch_next_watch(&self, profile_id: ProfileId) -> AppResult<serde_json::Value>;

    /// Source name for logging and debugging
    fn name(&self) -> &'static str;
}
