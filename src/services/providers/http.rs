/// Watchlist REST server client
///
/// Endpoints used, all relative to the configured base URL:
/// - GET  /api/profiles/{profile_id}/shows
/// - PUT  /api/profiles/{profile_id}/shows/watchstatus
/// - POST /api/profiles/{profile_id}/shows/favorites
/// - GET  /api/profiles/{profile_id}/shows/{show_id}/details
/// - GET  /api/profiles/{profile_id}/shows/nextWatch
use crate::{
    error::{AppError, AppResult},
    models::{FavoriteRequest, ProfileId, Show, ShowId, WatchStatus, WatchStatusUpdate},
    services::providers::ShowSource,
};
use reqwest::{Client as HttpClient, Response};
use std::time::Duration;

#[derive(Clone)]
pub struct HttpShowSource {
    http_client: HttpClient,
    api_url: String,
}

impl HttpShowSource {
    pub fn new(api_url: &str, timeout: Duration) -> AppResult<Self> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            api_url: api_url.trim_end_matches('/').to_string(),
        })
    }

    fn shows_url(&self, profile_id: ProfileId, suffix: &str) -> String {
        format!("{}/api/profiles/{}/shows{}", self.api_url, profile_id, suffix)
    }

    /// Turns a non-success upstream status into an error carrying the body
    async fn ensure_success(response: Response) -> AppResult<Response> {
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(AppError::ExternalApi(format!(
            "Upstream API returned status {}: {}",
            status, body
        )))
    }

    async fn get_json(&self, url: &str) -> AppResult<serde_json::Value> {
        let response = self.http_client.get(url).send().await?;
        let response = Self::ensure_success(response).await?;
        Ok(response.json().await?)
    }
}

#[async_trait::async_trait]
impl ShowSource for HttpShowSource {
    async fn fetch_shows_for_profile(&self, profile_id: ProfileId) -> AppResult<Vec<Show>> {
        let url = self.shows_url(profile_id, "");
        let response = self.http_client.get(&url).send().await?;
        let response = Self::ensure_success(response).await?;

        let shows: Vec<Show> = response.json().await?;

        tracing::info!(
            profile_id,
            shows = shows.len(),
            source = self.name(),
            "Fetched profile shows"
        );

        Ok(shows)
    }

    async fn update_watch_status(
        &self,
        profile_id: ProfileId,
        show_id: ShowId,
        status: WatchStatus,
    ) -> AppResult<()> {
        let url = self.shows_url(profile_id, "/watchstatus");
        let response = self
            .http_client
            .put(&url)
            .json(&WatchStatusUpdate { show_id, status })
            .send()
            .await?;
        Self::ensure_success(response).await?;

        tracing::info!(profile_id, show_id, status = %status, "Updated watch status upstream");
        Ok(())
    }

    async fn add_favorite(&self, profile_id: ProfileId, show_id: ShowId) -> AppResult<()> {
        let url = self.shows_url(profile_id, "/favorites");
        let response = self
            .http_client
            .post(&url)
            .json(&FavoriteRequest { show_id })
            .send()
            .await?;
        Self::ensure_success(response).await?;

        tracing::info!(profile_id, show_id, "Added favorite upstream");
        Ok(())
    }

    async fn fetch_show_details(
        &self,
        profile_id: ProfileId,
        show_id: ShowId,
    ) -> AppResult<serde_json::Value> {
        let url = self.shows_url(profile_id, &format!("/{}/details", show_id));
        self.get_json(&url).await
    }

    async fn fetch_next_watch(&self, profile_id: ProfileId) -> AppResult<serde_json::Value> {
        let url = self.shows_url(profile_id, "/nextWatch");
        self.get_json(&url).await
    }

    fn name(&self) -> &'static str {
        "watchlist-http"
    }
}
