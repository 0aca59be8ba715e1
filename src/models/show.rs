use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

/// Identifier of a profile within an account
pub type ProfileId = i64;

/// Identifier of a show in the upstream catalog
pub type ShowId = i64;

/// Viewing progress of a show for one profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WatchStatus {
    NotWatched,
    Watching,
    Watched,
}

impl WatchStatus {
    /// Sort rank used when listing shows (not watched first)
    pub fn rank(self) -> u8 {
        match self {
            WatchStatus::NotWatched => 1,
            WatchStatus::Watching => 2,
            WatchStatus::Watched => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            WatchStatus::NotWatched => "NOT_WATCHED",
            WatchStatus::Watching => "WATCHING",
            WatchStatus::Watched => "WATCHED",
        }
    }
}

impl Display for WatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WatchStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "NOT_WATCHED" => Ok(WatchStatus::NotWatched),
            "WATCHING" => Ok(WatchStatus::Watching),
            "WATCHED" => Ok(WatchStatus::Watched),
            other => Err(format!("unknown watch status '{}'", other)),
        }
    }
}

/// A show on a profile's watchlist, as returned by the upstream server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Show {
    pub show_id: ShowId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub user_rating: Option<f32>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub streaming_services: Vec<String>,
    pub watch_status: WatchStatus,
    #[serde(default)]
    pub favorite: bool,
}

impl Show {
    /// Creates a show with no descriptive metadata
    pub fn new(show_id: ShowId, title: impl Into<String>, watch_status: WatchStatus) -> Self {
        Self {
            show_id,
            title: title.into(),
            description: None,
            image: None,
            release_date: None,
            user_rating: None,
            genres: Vec::new(),
            streaming_services: Vec::new(),
            watch_status,
            favorite: false,
        }
    }

    pub fn with_genres<I, S>(mut self, genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.genres = genres.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_streaming_services<I, S>(mut self, services: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.streaming_services = services.into_iter().map(Into::into).collect();
        self
    }

    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|g| g == genre)
    }

    pub fn is_on_service(&self, service: &str) -> bool {
        self.streaming_services.iter().any(|s| s == service)
    }
}
