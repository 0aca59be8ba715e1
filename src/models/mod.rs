use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub mod filter;
pub mod show;

pub use filter::{FilterParams, FilterSpec};
pub use show::{ProfileId, Show, ShowId, WatchStatus};

// ============================================================================
// Client-facing payloads
// ============================================================================

/// Progress of the catalog load for one profile, mirroring the client store states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadStatus {
    /// Nothing cached and no fetch running
    Idle,
    /// Another request is already fetching this profile's shows
    Pending,
    /// The profile's shows are cached
    Succeeded,
}

/// Filter values available for a profile's shows
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facets {
    pub genres: BTreeSet<String>,
    pub streaming_services: BTreeSet<String>,
}

/// Filtered, sorted view of a profile's shows
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShowListResponse {
    pub profile_id: ProfileId,
    pub status: LoadStatus,
    pub count: usize,
    pub shows: Vec<Show>,
    #[serde(flatten)]
    pub facets: Facets,
}

// ============================================================================
// Upstream request bodies
// ============================================================================

/// Body of a watch status change, shared by the client route and the upstream call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchStatusUpdate {
    pub show_id: ShowId,
    pub status: WatchStatus,
}

/// Body of a favorite request, shared by the client route and the upstream call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteRequest {
    pub show_id: ShowId,
}
