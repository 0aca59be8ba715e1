use axum::{extract::State, http::StatusCode, Extension, Json};
use serde_json::{json, Value};

use crate::{
    error::AppResult,
    middleware::request_id::RequestId,
    models::{
        Facets, FavoriteRequest, FilterParams, FilterSpec, ProfileId, ShowId, ShowListResponse,
        WatchStatusUpdate,
    },
};

use super::{
    extract::{JsonBody, Path, Query},
    AppState,
};

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Filtered, sorted shows of a profile; the first request for a profile loads them
pub async fn list_shows(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Path(profile_id): Path<ProfileId>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> AppResult<Json<ShowListResponse>> {
    // Repeated keys are tolerated, the first value wins
    let filter = FilterSpec::from(FilterParams::from_pairs(pairs));

    let response = state.catalog.list_shows(profile_id, &filter).await?;

    tracing::info!(
        request_id = %request_id,
        profile_id,
        status = ?response.status,
        count = response.count,
        filtered = !filter.is_empty(),
        "Listed profile shows"
    );

    Ok(Json(response))
}

/// Loads the shows of a profile again, replacing the cached ones once the fetch succeeds
pub async fn refresh_shows(
    State(state): State<AppState>,
    Path(profile_id): Path<ProfileId>,
) -> AppResult<Json<ShowListResponse>> {
    let outcome = state.catalog.refresh(profile_id).await?;
    tracing::debug!(profile_id, outcome = ?outcome, "Refresh finished");

    Ok(Json(state.catalog.view(profile_id, &FilterSpec::default()).await))
}

/// Filter values for a profile's cached shows
pub async fn get_facets(
    State(state): State<AppState>,
    Path(profile_id): Path<ProfileId>,
) -> Json<Facets> {
    Json(state.catalog.facets(profile_id).await)
}

pub async fn update_watch_status(
    State(state): State<AppState>,
    Path(profile_id): Path<ProfileId>,
    JsonBody(request): JsonBody<WatchStatusUpdate>,
) -> AppResult<StatusCode> {
    state
        .catalog
        .update_watch_status(profile_id, request.show_id, request.status)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn add_favorite(
    State(state): State<AppState>,
    Path(profile_id): Path<ProfileId>,
    JsonBody(request): JsonBody<FavoriteRequest>,
) -> AppResult<StatusCode> {
    state.catalog.add_favorite(profile_id, request.show_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_show_details(
    State(state): State<AppState>,
    Path((profile_id, show_id)): Path<(ProfileId, ShowId)>,
) -> AppResult<Json<Value>> {
    Ok(Json(state.catalog.show_details(profile_id, show_id).await?))
}

pub async fn get_next_watch(
    State(state): State<AppState>,
    Path(profile_id): Path<ProfileId>,
) -> AppResult<Json<Value>> {
    Ok(Json(state.catalog.next_watch(profile_id).await?))
}

/// Ends the session and drops every cached profile
pub async fn logout(State(state): State<AppState>) -> StatusCode {
    state.catalog.logout().await;
    StatusCode::NO_CONTENT
}
