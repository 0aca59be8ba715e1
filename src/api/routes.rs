use axum::{
    middleware::from_fn,
    routing::{get, post, put},
    Router,
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::middleware::{cors_layer, request_id::make_span_with_request_id, request_id_middleware};

use super::handlers;
use super::AppState;

/// Creates the main API router with all routes
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.cors_origins);

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api", api_routes())
        .layer(
            ServiceBuilder::new()
                .layer(from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
                .layer(cors),
        )
        .with_state(state)
}

/// Routes under /api
fn api_routes() -> Router<AppState> {
    Router::new()
        // Shows
        .route("/profiles/:profile_id/shows", get(handlers::list_shows))
        .route("/profiles/:profile_id/shows/refresh", post(handlers::refresh_shows))
        .route("/profiles/:profile_id/shows/facets", get(handlers::get_facets))
        .route("/profiles/:profile_id/shows/nextWatch", get(handlers::get_next_watch))
        .route(
            "/profiles/:profile_id/shows/:show_id/details",
            get(handlers::get_show_details),
        )
        // Mutations
        .route(
            "/profiles/:profile_id/shows/watchstatus",
            put(handlers::update_watch_status),
        )
        .route("/profiles/:profile_id/shows/favorites", post(handlers::add_favorite))
        // Session
        .route("/logout", post(handlers::logout))
}
