use axum::http::HeaderValue;
use tower_http::cors::{Any, CorsLayer};

/// CORS layer for the browser client
///
/// A `*` entry allows any origin; otherwise only the listed origins are allowed.
/// Entries that are not valid header values are skipped.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(std::time::Duration::from_secs(600));

    if origins.iter().any(|o| o == "*") {
        return cors.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
    if allowed.len() < origins.len() {
        tracing::warn!(
            configured = origins.len(),
            valid = allowed.len(),
            "Ignoring invalid CORS origins"
        );
    }
    cors.allow_origin(allowed)
}
