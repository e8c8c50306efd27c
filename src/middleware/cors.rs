use axum::http::HeaderValue;
use axum::http::request::Parts;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::config::settings::AppConfig;

/// Allow-list CORS gate. Origins off the list get no grant headers, so the
/// browser blocks the response; requests without an `Origin` header are not
/// cross-origin and pass through untouched.
pub fn cors_layer(config: &AppConfig) -> CorsLayer {
    let allowed = config.allowed_origins.clone();
    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(move |origin: &HeaderValue, _parts: &Parts| {
            origin
                .to_str()
                .map(|origin| allowed.iter().any(|entry| entry == origin))
                .unwrap_or(false)
        }))
        .allow_methods(Any)
        .allow_headers(Any)
}
