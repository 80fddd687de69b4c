//! CORS layer configuration.

use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};

use fyphub_core::config::CorsConfig;

/// Builds a CORS tower layer from configuration.
///
/// Auth cookies only flow cross-site when the frontend origin is listed
/// explicitly; a wildcard origin disables credentials entirely.
pub fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    let mut layer = CorsLayer::new();

    if config.allowed_origins.contains(&"*".to_string()) {
        layer = layer.allow_origin(Any).allow_headers(Any);
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        let headers: Vec<HeaderName> = config
            .allowed_headers
            .iter()
            .filter(|h| h.as_str() != "*")
            .filter_map(|h| h.parse().ok())
            .collect();
        layer = layer
            .allow_origin(origins)
            .allow_headers(headers)
            .allow_credentials(true);
    }

    let methods: Vec<Method> = config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    layer = layer.allow_methods(methods);

    layer.max_age(std::time::Duration::from_secs(config.max_age_seconds))
}
