use axum::http::{header, HeaderValue, Method};
use extman_domain::config::CorsConfig;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::warn;

const ALLOWED_METHODS: [Method; 4] = [Method::GET, Method::PATCH, Method::DELETE, Method::OPTIONS];

/// Builds the CORS layer for the configured allow-list.
///
/// `*` opens the API to every origin, entries ending in `:*` are matched per
/// request, and anything else becomes a static list.
pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods(ALLOWED_METHODS)
        .allow_headers([header::CONTENT_TYPE]);

    if config.allows_any() {
        return base.allow_origin(Any);
    }

    if config.has_wildcard_ports() {
        let config = config.clone();
        return base.allow_origin(AllowOrigin::predicate(move |origin: &HeaderValue, _| {
            origin
                .to_str()
                .map(|o| config.is_allowed(o))
                .unwrap_or(false)
        }));
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|o| match HeaderValue::from_str(o) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %o, "Ignoring CORS origin that is not a valid header value");
                None
            }
        })
        .collect();

    base.allow_origin(AllowOrigin::list(origins))
}
