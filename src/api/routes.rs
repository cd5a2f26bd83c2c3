//! API Routes
//!
//! Configures the Axum router with all countries service endpoints.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    country_by_name_handler, health_handler, languages_handler, list_countries_handler,
    regions_handler, statistics_handler, stats_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /api/countries` - Filtered, sorted, paginated list
/// - `GET /api/countries/regions` - Region groupings
/// - `GET /api/countries/languages` - Language groupings
/// - `GET /api/countries/statistics` - Summary statistics
/// - `GET /api/countries/:name` - Single country details
/// - `GET /stats` - Cache statistics
/// - `GET /health` - Health check endpoint
///
/// Static segments take priority over `:name`, so a country literally called
/// "regions" is not reachable by name.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/countries", get(list_countries_handler))
        .route("/api/countries/regions", get(regions_handler))
        .route("/api/countries/languages", get(languages_handler))
        .route("/api/countries/statistics", get(statistics_handler))
        .route("/api/countries/:name", get(country_by_name_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::MemoryBackend;
    use crate::config::Config;
    use crate::error::Result;
    use crate::models::Country;
    use crate::upstream::{CountrySource, ResourcePath};
    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use std::sync::Arc;
    use tower::util::ServiceExt;

    struct Empty;

    #[async_trait]
    impl CountrySource for Empty {
        async fn fetch(&self, _resource: &ResourcePath) -> Result<Vec<Country>> {
            Ok(Vec::new())
        }
    }

    fn create_test_app() -> Router {
        let state = AppState::new(
            &Config::default(),
            MemoryBackend::new(100, 1024 * 1024),
            Arc::new(Empty),
        );
        create_router(state)
    }

    async fn status_of(uri: &str) -> StatusCode {
        create_test_app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        assert_eq!(status_of("/health").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_stats_endpoint() {
        assert_eq!(status_of("/stats").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_static_routes_win_over_name() {
        // Empty upstream: a name lookup would 404, the static views succeed
        assert_eq!(status_of("/api/countries/regions").await, StatusCode::OK);
        assert_eq!(status_of("/api/countries/languages").await, StatusCode::OK);
        assert_eq!(status_of("/api/countries/statistics").await, StatusCode::OK);
        assert_eq!(status_of("/api/countries/Narnia").await, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unknown_route() {
        assert_eq!(status_of("/get/key").await, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_write_methods_not_allowed() {
        let response = create_test_app()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/api/countries/regions")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
