//! Integration Tests for API Endpoints
//!
//! Tests full request/response cycle for each endpoint against an in-memory
//! provider.

mod common;

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use countries_api::create_router;
use serde_json::Value;
use tower::ServiceExt;

use common::{app_state, numbered_countries, sample_countries, Failure, FakeSource};

// == Helper Functions ==

fn create_test_app(source: Arc<FakeSource>) -> Router {
    create_router(app_state(source))
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

// == List Endpoint ==

#[tokio::test]
async fn test_list_endpoint_defaults() {
    let app = create_test_app(FakeSource::new(numbered_countries(25)));

    let (status, json) = get(&app, "/api/countries").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total"], 25);
    assert_eq!(json["page"], 1);
    assert_eq!(json["limit"], 10);
    assert_eq!(json["data"].as_array().unwrap().len(), 10);
    assert_eq!(json["data"][0]["name"]["common"], "Country00");
}

#[tokio::test]
async fn test_list_endpoint_query_parameters() {
    let app = create_test_app(FakeSource::new(sample_countries()));

    let (status, json) = get(
        &app,
        "/api/countries?region=europe&sortBy=population&page=1&limit=1",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total"], 2);
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
    assert_eq!(json["data"][0]["name"]["common"], "Monaco");
}

#[tokio::test]
async fn test_list_endpoint_rejects_zero_page() {
    let source = FakeSource::new(sample_countries());
    let app = create_test_app(source.clone());

    let (status, json) = get(&app, "/api/countries?page=0").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("page"));
    assert_eq!(source.calls(), 0);
}

#[tokio::test]
async fn test_list_endpoint_rejects_non_numeric_limit() {
    let app = create_test_app(FakeSource::new(sample_countries()));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/countries?limit=ten")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// == Country Endpoint ==

#[tokio::test]
async fn test_country_endpoint_success() {
    let app = create_test_app(FakeSource::new(sample_countries()));

    let (status, json) = get(&app, "/api/countries/France").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["name"], "France");
    assert_eq!(json["population"], 7);
    assert_eq!(json["languages"], "French");
    assert_eq!(json["borders"], serde_json::json!(["DEU"]));
}

#[tokio::test]
async fn test_country_endpoint_encoded_name() {
    let source = FakeSource::new(vec![countries_api::models::Country::new(
        "United States",
    )
    .with_region("Americas")
    .with_population(330)]);
    let app = create_test_app(source);

    let (status, json) = get(&app, "/api/countries/United%20States").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["name"], "United States");
}

#[tokio::test]
async fn test_country_endpoint_not_found() {
    let app = create_test_app(FakeSource::new(sample_countries()));

    let (status, json) = get(&app, "/api/countries/Atlantis").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(json["error"].as_str().unwrap().contains("Atlantis"));
}

// == Aggregate Endpoints ==

#[tokio::test]
async fn test_regions_endpoint() {
    let app = create_test_app(FakeSource::new(sample_countries()));

    let (status, json) = get(&app, "/api/countries/regions").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["Asia"]["totalPopulation"], 30);
    assert_eq!(json["Asia"]["countries"][0]["name"], "Japan");
    assert_eq!(json["Oceania"]["totalPopulation"], 0);
}

#[tokio::test]
async fn test_languages_endpoint() {
    let app = create_test_app(FakeSource::new(sample_countries()));

    let (status, json) = get(&app, "/api/countries/languages").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["eng"]["totalSpeakers"], 25);
    assert_eq!(json["eng"]["countries"][0]["name"], "India");
    assert_eq!(json["eng"]["countries"][1]["name"], "Kenya");
}

#[tokio::test]
async fn test_statistics_endpoint() {
    let app = create_test_app(FakeSource::new(sample_countries()));

    let (status, json) = get(&app, "/api/countries/statistics").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["totalCountries"], 5);
    assert_eq!(json["largestCountry"]["name"]["common"], "India");
    assert_eq!(json["smallestCountry"]["name"]["common"], "Monaco");
    assert_eq!(json["mostSpokenLanguage"]["language"], "eng");
    assert_eq!(json["mostSpokenLanguage"]["speakers"], 25);
}

// == Upstream Failures ==

#[tokio::test]
async fn test_upstream_error_status_maps_to_bad_gateway() {
    let source = FakeSource::new(sample_countries());
    source.fail_with(Some(Failure::Status(500)));
    let app = create_test_app(source);

    let (status, json) = get(&app, "/api/countries/statistics").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(json["upstreamStatus"], 500);
}

#[tokio::test]
async fn test_unreachable_upstream_maps_to_service_unavailable() {
    let source = FakeSource::new(sample_countries());
    source.fail_with(Some(Failure::Unreachable));
    let app = create_test_app(source);

    let (status, json) = get(&app, "/api/countries").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(json.get("upstreamStatus").is_none());
}

#[tokio::test]
async fn test_recovers_after_upstream_failure() {
    let source = FakeSource::new(sample_countries());
    let app = create_test_app(source.clone());

    source.fail_with(Some(Failure::Status(502)));
    let (status, _) = get(&app, "/api/countries/languages").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);

    source.fail_with(None);
    let (status, _) = get(&app, "/api/countries/languages").await;
    assert_eq!(status, StatusCode::OK);
}

// == Stats and Health ==

#[tokio::test]
async fn test_stats_endpoint_tracks_cache_use() {
    let source = FakeSource::new(sample_countries());
    let app = create_test_app(source.clone());

    get(&app, "/api/countries/statistics").await;
    get(&app, "/api/countries/statistics").await;
    let (status, json) = get(&app, "/stats").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["hits"], 1);
    assert_eq!(json["misses"], 1);
    assert_eq!(json["writes"], 1);
    assert_eq!(json["totalEntries"], 1);
    assert_eq!(json["hitRate"], 0.5);
    assert_eq!(source.calls(), 1);
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_app(FakeSource::new(Vec::new()));

    let (status, json) = get(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert!(json["timestamp"].is_string());
}
