//! API Handlers
//!
//! HTTP request handlers for each countries endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use tracing::info;

use crate::cache::{CacheAside, MemoryBackend};
use crate::config::Config;
use crate::error::Result;
use crate::models::{
    CountryDetails, CountryPage, CountryQuery, HealthResponse, LanguageMap, ListCountriesParams,
    RegionMap, Statistics, StatsResponse,
};
use crate::service::CountryService;
use crate::upstream::{CountrySource, RestCountriesClient};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// View orchestrator
    pub service: Arc<CountryService>,
    /// Store behind the service's cache, for stats and the cleanup task
    pub cache: MemoryBackend,
}

impl AppState {
    /// Wires a service over `cache` and `source` using the given settings.
    pub fn new(config: &Config, cache: MemoryBackend, source: Arc<dyn CountrySource>) -> Self {
        let aside = CacheAside::new(
            Arc::new(cache.clone()),
            config.cache_ttl,
            config.cache_failure_policy,
        );
        let service = CountryService::new(aside, source, config.region_fanout);
        Self {
            service: Arc::new(service),
            cache,
        }
    }

    /// Creates the production state: memory store plus REST Countries client.
    pub fn from_config(config: &Config) -> Result<Self> {
        let cache = MemoryBackend::new(config.max_entries, config.max_value_size);
        let source = RestCountriesClient::from_config(config)?;
        Ok(Self::new(config, cache, Arc::new(source)))
    }
}

/// Handler for GET /api/countries
pub async fn list_countries_handler(
    State(state): State<AppState>,
    Query(params): Query<ListCountriesParams>,
) -> Result<Json<CountryPage>> {
    let query = CountryQuery::from_params(params)?;
    info!(?query, "Received request for countries");

    let page = state.service.fetch_all_countries(&query).await?;
    Ok(Json(page))
}

/// Handler for GET /api/countries/:name
pub async fn country_by_name_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<CountryDetails>> {
    info!(name = %name, "Received request for country");

    let details = state.service.get_country_by_name(&name).await?;
    Ok(Json(details))
}

/// Handler for GET /api/countries/regions
pub async fn regions_handler(State(state): State<AppState>) -> Result<Json<RegionMap>> {
    info!("Received request for regions");
    Ok(Json(state.service.fetch_regions().await?))
}

/// Handler for GET /api/countries/languages
pub async fn languages_handler(State(state): State<AppState>) -> Result<Json<LanguageMap>> {
    info!("Received request for languages");
    Ok(Json(state.service.fetch_languages().await?))
}

/// Handler for GET /api/countries/statistics
pub async fn statistics_handler(State(state): State<AppState>) -> Result<Json<Statistics>> {
    info!("Received request for statistics");
    Ok(Json(state.service.fetch_statistics().await?))
}

/// Handler for GET /stats
///
/// Returns current cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse::from(state.cache.stats().await))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
