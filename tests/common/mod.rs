//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use countries_api::cache::{CacheAside, MemoryBackend};
use countries_api::config::{CacheFailurePolicy, Config, RegionFanout};
use countries_api::models::Country;
use countries_api::upstream::{CountrySource, ResourcePath};
use countries_api::{ApiError, AppState, CountryService, Result};

/// How the fake provider should fail, if at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    Status(u16),
    Unreachable,
}

// == Fake Source ==
/// In-memory provider serving a fixed record set and counting every call.
///
/// Unknown names and regions answer 404 the way the real provider does.
pub struct FakeSource {
    countries: Vec<Country>,
    calls: AtomicUsize,
    failure: Mutex<Option<Failure>>,
}

impl FakeSource {
    pub fn new(countries: Vec<Country>) -> Arc<Self> {
        Arc::new(Self {
            countries,
            calls: AtomicUsize::new(0),
            failure: Mutex::new(None),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn fail_with(&self, failure: Option<Failure>) {
        *self.failure.lock().unwrap() = failure;
    }

    fn not_found() -> ApiError {
        ApiError::upstream(404, r#"{"status":404,"message":"Not Found"}"#)
    }
}

#[async_trait]
impl CountrySource for FakeSource {
    async fn fetch(&self, resource: &ResourcePath) -> Result<Vec<Country>> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match *self.failure.lock().unwrap() {
            Some(Failure::Status(status)) => return Err(ApiError::upstream(status, "failure")),
            Some(Failure::Unreachable) => return Err(ApiError::unreachable()),
            None => {}
        }

        let matched: Vec<Country> = match resource {
            ResourcePath::All => return Ok(self.countries.clone()),
            ResourcePath::Name(name) => self
                .countries
                .iter()
                .filter(|c| c.common_name().eq_ignore_ascii_case(name))
                .cloned()
                .collect(),
            ResourcePath::Region(region) => self
                .countries
                .iter()
                .filter(|c| c.in_region(region))
                .cloned()
                .collect(),
        };

        if matched.is_empty() {
            Err(Self::not_found())
        } else {
            Ok(matched)
        }
    }
}

// == Fixtures ==
/// Five countries across three regions with overlapping languages.
pub fn sample_countries() -> Vec<Country> {
    vec![
        Country::new("Japan")
            .with_region("Asia")
            .with_population(10)
            .with_area(377_975.0)
            .with_language("jpn", "Japanese"),
        Country::new("India")
            .with_region("Asia")
            .with_population(20)
            .with_area(3_287_590.0)
            .with_language("eng", "English")
            .with_language("hin", "Hindi")
            .with_border("CHN")
            .with_border("PAK"),
        Country::new("France")
            .with_region("Europe")
            .with_population(7)
            .with_area(551_695.0)
            .with_language("fra", "French")
            .with_border("DEU"),
        Country::new("Monaco")
            .with_region("Europe")
            .with_population(3)
            .with_area(2.02)
            .with_language("fra", "French"),
        Country::new("Kenya")
            .with_region("Africa")
            .with_population(5)
            .with_area(580_367.0)
            .with_language("eng", "English")
            .with_language("swa", "Swahili"),
    ]
}

/// `n` countries named `Country00`, `Country01`, ... in `Europe`.
pub fn numbered_countries(n: usize) -> Vec<Country> {
    (0..n)
        .map(|i| {
            Country::new(format!("Country{:02}", i))
                .with_region("Europe")
                .with_population(i as u64)
        })
        .collect()
}

pub fn test_config() -> Config {
    Config {
        max_entries: 100,
        max_value_size: 1024 * 1024,
        ..Config::default()
    }
}

pub fn service_with(
    source: Arc<FakeSource>,
    backend: MemoryBackend,
    fanout: RegionFanout,
) -> CountryService {
    let cache = CacheAside::new(Arc::new(backend), 3600, CacheFailurePolicy::Degrade);
    CountryService::new(cache, source, fanout)
}

pub fn app_state(source: Arc<FakeSource>) -> AppState {
    let config = test_config();
    let backend = MemoryBackend::new(config.max_entries, config.max_value_size);
    AppState::new(&config, backend, source)
}
