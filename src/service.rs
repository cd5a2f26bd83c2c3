//! Query Orchestrator
//!
//! Composes key generation, cache-aside access, the upstream source and the
//! aggregation engine into the views the API serves.

use std::sync::Arc;

use futures::future::try_join_all;
use serde_json::json;
use tracing::{debug, info, warn};

use crate::aggregation::{
    build_page, compute_statistics, group_by_language, summarize_region, REGIONS,
};
use crate::cache::{generate_key, CacheAside};
use crate::config::RegionFanout;
use crate::error::{ApiError, Result};
use crate::models::{
    Country, CountryDetails, CountryPage, CountryQuery, LanguageMap, RegionMap, RegionSummary,
    Statistics,
};
use crate::upstream::{CountrySource, ResourcePath};

// == Country Service ==
/// Every view is computed on a cache miss and served from the cache until the
/// entry expires. Failures are never cached.
#[derive(Clone)]
pub struct CountryService {
    cache: CacheAside,
    source: Arc<dyn CountrySource>,
    region_fanout: RegionFanout,
}

impl CountryService {
    pub fn new(cache: CacheAside, source: Arc<dyn CountrySource>, region_fanout: RegionFanout) -> Self {
        Self {
            cache,
            source,
            region_fanout,
        }
    }

    // == List ==
    /// Filtered, sorted and paginated country list.
    pub async fn fetch_all_countries(&self, query: &CountryQuery) -> Result<CountryPage> {
        let key = generate_key("countries", Some(&query.cache_params()));

        self.cache
            .get_or_compute(&key, || async {
                let countries = self.source.fetch(&ResourcePath::All).await?;
                let page = build_page(countries, query);
                info!(
                    total = page.total,
                    page = page.page,
                    limit = page.limit,
                    "Processed countries list"
                );
                Ok(page)
            })
            .await
    }

    // == Single Country ==
    /// Details for one country by name. Unknown names yield `NotFound`, which
    /// is not cached.
    pub async fn get_country_by_name(&self, name: &str) -> Result<CountryDetails> {
        let key = generate_key("country", Some(&json!({ "name": name })));

        self.cache
            .get_or_compute(&key, || async {
                let countries = self
                    .source
                    .fetch(&ResourcePath::Name(name.to_string()))
                    .await
                    .map_err(|err| err.not_found_on_404(format!("Country not found: {}", name)))?;

                let country = countries.first().ok_or_else(|| {
                    warn!(name, "Country not found");
                    ApiError::NotFound(format!("Country not found: {}", name))
                })?;

                info!(name, "Fetched country details");
                Ok(CountryDetails::from(country))
            })
            .await
    }

    // == Region ==
    /// Raw records for one region, cached per region.
    pub async fn fetch_countries_by_region(&self, region: &str) -> Result<Vec<Country>> {
        let key = generate_key("region", Some(&json!({ "region": region })));

        self.cache
            .get_or_compute(&key, || async {
                let countries = self
                    .source
                    .fetch(&ResourcePath::Region(region.to_string()))
                    .await
                    .map_err(|err| err.not_found_on_404(format!("Region not found: {}", region)))?;
                info!(region, count = countries.len(), "Fetched countries for region");
                Ok(countries)
            })
            .await
    }

    /// Summary for one canonical region. A region the provider does not know
    /// is reported as an empty bucket.
    async fn region_summary(&self, region: &str) -> Result<RegionSummary> {
        match self.fetch_countries_by_region(region).await {
            Ok(countries) => {
                debug!(region, "Processed region");
                Ok(summarize_region(&countries))
            }
            Err(ApiError::NotFound(_)) => {
                warn!(region, "Region unknown upstream, reporting it empty");
                Ok(RegionSummary::default())
            }
            Err(err) => Err(err),
        }
    }

    // == Regions ==
    /// Every canonical region with its countries and total population.
    pub async fn fetch_regions(&self) -> Result<RegionMap> {
        let key = generate_key("regions", None);

        self.cache
            .get_or_compute(&key, || async {
                let mut regions = RegionMap::new();

                match self.region_fanout {
                    RegionFanout::Sequential => {
                        for region in REGIONS {
                            let summary = self.region_summary(region).await?;
                            regions.insert(region.to_string(), summary);
                        }
                    }
                    RegionFanout::Concurrent => {
                        let summaries =
                            try_join_all(REGIONS.iter().map(|region| self.region_summary(region)))
                                .await?;
                        for (region, summary) in REGIONS.iter().zip(summaries) {
                            regions.insert(region.to_string(), summary);
                        }
                    }
                }

                info!(regions = regions.len(), "Processed regions data");
                Ok(regions)
            })
            .await
    }

    // == Languages ==
    /// Every language code with the countries listing it and total speakers.
    pub async fn fetch_languages(&self) -> Result<LanguageMap> {
        let key = generate_key("languages", None);

        self.cache
            .get_or_compute(&key, || async {
                let countries = self.source.fetch(&ResourcePath::All).await?;
                let languages = group_by_language(&countries);
                info!(languages = languages.len(), "Processed languages data");
                Ok(languages)
            })
            .await
    }

    // == Statistics ==
    pub async fn fetch_statistics(&self) -> Result<Statistics> {
        let key = generate_key("statistics", None);

        self.cache
            .get_or_compute(&key, || async {
                let countries = self.source.fetch(&ResourcePath::All).await?;
                let statistics = compute_statistics(&countries);
                info!(
                    total = statistics.total_countries,
                    "Processed statistics data"
                );
                Ok(statistics)
            })
            .await
    }
}
