//! Request DTOs for the countries API
//!
//! Raw query-string parameters and the validated, typed query built from them.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::{ApiError, Result};

/// Query string of `GET /api/countries`, exactly as received.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListCountriesParams {
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub sort_by: Option<String>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub limit: Option<u32>,
}

// == Country Query ==
/// Validated list query with defaults applied.
///
/// Built once per request and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryQuery {
    region: Option<String>,
    sort_by: Option<String>,
    page: u32,
    limit: u32,
}

impl CountryQuery {
    pub const DEFAULT_PAGE: u32 = 1;
    pub const DEFAULT_LIMIT: u32 = 10;

    pub fn new() -> Self {
        Self {
            region: None,
            sort_by: None,
            page: Self::DEFAULT_PAGE,
            limit: Self::DEFAULT_LIMIT,
        }
    }

    // == Builders ==
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = non_blank(region.into());
        self
    }

    pub fn with_sort_by(mut self, field: impl Into<String>) -> Self {
        self.sort_by = non_blank(field.into());
        self
    }

    /// Sets the 1-indexed page. Zero is clamped to the first page.
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page.max(1);
        self
    }

    /// Sets the page size. Zero is clamped to one.
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit.max(1);
        self
    }

    // == Validation ==
    /// Builds a query from raw parameters, rejecting zero page or limit.
    pub fn from_params(params: ListCountriesParams) -> Result<Self> {
        if params.page == Some(0) {
            return Err(ApiError::InvalidRequest(
                "page must be a positive integer".to_string(),
            ));
        }
        if params.limit == Some(0) {
            return Err(ApiError::InvalidRequest(
                "limit must be a positive integer".to_string(),
            ));
        }

        let mut query = Self::new();
        if let Some(region) = params.region {
            query = query.with_region(region);
        }
        if let Some(field) = params.sort_by {
            query = query.with_sort_by(field);
        }
        if let Some(page) = params.page {
            query = query.with_page(page);
        }
        if let Some(limit) = params.limit {
            query = query.with_limit(limit);
        }
        Ok(query)
    }

    // == Accessors ==
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    pub fn sort_by(&self) -> Option<&str> {
        self.sort_by.as_deref()
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Parameters identifying this query in the cache. The region is
    /// lowercased because filtering ignores its case.
    pub fn cache_params(&self) -> Value {
        json!({
            "region": self.region.as_ref().map(|r| r.to_lowercase()),
            "sortBy": self.sort_by,
            "page": self.page,
            "limit": self.limit,
        })
    }
}

impl Default for CountryQuery {
    fn default() -> Self {
        Self::new()
    }
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
