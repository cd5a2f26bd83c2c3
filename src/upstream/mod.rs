//! Upstream Module
//!
//! Boundary to the country data provider. The rest of the crate only sees the
//! [`CountrySource`] trait; [`RestCountriesClient`] is the HTTP implementation.

mod client;

use std::fmt;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::Country;

pub use client::RestCountriesClient;

// == Resource Path ==
/// The provider resources this service reads.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResourcePath {
    /// `/all`
    All,
    /// `/name/{name}`
    Name(String),
    /// `/region/{region}`
    Region(String),
}

impl ResourcePath {
    /// Path segments below the provider root, unencoded.
    pub fn segments(&self) -> Vec<&str> {
        match self {
            ResourcePath::All => vec!["all"],
            ResourcePath::Name(name) => vec!["name", name.as_str()],
            ResourcePath::Region(region) => vec!["region", region.as_str()],
        }
    }
}

impl fmt::Display for ResourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in self.segments() {
            write!(f, "/{}", segment)?;
        }
        Ok(())
    }
}

// == Country Source ==
/// Anything that can produce raw country records for a resource.
///
/// Implementations make a single attempt per call and classify failures as
/// `ApiError::Upstream` (with or without a status) or `ApiError::Internal`.
#[async_trait]
pub trait CountrySource: Send + Sync {
    async fn fetch(&self, resource: &ResourcePath) -> Result<Vec<Country>>;
}
