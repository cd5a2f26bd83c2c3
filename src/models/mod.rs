//! Data models for the countries service
//!
//! - `country`: the upstream record
//! - `requests`: query-string parameters and the typed list query
//! - `views`: derived aggregates returned to callers and cached
//! - `responses`: operational response bodies

pub mod country;
pub mod requests;
pub mod responses;
pub mod views;

// Re-export commonly used types
pub use country::{Country, CountryName};
pub use requests::{CountryQuery, ListCountriesParams};
pub use responses::{ErrorResponse, HealthResponse, StatsResponse};
pub use views::{
    CountryDetails, CountryPage, CountryPopulation, LanguageMap, LanguageSummary,
    MostSpokenLanguage, RegionCountry, RegionMap, RegionSummary, Statistics,
};
