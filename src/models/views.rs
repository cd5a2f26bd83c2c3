//! Derived views computed from a country snapshot.
//!
//! All of these round-trip through the cache as JSON, so each derives both
//! `Serialize` and `Deserialize`.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::models::Country;

/// Region name -> summary, in canonical region order.
pub type RegionMap = IndexMap<String, RegionSummary>;

/// Language code -> summary, in first-seen order.
pub type LanguageMap = IndexMap<String, LanguageSummary>;

// == List View ==
/// One page of the filtered and sorted country list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryPage {
    /// Matching records before slicing
    pub total: usize,
    pub page: u32,
    pub limit: u32,
    pub data: Vec<Country>,
}

// == Single Country ==
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryDetails {
    pub name: String,
    pub population: u64,
    pub area: Option<f64>,
    /// Display names joined with ", "
    pub languages: String,
    pub borders: Vec<String>,
}

impl From<&Country> for CountryDetails {
    fn from(country: &Country) -> Self {
        Self {
            name: country.common_name().to_string(),
            population: country.population,
            area: country.area,
            languages: country
                .languages
                .values()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", "),
            borders: country.borders.clone(),
        }
    }
}

// == Regions ==
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionCountry {
    pub name: String,
    pub population: u64,
    pub languages: IndexMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionSummary {
    pub countries: Vec<RegionCountry>,
    pub total_population: u64,
}

// == Languages ==
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryPopulation {
    pub name: String,
    pub population: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageSummary {
    pub countries: Vec<CountryPopulation>,
    pub total_speakers: u64,
}

// == Statistics ==
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MostSpokenLanguage {
    /// Empty when no language has any speakers
    pub language: String,
    pub speakers: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub total_countries: usize,
    /// By area; `None` only for an empty dataset
    pub largest_country: Option<Country>,
    /// By population; `None` only for an empty dataset
    pub smallest_country: Option<Country>,
    pub most_spoken_language: MostSpokenLanguage,
}
