//! Region and language group-by.

use crate::models::{
    Country, CountryPopulation, LanguageMap, LanguageSummary, RegionCountry, RegionSummary,
};

/// The region buckets the regions view always reports, in output order.
pub const REGIONS: [&str; 7] = [
    "Africa",
    "Americas",
    "Asia",
    "Europe",
    "Oceania",
    "Antarctic",
    "Caribbean",
];

// == Region Summary ==
/// Projects one region's countries to `{name, population, languages}` and
/// totals their population. Languages pass through unmodified.
pub fn summarize_region(countries: &[Country]) -> RegionSummary {
    RegionSummary {
        countries: countries
            .iter()
            .map(|country| RegionCountry {
                name: country.common_name().to_string(),
                population: country.population,
                languages: country.languages.clone(),
            })
            .collect(),
        total_population: countries.iter().map(|country| country.population).sum(),
    }
}

// == Language Groups ==
/// Buckets countries by every language code they list.
///
/// A multilingual country lands in each of its buckets with its full
/// population. Buckets appear in the order their code is first seen.
pub fn group_by_language(countries: &[Country]) -> LanguageMap {
    let mut languages = LanguageMap::new();

    for country in countries {
        for code in country.languages.keys() {
            let summary = languages
                .entry(code.clone())
                .or_insert_with(LanguageSummary::default);
            summary.countries.push(CountryPopulation {
                name: country.common_name().to_string(),
                population: country.population,
            });
            summary.total_speakers += country.population;
        }
    }

    languages
}
