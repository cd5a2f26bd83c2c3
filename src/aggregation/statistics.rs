//! Summary statistics over a country snapshot.

use indexmap::IndexMap;

use crate::models::{Country, MostSpokenLanguage, Statistics};

/// Computes the statistics view in a single pass.
///
/// The first record seeds both the largest and smallest candidates and is only
/// replaced on a strictly greater area / strictly smaller population, so ties
/// keep the earlier record. The most spoken language is likewise only replaced
/// on a strictly greater total, scanning languages in first-seen order.
pub fn compute_statistics(countries: &[Country]) -> Statistics {
    let mut largest = countries.first();
    let mut smallest = countries.first();
    let mut speakers: IndexMap<&str, u64> = IndexMap::new();

    for country in countries {
        if largest.is_some_and(|current| country.area_or_zero() > current.area_or_zero()) {
            largest = Some(country);
        }
        if smallest.is_some_and(|current| country.population < current.population) {
            smallest = Some(country);
        }

        for code in country.languages.keys() {
            *speakers.entry(code.as_str()).or_insert(0) += country.population;
        }
    }

    let mut most_spoken = MostSpokenLanguage::default();
    for (language, total) in speakers {
        if total > most_spoken.speakers {
            most_spoken = MostSpokenLanguage {
                language: language.to_string(),
                speakers: total,
            };
        }
    }

    Statistics {
        total_countries: countries.len(),
        largest_country: largest.cloned(),
        smallest_country: smallest.cloned(),
        most_spoken_language: most_spoken,
    }
}
