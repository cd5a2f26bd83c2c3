//! Property-Based Tests for the Aggregation Engine
//!
//! Uses proptest to check the list, grouping and statistics invariants over
//! generated country sets.

use proptest::prelude::*;

use crate::aggregation::{
    build_page, compute_statistics, group_by_language, paginate, sort_by_field, summarize_region,
};
use crate::models::{Country, CountryQuery};

// == Strategies ==
fn region_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some("Asia".to_string())),
        Just(Some("asia".to_string())),
        Just(Some("Europe".to_string())),
        Just(Some("Africa".to_string())),
    ]
}

fn language_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(prop::sample::select(vec!["eng", "fra", "spa", "ara", "zho"]), 0..4)
        .prop_map(|codes| codes.into_iter().map(str::to_string).collect())
}

fn country_strategy() -> impl Strategy<Value = Country> {
    (
        "[A-Z][a-z]{2,8}",
        region_strategy(),
        0u64..1_000_000,
        prop::option::of(0.0f64..1_000_000.0),
        language_strategy(),
    )
        .prop_map(|(name, region, population, area, languages)| {
            let mut country = Country::new(name).with_population(population);
            if let Some(region) = region {
                country = country.with_region(region);
            }
            if let Some(area) = area {
                country = country.with_area(area);
            }
            for code in languages {
                let display = code.to_uppercase();
                country = country.with_language(code, display);
            }
            country
        })
}

fn countries_strategy() -> impl Strategy<Value = Vec<Country>> {
    prop::collection::vec(country_strategy(), 0..40)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Every page holds at most `limit` records, and walking all pages yields
    // exactly the filtered list in order.
    #[test]
    fn prop_pages_partition_the_list(
        countries in countries_strategy(),
        limit in 1u32..12,
    ) {
        let total = countries.len();
        let pages = (total as u32) / limit + 2;

        let mut walked = Vec::new();
        for page in 1..=pages {
            let slice = paginate(&countries, page, limit);
            prop_assert!(slice.len() <= limit as usize);
            walked.extend(slice);
        }

        prop_assert_eq!(walked, countries);
    }

    // `total` always counts the filtered records regardless of page.
    #[test]
    fn prop_total_ignores_page(
        countries in countries_strategy(),
        page in 1u32..10,
        limit in 1u32..10,
    ) {
        let expected = countries.iter().filter(|c| c.in_region("asia")).count();
        let query = CountryQuery::new().with_region("Asia").with_page(page).with_limit(limit);

        let result = build_page(countries, &query);

        prop_assert_eq!(result.total, expected);
        prop_assert!(result.data.iter().all(|c| c.in_region("ASIA")));
    }

    // Sorting orders by the key and keeps equal keys in original order.
    #[test]
    fn prop_sort_is_ordered_and_stable(countries in countries_strategy()) {
        let indexed: Vec<Country> = countries
            .into_iter()
            .enumerate()
            .map(|(i, mut c)| {
                c.extra.insert("seq".to_string(), serde_json::json!(i));
                c.population %= 5;
                c
            })
            .collect();

        let mut sorted = indexed.clone();
        sort_by_field(&mut sorted, "population");

        for pair in sorted.windows(2) {
            prop_assert!(pair[0].population <= pair[1].population);
            if pair[0].population == pair[1].population {
                let a = pair[0].extra["seq"].as_u64().unwrap();
                let b = pair[1].extra["seq"].as_u64().unwrap();
                prop_assert!(a < b, "equal keys must keep input order");
            }
        }
    }

    // Region totals equal the plain population sum.
    #[test]
    fn prop_region_total_is_sum(countries in countries_strategy()) {
        let summary = summarize_region(&countries);
        let expected: u64 = countries.iter().map(|c| c.population).sum();
        prop_assert_eq!(summary.total_population, expected);
        prop_assert_eq!(summary.countries.len(), countries.len());
    }

    // Each language total equals the population of every country listing it,
    // and statistics agree with the language grouping.
    #[test]
    fn prop_language_totals_match_statistics(countries in countries_strategy()) {
        let languages = group_by_language(&countries);

        for (code, summary) in &languages {
            let expected: u64 = countries
                .iter()
                .filter(|c| c.languages.contains_key(code))
                .map(|c| c.population)
                .sum();
            prop_assert_eq!(summary.total_speakers, expected);
        }

        let stats = compute_statistics(&countries);
        let best = languages.values().map(|s| s.total_speakers).max().unwrap_or(0);
        prop_assert_eq!(stats.most_spoken_language.speakers, best);
        prop_assert_eq!(stats.total_countries, countries.len());
    }

    // Smallest by population is the first record holding the minimum.
    #[test]
    fn prop_smallest_is_first_minimum(countries in countries_strategy()) {
        let stats = compute_statistics(&countries);
        let expected = countries
            .iter()
            .min_by_key(|c| c.population)
            .cloned();
        prop_assert_eq!(stats.smallest_country, expected);
    }
}
