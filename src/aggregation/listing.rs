//! Filter, sort and paginate for the country list view.

use std::cmp::Ordering;

use serde_json::Value;

use crate::models::{Country, CountryPage, CountryQuery};

// == Filter ==
/// Keeps records whose region equals `region`, ignoring case. `None` keeps
/// everything; records without a region are dropped by any filter.
pub fn filter_by_region(countries: Vec<Country>, region: Option<&str>) -> Vec<Country> {
    match region {
        None => countries,
        Some(region) => countries
            .into_iter()
            .filter(|country| country.in_region(region))
            .collect(),
    }
}

// == Sort ==
/// Stable sort on the named field. Equal keys keep their relative order.
pub fn sort_by_field(countries: &mut [Country], field: &str) {
    countries.sort_by_cached_key(|country| SortKey::from(country.field_value(field)));
}

/// Orderable projection of a field value: numbers, then text, then booleans,
/// then any other JSON, then missing values.
#[derive(Debug, Clone)]
enum SortKey {
    Number(f64),
    Text(String),
    Flag(bool),
    Other,
    Missing,
}

impl SortKey {
    fn rank(&self) -> u8 {
        match self {
            SortKey::Number(_) => 0,
            SortKey::Text(_) => 1,
            SortKey::Flag(_) => 2,
            SortKey::Other => 3,
            SortKey::Missing => 4,
        }
    }
}

impl From<Option<Value>> for SortKey {
    fn from(value: Option<Value>) -> Self {
        match value {
            None | Some(Value::Null) => SortKey::Missing,
            Some(Value::Number(n)) => n.as_f64().map_or(SortKey::Other, SortKey::Number),
            Some(Value::String(s)) => SortKey::Text(s),
            Some(Value::Bool(b)) => SortKey::Flag(b),
            Some(_) => SortKey::Other,
        }
    }
}

impl PartialEq for SortKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SortKey {}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SortKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKey::Number(a), SortKey::Number(b)) => a.total_cmp(b),
            (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
            (SortKey::Flag(a), SortKey::Flag(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

// == Paginate ==
/// Returns the 1-indexed `page` of size `limit`. Pages past the end are empty.
pub fn paginate<T: Clone>(items: &[T], page: u32, limit: u32) -> Vec<T> {
    let limit = limit as usize;
    let start = (page.saturating_sub(1) as usize).saturating_mul(limit);
    if start >= items.len() {
        return Vec::new();
    }
    let end = start.saturating_add(limit).min(items.len());
    items[start..end].to_vec()
}

// == List View ==
/// Filter, then sort, then slice. `total` counts the filtered records.
pub fn build_page(countries: Vec<Country>, query: &CountryQuery) -> CountryPage {
    let mut matching = filter_by_region(countries, query.region());
    if let Some(field) = query.sort_by() {
        sort_by_field(&mut matching, field);
    }

    CountryPage {
        total: matching.len(),
        page: query.page(),
        limit: query.limit(),
        data: paginate(&matching, query.page(), query.limit()),
    }
}
