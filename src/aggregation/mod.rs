//! Aggregation Engine
//!
//! Pure, synchronous transformations over a snapshot of country records.
//! Nothing here performs I/O or touches the cache.

pub mod grouping;
pub mod listing;
pub mod statistics;

#[cfg(test)]
mod property_tests;

pub use grouping::{group_by_language, summarize_region, REGIONS};
pub use listing::{build_page, filter_by_region, paginate, sort_by_field};
pub use statistics::compute_statistics;
