//! Countries API - Country reference data with cache-aside access
//!
//! Fetches records from the REST Countries provider, derives list, region,
//! language and statistics views from them, and caches every view behind a
//! deterministic key until it expires.

pub mod aggregation;
pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod tasks;
pub mod upstream;

pub use api::{create_router, AppState};
pub use config::Config;
pub use error::{ApiError, Result};
pub use service::CountryService;
pub use tasks::spawn_cleanup_task;
