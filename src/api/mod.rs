//! API Module
//!
//! HTTP handlers and routing for the countries REST API.
//!
//! # Endpoints
//! - `GET /api/countries` - Country list (`region`, `sortBy`, `page`, `limit`)
//! - `GET /api/countries/regions` - Region groupings
//! - `GET /api/countries/languages` - Language groupings
//! - `GET /api/countries/statistics` - Summary statistics
//! - `GET /api/countries/:name` - Single country details
//! - `GET /stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
