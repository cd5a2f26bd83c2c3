//! Configuration Module
//!
//! Handles loading and managing service configuration from environment variables.

use std::env;
use std::str::FromStr;

// == Defaults ==
pub const DEFAULT_UPSTREAM_BASE_URL: &str = "https://restcountries.com/v3.1";
/// Every cache entry lives for one hour unless overridden.
pub const DEFAULT_CACHE_TTL: u64 = 3600;
pub const DEFAULT_MAX_VALUE_SIZE: usize = 8 * 1024 * 1024;

// == Cache Failure Policy ==
/// What the cache-aside accessor does when the store itself errors
/// (as opposed to simply missing a key).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CacheFailurePolicy {
    /// Log the failure, then behave as if the cache were empty
    #[default]
    Degrade,
    /// Fail the request with `CacheUnavailable`
    Fail,
}

impl FromStr for CacheFailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "degrade" => Ok(Self::Degrade),
            "fail" => Ok(Self::Fail),
            other => Err(format!("unknown cache failure policy: {}", other)),
        }
    }
}

// == Region Fan-out ==
/// How the regions view issues its per-region lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegionFanout {
    /// One region at a time, in canonical order
    #[default]
    Sequential,
    /// All regions at once, merged by region key
    Concurrent,
}

impl FromStr for RegionFanout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sequential" => Ok(Self::Sequential),
            "concurrent" => Ok(Self::Concurrent),
            other => Err(format!("unknown region fan-out: {}", other)),
        }
    }
}

/// Service configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Root URL of the country data provider
    pub upstream_base_url: String,
    /// Upstream request timeout in seconds
    pub upstream_timeout: u64,
    /// TTL in seconds applied to every cache write
    pub cache_ttl: u64,
    /// Maximum number of entries the cache can hold
    pub max_entries: usize,
    /// Largest payload the cache accepts, in bytes
    pub max_value_size: usize,
    /// Background cleanup task interval in seconds
    pub cleanup_interval: u64,
    /// Behaviour on cache store failures
    pub cache_failure_policy: CacheFailurePolicy,
    /// Regions view lookup strategy
    pub region_fanout: RegionFanout,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `UPSTREAM_BASE_URL` - Provider root (default: restcountries v3.1)
    /// - `UPSTREAM_TIMEOUT` - Upstream timeout in seconds (default: 10)
    /// - `CACHE_TTL` - Entry TTL in seconds (default: 3600)
    /// - `MAX_ENTRIES` - Maximum cache entries (default: 1000)
    /// - `MAX_VALUE_SIZE` - Maximum payload size in bytes (default: 8 MiB)
    /// - `CLEANUP_INTERVAL` - Cleanup frequency in seconds (default: 30)
    /// - `CACHE_FAILURE_POLICY` - `degrade` or `fail` (default: degrade)
    /// - `REGION_FANOUT` - `sequential` or `concurrent` (default: sequential)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: parse_env("SERVER_PORT").unwrap_or(defaults.server_port),
            upstream_base_url: env::var("UPSTREAM_BASE_URL")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.upstream_base_url),
            upstream_timeout: parse_env("UPSTREAM_TIMEOUT").unwrap_or(defaults.upstream_timeout),
            cache_ttl: parse_env("CACHE_TTL").unwrap_or(defaults.cache_ttl),
            max_entries: parse_env("MAX_ENTRIES").unwrap_or(defaults.max_entries),
            max_value_size: parse_env("MAX_VALUE_SIZE").unwrap_or(defaults.max_value_size),
            cleanup_interval: parse_env("CLEANUP_INTERVAL").unwrap_or(defaults.cleanup_interval),
            cache_failure_policy: parse_env("CACHE_FAILURE_POLICY")
                .unwrap_or(defaults.cache_failure_policy),
            region_fanout: parse_env("REGION_FANOUT").unwrap_or(defaults.region_fanout),
        }
    }
}

/// Reads and parses an environment variable, ignoring unset or malformed values.
fn parse_env<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            upstream_base_url: DEFAULT_UPSTREAM_BASE_URL.to_string(),
            upstream_timeout: 10,
            cache_ttl: DEFAULT_CACHE_TTL,
            max_entries: 1000,
            max_value_size: DEFAULT_MAX_VALUE_SIZE,
            cleanup_interval: 30,
            cache_failure_policy: CacheFailurePolicy::Degrade,
            region_fanout: RegionFanout::Sequential,
        }
    }
}
