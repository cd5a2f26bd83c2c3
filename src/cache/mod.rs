//! Cache Module
//!
//! Cache-aside access over a pluggable key/value store with per-entry TTL.
//!
//! - [`CacheBackend`] is the store protocol (`get` / `set` / `del`).
//! - [`MemoryBackend`] is the in-process implementation, with LRU bounding.
//! - [`CacheAside`] wraps a producer with get-or-compute-and-store semantics.
//! - [`generate_key`] builds deterministic keys from a prefix and parameters.

mod aside;
mod entry;
mod keys;
mod lru;
mod stats;
mod store;


use async_trait::async_trait;
use thiserror::Error;

// Re-export public types
pub use aside::CacheAside;
pub use entry::CacheEntry;
pub use keys::{canonical_json, generate_key};
pub use lru::LruTracker;
pub use stats::CacheStats;
pub use store::{MemoryBackend, MemoryStore};

// == Public Constants ==
/// Maximum allowed key length in bytes
pub const MAX_KEY_LENGTH: usize = 512;

// == Store Error ==
/// Failures of the store itself, as opposed to a plain miss.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("key exceeds maximum length of {max} bytes")]
    KeyTooLong { max: usize },

    #[error("value of {size} bytes exceeds maximum size of {max} bytes")]
    ValueTooLarge { size: usize, max: usize },

    #[error("cache is full and eviction failed")]
    Full,

    #[error("cache store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    /// True when the store itself is down. The other variants reject one
    /// entry while the store keeps working.
    pub fn is_outage(&self) -> bool {
        matches!(self, StoreError::Unavailable(_))
    }
}

// == Cache Backend ==
/// Key/value store with per-entry expiration.
///
/// Values are caller-serialized text; the store is encoding-agnostic.
/// `get` returns `Ok(None)` for absent or expired keys; `Err` is reserved for
/// the store failing.
#[async_trait]
pub trait CacheBackend: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    async fn set(&self, key: &str, value: String, ttl_seconds: u64) -> Result<(), StoreError>;

    async fn del(&self, key: &str) -> Result<(), StoreError>;
}
