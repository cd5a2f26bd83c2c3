//! Cache-Aside Accessor
//!
//! Wraps a producer with get-or-compute-and-store semantics against a
//! [`CacheBackend`].

use std::future::Future;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::cache::{CacheBackend, StoreError};
use crate::config::CacheFailurePolicy;
use crate::error::{ApiError, Result};

// == Cache Aside ==
/// Get-or-compute accessor.
///
/// A miss runs the producer, stores its JSON form for `ttl_seconds` and returns
/// it. A failed producer writes nothing, so the next call simply retries.
/// Concurrent misses on the same key are not deduplicated: each runs the
/// producer and the last write wins.
#[derive(Clone)]
pub struct CacheAside {
    backend: Arc<dyn CacheBackend>,
    ttl_seconds: u64,
    policy: CacheFailurePolicy,
}

impl CacheAside {
    pub fn new(backend: Arc<dyn CacheBackend>, ttl_seconds: u64, policy: CacheFailurePolicy) -> Self {
        Self {
            backend,
            ttl_seconds,
            policy,
        }
    }

    // == Get Or Compute ==
    /// Returns the cached value for `key`, or computes, stores and returns it.
    pub async fn get_or_compute<T, F, Fut>(&self, key: &str, producer: F) -> Result<T>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        match self.backend.get(key).await {
            Ok(Some(raw)) => match serde_json::from_str::<T>(&raw) {
                Ok(value) => {
                    debug!(key, "cache hit");
                    return Ok(value);
                }
                Err(err) => {
                    warn!(key, error = %err, "cached payload unreadable, recomputing");
                }
            },
            Ok(None) => debug!(key, "cache miss"),
            Err(err) => self.on_store_failure(key, "read", err)?,
        }

        let value = producer().await?;
        let payload = serde_json::to_string(&value)?;

        if let Err(err) = self.backend.set(key, payload, self.ttl_seconds).await {
            self.on_store_failure(key, "write", err)?;
        }

        Ok(value)
    }

    // == Invalidate ==
    /// Drops a cached value so the next read recomputes it.
    pub async fn invalidate(&self, key: &str) -> Result<()> {
        if let Err(err) = self.backend.del(key).await {
            self.on_store_failure(key, "delete", err)?;
        }
        Ok(())
    }

    /// Rejected entries (too long, too large, no room) are served uncached
    /// under either policy; only an outage is subject to the policy.
    fn on_store_failure(&self, key: &str, operation: &str, err: StoreError) -> Result<()> {
        if !err.is_outage() {
            warn!(key, operation, error = %err, "entry rejected by cache store, serving uncached");
            return Ok(());
        }

        match self.policy {
            CacheFailurePolicy::Degrade => {
                warn!(key, operation, error = %err, "cache store failure, bypassing cache");
                Ok(())
            }
            CacheFailurePolicy::Fail => Err(ApiError::CacheUnavailable(err)),
        }
    }
}
