//! Cache Store Module
//!
//! In-process store combining HashMap storage with LRU tracking and TTL expiration.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::cache::entry::current_timestamp_ms;
use crate::cache::{CacheBackend, CacheEntry, CacheStats, LruTracker, StoreError, MAX_KEY_LENGTH};

// == Memory Store ==
/// Synchronous storage engine. Shared access goes through [`MemoryBackend`].
#[derive(Debug)]
pub struct MemoryStore {
    entries: HashMap<String, CacheEntry>,
    lru: LruTracker,
    stats: CacheStats,
    /// Maximum number of entries allowed
    max_entries: usize,
    /// Maximum payload size in bytes
    max_value_size: usize,
}

impl MemoryStore {
    // == Constructor ==
    /// Creates a new store with the given capacity and payload limit.
    pub fn new(max_entries: usize, max_value_size: usize) -> Self {
        Self {
            entries: HashMap::new(),
            lru: LruTracker::new(),
            stats: CacheStats::new(),
            max_entries,
            max_value_size,
        }
    }

    // == Set ==
    /// Stores a value for `ttl_seconds`.
    ///
    /// Overwrites reset the TTL. At capacity, the least recently used entry is
    /// evicted first.
    pub fn set(&mut self, key: String, value: String, ttl_seconds: u64) -> Result<(), StoreError> {
        if key.len() > MAX_KEY_LENGTH {
            return Err(StoreError::KeyTooLong {
                max: MAX_KEY_LENGTH,
            });
        }

        if value.len() > self.max_value_size {
            return Err(StoreError::ValueTooLarge {
                size: value.len(),
                max: self.max_value_size,
            });
        }

        let is_overwrite = self.entries.contains_key(&key);

        if !is_overwrite && self.entries.len() >= self.max_entries {
            match self.lru.evict_oldest() {
                Some(evicted_key) => {
                    self.entries.remove(&evicted_key);
                    self.stats.record_eviction();
                }
                None => return Err(StoreError::Full),
            }
        }

        self.entries
            .insert(key.clone(), CacheEntry::new(value, ttl_seconds));
        self.lru.touch(&key);
        self.stats.record_write();
        self.stats.set_total_entries(self.entries.len());

        Ok(())
    }

    // == Get ==
    /// Returns the value if present and not expired.
    ///
    /// Expired entries are removed on the spot and counted as misses.
    pub fn get(&mut self, key: &str) -> Option<String> {
        let now = current_timestamp_ms();
        let expired = match self.entries.get(key) {
            Some(entry) if !entry.is_expired_at(now) => {
                let value = entry.value.clone();
                self.stats.record_hit();
                self.lru.touch(key);
                return Some(value);
            }
            Some(_) => true,
            None => false,
        };

        if expired {
            self.entries.remove(key);
            self.lru.remove(key);
            self.stats.record_expirations(1);
            self.stats.set_total_entries(self.entries.len());
        }
        self.stats.record_miss();
        None
    }

    // == Delete ==
    /// Removes an entry. Returns whether anything was removed.
    pub fn delete(&mut self, key: &str) -> bool {
        let removed = self.entries.remove(key).is_some();
        if removed {
            self.lru.remove(key);
            self.stats.set_total_entries(self.entries.len());
        }
        removed
    }

    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Cleanup Expired ==
    /// Removes all expired entries and returns how many were dropped.
    pub fn cleanup_expired(&mut self) -> usize {
        let now = current_timestamp_ms();
        let expired_keys: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired_at(now))
            .map(|(key, _)| key.clone())
            .collect();

        for key in &expired_keys {
            self.entries.remove(key);
            self.lru.remove(key);
        }

        self.stats.record_expirations(expired_keys.len());
        self.stats.set_total_entries(self.entries.len());
        expired_keys.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// == Memory Backend ==
/// Cloneable async handle over a shared [`MemoryStore`].
#[derive(Debug, Clone)]
pub struct MemoryBackend {
    inner: Arc<RwLock<MemoryStore>>,
}

impl MemoryBackend {
    pub fn new(max_entries: usize, max_value_size: usize) -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryStore::new(max_entries, max_value_size))),
        }
    }

    /// Shared handle to the underlying store, for the cleanup task.
    pub fn shared(&self) -> Arc<RwLock<MemoryStore>> {
        Arc::clone(&self.inner)
    }

    pub async fn stats(&self) -> CacheStats {
        self.inner.read().await.stats()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}

#[async_trait]
impl CacheBackend for MemoryBackend {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        // Write lock: reads touch LRU order and counters
        Ok(self.inner.write().await.get(key))
    }

    async fn set(&self, key: &str, value: String, ttl_seconds: u64) -> Result<(), StoreError> {
        self.inner
            .write()
            .await
            .set(key.to_string(), value, ttl_seconds)
    }

    async fn del(&self, key: &str) -> Result<(), StoreError> {
        self.inner.write().await.delete(key);
        Ok(())
    }
}
