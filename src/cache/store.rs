// In-memory response cache.
// Holds the last successful payload per key and treats entries older than the TTL as absent.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use chrono::{DateTime, Utc};

/// Default TTL for fetched profile and repository data: 5 minutes.
pub const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);

/// Wrapper for cached data with metadata.
#[derive(Debug, Clone)]
pub struct CachedData<T> {
    /// The cached payload.
    pub data: T,
    /// When the payload was fetched.
    pub cached_at: DateTime<Utc>,
}

impl<T> CachedData<T> {
    /// Create a new cached data entry stamped with the current time.
    pub fn new(data: T) -> Self {
        Self {
            data,
            cached_at: Utc::now(),
        }
    }

    /// Age of the entry. A clock that moved backwards reads as infinitely old.
    pub fn age(&self) -> Duration {
        Utc::now()
            .signed_duration_since(self.cached_at)
            .to_std()
            .unwrap_or(Duration::MAX)
    }

    /// Check if this cached data has expired based on TTL.
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.age() >= ttl
    }

    /// Check if this cached data is still valid (not expired).
    pub fn is_valid(&self, ttl: Duration) -> bool {
        !self.is_expired(ttl)
    }
}

/// Key/value store with per-entry expiration.
///
/// Constructed explicitly and shared by reference (usually behind an `Arc`).
/// Every operation takes the lock once, so a `put` is a single atomic
/// replacement and concurrent writers to one key resolve as last-writer-wins.
#[derive(Debug)]
pub struct ResponseCache<V> {
    entries: Mutex<HashMap<String, CachedData<V>>>,
    ttl: Duration,
    capacity: Option<usize>,
}

impl<V: Clone> ResponseCache<V> {
    /// Create an empty, unbounded cache with the default TTL.
    pub fn new() -> Self {
        Self::with_ttl(DEFAULT_TTL)
    }

    /// Create an empty, unbounded cache with a custom TTL.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl,
            capacity: None,
        }
    }

    /// Bound the number of stored keys. Inserting a new key into a full cache
    /// evicts the entry fetched longest ago.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity.max(1));
        self
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Return the payload for `key` if present and younger than the TTL.
    pub fn get(&self, key: &str) -> Option<V> {
        self.lock()
            .get(key)
            .filter(|entry| entry.is_valid(self.ttl))
            .map(|entry| entry.data.clone())
    }

    /// Store `payload` under `key`, replacing whatever was there.
    pub fn put(&self, key: impl Into<String>, payload: V) {
        self.insert(key.into(), CachedData::new(payload));
    }

    /// Drop the entry for `key`, returning whether one existed.
    pub fn remove(&self, key: &str) -> bool {
        self.lock().remove(key).is_some()
    }

    /// Number of stored entries, expired ones included.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub(crate) fn insert(&self, key: String, entry: CachedData<V>) {
        let mut entries = self.lock();

        let full = self.capacity.is_some_and(|cap| entries.len() >= cap);
        if full && !entries.contains_key(&key) {
            let oldest = entries
                .iter()
                .min_by_key(|(_, entry)| entry.cached_at)
                .map(|(k, _)| k.clone());
            if let Some(oldest) = oldest {
                tracing::debug!(key = %oldest, "evicting oldest cache entry");
                entries.remove(&oldest);
            }
        }

        entries.insert(key, entry);
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, CachedData<V>>> {
        // A panic while holding the lock cannot leave a half-written entry,
        // so a poisoned map is still usable.
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<V: Clone> Default for ResponseCache<V> {
    fn default() -> Self {
        Self::new()
    }
}
