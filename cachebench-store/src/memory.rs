//! In-process key-value store.

use crate::error::StoreError;
use crate::{Expiry, KeyValueStore};
use bytes::Bytes;
use std::collections::HashMap;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
struct Entry {
    value: Bytes,
    expires_at: Instant,
}

/// Key-value store kept in process memory.
///
/// Expired entries are dropped lazily on read.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, Entry>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes `key`. Returns true if a live entry was removed.
    pub fn remove(&mut self, key: &str) -> bool {
        self.entries
            .remove(key)
            .is_some_and(|e| e.expires_at > Instant::now())
    }

    /// Returns the number of stored entries, including expired ones not
    /// yet dropped.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the store holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    async fn set(&mut self, key: &str, value: &[u8], ttl: Duration) -> Result<(), StoreError> {
        Expiry::from_ttl(ttl)?;
        let expires_at = Instant::now()
            .checked_add(ttl)
            .ok_or(StoreError::InvalidTtl { ttl })?;
        self.entries.insert(
            key.to_string(),
            Entry {
                value: Bytes::copy_from_slice(value),
                expires_at,
            },
        );
        Ok(())
    }

    async fn get(&mut self, key: &str) -> Result<Bytes, StoreError> {
        match self.entries.get(key) {
            Some(entry) if entry.expires_at > Instant::now() => Ok(entry.value.clone()),
            Some(_) => {
                self.entries.remove(key);
                Err(StoreError::not_found(key))
            }
            None => Err(StoreError::not_found(key)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TTL: Duration = Duration::from_secs(300);

    #[tokio::test]
    async fn test_set_then_get() {
        let mut store = MemoryStore::new();
        store.set("k", b"value", TTL).await.unwrap();
        assert_eq!(store.get("k").await.unwrap().as_ref(), b"value");
    }

    #[tokio::test]
    async fn test_set_overwrites() {
        let mut store = MemoryStore::new();
        store.set("k", b"one", TTL).await.unwrap();
        store.set("k", b"two", TTL).await.unwrap();
        assert_eq!(store.get("k").await.unwrap().as_ref(), b"two");
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_get_unset_key() {
        let mut store = MemoryStore::new();
        let err = store.get("missing").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_get_expired_key() {
        let mut store = MemoryStore::new();
        store
            .set("k", b"value", Duration::from_millis(5))
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_millis(20)).await;

        assert!(store.get("k").await.unwrap_err().is_not_found());
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_zero_ttl_rejected() {
        let mut store = MemoryStore::new();
        let err = store.set("k", b"v", Duration::ZERO).await.unwrap_err();
        assert!(matches!(err, StoreError::InvalidTtl { .. }));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_unrepresentable_ttl_rejected() {
        let mut store = MemoryStore::new();
        let err = store
            .set("k", b"v", Duration::from_secs(u64::MAX))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::InvalidTtl { .. }));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_remove() {
        let mut store = MemoryStore::new();
        store.set("k", b"v", TTL).await.unwrap();
        assert!(store.remove("k"));
        assert!(!store.remove("k"));
    }
}
