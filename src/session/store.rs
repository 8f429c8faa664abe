//! Session store trait and the in-memory implementation

use crate::state_machine::SubscriberSession;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::Mutex;
use tokio::time::Instant;

/// Session store failure. The in-memory store never fails; an external
/// cache can.
#[derive(Debug, Error)]
#[error("session store unavailable: {0}")]
pub struct StoreError(pub String);

/// Storage for subscriber sessions
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Current session for a subscriber, if one is live
    async fn get(&self, key: &str) -> Result<Option<SubscriberSession>, StoreError>;

    /// Create or replace a subscriber's session
    async fn put(&self, key: &str, session: SubscriberSession) -> Result<(), StoreError>;

    /// Drop a subscriber's session, returning it if there was one
    #[allow(dead_code)]
    async fn remove(&self, key: &str) -> Result<Option<SubscriberSession>, StoreError>;

    /// Drop every session idle past the TTL. Returns how many were dropped.
    async fn evict_idle(&self) -> Result<usize, StoreError>;
}

#[async_trait]
impl<T: SessionStore + ?Sized> SessionStore for Arc<T> {
    async fn get(&self, key: &str) -> Result<Option<SubscriberSession>, StoreError> {
        (**self).get(key).await
    }

    async fn put(&self, key: &str, session: SubscriberSession) -> Result<(), StoreError> {
        (**self).put(key, session).await
    }

    async fn remove(&self, key: &str) -> Result<Option<SubscriberSession>, StoreError> {
        (**self).remove(key).await
    }

    async fn evict_idle(&self) -> Result<usize, StoreError> {
        (**self).evict_idle().await
    }
}

struct StoredSession {
    session: SubscriberSession,
    last_touched: Instant,
}

/// Process-local session store with idle eviction
pub struct InMemorySessionStore {
    entries: Mutex<HashMap<String, StoredSession>>,
    ttl: Duration,
}

impl InMemorySessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get(&self, key: &str) -> Result<Option<SubscriberSession>, StoreError> {
        let mut entries = self.entries.lock().await;
        let now = Instant::now();

        match entries.get_mut(key) {
            None => return Ok(None),
            Some(stored) if now.duration_since(stored.last_touched) < self.ttl => {
                stored.last_touched = now;
                return Ok(Some(stored.session.clone()));
            }
            Some(_) => {}
        }

        tracing::debug!(subscriber = %key, "Session expired on access");
        entries.remove(key);
        Ok(None)
    }

    async fn put(&self, key: &str, session: SubscriberSession) -> Result<(), StoreError> {
        self.entries.lock().await.insert(
            key.to_string(),
            StoredSession {
                session,
                last_touched: Instant::now(),
            },
        );
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<Option<SubscriberSession>, StoreError> {
        Ok(self
            .entries
            .lock()
            .await
            .remove(key)
            .map(|stored| stored.session))
    }

    async fn evict_idle(&self) -> Result<usize, StoreError> {
        let mut entries = self.entries.lock().await;
        let now = Instant::now();
        let before = entries.len();
        entries.retain(|_, stored| now.duration_since(stored.last_touched) < self.ttl);
        Ok(before - entries.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::RecipeItem;

    fn session(count: usize) -> SubscriberSession {
        SubscriberSession::new(vec![RecipeItem::default(); count]).unwrap()
    }

    #[tokio::test]
    async fn test_put_get_remove() {
        let store = InMemorySessionStore::new(Duration::from_secs(60));
        assert!(store.get("+1").await.unwrap().is_none());

        store.put("+1", session(2)).await.unwrap();
        assert_eq!(store.get("+1").await.unwrap(), Some(session(2)));
        assert!(store.get("+2").await.unwrap().is_none());

        let removed = store.remove("+1").await.unwrap();
        assert_eq!(removed, Some(session(2)));
        assert!(store.get("+1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_put_replaces() {
        let store = InMemorySessionStore::new(Duration::from_secs(60));
        store.put("+1", session(2)).await.unwrap();
        let advanced = session(3).advanced().unwrap();
        store.put("+1", advanced.clone()).await.unwrap();

        assert_eq!(store.get("+1").await.unwrap(), Some(advanced));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_idle_sessions_are_evicted() {
        let store = InMemorySessionStore::new(Duration::from_millis(20));
        store.put("+1", session(1)).await.unwrap();
        store.put("+2", session(1)).await.unwrap();

        assert_eq!(store.evict_idle().await.unwrap(), 0);

        tokio::time::sleep(Duration::from_millis(40)).await;
        assert_eq!(store.evict_idle().await.unwrap(), 2);
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn test_expired_session_is_absent_on_get() {
        let store = InMemorySessionStore::new(Duration::from_millis(20));
        store.put("+1", session(1)).await.unwrap();

        tokio::time::sleep(Duration::from_millis(40)).await;
        assert!(store.get("+1").await.unwrap().is_none());
        assert_eq!(store.len().await, 0);
    }
}
