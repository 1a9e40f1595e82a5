//! In-memory user store
//!
//! Mirrors the `users` table contract: ids come from a sequence starting
//! at 1, and every column is NOT NULL.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{StoreError, UserStore};
use crate::models::{User, UserPayload};

/// User store held in process memory
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    inner: RwLock<MemoryInner>,
}

#[derive(Debug, Default)]
struct MemoryInner {
    last_id: i64,
    rows: BTreeMap<i64, User>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with the given users.
    pub async fn with_users(payloads: impl IntoIterator<Item = UserPayload>) -> Result<Self, StoreError> {
        let store = Self::new();
        for payload in payloads {
            store.insert(payload).await?;
        }
        Ok(store)
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn list(&self) -> Result<Vec<User>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.rows.values().cloned().collect())
    }

    async fn find(&self, id: i64) -> Result<User, StoreError> {
        let inner = self.inner.read().await;
        inner
            .rows
            .get(&id)
            .cloned()
            .ok_or_else(|| StoreError::user_not_found(id))
    }

    async fn insert(&self, payload: UserPayload) -> Result<User, StoreError> {
        let mut inner = self.inner.write().await;
        // Sequences advance even when the insert is rejected
        inner.last_id += 1;
        let user = payload
            .into_user(inner.last_id)
            .map_err(|field| StoreError::MissingField { field })?;

        inner.rows.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, id: i64, payload: UserPayload) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        let row = inner
            .rows
            .get_mut(&id)
            .ok_or_else(|| StoreError::user_not_found(id))?;

        *row = payload
            .into_user(id)
            .map_err(|field| StoreError::MissingField { field })?;
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
