//! In-memory user store for dev and tests.

use std::collections::HashMap;
use std::sync::RwLock;

use rollcall_core::{User, UserId, UserPatch};

use crate::error::StoreError;
use crate::user_store::UserStore;

/// In-memory `User` collection guarded by an `RwLock`.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    inner: RwLock<HashMap<UserId, User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl UserStore for InMemoryUserStore {
    async fn list(&self) -> Result<Vec<User>, StoreError> {
        let map = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        Ok(map.values().cloned().collect())
    }

    async fn insert(&self, name: String, rollno: i64) -> Result<User, StoreError> {
        let user = User::new(UserId::new(), name, rollno);
        let mut map = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        map.insert(user.id, user.clone());
        Ok(user)
    }

    async fn upsert(&self, id: UserId, patch: UserPatch) -> Result<User, StoreError> {
        let mut map = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        let user = match map.get_mut(&id) {
            Some(existing) => {
                patch.apply_to(existing);
                existing.clone()
            }
            None => {
                // Missing id: create a record with a fresh store-assigned id.
                // The caller's id is not adopted.
                let created = patch.into_user(UserId::new());
                map.insert(created.id, created.clone());
                created
            }
        };
        Ok(user)
    }
}
