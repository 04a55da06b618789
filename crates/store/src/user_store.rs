use rollcall_core::{User, UserId, UserPatch};

use crate::error::StoreError;

/// Access to the `User` collection: find-all, insert, and upsert-update.
///
/// Implementations assign identifiers; callers never pick them. `upsert`
/// merges the patch into the record with the given id, or creates a fresh
/// record (with a fresh, store-generated id) when none exists.
#[async_trait::async_trait]
pub trait UserStore: Send + Sync {
    /// Every record, in store-defined (unstable) order.
    async fn list(&self) -> Result<Vec<User>, StoreError>;

    /// Persist a new record and return it with its assigned id.
    async fn insert(&self, name: String, rollno: i64) -> Result<User, StoreError>;

    /// Merge `patch` into the record with `id`, creating one if absent.
    /// Returns the post-merge record.
    async fn upsert(&self, id: UserId, patch: UserPatch) -> Result<User, StoreError>;
}
