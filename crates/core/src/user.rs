//! The user record and its partial-update payload.

use serde::{Deserialize, Serialize};

use crate::id::UserId;

/// A user record as persisted in the `User` collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub rollno: i64,
}

impl User {
    pub fn new(id: UserId, name: String, rollno: i64) -> Self {
        Self { id, name, rollno }
    }
}

/// Partial update for a user record.
///
/// The field set doubles as the allow-list of updatable fields: unknown
/// fields are rejected at deserialization, and `id` is deliberately absent
/// (identifiers are immutable after creation).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rollno: Option<i64>,
}

impl UserPatch {
    /// True when no field is set (merging is a no-op).
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.rollno.is_none()
    }

    /// Merge the set fields into `user`, leaving the rest untouched.
    pub fn apply_to(&self, user: &mut User) {
        if let Some(name) = &self.name {
            user.name = name.clone();
        }
        if let Some(rollno) = self.rollno {
            user.rollno = rollno;
        }
    }

    /// Materialize a fresh record from the patch, using defaults for unset
    /// fields. Used by the upsert path when no record exists yet.
    pub fn into_user(self, id: UserId) -> User {
        User {
            id,
            name: self.name.unwrap_or_default(),
            rollno: self.rollno.unwrap_or_default(),
        }
    }
}
