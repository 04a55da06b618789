//! MongoDB-backed user store (`mongo` feature).
//!
//! One collection, `User`, holding `{ _id, name, rollno }` documents with the
//! UUID identifier stored as a string.

use futures_util::TryStreamExt;
use mongodb::bson::doc;
use mongodb::{Client, Collection};
use serde::{Deserialize, Serialize};

use rollcall_core::{User, UserId, UserPatch};

use crate::error::StoreError;
use crate::user_store::UserStore;

const COLLECTION: &str = "User";

/// Wire form of a user record in the `User` collection.
#[derive(Debug, Serialize, Deserialize)]
struct UserDocument {
    #[serde(rename = "_id")]
    id: String,
    name: String,
    rollno: i64,
}

impl From<&User> for UserDocument {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name.clone(),
            rollno: user.rollno,
        }
    }
}

impl TryFrom<UserDocument> for User {
    type Error = StoreError;

    fn try_from(doc: UserDocument) -> Result<Self, Self::Error> {
        let id: UserId = doc
            .id
            .parse()
            .map_err(|e| StoreError::Backend(format!("malformed _id in {COLLECTION}: {e}")))?;
        Ok(User::new(id, doc.name, doc.rollno))
    }
}

/// User store backed by a MongoDB collection.
pub struct MongoUserStore {
    users: Collection<UserDocument>,
}

impl MongoUserStore {
    /// Connect to `url` and bind the `User` collection in database `db`.
    ///
    /// The client owns its connection pool; construct once at startup and
    /// share via `Arc`.
    pub async fn connect(url: &str, db: &str) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(url).await?;
        let users = client.database(db).collection::<UserDocument>(COLLECTION);
        tracing::info!(%db, collection = COLLECTION, "connected to mongodb");
        Ok(Self { users })
    }
}

#[async_trait::async_trait]
impl UserStore for MongoUserStore {
    async fn list(&self) -> Result<Vec<User>, StoreError> {
        let docs: Vec<UserDocument> = self.users.find(doc! {}).await?.try_collect().await?;
        docs.into_iter().map(User::try_from).collect()
    }

    async fn insert(&self, name: String, rollno: i64) -> Result<User, StoreError> {
        let user = User::new(UserId::new(), name, rollno);
        self.users.insert_one(UserDocument::from(&user)).await?;
        Ok(user)
    }

    async fn upsert(&self, id: UserId, patch: UserPatch) -> Result<User, StoreError> {
        let filter = doc! { "_id": id.to_string() };
        // Read-then-write, not an atomic findAndModify: the service defines
        // no transactional guarantees, and the fresh-id-on-miss semantics
        // don't fit a single upsert filter.
        let merged = match self.users.find_one(filter.clone()).await? {
            Some(existing) => {
                let mut user = User::try_from(existing)?;
                patch.apply_to(&mut user);
                self.users
                    .replace_one(filter, UserDocument::from(&user))
                    .await?;
                user
            }
            None => {
                let created = patch.into_user(UserId::new());
                self.users.insert_one(UserDocument::from(&created)).await?;
                created
            }
        };
        Ok(merged)
    }
}
