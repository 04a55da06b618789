//! `rollcall-store` — persistence adapters for the `User` collection.
//!
//! One trait, two backends: an in-memory store for dev and tests, and a
//! MongoDB-backed store behind the `mongo` feature.

pub mod error;
pub mod memory;
#[cfg(feature = "mongo")]
pub mod mongo;
mod user_store;

pub use error::StoreError;
pub use memory::InMemoryUserStore;
#[cfg(feature = "mongo")]
pub use mongo::MongoUserStore;
pub use user_store::UserStore;
