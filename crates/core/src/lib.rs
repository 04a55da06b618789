//! `rollcall-core` — domain types for the user roster.
//!
//! This crate contains **pure domain** types (no HTTP, no storage concerns).

pub mod error;
pub mod id;
pub mod user;

pub use error::{DomainError, DomainResult};
pub use id::UserId;
pub use user::{User, UserPatch};
