use thiserror::Error;

/// Persistence-layer error.
///
/// Handlers collapse every variant to the same HTTP 500; the variants exist
/// for logging and for tests that distinguish failure sources.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing driver reported a failure (connection, query, codec).
    #[error("store backend error: {0}")]
    Backend(String),

    /// The in-memory store's lock was poisoned by a panicking writer.
    #[error("store lock poisoned")]
    Poisoned,
}

#[cfg(feature = "mongo")]
impl From<mongodb::error::Error> for StoreError {
    fn from(err: mongodb::error::Error) -> Self {
        Self::Backend(err.to_string())
    }
}
