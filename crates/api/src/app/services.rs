use std::sync::Arc;

use rollcall_store::{InMemoryUserStore, UserStore};

use crate::config::Config;

/// Shared application services, injected into handlers via `Extension`.
pub struct AppServices {
    users: Arc<dyn UserStore>,
}

impl AppServices {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    /// Services backed by the in-memory store (dev and tests).
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryUserStore::new()))
    }

    pub fn users(&self) -> &dyn UserStore {
        &*self.users
    }
}

/// Build the production services for the configured backend.
#[cfg(feature = "mongo")]
pub async fn build_services(config: &Config) -> anyhow::Result<AppServices> {
    let store =
        rollcall_store::MongoUserStore::connect(&config.mongodb_url, &config.mongodb_db).await?;
    Ok(AppServices::new(Arc::new(store)))
}

/// Build the production services for the configured backend.
#[cfg(not(feature = "mongo"))]
pub async fn build_services(_config: &Config) -> anyhow::Result<AppServices> {
    tracing::info!("mongo feature disabled; using in-memory user store");
    Ok(AppServices::in_memory())
}
