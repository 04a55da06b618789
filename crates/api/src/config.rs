//! Service configuration, built once in `main` and passed by reference.

/// Default bind address (the original service listened on port 3000).
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Default MongoDB connection string (local dev).
pub const DEFAULT_MONGODB_URL: &str = "mongodb://localhost:27017/learn";

/// Default database name.
pub const DEFAULT_MONGODB_DB: &str = "learn";

/// Startup configuration for the service.
///
/// No process-wide singletons: construct this in `main` and hand it to
/// `build_services`.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP listener binds to.
    pub bind_addr: String,
    /// MongoDB connection string (used by the `mongo` build).
    pub mongodb_url: String,
    /// MongoDB database name (used by the `mongo` build).
    pub mongodb_db: String,
}

impl Config {
    /// Read configuration from the environment, falling back to dev defaults
    /// with a warning for anything unset.
    pub fn from_env() -> Self {
        Self {
            bind_addr: env_or_default("ROLLCALL_ADDR", DEFAULT_BIND_ADDR),
            mongodb_url: env_or_default("MONGODB_URL", DEFAULT_MONGODB_URL),
            mongodb_db: env_or_default("MONGODB_DB", DEFAULT_MONGODB_DB),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            mongodb_url: DEFAULT_MONGODB_URL.to_string(),
            mongodb_db: DEFAULT_MONGODB_DB.to_string(),
        }
    }
}

fn env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| {
        tracing::warn!("{key} not set; using dev default {default}");
        default.to_string()
    })
}
