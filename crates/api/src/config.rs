use widget_feed_db::{StorageBackend, UnsupportedBackend};

/// Error raised while reading [`ServerConfig`] from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a valid {expected} (got '{value}')")]
    InvalidNumber {
        var: &'static str,
        expected: &'static str,
        value: String,
    },

    #[error("STORAGE_BACKEND: {0}")]
    StorageBackend(#[from] UnsupportedBackend),
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3001`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Repository backend (default: `memory`).
    pub storage_backend: StorageBackend,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3001`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `STORAGE_BACKEND`      | `memory`                   |
    ///
    /// Panics on malformed values; misconfiguration should stop start-up.
    pub fn from_env() -> Self {
        Self::try_from_env().unwrap_or_else(|e| panic!("Invalid configuration: {e}"))
    }

    pub fn try_from_env() -> Result<Self, ConfigError> {
        Self::from_source(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup.
    pub fn from_source<F>(get: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = get("HOST").unwrap_or_else(|| "0.0.0.0".into());

        let port = parse_number(&get, "PORT", "3001", "u16")?;

        let cors_origins: Vec<String> = get("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs = parse_number(&get, "REQUEST_TIMEOUT_SECS", "30", "u64")?;

        let storage_backend = get("STORAGE_BACKEND")
            .unwrap_or_else(|| "memory".into())
            .parse::<StorageBackend>()?;

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            storage_backend,
        })
    }
}

fn parse_number<F, T>(
    get: &F,
    var: &'static str,
    default: &str,
    expected: &'static str,
) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    let value = get(var).unwrap_or_else(|| default.to_string());
    let parsed = value.trim().parse::<T>();
    parsed.map_err(|_| ConfigError::InvalidNumber {
        var,
        expected,
        value,
    })
}
