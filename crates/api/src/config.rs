//! Process configuration, read once at startup.

/// Runtime configuration for the API binary.
///
/// Everything persistence- and network-related is an environment concern;
/// nothing in here is consulted after startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// MySQL connection string (`DATABASE_URL`).
    pub database_url: String,
    /// Listen address for the HTTP server (`BIND_ADDR`).
    pub bind_addr: String,
    /// Connection pool size cap (`DB_MAX_CONNECTIONS`).
    pub db_max_connections: u32,
}

impl Config {
    /// Load configuration from the environment, warning on dev fallbacks.
    pub fn from_env() -> Self {
        let database_url = std::env::var("DATABASE_URL").unwrap_or_else(|_| {
            tracing::warn!("DATABASE_URL not set; using local dev default");
            "mysql://root@localhost:3306/catalogd".to_string()
        });

        let bind_addr =
            std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        let db_max_connections = std::env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        Self {
            database_url,
            bind_addr,
            db_max_connections,
        }
    }
}
