//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables to ensure
//! clean separation between code and config.

use anyhow::Result;
use std::env;

/// Persistence backend for the jobs store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistenceProvider {
    Postgres,
    Mock,
}

impl std::str::FromStr for PersistenceProvider {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(PersistenceProvider::Postgres),
            "mock" => Ok(PersistenceProvider::Mock),
            other => Err(anyhow::anyhow!("Unknown PERSISTENCE_PROVIDER: {}", other)),
        }
    }
}

#[derive(Clone)]
pub struct Config {
    /// Database connection URL (PostgreSQL); unused by the mock provider
    pub database_url: Option<String>,
    pub database_max_connections: u32,
    pub persistence_provider: PersistenceProvider,

    /// HS256 secret for session tokens
    pub jwt_secret: String,

    /// Comma-separated list of allowed CORS origins; permissive when unset
    pub cors_allowed_origins: Option<String>,

    /// Runtime configuration
    pub rust_log: String,
    pub port: u16,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &self.database_url.as_ref().map(|_| "[REDACTED]"))
            .field("database_max_connections", &self.database_max_connections)
            .field("persistence_provider", &self.persistence_provider)
            .field("jwt_secret", &"[REDACTED]")
            .field("cors_allowed_origins", &self.cors_allowed_origins)
            .field("rust_log", &self.rust_log)
            .field("port", &self.port)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        let persistence_provider = env::var("PERSISTENCE_PROVIDER")
            .unwrap_or_else(|_| "postgres".to_string())
            .parse()?;

        let database_url = env::var("DATABASE_URL").ok();
        if persistence_provider == PersistenceProvider::Postgres && database_url.is_none() {
            return Err(anyhow::anyhow!(
                "DATABASE_URL is required for the postgres persistence provider"
            ));
        }

        let config = Self {
            database_url,
            database_max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
            persistence_provider,

            jwt_secret: env::var("JWT_SECRET")
                .map_err(|_| anyhow::anyhow!("JWT_SECRET is required"))?,

            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .ok()
                .filter(|v| !v.trim().is_empty()),

            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "jobboard=debug".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .unwrap_or(8000),
        };

        Ok(config)
    }
}
