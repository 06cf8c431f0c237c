//! Service configuration from environment variables.
//!
//! Read once at startup; `.env` files are honored via dotenvy in `main`.

use crate::error::AppError;

const DEFAULT_DATABASE_URL: &str = "postgres://localhost/supplier";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub database_url: String,
    pub bind_addr: String,
    pub max_connections: u32,
}

impl ServiceConfig {
    /// Read `DATABASE_URL`, `BIND_ADDR`, and `DATABASE_MAX_CONNECTIONS`,
    /// falling back to local-development defaults.
    pub fn from_env() -> Result<Self, AppError> {
        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.into());
        let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.into());
        let max_connections = match std::env::var("DATABASE_MAX_CONNECTIONS") {
            Ok(v) => v.parse().map_err(|_| {
                AppError::Config(format!(
                    "DATABASE_MAX_CONNECTIONS must be an integer, got '{}'",
                    v
                ))
            })?,
            Err(_) => DEFAULT_MAX_CONNECTIONS,
        };
        Ok(ServiceConfig {
            database_url,
            bind_addr,
            max_connections,
        })
    }
}
