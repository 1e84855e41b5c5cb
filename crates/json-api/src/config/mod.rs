//! Server configuration module

use std::net::SocketAddr;

use clap::Parser;

use crate::config::{
    db::DatabaseConfig,
    http::HttpConfig,
    observability::{LoggingConfig, ObservabilityConfig},
    server::ServerRuntimeConfig,
    uploads::UploadsConfig,
};

pub(crate) mod db;
pub(crate) mod http;
pub(crate) mod observability;
pub(crate) mod server;
pub(crate) mod uploads;

/// JSON API server configuration
#[derive(Debug, Parser)]
#[command(name = "groomerlink-json", about = "GroomerLink JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Observability (traces/metrics) settings.
    #[command(flatten)]
    pub observability: ObservabilityConfig,

    /// Application database settings.
    #[command(flatten)]
    pub database: DatabaseConfig,

    /// Photo upload settings.
    #[command(flatten)]
    pub uploads: UploadsConfig,

    /// Browser-facing HTTP settings.
    #[command(flatten)]
    pub http: HttpConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        self.server.socket_addr()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn defaults_apply_when_only_database_url_is_given() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "groomerlink-json",
            "--database-url",
            "postgres://localhost/groomerlink",
        ])?;

        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8698");
        assert_eq!(config.uploads.upload_max_bytes, 5 * 1024 * 1024);
        assert!(!config.database.run_migrations, "migrations are opt-in");

        Ok(())
    }

    #[test]
    fn host_must_be_an_ip_address() {
        let result = ServerConfig::try_parse_from([
            "groomerlink-json",
            "--database-url",
            "postgres://localhost/groomerlink",
            "--host",
            "not an address",
        ]);

        assert!(result.is_err(), "hostnames are not accepted for binding");
    }

    #[test]
    fn cors_origins_are_comma_separated() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "groomerlink-json",
            "--database-url",
            "postgres://localhost/groomerlink",
            "--cors-allowed-origins",
            "https://a.example,https://b.example",
        ])?;

        assert_eq!(
            config.http.cors_allowed_origins,
            vec!["https://a.example".to_owned(), "https://b.example".to_owned()]
        );

        Ok(())
    }
}
