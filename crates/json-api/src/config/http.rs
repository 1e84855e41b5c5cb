//! HTTP Config

use clap::Args;

/// Browser-facing HTTP settings.
#[derive(Debug, Args)]
pub struct HttpConfig {
    /// Origins allowed to call the API from a browser (comma separated, `*` for any).
    #[arg(
        long,
        env = "CORS_ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "*"
    )]
    pub cors_allowed_origins: Vec<String>,
}
