//! Layered configuration: defaults, optional `jobly.toml`, then `JOBLY_*` env vars.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

const DEFAULT_DATABASE_URL: &str = "~/.jobly/jobly.db";
const DEFAULT_SECRET_KEY: &str = "secret-dev";
const DEFAULT_LOG_FORMAT: &str = "pretty";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// `sqlite:` URL or a plain file path (`~` is expanded)
    pub database_url: String,
    /// Shared secret for signing tokens
    pub secret_key: String,
    /// Token lifetime; unset means tokens carry no `exp`
    #[serde(default)]
    pub token_ttl_secs: Option<u64>,
    /// `pretty` or `json`
    pub log_format: String,
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_builder(
            Self::defaults()?
                .add_source(File::with_name("jobly").required(false))
                .add_source(Environment::with_prefix("JOBLY").try_parsing(true)),
        )
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("database_url", DEFAULT_DATABASE_URL)?
            .set_default("secret_key", DEFAULT_SECRET_KEY)?
            .set_default("log_format", DEFAULT_LOG_FORMAT)
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        builder.build()?.try_deserialize()
    }

    /// Database URL ready for `create_pool`
    pub fn resolved_database_url(&self) -> String {
        if self.database_url.starts_with("sqlite:") {
            return self.database_url.clone();
        }
        format!("sqlite://{}", shellexpand::tilde(&self.database_url))
    }

    /// On-disk database file, if any
    pub fn database_file(&self) -> Option<String> {
        if self.database_url.starts_with("sqlite:") {
            return None;
        }
        Some(shellexpand::tilde(&self.database_url).into_owned())
    }
}
