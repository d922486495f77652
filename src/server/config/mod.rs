//! Load and validate server configuration.
use std::path::PathBuf;

use serde::Deserialize;
use tracing::{error, info};

use crate::lib::errors::ConfigError;

pub mod catalog;
pub mod server;
pub mod telemetry;

pub use catalog::{parse_catalog_section, CatalogSection, RawCatalogSection, DEFAULT_SERVER_NAME};
pub use server::{parse_server_section, RawServerSection, ServerSection, DEFAULT_HOST, DEFAULT_PORT};

pub const CONFIG_ENV_KEY: &str = "PRESENTATIONS_MCP_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Where the configuration path came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    Cli,
    Env,
    Default,
}

impl ConfigSource {
    /// Explicitly named files must exist; the implicit default may be absent.
    pub const fn requires_file(&self) -> bool {
        !matches!(self, ConfigSource::Default)
    }
}

/// Top-level configuration container.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub server: ServerSection,
    pub catalog: CatalogSection,
    pub source_path: PathBuf,
}

#[derive(Debug, Deserialize)]
struct RawServerConfig {
    server: Option<RawServerSection>,
    catalog: Option<RawCatalogSection>,
}

impl ServerConfig {
    /// Defaults used when no configuration file is present.
    pub fn defaults(source_path: PathBuf) -> Self {
        Self {
            server: ServerSection::default(),
            catalog: CatalogSection::default(),
            source_path,
        }
    }

    /// Load the file chosen at launch, tolerating a missing implicit default.
    pub fn load_for_launch(path: PathBuf, source: ConfigSource) -> Result<Self, ConfigError> {
        telemetry::log_config_source(&path, source);
        if source.requires_file() {
            Self::load_from_path(path)
        } else {
            Self::load(path, false)
        }
    }

    /// Load configuration from a specific path that must exist.
    pub fn load_from_path(path: PathBuf) -> Result<Self, ConfigError> {
        Self::load(path, true)
    }

    fn load(path: PathBuf, required: bool) -> Result<Self, ConfigError> {
        info!(
            target: "presentations_mcp::config",
            path = %path.display(),
            required,
            "Starting configuration load"
        );

        let builder = config::Config::builder().add_source(
            config::File::from(path.clone())
                .format(config::FileFormat::Toml)
                .required(required),
        );
        let document = builder.build().map_err(|err| {
            let error = ConfigError::from_read_error(path.clone(), err);
            error!(
                target: "presentations_mcp::config",
                path = %path.display(),
                reason = %error,
                "Failed to read configuration file"
            );
            error
        })?;

        let raw: RawServerConfig = document.try_deserialize().map_err(|err| {
            let error = ConfigError::from_parse_error(path.clone(), err);
            error!(
                target: "presentations_mcp::config",
                path = %path.display(),
                reason = %error,
                "Failed to parse configuration file"
            );
            error
        })?;

        let config = Self::from_raw(raw, path.clone()).map_err(|err| {
            error!(
                target: "presentations_mcp::config",
                path = %path.display(),
                reason = %err,
                "Failed to validate configuration file"
            );
            err
        })?;

        telemetry::log_loaded(&config);
        Ok(config)
    }

    fn from_raw(raw: RawServerConfig, path: PathBuf) -> Result<Self, ConfigError> {
        let server = parse_server_section(raw.server, &path)?;
        let catalog = parse_catalog_section(raw.catalog, &path)?;

        Ok(Self {
            server,
            catalog,
            source_path: path,
        })
    }
}
