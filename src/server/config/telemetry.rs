use tracing::{debug, info};

use super::{ConfigSource, ServerConfig, CONFIG_ENV_KEY, DEFAULT_CONFIG_PATH};

pub fn log_config_source(path: &std::path::Path, source: ConfigSource) {
    match source {
        ConfigSource::Cli => info!(
            target: "presentations_mcp::config",
            path = %path.display(),
            "Loading configuration named by --config"
        ),
        ConfigSource::Env => info!(
            target: "presentations_mcp::config",
            path = %path.display(),
            "Loading configuration using PRESENTATIONS_MCP_CONFIG environment variable"
        ),
        ConfigSource::Default => debug!(
            target: "presentations_mcp::config",
            path = %path.display(),
            env = CONFIG_ENV_KEY,
            default = DEFAULT_CONFIG_PATH,
            "PRESENTATIONS_MCP_CONFIG not set; using default config.toml"
        ),
    }
}

pub fn log_loaded(config: &ServerConfig) {
    info!(
        target: "presentations_mcp::config",
        path = %config.source_path.display(),
        host = %config.server.host,
        port = config.server.port,
        dataset = %config.catalog.dataset.describe(),
        server_name = %config.catalog.server_name,
        "Configuration loaded"
    );
}
