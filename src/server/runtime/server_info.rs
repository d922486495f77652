use crate::server::config::ServerConfig;

/// Build the `ServerInfo.instructions` string shown to MCP clients.
pub fn build_instructions(config: &ServerConfig, presentations: usize) -> String {
    if let Some(custom) = &config.catalog.instructions {
        return custom.clone();
    }
    format!(
        "Conference presentation catalog with {presentations} records loaded from {origin}. \
         Use get_presentations to list everything, search_presentations_by_title for a \
         case-insensitive title fragment, and search_presentations_by_year for an exact year.",
        origin = config.catalog.dataset.describe(),
    )
}
