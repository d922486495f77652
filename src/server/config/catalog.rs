use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{catalog::DatasetSource, lib::errors::ConfigError, lib::paths::resolve_relative_to};

pub const DEFAULT_SERVER_NAME: &str = "javaone-mcp-server";
const MAX_SERVER_NAME_LEN: usize = 64;

/// Dataset and advertisement settings.
#[derive(Debug, Clone)]
pub struct CatalogSection {
    pub dataset: DatasetSource,
    pub server_name: String,
    pub instructions: Option<String>,
}

impl Default for CatalogSection {
    fn default() -> Self {
        Self {
            dataset: DatasetSource::Embedded,
            server_name: DEFAULT_SERVER_NAME.to_string(),
            instructions: None,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct RawCatalogSection {
    pub dataset_path: Option<PathBuf>,
    pub server_name: Option<String>,
    pub instructions: Option<String>,
}

pub fn parse_catalog_section(
    raw: Option<RawCatalogSection>,
    path: &Path,
) -> Result<CatalogSection, ConfigError> {
    let catalog_raw = raw.unwrap_or_default();

    let dataset = match catalog_raw.dataset_path {
        Some(dataset_path) if dataset_path.as_os_str().is_empty() => {
            return Err(ConfigError::InvalidField {
                path: path.to_path_buf(),
                field: "catalog.dataset_path",
                message: "Remove the key to use the built-in dataset, or provide a file path"
                    .into(),
            });
        }
        Some(dataset_path) => DatasetSource::File(resolve_relative_to(path, &dataset_path)),
        None => DatasetSource::Embedded,
    };

    let server_name = catalog_raw
        .server_name
        .map(|name| name.trim().to_string())
        .unwrap_or_else(|| DEFAULT_SERVER_NAME.to_string());
    if server_name.is_empty() || server_name.chars().count() > MAX_SERVER_NAME_LEN {
        return Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field: "catalog.server_name",
            message: format!("Provide a 1-{MAX_SERVER_NAME_LEN} character name"),
        });
    }

    let instructions = catalog_raw
        .instructions
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty());

    Ok(CatalogSection {
        dataset,
        server_name,
        instructions,
    })
}
