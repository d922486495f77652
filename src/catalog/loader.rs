//! Dataset document parsing for the built-in catalog and external files.
use std::path::{Path, PathBuf};

use schemars::{JsonSchema, Schema};
use serde::Deserialize;
use tracing::{error, info};

use crate::lib::{
    errors::DatasetError,
    fs::{read_source, sha256_hex},
};

use super::{
    presentation::{Presentation, PresentationId},
    store::PresentationStore,
};

const EMBEDDED_DATASET: &str = include_str!("../../data/presentations.json");
const EMBEDDED_ORIGIN: &str = "<embedded>";

/// Where the dataset is read from at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    Embedded,
    File(PathBuf),
}

impl DatasetSource {
    pub fn describe(&self) -> String {
        match self {
            DatasetSource::Embedded => EMBEDDED_ORIGIN.to_string(),
            DatasetSource::File(path) => path.display().to_string(),
        }
    }
}

/// Store plus provenance of the document it was built from.
#[derive(Debug, Clone)]
pub struct LoadedCatalog {
    pub store: PresentationStore,
    pub origin: String,
    pub sha256: String,
}

/// Top-level dataset document.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct DatasetDocument {
    #[serde(default)]
    pub presentations: Vec<RawPresentation>,
}

/// One presentation as written in a dataset document.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct RawPresentation {
    pub id: RawId,
    pub title: String,
    pub speakers: SpeakerList,
    pub year: i64,
    #[serde(default, rename = "abstract")]
    pub summary: String,
    #[serde(default)]
    pub track: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum RawId {
    Integer(i64),
    Text(String),
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum SpeakerList {
    One(String),
    Many(Vec<String>),
}

#[derive(Debug, Clone, Copy)]
enum DocumentFormat {
    Json,
    Toml,
}

/// Load and validate the dataset, logging its size and fingerprint.
pub fn load_catalog(source: &DatasetSource) -> Result<LoadedCatalog, DatasetError> {
    let origin = source.describe();
    let result = match source {
        DatasetSource::Embedded => parse_store(EMBEDDED_DATASET, DocumentFormat::Json, &origin)
            .map(|store| (store, sha256_hex(EMBEDDED_DATASET.as_bytes()))),
        DatasetSource::File(path) => load_file(path, &origin),
    };

    match result {
        Ok((store, sha256)) => {
            info!(
                target: "presentations_mcp::catalog",
                origin = %origin,
                presentations = store.len(),
                sha256 = %sha256,
                "Presentation dataset loaded"
            );
            Ok(LoadedCatalog {
                store,
                origin,
                sha256,
            })
        }
        Err(err) => {
            error!(
                target: "presentations_mcp::catalog",
                origin = %origin,
                reason = %err,
                "Failed to load presentation dataset"
            );
            Err(err)
        }
    }
}

/// Parse a JSON dataset document held in memory.
pub fn parse_json(text: &str) -> Result<PresentationStore, DatasetError> {
    parse_store(text, DocumentFormat::Json, "<inline>")
}

/// Parse a TOML dataset document held in memory.
pub fn parse_toml(text: &str) -> Result<PresentationStore, DatasetError> {
    parse_store(text, DocumentFormat::Toml, "<inline>")
}

/// JSON Schema describing the dataset document.
pub fn dataset_schema() -> Schema {
    schemars::schema_for!(DatasetDocument)
}

fn load_file(path: &Path, origin: &str) -> Result<(PresentationStore, String), DatasetError> {
    let format = detect_format(path)?;
    let document = read_source(path)?;
    let store = parse_store(&document.text, format, origin)?;
    Ok((store, document.sha256))
}

fn detect_format(path: &Path) -> Result<DocumentFormat, DatasetError> {
    match path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        Some("json") => Ok(DocumentFormat::Json),
        Some("toml") => Ok(DocumentFormat::Toml),
        _ => Err(DatasetError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}

fn parse_store(
    text: &str,
    format: DocumentFormat,
    origin: &str,
) -> Result<PresentationStore, DatasetError> {
    let document: DatasetDocument = match format {
        DocumentFormat::Json => {
            serde_json::from_str(text).map_err(|source| DatasetError::Json {
                origin: origin.to_string(),
                source,
            })?
        }
        DocumentFormat::Toml => toml::from_str(text).map_err(|source| DatasetError::Toml {
            origin: origin.to_string(),
            source,
        })?,
    };

    let presentations = document
        .presentations
        .into_iter()
        .map(RawPresentation::into_presentation)
        .collect::<Result<Vec<_>, _>>()?;
    PresentationStore::new(presentations)
}

impl RawPresentation {
    fn into_presentation(self) -> Result<Presentation, DatasetError> {
        let id = match self.id {
            RawId::Integer(value) => PresentationId::from(value),
            RawId::Text(value) => PresentationId::new(value.trim()),
        };
        let year = i32::try_from(self.year).map_err(|_| DatasetError::ImplausibleYear {
            id: id.to_string(),
            year: self.year,
        })?;
        let speakers = match self.speakers {
            SpeakerList::One(name) => vec![name],
            SpeakerList::Many(names) => names,
        }
        .into_iter()
        .map(|name| name.trim().to_string())
        .collect();

        Ok(Presentation {
            id,
            title: self.title.trim().to_string(),
            speakers,
            year,
            summary: self.summary.trim().to_string(),
            track: non_blank(self.track),
            url: non_blank(self.url),
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
