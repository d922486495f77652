use std::{io, path::PathBuf};

use config::ConfigError as ConfigLoaderError;
use thiserror::Error;

/// Errors that can occur while loading or validating configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to build (read) the configuration file.
    #[error("Failed to read configuration file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Failed to deserialize TOML into a struct.
    #[error("Failed to parse configuration file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Required field is missing.
    #[error("Configuration file {path} is missing `{field}`")]
    MissingField { path: PathBuf, field: &'static str },
    /// Field failed validation.
    #[error("Configuration file {path} has invalid `{field}`: {message}")]
    InvalidField {
        path: PathBuf,
        field: &'static str,
        message: String,
    },
}

impl ConfigError {
    /// Helper to wrap `config::ConfigError` as a read failure.
    pub fn from_read_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::FileRead { path, source }
    }

    /// Helper to wrap `config::ConfigError` as a parse failure.
    pub fn from_parse_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::Parse { path, source }
    }
}

/// Failures while reading or validating the presentation dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Failed to read dataset {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to parse JSON dataset {origin}: {source}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to parse TOML dataset {origin}: {source}")]
    Toml {
        origin: String,
        #[source]
        source: toml::de::Error,
    },
    #[error("Dataset {path} has unsupported extension (expected .json or .toml)")]
    UnsupportedFormat { path: PathBuf },
    #[error("Presentation id `{id}` appears more than once")]
    DuplicateId { id: String },
    #[error("Presentation `{id}` has an empty title")]
    EmptyTitle { id: String },
    #[error("Presentation `{id}` lists no speakers")]
    MissingSpeakers { id: String },
    #[error("Presentation `{id}` has implausible year {year}")]
    ImplausibleYear { id: String, year: i64 },
}

/// Failures raised by the tool registry and dispatcher.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ToolError {
    #[error("Tool `{name}` is not registered")]
    UnknownTool { name: String },
    #[error("Invalid argument `{field}`: {reason}")]
    InvalidArguments { field: String, reason: String },
    #[error("Tool `{name}` is already registered")]
    DuplicateTool { name: String },
}

impl ToolError {
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArguments {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Stable reason code shared by logs and failure text.
    pub fn code(&self) -> &'static str {
        self.descriptor().code
    }

    pub fn descriptor(&self) -> &'static ToolErrorDescriptor {
        match self {
            ToolError::UnknownTool { .. } => &UNKNOWN_TOOL_ERROR,
            ToolError::InvalidArguments { .. } => &INVALID_ARGUMENTS_ERROR,
            ToolError::DuplicateTool { .. } => &DUPLICATE_TOOL_ERROR,
        }
    }

    /// Render the single text item returned to the caller for this failure.
    pub fn to_failure_text(&self) -> String {
        let descriptor = self.descriptor();
        format!("{}: {}. {}", descriptor.code, self, descriptor.remediation)
    }
}

/// Static metadata describing how a tool failure is reported.
#[derive(Debug, Clone)]
pub struct ToolErrorDescriptor {
    /// Error code.
    pub code: &'static str,
    /// User-facing message.
    pub message: &'static str,
    /// Recommended remediation.
    pub remediation: &'static str,
}

impl ToolErrorDescriptor {
    pub const fn new(code: &'static str, message: &'static str, remediation: &'static str) -> Self {
        Self {
            code,
            message,
            remediation,
        }
    }
}

pub const UNKNOWN_TOOL_ERROR: ToolErrorDescriptor = ToolErrorDescriptor::new(
    "unknown_tool",
    "The requested tool is not part of this server's catalog",
    "Call tools/list to see the available tool names.",
);

pub const INVALID_ARGUMENTS_ERROR: ToolErrorDescriptor = ToolErrorDescriptor::new(
    "invalid_arguments",
    "The supplied arguments do not match the tool's input schema",
    "Check the tool's input schema and retry with corrected arguments.",
);

pub const DUPLICATE_TOOL_ERROR: ToolErrorDescriptor = ToolErrorDescriptor::new(
    "duplicate_tool",
    "A tool with this name was registered twice",
    "Give every tool in the catalog a unique name.",
);
