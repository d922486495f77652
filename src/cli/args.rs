//! CLI argument definitions and `LaunchProfile` construction.
use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use crate::tools::JsonObject;

use super::{build_launch_args, resolve_config_path, LaunchProfile, TransportMode};

/// Parsed command intent from CLI.
#[derive(Debug, Clone)]
pub enum ParsedCommand {
    RunServer(LaunchProfile),
    Cli(LaunchProfile, CliCommand),
}

/// Top-level optional CLI commands.
#[derive(Debug, Clone, Subcommand)]
pub enum CliCommand {
    /// Print the advertised tool catalog as JSON.
    Tools,
    /// Invoke one tool in-process and print the invocation result as JSON.
    Call(CallArgs),
    /// Print the JSON Schema of the dataset document.
    DatasetSchema,
}

/// Arguments for `call`.
#[derive(Debug, Clone, Args)]
#[command(
    about = "Invoke one tool without starting a server",
    after_help = "Example: presentations-mcp call search_presentations_by_year --args '{\"year\": 2023}'"
)]
pub struct CallArgs {
    /// Tool name, e.g. `get_presentations`.
    pub tool_name: String,
    /// Tool arguments as a JSON object.
    #[arg(long = "args", value_parser = parse_json_object)]
    pub arguments: Option<JsonObject>,
}

/// Command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    author,
    version,
    about = "Conference presentation catalog MCP server",
    long_about = None
)]
pub struct LaunchProfileArgs {
    /// Select stdio (default) or tcp.
    #[arg(long, value_enum, default_value_t = TransportMode::Stdio)]
    pub transport: TransportMode,
    /// Path to config.toml (overrides PRESENTATIONS_MCP_CONFIG).
    #[arg(long = "config")]
    pub config_override: Option<PathBuf>,
    /// Optional CLI command mode.
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

impl LaunchProfileArgs {
    /// Build a `LaunchProfile` from CLI args and environment variables.
    pub fn build(&self) -> Result<LaunchProfile> {
        let (config_path, config_source) = resolve_config_path(self.config_override.clone())?;
        let launch_args = build_launch_args(self.transport, &config_path);

        Ok(LaunchProfile {
            config_path,
            config_source,
            transport: self.transport,
            launch_args,
        })
    }

    /// Parse CLI args into either server launch mode or utility command mode.
    pub fn into_command(self) -> Result<ParsedCommand> {
        let profile = self.build()?;
        Ok(match self.command {
            Some(command) => ParsedCommand::Cli(profile, command),
            None => ParsedCommand::RunServer(profile),
        })
    }
}

fn parse_json_object(raw: &str) -> Result<JsonObject, String> {
    match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(serde_json::Value::Object(map)) => Ok(map),
        Ok(_) => Err("arguments must be a JSON object".into()),
        Err(err) => Err(format!("arguments are not valid JSON: {err}")),
    }
}
