//! CLI entrypoint module structure.
use anyhow::Context;

use crate::{
    catalog::dataset_schema,
    server::{config::ServerConfig, runtime::RuntimeExit},
    tools::{build_registry, Dispatcher, InvocationRequest, ToolDescriptor},
};

pub mod args;
pub mod profile;

pub use args::{CallArgs, CliCommand, LaunchProfileArgs, ParsedCommand};
pub use profile::{build_launch_args, resolve_config_path, LaunchProfile, TransportMode};

/// Execute CLI command mode and return a user-facing result payload.
///
/// Dataset and registry failures carry the catalog exit code, as they do at server startup.
pub fn execute_cli_command(
    command: CliCommand,
    config: &ServerConfig,
) -> Result<String, RuntimeExit> {
    match command {
        CliCommand::Tools => render_tool_catalog(),
        CliCommand::Call(args) => {
            let dispatcher =
                Dispatcher::from_dataset(&config.catalog.dataset).map_err(RuntimeExit::catalog)?;
            let result =
                dispatcher.dispatch(InvocationRequest::new(args.tool_name, args.arguments));
            to_pretty_json(&result)
        }
        CliCommand::DatasetSchema => to_pretty_json(&dataset_schema()),
    }
}

/// Tool catalog as advertised through `tools/list`.
fn render_tool_catalog() -> Result<String, RuntimeExit> {
    let registry = build_registry()
        .context("failed to build tool registry")
        .map_err(RuntimeExit::catalog)?;
    let tools: Vec<_> = registry
        .list_tools()
        .iter()
        .map(ToolDescriptor::to_mcp_tool)
        .collect();
    to_pretty_json(&tools)
}

fn to_pretty_json(value: &impl serde::Serialize) -> Result<String, RuntimeExit> {
    serde_json::to_string_pretty(value)
        .context("failed to render command output")
        .map_err(RuntimeExit::from_error)
}
