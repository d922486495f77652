//! MCP server startup and request handling.
mod server_info;
mod service;
mod startup;

pub use server_info::build_instructions;
pub use service::PresentationServer;
pub use startup::{run_server, RuntimeExit, CATALOG_EXIT_CODE, CONFIG_EXIT_CODE};
