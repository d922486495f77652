//! Telemetry initialization and per-invocation span helpers.

use std::time::Instant;

use anyhow::Result;
use serde::Serialize;
use tracing::{info, info_span, Span};
use tracing_subscriber::{fmt, EnvFilter};
use uuid::Uuid;

/// Initialize `tracing` and format developer logs on stderr.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}

/// Span helper recording the start and outcome of one tool invocation.
pub struct InvocationSpan {
    span: Span,
    started_at: Instant,
    invocation_id: Uuid,
}

impl InvocationSpan {
    pub fn start(tool_name: &str) -> Self {
        let invocation_id = Uuid::new_v4();
        let span = info_span!(
            target: "presentations_mcp::dispatch",
            "tool_invocation",
            %invocation_id,
            tool = tool_name
        );
        Self {
            span,
            started_at: Instant::now(),
            invocation_id,
        }
    }

    pub fn invocation_id(&self) -> Uuid {
        self.invocation_id
    }

    /// Close the span while recording status and result size.
    pub fn finish(self, status: &'static str, result_count: usize) {
        let elapsed_us = self.started_at.elapsed().as_micros();
        let _entered = self.span.enter();
        info!(
            target: "presentations_mcp::dispatch",
            invocation_id = %self.invocation_id,
            status = status,
            result_count = result_count,
            elapsed_us = elapsed_us,
            "Completed tool invocation"
        );
    }
}

/// Payload for logging MCP runtime state as structured telemetry.
#[derive(Debug, Serialize)]
pub struct RuntimeModeTelemetry<'a> {
    pub transport: &'a str,
    pub host: Option<&'a str>,
    pub port: Option<u16>,
    pub config_path: &'a str,
    pub presentations: usize,
    pub tools: usize,
    pub launch_args: &'a [String],
}

/// Emit runtime mode to `tracing`.
pub fn emit_runtime_mode(telemetry: &RuntimeModeTelemetry<'_>) {
    info!(
        target: "presentations_mcp::runtime",
        transport = telemetry.transport,
        host = telemetry.host.unwrap_or(""),
        port = telemetry.port.unwrap_or_default(),
        config_path = telemetry.config_path,
        presentations = telemetry.presentations,
        tools = telemetry.tools,
        launch_args = ?telemetry.launch_args,
        "Started MCP server"
    );
}
