use std::{process::ExitCode, sync::Arc};

use anyhow::{Context, Error};
use rmcp::ServiceExt;
use tokio::net::TcpListener;

use crate::{
    cli::{LaunchProfile, TransportMode},
    server::{
        config::ServerConfig,
        runtime::{build_instructions, PresentationServer},
    },
    tools::Dispatcher,
};

/// Exit code for unreadable or invalid configuration.
pub const CONFIG_EXIT_CODE: u8 = 2;
/// Exit code for an invalid dataset or tool catalog.
pub const CATALOG_EXIT_CODE: u8 = 3;

/// Bundles a runtime error message with an exit code.
#[derive(Debug)]
pub struct RuntimeExit {
    message: String,
    exit_code: ExitCode,
}

impl RuntimeExit {
    pub fn from_error(err: impl Into<Error>) -> Self {
        Self::with_code(err, ExitCode::FAILURE)
    }

    pub fn config(err: impl Into<Error>) -> Self {
        Self::with_code(err, ExitCode::from(CONFIG_EXIT_CODE))
    }

    pub fn catalog(err: impl Into<Error>) -> Self {
        Self::with_code(err, ExitCode::from(CATALOG_EXIT_CODE))
    }

    fn with_code(err: impl Into<Error>, exit_code: ExitCode) -> Self {
        let err = err.into();
        Self {
            message: format!("{err:?}"),
            exit_code,
        }
    }

    pub fn report(self) -> ExitCode {
        eprintln!("{}", self.message);
        self.exit_code
    }

    pub fn exit_code(&self) -> ExitCode {
        self.exit_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Load the catalog, then serve it over stdio or TCP based on the launch profile.
pub async fn run_server(profile: LaunchProfile, config: ServerConfig) -> Result<(), RuntimeExit> {
    let dispatcher =
        Dispatcher::from_dataset(&config.catalog.dataset).map_err(RuntimeExit::catalog)?;
    let presentations = dispatcher.engine().store().len();
    let instructions = build_instructions(&config, presentations);
    let server = PresentationServer::new(
        Arc::new(dispatcher),
        config.catalog.server_name.clone(),
        instructions,
    );

    crate::lib::telemetry::emit_runtime_mode(&crate::lib::telemetry::RuntimeModeTelemetry {
        transport: profile.transport.as_str(),
        host: Some(config.server.host.as_str()),
        port: Some(config.server.port),
        config_path: config.source_path.to_string_lossy().as_ref(),
        presentations,
        tools: server.dispatcher().list_tools().len(),
        launch_args: &profile.launch_args,
    });

    match profile.transport {
        TransportMode::Stdio => run_stdio(server).await,
        TransportMode::Tcp => run_tcp(server, &config).await,
    }
}

async fn run_stdio(server: PresentationServer) -> Result<(), RuntimeExit> {
    let running = server
        .serve(rmcp::transport::stdio())
        .await
        .map_err(RuntimeExit::from_error)?;
    running.waiting().await.map_err(RuntimeExit::from_error)?;
    Ok(())
}

async fn run_tcp(server: PresentationServer, config: &ServerConfig) -> Result<(), RuntimeExit> {
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind TCP port {addr}"))
        .map_err(RuntimeExit::from_error)?;
    tracing::info!(
        target: "presentations_mcp::runtime",
        transport = "tcp",
        bind_addr = %addr,
        "Started listening in TCP mode"
    );

    loop {
        let (stream, peer) = listener
            .accept()
            .await
            .with_context(|| format!("failed to accept TCP connection ({addr})"))
            .map_err(RuntimeExit::from_error)?;
        tracing::info!(
            target: "presentations_mcp::runtime",
            peer = %peer,
            "Accepted connection from MCP client"
        );
        let session = server.clone();
        tokio::spawn(async move {
            match session.serve(stream).await {
                Ok(running) => {
                    if let Err(err) = running.waiting().await {
                        tracing::warn!(
                            target: "presentations_mcp::runtime",
                            peer = %peer,
                            error = %err,
                            "MCP session ended with an error"
                        );
                    }
                }
                Err(err) => tracing::warn!(
                    target: "presentations_mcp::runtime",
                    peer = %peer,
                    error = %err,
                    "MCP session failed to initialize"
                ),
            }
            tracing::info!(
                target: "presentations_mcp::runtime",
                peer = %peer,
                "Closed connection from MCP client"
            );
        });
    }
}
