use std::sync::Arc;

use rmcp::{
    model::{
        CallToolRequestParam, CallToolResult, ErrorData, Implementation, ListToolsResult,
        PaginatedRequestParam, ServerCapabilities, ServerInfo, SetLevelRequestParam,
    },
    service::{RequestContext, RoleServer},
    ServerHandler,
};

use crate::tools::{Dispatcher, InvocationRequest, ToolDescriptor};

/// MCP handler exposing the presentation catalog.
#[derive(Clone)]
pub struct PresentationServer {
    dispatcher: Arc<Dispatcher>,
    server_name: Arc<String>,
    instructions: Arc<String>,
}

impl PresentationServer {
    pub fn new(
        dispatcher: Arc<Dispatcher>,
        server_name: impl Into<String>,
        instructions: impl Into<String>,
    ) -> Self {
        Self {
            dispatcher,
            server_name: Arc::new(server_name.into()),
            instructions: Arc::new(instructions.into()),
        }
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }
}

impl ServerHandler for PresentationServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder()
                .enable_logging()
                .enable_tools()
                .build(),
            server_info: Implementation {
                name: (*self.server_name).clone(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Implementation::from_build_env()
            },
            instructions: Some((*self.instructions).clone()),
            ..ServerInfo::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, ErrorData> {
        let tools = self
            .dispatcher
            .list_tools()
            .iter()
            .map(ToolDescriptor::to_mcp_tool)
            .collect();
        Ok(ListToolsResult::with_all_items(tools))
    }

    /// Accept client log-level requests; process logging stays governed by `RUST_LOG`.
    async fn set_level(
        &self,
        request: SetLevelRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<(), ErrorData> {
        tracing::debug!(
            target: "presentations_mcp::runtime",
            level = ?request.level,
            "Client requested log level"
        );
        Ok(())
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, ErrorData> {
        let invocation = InvocationRequest::new(request.name, request.arguments);
        Ok(self.dispatcher.dispatch(invocation).into_call_tool_result())
    }
}
