//! Per-invocation dispatch: resolve, coerce, execute and package.
use std::sync::Arc;

use rmcp::model::{CallToolResult, Content};
use serde::Serialize;
use serde_json::json;
use tracing::warn;

use crate::{
    catalog::{load_catalog, DatasetSource, Presentation, PresentationStore},
    lib::{errors::ToolError, telemetry::InvocationSpan},
};

use super::{
    presentations,
    query::QueryEngine,
    registry::{ToolDescriptor, ToolRegistry},
    schema::JsonObject,
};

/// A decoded tool call handed over by the transport.
#[derive(Debug, Clone, PartialEq)]
pub struct InvocationRequest {
    pub tool_name: String,
    pub arguments: JsonObject,
}

impl InvocationRequest {
    pub fn new(tool_name: impl Into<String>, arguments: Option<JsonObject>) -> Self {
        Self {
            tool_name: tool_name.into(),
            arguments: arguments.unwrap_or_default(),
        }
    }
}

/// Ordered text items plus the error flag returned for every invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvocationResult {
    pub content: Vec<String>,
    pub is_error: bool,
}

impl InvocationResult {
    pub fn success(content: Vec<String>) -> Self {
        Self {
            content,
            is_error: false,
        }
    }

    pub fn failure(error: &ToolError) -> Self {
        Self {
            content: vec![error.to_failure_text()],
            is_error: true,
        }
    }

    /// Successful results also carry `{"count": n}` as structured content, so an
    /// empty match list still decodes as a tool result on the client side.
    pub fn into_call_tool_result(self) -> CallToolResult {
        let count = self.content.len();
        let content = self.content.into_iter().map(Content::text).collect();
        if self.is_error {
            CallToolResult::error(content)
        } else {
            let mut result = CallToolResult::success(content);
            result.structured_content = Some(json!({ "count": count }));
            result
        }
    }
}

/// Routes invocations through the registry to the query engine.
#[derive(Debug)]
pub struct Dispatcher {
    registry: ToolRegistry,
    engine: QueryEngine,
}

impl Dispatcher {
    pub fn new(registry: ToolRegistry, engine: QueryEngine) -> Self {
        Self { registry, engine }
    }

    /// Dispatcher over the standard presentation catalog.
    pub fn for_store(store: Arc<PresentationStore>) -> Result<Self, ToolError> {
        Ok(Self::new(
            presentations::build_registry()?,
            QueryEngine::new(store),
        ))
    }

    /// Load the dataset once and build a dispatcher over it.
    pub fn from_dataset(source: &DatasetSource) -> anyhow::Result<Self> {
        let catalog = load_catalog(source)?;
        Ok(Self::for_store(Arc::new(catalog.store))?)
    }

    pub fn list_tools(&self) -> Vec<ToolDescriptor> {
        self.registry.list_tools()
    }

    pub fn engine(&self) -> &QueryEngine {
        &self.engine
    }

    /// Run one invocation. Failures come back as `is_error` results, never as `Err`.
    pub fn dispatch(&self, request: InvocationRequest) -> InvocationResult {
        let span = InvocationSpan::start(&request.tool_name);
        match self.execute(&request) {
            Ok(presentations) => {
                span.finish("ok", presentations.len());
                InvocationResult::success(
                    presentations
                        .iter()
                        .map(|presentation| presentation.to_string())
                        .collect(),
                )
            }
            Err(err) => {
                warn!(
                    target: "presentations_mcp::dispatch",
                    invocation_id = %span.invocation_id(),
                    tool = %request.tool_name,
                    code = err.code(),
                    summary = err.descriptor().message,
                    reason = %err,
                    "Tool invocation failed"
                );
                span.finish(err.code(), 0);
                InvocationResult::failure(&err)
            }
        }
    }

    fn execute(&self, request: &InvocationRequest) -> Result<Vec<&Presentation>, ToolError> {
        let tool = self.registry.lookup(&request.tool_name)?;
        let arguments = tool.descriptor.input_schema.coerce(&request.arguments)?;
        (tool.handler)(&self.engine, &arguments)
    }
}
