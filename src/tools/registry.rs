//! Name-to-handler registry for the tool catalog.
use std::{collections::HashMap, fmt};

use rmcp::model::Tool;

use crate::{catalog::Presentation, lib::errors::ToolError};

use super::{
    query::QueryEngine,
    schema::{InputSchema, ToolArguments},
};

/// Function bound to a tool at registration time.
pub type ToolHandler =
    for<'a> fn(&'a QueryEngine, &ToolArguments) -> Result<Vec<&'a Presentation>, ToolError>;

/// Name, description and input schema advertised for a tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: InputSchema,
}

impl ToolDescriptor {
    pub fn new(name: &'static str, description: &'static str, input_schema: InputSchema) -> Self {
        Self {
            name,
            description,
            input_schema,
        }
    }

    /// Convert to the MCP `Tool` shape returned by `tools/list`.
    pub fn to_mcp_tool(&self) -> Tool {
        Tool::new(
            self.name,
            self.description,
            self.input_schema.to_json_object(),
        )
    }
}

/// A descriptor together with its bound handler.
#[derive(Clone)]
pub struct RegisteredTool {
    pub descriptor: ToolDescriptor,
    pub handler: ToolHandler,
}

impl fmt::Debug for RegisteredTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisteredTool")
            .field("descriptor", &self.descriptor)
            .finish_non_exhaustive()
    }
}

/// Registry populated once at startup and read-only afterwards.
#[derive(Debug, Default)]
pub struct ToolRegistry {
    tools: Vec<RegisteredTool>,
    index: HashMap<&'static str, usize>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        &mut self,
        descriptor: ToolDescriptor,
        handler: ToolHandler,
    ) -> Result<(), ToolError> {
        if self.index.contains_key(descriptor.name) {
            return Err(ToolError::DuplicateTool {
                name: descriptor.name.to_string(),
            });
        }
        self.index.insert(descriptor.name, self.tools.len());
        self.tools.push(RegisteredTool {
            descriptor,
            handler,
        });
        Ok(())
    }

    pub fn lookup(&self, name: &str) -> Result<&RegisteredTool, ToolError> {
        self.index
            .get(name)
            .map(|&position| &self.tools[position])
            .ok_or_else(|| ToolError::UnknownTool {
                name: name.to_string(),
            })
    }

    /// Descriptors in registration order.
    pub fn list_tools(&self) -> Vec<ToolDescriptor> {
        self.tools
            .iter()
            .map(|tool| tool.descriptor.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}
