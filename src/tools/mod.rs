//! Tool registry, argument coercion, query engine and the dispatcher tying them together.

pub mod dispatcher;
pub mod presentations;
pub mod query;
pub mod registry;
pub mod schema;

pub use dispatcher::{Dispatcher, InvocationRequest, InvocationResult};
pub use presentations::{
    build_registry, catalog, GET_PRESENTATIONS, SEARCH_BY_TITLE, SEARCH_BY_YEAR,
};
pub use query::QueryEngine;
pub use registry::{RegisteredTool, ToolDescriptor, ToolHandler, ToolRegistry};
pub use schema::{ArgKind, ArgValue, InputSchema, JsonObject, PropertySpec, ToolArguments};
