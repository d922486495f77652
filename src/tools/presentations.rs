//! The fixed catalog of presentation tools.
use crate::{catalog::Presentation, lib::errors::ToolError};

use super::{
    query::QueryEngine,
    registry::{ToolDescriptor, ToolHandler, ToolRegistry},
    schema::{ArgKind, InputSchema, ToolArguments},
};

pub const GET_PRESENTATIONS: &str = "get_presentations";
pub const SEARCH_BY_TITLE: &str = "search_presentations_by_title";
pub const SEARCH_BY_YEAR: &str = "search_presentations_by_year";

const QUERY_ARG: &str = "query";
const YEAR_ARG: &str = "year";

/// Descriptor and handler for every catalog tool, in advertisement order.
pub fn catalog() -> Vec<(ToolDescriptor, ToolHandler)> {
    vec![
        entry(
            ToolDescriptor::new(
                GET_PRESENTATIONS,
                "Get a list of all presentations from JavaOne",
                InputSchema::empty(),
            ),
            get_presentations,
        ),
        entry(
            ToolDescriptor::new(
                SEARCH_BY_TITLE,
                "Search presentations by title",
                InputSchema::empty().required(
                    QUERY_ARG,
                    ArgKind::String,
                    "Case-insensitive fragment of the presentation title",
                ),
            ),
            search_by_title,
        ),
        entry(
            ToolDescriptor::new(
                SEARCH_BY_YEAR,
                "Search presentations by year",
                InputSchema::empty().required(
                    YEAR_ARG,
                    ArgKind::Integer,
                    "Conference year, for example 2023",
                ),
            ),
            search_by_year,
        ),
    ]
}

fn entry(descriptor: ToolDescriptor, handler: ToolHandler) -> (ToolDescriptor, ToolHandler) {
    (descriptor, handler)
}

/// Register the catalog into a fresh registry.
pub fn build_registry() -> Result<ToolRegistry, ToolError> {
    let mut registry = ToolRegistry::new();
    for (descriptor, handler) in catalog() {
        registry.register(descriptor, handler)?;
    }
    Ok(registry)
}

fn get_presentations<'a>(
    engine: &'a QueryEngine,
    _arguments: &ToolArguments,
) -> Result<Vec<&'a Presentation>, ToolError> {
    Ok(engine.list_all())
}

fn search_by_title<'a>(
    engine: &'a QueryEngine,
    arguments: &ToolArguments,
) -> Result<Vec<&'a Presentation>, ToolError> {
    let query = arguments.text(QUERY_ARG)?;
    Ok(engine.search_by_title(query))
}

fn search_by_year<'a>(
    engine: &'a QueryEngine,
    arguments: &ToolArguments,
) -> Result<Vec<&'a Presentation>, ToolError> {
    let year = arguments.integer(YEAR_ARG)?;
    Ok(engine.search_by_year(year))
}
