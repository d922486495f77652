//! Declared tool input schemas and the argument coercion applied before dispatch.
use std::collections::BTreeMap;

use serde_json::{json, Map, Value};

use crate::lib::errors::ToolError;

/// Raw argument mapping as decoded from the wire.
pub type JsonObject = Map<String, Value>;

/// Scalar types an argument may be declared as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgKind {
    String,
    Integer,
}

impl ArgKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ArgKind::String => "string",
            ArgKind::Integer => "integer",
        }
    }
}

/// One declared property of a tool's input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertySpec {
    pub name: &'static str,
    pub kind: ArgKind,
    pub required: bool,
    pub description: &'static str,
}

/// Structural description of the arguments a tool accepts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputSchema {
    properties: Vec<PropertySpec>,
}

impl InputSchema {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn required(
        mut self,
        name: &'static str,
        kind: ArgKind,
        description: &'static str,
    ) -> Self {
        self.properties.push(PropertySpec {
            name,
            kind,
            required: true,
            description,
        });
        self
    }

    pub fn properties(&self) -> &[PropertySpec] {
        &self.properties
    }

    /// JSON Schema object advertised through `tools/list`.
    pub fn to_json_object(&self) -> JsonObject {
        let mut properties = Map::new();
        for spec in &self.properties {
            let mut property = Map::new();
            property.insert("type".into(), Value::String(spec.kind.as_str().into()));
            if !spec.description.is_empty() {
                property.insert("description".into(), Value::String(spec.description.into()));
            }
            properties.insert(spec.name.to_string(), Value::Object(property));
        }

        let mut schema = Map::new();
        schema.insert("type".into(), json!("object"));
        schema.insert("properties".into(), Value::Object(properties));
        let required: Vec<Value> = self
            .properties
            .iter()
            .filter(|spec| spec.required)
            .map(|spec| Value::String(spec.name.into()))
            .collect();
        if !required.is_empty() {
            schema.insert("required".into(), Value::Array(required));
        }
        schema
    }

    /// Check `arguments` against the schema and convert declared properties to typed values.
    ///
    /// Undeclared keys are ignored. A JSON `null` counts as absent.
    pub fn coerce(&self, arguments: &JsonObject) -> Result<ToolArguments, ToolError> {
        let mut values = BTreeMap::new();
        for spec in &self.properties {
            match arguments.get(spec.name) {
                None | Some(Value::Null) if spec.required => {
                    return Err(ToolError::invalid(spec.name, "is required but was not supplied"));
                }
                None | Some(Value::Null) => {}
                Some(raw) => {
                    let value = coerce_value(spec, raw)?;
                    values.insert(spec.name, value);
                }
            }
        }
        Ok(ToolArguments { values })
    }
}

/// A coerced argument value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgValue {
    Text(String),
    Integer(i64),
}

/// Arguments that passed schema coercion, keyed by property name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolArguments {
    values: BTreeMap<&'static str, ArgValue>,
}

impl ToolArguments {
    pub fn get(&self, name: &str) -> Option<&ArgValue> {
        self.values.get(name)
    }

    pub fn text(&self, name: &str) -> Result<&str, ToolError> {
        match self.get(name) {
            Some(ArgValue::Text(value)) => Ok(value),
            Some(ArgValue::Integer(_)) => Err(ToolError::invalid(name, "expected a string")),
            None => Err(ToolError::invalid(name, "is required but was not supplied")),
        }
    }

    pub fn integer(&self, name: &str) -> Result<i64, ToolError> {
        match self.get(name) {
            Some(ArgValue::Integer(value)) => Ok(*value),
            Some(ArgValue::Text(_)) => Err(ToolError::invalid(name, "expected an integer")),
            None => Err(ToolError::invalid(name, "is required but was not supplied")),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

fn coerce_value(spec: &PropertySpec, raw: &Value) -> Result<ArgValue, ToolError> {
    match spec.kind {
        ArgKind::String => coerce_text(spec.name, raw),
        ArgKind::Integer => coerce_integer(spec.name, raw),
    }
}

fn coerce_text(field: &str, raw: &Value) -> Result<ArgValue, ToolError> {
    match raw {
        Value::String(value) => Ok(ArgValue::Text(value.clone())),
        Value::Number(number) => Ok(ArgValue::Text(number.to_string())),
        Value::Bool(flag) => Ok(ArgValue::Text(flag.to_string())),
        other => Err(ToolError::invalid(
            field,
            format!("expected a string, got {}", json_kind(other)),
        )),
    }
}

fn coerce_integer(field: &str, raw: &Value) -> Result<ArgValue, ToolError> {
    match raw {
        Value::Number(number) => {
            if let Some(value) = number.as_i64() {
                return Ok(ArgValue::Integer(value));
            }
            if number.is_u64() {
                return Err(ToolError::invalid(
                    field,
                    format!("integer {number} is out of range"),
                ));
            }
            match number.as_f64() {
                Some(value) if is_whole_in_range(value) => Ok(ArgValue::Integer(value as i64)),
                _ => Err(ToolError::invalid(
                    field,
                    format!("expected a whole number, got {number}"),
                )),
            }
        }
        Value::String(text) => text.trim().parse::<i64>().map(ArgValue::Integer).map_err(|_| {
            ToolError::invalid(field, format!("expected an integer, got text `{text}`"))
        }),
        other => Err(ToolError::invalid(
            field,
            format!("expected an integer, got {}", json_kind(other)),
        )),
    }
}

fn is_whole_in_range(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0 && value >= i64::MIN as f64 && value < i64::MAX as f64
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
