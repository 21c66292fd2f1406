//! Error envelopes returned by every endpoint.
//!
//! Unlike the literal schema groups, these bodies are generated from the Rust
//! types the HTTP layer serializes, so the documented shape cannot drift from
//! what handlers actually return.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use schemars::generate::SchemaSettings;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sysapi_core::SchemaMap;

/// Standard error body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ErrorResponse {
    /// Machine-readable error code, e.g. `internal_error`.
    pub error: String,
    /// Human-readable explanation.
    pub message: String,
    /// HTTP status code echoed in the body.
    pub status: u16,
    /// Correlation id for log lookup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

/// Request body failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ValidationErrorResponse {
    pub error: String,
    pub message: String,
    pub status: u16,
    /// Offending field names mapped to what is wrong with them.
    pub fields: BTreeMap<String, String>,
}

/// A single invalid field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FieldError {
    /// Dotted path of the field, e.g. `config.memory_mb`.
    pub field: String,
    pub message: String,
    /// Validation rule that failed, e.g. `minimum`.
    pub code: String,
}

/// The addressed resource does not exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct NotFoundError {
    pub error: String,
    pub message: String,
    /// Resource kind, e.g. `container`.
    pub resource: String,
    pub id: String,
}

/// The request conflicts with the current resource state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ConflictError {
    pub error: String,
    pub message: String,
    pub resource: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conflicting_id: Option<String>,
}

/// Insert the OpenAPI 3.0 schema generated for a type.
macro_rules! register {
    ($map:expr, $name:expr, $ty:ty) => {
        $map.insert($name.to_string(), openapi_schema::<$ty>());
    };
}

/// Generate an OpenAPI-flavoured schema for `T` without the `$schema` marker,
/// which has no place inside `components.schemas`.
fn openapi_schema<T: JsonSchema>() -> Value {
    let mut value = SchemaSettings::openapi3()
        .into_generator()
        .into_root_schema_for::<T>()
        .to_value();
    if let Some(object) = value.as_object_mut() {
        object.remove("$schema");
    }
    value
}

pub fn schemas() -> SchemaMap {
    let mut schemas = SchemaMap::new();
    register!(schemas, "ErrorResponse", ErrorResponse);
    register!(schemas, "ValidationErrorResponse", ValidationErrorResponse);
    register!(schemas, "FieldError", FieldError);
    register!(schemas, "NotFoundError", NotFoundError);
    register!(schemas, "ConflictError", ConflictError);
    schemas
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn required(schema: &Value) -> Vec<&str> {
        let mut names: Vec<&str> = schema["required"]
            .as_array()
            .map(|items| items.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default();
        names.sort_unstable();
        names
    }

    #[test]
    fn generates_all_error_schemas() {
        let schemas = schemas();
        assert_eq!(schemas.len(), 5);
        for schema in schemas.values() {
            assert_eq!(schema["type"], "object");
            assert!(schema.get("$schema").is_none());
        }
    }

    #[test]
    fn optional_fields_are_not_required() {
        let schemas = schemas();
        assert_eq!(
            required(&schemas["ErrorResponse"]),
            vec!["error", "message", "status"]
        );
        assert_eq!(
            required(&schemas["ConflictError"]),
            vec!["error", "message", "resource"]
        );
    }

    #[test]
    fn doc_comments_become_descriptions() {
        let schemas = schemas();
        let message = &schemas["ErrorResponse"]["properties"]["message"]["description"];
        assert_eq!(message, "Human-readable explanation.");
    }

    #[test]
    fn serialized_body_matches_documented_properties() {
        let body = ErrorResponse {
            error: "not_found".into(),
            message: "container missing".into(),
            status: 404,
            request_id: None,
        };
        let json = serde_json::to_value(&body).unwrap();
        let schemas = schemas();
        let properties = schemas["ErrorResponse"]["properties"].as_object().unwrap();
        for key in json.as_object().unwrap().keys() {
            assert!(properties.contains_key(key), "undocumented field {key}");
        }
    }
}
