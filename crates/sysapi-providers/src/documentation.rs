//! Self-description of the API: version info, endpoint index, changelog.

use serde_json::json;
use sysapi_core::SchemaMap;

pub fn schemas() -> SchemaMap {
    let mut schemas = SchemaMap::new();

    schemas.insert(
        "ApiInfo".into(),
        json!({
            "type": "object",
            "description": "Top-level metadata returned by the API root",
            "required": ["name", "version"],
            "properties": {
                "name": {"type": "string", "example": "System Management API"},
                "version": {"type": "string", "example": "1.0.0"},
                "description": {"type": "string"},
                "documentation_url": {"type": "string", "format": "uri", "example": "http://localhost:8080/docs"},
                "endpoints": {
                    "type": "array",
                    "items": {"$ref": "#/components/schemas/EndpointInfo"}
                }
            }
        }),
    );

    schemas.insert(
        "EndpointInfo".into(),
        json!({
            "type": "object",
            "description": "One entry of the endpoint index",
            "required": ["method", "path"],
            "properties": {
                "method": {"type": "string", "enum": ["GET", "POST", "PUT", "PATCH", "DELETE"]},
                "path": {"type": "string", "example": "/api/v1/docker/containers"},
                "summary": {"type": "string", "example": "List containers"},
                "tags": {"type": "array", "items": {"type": "string"}, "example": ["Docker"]},
                "requires_auth": {"type": "boolean", "default": true},
                "deprecated": {"type": "boolean", "default": false}
            }
        }),
    );

    schemas.insert(
        "ApiVersionInfo".into(),
        json!({
            "type": "object",
            "description": "Build and compatibility information",
            "required": ["version", "api_version"],
            "properties": {
                "version": {"type": "string", "example": "1.4.2"},
                "api_version": {"type": "string", "example": "v1"},
                "build_date": {"$ref": "#/components/schemas/Timestamp"},
                "git_commit": {"type": "string", "example": "9f2c1ab"},
                "min_client_version": {"type": "string", "example": "1.0.0"}
            }
        }),
    );

    schemas.insert(
        "ChangelogEntry".into(),
        json!({
            "type": "object",
            "description": "A released API change",
            "required": ["version", "date", "changes"],
            "properties": {
                "version": {"type": "string", "example": "1.4.0"},
                "date": {"type": "string", "format": "date", "example": "2024-04-18"},
                "changes": {
                    "type": "array",
                    "items": {"type": "string"},
                    "example": ["Added VM snapshot endpoints"]
                },
                "breaking": {"type": "boolean", "default": false}
            }
        }),
    );

    schemas
}
