//! Request quota reporting.

use serde_json::json;
use sysapi_core::SchemaMap;

pub fn schemas() -> SchemaMap {
    let mut schemas = SchemaMap::new();

    schemas.insert(
        "RateLimitInfo".into(),
        json!({
            "type": "object",
            "description": "Mirrors the X-RateLimit-* response headers",
            "required": ["limit", "remaining", "reset"],
            "properties": {
                "limit": {"type": "integer", "minimum": 1, "example": 100},
                "remaining": {"type": "integer", "minimum": 0, "example": 87},
                "reset": {"type": "integer", "format": "int64", "description": "Unix time when the window resets", "example": 1_714_566_000},
                "window_seconds": {"type": "integer", "minimum": 1, "example": 60}
            }
        }),
    );

    schemas.insert(
        "RateLimitConfig".into(),
        json!({
            "type": "object",
            "required": ["requests_per_window", "window_seconds"],
            "properties": {
                "requests_per_window": {"type": "integer", "minimum": 1, "example": 100},
                "window_seconds": {"type": "integer", "minimum": 1, "example": 60},
                "burst": {"type": "integer", "minimum": 0, "example": 20},
                "scope": {"type": "string", "enum": ["ip", "user", "api_key"], "default": "user"},
                "exempt_paths": {"type": "array", "items": {"type": "string"}, "example": ["/api/v1/health"]}
            }
        }),
    );

    schemas.insert(
        "RateLimitStatus".into(),
        json!({
            "type": "object",
            "required": ["scope", "key", "info"],
            "properties": {
                "scope": {"type": "string", "enum": ["ip", "user", "api_key"]},
                "key": {"type": "string", "example": "admin"},
                "info": {"$ref": "#/components/schemas/RateLimitInfo"},
                "blocked": {"type": "boolean", "example": false}
            }
        }),
    );

    schemas.insert(
        "RateLimitExceeded".into(),
        json!({
            "type": "object",
            "description": "Body of a 429 Too Many Requests response",
            "required": ["error", "message", "retry_after"],
            "properties": {
                "error": {"type": "string", "enum": ["rate_limited"]},
                "message": {"type": "string", "example": "Too many requests, retry in 12 seconds"},
                "retry_after": {"type": "integer", "minimum": 0, "example": 12},
                "limit": {"$ref": "#/components/schemas/RateLimitInfo"}
            }
        }),
    );

    schemas
}
