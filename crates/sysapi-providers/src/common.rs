//! Shared building blocks referenced by the domain schemas.

use serde_json::json;
use sysapi_core::SchemaMap;

pub fn schemas() -> SchemaMap {
    let mut schemas = SchemaMap::new();

    schemas.insert(
        "Timestamp".into(),
        json!({
            "type": "string",
            "format": "date-time",
            "description": "RFC 3339 timestamp in UTC",
            "example": "2024-05-01T12:30:00Z"
        }),
    );

    schemas.insert(
        "ResourceId".into(),
        json!({
            "type": "string",
            "description": "Opaque identifier of a managed resource",
            "minLength": 1,
            "maxLength": 128,
            "pattern": "^[A-Za-z0-9._:-]+$",
            "example": "c0ffee1234ab"
        }),
    );

    schemas.insert(
        "PaginationParams".into(),
        json!({
            "type": "object",
            "description": "Query parameters accepted by list endpoints",
            "properties": {
                "page": {"type": "integer", "minimum": 1, "default": 1, "example": 1},
                "per_page": {"type": "integer", "minimum": 1, "maximum": 500, "default": 50, "example": 50},
                "sort": {"type": "string", "description": "Field to sort by", "example": "name"},
                "order": {"type": "string", "enum": ["asc", "desc"], "default": "asc"}
            }
        }),
    );

    schemas.insert(
        "PaginationInfo".into(),
        json!({
            "type": "object",
            "description": "Pagination metadata attached to list responses",
            "required": ["page", "per_page", "total", "total_pages"],
            "properties": {
                "page": {"type": "integer", "minimum": 1, "example": 2},
                "per_page": {"type": "integer", "minimum": 1, "example": 50},
                "total": {"type": "integer", "minimum": 0, "example": 137},
                "total_pages": {"type": "integer", "minimum": 0, "example": 3},
                "has_next": {"type": "boolean", "example": true},
                "has_previous": {"type": "boolean", "example": true}
            }
        }),
    );

    schemas.insert(
        "KeyValue".into(),
        json!({
            "type": "object",
            "description": "Generic key/value pair used for labels and environment entries",
            "required": ["key", "value"],
            "properties": {
                "key": {"type": "string", "example": "TZ"},
                "value": {"type": "string", "example": "UTC"}
            }
        }),
    );

    schemas.insert(
        "ByteSize".into(),
        json!({
            "type": "integer",
            "format": "int64",
            "minimum": 0,
            "description": "Size in bytes",
            "example": 8_589_934_592_u64
        }),
    );

    schemas.insert(
        "Percentage".into(),
        json!({
            "type": "number",
            "format": "double",
            "minimum": 0,
            "maximum": 100,
            "description": "Percentage value between 0 and 100",
            "example": 42.5
        }),
    );

    schemas.insert(
        "HealthStatus".into(),
        json!({
            "type": "string",
            "enum": ["healthy", "degraded", "unhealthy", "unknown"],
            "description": "Coarse health state of a component",
            "example": "healthy"
        }),
    );

    schemas
}
