//! Bulk and scheduled operations.

use serde_json::json;
use sysapi_core::SchemaMap;

pub fn schemas() -> SchemaMap {
    let mut schemas = SchemaMap::new();

    schemas.insert(
        "BulkOperationRequest".into(),
        json!({
            "type": "object",
            "required": ["action", "targets"],
            "properties": {
                "action": {"type": "string", "enum": ["start", "stop", "restart", "pause", "unpause", "remove", "update"], "example": "restart"},
                "targets": {
                    "type": "array",
                    "minItems": 1,
                    "maxItems": 100,
                    "items": {"$ref": "#/components/schemas/ResourceId"}
                },
                "continue_on_error": {"type": "boolean", "default": true},
                "async": {"type": "boolean", "default": false, "description": "Run in the background and return an AsyncOperation"}
            }
        }),
    );

    schemas.insert(
        "BulkOperationResult".into(),
        json!({
            "type": "object",
            "required": ["action", "results"],
            "properties": {
                "action": {"type": "string", "example": "restart"},
                "results": {"$ref": "#/components/schemas/BatchResponse"},
                "duration_ms": {"type": "integer", "minimum": 0, "example": 5321}
            }
        }),
    );

    schemas.insert(
        "OperationStatus".into(),
        json!({
            "type": "string",
            "enum": ["pending", "running", "succeeded", "failed", "cancelled"],
            "example": "running"
        }),
    );

    schemas.insert(
        "ScheduledTask".into(),
        json!({
            "type": "object",
            "required": ["id", "name", "schedule", "action", "enabled"],
            "properties": {
                "id": {"$ref": "#/components/schemas/ResourceId"},
                "name": {"type": "string", "example": "nightly-parity-check"},
                "schedule": {"type": "string", "description": "Cron expression", "example": "0 3 * * 0"},
                "action": {"type": "string", "example": "storage.parity_check"},
                "enabled": {"type": "boolean", "example": true},
                "last_run": {"$ref": "#/components/schemas/Timestamp"},
                "next_run": {"$ref": "#/components/schemas/Timestamp"},
                "last_status": {"$ref": "#/components/schemas/OperationStatus"}
            }
        }),
    );

    schemas
}
