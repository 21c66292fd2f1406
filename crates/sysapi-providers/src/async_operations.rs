//! Long-running background operations tracked by id.

use serde_json::json;
use sysapi_core::SchemaMap;

pub fn schemas() -> SchemaMap {
    let mut schemas = SchemaMap::new();

    schemas.insert(
        "AsyncOperation".into(),
        json!({
            "type": "object",
            "description": "Handle returned with 202 Accepted for work that continues in the background",
            "required": ["id", "type", "status", "created_at"],
            "properties": {
                "id": {"$ref": "#/components/schemas/ResourceId"},
                "type": {"type": "string", "example": "docker.image.pull"},
                "status": {"$ref": "#/components/schemas/AsyncOperationStatus"},
                "progress": {"$ref": "#/components/schemas/AsyncOperationProgress"},
                "created_at": {"$ref": "#/components/schemas/Timestamp"},
                "started_at": {"$ref": "#/components/schemas/Timestamp"},
                "completed_at": {"$ref": "#/components/schemas/Timestamp"},
                "status_url": {"type": "string", "example": "/api/v1/operations/op-81f3"},
                "cancellable": {"type": "boolean", "example": true}
            }
        }),
    );

    schemas.insert(
        "AsyncOperationStatus".into(),
        json!({
            "type": "string",
            "enum": ["queued", "running", "completed", "failed", "cancelled"],
            "example": "running"
        }),
    );

    schemas.insert(
        "AsyncOperationProgress".into(),
        json!({
            "type": "object",
            "required": ["percent"],
            "properties": {
                "percent": {"$ref": "#/components/schemas/Percentage"},
                "current_step": {"type": "string", "example": "Extracting layer 3/7"},
                "steps_completed": {"type": "integer", "minimum": 0, "example": 2},
                "steps_total": {"type": "integer", "minimum": 0, "example": 7},
                "eta_seconds": {"type": "integer", "minimum": 0, "example": 40}
            }
        }),
    );

    schemas.insert(
        "AsyncOperationResult".into(),
        json!({
            "type": "object",
            "required": ["id", "status"],
            "properties": {
                "id": {"$ref": "#/components/schemas/ResourceId"},
                "status": {"$ref": "#/components/schemas/AsyncOperationStatus"},
                "result": {"description": "Operation-specific output, present when completed"},
                "error": {"$ref": "#/components/schemas/ErrorResponse"},
                "duration_ms": {"type": "integer", "minimum": 0, "example": 61234}
            }
        }),
    );

    schemas
}
