//! Generic response envelopes wrapped around domain payloads.

use serde_json::json;
use sysapi_core::SchemaMap;

pub fn schemas() -> SchemaMap {
    let mut schemas = SchemaMap::new();

    schemas.insert(
        "SuccessResponse".into(),
        json!({
            "type": "object",
            "description": "Envelope for a single successful result",
            "required": ["success", "data"],
            "properties": {
                "success": {"type": "boolean", "example": true},
                "data": {"description": "Endpoint-specific payload"},
                "timestamp": {"$ref": "#/components/schemas/Timestamp"}
            }
        }),
    );

    schemas.insert(
        "ListResponse".into(),
        json!({
            "type": "object",
            "description": "Envelope for paginated collections",
            "required": ["success", "items", "pagination"],
            "properties": {
                "success": {"type": "boolean", "example": true},
                "items": {"type": "array", "items": {}},
                "pagination": {"$ref": "#/components/schemas/PaginationInfo"}
            }
        }),
    );

    schemas.insert(
        "EmptyResponse".into(),
        json!({
            "type": "object",
            "description": "Acknowledgement with no payload",
            "required": ["success"],
            "properties": {
                "success": {"type": "boolean", "example": true}
            }
        }),
    );

    schemas.insert(
        "MessageResponse".into(),
        json!({
            "type": "object",
            "description": "Acknowledgement carrying a human-readable message",
            "required": ["success", "message"],
            "properties": {
                "success": {"type": "boolean", "example": true},
                "message": {"type": "string", "example": "Container restarted"}
            }
        }),
    );

    schemas.insert(
        "BatchResponse".into(),
        json!({
            "type": "object",
            "description": "Per-item outcome of a batch request",
            "required": ["succeeded", "failed", "results"],
            "properties": {
                "succeeded": {"type": "integer", "minimum": 0, "example": 3},
                "failed": {"type": "integer", "minimum": 0, "example": 1},
                "results": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "required": ["id", "success"],
                        "properties": {
                            "id": {"$ref": "#/components/schemas/ResourceId"},
                            "success": {"type": "boolean"},
                            "error": {"$ref": "#/components/schemas/ErrorResponse"}
                        }
                    }
                }
            }
        }),
    );

    schemas
}
