//! Real-time event stream frames.

use serde_json::json;
use sysapi_core::SchemaMap;

pub fn schemas() -> SchemaMap {
    let mut schemas = SchemaMap::new();

    schemas.insert(
        "WebSocketMessage".into(),
        json!({
            "type": "object",
            "description": "Envelope of every frame sent over the event socket",
            "required": ["type"],
            "properties": {
                "type": {
                    "type": "string",
                    "enum": ["subscribe", "unsubscribe", "event", "error", "ping", "pong"],
                    "example": "event"
                },
                "id": {"type": "string", "description": "Client-chosen correlation id", "example": "req-17"},
                "payload": {"description": "Frame-specific body"}
            }
        }),
    );

    schemas.insert(
        "WebSocketSubscribeRequest".into(),
        json!({
            "type": "object",
            "required": ["channels"],
            "properties": {
                "channels": {
                    "type": "array",
                    "minItems": 1,
                    "items": {
                        "type": "string",
                        "enum": ["system.stats", "docker.events", "vm.events", "storage.events", "notifications", "operations"]
                    },
                    "example": ["system.stats", "docker.events"]
                },
                "interval_ms": {
                    "type": "integer",
                    "minimum": 250,
                    "maximum": 60000,
                    "default": 1000,
                    "description": "Sampling interval for periodic channels"
                }
            }
        }),
    );

    schemas.insert(
        "WebSocketEvent".into(),
        json!({
            "type": "object",
            "required": ["channel", "event", "timestamp"],
            "properties": {
                "channel": {"type": "string", "example": "docker.events"},
                "event": {"type": "string", "example": "container.started"},
                "timestamp": {"$ref": "#/components/schemas/Timestamp"},
                "data": {"description": "Event payload; its schema depends on the channel"}
            }
        }),
    );

    schemas.insert(
        "WebSocketError".into(),
        json!({
            "type": "object",
            "required": ["code", "message"],
            "properties": {
                "code": {
                    "type": "string",
                    "enum": ["invalid_message", "unknown_channel", "unauthorized", "rate_limited"],
                    "example": "unknown_channel"
                },
                "message": {"type": "string", "example": "Channel 'gpu.stats' does not exist"},
                "id": {"type": "string", "description": "Correlation id of the offending frame"}
            }
        }),
    );

    schemas
}
