//! Notifications and delivery channels.

use serde_json::json;
use sysapi_core::SchemaMap;

pub fn schemas() -> SchemaMap {
    let mut schemas = SchemaMap::new();

    schemas.insert(
        "Notification".into(),
        json!({
            "type": "object",
            "required": ["id", "title", "level", "created_at"],
            "properties": {
                "id": {"$ref": "#/components/schemas/ResourceId"},
                "title": {"type": "string", "example": "Disk 3 temperature high"},
                "message": {"type": "string", "example": "Disk 3 reached 52 °C"},
                "level": {"type": "string", "enum": ["info", "warning", "alert", "critical"], "example": "warning"},
                "source": {"type": "string", "example": "storage"},
                "read": {"type": "boolean", "default": false},
                "created_at": {"$ref": "#/components/schemas/Timestamp"},
                "link": {"type": "string", "format": "uri"}
            }
        }),
    );

    schemas.insert(
        "NotificationCreateRequest".into(),
        json!({
            "type": "object",
            "required": ["title", "level"],
            "properties": {
                "title": {"type": "string", "minLength": 1, "maxLength": 200},
                "message": {"type": "string", "maxLength": 4000},
                "level": {"type": "string", "enum": ["info", "warning", "alert", "critical"]},
                "channels": {
                    "type": "array",
                    "items": {"$ref": "#/components/schemas/ResourceId"},
                    "description": "Channels to deliver to; all enabled channels when omitted"
                }
            }
        }),
    );

    schemas.insert(
        "NotificationChannel".into(),
        json!({
            "type": "object",
            "required": ["id", "type", "enabled"],
            "properties": {
                "id": {"$ref": "#/components/schemas/ResourceId"},
                "name": {"type": "string", "example": "ops-email"},
                "type": {"type": "string", "enum": ["email", "webhook", "slack", "discord", "pushover", "telegram"]},
                "enabled": {"type": "boolean", "example": true},
                "min_level": {"type": "string", "enum": ["info", "warning", "alert", "critical"], "default": "warning"},
                "settings": {
                    "type": "object",
                    "additionalProperties": {"type": "string"},
                    "description": "Channel-specific settings such as URL or recipient"
                }
            }
        }),
    );

    schemas.insert(
        "NotificationPreferences".into(),
        json!({
            "type": "object",
            "properties": {
                "enabled": {"type": "boolean", "default": true},
                "quiet_hours": {
                    "type": "object",
                    "properties": {
                        "start": {"type": "string", "pattern": "^[0-2][0-9]:[0-5][0-9]$", "example": "22:00"},
                        "end": {"type": "string", "pattern": "^[0-2][0-9]:[0-5][0-9]$", "example": "07:00"}
                    }
                },
                "digest": {"type": "string", "enum": ["none", "hourly", "daily"], "default": "none"},
                "muted_sources": {"type": "array", "items": {"type": "string"}, "example": ["docker"]}
            }
        }),
    );

    schemas
}
