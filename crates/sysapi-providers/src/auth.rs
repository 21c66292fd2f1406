//! Authentication: login, tokens, API keys, sessions.

use serde_json::json;
use sysapi_core::SchemaMap;

pub fn schemas() -> SchemaMap {
    let mut schemas = SchemaMap::new();

    schemas.insert(
        "LoginRequest".into(),
        json!({
            "type": "object",
            "required": ["username", "password"],
            "properties": {
                "username": {"type": "string", "minLength": 1, "maxLength": 64, "example": "admin"},
                "password": {"type": "string", "format": "password", "minLength": 1},
                "remember_me": {"type": "boolean", "default": false},
                "totp_code": {"type": "string", "pattern": "^[0-9]{6}$", "example": "123456"}
            }
        }),
    );

    schemas.insert(
        "LoginResponse".into(),
        json!({
            "type": "object",
            "required": ["access_token", "token_type", "expires_in", "user"],
            "properties": {
                "access_token": {"type": "string", "example": "eyJhbGciOiJIUzI1NiJ9..."},
                "refresh_token": {"type": "string"},
                "token_type": {"type": "string", "enum": ["Bearer"], "example": "Bearer"},
                "expires_in": {"type": "integer", "minimum": 1, "description": "Seconds until expiry", "example": 3600},
                "user": {"$ref": "#/components/schemas/UserInfo"}
            }
        }),
    );

    schemas.insert(
        "UserInfo".into(),
        json!({
            "type": "object",
            "required": ["id", "username", "roles"],
            "properties": {
                "id": {"$ref": "#/components/schemas/ResourceId"},
                "username": {"type": "string", "example": "admin"},
                "email": {"type": "string", "format": "email", "example": "admin@example.com"},
                "roles": {
                    "type": "array",
                    "items": {"type": "string", "enum": ["admin", "operator", "viewer"]},
                    "example": ["admin"]
                },
                "last_login": {"$ref": "#/components/schemas/Timestamp"},
                "mfa_enabled": {"type": "boolean", "example": false}
            }
        }),
    );

    schemas.insert(
        "TokenRefreshRequest".into(),
        json!({
            "type": "object",
            "required": ["refresh_token"],
            "properties": {
                "refresh_token": {"type": "string", "minLength": 1}
            }
        }),
    );

    schemas.insert(
        "TokenResponse".into(),
        json!({
            "type": "object",
            "required": ["access_token", "token_type", "expires_in"],
            "properties": {
                "access_token": {"type": "string"},
                "refresh_token": {"type": "string"},
                "token_type": {"type": "string", "enum": ["Bearer"]},
                "expires_in": {"type": "integer", "minimum": 1, "example": 3600}
            }
        }),
    );

    schemas.insert(
        "ApiKeyInfo".into(),
        json!({
            "type": "object",
            "required": ["id", "name", "prefix", "created_at"],
            "properties": {
                "id": {"$ref": "#/components/schemas/ResourceId"},
                "name": {"type": "string", "example": "backup-script"},
                "prefix": {"type": "string", "description": "First characters of the key, for identification", "example": "sk_live_4f"},
                "scopes": {"type": "array", "items": {"type": "string"}, "example": ["storage:read"]},
                "created_at": {"$ref": "#/components/schemas/Timestamp"},
                "expires_at": {"$ref": "#/components/schemas/Timestamp"},
                "last_used_at": {"$ref": "#/components/schemas/Timestamp"}
            }
        }),
    );

    schemas.insert(
        "SessionInfo".into(),
        json!({
            "type": "object",
            "required": ["id", "user_id", "created_at", "expires_at"],
            "properties": {
                "id": {"$ref": "#/components/schemas/ResourceId"},
                "user_id": {"$ref": "#/components/schemas/ResourceId"},
                "ip_address": {"type": "string", "example": "192.168.1.20"},
                "user_agent": {"type": "string", "example": "Mozilla/5.0"},
                "created_at": {"$ref": "#/components/schemas/Timestamp"},
                "expires_at": {"$ref": "#/components/schemas/Timestamp"},
                "current": {"type": "boolean", "description": "Whether this is the caller's own session"}
            }
        }),
    );

    schemas
}
