//! Health checks, logs, and diagnostic reports.

use serde_json::json;
use sysapi_core::SchemaMap;

pub fn schemas() -> SchemaMap {
    let mut schemas = SchemaMap::new();

    schemas.insert(
        "HealthCheckResult".into(),
        json!({
            "type": "object",
            "required": ["component", "status"],
            "properties": {
                "component": {"type": "string", "example": "docker"},
                "status": {"$ref": "#/components/schemas/HealthStatus"},
                "message": {"type": "string", "example": "Docker daemon responding"},
                "latency_ms": {"type": "number", "minimum": 0, "example": 3.2},
                "checked_at": {"$ref": "#/components/schemas/Timestamp"}
            }
        }),
    );

    schemas.insert(
        "DiagnosticReport".into(),
        json!({
            "type": "object",
            "required": ["generated_at", "overall", "checks"],
            "properties": {
                "generated_at": {"$ref": "#/components/schemas/Timestamp"},
                "overall": {"$ref": "#/components/schemas/HealthStatus"},
                "checks": {"type": "array", "items": {"$ref": "#/components/schemas/HealthCheckResult"}},
                "system": {"$ref": "#/components/schemas/SystemInfo"},
                "warnings": {"type": "array", "items": {"type": "string"}, "example": ["Parity check overdue"]}
            }
        }),
    );

    schemas.insert(
        "LogEntry".into(),
        json!({
            "type": "object",
            "required": ["timestamp", "level", "message"],
            "properties": {
                "timestamp": {"$ref": "#/components/schemas/Timestamp"},
                "level": {"type": "string", "enum": ["trace", "debug", "info", "warn", "error"], "example": "info"},
                "source": {"type": "string", "example": "kernel"},
                "message": {"type": "string", "example": "md: recovery thread: check P"}
            }
        }),
    );

    schemas.insert(
        "LogQuery".into(),
        json!({
            "type": "object",
            "properties": {
                "source": {"type": "string", "example": "syslog"},
                "level": {"type": "string", "enum": ["trace", "debug", "info", "warn", "error"]},
                "since": {"$ref": "#/components/schemas/Timestamp"},
                "until": {"$ref": "#/components/schemas/Timestamp"},
                "search": {"type": "string", "example": "error"},
                "limit": {"type": "integer", "minimum": 1, "maximum": 10000, "default": 100}
            }
        }),
    );

    schemas.insert(
        "PerformanceMetrics".into(),
        json!({
            "type": "object",
            "required": ["window_seconds"],
            "properties": {
                "window_seconds": {"type": "integer", "minimum": 1, "example": 60},
                "requests_total": {"type": "integer", "minimum": 0, "example": 1532},
                "requests_per_second": {"type": "number", "minimum": 0, "example": 25.5},
                "p50_latency_ms": {"type": "number", "minimum": 0, "example": 4.1},
                "p95_latency_ms": {"type": "number", "minimum": 0, "example": 18.7},
                "p99_latency_ms": {"type": "number", "minimum": 0, "example": 41.0},
                "error_rate": {"$ref": "#/components/schemas/Percentage"}
            }
        }),
    );

    schemas
}
