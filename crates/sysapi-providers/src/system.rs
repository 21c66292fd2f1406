//! Host system information and live resource usage.

use serde_json::json;
use sysapi_core::SchemaMap;

pub fn schemas() -> SchemaMap {
    let mut schemas = SchemaMap::new();

    schemas.insert(
        "SystemInfo".into(),
        json!({
            "type": "object",
            "description": "Static facts about the host",
            "required": ["hostname", "os", "kernel", "uptime_seconds"],
            "properties": {
                "hostname": {"type": "string", "example": "tower"},
                "os": {"type": "string", "example": "Linux"},
                "os_version": {"type": "string", "example": "6.1.79"},
                "kernel": {"type": "string", "example": "6.1.79-generic"},
                "architecture": {"type": "string", "enum": ["x86_64", "aarch64"], "example": "x86_64"},
                "uptime_seconds": {"type": "integer", "format": "int64", "minimum": 0, "example": 864_000},
                "boot_time": {"$ref": "#/components/schemas/Timestamp"},
                "cpu": {"$ref": "#/components/schemas/CpuInfo"},
                "memory": {"$ref": "#/components/schemas/MemoryInfo"}
            }
        }),
    );

    schemas.insert(
        "CpuInfo".into(),
        json!({
            "type": "object",
            "required": ["model", "cores", "threads"],
            "properties": {
                "model": {"type": "string", "example": "AMD Ryzen 9 5950X"},
                "cores": {"type": "integer", "minimum": 1, "example": 16},
                "threads": {"type": "integer", "minimum": 1, "example": 32},
                "frequency_mhz": {"type": "number", "minimum": 0, "example": 3400.0},
                "usage_percent": {"$ref": "#/components/schemas/Percentage"},
                "temperature_celsius": {"type": "number", "example": 48.5}
            }
        }),
    );

    schemas.insert(
        "MemoryInfo".into(),
        json!({
            "type": "object",
            "required": ["total", "used", "available"],
            "properties": {
                "total": {"$ref": "#/components/schemas/ByteSize"},
                "used": {"$ref": "#/components/schemas/ByteSize"},
                "available": {"$ref": "#/components/schemas/ByteSize"},
                "cached": {"$ref": "#/components/schemas/ByteSize"},
                "swap_total": {"$ref": "#/components/schemas/ByteSize"},
                "swap_used": {"$ref": "#/components/schemas/ByteSize"},
                "usage_percent": {"$ref": "#/components/schemas/Percentage"}
            }
        }),
    );

    schemas.insert(
        "LoadAverage".into(),
        json!({
            "type": "object",
            "required": ["one", "five", "fifteen"],
            "properties": {
                "one": {"type": "number", "minimum": 0, "example": 0.42},
                "five": {"type": "number", "minimum": 0, "example": 0.37},
                "fifteen": {"type": "number", "minimum": 0, "example": 0.31}
            }
        }),
    );

    schemas.insert(
        "SystemStats".into(),
        json!({
            "type": "object",
            "description": "Point-in-time resource usage snapshot",
            "required": ["timestamp", "cpu_percent", "memory", "load"],
            "properties": {
                "timestamp": {"$ref": "#/components/schemas/Timestamp"},
                "cpu_percent": {"$ref": "#/components/schemas/Percentage"},
                "per_core_percent": {
                    "type": "array",
                    "items": {"$ref": "#/components/schemas/Percentage"}
                },
                "memory": {"$ref": "#/components/schemas/MemoryInfo"},
                "load": {"$ref": "#/components/schemas/LoadAverage"},
                "network": {
                    "type": "array",
                    "items": {"$ref": "#/components/schemas/NetworkInterface"}
                },
                "process_count": {"type": "integer", "minimum": 0, "example": 312}
            }
        }),
    );

    schemas.insert(
        "NetworkInterface".into(),
        json!({
            "type": "object",
            "required": ["name", "up"],
            "properties": {
                "name": {"type": "string", "example": "eth0"},
                "mac_address": {"type": "string", "pattern": "^([0-9a-f]{2}:){5}[0-9a-f]{2}$", "example": "02:42:ac:11:00:02"},
                "ipv4": {"type": "array", "items": {"type": "string", "format": "ipv4"}, "example": ["192.168.1.10"]},
                "ipv6": {"type": "array", "items": {"type": "string", "format": "ipv6"}},
                "up": {"type": "boolean", "example": true},
                "speed_mbps": {"type": "integer", "minimum": 0, "example": 1000},
                "rx_bytes": {"$ref": "#/components/schemas/ByteSize"},
                "tx_bytes": {"$ref": "#/components/schemas/ByteSize"}
            }
        }),
    );

    schemas.insert(
        "ServiceStatus".into(),
        json!({
            "type": "object",
            "required": ["name", "state"],
            "properties": {
                "name": {"type": "string", "example": "sshd"},
                "state": {"type": "string", "enum": ["running", "stopped", "failed", "starting"], "example": "running"},
                "enabled": {"type": "boolean", "description": "Starts on boot", "example": true},
                "pid": {"type": "integer", "minimum": 1, "example": 812},
                "health": {"$ref": "#/components/schemas/HealthStatus"},
                "since": {"$ref": "#/components/schemas/Timestamp"}
            }
        }),
    );

    schemas.insert(
        "ProcessInfo".into(),
        json!({
            "type": "object",
            "required": ["pid", "name"],
            "properties": {
                "pid": {"type": "integer", "minimum": 1, "example": 4242},
                "ppid": {"type": "integer", "minimum": 0, "example": 1},
                "name": {"type": "string", "example": "dockerd"},
                "user": {"type": "string", "example": "root"},
                "cpu_percent": {"$ref": "#/components/schemas/Percentage"},
                "memory_bytes": {"$ref": "#/components/schemas/ByteSize"},
                "state": {"type": "string", "enum": ["running", "sleeping", "stopped", "zombie"]},
                "command": {"type": "string", "example": "/usr/bin/dockerd -H unix://"}
            }
        }),
    );

    schemas
}
