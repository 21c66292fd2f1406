//! Docker containers, images, networks, and volumes.

use serde_json::json;
use sysapi_core::SchemaMap;

pub fn schemas() -> SchemaMap {
    let mut schemas = SchemaMap::new();

    schemas.insert(
        "ContainerInfo".into(),
        json!({
            "type": "object",
            "required": ["id", "name", "image", "state"],
            "properties": {
                "id": {"$ref": "#/components/schemas/ResourceId"},
                "name": {"type": "string", "example": "plex"},
                "image": {"type": "string", "example": "plexinc/pms-docker:latest"},
                "state": {
                    "type": "string",
                    "enum": ["created", "running", "paused", "restarting", "exited", "dead"],
                    "example": "running"
                },
                "status": {"type": "string", "example": "Up 3 days"},
                "created": {"$ref": "#/components/schemas/Timestamp"},
                "ports": {"type": "array", "items": {"$ref": "#/components/schemas/ContainerPort"}},
                "labels": {"type": "array", "items": {"$ref": "#/components/schemas/KeyValue"}},
                "networks": {"type": "array", "items": {"type": "string"}, "example": ["bridge"]},
                "restart_policy": {"type": "string", "enum": ["no", "always", "unless-stopped", "on-failure"]},
                "autostart": {"type": "boolean", "example": true}
            }
        }),
    );

    schemas.insert(
        "ContainerPort".into(),
        json!({
            "type": "object",
            "required": ["private_port", "protocol"],
            "properties": {
                "ip": {"type": "string", "example": "0.0.0.0"},
                "private_port": {"type": "integer", "minimum": 1, "maximum": 65535, "example": 32400},
                "public_port": {"type": "integer", "minimum": 1, "maximum": 65535, "example": 32400},
                "protocol": {"type": "string", "enum": ["tcp", "udp", "sctp"], "example": "tcp"}
            }
        }),
    );

    schemas.insert(
        "ContainerStats".into(),
        json!({
            "type": "object",
            "required": ["id", "cpu_percent", "memory_usage", "memory_limit"],
            "properties": {
                "id": {"$ref": "#/components/schemas/ResourceId"},
                "cpu_percent": {"$ref": "#/components/schemas/Percentage"},
                "memory_usage": {"$ref": "#/components/schemas/ByteSize"},
                "memory_limit": {"$ref": "#/components/schemas/ByteSize"},
                "memory_percent": {"$ref": "#/components/schemas/Percentage"},
                "network_rx": {"$ref": "#/components/schemas/ByteSize"},
                "network_tx": {"$ref": "#/components/schemas/ByteSize"},
                "block_read": {"$ref": "#/components/schemas/ByteSize"},
                "block_write": {"$ref": "#/components/schemas/ByteSize"},
                "pids": {"type": "integer", "minimum": 0, "example": 27}
            }
        }),
    );

    schemas.insert(
        "ContainerCreateRequest".into(),
        json!({
            "type": "object",
            "required": ["name", "image"],
            "properties": {
                "name": {"type": "string", "pattern": "^[a-zA-Z0-9][a-zA-Z0-9_.-]+$", "example": "nginx"},
                "image": {"type": "string", "example": "nginx:1.25"},
                "command": {"type": "array", "items": {"type": "string"}},
                "env": {"type": "array", "items": {"$ref": "#/components/schemas/KeyValue"}},
                "ports": {"type": "array", "items": {"$ref": "#/components/schemas/ContainerPort"}},
                "volumes": {
                    "type": "array",
                    "items": {"type": "string"},
                    "description": "Bind mounts as host:container[:mode]",
                    "example": ["/mnt/user/appdata/nginx:/config:rw"]
                },
                "network": {"type": "string", "example": "bridge"},
                "restart_policy": {"type": "string", "enum": ["no", "always", "unless-stopped", "on-failure"], "default": "unless-stopped"},
                "memory_limit": {"$ref": "#/components/schemas/ByteSize"},
                "cpu_shares": {"type": "integer", "minimum": 2, "example": 1024},
                "privileged": {"type": "boolean", "default": false},
                "start": {"type": "boolean", "default": true, "description": "Start the container after creating it"}
            }
        }),
    );

    schemas.insert(
        "ImageInfo".into(),
        json!({
            "type": "object",
            "required": ["id", "tags", "size"],
            "properties": {
                "id": {"type": "string", "example": "sha256:5b0ab0e0f8c1"},
                "tags": {"type": "array", "items": {"type": "string"}, "example": ["nginx:1.25"]},
                "size": {"$ref": "#/components/schemas/ByteSize"},
                "created": {"$ref": "#/components/schemas/Timestamp"},
                "in_use": {"type": "boolean", "example": true},
                "update_available": {"type": "boolean", "example": false}
            }
        }),
    );

    schemas.insert(
        "DockerNetwork".into(),
        json!({
            "type": "object",
            "required": ["id", "name", "driver"],
            "properties": {
                "id": {"$ref": "#/components/schemas/ResourceId"},
                "name": {"type": "string", "example": "bridge"},
                "driver": {"type": "string", "enum": ["bridge", "host", "macvlan", "ipvlan", "overlay", "none"]},
                "subnet": {"type": "string", "example": "172.17.0.0/16"},
                "gateway": {"type": "string", "format": "ipv4", "example": "172.17.0.1"},
                "containers": {"type": "array", "items": {"$ref": "#/components/schemas/ResourceId"}}
            }
        }),
    );

    schemas.insert(
        "DockerVolume".into(),
        json!({
            "type": "object",
            "required": ["name", "driver", "mountpoint"],
            "properties": {
                "name": {"type": "string", "example": "pgdata"},
                "driver": {"type": "string", "example": "local"},
                "mountpoint": {"type": "string", "example": "/var/lib/docker/volumes/pgdata/_data"},
                "size": {"$ref": "#/components/schemas/ByteSize"},
                "created": {"$ref": "#/components/schemas/Timestamp"},
                "labels": {"type": "array", "items": {"$ref": "#/components/schemas/KeyValue"}}
            }
        }),
    );

    schemas
}
