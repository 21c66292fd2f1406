//! Disks, the parity array, pools, shares, and SMART data.

use serde_json::json;
use sysapi_core::SchemaMap;

pub fn schemas() -> SchemaMap {
    let mut schemas = SchemaMap::new();

    schemas.insert(
        "DiskInfo".into(),
        json!({
            "type": "object",
            "required": ["device", "size", "role"],
            "properties": {
                "device": {"type": "string", "example": "/dev/sdb"},
                "serial": {"type": "string", "example": "WD-WCC4N1234567"},
                "model": {"type": "string", "example": "WDC WD40EFRX"},
                "size": {"$ref": "#/components/schemas/ByteSize"},
                "used": {"$ref": "#/components/schemas/ByteSize"},
                "filesystem": {"type": "string", "enum": ["xfs", "btrfs", "zfs", "ext4", "ntfs", "vfat"], "example": "xfs"},
                "role": {"type": "string", "enum": ["parity", "data", "cache", "pool", "unassigned"], "example": "data"},
                "rotational": {"type": "boolean", "example": true},
                "spun_down": {"type": "boolean", "example": false},
                "temperature_celsius": {"type": "integer", "example": 34},
                "health": {"$ref": "#/components/schemas/HealthStatus"}
            }
        }),
    );

    schemas.insert(
        "ArrayStatus".into(),
        json!({
            "type": "object",
            "required": ["state", "disks"],
            "properties": {
                "state": {"type": "string", "enum": ["started", "stopped", "starting", "stopping"], "example": "started"},
                "protection": {"type": "string", "enum": ["none", "single_parity", "dual_parity"], "example": "single_parity"},
                "capacity": {"$ref": "#/components/schemas/ByteSize"},
                "used": {"$ref": "#/components/schemas/ByteSize"},
                "disks": {"type": "array", "items": {"$ref": "#/components/schemas/DiskInfo"}},
                "parity_check": {
                    "type": "object",
                    "properties": {
                        "running": {"type": "boolean"},
                        "progress": {"$ref": "#/components/schemas/Percentage"},
                        "errors": {"type": "integer", "minimum": 0},
                        "last_completed": {"$ref": "#/components/schemas/Timestamp"}
                    }
                }
            }
        }),
    );

    schemas.insert(
        "ShareInfo".into(),
        json!({
            "type": "object",
            "required": ["name", "path"],
            "properties": {
                "name": {"type": "string", "example": "media"},
                "path": {"type": "string", "example": "/mnt/user/media"},
                "comment": {"type": "string"},
                "used": {"$ref": "#/components/schemas/ByteSize"},
                "free": {"$ref": "#/components/schemas/ByteSize"},
                "smb_enabled": {"type": "boolean", "example": true},
                "nfs_enabled": {"type": "boolean", "example": false},
                "security": {"type": "string", "enum": ["public", "secure", "private"], "example": "private"},
                "cache_mode": {"type": "string", "enum": ["no", "yes", "only", "prefer"]}
            }
        }),
    );

    schemas.insert(
        "SmartData".into(),
        json!({
            "type": "object",
            "required": ["device", "passed"],
            "properties": {
                "device": {"type": "string", "example": "/dev/sdb"},
                "passed": {"type": "boolean", "description": "Overall SMART self-assessment", "example": true},
                "power_on_hours": {"type": "integer", "minimum": 0, "example": 21873},
                "reallocated_sectors": {"type": "integer", "minimum": 0, "example": 0},
                "pending_sectors": {"type": "integer", "minimum": 0, "example": 0},
                "temperature_celsius": {"type": "integer", "example": 34},
                "attributes": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "required": ["id", "name", "value"],
                        "properties": {
                            "id": {"type": "integer", "minimum": 1, "maximum": 255},
                            "name": {"type": "string", "example": "Reallocated_Sector_Ct"},
                            "value": {"type": "integer"},
                            "worst": {"type": "integer"},
                            "threshold": {"type": "integer"},
                            "raw": {"type": "string"}
                        }
                    }
                }
            }
        }),
    );

    schemas.insert(
        "PoolInfo".into(),
        json!({
            "type": "object",
            "required": ["name", "filesystem", "devices"],
            "properties": {
                "name": {"type": "string", "example": "cache"},
                "filesystem": {"type": "string", "enum": ["btrfs", "zfs", "xfs"], "example": "btrfs"},
                "raid_level": {"type": "string", "example": "raid1"},
                "devices": {"type": "array", "items": {"type": "string"}, "example": ["/dev/nvme0n1", "/dev/nvme1n1"]},
                "size": {"$ref": "#/components/schemas/ByteSize"},
                "used": {"$ref": "#/components/schemas/ByteSize"},
                "health": {"$ref": "#/components/schemas/HealthStatus"}
            }
        }),
    );

    schemas.insert(
        "MountPoint".into(),
        json!({
            "type": "object",
            "required": ["path", "device", "filesystem"],
            "properties": {
                "path": {"type": "string", "example": "/mnt/disk1"},
                "device": {"type": "string", "example": "/dev/md1"},
                "filesystem": {"type": "string", "example": "xfs"},
                "options": {"type": "array", "items": {"type": "string"}, "example": ["rw", "noatime"]},
                "total": {"$ref": "#/components/schemas/ByteSize"},
                "free": {"$ref": "#/components/schemas/ByteSize"},
                "read_only": {"type": "boolean", "example": false}
            }
        }),
    );

    schemas
}
