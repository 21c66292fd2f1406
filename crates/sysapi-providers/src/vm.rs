//! Virtual machines managed through libvirt.

use serde_json::json;
use sysapi_core::SchemaMap;

pub fn schemas() -> SchemaMap {
    let mut schemas = SchemaMap::new();

    schemas.insert(
        "VmInfo".into(),
        json!({
            "type": "object",
            "required": ["id", "name", "state", "vcpus", "memory"],
            "properties": {
                "id": {"type": "string", "format": "uuid", "example": "5d7c0c5e-3f0a-4e52-9d7f-1f4b2a6e8c11"},
                "name": {"type": "string", "example": "windows-11"},
                "state": {
                    "type": "string",
                    "enum": ["running", "paused", "shutoff", "crashed", "suspended"],
                    "example": "running"
                },
                "vcpus": {"type": "integer", "minimum": 1, "example": 4},
                "memory": {"$ref": "#/components/schemas/ByteSize"},
                "os_type": {"type": "string", "example": "windows"},
                "autostart": {"type": "boolean", "example": false},
                "disks": {"type": "array", "items": {"$ref": "#/components/schemas/VmDisk"}},
                "vnc_port": {"type": "integer", "minimum": 5900, "example": 5900}
            }
        }),
    );

    schemas.insert(
        "VmCreateRequest".into(),
        json!({
            "type": "object",
            "required": ["name", "vcpus", "memory_mb"],
            "properties": {
                "name": {"type": "string", "minLength": 1, "maxLength": 64, "example": "ubuntu-server"},
                "vcpus": {"type": "integer", "minimum": 1, "maximum": 128, "example": 2},
                "memory_mb": {"type": "integer", "minimum": 256, "example": 4096},
                "os_type": {"type": "string", "enum": ["linux", "windows", "other"], "default": "linux"},
                "iso_path": {"type": "string", "example": "/mnt/user/isos/ubuntu-24.04.iso"},
                "disks": {"type": "array", "items": {"$ref": "#/components/schemas/VmDisk"}},
                "network_bridge": {"type": "string", "example": "br0"},
                "autostart": {"type": "boolean", "default": false}
            }
        }),
    );

    schemas.insert(
        "VmStats".into(),
        json!({
            "type": "object",
            "required": ["id", "cpu_percent", "memory_used"],
            "properties": {
                "id": {"type": "string", "format": "uuid"},
                "cpu_percent": {"$ref": "#/components/schemas/Percentage"},
                "memory_used": {"$ref": "#/components/schemas/ByteSize"},
                "disk_read": {"$ref": "#/components/schemas/ByteSize"},
                "disk_write": {"$ref": "#/components/schemas/ByteSize"},
                "network_rx": {"$ref": "#/components/schemas/ByteSize"},
                "network_tx": {"$ref": "#/components/schemas/ByteSize"},
                "uptime_seconds": {"type": "integer", "minimum": 0, "example": 7200}
            }
        }),
    );

    schemas.insert(
        "VmSnapshot".into(),
        json!({
            "type": "object",
            "required": ["name", "vm_id", "created"],
            "properties": {
                "name": {"type": "string", "example": "before-upgrade"},
                "vm_id": {"type": "string", "format": "uuid"},
                "description": {"type": "string"},
                "created": {"$ref": "#/components/schemas/Timestamp"},
                "state": {"type": "string", "enum": ["running", "shutoff"], "description": "VM state captured by the snapshot"},
                "parent": {"type": "string", "description": "Name of the parent snapshot"}
            }
        }),
    );

    schemas.insert(
        "VmDisk".into(),
        json!({
            "type": "object",
            "required": ["path", "bus"],
            "properties": {
                "path": {"type": "string", "example": "/mnt/user/domains/ubuntu/vdisk1.img"},
                "bus": {"type": "string", "enum": ["virtio", "sata", "scsi", "ide", "usb"], "default": "virtio"},
                "format": {"type": "string", "enum": ["raw", "qcow2"], "example": "qcow2"},
                "size": {"$ref": "#/components/schemas/ByteSize"},
                "boot_order": {"type": "integer", "minimum": 1, "example": 1}
            }
        }),
    );

    schemas
}
