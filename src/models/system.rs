//! System health payloads (`GET /admin/system-status`).

use serde::{Deserialize, Serialize};

/// Server process memory usage, pre-formatted by the API.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryUsage {
    #[serde(default)]
    pub rss: String,
    #[serde(default)]
    pub heap_total: String,
    #[serde(default)]
    pub heap_used: String,
    #[serde(default)]
    pub external: String,
    #[serde(default)]
    pub array_buffers: String,
}

/// API server process status.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerStatus {
    #[serde(default)]
    pub status: String,
    /// Uptime in seconds.
    #[serde(default)]
    pub uptime: f64,
    #[serde(default)]
    pub uptime_formatted: String,
    #[serde(default)]
    pub memory: MemoryUsage,
}

/// Size statistics for the backing database.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseStats {
    #[serde(default)]
    pub data_size: u64,
    #[serde(default)]
    pub storage_size: u64,
    #[serde(default)]
    pub index_size: u64,
    #[serde(default)]
    pub objects: u64,
}

/// One collection inside the backing database.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CollectionInfo {
    pub name: String,
    #[serde(default)]
    pub count: u64,
}

/// Backing database status.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DatabaseStatus {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub host: String,
    #[serde(default)]
    pub stats: DatabaseStats,
    #[serde(default)]
    pub collections: Vec<CollectionInfo>,
}

/// Boolean health checks evaluated server-side.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthChecks {
    #[serde(default)]
    pub memory: bool,
    #[serde(default)]
    pub uptime: bool,
}

/// Health summary wrapper.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Health {
    #[serde(default)]
    pub checks: HealthChecks,
}

/// Payload of `GET /admin/system-status` (the `system` field of the
/// response envelope). Cached verbatim under `system_status`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SystemInfo {
    #[serde(default)]
    pub server: ServerStatus,
    #[serde(default)]
    pub database: DatabaseStatus,
    #[serde(default)]
    pub health: Health,
}

impl SystemInfo {
    /// Whether the backing database reports itself operational.
    pub fn database_operational(&self) -> bool {
        self.database.status == "operational"
    }

    /// Uptime in whole minutes, for compact display.
    pub fn uptime_minutes(&self) -> u64 {
        (self.server.uptime / 60.0) as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_wire_format() {
        let info: SystemInfo = serde_json::from_value(serde_json::json!({
            "server": {
                "status": "running",
                "uptime": 3723.4,
                "uptimeFormatted": "1h 2m",
                "memory": { "rss": "120 MB", "heapUsed": "64 MB" }
            },
            "database": {
                "status": "operational",
                "host": "db.internal",
                "stats": { "dataSize": 1048576, "objects": 4200 },
                "collections": [ { "name": "sellers", "count": 120 } ]
            },
            "health": { "checks": { "memory": true, "uptime": true } }
        }))
        .expect("system info should deserialize");
        assert!(info.database_operational());
        assert_eq!(info.uptime_minutes(), 62);
        assert_eq!(info.database.collections[0].name, "sellers");
        assert_eq!(info.server.memory.heap_used, "64 MB");
    }

    #[test]
    fn test_defaults_for_partial_payload() {
        let info: SystemInfo =
            serde_json::from_value(serde_json::json!({})).expect("empty object should deserialize");
        assert!(!info.database_operational());
        assert_eq!(info.uptime_minutes(), 0);
    }
}
