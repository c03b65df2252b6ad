//! Response DTOs for the key-value service API
//!
//! Defines the structure of outgoing HTTP response bodies.

use std::time::Duration;

use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use serde_json::Value;
use sysinfo::{Pid, System};

/// Response body for GET and PUT on /kv/:key
#[derive(Debug, Clone, Serialize)]
pub struct EntryResponse {
    /// The requested key
    pub key: String,
    /// The stored value
    pub value: Value,
}

impl EntryResponse {
    /// Creates a new EntryResponse
    pub fn new(key: impl Into<String>, value: Value) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

/// Response body for the DELETE operation (DELETE /kv/:key)
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    /// The key that was deleted
    pub deleted: String,
}

impl DeleteResponse {
    /// Creates a new DeleteResponse
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            deleted: key.into(),
        }
    }
}

/// Best-effort process memory figures, in bytes.
///
/// Zero when the platform cannot report a figure.
#[derive(Debug, Clone, Serialize)]
pub struct MemoryUsage {
    /// Resident set size
    pub rss: u64,
    /// Virtual memory size
    pub vms: u64,
}

/// Response body for the health endpoint (GET /healthz)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status, always "ok" when the process can respond
    pub status: String,
    /// Current UTC timestamp in ISO 8601 format
    pub timestamp: String,
    /// Seconds since process start
    pub uptime: f64,
    /// Process memory usage
    pub memory: MemoryUsage,
    /// 1/5/15-minute system load averages (zeros where unavailable)
    pub loadavg: [f64; 3],
    /// The port the server is listening on
    pub port: u16,
}

impl HealthResponse {
    /// Captures a point-in-time snapshot of process vitals.
    pub fn capture(port: u16, uptime: Duration) -> Self {
        let load = System::load_average();

        Self {
            status: "ok".to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            uptime: uptime.as_secs_f64(),
            memory: Self::process_memory(),
            loadavg: [load.one, load.five, load.fifteen],
            port,
        }
    }

    /// Reads this process's memory figures, falling back to zeros where the
    /// platform reports nothing.
    fn process_memory() -> MemoryUsage {
        let mut system = System::new();
        let pid = Pid::from_u32(std::process::id());
        if system.refresh_process(pid) {
            if let Some(process) = system.process(pid) {
                return MemoryUsage {
                    rss: process.memory(),
                    vms: process.virtual_memory(),
                };
            }
        }
        MemoryUsage { rss: 0, vms: 0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_entry_response_serialize() {
        let resp = EntryResponse::new("color", json!("blue"));
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json, json!({"key": "color", "value": "blue"}));
    }

    #[test]
    fn test_entry_response_preserves_value_shape() {
        let resp = EntryResponse::new("config", json!({"retries": 3, "tags": ["a"]}));
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["value"], json!({"retries": 3, "tags": ["a"]}));
    }

    #[test]
    fn test_delete_response_serialize() {
        let resp = DeleteResponse::new("color");
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json, json!({"deleted": "color"}));
    }

    #[test]
    fn test_health_response_fields() {
        let resp = HealthResponse::capture(3000, Duration::from_millis(1500));
        assert_eq!(resp.status, "ok");
        assert_eq!(resp.port, 3000);
        assert!((resp.uptime - 1.5).abs() < f64::EPSILON);

        let json = serde_json::to_value(&resp).unwrap();
        for field in ["status", "timestamp", "uptime", "memory", "loadavg", "port"] {
            assert!(json.get(field).is_some(), "missing field {field}");
        }
        assert_eq!(json["loadavg"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_health_timestamp_is_utc_iso8601() {
        let resp = HealthResponse::capture(3000, Duration::ZERO);
        assert!(resp.timestamp.ends_with('Z'));
        assert!(chrono::DateTime::parse_from_rfc3339(&resp.timestamp).is_ok());
    }
}
