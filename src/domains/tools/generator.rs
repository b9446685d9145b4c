//! Randomized technical-data generation.
//!
//! Pure value generation for the `get-random-data` tool: each record carries
//! 10-15 fields of synthetic host metrics with documented ranges. The values
//! mean nothing; only the schema shape and the serialized byte count matter
//! to the pipeline tests consuming them.
//!
//! `memory_used_mb` is generated independently of `memory_total_mb` and the
//! two are not range-linked. That inconsistency is part of the generator's
//! contract and must not be "fixed".

use chrono::{SecondsFormat, Utc};
use rand::distributions::Alphanumeric;
use rand::{Rng, thread_rng};
use serde::Serialize;
use uuid::Uuid;

/// Fixed total memory reported by every record, in megabytes.
pub const MEMORY_TOTAL_MB: u32 = 32768;

/// One synthetic technical-data record.
#[derive(Debug, Clone, Serialize)]
pub struct TechnicalData {
    pub request_id: String,
    pub timestamp: String,
    pub server_info: HostInfo,
    pub metrics: HostMetrics,
    pub process_info: ProcessInfo,
    pub status: ServiceStatus,
    pub tags: Vec<String>,
    pub version: String,
}

/// Host identity block.
#[derive(Debug, Clone, Serialize)]
pub struct HostInfo {
    pub hostname: String,
    pub ip_address: String,
    pub mac_address: String,
    pub uptime_seconds: u64,
}

/// Host utilization block.
#[derive(Debug, Clone, Serialize)]
pub struct HostMetrics {
    pub cpu_usage_percent: f64,
    pub memory_used_mb: u32,
    pub memory_total_mb: u32,
    pub disk_io_read_mbps: f64,
    pub disk_io_write_mbps: f64,
    pub network_rx_mbps: f64,
    pub network_tx_mbps: f64,
}

/// Process statistics block.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessInfo {
    pub pid: u32,
    pub threads: u32,
    pub open_files: u32,
    pub connections: u32,
}

/// Synthetic service health states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Healthy,
    Degraded,
    Warning,
    Critical,
}

impl ServiceStatus {
    /// All states a record can report.
    pub const ALL: [ServiceStatus; 4] = [
        ServiceStatus::Healthy,
        ServiceStatus::Degraded,
        ServiceStatus::Warning,
        ServiceStatus::Critical,
    ];
}

/// Current time as an ISO-8601 UTC string with microsecond precision.
pub fn utc_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, false)
}

/// Generate a random alphanumeric string.
pub fn random_string(length: usize) -> String {
    thread_rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

/// Generate a random IPv4 address.
pub fn random_ip() -> String {
    let mut rng = thread_rng();
    format!(
        "{}.{}.{}.{}",
        rng.gen_range(1..=255),
        rng.gen_range(0..=255),
        rng.gen_range(0..=255),
        rng.gen_range(1..=254)
    )
}

/// Generate a random MAC address.
pub fn random_mac() -> String {
    let mut rng = thread_rng();
    (0..6)
        .map(|_| format!("{:02x}", rng.gen_range(0..=255)))
        .collect::<Vec<_>>()
        .join(":")
}

/// Generate one fully-populated record.
pub fn technical_data() -> TechnicalData {
    let mut rng = thread_rng();

    let tag_count = rng.gen_range(2..=5);

    TechnicalData {
        request_id: Uuid::new_v4().to_string(),
        timestamp: utc_timestamp(),
        server_info: HostInfo {
            hostname: format!("server-{}", random_string(6)),
            ip_address: random_ip(),
            mac_address: random_mac(),
            uptime_seconds: rng.gen_range(3600..=86400 * 30),
        },
        metrics: HostMetrics {
            cpu_usage_percent: round2(rng.gen_range(5.0..=95.0)),
            memory_used_mb: rng.gen_range(512..=16384),
            memory_total_mb: MEMORY_TOTAL_MB,
            disk_io_read_mbps: round2(rng.gen_range(0.1..=500.0)),
            disk_io_write_mbps: round2(rng.gen_range(0.1..=300.0)),
            network_rx_mbps: round2(rng.gen_range(0.01..=1000.0)),
            network_tx_mbps: round2(rng.gen_range(0.01..=500.0)),
        },
        process_info: ProcessInfo {
            pid: rng.gen_range(1000..=65535),
            threads: rng.gen_range(1..=64),
            open_files: rng.gen_range(10..=1000),
            connections: rng.gen_range(0..=500),
        },
        status: ServiceStatus::ALL[rng.gen_range(0..ServiceStatus::ALL.len())],
        tags: (0..tag_count).map(|_| random_string(4)).collect(),
        version: format!(
            "{}.{}.{}",
            rng.gen_range(1..=5),
            rng.gen_range(0..=20),
            rng.gen_range(0..=100)
        ),
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
