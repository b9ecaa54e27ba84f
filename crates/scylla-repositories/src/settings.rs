use books_core::models::SchemaName;
use std::time::Duration;

pub const DEFAULT_REPLICATION_FACTOR: u32 = 3;
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_SCAN_PAGE_SIZE: i32 = 5_000;

/// Connection and schema settings. `scan_page_size`, `request_timeout_ms` and
/// `replication_factor` must be positive, callers loading them from user input check
/// that before connecting.
#[derive(Clone, Debug)]
pub struct ScyllaSettings {
    pub known_nodes: Vec<String>,
    pub keyspace: SchemaName,
    pub table: SchemaName,
    pub replication_factor: u32,
    pub request_timeout_ms: u64,
    pub scan_page_size: i32,
}

impl ScyllaSettings {
    pub fn new(known_nodes: Vec<String>, keyspace: SchemaName, table: SchemaName) -> Self {
        ScyllaSettings {
            known_nodes,
            keyspace,
            table,
            replication_factor: DEFAULT_REPLICATION_FACTOR,
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            scan_page_size: DEFAULT_SCAN_PAGE_SIZE,
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}
