//! Test utilities for store/engine integration tests

use std::path::PathBuf;
use std::sync::Once;

use skylark_store::{Workbook, Worksheet};

static INIT_LOGGING: Once = Once::new();

/// Install a test-writer subscriber once per process
pub fn init_test_logging() {
    INIT_LOGGING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .with_test_writer()
            .try_init();
    });
}

/// Unique path in the system temp directory
pub fn temp_path(prefix: &str, extension: &str) -> PathBuf {
    std::env::temp_dir().join(format!("{}_{}.{}", prefix, uuid::Uuid::new_v4(), extension))
}

/// Removes the file, and any SQLite `-wal`/`-shm` sidecars, when dropped
pub struct TempFile(pub PathBuf);

impl TempFile {
    /// The file followed by its SQLite sidecar paths
    pub fn paths(&self) -> Vec<PathBuf> {
        let mut paths = vec![self.0.clone()];
        for suffix in ["-wal", "-shm"] {
            let mut sidecar = self.0.clone().into_os_string();
            sidecar.push(suffix);
            paths.push(PathBuf::from(sidecar));
        }
        paths
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        for path in self.paths() {
            std::fs::remove_file(path).ok();
        }
    }
}

/// Workbook carrying the worked examples:
/// - M1: Mumbai, Urgent, requires thermal
/// - P1: Mumbai, Available, thermal + mapping
/// - P2: Delhi, On Leave, no skills
/// - D1: Mumbai, Available
/// - D2: Mumbai, Maintenance
pub fn scenario_workbook() -> Workbook {
    Workbook::new()
        .with_worksheet(
            Worksheet::new(
                "pilot_roster",
                ["pilot_id", "name", "skills", "certifications", "location", "status"],
            )
            .with_row(["P2", "Neha", "", "", "Delhi", "On Leave"])
            .with_row(["P1", "Arjun", "thermal, mapping", "", "Mumbai", "Available"]),
        )
        .with_worksheet(
            Worksheet::new("drone_fleet", ["drone_id", "model", "capabilities", "location", "status"])
                .with_row(["D1", "DJI M300", "rgb, lidar", "Mumbai", "Available"])
                .with_row(["D2", "Mavic 3T", "thermal", "Mumbai", "Maintenance"]),
        )
        .with_worksheet(
            Worksheet::new(
                "missions",
                ["project_id", "client", "location", "required_skills", "required_certs", "priority"],
            )
            .with_row(["M1", "Client A", "Mumbai", "thermal", "", "Urgent"])
            .with_row(["M2", "Client B", "Delhi", "", "", "Low"]),
        )
}
