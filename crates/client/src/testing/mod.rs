//! Testing utilities for Grafana client tests.
//!
//! Available when running tests or when the `test-utils` feature is enabled.
//!
//! # Example
//! ```ignore
//! use grafana_client::testing::{load_fixture, write_dashboard};
//!
//! let health = load_fixture("health/ok.json");
//! let path = write_dashboard(dir.path(), "a.json", &load_fixture("dashboards/node_exporter.json"));
//! ```

use std::path::{Path, PathBuf};

/// Load a JSON fixture file from the fixtures directory.
///
/// # Panics
/// - If the fixture file cannot be read
/// - If the file content is not valid JSON
pub fn load_fixture(fixture_path: &str) -> serde_json::Value {
    let full_path = fixture_dir().join(fixture_path);
    let content = std::fs::read_to_string(&full_path)
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", full_path.display()));
    serde_json::from_str(&content).expect("Invalid JSON in fixture")
}

/// Write a dashboard document into `dir` and return its path.
///
/// # Panics
/// If the file cannot be written.
pub fn write_dashboard(dir: &Path, name: &str, document: &serde_json::Value) -> PathBuf {
    let path = dir.join(name);
    let content = serde_json::to_string_pretty(document).expect("dashboard serializes");
    std::fs::write(&path, content)
        .unwrap_or_else(|_| panic!("Failed to write dashboard: {}", path.display()));
    path
}

fn fixture_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}
