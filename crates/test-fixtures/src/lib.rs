//! Test fixture loader for riskflow reference networks.
//!
//! Fixtures live in `networks/` next to this crate's manifest and are
//! shared by integration tests and benches across the workspace.

use std::path::PathBuf;

use riskflow_core::models::RiskNetwork;
use serde::de::DeserializeOwned;

/// The 14-node LNG carrier grounding network.
pub const LNG_GROUNDING: &str = "lng_grounding.json";
/// A small network with one two-node feedback loop.
pub const FEEDBACK_LOOP: &str = "feedback_loop.json";

/// Root directory of the fixture networks.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("networks")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a fixture file as raw JSON Value.
pub fn load_fixture_value(relative_path: &str) -> serde_json::Value {
    load_fixture(relative_path)
}

/// Load a fixture as a typed network snapshot.
pub fn load_network(relative_path: &str) -> RiskNetwork {
    load_fixture(relative_path)
}

/// The LNG grounding reference network.
pub fn lng_grounding() -> RiskNetwork {
    load_network(LNG_GROUNDING)
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// List all JSON fixture files, sorted by name.
pub fn list_fixtures() -> Vec<PathBuf> {
    let dir = fixtures_root();
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            path.extension().is_some_and(|ext| ext == "json").then_some(path)
        })
        .collect();
    files.sort();
    files
}
