//! Fixture loader for carmatch profile, passenger, climate and catalog
//! scenarios shared by the integration tests of every crate.

use serde::de::DeserializeOwned;
use std::path::PathBuf;

/// Directory holding the fixture JSON files.
fn fixtures_root() -> PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    // From any member crate, walk up until the sibling fixtures crate shows up.
    while !path.join("test-fixtures").join("profiles").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
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

pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// Absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// Profile fixture by stem, e.g. `profile("complete")`.
pub fn profile<T: DeserializeOwned>(name: &str) -> T {
    load_fixture(&format!("profiles/{name}.json"))
}

/// Passenger fixture by stem.
pub fn passengers<T: DeserializeOwned>(name: &str) -> T {
    load_fixture(&format!("passengers/{name}.json"))
}

/// Climate fixture by stem.
pub fn climate<T: DeserializeOwned>(name: &str) -> T {
    load_fixture(&format!("climate/{name}.json"))
}

/// The sample catalog used by the ranking tests.
pub fn sample_catalog<T: DeserializeOwned>() -> T {
    load_fixture("catalog/sample_catalog.json")
}
