//! Namespace resolution contract tests against the public API.

use docindex::compat::{resolve, upgrade_envelope};
use serde_json::json;

#[test]
fn test_primary_path_resolves_to_current_location() {
    assert_eq!(
        resolve(&["docindex", "schema", "Document"]),
        Some(&["docindex", "schemas", "document", "Document"][..])
    );
}

#[test]
fn test_legacy_and_cross_runtime_fallbacks() {
    // Flat pre-release path, only in the legacy table.
    assert!(resolve(&["docindex", "Document"]).is_some());
    // Shortened path written by the JS sibling, only in the cross-runtime table.
    assert!(resolve(&["docindex", "schemas", "Document"]).is_some());
}

#[test]
fn test_unmapped_path_is_used_unchanged() {
    let path = ["docindex", "schemas", "document", "Document"];
    // Current paths are not in any table; callers keep them as-is.
    assert_eq!(resolve(&path), None);
}

#[test]
fn test_envelope_upgrade_round_trips_through_serde() {
    let persisted = json!({
        "v": 1,
        "id": ["docindex", "schema", "Document"],
        "kwargs": {"page_content": "cats are mammals", "metadata": {}}
    });

    let upgraded = upgrade_envelope(persisted);
    assert_eq!(
        upgraded["id"],
        json!(["docindex", "schemas", "document", "Document"])
    );

    let document: docindex::schemas::Document =
        serde_json::from_value(upgraded["kwargs"].clone()).unwrap();
    assert_eq!(document.page_content, "cats are mammals");
}
