//! Test helper utilities for casetrack-data integration tests
//!
//! Shared fixtures for the HTTP tests that drive the live backend against a
//! wiremock server.

// Allow dead code in test utilities - functions are used across different test files
#![allow(dead_code)]

use casetrack_data::{LiveBackend, Row, SupabaseConfig};
use serde_json::Value;
use wiremock::MockServer;

/// Anon key used by every mocked request.
pub const TEST_ANON_KEY: &str = "test-anon-key";

/// Live backend pointed at the given mock server.
///
/// # Panics
///
/// Panics if construction fails (test failure is appropriate).
pub fn test_backend(server: &MockServer) -> LiveBackend {
    let config = SupabaseConfig::new(server.uri(), TEST_ANON_KEY);
    LiveBackend::new(&config).expect("live backend should build against the mock server")
}

/// Build a row from a `json!` object literal.
///
/// # Panics
///
/// Panics when the value is not a JSON object.
pub fn row(value: Value) -> Row {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a JSON object, got: {other}"),
    }
}

/// A representative case row.
pub fn case_row(id: &str, status: &str) -> Row {
    row(serde_json::json!({
        "id": id,
        "title": "Sample Case",
        "description": "Test case description",
        "status": status,
        "reporter_id": "mock-user-1",
        "assigned_officer_id": "mock-user-1",
        "station_id": "station-1"
    }))
}
