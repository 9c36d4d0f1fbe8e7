//! Unit tests for casetrack-data
//!
//! ## Test Organization
//!
//! - `client.rs` - backend selection and fallback behavior
//! - `config.rs` - settings construction, validation, environment loading
//! - `error.rs` - error taxonomy accessors
//! - `mock_backend.rs` - mock store CRUD and auth stubs
//! - `query.rs` - chaining builder surface over a mock-backed client
//! - `stations.rs` - standalone station accessor
//!
//! HTTP tests against the live backend use a MockServer and are slow, so
//! they live in the top-level `tests/` directory instead.

mod client;
mod config;
mod stations;

use crate::store::Row;
use serde_json::Value;

/// Build a row from a `json!` object literal.
///
/// # Panics
///
/// Panics when the value is not a JSON object (test failure is appropriate).
pub(crate) fn row(value: Value) -> Row {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a JSON object, got: {other}"),
    }
}
