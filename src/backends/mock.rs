//! In-memory mock backend seeded with development fixtures.
//!
//! Stands in for the live backend when Supabase credentials are absent, so
//! local development works against the same query surface. Rows live only
//! for the lifetime of the process.

use crate::error::{DataError, DataResult};
use crate::logging::log_debug;
use crate::models::{tables, CaseRecord, StationRecord, UserRecord};
use crate::store::{Credentials, DataStore, Filter, Row, Session};
use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

type Tables = HashMap<String, Vec<Row>>;

/// Mock backend over an owned, lock-guarded fixture store.
#[derive(Debug)]
pub struct MockBackend {
    tables: RwLock<Tables>,
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MockBackend {
    /// Backend seeded with the development fixture rows.
    pub fn new() -> Self {
        log_debug!(backend = "mock", "Mock backend initialized with fixtures");
        Self {
            tables: RwLock::new(seed_tables()),
        }
    }

    /// Backend holding no rows at all.
    pub fn empty() -> Self {
        Self {
            tables: RwLock::new(Tables::new()),
        }
    }

    // Lock poisoning carries no invariant here; recover the guard.
    fn read(&self) -> RwLockReadGuard<'_, Tables> {
        self.tables.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Tables> {
        self.tables.write().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl DataStore for MockBackend {
    async fn select(&self, table: &str, filter: Option<&Filter>) -> DataResult<Vec<Row>> {
        let guard = self.read();
        let rows = guard.get(table).map(Vec::as_slice).unwrap_or_default();
        Ok(match filter {
            Some(f) => rows.iter().filter(|r| f.matches(r)).cloned().collect(),
            None => rows.to_vec(),
        })
    }

    async fn select_single(
        &self,
        table: &str,
        filter: Option<&Filter>,
    ) -> DataResult<Option<Row>> {
        let guard = self.read();
        let rows = guard.get(table).map(Vec::as_slice).unwrap_or_default();
        Ok(rows
            .iter()
            .find(|r| filter.map(|f| f.matches(r)).unwrap_or(true))
            .cloned())
    }

    async fn insert(&self, table: &str, mut row: Row) -> DataResult<Row> {
        // Generated ids follow the source convention: "mock-<unix millis>".
        if !row.contains_key("id") {
            row.insert(
                "id".to_string(),
                Value::String(format!("mock-{}", Utc::now().timestamp_millis())),
            );
        }

        let mut guard = self.write();
        guard.entry(table.to_string()).or_default().push(row.clone());

        log_debug!(backend = "mock", table = %table, "Row inserted");
        Ok(row)
    }

    async fn update(&self, table: &str, patch: Row, filter: &Filter) -> DataResult<Row> {
        let mut guard = self.write();
        let rows = guard
            .get_mut(table)
            .ok_or_else(|| DataError::not_found(table))?;
        let row = rows
            .iter_mut()
            .find(|r| filter.matches(r))
            .ok_or_else(|| DataError::not_found(table))?;

        for (column, value) in patch {
            row.insert(column, value);
        }

        log_debug!(backend = "mock", table = %table, column = %filter.column, "Row updated");
        Ok(row.clone())
    }

    async fn delete(&self, table: &str, filter: &Filter) -> DataResult<()> {
        let mut guard = self.write();
        let rows = guard
            .get_mut(table)
            .ok_or_else(|| DataError::not_found(table))?;
        let index = rows
            .iter()
            .position(|r| filter.matches(r))
            .ok_or_else(|| DataError::not_found(table))?;

        rows.remove(index);

        log_debug!(backend = "mock", table = %table, column = %filter.column, "Row deleted");
        Ok(())
    }

    /// Always the first seeded user, reflecting any in-place mutation.
    async fn current_user(&self) -> DataResult<Option<Row>> {
        let guard = self.read();
        Ok(guard
            .get(tables::USERS)
            .and_then(|rows| rows.first())
            .cloned())
    }

    async fn sign_up(&self, _credentials: &Credentials) -> DataResult<Option<Session>> {
        Ok(None)
    }

    async fn sign_in(&self, _credentials: &Credentials) -> DataResult<Option<Session>> {
        Ok(None)
    }

    async fn sign_out(&self) -> DataResult<()> {
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "mock"
    }
}

/// Admin user fixture.
pub(crate) fn fixture_admin() -> UserRecord {
    UserRecord {
        id: "mock-user-1".to_string(),
        clerk_id: "clerk-user-1".to_string(),
        email: "admin@police.go.ke".to_string(),
        full_name: "Admin User".to_string(),
        role: "admin".to_string(),
        station_id: "station-1".to_string(),
        badge_number: "ADMIN001".to_string(),
    }
}

/// Central station fixture.
pub(crate) fn fixture_station() -> StationRecord {
    StationRecord {
        id: "station-1".to_string(),
        name: "Central Police Station".to_string(),
        location: "Nairobi CBD".to_string(),
        jurisdiction: "Nairobi Central".to_string(),
        contact_number: "+254700000000".to_string(),
    }
}

/// Sample open case fixture.
pub(crate) fn fixture_case() -> CaseRecord {
    CaseRecord {
        id: "case-1".to_string(),
        title: "Sample Case".to_string(),
        description: "Test case description".to_string(),
        status: "open".to_string(),
        reporter_id: "mock-user-1".to_string(),
        assigned_officer_id: "mock-user-1".to_string(),
        station_id: "station-1".to_string(),
    }
}

fn seed_tables() -> Tables {
    let mut seeded = Tables::new();
    seeded.insert(tables::USERS.to_string(), vec![as_row(&fixture_admin())]);
    seeded.insert(
        tables::POLICE_STATIONS.to_string(),
        vec![as_row(&fixture_station())],
    );
    seeded.insert(tables::CASES.to_string(), vec![as_row(&fixture_case())]);
    seeded
}

// Fixture records always serialize to JSON objects; anything else would be
// a bug in the record shapes, surfaced as an empty row.
fn as_row<T: serde::Serialize>(record: &T) -> Row {
    match serde_json::to_value(record) {
        Ok(Value::Object(map)) => map,
        _ => Row::new(),
    }
}
