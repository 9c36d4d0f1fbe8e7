//! The `DataStore` trait and the value types shared by both backends.
//!
//! `DataStore` is the seam between the unified client and the concrete
//! backends: every operation the application performs - table reads and
//! writes plus the auth pass-throughs - goes through this trait.

use crate::error::DataResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single table row: a flat JSON object keyed by column name.
///
/// Rows carry no schema; typed record shapes in [`crate::models`] can be
/// serialized onto and deserialized from rows as needed.
pub type Row = serde_json::Map<String, Value>;

/// Equality filter on one column.
///
/// The only filter the surface supports; queries carry at most one.
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    /// Column to compare.
    pub column: String,
    /// Value the column must equal.
    pub value: Value,
}

impl Filter {
    /// Equality filter on `column`.
    pub fn eq(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            column: column.into(),
            value: value.into(),
        }
    }

    /// Whether `row` satisfies the filter.
    pub fn matches(&self, row: &Row) -> bool {
        row.get(&self.column) == Some(&self.value)
    }
}

/// Email/password credentials for the auth pass-throughs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// An authenticated session as reported by the backend.
///
/// The mock backend never mints sessions; sign-up and sign-in resolve to
/// `None` there.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    pub access_token: String,
    pub token_type: String,
    /// The backend's user object, when one was included.
    pub user: Option<Row>,
}

/// Contract implemented by every backend.
///
/// All operations resolve without real I/O on the mock path; the live path
/// performs one HTTP round-trip per call. Implementations are `Send + Sync`
/// so a single client can be shared by reference.
#[async_trait]
pub trait DataStore: Send + Sync {
    /// Rows of `table` matching the optional equality filter.
    ///
    /// An unknown table yields an empty list, not an error.
    async fn select(&self, table: &str, filter: Option<&Filter>) -> DataResult<Vec<Row>>;

    /// First row of `table` matching the filter, or `None`.
    ///
    /// A missing row is not an error here.
    async fn select_single(&self, table: &str, filter: Option<&Filter>)
        -> DataResult<Option<Row>>;

    /// Append `row` to `table` and return the stored row.
    async fn insert(&self, table: &str, row: Row) -> DataResult<Row>;

    /// Merge `patch` into the first row matching `filter` and return the
    /// updated row.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::NotFound`](crate::error::DataError::NotFound)
    /// when nothing matches; the data is left unchanged.
    async fn update(&self, table: &str, patch: Row, filter: &Filter) -> DataResult<Row>;

    /// Remove the first row matching `filter`.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::NotFound`](crate::error::DataError::NotFound)
    /// when nothing matches.
    async fn delete(&self, table: &str, filter: &Filter) -> DataResult<()>;

    /// The backend's current user object, if any.
    async fn current_user(&self) -> DataResult<Option<Row>>;

    /// Register a new account. `None` means no session was established.
    async fn sign_up(&self, credentials: &Credentials) -> DataResult<Option<Session>>;

    /// Authenticate with email and password.
    async fn sign_in(&self, credentials: &Credentials) -> DataResult<Option<Session>>;

    /// End the current session.
    async fn sign_out(&self) -> DataResult<()>;

    /// Backend name for logging and diagnostics.
    fn backend_name(&self) -> &'static str;
}
