//! Chaining query surface over a [`DataClient`].
//!
//! Mirrors the backend-as-a-service builder shape:
//! `client.from("cases").select().eq("status", "open").fetch()`. Reads
//! terminate with [`SelectQuery::fetch`] or [`SelectQuery::single`]; update
//! and delete execute when their `eq` is applied.

use crate::client::DataClient;
use crate::error::DataResult;
use crate::store::{DataStore, Filter, Row};
use serde_json::Value;

/// Entry point of the chain, scoped to one table.
pub struct TableQuery<'a> {
    client: &'a DataClient,
    table: String,
}

impl<'a> TableQuery<'a> {
    pub(crate) fn new(client: &'a DataClient, table: String) -> Self {
        Self { client, table }
    }

    /// Begin a read.
    pub fn select(self) -> SelectQuery<'a> {
        SelectQuery {
            client: self.client,
            table: self.table,
            filter: None,
        }
    }

    /// Append a row and return the stored row.
    pub async fn insert(self, row: Row) -> DataResult<Row> {
        self.client.insert(&self.table, row).await
    }

    /// Begin an update carrying `patch`; executes on [`UpdateQuery::eq`].
    pub fn update(self, patch: Row) -> UpdateQuery<'a> {
        UpdateQuery {
            client: self.client,
            table: self.table,
            patch,
        }
    }

    /// Begin a delete; executes on [`DeleteQuery::eq`].
    pub fn delete(self) -> DeleteQuery<'a> {
        DeleteQuery {
            client: self.client,
            table: self.table,
        }
    }
}

/// A read, optionally narrowed by one equality filter.
pub struct SelectQuery<'a> {
    client: &'a DataClient,
    table: String,
    filter: Option<Filter>,
}

impl SelectQuery<'_> {
    /// Narrow to rows where `column` equals `value`.
    ///
    /// Only one filter is supported; a later call replaces the earlier one.
    pub fn eq(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filter = Some(Filter::eq(column, value));
        self
    }

    /// All matching rows; every row of the table when unfiltered.
    pub async fn fetch(self) -> DataResult<Vec<Row>> {
        self.client.select(&self.table, self.filter.as_ref()).await
    }

    /// The first matching row, or `None`.
    pub async fn single(self) -> DataResult<Option<Row>> {
        self.client
            .select_single(&self.table, self.filter.as_ref())
            .await
    }
}

/// A pending update; `eq` applies the filter and executes.
pub struct UpdateQuery<'a> {
    client: &'a DataClient,
    table: String,
    patch: Row,
}

impl UpdateQuery<'_> {
    /// Merge the patch into the first row where `column` equals `value`.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::NotFound`](crate::error::DataError::NotFound)
    /// when nothing matches.
    pub async fn eq(self, column: impl Into<String>, value: impl Into<Value>) -> DataResult<Row> {
        self.client
            .update(&self.table, self.patch, &Filter::eq(column, value))
            .await
    }
}

/// A pending delete; `eq` applies the filter and executes.
pub struct DeleteQuery<'a> {
    client: &'a DataClient,
    table: String,
}

impl DeleteQuery<'_> {
    /// Remove the first row where `column` equals `value`.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::NotFound`](crate::error::DataError::NotFound)
    /// when nothing matches.
    pub async fn eq(self, column: impl Into<String>, value: impl Into<Value>) -> DataResult<()> {
        self.client
            .delete(&self.table, &Filter::eq(column, value))
            .await
    }
}
