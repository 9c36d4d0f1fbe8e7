//! # casetrack-data
//!
//! Unified data-access client for the CaseTrack application, backed by either
//! a live Supabase project or an in-memory mock store.
//!
//! ## Key Features
//!
//! - **Backend Selection**: Live Supabase when credentials are present,
//!   seeded mock store otherwise - with automatic fallback on construction
//!   failure
//! - **Chaining Queries**: `from(table).select().eq(...)` surface shared by
//!   both backends
//! - **Fixture Data**: Development fixtures for users, police stations, and
//!   cases, mutable for the lifetime of the process
//! - **Stub Authentication**: Pass-through auth operations that resolve
//!   immediately on the mock path
//!
//! ## Example
//!
//! ```rust,no_run
//! use casetrack_data::{DataClient, SupabaseConfig};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = DataClient::connect(SupabaseConfig::from_env());
//!
//! let open_cases = client
//!     .from("cases")
//!     .select()
//!     .eq("status", "open")
//!     .fetch()
//!     .await?;
//! println!("{} open cases", open_cases.len());
//! # Ok(())
//! # }
//! ```

pub mod backends;
pub mod client;
pub mod config;
pub mod error;

// Logging utilities (re-exports tracing with log_* naming) - internal only
pub(crate) mod logging;

pub mod models;
pub mod query;
pub mod stations;
pub mod store;

#[cfg(test)]
pub mod tests;

// Re-export main types
pub use backends::{LiveBackend, MockBackend};
pub use client::DataClient;
pub use config::SupabaseConfig;
pub use error::{DataError, DataResult};
pub use models::{CaseRecord, StationRecord, UserRecord};
pub use query::{DeleteQuery, SelectQuery, TableQuery, UpdateQuery};
pub use stations::{mock_police_stations, StationPin};
pub use store::{Credentials, DataStore, Filter, Row, Session};
