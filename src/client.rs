use crate::backends::{LiveBackend, MockBackend};
use crate::config::SupabaseConfig;
use crate::error::DataResult;
use crate::logging::{log_debug, log_error, log_warn};
use crate::query::TableQuery;
use crate::store::{Credentials, DataStore, Filter, Row, Session};
use async_trait::async_trait;

/// Internal backend enum for DataClient
enum Backend {
    Supabase(LiveBackend),
    Mock(MockBackend),
}

/// Unified data-access client that implements DataStore
/// This is the primary interface the application consumes
pub struct DataClient {
    backend: Backend,
}

impl DataClient {
    /// Select a backend from connection settings. Never fails: any problem
    /// with the live path degrades to the mock backend.
    ///
    /// - Missing URL or anon key: warn and use the mock backend.
    /// - Live construction failure: log the error and use the mock backend.
    pub fn connect(config: SupabaseConfig) -> Self {
        if !config.has_credentials() {
            log_warn!("Supabase credentials not found, using mock client");
            return Self::mock();
        }

        match LiveBackend::new(&config) {
            Ok(live) => {
                log_debug!(backend = "supabase", "DataClient connected");
                Self {
                    backend: Backend::Supabase(live),
                }
            }
            Err(error) => {
                log_error!(error = %error, "Error creating Supabase client, using mock client");
                Self::mock()
            }
        }
    }

    /// Select a backend using environment variables for configuration.
    pub fn from_env() -> Self {
        Self::connect(SupabaseConfig::from_env())
    }

    /// Client over the seeded mock backend, regardless of configuration.
    pub fn mock() -> Self {
        Self {
            backend: Backend::Mock(MockBackend::new()),
        }
    }

    /// Start a chaining query against `table`.
    pub fn from(&self, table: impl Into<String>) -> TableQuery<'_> {
        TableQuery::new(self, table.into())
    }
}

/// Implement DataStore for DataClient
/// Just delegates to the selected backend
#[async_trait]
impl DataStore for DataClient {
    async fn select(&self, table: &str, filter: Option<&Filter>) -> DataResult<Vec<Row>> {
        match &self.backend {
            Backend::Supabase(b) => b.select(table, filter).await,
            Backend::Mock(b) => b.select(table, filter).await,
        }
    }

    async fn select_single(
        &self,
        table: &str,
        filter: Option<&Filter>,
    ) -> DataResult<Option<Row>> {
        match &self.backend {
            Backend::Supabase(b) => b.select_single(table, filter).await,
            Backend::Mock(b) => b.select_single(table, filter).await,
        }
    }

    async fn insert(&self, table: &str, row: Row) -> DataResult<Row> {
        match &self.backend {
            Backend::Supabase(b) => b.insert(table, row).await,
            Backend::Mock(b) => b.insert(table, row).await,
        }
    }

    async fn update(&self, table: &str, patch: Row, filter: &Filter) -> DataResult<Row> {
        match &self.backend {
            Backend::Supabase(b) => b.update(table, patch, filter).await,
            Backend::Mock(b) => b.update(table, patch, filter).await,
        }
    }

    async fn delete(&self, table: &str, filter: &Filter) -> DataResult<()> {
        match &self.backend {
            Backend::Supabase(b) => b.delete(table, filter).await,
            Backend::Mock(b) => b.delete(table, filter).await,
        }
    }

    async fn current_user(&self) -> DataResult<Option<Row>> {
        match &self.backend {
            Backend::Supabase(b) => b.current_user().await,
            Backend::Mock(b) => b.current_user().await,
        }
    }

    async fn sign_up(&self, credentials: &Credentials) -> DataResult<Option<Session>> {
        match &self.backend {
            Backend::Supabase(b) => b.sign_up(credentials).await,
            Backend::Mock(b) => b.sign_up(credentials).await,
        }
    }

    async fn sign_in(&self, credentials: &Credentials) -> DataResult<Option<Session>> {
        match &self.backend {
            Backend::Supabase(b) => b.sign_in(credentials).await,
            Backend::Mock(b) => b.sign_in(credentials).await,
        }
    }

    async fn sign_out(&self) -> DataResult<()> {
        match &self.backend {
            Backend::Supabase(b) => b.sign_out().await,
            Backend::Mock(b) => b.sign_out().await,
        }
    }

    fn backend_name(&self) -> &'static str {
        match &self.backend {
            Backend::Supabase(_) => "supabase",
            Backend::Mock(_) => "mock",
        }
    }
}
