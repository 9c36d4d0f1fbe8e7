use crate::error::{DataError, DataResult};
use crate::logging::log_debug;
use serde::{Deserialize, Serialize};
use std::env;

/// Environment variable holding the Supabase project URL.
pub const ENV_SUPABASE_URL: &str = "SUPABASE_URL";

/// Environment variable holding the Supabase anon key.
pub const ENV_SUPABASE_ANON_KEY: &str = "SUPABASE_ANON_KEY";

/// Connection settings for the live Supabase backend.
///
/// Both credential fields are optional: backend selection treats a missing
/// URL or anon key as "run against the mock store" rather than as an error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SupabaseConfig {
    /// Project URL, e.g. `https://abc.supabase.co`.
    pub url: Option<String>,
    /// Public anon key. Not a secret; access control is enforced server-side.
    pub anon_key: Option<String>,
    /// PostgREST schema queried by the live backend.
    pub schema: String,
}

impl Default for SupabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            anon_key: None,
            schema: "public".to_string(),
        }
    }
}

impl SupabaseConfig {
    /// Configuration with explicit credentials and the default schema.
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            anon_key: Some(anon_key.into()),
            ..Self::default()
        }
    }

    /// Read connection settings from the environment.
    ///
    /// Missing or empty variables leave the corresponding field unset;
    /// backend selection handles the fallback. This never fails.
    pub fn from_env() -> Self {
        let url = env::var(ENV_SUPABASE_URL).ok().filter(|v| !v.is_empty());
        let anon_key = env::var(ENV_SUPABASE_ANON_KEY)
            .ok()
            .filter(|v| !v.is_empty());

        log_debug!(
            has_url = url.is_some(),
            has_anon_key = anon_key.is_some(),
            "Loaded Supabase settings from environment"
        );

        Self {
            url,
            anon_key,
            ..Self::default()
        }
    }

    /// Whether both credential fields are present.
    pub fn has_credentials(&self) -> bool {
        self.url.is_some() && self.anon_key.is_some()
    }

    /// Validate that the configuration is complete enough for a live
    /// connection.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::ConfigurationError`] if the URL or anon key is
    /// missing or empty.
    pub fn validate(&self) -> DataResult<()> {
        if self.url.as_deref().unwrap_or_default().is_empty() {
            return Err(DataError::configuration_error("Supabase URL is required"));
        }
        if self.anon_key.as_deref().unwrap_or_default().is_empty() {
            return Err(DataError::configuration_error(
                "Supabase anon key is required",
            ));
        }
        Ok(())
    }
}
