// Unit Tests for DataClient Backend Selection
//
// UNIT UNDER TEST: DataClient factory methods (connect, from_env, mock)
//
// BUSINESS RESPONSIBILITY:
//   - Selects the live backend when credentials are present
//   - Degrades to the mock backend on missing credentials or construction
//     failure, never surfacing an error to the caller
//
// TEST COVERAGE:
//   - Selection with and without credentials
//   - Fallback on live-backend construction failure
//   - Environment-based selection (from_env)
//   - The selected mock client serves the query surface

use crate::client::DataClient;
use crate::config::{SupabaseConfig, ENV_SUPABASE_ANON_KEY, ENV_SUPABASE_URL};
use crate::store::DataStore;
use serial_test::serial;
use std::env;

#[test]
fn test_connect_without_credentials_returns_mock() {
    // Arrange - default settings carry neither URL nor key
    let config = SupabaseConfig::default();

    // Act
    let client = DataClient::connect(config);

    // Assert
    assert_eq!(
        client.backend_name(),
        "mock",
        "Missing credentials should select the mock backend"
    );
}

#[test]
fn test_connect_with_only_url_returns_mock() {
    // Arrange
    let config = SupabaseConfig {
        url: Some("http://localhost:54321".to_string()),
        ..SupabaseConfig::default()
    };

    // Act
    let client = DataClient::connect(config);

    // Assert
    assert_eq!(
        client.backend_name(),
        "mock",
        "A lone URL without a key should select the mock backend"
    );
}

#[test]
fn test_connect_with_credentials_selects_live_backend() {
    // Arrange - construction performs no I/O, so any syntactically usable
    // credentials select the live backend
    let config = SupabaseConfig::new("http://localhost:54321", "test-anon-key");

    // Act
    let client = DataClient::connect(config);

    // Assert
    assert_eq!(
        client.backend_name(),
        "supabase",
        "Complete credentials should select the live backend"
    );
}

#[test]
fn test_connect_falls_back_to_mock_on_construction_failure() {
    // Arrange - a key with a control character cannot become a header
    // value, so live construction fails
    let config = SupabaseConfig::new("http://localhost:54321", "bad\nkey");

    // Act
    let client = DataClient::connect(config);

    // Assert
    assert_eq!(
        client.backend_name(),
        "mock",
        "Construction failure should fall back to the mock backend"
    );
}

#[test]
#[serial]
fn test_from_env_without_variables_returns_mock() {
    // Arrange
    env::remove_var(ENV_SUPABASE_URL);
    env::remove_var(ENV_SUPABASE_ANON_KEY);

    // Act
    let client = DataClient::from_env();

    // Assert
    assert_eq!(client.backend_name(), "mock");
}

#[test]
#[serial]
fn test_from_env_with_variables_selects_live_backend() {
    // Arrange
    env::set_var(ENV_SUPABASE_URL, "http://localhost:54321");
    env::set_var(ENV_SUPABASE_ANON_KEY, "test-anon-key");

    // Act
    let client = DataClient::from_env();

    // Assert
    assert_eq!(client.backend_name(), "supabase");

    // Cleanup
    env::remove_var(ENV_SUPABASE_URL);
    env::remove_var(ENV_SUPABASE_ANON_KEY);
}

#[tokio::test]
async fn test_mock_client_serves_the_query_surface() {
    // Arrange
    let client = DataClient::mock();

    // Act
    let cases = client
        .from("cases")
        .select()
        .eq("status", "open")
        .fetch()
        .await
        .expect("mock select should not fail");

    // Assert
    assert_eq!(cases.len(), 1, "One seeded case should match status=open");
    assert_eq!(
        cases[0].get("id").and_then(|v| v.as_str()),
        Some("case-1"),
        "The seeded case should come back through the client"
    );
}
