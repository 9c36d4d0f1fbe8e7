// Unit Tests for SupabaseConfig
//
// UNIT UNDER TEST: SupabaseConfig (construction, validation, env loading)
//
// BUSINESS RESPONSIBILITY:
//   - Carries the two optional credential strings plus the schema name
//   - Treats missing/empty environment variables as "unset", never as an
//     error - selection decides what to do about it
//
// TEST COVERAGE:
//   - Defaults and explicit construction
//   - has_credentials / validate
//   - from_env presence, absence, and empty-string handling

use crate::config::{SupabaseConfig, ENV_SUPABASE_ANON_KEY, ENV_SUPABASE_URL};
use crate::error::DataError;
use serial_test::serial;
use std::env;

#[test]
fn test_default_has_no_credentials_and_public_schema() {
    // Act
    let config = SupabaseConfig::default();

    // Assert
    assert!(config.url.is_none());
    assert!(config.anon_key.is_none());
    assert!(!config.has_credentials());
    assert_eq!(config.schema, "public");
}

#[test]
fn test_new_sets_both_credentials() {
    // Act
    let config = SupabaseConfig::new("https://abc.supabase.co", "anon-key");

    // Assert
    assert!(config.has_credentials());
    assert_eq!(config.url.as_deref(), Some("https://abc.supabase.co"));
    assert_eq!(config.anon_key.as_deref(), Some("anon-key"));
}

#[test]
fn test_validate_rejects_missing_url() {
    // Arrange
    let config = SupabaseConfig {
        anon_key: Some("anon-key".to_string()),
        ..SupabaseConfig::default()
    };

    // Act
    let result = config.validate();

    // Assert
    match result {
        Err(DataError::ConfigurationError { message }) => {
            assert!(message.contains("URL"), "Message should name the URL");
        }
        other => panic!("Expected ConfigurationError, got: {other:?}"),
    }
}

#[test]
fn test_validate_rejects_missing_anon_key() {
    // Arrange
    let config = SupabaseConfig {
        url: Some("https://abc.supabase.co".to_string()),
        ..SupabaseConfig::default()
    };

    // Act
    let result = config.validate();

    // Assert
    assert!(
        matches!(result, Err(DataError::ConfigurationError { .. })),
        "Missing key should fail validation"
    );
}

#[test]
fn test_validate_accepts_complete_settings() {
    let config = SupabaseConfig::new("https://abc.supabase.co", "anon-key");
    assert!(config.validate().is_ok());
}

#[test]
#[serial]
fn test_from_env_reads_both_variables() {
    // Arrange
    env::set_var(ENV_SUPABASE_URL, "https://abc.supabase.co");
    env::set_var(ENV_SUPABASE_ANON_KEY, "anon-key");

    // Act
    let config = SupabaseConfig::from_env();

    // Assert
    assert!(config.has_credentials());
    assert_eq!(config.url.as_deref(), Some("https://abc.supabase.co"));

    // Cleanup
    env::remove_var(ENV_SUPABASE_URL);
    env::remove_var(ENV_SUPABASE_ANON_KEY);
}

#[test]
#[serial]
fn test_from_env_treats_empty_values_as_unset() {
    // Arrange - an exported-but-empty variable must not count as configured
    env::set_var(ENV_SUPABASE_URL, "");
    env::set_var(ENV_SUPABASE_ANON_KEY, "anon-key");

    // Act
    let config = SupabaseConfig::from_env();

    // Assert
    assert!(config.url.is_none(), "Empty URL should read as unset");
    assert!(!config.has_credentials());

    // Cleanup
    env::remove_var(ENV_SUPABASE_URL);
    env::remove_var(ENV_SUPABASE_ANON_KEY);
}

#[test]
#[serial]
fn test_from_env_with_nothing_exported() {
    // Arrange
    env::remove_var(ENV_SUPABASE_URL);
    env::remove_var(ENV_SUPABASE_ANON_KEY);

    // Act
    let config = SupabaseConfig::from_env();

    // Assert
    assert!(!config.has_credentials());
}
