//! Error types for data-access operations.
//!
//! The main error type is [`DataError`], which covers every failure mode the
//! crate reports:
//! - Configuration errors (missing URL or anon key, bad header material)
//! - Request failures (network issues, unexpected backend statuses)
//! - Response decoding failures
//! - Authentication rejections
//! - Missing records on update/delete
//!
//! Use [`DataResult<T>`] as a convenient alias for `Result<T, DataError>`:
//!
//! ```rust
//! use casetrack_data::DataResult;
//!
//! fn station_label(name: &str) -> DataResult<String> {
//!     Ok(format!("Station: {name}"))
//! }
//! ```

use crate::logging::{log_debug, log_error, log_warn};
use thiserror::Error;

// ============================================================================
// Error categorization types
// ============================================================================

/// High-level categorization of errors for routing and handling decisions.
///
/// Use [`DataError::category()`] to get the category for any error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Expected business logic outcomes (not typically errors).
    ///
    /// "Errors" that represent normal application flow, like updating a
    /// record that does not exist.
    BusinessLogic,

    /// External service failures (Supabase outages, network issues).
    External,

    /// Internal system errors (bugs, invariant violations).
    Internal,

    /// Client errors the caller can fix (bad credentials, invalid input).
    Client,

    /// Temporary failures that may succeed on a later attempt.
    Transient,
}

/// Severity level for logging and alerting decisions.
///
/// Use [`DataError::severity()`] to get the severity for any error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// System is unusable or data integrity is at risk.
    Critical,

    /// Action failed but system is stable.
    Error,

    /// Unexpected but recoverable situation.
    Warning,

    /// Expected failure (e.g., not found). Normal operation.
    Info,
}

// ============================================================================
// Data error types
// ============================================================================

/// Convenient result type for data-access operations.
pub type DataResult<T> = std::result::Result<T, DataError>;

/// Errors that can occur during data-access operations.
///
/// Each variant can be categorized via [`category()`](Self::category),
/// assessed via [`severity()`](Self::severity), checked for retryability via
/// [`is_retryable()`](Self::is_retryable), and converted to a display-safe
/// message via [`user_message()`](Self::user_message).
///
/// # Creating Errors
///
/// Use the constructor methods, which log the error as a side effect:
///
/// ```rust
/// use casetrack_data::DataError;
///
/// let err = DataError::configuration_error("Missing Supabase URL");
/// let err = DataError::not_found("cases");
/// ```
///
/// | Variant | Category | Retryable |
/// |---------|----------|-----------|
/// | `ConfigurationError` | Client | No |
/// | `RequestFailed` | External | Yes |
/// | `ResponseParsingError` | External | No |
/// | `AuthenticationFailed` | Client | No |
/// | `NotFound` | BusinessLogic | No |
#[derive(Error, Debug)]
pub enum DataError {
    /// Backend configuration is invalid or incomplete.
    ///
    /// Common causes: missing project URL or anon key, or an anon key that
    /// cannot be carried as an HTTP header value.
    #[error("Configuration error: {message}")]
    ConfigurationError {
        /// Description of the configuration problem.
        message: String,
    },

    /// The HTTP request to the backend failed.
    ///
    /// May be retryable. Check the source error for the underlying cause.
    #[error("Request failed: {message}")]
    RequestFailed {
        /// Description of the failure.
        message: String,
        /// The underlying error, if available.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The backend returned a response that couldn't be decoded.
    #[error("Response parsing failed: {message}")]
    ResponseParsingError {
        /// Details about the decoding failure.
        message: String,
    },

    /// The backend rejected the request's credentials.
    #[error("Authentication failed: {message}")]
    AuthenticationFailed {
        /// Details about the rejection.
        message: String,
    },

    /// No record matched the filter on an update or delete.
    #[error("No matching record in table '{table}'")]
    NotFound {
        /// The table that was targeted.
        table: String,
    },
}

impl DataError {
    /// Create a [`DataError::ConfigurationError`], logging it.
    pub fn configuration_error(message: impl Into<String>) -> Self {
        let message = message.into();
        log_error!(error = %message, "Configuration error");
        Self::ConfigurationError { message }
    }

    /// Create a [`DataError::RequestFailed`], logging it.
    pub fn request_failed(
        message: impl Into<String>,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        let message = message.into();
        log_error!(error = %message, "Request failed");
        Self::RequestFailed { message, source }
    }

    /// Create a [`DataError::ResponseParsingError`], logging it.
    pub fn response_parsing_error(message: impl Into<String>) -> Self {
        let message = message.into();
        log_warn!(error = %message, "Response parsing failed");
        Self::ResponseParsingError { message }
    }

    /// Create a [`DataError::AuthenticationFailed`], logging it.
    pub fn authentication_failed(message: impl Into<String>) -> Self {
        let message = message.into();
        log_error!(error = %message, "Authentication failed");
        Self::AuthenticationFailed { message }
    }

    /// Create a [`DataError::NotFound`], logging it at debug level.
    ///
    /// A missing record is an expected outcome, not an operational fault.
    pub fn not_found(table: impl Into<String>) -> Self {
        let table = table.into();
        log_debug!(table = %table, "No matching record");
        Self::NotFound { table }
    }

    /// Get the error category for routing and handling decisions.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigurationError { .. } => ErrorCategory::Client,
            Self::RequestFailed { .. } => ErrorCategory::External,
            Self::ResponseParsingError { .. } => ErrorCategory::External,
            Self::AuthenticationFailed { .. } => ErrorCategory::Client,
            Self::NotFound { .. } => ErrorCategory::BusinessLogic,
        }
    }

    /// Get the error severity for logging and alerting.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ConfigurationError { .. } => ErrorSeverity::Error,
            Self::RequestFailed { .. } => ErrorSeverity::Error,
            Self::ResponseParsingError { .. } => ErrorSeverity::Warning,
            Self::AuthenticationFailed { .. } => ErrorSeverity::Error,
            Self::NotFound { .. } => ErrorSeverity::Info,
        }
    }

    /// Whether a later attempt could plausibly succeed.
    ///
    /// Only general request failures qualify; the crate itself never retries.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::RequestFailed { .. })
    }

    /// Convert to a message safe to show to end users.
    ///
    /// Technical details and internal information are stripped.
    pub fn user_message(&self) -> String {
        match self {
            Self::ConfigurationError { .. } => {
                "The service is not configured correctly. Please contact support".to_string()
            }
            Self::RequestFailed { .. } => {
                "Could not reach the server. Please try again".to_string()
            }
            Self::ResponseParsingError { .. } => {
                "The server sent an unexpected response. Please try again".to_string()
            }
            Self::AuthenticationFailed { .. } => {
                "Sign-in was rejected. Check your credentials".to_string()
            }
            Self::NotFound { table } => {
                format!("No matching entry was found in {table}")
            }
        }
    }
}
