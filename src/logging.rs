//! Crate-internal logging shims.
//!
//! Structured diagnostics go through tracing; the macros are re-exported
//! under log_* names so call sites read uniformly across the crate.

pub use tracing::{debug as log_debug, error as log_error, warn as log_warn};
