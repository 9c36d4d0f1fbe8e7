//! Data backend implementations
//!
//! This module contains the two backends the unified client selects between:
//!
//! - **live**: Supabase backend speaking PostgREST and GoTrue REST
//! - **mock**: in-memory backend seeded with development fixtures
//!
//! Both implement the [`DataStore`](crate::store::DataStore) seam; the
//! selection logic lives in [`client`](crate::client).

pub mod live;
pub mod mock;

// Re-export the backend structs
pub use live::LiveBackend;
pub use mock::MockBackend;
