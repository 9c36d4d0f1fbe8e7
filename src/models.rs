//! Typed record shapes for the CaseTrack tables.
//!
//! These are plain value records with no enforced invariants - the row
//! surface stays schemaless, and these shapes exist for fixture seeding and
//! for callers that want typed access.

use serde::{Deserialize, Serialize};

/// Well-known table names.
pub mod tables {
    pub const USERS: &str = "users";
    pub const POLICE_STATIONS: &str = "police_stations";
    pub const CASES: &str = "cases";
}

/// An application user, linked to a station by id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserRecord {
    pub id: String,
    pub clerk_id: String,
    pub email: String,
    pub full_name: String,
    pub role: String,
    pub station_id: String,
    pub badge_number: String,
}

/// A police station as stored in the `police_stations` table.
///
/// Note this shape has no coordinates; the geo-tagged
/// [`StationPin`](crate::stations::StationPin) used by the standalone
/// accessor is intentionally separate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StationRecord {
    pub id: String,
    pub name: String,
    pub location: String,
    pub jurisdiction: String,
    pub contact_number: String,
}

/// A reported case with reporter, officer, and station linkage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CaseRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: String,
    pub reporter_id: String,
    pub assigned_officer_id: String,
    pub station_id: String,
}
