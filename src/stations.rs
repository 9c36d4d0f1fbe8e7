//! Standalone station accessor for the map view.
//!
//! Independent of the table-backed store: the shape carries coordinates and
//! the data never changes. The asymmetry with
//! [`StationRecord`](crate::models::StationRecord) is inherited from the
//! upstream schema.

use serde::{Deserialize, Serialize};

/// A geo-tagged police station.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StationPin {
    pub id: String,
    pub name: String,
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    pub contact: String,
}

/// Fixed list of four Nairobi stations, always the same.
pub async fn mock_police_stations() -> Vec<StationPin> {
    vec![
        StationPin {
            id: "1".to_string(),
            name: "Central Police Station Nairobi".to_string(),
            location: "Nairobi CBD".to_string(),
            latitude: -1.2833,
            longitude: 36.8167,
            contact: "+254-20-2222222".to_string(),
        },
        StationPin {
            id: "2".to_string(),
            name: "Kilimani Police Station".to_string(),
            location: "Kilimani".to_string(),
            latitude: -1.2906,
            longitude: 36.7833,
            contact: "+254-20-2333333".to_string(),
        },
        StationPin {
            id: "3".to_string(),
            name: "Parklands Police Station".to_string(),
            location: "Parklands".to_string(),
            latitude: -1.2667,
            longitude: 36.8,
            contact: "+254-20-2444444".to_string(),
        },
        StationPin {
            id: "4".to_string(),
            name: "Gigiri Police Station".to_string(),
            location: "Gigiri".to_string(),
            latitude: -1.2333,
            longitude: 36.8,
            contact: "+254-20-2555555".to_string(),
        },
    ]
}
