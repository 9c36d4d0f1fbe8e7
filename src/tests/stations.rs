// Unit Tests for the Standalone Station Accessor
//
// UNIT UNDER TEST: stations::mock_police_stations
//
// BUSINESS RESPONSIBILITY:
//   - Always returns the same four geo-tagged station records,
//     independent of any backend or configuration

use crate::stations::mock_police_stations;

#[tokio::test]
async fn test_returns_exactly_four_fixed_records() {
    // Act
    let stations = mock_police_stations().await;

    // Assert
    assert_eq!(stations.len(), 4);
    let names: Vec<&str> = stations.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Central Police Station Nairobi",
            "Kilimani Police Station",
            "Parklands Police Station",
            "Gigiri Police Station",
        ]
    );
}

#[tokio::test]
async fn test_records_carry_coordinates() {
    // Act
    let stations = mock_police_stations().await;

    // Assert
    let central = &stations[0];
    assert_eq!(central.id, "1");
    assert!((central.latitude - (-1.2833)).abs() < f64::EPSILON);
    assert!((central.longitude - 36.8167).abs() < f64::EPSILON);
    assert_eq!(central.contact, "+254-20-2222222");
}

#[tokio::test]
async fn test_repeated_calls_are_identical() {
    let first = mock_police_stations().await;
    let second = mock_police_stations().await;
    assert_eq!(first, second);
}
