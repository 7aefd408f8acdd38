//! Shared test utilities and fixtures for database tests

use crate::app::models::{CloseApproach, NearEarthObject, parse_approach_time};


/// Create a test NEO with standard parameters
pub fn create_test_neo(
    designation: &str,
    name: Option<&str>,
    diameter: f64,
    hazardous: bool,
) -> NearEarthObject {
    NearEarthObject::new(designation, name.map(str::to_string), diameter, hazardous).unwrap()
}

/// Create an unlinked test approach
pub fn create_test_approach(
    designation: &str,
    cd: &str,
    distance: f64,
    velocity: f64,
) -> CloseApproach {
    CloseApproach::new(
        designation,
        parse_approach_time(cd).unwrap(),
        distance,
        velocity,
    )
    .unwrap()
}

/// Three NEOs, one of them unnamed with an unknown diameter
pub fn create_test_neos() -> Vec<NearEarthObject> {
    vec![
        create_test_neo("433", Some("Eros"), 16.84, false),
        create_test_neo("99942", Some("Apophis"), 0.37, true),
        create_test_neo("2020 AB", None, f64::NAN, false),
    ]
}

/// Approaches for the test NEOs plus one for an unknown designation
pub fn create_test_approaches() -> Vec<CloseApproach> {
    vec![
        create_test_approach("433", "1900-Jan-01 00:00", 0.3, 5.5),
        create_test_approach("99942", "2029-Apr-13 21:46", 0.000254, 7.42),
        create_test_approach("433", "1975-Jan-23 07:01", 0.151, 5.83),
        create_test_approach("2020 AB", "2020-Jan-02 12:30", 0.025, 13.25),
        create_test_approach("1999 ZZ", "2000-Jun-15 03:00", 0.2, 9.0),
    ]
}
