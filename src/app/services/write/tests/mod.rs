//! Shared fixtures for writer tests

use std::sync::Arc;

use crate::app::models::{CloseApproach, NearEarthObject, parse_approach_time};


/// Create a NEO with the given attributes
pub fn create_test_neo(
    designation: &str,
    name: Option<&str>,
    diameter: f64,
    hazardous: bool,
) -> Arc<NearEarthObject> {
    Arc::new(
        NearEarthObject::new(designation, name.map(str::to_string), diameter, hazardous).unwrap(),
    )
}

/// Create an approach linked to `neo`
pub fn create_linked_approach(
    neo: &Arc<NearEarthObject>,
    cd: &str,
    distance: f64,
    velocity: f64,
) -> CloseApproach {
    let mut approach = create_unlinked_approach(&neo.designation, cd, distance, velocity);
    approach.link(Arc::clone(neo)).unwrap();
    approach
}

/// Create an approach with no NEO attached
pub fn create_unlinked_approach(
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

/// Eros and an unnamed NEO of unknown diameter, one approach each
pub fn create_test_results() -> Vec<CloseApproach> {
    let eros = create_test_neo("433", Some("Eros"), 16.84, false);
    let unknown = create_test_neo("2020 AB", None, f64::NAN, true);

    vec![
        create_linked_approach(&eros, "1900-Jan-01 00:00", 0.1, 5.5),
        create_linked_approach(&unknown, "2020-Jan-02 12:30", 0.025, 13.25),
    ]
}
