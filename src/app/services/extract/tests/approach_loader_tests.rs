//! Tests for the close approach JSON loader

use super::*;
use crate::Error;
use crate::app::services::extract::load_approaches;
use chrono::{Datelike, Timelike};
use std::path::Path;

#[test]
fn test_load_approaches_single_record() {
    let temp_file = create_temp_file(
        r#"{"count":"1","fields":["des","cd","dist","v_rel"],"data":[["433","1900-Jan-01 00:00",0.1,5.5]]}"#,
    );
    let approaches = load_approaches(temp_file.path()).unwrap();

    assert_eq!(approaches.len(), 1);
    let approach = &approaches[0];
    assert_eq!(approach.designation, "433");
    assert_eq!(approach.time_str(), "1900-01-01 00:00");
    assert_eq!(approach.distance, 0.1);
    assert_eq!(approach.velocity, 5.5);
    assert!(!approach.is_linked());
}

#[test]
fn test_load_approaches_full_document() {
    let temp_file = create_temp_file(&create_test_cad_json());
    let approaches = load_approaches(temp_file.path()).unwrap();

    assert_eq!(approaches.len(), 3);
    assert_eq!(approaches[0].designation, "170903");
    assert_eq!(approaches[0].distance, 0.0921795123769547);
    assert_eq!(approaches[0].velocity, 16.7523040362574);
    assert_eq!(approaches[0].time.minute(), 11);

    let apophis = &approaches[2];
    assert_eq!(apophis.designation, "99942");
    assert_eq!(apophis.time.year(), 2029);
    assert_eq!(apophis.time.month(), 4);
    assert_eq!(apophis.time.day(), 13);
}

#[test]
fn test_load_approaches_field_order_independent() {
    let temp_file = create_temp_file(
        r#"{"count":2,"fields":["v_rel","dist","cd","des"],"data":[[5.5,0.1,"1900-Jan-01 00:00","433"],["7.42","0.000254","2029-Apr-13 21:46","99942"]]}"#,
    );
    let approaches = load_approaches(temp_file.path()).unwrap();

    assert_eq!(approaches.len(), 2);
    assert_eq!(approaches[0].designation, "433");
    assert_eq!(approaches[0].distance, 0.1);
    assert_eq!(approaches[0].velocity, 5.5);
    assert_eq!(approaches[1].designation, "99942");
    assert_eq!(approaches[1].velocity, 7.42);
}

#[test]
fn test_load_approaches_reads_only_count_records() {
    let temp_file = create_temp_file(
        r#"{"count":"1","fields":["des","cd","dist","v_rel"],"data":[["433","1900-Jan-01 00:00",0.1,5.5],["99942","2029-Apr-13 21:46",0.000254,7.42]]}"#,
    );
    let approaches = load_approaches(temp_file.path()).unwrap();

    assert_eq!(approaches.len(), 1);
    assert_eq!(approaches[0].designation, "433");
}

#[test]
fn test_load_approaches_zero_count() {
    let temp_file =
        create_temp_file(r#"{"count":"0","fields":["des","cd","dist","v_rel"],"data":[]}"#);
    let approaches = load_approaches(temp_file.path()).unwrap();
    assert!(approaches.is_empty());
}

#[test]
fn test_load_approaches_count_exceeds_data() {
    let temp_file = create_temp_file(
        r#"{"count":"2","fields":["des","cd","dist","v_rel"],"data":[["433","1900-Jan-01 00:00",0.1,5.5]]}"#,
    );
    let err = load_approaches(temp_file.path()).unwrap_err();

    match err {
        Error::OutOfRange {
            count, available, ..
        } => {
            assert_eq!(count, 2);
            assert_eq!(available, 1);
        }
        other => panic!("expected out of range error, got {:?}", other),
    }
}

#[test]
fn test_load_approaches_missing_field_name() {
    let temp_file = create_temp_file(
        r#"{"count":"1","fields":["des","cd","dist"],"data":[["433","1900-Jan-01 00:00",0.1]]}"#,
    );
    let err = load_approaches(temp_file.path()).unwrap_err();

    match err {
        Error::Format { message, .. } => assert!(message.contains("v_rel")),
        other => panic!("expected format error, got {:?}", other),
    }
}

#[test]
fn test_load_approaches_non_numeric_distance() {
    let temp_file = create_temp_file(
        r#"{"count":"1","fields":["des","cd","dist","v_rel"],"data":[["433","1900-Jan-01 00:00","close",5.5]]}"#,
    );
    let err = load_approaches(temp_file.path()).unwrap_err();

    match err {
        Error::TypeCoercion { field, value, .. } => {
            assert_eq!(field, "dist");
            assert_eq!(value, "close");
        }
        other => panic!("expected type error, got {:?}", other),
    }
}

#[test]
fn test_load_approaches_invalid_time() {
    let temp_file = create_temp_file(
        r#"{"count":"1","fields":["des","cd","dist","v_rel"],"data":[["433","yesterday",0.1,5.5]]}"#,
    );
    let err = load_approaches(temp_file.path()).unwrap_err();
    assert!(matches!(err, Error::TypeCoercion { .. }));
}

#[test]
fn test_load_approaches_short_record() {
    let temp_file = create_temp_file(
        r#"{"count":"1","fields":["des","cd","dist","v_rel"],"data":[["433","1900-Jan-01 00:00"]]}"#,
    );
    let err = load_approaches(temp_file.path()).unwrap_err();
    assert!(matches!(err, Error::TypeCoercion { .. }));
}

#[test]
fn test_load_approaches_malformed_document() {
    let temp_file = create_temp_file(r#"{"count":"1","fields":["des"]"#);
    let err = load_approaches(temp_file.path()).unwrap_err();
    assert!(matches!(err, Error::Format { .. }));
}

#[test]
fn test_load_approaches_invalid_count() {
    let temp_file = create_temp_file(
        r#"{"count":"lots","fields":["des","cd","dist","v_rel"],"data":[]}"#,
    );
    let err = load_approaches(temp_file.path()).unwrap_err();
    assert!(matches!(err, Error::Format { .. }));
}

#[test]
fn test_load_approaches_missing_file() {
    let err = load_approaches(Path::new("/nonexistent/cad.json")).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}
