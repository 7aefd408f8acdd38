//! Tests for the NEO CSV loader

use super::*;
use crate::Error;
use crate::app::services::extract::load_neos;
use std::path::Path;

#[test]
fn test_load_neos_row_count_and_order() {
    let temp_file = create_temp_file(&create_test_neo_csv());
    let neos = load_neos(temp_file.path()).unwrap();

    assert_eq!(neos.len(), 4);
    let designations: Vec<&str> = neos.iter().map(|n| n.designation.as_str()).collect();
    assert_eq!(designations, vec!["433", "1036", "99942", "2020 AB"]);
}

#[test]
fn test_load_neos_field_mapping() {
    let temp_file = create_temp_file(&create_test_neo_csv());
    let neos = load_neos(temp_file.path()).unwrap();

    let eros = &neos[0];
    assert_eq!(eros.designation, "433");
    assert_eq!(eros.name.as_deref(), Some("Eros"));
    assert_eq!(eros.diameter, 16.84);
    assert!(!eros.hazardous);

    let apophis = &neos[2];
    assert_eq!(apophis.name.as_deref(), Some("Apophis"));
    assert_eq!(apophis.diameter, 0.37);
    assert!(apophis.hazardous);
}

#[test]
fn test_load_neos_empty_values() {
    let temp_file = create_temp_file(&create_test_neo_csv());
    let neos = load_neos(temp_file.path()).unwrap();

    let unnamed = &neos[3];
    assert_eq!(unnamed.designation, "2020 AB");
    assert_eq!(unnamed.name, None);
    assert!(unnamed.diameter.is_nan());
    assert!(!unnamed.hazardous);
}

#[test]
fn test_load_neos_minimal_columns() {
    let temp_file = create_temp_file(&create_minimal_neo_csv());
    let neos = load_neos(temp_file.path()).unwrap();

    assert_eq!(neos.len(), 1);
    assert_eq!(neos[0].designation, "433");
    assert_eq!(neos[0].name.as_deref(), Some("Eros"));
    assert_eq!(neos[0].diameter, 16.84);
    assert!(!neos[0].hazardous);
}

#[test]
fn test_load_neos_header_only() {
    let temp_file = create_temp_file("pdes,name,diameter,pha");
    let neos = load_neos(temp_file.path()).unwrap();
    assert!(neos.is_empty());
}

#[test]
fn test_load_neos_duplicates_pass_through() {
    let temp_file = create_temp_file("pdes,name,diameter,pha\n433,Eros,16.84,N\n433,Eros,17.0,N");
    let neos = load_neos(temp_file.path()).unwrap();

    assert_eq!(neos.len(), 2);
    assert_eq!(neos[1].diameter, 17.0);
}

#[test]
fn test_load_neos_missing_column() {
    let temp_file = create_temp_file("pdes,name,pha\n433,Eros,N");
    let err = load_neos(temp_file.path()).unwrap_err();

    match err {
        Error::Format { message, .. } => assert!(message.contains("diameter")),
        other => panic!("expected format error, got {:?}", other),
    }
}

#[test]
fn test_load_neos_invalid_diameter() {
    let temp_file = create_temp_file("pdes,name,diameter,pha\n433,Eros,huge,N");
    let err = load_neos(temp_file.path()).unwrap_err();

    match err {
        Error::TypeCoercion {
            record,
            field,
            value,
            ..
        } => {
            assert_eq!(record, 1);
            assert_eq!(field, "diameter");
            assert_eq!(value, "huge");
        }
        other => panic!("expected type error, got {:?}", other),
    }
}

#[test]
fn test_load_neos_whitespace_diameter_is_invalid() {
    let temp_file = create_temp_file("pdes,name,diameter,pha\n433,Eros,   ,N");
    let err = load_neos(temp_file.path()).unwrap_err();

    match err {
        Error::TypeCoercion { record, field, .. } => {
            assert_eq!(record, 1);
            assert_eq!(field, "diameter");
        }
        other => panic!("expected type error, got {:?}", other),
    }
}

#[test]
fn test_load_neos_missing_file() {
    let err = load_neos(Path::new("/nonexistent/neos.csv")).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}
