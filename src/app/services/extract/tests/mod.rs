//! Test utilities for the NEO and close approach loaders
//!
//! Fixture file contents and a helper to write them to temporary files.

use std::io::Write;
use tempfile::NamedTempFile;

// Test modules
mod approach_loader_tests;
mod neo_loader_tests;

/// NEO CSV with a subset of the real column set, in the real column order
pub fn create_test_neo_csv() -> String {
    r#"id,spkid,full_name,pdes,name,prefix,neo,pha,H,G,M1,M2,K1,K2,PC,diameter,extent,albedo
a0000433,2000433,"   433 Eros (A898 PA)",433,Eros,,Y,N,10.4,0.46,,,,,,16.84,34.4x11.2x11.2,0.25
a0001036,2001036,"  1036 Ganymed (A924 UB)",1036,Ganymed,,Y,N,9.25,,,,,,,37.675,,0.238
a0099942,2099942," 99942 Apophis (2004 MN4)",99942,Apophis,,Y,Y,19.09,0.24,,,,,,0.37,,0.3
bK20A00B,3842315,"       (2020 AB)",2020 AB,,,Y,,26.1,,,,,,,,,"#
        .to_string()
}

/// Minimal NEO CSV holding only the required columns
pub fn create_minimal_neo_csv() -> String {
    "pdes,name,diameter,pha\n433,Eros,16.84,N".to_string()
}

/// Close approach document with string values, as published
pub fn create_test_cad_json() -> String {
    r#"{
  "signature": {"source": "NASA/JPL SBDB Close Approach Data API", "version": "1.1"},
  "count": "3",
  "fields": ["des", "orbit_id", "jd", "cd", "dist", "dist_min", "dist_max", "v_rel", "v_inf", "t_sigma_f", "h"],
  "data": [
    ["170903", "105", "2415020.507669610", "1900-Jan-01 00:11", "0.0921795123769547", "0.0912006569517418", "0.0931589328621254", "16.7523040362574", "16.7505784933163", "01:00", "18.1"],
    ["433", "A898 PA", "2415080.7", "1900-Mar-01 04:48", "0.3", "0.29", "0.31", "5.5", "5.4", "00:01", "10.4"],
    ["99942", "199", "2462240.4", "2029-Apr-13 21:46", "0.000254", "0.000254", "0.000254", "7.42", "5.84", "< 00:01", "19.09"]
  ]
}"#
    .to_string()
}

/// Helper to create a temporary file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "{}", content).unwrap();
    temp_file
}
