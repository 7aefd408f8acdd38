//! Close approach JSON loader
//!
//! The close approach document carries a record count, an ordered list of
//! field names and a list of records positioned by those names:
//!
//! ```json
//! {"count": "1",
//!  "fields": ["des", "cd", "dist", "v_rel"],
//!  "data": [["433", "1900-Jan-01 00:00", "0.1", "5.5"]]}
//! ```

use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info};

use super::column_mapping::ColumnMapping;
use super::field_parsers::{display_value, json_to_count, json_to_f64, json_to_string};
use super::read_input;
use crate::app::models::{CloseApproach, parse_approach_time};
use crate::constants::approach_fields;
use crate::{Error, Result};

/// Top-level layout of the close approach document
///
/// Any other top-level keys (such as `signature`) are ignored.
#[derive(Debug, Deserialize)]
struct ApproachDocument {
    count: Value,
    fields: Vec<String>,
    data: Vec<Vec<Value>>,
}

/// Positions of the close approach fields, resolved once from `fields`
#[derive(Debug, Clone, Copy)]
struct ApproachColumns {
    des: usize,
    cd: usize,
    dist: usize,
    v_rel: usize,
}

impl ApproachColumns {
    fn resolve(mapping: &ColumnMapping, file: &str) -> Result<Self> {
        mapping.require_all(approach_fields::REQUIRED, file)?;
        Ok(Self {
            des: mapping.required_index(approach_fields::DES, file)?,
            cd: mapping.required_index(approach_fields::CD, file)?,
            dist: mapping.required_index(approach_fields::DIST, file)?,
            v_rel: mapping.required_index(approach_fields::V_REL, file)?,
        })
    }
}

/// Read close approaches from a JSON file
///
/// Exactly `count` records are read from the front of `data`.
pub fn load_approaches(path: &Path) -> Result<Vec<CloseApproach>> {
    info!("Loading close approaches from {}", path.display());

    let file = path.display().to_string();
    let content = read_input(path)?;

    let document: ApproachDocument = serde_json::from_str(&content).map_err(|e| {
        Error::format(&file, format!("Malformed close approach document: {}", e))
    })?;

    let count = json_to_count(&document.count).ok_or_else(|| {
        Error::format(
            &file,
            format!(
                "Invalid record count '{}': expected a non-negative integer",
                display_value(&document.count)
            ),
        )
    })?;

    let mapping = ColumnMapping::from_names(&document.fields);
    let columns = ApproachColumns::resolve(&mapping, &file)?;
    debug!("Resolved close approach fields: {:?}", columns);

    if count > document.data.len() {
        return Err(Error::out_of_range(&file, count, document.data.len()));
    }

    let approaches = document.data[..count]
        .iter()
        .enumerate()
        .map(|(index, row)| parse_approach_record(row, columns, &file, index))
        .collect::<Result<Vec<_>>>()?;

    info!("Loaded {} close approaches", approaches.len());
    Ok(approaches)
}

fn parse_approach_record(
    row: &[Value],
    columns: ApproachColumns,
    file: &str,
    index: usize,
) -> Result<CloseApproach> {
    let field = |position: usize, name: &str| {
        row.get(position)
            .ok_or_else(|| Error::type_coercion(file, index, name, "<missing>"))
    };

    let des = field(columns.des, approach_fields::DES)?;
    let designation = json_to_string(des).ok_or_else(|| {
        Error::type_coercion(file, index, approach_fields::DES, display_value(des))
    })?;

    let cd = field(columns.cd, approach_fields::CD)?;
    let time = cd
        .as_str()
        .and_then(|text| parse_approach_time(text).ok())
        .ok_or_else(|| Error::type_coercion(file, index, approach_fields::CD, display_value(cd)))?;

    let dist = field(columns.dist, approach_fields::DIST)?;
    let distance = json_to_f64(dist).ok_or_else(|| {
        Error::type_coercion(file, index, approach_fields::DIST, display_value(dist))
    })?;

    let v_rel = field(columns.v_rel, approach_fields::V_REL)?;
    let velocity = json_to_f64(v_rel).ok_or_else(|| {
        Error::type_coercion(file, index, approach_fields::V_REL, display_value(v_rel))
    })?;

    CloseApproach::new(designation, time, distance, velocity)
        .map_err(|e| Error::format(file, format!("Record {}: {}", index, e)))
}
