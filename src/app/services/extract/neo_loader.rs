//! NEO CSV loader
//!
//! Reads the NEO file (header row plus one row per object) and builds one
//! [`NearEarthObject`] per data row in file order.

use std::path::Path;

use csv::StringRecord;
use tracing::{debug, info};

use super::column_mapping::ColumnMapping;
use super::field_parsers::{parse_diameter, parse_hazard_flag, parse_optional_name};
use super::read_input;
use crate::app::models::NearEarthObject;
use crate::constants::neo_columns;
use crate::{Error, Result};

/// Positions of the NEO columns, resolved once from the header
#[derive(Debug, Clone, Copy)]
struct NeoColumns {
    pdes: usize,
    name: usize,
    diameter: usize,
    pha: usize,
}

impl NeoColumns {
    fn resolve(mapping: &ColumnMapping, file: &str) -> Result<Self> {
        mapping.require_all(neo_columns::REQUIRED, file)?;
        Ok(Self {
            pdes: mapping.required_index(neo_columns::PDES, file)?,
            name: mapping.required_index(neo_columns::NAME, file)?,
            diameter: mapping.required_index(neo_columns::DIAMETER, file)?,
            pha: mapping.required_index(neo_columns::PHA, file)?,
        })
    }
}

/// Read near-Earth objects from a CSV file
///
/// Duplicate designations are passed through unchanged.
pub fn load_neos(path: &Path) -> Result<Vec<NearEarthObject>> {
    info!("Loading near-Earth objects from {}", path.display());

    let file = path.display().to_string();
    let content = read_input(path)?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(content.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| Error::csv(format!("Failed to read CSV header of {}", file), e))?;
    let mapping = ColumnMapping::from_names(headers.iter());
    let columns = NeoColumns::resolve(&mapping, &file)?;
    debug!("Resolved NEO columns: {:?}", columns);

    let mut neos = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let record_number = index + 1;
        let record = result.map_err(|e| {
            Error::csv(format!("Failed to read record {} of {}", record_number, file), e)
        })?;
        neos.push(parse_neo_record(&record, columns, &file, record_number)?);
    }

    info!("Loaded {} near-Earth objects", neos.len());
    Ok(neos)
}

fn parse_neo_record(
    record: &StringRecord,
    columns: NeoColumns,
    file: &str,
    record_number: usize,
) -> Result<NearEarthObject> {
    let field = |index: usize, name: &str| {
        record
            .get(index)
            .ok_or_else(|| Error::type_coercion(file, record_number, name, "<missing>"))
    };

    let designation = field(columns.pdes, neo_columns::PDES)?;
    let name = field(columns.name, neo_columns::NAME)?;
    let raw_diameter = field(columns.diameter, neo_columns::DIAMETER)?;
    let pha = field(columns.pha, neo_columns::PHA)?;

    let diameter = parse_diameter(raw_diameter).ok_or_else(|| {
        Error::type_coercion(file, record_number, neo_columns::DIAMETER, raw_diameter)
    })?;

    NearEarthObject::new(
        designation,
        parse_optional_name(name),
        diameter,
        parse_hazard_flag(pha),
    )
    .map_err(|e| Error::format(file, format!("Record {}: {}", record_number, e)))
}
