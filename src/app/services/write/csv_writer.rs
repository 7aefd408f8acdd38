//! CSV output for close approaches
//!
//! One row per approach with the columns of [`CSV_OUTPUT_HEADER`]. The header
//! is written even when there are no approaches.

use std::fs::File;
use std::path::Path;

use serde::{Serialize, Serializer};
use tracing::info;

use crate::app::models::CloseApproach;
use crate::constants::{CSV_FALSE_TEXT, CSV_NAN_TEXT, CSV_OUTPUT_HEADER, CSV_TRUE_TEXT};
use crate::{Error, Result};

/// Diameter cell: the number, or `nan` when unknown
#[derive(Debug, Clone, Copy)]
struct DiameterCell(f64);

impl Serialize for DiameterCell {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        if self.0.is_nan() {
            serializer.serialize_str(CSV_NAN_TEXT)
        } else {
            serializer.serialize_f64(self.0)
        }
    }
}

/// One output row, fields in header order
#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    datetime_utc: String,
    distance_au: f64,
    velocity_km_s: f64,
    designation: &'a str,
    name: &'a str,
    diameter_km: DiameterCell,
    potentially_hazardous: &'static str,
}

impl<'a> CsvRow<'a> {
    fn from_approach(approach: &'a CloseApproach) -> Result<Self> {
        let neo = approach.linked_neo()?;
        Ok(Self {
            datetime_utc: approach.time_str(),
            distance_au: approach.distance,
            velocity_km_s: approach.velocity,
            designation: &neo.designation,
            name: neo.name_or_empty(),
            diameter_km: DiameterCell(neo.diameter),
            potentially_hazardous: if neo.hazardous {
                CSV_TRUE_TEXT
            } else {
                CSV_FALSE_TEXT
            },
        })
    }
}

/// Write close approaches to a CSV file, creating or truncating it
///
/// Every approach must be linked to its NEO; the first unlinked approach
/// stops the write with [`Error::UnlinkedApproach`].
pub fn write_to_csv<'a, I>(results: I, path: &Path) -> Result<()>
where
    I: IntoIterator<Item = &'a CloseApproach>,
{
    let file = File::create(path)
        .map_err(|e| Error::io(format!("Failed to create file {}", path.display()), e))?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);

    writer
        .write_record(CSV_OUTPUT_HEADER)
        .map_err(|e| Error::csv("Failed to write CSV header", e))?;

    let mut rows_written = 0usize;
    for approach in results {
        let row = CsvRow::from_approach(approach)?;
        writer
            .serialize(&row)
            .map_err(|e| Error::csv(format!("Failed to write row {}", rows_written + 1), e))?;
        rows_written += 1;
    }

    writer
        .flush()
        .map_err(|e| Error::io(format!("Failed to flush {}", path.display()), e))?;

    info!(
        "Wrote {} close approaches to {}",
        rows_written,
        path.display()
    );
    Ok(())
}
