//! JSON output for close approaches
//!
//! A single array, pretty-printed with two-space indentation:
//!
//! ```json
//! [
//!   {
//!     "datetime_utc": "1900-01-01 00:00",
//!     "distance_au": 0.1,
//!     "velocity_km_s": 5.5,
//!     "neo": {
//!       "designation": "433",
//!       "name": "Eros",
//!       "diameter_km": 16.84,
//!       "potentially_hazardous": false
//!     }
//!   }
//! ]
//! ```
//!
//! An unknown diameter is written as `null`, the strict JSON form of
//! not-a-number.

use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::app::models::{CloseApproach, NearEarthObject};
use crate::{Error, Result};

/// Serialized form of a close approach
#[derive(Debug, Serialize)]
pub struct ApproachRecord<'a> {
    pub datetime_utc: String,
    pub distance_au: f64,
    pub velocity_km_s: f64,
    pub neo: NeoRecord<'a>,
}

/// Serialized form of the approach's NEO
#[derive(Debug, Serialize)]
pub struct NeoRecord<'a> {
    pub designation: &'a str,
    pub name: &'a str,
    pub diameter_km: f64,
    pub potentially_hazardous: bool,
}

impl<'a> NeoRecord<'a> {
    pub fn from_neo(neo: &'a NearEarthObject) -> Self {
        Self {
            designation: &neo.designation,
            name: neo.name_or_empty(),
            diameter_km: neo.diameter,
            potentially_hazardous: neo.hazardous,
        }
    }
}

impl<'a> ApproachRecord<'a> {
    /// Build the record for a linked approach
    pub fn from_approach(approach: &'a CloseApproach) -> Result<Self> {
        Ok(Self {
            datetime_utc: approach.time_str(),
            distance_au: approach.distance,
            velocity_km_s: approach.velocity,
            neo: NeoRecord::from_neo(approach.linked_neo()?),
        })
    }
}

/// Write close approaches to a JSON file, creating or truncating it
///
/// All records are built before the file is touched, so an unlinked approach
/// leaves any existing file unchanged. A `null` `diameter_km` means the
/// diameter is unknown.
pub fn write_to_json<'a, I>(results: I, path: &Path) -> Result<()>
where
    I: IntoIterator<Item = &'a CloseApproach>,
{
    let records = results
        .into_iter()
        .map(ApproachRecord::from_approach)
        .collect::<Result<Vec<_>>>()?;

    let json = serde_json::to_string_pretty(&records)
        .map_err(|e| Error::json("Failed to serialize close approaches", e))?;

    std::fs::write(path, json)
        .map_err(|e| Error::io(format!("Failed to write file {}", path.display()), e))?;

    info!(
        "Wrote {} close approaches to {}",
        records.len(),
        path.display()
    );
    Ok(())
}
