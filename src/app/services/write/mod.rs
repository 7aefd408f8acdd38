//! Writers for linked close approaches
//!
//! Serializes an already filtered sequence of close approaches, each linked to
//! its near-Earth object, to CSV or to pretty-printed JSON.
//!
//! ## Architecture
//!
//! - [`csv_writer`] - fixed seven-column CSV with an unconditional header
//! - [`json_writer`] - JSON array with a nested `neo` object per approach
//!
//! The format is chosen by the caller. [`write_results`] picks it from the
//! output file extension.

pub mod csv_writer;
pub mod json_writer;

#[cfg(test)]
pub mod tests;

use std::fmt;
use std::path::Path;

use tracing::debug;

use crate::app::models::CloseApproach;
use crate::{Error, Result};

// Re-export main functions for easy access
pub use csv_writer::write_to_csv;
pub use json_writer::write_to_json;

/// Output formats supported by the writers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Json,
}

impl OutputFormat {
    /// Detect the output format from a file extension (case-insensitive)
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("csv") => Ok(Self::Csv),
            Some("json") => Ok(Self::Json),
            _ => Err(Error::configuration(format!(
                "Unsupported output file '{}': expected a .csv or .json extension",
                path.display()
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv => write!(f, "csv"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Write approaches to `path` in the format given by its extension
pub fn write_results<'a, I>(results: I, path: &Path) -> Result<OutputFormat>
where
    I: IntoIterator<Item = &'a CloseApproach>,
{
    let format = OutputFormat::from_path(path)?;
    debug!("Writing results as {} to {}", format, path.display());

    match format {
        OutputFormat::Csv => write_to_csv(results, path)?,
        OutputFormat::Json => write_to_json(results, path)?,
    }
    Ok(format)
}
