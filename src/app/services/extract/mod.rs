//! Loaders for the NEO CSV file and the close approach JSON file
//!
//! The two loaders are independent: neither validates against the output of
//! the other. Linking approaches to their NEO is done by the database.
//!
//! ## Architecture
//!
//! - [`neo_loader`] - NEO CSV file into [`NearEarthObject`](crate::NearEarthObject)s
//! - [`approach_loader`] - close approach JSON document into
//!   [`CloseApproach`](crate::CloseApproach)es
//! - [`column_mapping`] - one-time name to position resolution shared by both
//! - [`field_parsers`] - value coercion helpers
//!
//! ## Usage
//!
//! ```rust,no_run
//! use neo_processor::app::services::extract::{load_approaches, load_neos};
//!
//! # fn example() -> neo_processor::Result<()> {
//! let neos = load_neos(std::path::Path::new("data/neos.csv"))?;
//! let approaches = load_approaches(std::path::Path::new("data/cad.json"))?;
//!
//! println!("Loaded {} NEOs and {} approaches", neos.len(), approaches.len());
//! # Ok(())
//! # }
//! ```

pub mod approach_loader;
pub mod column_mapping;
pub mod field_parsers;
pub mod neo_loader;

#[cfg(test)]
pub mod tests;

use std::path::Path;

use crate::{Error, Result};

// Re-export main types for easy access
pub use approach_loader::load_approaches;
pub use column_mapping::ColumnMapping;
pub use neo_loader::load_neos;

/// Read a whole input file into memory
pub(crate) fn read_input(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .map_err(|e| Error::io(format!("Failed to read file {}", path.display()), e))
}
