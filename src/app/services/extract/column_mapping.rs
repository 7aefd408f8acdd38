//! Column name to position resolution
//!
//! Both input formats locate their columns by name rather than by position.
//! The mapping is built once from the header (CSV) or `fields` array (JSON)
//! before any record is read.

use crate::{Error, Result};
use std::collections::HashMap;

/// Column mapping for a header or field list
#[derive(Debug, Clone, Default)]
pub struct ColumnMapping {
    /// Column name to index mapping
    pub name_to_index: HashMap<String, usize>,
}

impl ColumnMapping {
    /// Build a mapping from column names in order
    ///
    /// If a name appears twice the first position is kept.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut name_to_index = HashMap::new();
        for (index, name) in names.into_iter().enumerate() {
            name_to_index
                .entry(name.as_ref().trim().to_string())
                .or_insert(index);
        }
        Self { name_to_index }
    }

    /// Get the index for a given column name
    pub fn get_index(&self, column_name: &str) -> Option<usize> {
        self.name_to_index.get(column_name).copied()
    }

    /// Check if a column exists in the mapping
    pub fn has_column(&self, column_name: &str) -> bool {
        self.name_to_index.contains_key(column_name)
    }

    /// Index of a column that must be present
    pub fn required_index(&self, column_name: &str, file: &str) -> Result<usize> {
        self.get_index(column_name).ok_or_else(|| {
            Error::format(file, format!("Required column '{}' not found", column_name))
        })
    }

    /// Check that every listed column is present, naming all that are missing
    pub fn require_all(&self, column_names: &[&str], file: &str) -> Result<()> {
        let missing: Vec<&str> = column_names
            .iter()
            .copied()
            .filter(|name| !self.has_column(name))
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(Error::format(
                file,
                format!("Missing required columns: {}", missing.join(", ")),
            ))
        }
    }

    /// Number of columns in the mapping
    pub fn len(&self) -> usize {
        self.name_to_index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.name_to_index.is_empty()
    }
}
