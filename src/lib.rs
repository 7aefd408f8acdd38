//! NEO Processor Library
//!
//! A Rust library for loading near-Earth object (NEO) reference data and
//! close approach events, linking them into an in-memory relational join,
//! and writing filtered results back out.
//!
//! This library provides tools for:
//! - Parsing the NEO CSV file into [`NearEarthObject`] records
//! - Parsing the close approach JSON file into [`CloseApproach`] records
//! - Linking approaches to their NEO by designation
//! - Filtering approaches by date, distance, velocity, diameter and hazard
//! - Writing approaches to CSV or pretty-printed JSON

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod database;
        pub mod extract;
        pub mod filters;
        pub mod write;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{CloseApproach, NearEarthObject};
pub use app::services::database::NeoDatabase;
pub use app::services::extract::{load_approaches, load_neos};
pub use app::services::filters::{ApproachFilter, FilterCriteria, limit};
pub use app::services::write::{write_results, write_to_csv, write_to_json};
pub use config::Config;

/// Result type alias for the NEO processor
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for NEO loading, linking and writing
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Input file is structurally wrong (missing column, malformed document)
    #[error("Format error in file '{file}': {message}")]
    Format { file: String, message: String },

    /// Declared record count is larger than the data present
    #[error("Record count out of range in file '{file}': count is {count} but only {available} records present")]
    OutOfRange {
        file: String,
        count: usize,
        available: usize,
    },

    /// A field value could not be coerced to the required type
    #[error("Type error in file '{file}', record {record}: field '{field}' has invalid value '{value}'")]
    TypeCoercion {
        file: String,
        record: usize,
        field: String,
        value: String,
    },

    /// Entity construction rejected the supplied values
    #[error("Data validation error: {message}")]
    DataValidation { message: String },

    /// Close approach was written before being linked to its NEO
    #[error("Close approach for '{designation}' is not linked to a near-Earth object")]
    UnlinkedApproach { designation: String },

    /// Close approach was linked a second time
    #[error("Close approach for '{designation}' is already linked")]
    AlreadyLinked { designation: String },

    /// CSV reading or writing error
    #[error("CSV error: {message}")]
    Csv {
        message: String,
        #[source]
        source: csv::Error,
    },

    /// JSON reading or writing error
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a format error for a file
    pub fn format(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Format {
            file: file.into(),
            message: message.into(),
        }
    }

    /// Create an out-of-range error for a declared record count
    pub fn out_of_range(file: impl Into<String>, count: usize, available: usize) -> Self {
        Self::OutOfRange {
            file: file.into(),
            count,
            available,
        }
    }

    /// Create a type coercion error for a single field
    pub fn type_coercion(
        file: impl Into<String>,
        record: usize,
        field: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::TypeCoercion {
            file: file.into(),
            record,
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }

    /// Create an unlinked approach error
    pub fn unlinked_approach(designation: impl Into<String>) -> Self {
        Self::UnlinkedApproach {
            designation: designation.into(),
        }
    }

    /// Create an already linked error
    pub fn already_linked(designation: impl Into<String>) -> Self {
        Self::AlreadyLinked {
            designation: designation.into(),
        }
    }

    /// Create a CSV error with context
    pub fn csv(message: impl Into<String>, source: csv::Error) -> Self {
        Self::Csv {
            message: message.into(),
            source,
        }
    }

    /// Create a JSON error with context
    pub fn json(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::Csv {
            message: "CSV processing failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Json {
            message: "JSON processing failed".to_string(),
            source: error,
        }
    }
}
