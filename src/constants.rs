//! Application constants for the NEO processor
//!
//! Column names for both input formats, the fixed output layout, date
//! formats and configuration defaults.

// =============================================================================
// NEO CSV Input
// =============================================================================

/// Columns read from the NEO CSV file
pub mod neo_columns {
    /// Primary designation
    pub const PDES: &str = "pdes";

    /// IAU name (often empty)
    pub const NAME: &str = "name";

    /// Diameter in kilometres (empty when unknown)
    pub const DIAMETER: &str = "diameter";

    /// Potentially hazardous flag ("Y" / "N")
    pub const PHA: &str = "pha";

    /// All columns that must be present in the header
    pub const REQUIRED: &[&str] = &[PDES, NAME, DIAMETER, PHA];
}

/// Flag value marking a potentially hazardous object
pub const HAZARDOUS_FLAG: &str = "Y";

// =============================================================================
// Close Approach JSON Input
// =============================================================================

/// Field names resolved from the `fields` array of the close approach file
pub mod approach_fields {
    /// Object designation
    pub const DES: &str = "des";

    /// Calendar date of closest approach
    pub const CD: &str = "cd";

    /// Nominal approach distance (au)
    pub const DIST: &str = "dist";

    /// Relative velocity (km/s)
    pub const V_REL: &str = "v_rel";

    /// All fields that must be present
    pub const REQUIRED: &[&str] = &[DES, CD, DIST, V_REL];
}

// =============================================================================
// Output Layout
// =============================================================================

/// Header of the CSV output, in column order
pub const CSV_OUTPUT_HEADER: &[&str] = &[
    "datetime_utc",
    "distance_au",
    "velocity_km_s",
    "designation",
    "name",
    "diameter_km",
    "potentially_hazardous",
];

/// Text written for an unknown diameter in CSV output
pub const CSV_NAN_TEXT: &str = "nan";

/// Boolean renderings in CSV output
pub const CSV_TRUE_TEXT: &str = "True";
pub const CSV_FALSE_TEXT: &str = "False";

// =============================================================================
// Date Formats
// =============================================================================

/// Calendar date format of the `cd` field (e.g. "1900-Jan-01 00:00")
pub const APPROACH_TIME_FORMAT: &str = "%Y-%b-%d %H:%M";

/// Output format for approach times (e.g. "1900-01-01 00:00")
pub const OUTPUT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Format accepted for dates given on the command line
pub const CLI_DATE_FORMAT: &str = "%Y-%m-%d";

// =============================================================================
// Configuration Defaults
// =============================================================================

/// Default path of the NEO CSV file
pub const DEFAULT_NEO_FILE: &str = "data/neos.csv";

/// Default path of the close approach JSON file
pub const DEFAULT_CAD_FILE: &str = "data/cad.json";

/// Default number of approaches printed by `query` without an outfile
pub const DEFAULT_QUERY_LIMIT: usize = 10;

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Directory name used under the user config dir
pub const CONFIG_DIR_NAME: &str = "neo-processor";

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Environment variable overrides
pub mod env_vars {
    pub const NEOFILE: &str = "NEO_PROCESSOR_NEOFILE";
    pub const CADFILE: &str = "NEO_PROCESSOR_CADFILE";
    pub const LIMIT: &str = "NEO_PROCESSOR_LIMIT";
}
