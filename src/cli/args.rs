//! Command-line argument definitions for the NEO processor
//!
//! This module defines the CLI interface using the clap derive API.

use crate::app::services::filters::FilterCriteria;
use crate::constants::CLI_DATE_FORMAT;
use crate::{Error, Result};
use chrono::NaiveDate;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the NEO processor
///
/// Loads near-Earth object and close approach data, then inspects single
/// objects or queries close approaches.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "neo-processor",
    version,
    about = "Explore near-Earth objects and their close approaches to Earth",
    long_about = "Loads near-Earth object data from a CSV file and close approach data from a \
                  JSON file, links each approach to its object, and lets you inspect single \
                  objects or query approaches by date, distance, velocity, diameter and hazard. \
                  Query results can be written to CSV or JSON."
)]
pub struct Args {
    /// Path to the NEO CSV file
    ///
    /// Overrides the config file and NEO_PROCESSOR_NEOFILE. Defaults to data/neos.csv.
    #[arg(long = "neofile", value_name = "PATH", global = true)]
    pub neofile: Option<PathBuf>,

    /// Path to the close approach JSON file
    ///
    /// Overrides the config file and NEO_PROCESSOR_CADFILE. Defaults to data/cad.json.
    #[arg(long = "cadfile", value_name = "PATH", global = true)]
    pub cadfile: Option<PathBuf>,

    /// Path to configuration file
    ///
    /// TOML configuration file. If not specified, looks for
    /// <config dir>/neo-processor/config.toml
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        global = true,
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        global = true,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress log output except errors
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Suppress log output except errors"
    )]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Inspect a single NEO by designation or name
    Inspect(InspectArgs),
    /// Query close approaches and print or save the results
    Query(QueryArgs),
}

/// Arguments for the inspect command
#[derive(Debug, Clone, Parser)]
pub struct InspectArgs {
    /// Primary designation of the NEO (e.g. 433)
    #[arg(
        short = 'p',
        long = "pdes",
        value_name = "DESIGNATION",
        conflicts_with = "name",
        required_unless_present = "name"
    )]
    pub pdes: Option<String>,

    /// IAU name of the NEO (e.g. Eros)
    #[arg(short = 'n', long = "name", value_name = "NAME")]
    pub name: Option<String>,

    /// Also list the NEO's close approaches
    #[arg(short = 'a', long = "approaches")]
    pub show_approaches: bool,
}

/// Arguments for the query command
#[derive(Debug, Clone, Parser)]
pub struct QueryArgs {
    /// Only approaches on this date (YYYY-MM-DD)
    #[arg(short = 'd', long = "date", value_name = "DATE", value_parser = parse_date)]
    pub date: Option<NaiveDate>,

    /// Only approaches on or after this date (YYYY-MM-DD)
    #[arg(short = 's', long = "start-date", value_name = "DATE", value_parser = parse_date)]
    pub start_date: Option<NaiveDate>,

    /// Only approaches on or before this date (YYYY-MM-DD)
    #[arg(short = 'e', long = "end-date", value_name = "DATE", value_parser = parse_date)]
    pub end_date: Option<NaiveDate>,

    /// Minimum approach distance in au
    #[arg(long = "min-distance", value_name = "AU")]
    pub distance_min: Option<f64>,

    /// Maximum approach distance in au
    #[arg(long = "max-distance", value_name = "AU")]
    pub distance_max: Option<f64>,

    /// Minimum relative velocity in km/s
    #[arg(long = "min-velocity", value_name = "KM_S")]
    pub velocity_min: Option<f64>,

    /// Maximum relative velocity in km/s
    #[arg(long = "max-velocity", value_name = "KM_S")]
    pub velocity_max: Option<f64>,

    /// Minimum NEO diameter in km
    #[arg(long = "min-diameter", value_name = "KM")]
    pub diameter_min: Option<f64>,

    /// Maximum NEO diameter in km
    #[arg(long = "max-diameter", value_name = "KM")]
    pub diameter_max: Option<f64>,

    /// Only potentially hazardous NEOs
    #[arg(long = "hazardous", conflicts_with = "not_hazardous")]
    pub hazardous: bool,

    /// Only NEOs that are not potentially hazardous
    #[arg(long = "not-hazardous")]
    pub not_hazardous: bool,

    /// Maximum number of results (0 for no limit)
    #[arg(short = 'l', long = "limit", value_name = "N")]
    pub limit: Option<usize>,

    /// Write results to this .csv or .json file instead of printing them
    #[arg(short = 'o', long = "outfile", value_name = "FILE")]
    pub outfile: Option<PathBuf>,
}

impl Args {
    /// Log level requested on the command line, if any
    pub fn get_log_level(&self) -> Option<&'static str> {
        if self.quiet {
            return Some("error");
        }
        match self.verbose {
            0 => None,
            1 => Some("info"),
            2 => Some("debug"),
            _ => Some("trace"),
        }
    }

    /// Validate argument combinations clap cannot express
    pub fn validate(&self) -> Result<()> {
        if let Some(Commands::Query(query)) = &self.command {
            query.validate()?;
        }
        Ok(())
    }
}

impl QueryArgs {
    /// Filter criteria described by these arguments
    pub fn criteria(&self) -> FilterCriteria {
        let hazardous = if self.hazardous {
            Some(true)
        } else if self.not_hazardous {
            Some(false)
        } else {
            None
        };

        FilterCriteria {
            date: self.date,
            start_date: self.start_date,
            end_date: self.end_date,
            distance_min: self.distance_min,
            distance_max: self.distance_max,
            velocity_min: self.velocity_min,
            velocity_max: self.velocity_max,
            diameter_min: self.diameter_min,
            diameter_max: self.diameter_max,
            hazardous,
        }
    }

    /// Reject inverted ranges
    pub fn validate(&self) -> Result<()> {
        check_range("date", self.start_date, self.end_date)?;
        check_range("distance", self.distance_min, self.distance_max)?;
        check_range("velocity", self.velocity_min, self.velocity_max)?;
        check_range("diameter", self.diameter_min, self.diameter_max)?;
        Ok(())
    }
}

fn check_range<T: PartialOrd + std::fmt::Display>(
    what: &str,
    min: Option<T>,
    max: Option<T>,
) -> Result<()> {
    match (min, max) {
        (Some(min), Some(max)) if min > max => Err(Error::configuration(format!(
            "Invalid {} range: minimum {} is greater than maximum {}",
            what, min, max
        ))),
        _ => Ok(()),
    }
}

/// Parse a YYYY-MM-DD date argument
fn parse_date(value: &str) -> std::result::Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, CLI_DATE_FORMAT)
        .map_err(|e| format!("invalid date '{}' (expected YYYY-MM-DD): {}", value, e))
}
