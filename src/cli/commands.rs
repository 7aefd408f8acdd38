//! Command implementations for the NEO processor CLI
//!
//! Loads configuration and data, then runs the inspect or query command.

use crate::app::models::CloseApproach;
use crate::app::services::database::NeoDatabase;
use crate::app::services::extract::{load_approaches, load_neos};
use crate::app::services::filters::limit;
use crate::app::services::write::write_results;
use crate::cli::args::{Args, Commands, InspectArgs, QueryArgs};
use crate::config::Config;
use crate::{Error, Result};
use colored::Colorize;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info, warn};

/// How a command finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandStatus {
    /// Command completed and found what it was asked for
    Success,
    /// Inspect found no matching NEO
    NotFound,
}

/// Main command runner for the NEO processor
///
/// 1. Load configuration (defaults, file, environment, flags)
/// 2. Set up logging
/// 3. Load and link the data files
/// 4. Run the requested command
pub fn run(args: Args) -> Result<CommandStatus> {
    let start_time = Instant::now();

    args.validate()?;
    let config_file = config_file_path(&args);
    let config = load_configuration(&args)?;

    // The configured level is only known once the config is loaded
    setup_logging(&args, &config);
    match &config_file {
        Some(path) => debug!("Loaded config file {}", path.display()),
        None => debug!("No config file found, using defaults"),
    }
    debug!("Command line arguments: {:?}", args);
    debug!("Loaded configuration: {:?}", config);

    let database = load_database(&config)?;
    info!(
        "Loaded {} NEOs and {} close approaches in {:.2?}",
        database.neo_count(),
        database.approach_count(),
        start_time.elapsed()
    );

    match &args.command {
        Some(Commands::Inspect(inspect)) => Ok(run_inspect(&database, inspect)),
        Some(Commands::Query(query)) => run_query(&database, query, &config),
        None => Err(Error::configuration("No command given")),
    }
}

/// Config file to read: `--config`, else the default location when it exists
pub fn config_file_path(args: &Args) -> Option<PathBuf> {
    match &args.config_file {
        Some(path) => Some(path.clone()),
        None => Config::default_config_path()
            .ok()
            .filter(|path| path.exists()),
    }
}

/// Load configuration using layered approach (file -> env -> args)
pub fn load_configuration(args: &Args) -> Result<Config> {
    let config_file = config_file_path(args);
    let mut config = Config::load_layered(config_file.as_deref())?;
    apply_cli_overrides(&mut config, args);
    config.validate()?;
    Ok(config)
}

/// Apply CLI argument overrides to configuration
fn apply_cli_overrides(config: &mut Config, args: &Args) {
    if let Some(neofile) = &args.neofile {
        config.data.neofile = neofile.clone();
    }
    if let Some(cadfile) = &args.cadfile {
        config.data.cadfile = cadfile.clone();
    }
    if let Some(level) = args.get_log_level() {
        config.logging.level = level.to_string();
    }
}

/// Set up structured logging to stderr
///
/// RUST_LOG takes precedence over the configured level.
fn setup_logging(args: &Args, config: &Config) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("neo_processor={}", config.logging.level)));

    let layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr);

    // A subscriber may already be installed when running under a test harness
    let installed = if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(layer.compact())
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(layer.with_timer(fmt::time::uptime()))
            .try_init()
    };

    if installed.is_ok() {
        debug!("Logging initialized at level: {}", config.logging.level);
    }
}

/// Load both data files and link them
pub fn load_database(config: &Config) -> Result<NeoDatabase> {
    let neos = load_neos(&config.data.neofile)?;
    let approaches = load_approaches(&config.data.cadfile)?;
    Ok(NeoDatabase::new(neos, approaches))
}

/// Print a single NEO and optionally its approaches
fn run_inspect(database: &NeoDatabase, args: &InspectArgs) -> CommandStatus {
    let neo = match (&args.pdes, &args.name) {
        (Some(pdes), _) => database.get_neo_by_designation(pdes),
        (None, Some(name)) => database.get_neo_by_name(name),
        (None, None) => None,
    };

    let Some(neo) = neo else {
        eprintln!("{}", "No matching NEOs exist in the database.".yellow());
        return CommandStatus::NotFound;
    };

    println!("{}", neo.to_string().bold());

    if args.show_approaches {
        let approaches: Vec<&CloseApproach> = database.approaches_for(&neo.designation).collect();
        if approaches.is_empty() {
            println!("  No recorded close approaches.");
        }
        for approach in approaches {
            println!("  - {}", approach);
        }
    }

    CommandStatus::Success
}

/// Filter approaches and print them or write them to a file
fn run_query(database: &NeoDatabase, args: &QueryArgs, config: &Config) -> Result<CommandStatus> {
    let filters = args.criteria().create_filters();
    for filter in &filters {
        debug!("Applying filter: {}", filter);
    }

    match &args.outfile {
        Some(outfile) => {
            let mut skipped = 0usize;
            let linked = database.query(&filters).filter(|approach| {
                let linked = approach.is_linked();
                if !linked {
                    skipped += 1;
                }
                linked
            });
            let results: Vec<&CloseApproach> = limit(linked, args.limit).collect();

            if skipped > 0 {
                warn!(
                    "Skipped {} approaches with no matching NEO; they cannot be written",
                    skipped
                );
            }

            let format = write_results(results.iter().copied(), outfile)?;
            println!(
                "{} {} close approaches to {} ({})",
                "Wrote".green().bold(),
                results.len(),
                outfile.display(),
                format
            );
        }
        None => {
            let n = args.limit.or(Some(config.query.default_limit));
            let mut printed = 0usize;
            for approach in limit(database.query(&filters), n) {
                println!("{}", approach);
                printed += 1;
            }
            if printed == 0 {
                println!("{}", "No close approaches match the query.".yellow());
            }
        }
    }

    Ok(CommandStatus::Success)
}
