use anyhow::Context;
use clap::{CommandFactory, Parser};
use neo_processor::cli::args::Args;
use neo_processor::cli::commands::{self, CommandStatus};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and exit
    if args.command.is_none() {
        let _ = Args::command().print_help();
        println!();
        process::exit(0);
    }

    let result = commands::run(args).context("neo-processor failed");

    match result {
        Ok(CommandStatus::Success) => process::exit(0),
        Ok(CommandStatus::NotFound) => process::exit(1),
        Err(error) => {
            // Error occurred - print the full chain to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}
