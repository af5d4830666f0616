//! Command line front end for the stools readers

// stools modules
use stools::eve::read_rho;
use stools::swd::read_swd;

// standard library
use std::path::PathBuf;
use std::process::ExitCode;

// external crates
use clap::{Parser, Subcommand};
use log::error;

/// Inspect the files used and produced by Stella
#[derive(Parser, Debug)]
#[command(name = "stools", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Verbose logging (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Silence all logging
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Summarise a .rho input model
    Eve {
        /// Path to the .rho file
        path: PathBuf,

        /// Print every derived quantity as JSON
        #[arg(long)]
        json: bool,
    },
    /// Summarise a .swd table
    Swd {
        /// Path to the .swd file
        path: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose, cli.quiet) {
        eprintln!("failed to initialise logging: {e}");
    }

    let result = match cli.command {
        Command::Eve { path, json } => eve(path, json),
        Command::Swd { path } => swd(path),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Configure the global logger, warnings by default
fn init_logging(verbose: u8, quiet: bool) -> Result<(), log::SetLoggerError> {
    stderrlog::new()
        .module(module_path!())
        .module("stools_eve")
        .module("stools_swd")
        .quiet(quiet)
        .verbosity(usize::from(verbose) + 1)
        .show_module_names(verbose > 1)
        .init()
}

fn eve(path: PathBuf, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let model = read_rho(path)?;
    if json {
        println!("{}", model.to_json()?);
    } else {
        println!("{model}");
    }
    Ok(())
}

fn swd(path: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let table = read_swd(path)?;
    println!("{table}");
    Ok(())
}
