//! PPGA CLI - run and inspect grid pathfinding searches.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

mod cli;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

/// PPGA - grid pathfinding with genetic path extension
#[derive(Parser, Debug)]
#[command(name = "ppga")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a frontier search and print the path
    Find {
        #[command(flatten)]
        board: cli::BoardArgs,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,

        /// Report every expanded node
        #[arg(long)]
        trace: bool,
    },

    /// Evaluate chromosome moves from the start cell
    Evaluate {
        #[command(flatten)]
        board: cli::BoardArgs,

        /// Four distance genes, e.g. 0.4,0.8,0.4,0
        #[arg(long, value_delimiter = ',', num_args = 1, requires = "directions")]
        distances: Option<Vec<f64>>,

        /// Four direction genes in {-1, 0, 1}, e.g. -1,1,1,0
        #[arg(
            long,
            value_delimiter = ',',
            num_args = 1,
            allow_hyphen_values = true,
            requires = "distances"
        )]
        directions: Option<Vec<i8>>,

        /// Evaluate N random chromosomes instead
        #[arg(long, conflicts_with_all = ["distances", "directions"])]
        random: Option<usize>,

        /// Random seed (default: random)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let result = match args.command {
        Commands::Find { board, format, trace } => cli::find::execute(&board, format, trace),

        Commands::Evaluate {
            board,
            distances,
            directions,
            random,
            seed,
            format,
        } => {
            let genes = distances.zip(directions);
            cli::evaluate::execute(&board, genes, random, seed, format)
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
