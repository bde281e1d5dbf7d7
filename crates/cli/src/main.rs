//! # polykern CLI
//!
//! Command-line companion to polykern-math: accuracy reports against libm, spot
//! evaluation of single functions, and dumps of the coefficient tables.

mod catalog;
mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{Format, Width};
use std::path::PathBuf;

/// Inspect and validate the polykern-math kernels
#[derive(Parser)]
#[command(name = "polykern")]
#[command(about = "A CLI for the polykern-math transcendental kernels")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Measure each function's error against libm over its test domain
    Accuracy {
        /// Float width to measure
        #[arg(short, long, value_enum, default_value_t = Width::Wide)]
        width: Width,

        /// Comma-separated functions or groups. Use "help" for a list
        #[arg(short, long, default_value = "all")]
        functions: String,

        /// Samples per function
        #[arg(short, long, default_value = "10000")]
        samples: usize,

        /// Write the report to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the worst input of each function
        #[arg(short, long)]
        verbose: bool,
    },

    /// Evaluate one function and compare it with libm
    Eval {
        /// Function name
        function: String,

        /// Arguments (two for atan2, log, powf, powi and hypot)
        #[arg(required = true, allow_negative_numbers = true)]
        args: Vec<f64>,

        /// Float width to evaluate in
        #[arg(short, long, value_enum, default_value_t = Width::Wide)]
        width: Width,
    },

    /// Print coefficient tables, seeds and constants
    Tables {
        /// Float width whose tables are printed
        #[arg(short, long, value_enum, default_value_t = Width::Wide)]
        width: Width,

        /// Decimal literals or raw bit patterns
        #[arg(long, value_enum, default_value_t = Format::Decimal)]
        format: Format,

        /// Write the tables to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Accuracy {
            width,
            functions,
            samples,
            output,
            verbose,
        } => commands::accuracy::execute(width, &functions, samples, output.as_deref(), verbose),

        Commands::Eval {
            function,
            args,
            width,
        } => commands::eval::execute(&function, &args, width),

        Commands::Tables {
            width,
            format,
            output,
        } => commands::tables::execute(width, format, output.as_deref()),
    }
}
