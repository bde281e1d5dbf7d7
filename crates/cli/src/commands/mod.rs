//! Subcommand implementations and the options they share.

use anyhow::{Context, Result};
use clap::ValueEnum;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

pub mod accuracy;
pub mod eval;
pub mod tables;

/// Float width a command runs in
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Width {
    /// f32
    Narrow,
    /// f64
    Wide,
}

impl Width {
    pub fn name(self) -> &'static str {
        match self {
            Width::Narrow => "narrow",
            Width::Wide => "wide",
        }
    }

    /// Machine epsilon of the width, as f64
    pub fn epsilon(self) -> f64 {
        match self {
            Width::Narrow => f32::EPSILON as f64,
            Width::Wide => f64::EPSILON,
        }
    }

    /// Digits in a `0x`-prefixed bit pattern of the width
    pub fn hex_width(self) -> usize {
        match self {
            Width::Narrow => 10,
            Width::Wide => 18,
        }
    }
}

/// How table values are printed
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Shortest decimal literal that round-trips
    Decimal,
    /// Raw bit pattern
    Hex,
}

/// Open `path` for writing, or stdout when no path is given
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}
