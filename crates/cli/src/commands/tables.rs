//! Coefficient table and constant dumps.
//!
//! Prints every table and constant a width carries, either as round-trip decimal
//! literals or as raw bit patterns for comparing builds bit for bit.

use super::{open_output, Format, Width};
use anyhow::{Context, Result};
use polykern_math::{Precision, SeedConstants};
use std::fmt::LowerHex;
use std::io::Write;
use std::path::Path;

fn format_value<F>(value: F, format: Format, width: Width) -> String
where
    F: Precision,
    F::Bits: LowerHex,
{
    match format {
        Format::Decimal => format!("{:?}", value),
        Format::Hex => format!("{:#0w$x}", value.to_bits(), w = width.hex_width()),
    }
}

/// Write the tables and constants of `F` to `out`
pub fn dump<F>(out: &mut dyn Write, format: Format, width: Width) -> Result<()>
where
    F: Precision,
    F::Bits: LowerHex,
{
    let constants: [(&str, F); 13] = [
        ("PI", F::PI),
        ("FRAC_PI_2", F::FRAC_PI_2),
        ("RECIP_PI", F::RECIP_PI),
        ("RECIP_2PI", F::RECIP_2PI),
        ("LOG2_E", F::LOG2_E),
        ("LN_2", F::LN_2),
        ("LOG10_2", F::LOG10_2),
        ("MIN_POSITIVE", F::MIN_POSITIVE),
        ("EXP2_MIN", F::EXP2_MIN),
        ("EXP2_MAX", F::EXP2_MAX),
        ("ASIN_LIMIT", F::ASIN_LIMIT),
        ("ASIN_CENTER", F::ASIN_CENTER),
        ("TANH_LIMIT", F::TANH_LIMIT),
    ];
    let seeds: [(&str, SeedConstants<F>); 3] = [
        ("RECIP_SEED", F::RECIP_SEED),
        ("SQRT_SEED", F::SQRT_SEED),
        ("CBRT_SEED", F::CBRT_SEED),
    ];
    let tables: [(&str, &[F]); 8] = [
        ("SIN", F::SIN),
        ("COS", F::COS),
        ("TAN", F::TAN),
        ("ASIN", F::ASIN),
        ("ATAN", F::ATAN),
        ("EXP2", F::EXP2),
        ("LOG2", F::LOG2),
        ("LOG2_1P", F::LOG2_1P),
    ];

    writeln!(
        out,
        "# polykern-math {} width ({}-bit mantissa)",
        width.name(),
        F::MANTISSA_BITS
    )?;
    writeln!(out)?;
    writeln!(out, "[constants]")?;
    for (name, value) in constants {
        writeln!(out, "{:<12} = {}", name, format_value(value, format, width))?;
    }
    writeln!(out, "{:<12} = {}", "REFINE_STEPS", F::REFINE_STEPS)?;

    writeln!(out)?;
    writeln!(out, "[seeds]")?;
    for (name, seed) in seeds {
        writeln!(
            out,
            "{:<12} = slope {}, offset {}",
            name,
            format_value(seed.slope, format, width),
            format_value(seed.offset, format, width)
        )?;
    }

    for (name, coefficients) in tables {
        writeln!(out)?;
        writeln!(
            out,
            "[{}] # {} coefficients, highest degree first",
            name,
            coefficients.len()
        )?;
        for &coefficient in coefficients {
            writeln!(out, "{}", format_value(coefficient, format, width))?;
        }
    }
    Ok(())
}

/// Dump one width's tables to `output` or stdout
pub fn execute(width: Width, format: Format, output: Option<&Path>) -> Result<()> {
    let mut out = open_output(output)?;
    match width {
        Width::Narrow => dump::<f32>(&mut *out, format, width)?,
        Width::Wide => dump::<f64>(&mut *out, format, width)?,
    }
    out.flush().context("Failed to write tables")?;

    if let Some(path) = output {
        eprintln!("Wrote {} tables to {}", width.name(), path.display());
    }
    Ok(())
}
