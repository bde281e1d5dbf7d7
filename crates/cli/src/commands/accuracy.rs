//! Accuracy reports against libm.
//!
//! Each selected function is sampled evenly across its catalog domain in the chosen
//! width and compared with the `libm` value at the same (width-rounded) input. The
//! error in epsilons is scaled by `max(1, |reference|)`: absolute where the result is
//! small, relative where it is large.

use super::{open_output, Width};
use crate::catalog::{self, Entry, Kernel};
use anyhow::{bail, Context, Result};
use std::io::Write;
use std::path::Path;

/// Worst-case errors of one function over its domain
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub name: &'static str,
    pub max_abs: f64,
    pub max_rel: f64,
    /// Error over `max(1, |reference|)` in epsilons of the width
    pub max_eps: f64,
    /// Input that produced `max_eps`
    pub worst_input: f64,
    pub budget: f64,
}

impl Report {
    pub fn passed(&self) -> bool {
        self.max_eps <= self.budget
    }
}

/// Evaluate `entry` at `x` in `width`, returning `(actual, reference)`
fn evaluate(entry: &Entry, width: Width, x: f64) -> (f64, f64) {
    let y = entry.second;
    match (entry.kernel, width) {
        (Kernel::Unary { narrow, reference, .. }, Width::Narrow) => {
            let x = x as f32;
            (narrow(x) as f64, reference(x as f64))
        }
        (Kernel::Unary { wide, reference, .. }, Width::Wide) => (wide(x), reference(x)),
        (Kernel::Binary { narrow, reference, .. }, Width::Narrow) => {
            let (x, y) = (x as f32, y as f32);
            (narrow(x, y) as f64, reference(x as f64, y as f64))
        }
        (Kernel::Binary { wide, reference, .. }, Width::Wide) => (wide(x, y), reference(x, y)),
        (Kernel::Power { narrow, reference, .. }, Width::Narrow) => {
            let (x, n) = (x as f32, y as i32);
            (narrow(x, n) as f64, reference(x as f64, n))
        }
        (Kernel::Power { wide, reference, .. }, Width::Wide) => {
            let n = y as i32;
            (wide(x, n), reference(x, n))
        }
    }
}

/// Sweep one function over `samples` points of its domain
pub fn measure(entry: &Entry, width: Width, samples: usize) -> Report {
    let epsilon = width.epsilon();
    let mut report = Report {
        name: entry.name,
        max_abs: 0.0,
        max_rel: 0.0,
        max_eps: 0.0,
        worst_input: f64::NAN,
        budget: match width {
            Width::Narrow => entry.narrow_budget,
            Width::Wide => entry.wide_budget,
        },
    };

    for x in entry.domain.samples(samples) {
        let (actual, expected) = evaluate(entry, width, x);
        let abs = (actual - expected).abs();
        // A NaN where libm has a value is an unbounded error
        let abs = if abs.is_nan() && !expected.is_nan() {
            f64::INFINITY
        } else if abs.is_nan() {
            0.0
        } else {
            abs
        };
        let rel = if expected == 0.0 {
            abs
        } else {
            abs / expected.abs()
        };
        let eps = abs / expected.abs().max(1.0) / epsilon;

        report.max_abs = report.max_abs.max(abs);
        report.max_rel = report.max_rel.max(rel);
        if eps > report.max_eps || report.worst_input.is_nan() {
            report.max_eps = eps;
            report.worst_input = x;
        }
    }
    report
}

/// Run the accuracy report
pub fn execute(
    width: Width,
    functions: &str,
    samples: usize,
    output: Option<&Path>,
    verbose: bool,
) -> Result<()> {
    if functions == "help" {
        print!("{}", catalog::help_text());
        return Ok(());
    }
    if samples < 2 {
        bail!("--samples must be at least 2, got {}", samples);
    }

    let entries = catalog::resolve(functions)?;
    let mut out = open_output(output)?;

    writeln!(
        out,
        "Accuracy against libm ({} width, {} samples per function)",
        width.name(),
        samples
    )?;
    writeln!(out, "{}", "─".repeat(72))?;
    writeln!(
        out,
        "{:<8} {:>12} {:>12} {:>10} {:>8}  status",
        "function", "max abs", "max rel", "max eps", "budget"
    )?;

    let mut failures = Vec::new();
    for entry in entries {
        let report = measure(entry, width, samples);
        writeln!(
            out,
            "{:<8} {:>12.3e} {:>12.3e} {:>10.2} {:>8.1}  {}",
            report.name,
            report.max_abs,
            report.max_rel,
            report.max_eps,
            report.budget,
            if report.passed() { "ok" } else { "FAIL" }
        )
        .context("Failed to write report")?;
        if verbose {
            writeln!(out, "         worst input: {:e}", report.worst_input)?;
        }
        if !report.passed() {
            failures.push(report.name);
        }
    }
    writeln!(
        out,
        "eps: |actual - libm| / max(1, |libm|) in units of {:e}",
        width.epsilon()
    )?;
    out.flush().context("Failed to flush report")?;

    if !failures.is_empty() {
        bail!(
            "{} function(s) exceeded their error budget: {}",
            failures.len(),
            failures.join(", ")
        );
    }
    Ok(())
}
