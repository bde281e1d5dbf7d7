//! Spot evaluation of a single function.

use super::Width;
use crate::catalog::{self, Kernel};
use anyhow::{bail, Result};

/// One evaluation in a given width
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// Result widened to f64
    pub value: f64,
    /// Bit pattern of the result in its own width
    pub bits: u64,
    /// Shortest round-trip literal of the result in its own width
    pub literal: String,
    /// libm at the width-rounded arguments
    pub reference: f64,
}

/// Evaluate `function` at `args` in `width`
pub fn evaluate(function: &str, args: &[f64], width: Width) -> Result<Evaluation> {
    let entry = catalog::find(function)?;
    let arity = entry.kernel.arity();
    if args.len() != arity {
        bail!(
            "{} takes {} argument(s), got {}",
            function,
            arity,
            args.len()
        );
    }

    let x = args[0];
    let y = args.get(1).copied().unwrap_or(0.0);

    let evaluation = match (entry.kernel, width) {
        (Kernel::Unary { narrow, reference, .. }, Width::Narrow) => {
            let x = x as f32;
            narrow_evaluation(narrow(x), reference(x as f64))
        }
        (Kernel::Unary { wide, reference, .. }, Width::Wide) => {
            wide_evaluation(wide(x), reference(x))
        }
        (Kernel::Binary { narrow, reference, .. }, Width::Narrow) => {
            let (x, y) = (x as f32, y as f32);
            narrow_evaluation(narrow(x, y), reference(x as f64, y as f64))
        }
        (Kernel::Binary { wide, reference, .. }, Width::Wide) => {
            wide_evaluation(wide(x, y), reference(x, y))
        }
        (Kernel::Power { narrow, reference, .. }, Width::Narrow) => {
            let n = integer_exponent(y)?;
            let x = x as f32;
            narrow_evaluation(narrow(x, n), reference(x as f64, n))
        }
        (Kernel::Power { wide, reference, .. }, Width::Wide) => {
            let n = integer_exponent(y)?;
            wide_evaluation(wide(x, n), reference(x, n))
        }
    };
    Ok(evaluation)
}

fn integer_exponent(y: f64) -> Result<i32> {
    if y.fract() != 0.0 || y < i32::MIN as f64 || y > i32::MAX as f64 {
        bail!("exponent must be an integer in i32 range, got {}", y);
    }
    Ok(y as i32)
}

fn narrow_evaluation(value: f32, reference: f64) -> Evaluation {
    Evaluation {
        value: value as f64,
        bits: value.to_bits() as u64,
        literal: format!("{:?}", value),
        reference,
    }
}

fn wide_evaluation(value: f64, reference: f64) -> Evaluation {
    Evaluation {
        value,
        bits: value.to_bits(),
        literal: format!("{:?}", value),
        reference,
    }
}

/// Print one evaluation
pub fn execute(function: &str, args: &[f64], width: Width) -> Result<()> {
    let evaluation = evaluate(function, args, width)?;
    let arguments: Vec<String> = args.iter().map(|a| a.to_string()).collect();
    let error = (evaluation.value - evaluation.reference).abs();

    println!("{}({}) [{}]", function, arguments.join(", "), width.name());
    println!("  value:     {}", evaluation.literal);
    println!(
        "  bits:      {:#0w$x}",
        evaluation.bits,
        w = width.hex_width()
    );
    println!("  reference: {:?}", evaluation.reference);
    println!(
        "  error:     {:.3e} ({:.2} eps)",
        error,
        error / evaluation.reference.abs().max(1.0) / width.epsilon()
    );

    Ok(())
}
