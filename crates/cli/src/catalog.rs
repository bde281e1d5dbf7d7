//! Function catalog
//!
//! Maps names to kernels in both widths, the `libm` reference, the sampling domain used
//! by accuracy reports and the per-width error budget. Groups expand recursively to
//! their member functions.

use anyhow::{bail, Result};
use polykern_math as pk;

/// A kernel instantiated in both widths, with its `libm` reference
#[derive(Clone, Copy)]
pub enum Kernel {
    /// `f(x)`
    Unary {
        narrow: fn(f32) -> f32,
        wide: fn(f64) -> f64,
        reference: fn(f64) -> f64,
    },
    /// `f(x, y)`
    Binary {
        narrow: fn(f32, f32) -> f32,
        wide: fn(f64, f64) -> f64,
        reference: fn(f64, f64) -> f64,
    },
    /// `f(x, n)` with an integer exponent
    Power {
        narrow: fn(f32, i32) -> f32,
        wide: fn(f64, i32) -> f64,
        reference: fn(f64, i32) -> f64,
    },
}

impl Kernel {
    /// Number of arguments `eval` expects
    pub fn arity(&self) -> usize {
        match self {
            Kernel::Unary { .. } => 1,
            Kernel::Binary { .. } | Kernel::Power { .. } => 2,
        }
    }
}

/// Spacing of the samples drawn from a domain
#[derive(Clone, Copy, Debug)]
pub enum Domain {
    /// Evenly spaced over `[lo, hi]`
    Linear(f64, f64),
    /// Evenly spaced in `log10` over `[lo, hi]`, both positive
    Log(f64, f64),
}

impl Domain {
    /// `count` samples over the domain, endpoints included
    pub fn samples(&self, count: usize) -> Vec<f64> {
        let (lo, hi, log) = match *self {
            Domain::Linear(lo, hi) => (lo, hi, false),
            Domain::Log(lo, hi) => (libm::log10(lo), libm::log10(hi), true),
        };
        let step = if count > 1 {
            (hi - lo) / (count - 1) as f64
        } else {
            0.0
        };
        (0..count)
            .map(|i| {
                let t = lo + step * i as f64;
                if log {
                    libm::pow(10.0, t)
                } else {
                    t
                }
            })
            .collect()
    }
}

/// One catalog function
#[derive(Clone, Copy)]
pub struct Entry {
    pub name: &'static str,
    pub kernel: Kernel,
    /// Domain of the first argument in accuracy reports
    pub domain: Domain,
    /// Fixed second argument of binary and power kernels in accuracy reports
    pub second: f64,
    /// Error budget in units of `f32::EPSILON`, scaled by `max(1, |reference|)`
    pub narrow_budget: f64,
    /// Error budget in units of `f64::EPSILON`, scaled by `max(1, |reference|)`
    pub wide_budget: f64,
}

/// A named set of functions and other groups
pub struct Group {
    pub name: &'static str,
    pub members: &'static [&'static str],
}

macro_rules! unary {
    ($name:ident, $reference:expr, $domain:expr, $narrow_budget:expr, $wide_budget:expr) => {
        Entry {
            name: stringify!($name),
            kernel: Kernel::Unary {
                narrow: pk::$name,
                wide: pk::$name,
                reference: $reference,
            },
            domain: $domain,
            second: 0.0,
            narrow_budget: $narrow_budget,
            wide_budget: $wide_budget,
        }
    };
}

macro_rules! binary {
    ($name:ident, $reference:expr, $domain:expr, $second:expr, $narrow_budget:expr, $wide_budget:expr) => {
        Entry {
            name: stringify!($name),
            kernel: Kernel::Binary {
                narrow: pk::$name,
                wide: pk::$name,
                reference: $reference,
            },
            domain: $domain,
            second: $second,
            narrow_budget: $narrow_budget,
            wide_budget: $wide_budget,
        }
    };
}

pub static FUNCTIONS: &[Entry] = &[
    unary!(sin, libm::sin, Domain::Linear(-10.0, 10.0), 27.0, 23.0),
    unary!(cos, libm::cos, Domain::Linear(-10.0, 10.0), 21.0, 19.0),
    unary!(tan, libm::tan, Domain::Linear(-1.4, 1.4), 17.0, 14.0),
    unary!(asin, libm::asin, Domain::Linear(-1.0, 1.0), 4.0, 8.0),
    unary!(acos, libm::acos, Domain::Linear(-1.0, 1.0), 7.0, 10.0),
    unary!(atan, libm::atan, Domain::Linear(-100.0, 100.0), 4.0, 5.0),
    binary!(atan2, libm::atan2, Domain::Linear(-10.0, 10.0), -1.5, 6.0, 10.0),
    unary!(exp, libm::exp, Domain::Linear(-10.0, 10.0), 12.0, 11.0),
    unary!(exp2, libm::exp2, Domain::Linear(-120.0, 120.0), 2.0, 3.0),
    unary!(exp_m1, libm::expm1, Domain::Linear(-5.0, 5.0), 7.0, 7.0),
    unary!(ln, libm::log, Domain::Log(1.0e-3, 1.0e3), 16.0, 17.0),
    unary!(log2, libm::log2, Domain::Log(1.0e-3, 1.0e3), 14.0, 14.0),
    unary!(log10, libm::log10, Domain::Log(1.0e-3, 1.0e3), 11.0, 8.0),
    binary!(
        log,
        |x, base| libm::log(x) / libm::log(base),
        Domain::Log(1.0e-3, 1.0e3),
        7.0,
        14.0,
        14.0
    ),
    unary!(ln_1p, libm::log1p, Domain::Linear(-0.9, 10.0), 7.0, 8.0),
    binary!(powf, libm::pow, Domain::Linear(0.1, 10.0), 2.5, 14.0, 19.0),
    Entry {
        name: "powi",
        kernel: Kernel::Power {
            narrow: pk::powi,
            wide: pk::powi,
            reference: |x, n| libm::pow(x, n as f64),
        },
        domain: Domain::Linear(0.5, 2.0),
        second: 7.0,
        narrow_budget: 8.0,
        wide_budget: 28.0,
    },
    unary!(sinh, libm::sinh, Domain::Linear(-10.0, 10.0), 12.0, 12.0),
    unary!(cosh, libm::cosh, Domain::Linear(-10.0, 10.0), 12.0, 12.0),
    unary!(tanh, libm::tanh, Domain::Linear(-10.0, 10.0), 5.0, 5.0),
    unary!(asinh, libm::asinh, Domain::Linear(-100.0, 100.0), 12.0, 14.0),
    unary!(acosh, libm::acosh, Domain::Linear(1.0, 100.0), 12.0, 14.0),
    unary!(atanh, libm::atanh, Domain::Linear(-0.99, 0.99), 6.0, 7.0),
    unary!(recip, |x| 1.0 / x, Domain::Log(1.0e-30, 1.0e30), 3.0, 4.0),
    unary!(sqrt, libm::sqrt, Domain::Log(1.0e-30, 1.0e30), 2.0, 3.0),
    unary!(cbrt, libm::cbrt, Domain::Linear(-1000.0, 1000.0), 3.0, 3.0),
    binary!(hypot, libm::hypot, Domain::Linear(-100.0, 100.0), 3.3, 4.0, 4.0),
];

pub static GROUPS: &[Group] = &[
    Group {
        name: "invtrig",
        members: &["asin", "acos", "atan", "atan2"],
    },
    Group {
        name: "trig",
        members: &["sin", "cos", "tan", "invtrig"],
    },
    Group {
        name: "invhyperbolic",
        members: &["asinh", "acosh", "atanh"],
    },
    Group {
        name: "hyperbolic",
        members: &["sinh", "cosh", "tanh", "invhyperbolic"],
    },
    Group {
        name: "logexp",
        members: &[
            "exp", "exp2", "exp_m1", "ln", "log2", "log10", "log", "ln_1p", "powf", "powi",
        ],
    },
    Group {
        name: "recip_sqrt",
        members: &["recip", "sqrt", "cbrt", "hypot"],
    },
    Group {
        name: "libm",
        members: &["logexp", "trig", "hyperbolic", "recip_sqrt"],
    },
    Group {
        name: "all",
        members: &["libm"],
    },
];

/// Look up a single function
pub fn find(name: &str) -> Result<&'static Entry> {
    match FUNCTIONS.iter().find(|entry| entry.name == name) {
        Some(entry) => Ok(entry),
        None => bail!("unknown function '{}' (use \"help\" for a list)", name),
    }
}

/// Expand a comma-separated list of functions and groups
///
/// Groups expand recursively. Each function appears once, in first-mention order.
pub fn resolve(list: &str) -> Result<Vec<&'static Entry>> {
    let mut resolved: Vec<&'static Entry> = Vec::new();
    for name in list.split(',').map(str::trim).filter(|name| !name.is_empty()) {
        expand(name, &mut resolved)?;
    }
    if resolved.is_empty() {
        bail!("no functions selected (use \"help\" for a list)");
    }
    Ok(resolved)
}

fn expand(name: &str, resolved: &mut Vec<&'static Entry>) -> Result<()> {
    if let Some(group) = GROUPS.iter().find(|group| group.name == name) {
        for member in group.members {
            expand(member, resolved)?;
        }
        return Ok(());
    }
    match FUNCTIONS.iter().find(|entry| entry.name == name) {
        Some(entry) => {
            if !resolved.iter().any(|seen| seen.name == entry.name) {
                resolved.push(entry);
            }
            Ok(())
        }
        None => bail!("unknown function or group '{}' (use \"help\" for a list)", name),
    }
}

/// Listing printed for `--functions help`
pub fn help_text() -> String {
    let mut text = String::from("Functions:\n");
    for entry in FUNCTIONS {
        let arguments = match entry.kernel {
            Kernel::Unary { .. } => "x",
            Kernel::Binary { .. } => "x, y",
            Kernel::Power { .. } => "x, n",
        };
        text.push_str(&format!("  {}({})\n", entry.name, arguments));
    }
    text.push_str("\nGroups:\n");
    for group in GROUPS {
        text.push_str(&format!("  {}: {}\n", group.name, group.members.join(", ")));
    }
    text
}
