//! iai-callgrind benchmarks for polykern-math
//!
//! Measures instruction counts per kernel call (deterministic, cachegrind-based).
//! Run with: cargo bench --bench iai_benches

use iai_callgrind::{library_benchmark, library_benchmark_group, main};
use polykern_math::*;
use std::hint::black_box;

// Trigonometric

#[library_benchmark]
fn bench_sin_f32() -> f32 {
    black_box(sin(black_box(1.234f32)))
}

#[library_benchmark]
fn bench_sin_f64() -> f64 {
    black_box(sin(black_box(1.234f64)))
}

#[library_benchmark]
fn bench_tan_f64() -> f64 {
    black_box(tan(black_box(1.234f64)))
}

#[library_benchmark]
fn bench_sin_cos_f64() -> (f64, f64) {
    black_box(sin_cos(black_box(1.234f64)))
}

library_benchmark_group!(
    name = trig_group;
    benchmarks = bench_sin_f32, bench_sin_f64, bench_tan_f64, bench_sin_cos_f64
);

// Inverse trigonometric

#[library_benchmark]
fn bench_asin_f64() -> f64 {
    black_box(asin(black_box(0.95f64)))
}

#[library_benchmark]
fn bench_atan_f64() -> f64 {
    black_box(atan(black_box(20.0f64)))
}

#[library_benchmark]
fn bench_atan2_f64() -> f64 {
    black_box(atan2(black_box(-0.7f64), black_box(-2.0)))
}

library_benchmark_group!(
    name = inverse_trig_group;
    benchmarks = bench_asin_f64, bench_atan_f64, bench_atan2_f64
);

// Exponential and logarithmic

#[library_benchmark]
fn bench_exp2_f32() -> f32 {
    black_box(exp2(black_box(3.7f32)))
}

#[library_benchmark]
fn bench_exp_f64() -> f64 {
    black_box(exp(black_box(3.7f64)))
}

#[library_benchmark]
fn bench_ln_f64() -> f64 {
    black_box(ln(black_box(37.0f64)))
}

#[library_benchmark]
fn bench_ln_1p_f64() -> f64 {
    black_box(ln_1p(black_box(0.01f64)))
}

#[library_benchmark]
fn bench_powf_f64() -> f64 {
    black_box(powf(black_box(1.7f64), black_box(2.3)))
}

#[library_benchmark]
fn bench_powi_small_f64() -> f64 {
    black_box(powi(black_box(1.01f64), black_box(15)))
}

#[library_benchmark]
fn bench_powi_large_f64() -> f64 {
    black_box(powi(black_box(1.01f64), black_box(40)))
}

library_benchmark_group!(
    name = exp_log_group;
    benchmarks = bench_exp2_f32, bench_exp_f64, bench_ln_f64, bench_ln_1p_f64,
                 bench_powf_f64, bench_powi_small_f64, bench_powi_large_f64
);

// Hyperbolic

#[library_benchmark]
fn bench_tanh_f64() -> f64 {
    black_box(tanh(black_box(1.5f64)))
}

#[library_benchmark]
fn bench_asinh_f64() -> f64 {
    black_box(asinh(black_box(1.5f64)))
}

#[library_benchmark]
fn bench_atanh_f64() -> f64 {
    black_box(atanh(black_box(0.5f64)))
}

library_benchmark_group!(
    name = hyperbolic_group;
    benchmarks = bench_tanh_f64, bench_asinh_f64, bench_atanh_f64
);

// Seed-and-refine

#[library_benchmark]
fn bench_recip_f32() -> f32 {
    black_box(recip(black_box(3.7f32)))
}

#[library_benchmark]
fn bench_recip_f64() -> f64 {
    black_box(recip(black_box(3.7f64)))
}

#[library_benchmark]
fn bench_sqrt_f64() -> f64 {
    black_box(sqrt(black_box(3.7f64)))
}

#[library_benchmark]
fn bench_cbrt_f64() -> f64 {
    black_box(cbrt(black_box(-3.7f64)))
}

#[library_benchmark]
fn bench_hypot_f64() -> f64 {
    black_box(hypot(black_box(3.0f64), black_box(4.0)))
}

library_benchmark_group!(
    name = roots_group;
    benchmarks = bench_recip_f32, bench_recip_f64, bench_sqrt_f64, bench_cbrt_f64,
                 bench_hypot_f64
);

main!(
    library_benchmark_groups = trig_group,
    inverse_trig_group,
    exp_log_group,
    hyperbolic_group,
    roots_group
);
