//! Array forms of the guarded operators.
//!
//! Every function maps the scalar kernel from [`crate::math::guarded`] over a
//! `DVector<f64>` and returns a freshly allocated vector of the same length.
//! Binary operators come in two shapes: vector-vector (`zip_map`, which panics
//! on a length mismatch like any nalgebra element-wise op) and vector-scalar.
//!
//! Operators with a tunable bound have a `_with` variant; the plain name uses
//! the default bound.

use nalgebra::DVector;

use crate::math::guarded::{self, ARCTAN_MAX_VALUE, EXP_MAX_VALUE, POWER_MAX_EXPONENT};

pub fn clip(x: &DVector<f64>, lo: f64, hi: f64) -> DVector<f64> {
    x.map(|v| guarded::clip(v, lo, hi))
}

/// Element-wise `a / b` with 0 wherever `b == 0`.
///
/// # Panics
/// Panics if `a` and `b` have different lengths.
pub fn safe_divide(a: &DVector<f64>, b: &DVector<f64>) -> DVector<f64> {
    a.zip_map(b, guarded::safe_divide)
}

/// Element-wise `a / b` for a scalar divisor.
pub fn safe_divide_scalar(a: &DVector<f64>, b: f64) -> DVector<f64> {
    a.map(|v| guarded::safe_divide(v, b))
}

pub fn safe_log(x: &DVector<f64>) -> DVector<f64> {
    x.map(guarded::safe_log)
}

pub fn safe_sqrt(x: &DVector<f64>) -> DVector<f64> {
    x.map(guarded::safe_sqrt)
}

pub fn safe_tan(x: &DVector<f64>) -> DVector<f64> {
    x.map(guarded::safe_tan)
}

pub fn safe_exp(x: &DVector<f64>) -> DVector<f64> {
    safe_exp_with(x, EXP_MAX_VALUE)
}

pub fn safe_exp_with(x: &DVector<f64>, max_value: f64) -> DVector<f64> {
    x.map(|v| guarded::safe_exp(v, max_value))
}

/// Element-wise guarded power.
///
/// # Panics
/// Panics if `base` and `exponent` have different lengths.
pub fn safe_power(base: &DVector<f64>, exponent: &DVector<f64>) -> DVector<f64> {
    safe_power_with(base, exponent, POWER_MAX_EXPONENT)
}

pub fn safe_power_with(
    base: &DVector<f64>,
    exponent: &DVector<f64>,
    max_exponent: f64,
) -> DVector<f64> {
    base.zip_map(exponent, |b, e| guarded::safe_power(b, e, max_exponent))
}

/// Guarded power with one exponent shared by every element.
pub fn safe_power_scalar(base: &DVector<f64>, exponent: f64, max_exponent: f64) -> DVector<f64> {
    base.map(|b| guarded::safe_power(b, exponent, max_exponent))
}

pub fn safe_arcsin(x: &DVector<f64>) -> DVector<f64> {
    x.map(guarded::safe_arcsin)
}

pub fn safe_arccos(x: &DVector<f64>) -> DVector<f64> {
    x.map(guarded::safe_arccos)
}

pub fn safe_arctan(x: &DVector<f64>) -> DVector<f64> {
    safe_arctan_with(x, ARCTAN_MAX_VALUE)
}

pub fn safe_arctan_with(x: &DVector<f64>, max_value: f64) -> DVector<f64> {
    x.map(|v| guarded::safe_arctan(v, max_value))
}
