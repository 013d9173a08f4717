//! Scalar guarded operators.
//!
//! Each function is total over the reals: an input outside the primitive's
//! domain is replaced by a harmless value (or clipped into range) before the
//! primitive runs. The substituted values are part of the formulas' meaning
//! and must not be changed:
//!
//! - `safe_divide(a, 0) = 0`
//! - `safe_log(x <= 0) = ln(1) = 0`
//! - `safe_sqrt(x < 0) = 0`
//! - `safe_tan(x)` near a pole evaluates `tan(0) = 0`
//! - `safe_power` replaces non-positive bases with 1
//!
//! NaN inputs follow the same comparisons, so a NaN fails every "is in domain"
//! test and gets the substitute, except where a value is only clipped (clip
//! keeps NaN).

/// Default input bound for [`safe_exp`].
pub const EXP_MAX_VALUE: f64 = 700.0;

/// Output bound for [`safe_exp`]; results are clipped to `[-EXP_OUTPUT_BOUND, EXP_OUTPUT_BOUND]`.
pub const EXP_OUTPUT_BOUND: f64 = 1e10;

/// Default exponent bound for [`safe_power`].
pub const POWER_MAX_EXPONENT: f64 = 3.0;

/// Default input bound for [`safe_arctan`].
pub const ARCTAN_MAX_VALUE: f64 = 1000.0;

/// `|cos(x)|` at or below this is treated as a pole of `tan`.
pub const TAN_POLE_EPS: f64 = 1e-6;

/// Restrict `x` to `[lo, hi]`.
///
/// Unlike [`f64::clamp`] this never panics: with inverted bounds the upper
/// bound wins (`min(max(x, lo), hi)`). NaN is returned unchanged.
pub fn clip(x: f64, lo: f64, hi: f64) -> f64 {
    if x.is_nan() {
        return x;
    }
    let x = if x < lo { lo } else { x };
    if x > hi { hi } else { x }
}

/// `a / b`, or `0` where `b == 0`.
pub fn safe_divide(a: f64, b: f64) -> f64 {
    if b != 0.0 { a / b } else { 0.0 }
}

pub fn safe_log(x: f64) -> f64 {
    let x = if x > 0.0 { x } else { 1.0 };
    x.ln()
}

pub fn safe_sqrt(x: f64) -> f64 {
    let x = if x >= 0.0 { x } else { 0.0 };
    x.sqrt()
}

pub fn safe_tan(x: f64) -> f64 {
    let x = if x.cos().abs() > TAN_POLE_EPS { x } else { 0.0 };
    x.tan()
}

/// `exp(x)` with the input clipped to `[-max_value, max_value]` and the
/// output clipped to `[-EXP_OUTPUT_BOUND, EXP_OUTPUT_BOUND]`.
pub fn safe_exp(x: f64, max_value: f64) -> f64 {
    let result = clip(x, -max_value, max_value).exp();
    clip(result, -EXP_OUTPUT_BOUND, EXP_OUTPUT_BOUND)
}

/// `base^exponent` restricted to real results.
///
/// A non-positive base is replaced by 1 (fractional powers of negatives have
/// no real value), the exponent is clipped to `[-max_exponent, max_exponent]`,
/// and `0^e` for a clipped `e <= 0` is defined as 1.
pub fn safe_power(base: f64, exponent: f64, max_exponent: f64) -> f64 {
    let safe_base = if base > 0.0 { base } else { 1.0 };
    let exponent = clip(exponent, -max_exponent, max_exponent);
    if base == 0.0 && exponent <= 0.0 {
        return 1.0;
    }
    safe_base.powf(exponent)
}

pub fn safe_arcsin(x: f64) -> f64 {
    clip(x, -1.0, 1.0).asin()
}

pub fn safe_arccos(x: f64) -> f64 {
    clip(x, -1.0, 1.0).acos()
}

pub fn safe_arctan(x: f64, max_value: f64) -> f64 {
    clip(x, -max_value, max_value).atan()
}
