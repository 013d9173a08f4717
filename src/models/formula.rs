//! The eight fixed formula evaluators.
//!
//! Each formula is a hard-coded expression over the input columns, mixing raw
//! `sin`/`cos`/`tan`/`exp` with the guarded operators. Grouping and literal
//! folding follow the reference expressions exactly so outputs are
//! reproducible bit-for-bit; do not "simplify" them.
//!
//! Two entry points:
//! - [`evaluate`] / `f1..f8` / [`Formula::eval`]: unchecked. Too few columns
//!   panic on indexing, ragged columns panic inside nalgebra's `zip_map`.
//! - [`Formula::try_eval`]: validates the input shape first and returns
//!   [`EvalError`] instead.

use nalgebra::DVector;

use crate::domain::{Formula, Inputs, SafeParams};
use crate::error::{EvalError, EvalResult};
use crate::math::elementwise as ew;
use crate::math::guarded;

const F2_A: f64 = 9.6042 * 6.8333 * 6.4375;
const F2_B: f64 = 6.0417 * F2_A * 9.2083;
const F2_D: f64 = 0.8958 * (7.2292 * 8.0208);

const F6_SCALE: f64 = 2.1379310344827585;
const F6_SHIFT: f64 = 1.1551724137931034;

/// Evaluate `formula` over `x` with the given guard bounds.
///
/// # Panics
/// Panics if `x` has fewer than `formula.arity()` columns or the columns a
/// formula combines differ in length.
pub fn evaluate(formula: Formula, x: &Inputs, params: &SafeParams) -> DVector<f64> {
    match formula {
        Formula::F1 => eval_f1(x),
        Formula::F2 => eval_f2(x),
        Formula::F3 => eval_f3(x),
        Formula::F4 => eval_f4(x),
        Formula::F5 => eval_f5(x),
        Formula::F6 => eval_f6(x, params),
        Formula::F7 => eval_f7(x, params),
        Formula::F8 => eval_f8(x, params),
    }
}

/// Check that `x` has enough columns for `formula` and that the columns it
/// needs share one length. Returns that length.
pub fn validate_inputs(formula: Formula, x: &Inputs) -> EvalResult<usize> {
    let required = formula.arity();
    if x.len() < required {
        return Err(EvalError::MissingVariables {
            formula,
            required,
            actual: x.len(),
        });
    }

    let n = x[0].len();
    for (i, col) in x.iter().enumerate().take(required).skip(1) {
        if col.len() != n {
            return Err(EvalError::LengthMismatch {
                what: format!("x[{i}]"),
                expected: n,
                actual: col.len(),
            });
        }
    }
    Ok(n)
}

impl Formula {
    /// Evaluate with the default guard bounds (unchecked, see [`evaluate`]).
    pub fn eval(self, x: &Inputs) -> DVector<f64> {
        evaluate(self, x, &SafeParams::default())
    }

    /// Evaluate with explicit guard bounds (unchecked, see [`evaluate`]).
    pub fn eval_with(self, x: &Inputs, params: &SafeParams) -> DVector<f64> {
        evaluate(self, x, params)
    }

    /// Validate the input shape, then evaluate with the default guard bounds.
    ///
    /// Columns past `arity()` are ignored and not length-checked.
    pub fn try_eval(self, x: &Inputs) -> EvalResult<DVector<f64>> {
        self.try_eval_with(x, &SafeParams::default())
    }

    pub fn try_eval_with(self, x: &Inputs, params: &SafeParams) -> EvalResult<DVector<f64>> {
        validate_inputs(self, x)?;
        Ok(evaluate(self, x, params))
    }
}

pub fn f1(x: &Inputs) -> DVector<f64> {
    Formula::F1.eval(x)
}

pub fn f2(x: &Inputs) -> DVector<f64> {
    Formula::F2.eval(x)
}

pub fn f3(x: &Inputs) -> DVector<f64> {
    Formula::F3.eval(x)
}

pub fn f4(x: &Inputs) -> DVector<f64> {
    Formula::F4.eval(x)
}

pub fn f5(x: &Inputs) -> DVector<f64> {
    Formula::F5.eval(x)
}

pub fn f6(x: &Inputs) -> DVector<f64> {
    Formula::F6.eval(x)
}

pub fn f7(x: &Inputs) -> DVector<f64> {
    Formula::F7.eval(x)
}

pub fn f8(x: &Inputs) -> DVector<f64> {
    Formula::F8.eval(x)
}

/// `sin(x0)`
fn eval_f1(x: &Inputs) -> DVector<f64> {
    x[0].map(f64::sin)
}

/// `D * x0 * (B + safe_divide(x0, 4.8542) * safe_sqrt(4.0625 - x1) * A)`
fn eval_f2(x: &Inputs) -> DVector<f64> {
    let sqrt_term = ew::safe_sqrt(&x[1].map(|v| 4.0625 - v));
    let division_term = ew::safe_divide_scalar(&x[0], 4.8542);

    let term2 = division_term.zip_map(&sqrt_term, |d, s| d * s * F2_A);
    x[0].zip_map(&term2, |x0, t2| F2_D * x0 * (F2_B + t2))
}

/// `(22.0833 - 8.625 x1 - 4.0625 safe_sqrt(x2))
///   - (tan(sin(sin(x2/10) - sin(3.6667 + (7.2292 - x0)))) + 6.0417 x1)`
fn eval_f3(x: &Inputs) -> DVector<f64> {
    let group1 = x[1].zip_map(&ew::safe_sqrt(&x[2]), |x1, s| 22.0833 - 8.625 * x1 - 4.0625 * s);

    let inner_sin1 = x[2].map(|v| (v / 10.0).sin());
    let inner_sin2 = x[0].map(|v| (3.6667 + (7.2292 - v)).sin());
    let tan_term = inner_sin1.zip_map(&inner_sin2, |a, b| (a - b).sin().tan());
    let group2 = tan_term.zip_map(&x[1], |t, x1| t + 6.0417 * x1);

    group1 - group2
}

/// `exp(safe_arcsin(0.6702 + cos(x1)) + cos(x1))`
fn eval_f4(x: &Inputs) -> DVector<f64> {
    let cos_x1 = x[1].map(f64::cos);
    let arcsin_term = ew::safe_arcsin(&cos_x1.map(|c| 0.6702 + c));
    arcsin_term.zip_map(&cos_x1, |a, c| (a + c).exp())
}

/// `safe_log(cos(safe_arccos(safe_arcsin(sin(safe_log(2 - x1))))))` times a
/// constant built from nested `safe_tan`.
fn eval_f5(x: &Inputs) -> DVector<f64> {
    let sin_log = ew::safe_log(&x[1].map(|v| 2.0 - v)).map(f64::sin);
    let angle = ew::safe_arccos(&ew::safe_arcsin(&sin_log));
    let log_cos_value = ew::safe_log(&angle.map(f64::cos));

    log_cos_value * f5_tan_factor()
}

/// `safe_tan(safe_tan(cos(safe_arcsin(4.25)))^0.875)^0.875`
fn f5_tan_factor() -> f64 {
    let inner = guarded::safe_tan(guarded::safe_arcsin(4.25).cos()).powf(0.875);
    guarded::safe_tan(inner).powf(0.875)
}

/// `x1 + (x1 + safe_arctan(safe_sqrt(safe_exp(x0/S - x1 - T))) - x0)`
fn eval_f6(x: &Inputs, params: &SafeParams) -> DVector<f64> {
    let exponent = x[0].zip_map(&x[1], |x0, x1| x0 / F6_SCALE - x1 - F6_SHIFT);
    let exp_value = ew::safe_exp_with(&exponent, params.exp_max_value);
    let arctan_value = ew::safe_arctan_with(&ew::safe_sqrt(&exp_value), params.arctan_max_value);

    let partial = x[1].zip_map(&arctan_value, |x1, a| x1 + a);
    x[1].zip_zip_map(&partial, &x[0], |x1, p, x0| x1 + (p - x0))
}

/// `safe_arctan(x1 - 4.25) + 2 exp(x0 x1 + 0.875)`
///
/// The `exp` is raw and may overflow to infinity.
fn eval_f7(x: &Inputs, params: &SafeParams) -> DVector<f64> {
    let arctan_term = ew::safe_arctan_with(&x[1].map(|v| v - 4.25), params.arctan_max_value);
    let exp_term = x[0].zip_map(&x[1], |x0, x1| 2.0 * (x0 * x1 + 0.875).exp());
    arctan_term + exp_term
}

/// `safe_exp(2.9375 + x5) - (x5 + (3.125^2.9375 - x0))`
fn eval_f8(x: &Inputs, params: &SafeParams) -> DVector<f64> {
    let exp_value = ew::safe_exp_with(&x[5].map(|v| 2.9375 + v), params.exp_max_value);
    let power_value = 3.125f64.powf(2.9375);
    exp_value.zip_zip_map(&x[5], &x[0], |e, x5, x0| e - (x5 + (power_value - x0)))
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use super::*;

    fn cols(rows: &[&[f64]]) -> Vec<DVector<f64>> {
        rows.iter().map(|r| DVector::from_row_slice(r)).collect()
    }

    #[test]
    fn f1_is_sine() {
        let out = f1(&cols(&[&[0.0, FRAC_PI_2]]));
        assert_eq!(out[0], 0.0);
        assert!((out[1] - 1.0).abs() < 1e-15);
    }

    #[test]
    fn f2_guards_sqrt_and_matches_closed_form() {
        let x = cols(&[&[1.0, 2.0], &[0.0, 10.0]]);
        let out = f2(&x);

        let expected0 = F2_D * 1.0 * (F2_B + (1.0 / 4.8542) * 4.0625f64.sqrt() * F2_A);
        assert_eq!(out[0], expected0);
        // 4.0625 - 10 < 0, so the sqrt term vanishes.
        assert_eq!(out[1], F2_D * 2.0 * F2_B);
    }

    #[test]
    fn f3_negative_x2_uses_zero_sqrt() {
        let x = cols(&[&[1.0], &[2.0], &[-4.0]]);
        let out = f3(&x);
        let inner = (-0.4f64).sin() - (3.6667 + (7.2292 - 1.0f64)).sin();
        let expected = (22.0833 - 8.625 * 2.0 - 0.0) - (inner.sin().tan() + 6.0417 * 2.0);
        assert_eq!(out[0], expected);
    }

    #[test]
    fn f4_saturates_arcsin() {
        // cos(0) = 1, so 0.6702 + 1 is clipped to 1 and arcsin gives pi/2.
        let out = f4(&cols(&[&[0.0], &[0.0]]));
        assert_eq!(out[0], (1.0f64.asin() + 1.0).exp());
        assert!((out[0] - (FRAC_PI_2 + 1.0).exp()).abs() < 1e-12);
    }

    #[test]
    fn f5_is_finite_and_tiny() {
        let out = f5(&cols(&[&[0.0, 0.0, 0.0], &[-3.0, 1.0, 5.0]]));
        assert!(out.iter().all(|v| v.is_finite()));
        // The constant factor is a nested tan of cos(pi/2) ~ 6e-17.
        assert!(f5_tan_factor() > 0.0 && f5_tan_factor() < 1e-10);
        // x1 = -3: sin(ln 5) is close to 1, so arccos saturates to 0 and
        // the outer log sees cos(0) = 1.
        assert_eq!(out[0], 0.0);
        // x1 = 1: safe_log(1) = 0, arccos(0) = pi/2, cos(pi/2) is tiny but positive.
        let expected = 0.0f64.acos().cos().ln() * f5_tan_factor();
        assert_eq!(out[1], expected);
        // x1 = 5: 2 - x1 < 0 takes the same path as x1 = 1.
        assert_eq!(out[2], expected);
    }

    #[test]
    fn f6_matches_closed_form() {
        let out = f6(&cols(&[&[1.0], &[0.5]]));
        let e = (1.0 / F6_SCALE - 0.5 - F6_SHIFT).exp();
        let expected = 0.5 + (0.5 + e.sqrt().atan() - 1.0);
        assert_eq!(out[0], expected);
    }

    #[test]
    fn f7_reference_point() {
        let out = f7(&cols(&[&[0.0], &[4.25]]));
        assert_eq!(out[0], 0.0 + 2.0 * 0.875f64.exp());
        assert!((out[0] - 4.7978).abs() < 1e-3);
    }

    #[test]
    fn f7_raw_exp_can_overflow() {
        let out = f7(&cols(&[&[1e3], &[1e3]]));
        assert!(out[0].is_infinite());
    }

    #[test]
    fn f8_at_origin() {
        let zero: &[f64] = &[0.0];
        let out = f8(&cols(&[zero, zero, zero, zero, zero, zero]));
        let expected = 2.9375f64.exp() - (0.0 + (3.125f64.powf(2.9375) - 0.0));
        assert_eq!(out[0], expected);
    }

    #[test]
    fn try_eval_rejects_missing_columns() {
        let x = cols(&[&[0.0], &[0.0], &[0.0], &[0.0], &[0.0]]);
        let err = Formula::F8.try_eval(&x).unwrap_err();
        assert_eq!(
            err,
            EvalError::MissingVariables {
                formula: Formula::F8,
                required: 6,
                actual: 5,
            }
        );
    }

    #[test]
    fn try_eval_rejects_ragged_columns() {
        let x = cols(&[&[0.0, 1.0], &[0.0]]);
        let err = Formula::F7.try_eval(&x).unwrap_err();
        assert!(matches!(err, EvalError::LengthMismatch { expected: 2, actual: 1, .. }));
    }

    #[test]
    fn try_eval_ignores_extra_columns() {
        let x = cols(&[&[0.3, 0.7], &[1.0], &[9.0, 9.0, 9.0]]);
        assert_eq!(Formula::F1.try_eval(&x).unwrap(), f1(&x));
    }

    #[test]
    #[should_panic]
    fn unchecked_eval_panics_on_missing_columns() {
        let _ = f8(&cols(&[&[0.0]]));
    }

    #[test]
    fn custom_params_change_guarded_formulas() {
        let x = cols(&[&[0.0], &[0.0], &[0.0], &[0.0], &[0.0], &[100.0]]);
        let tight = SafeParams {
            exp_max_value: 1.0,
            ..SafeParams::default()
        };
        let out = Formula::F8.eval_with(&x, &tight);
        let expected = 1.0f64.exp() - (100.0 + (3.125f64.powf(2.9375) - 0.0));
        assert_eq!(out[0], expected);
        assert_ne!(out, f8(&x));
    }
}
