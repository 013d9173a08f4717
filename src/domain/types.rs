//! Shared domain types.
//!
//! These types are small and serializable so callers can log, store or
//! compare them without going through the evaluators:
//!
//! - `Formula` names one of the eight fixed expressions
//! - `SafeParams` carries the tunable guard bounds
//! - `FormulaScore` is the error summary of one formula against a target

use std::fmt;
use std::str::FromStr;

use nalgebra::DVector;
use serde::{Deserialize, Serialize};

use crate::math::{ARCTAN_MAX_VALUE, EXP_MAX_VALUE};

/// Positional input columns: `x[i]` is variable `i`, one entry per sample.
pub type Inputs = [DVector<f64>];

/// One of the fixed formula evaluators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Formula {
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
}

impl Formula {
    pub const ALL: [Formula; 8] = [
        Formula::F1,
        Formula::F2,
        Formula::F3,
        Formula::F4,
        Formula::F5,
        Formula::F6,
        Formula::F7,
        Formula::F8,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Formula::F1 => "f1",
            Formula::F2 => "f2",
            Formula::F3 => "f3",
            Formula::F4 => "f4",
            Formula::F5 => "f5",
            Formula::F6 => "f6",
            Formula::F7 => "f7",
            Formula::F8 => "f8",
        }
    }

    /// Number of input columns required (highest variable index + 1).
    ///
    /// `f5` only reads `x[1]` but still needs two columns to index it.
    pub fn arity(self) -> usize {
        match self {
            Formula::F1 => 1,
            Formula::F2 => 2,
            Formula::F3 => 3,
            Formula::F4 => 2,
            Formula::F5 => 2,
            Formula::F6 => 2,
            Formula::F7 => 2,
            Formula::F8 => 6,
        }
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Formula {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Formula::ALL
            .into_iter()
            .find(|f| f.name() == needle)
            .ok_or_else(|| format!("unknown formula {s:?} (expected f1..f8)"))
    }
}

/// Tunable bounds of the guarded operators that the formulas use.
///
/// The defaults are the values every formula is defined with; changing them
/// changes formula outputs. Missing fields deserialize to their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SafeParams {
    /// Input bound of `safe_exp`.
    pub exp_max_value: f64,
    /// Input bound of `safe_arctan`.
    pub arctan_max_value: f64,
}

impl Default for SafeParams {
    fn default() -> Self {
        Self {
            exp_max_value: EXP_MAX_VALUE,
            arctan_max_value: ARCTAN_MAX_VALUE,
        }
    }
}

/// Error summary of a formula's predictions against a target column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormulaScore {
    pub formula: Formula,
    /// Number of samples.
    pub n: usize,
    pub sse: f64,
    pub mse: f64,
    pub rmse: f64,
    /// Samples whose residual is not finite; any makes `sse` infinite.
    pub non_finite: usize,
}
