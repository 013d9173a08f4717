//! `safe-formulas` library crate.
//!
//! Eight fixed closed-form formulas (`f1`..`f8`) evaluated element-wise over
//! column vectors, built on guarded math operators that never raise and never
//! leave their domain:
//!
//! - `math`: scalar guarded kernels and their `DVector` forms
//! - `models`: the formula evaluators
//! - `report`: squared-error scoring of formulas against a target
//! - `config`: guard bounds from the environment

pub mod config;
pub mod domain;
pub mod error;
pub mod math;
pub mod models;
pub mod report;

pub use domain::{Formula, FormulaScore, Inputs, SafeParams};
pub use error::{EvalError, EvalResult};
