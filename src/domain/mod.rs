//! Domain types used throughout the crate.
//!
//! This module defines:
//!
//! - the formula registry (`Formula`) and input layout (`Inputs`)
//! - guard configuration (`SafeParams`)
//! - scoring output (`FormulaScore`)

pub mod types;

pub use types::*;
