//! Formula evaluators.
//!
//! Formulas are implemented as small, pure functions over the input columns so
//! scoring code can stay generic over [`crate::domain::Formula`].

pub mod formula;

pub use formula::*;
