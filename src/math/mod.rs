//! Guarded math operators: scalar kernels and their element-wise array forms.
//!
//! The scalar kernels live in [`guarded`] and are re-exported at this level.
//! The array forms in [`elementwise`] share the same names, so callers import
//! that module by path (`math::elementwise::safe_log`).

pub mod elementwise;
pub mod guarded;

pub use guarded::*;
