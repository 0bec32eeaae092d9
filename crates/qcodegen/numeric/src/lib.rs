//! # qcodegen-numeric
//!
//! Numeric kernel for the quantum codegen pipeline: complex scalars and
//! small dense matrices/vectors (2×2 up to 16×16) in IEEE f64 precision.
//!
//! All operations are pure — inputs are never mutated, results are fresh
//! allocations. There is no sparse special-casing at these sizes.

#![deny(unsafe_code)]

pub mod complex;
pub mod error;
pub mod matrix;
pub mod vector;

// Re-exports
pub use complex::Complex;
pub use error::{NumericError, NumericResult};
pub use matrix::Matrix;
pub use vector::Vector;
