//! Physics validator — numeric correctness predicates over operators.
//!
//! Four independent, pure predicates (Hermitian, unitary, normalized,
//! commuting), each a single evaluation against an absolute tolerance.
//! There is no retry: a predicate either passes and yields a
//! [`ValidationRecord`], or raises its typed violation. Whether a
//! failure aborts the whole pipeline is the orchestrator's decision.

use tracing::debug;

use qcodegen_catalog::Operator;
use qcodegen_numeric::{Matrix, Vector};

use crate::error::{GenerateError, GenerateResult};
use crate::types::{Predicate, ValidationRecord};

/// Default absolute tolerance, on a norm.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Stateless validation service with an injectable tolerance.
///
/// The tolerance is a field rather than a global so tests can probe
/// boundary conditions per call site.
#[derive(Clone, Copy, Debug)]
pub struct PhysicsValidator {
    tolerance: f64,
}

impl Default for PhysicsValidator {
    fn default() -> Self {
        Self::new(DEFAULT_TOLERANCE)
    }
}

impl PhysicsValidator {
    /// Validator with a custom absolute tolerance.
    pub fn new(tolerance: f64) -> Self {
        Self { tolerance }
    }

    /// The configured tolerance.
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Check `H = H†` via `‖H − H†‖_F`.
    pub fn validate_hermitian(&self, h: &Matrix, name: &str) -> GenerateResult<ValidationRecord> {
        let error = h.sub(&h.conjugate_transpose())?.frobenius_norm();
        debug!(operator = name, error, "hermiticity check");
        if error < self.tolerance {
            Ok(ValidationRecord {
                operator: name.into(),
                predicate: Predicate::Hermitian,
                measured_error: error,
            })
        } else {
            Err(GenerateError::HermiticityViolation {
                name: name.into(),
                error,
            })
        }
    }

    /// Check `U†U = I` via `‖U†U − I‖_F`.
    pub fn validate_unitary(&self, u: &Matrix, name: &str) -> GenerateResult<ValidationRecord> {
        let product = u.conjugate_transpose().matmul(u)?;
        let error = product
            .sub(&Matrix::identity(product.rows()))?
            .frobenius_norm();
        debug!(operator = name, error, "unitarity check");
        if error < self.tolerance {
            Ok(ValidationRecord {
                operator: name.into(),
                predicate: Predicate::Unitary,
                measured_error: error,
            })
        } else {
            Err(GenerateError::UnitarityViolation {
                name: name.into(),
                error,
            })
        }
    }

    /// Check `‖v‖ = 1` via `|‖v‖ − 1|`.
    pub fn validate_normalized(&self, v: &Vector, name: &str) -> GenerateResult<ValidationRecord> {
        let error = (v.norm() - 1.0).abs();
        debug!(state = name, error, "normalization check");
        if error < self.tolerance {
            Ok(ValidationRecord {
                operator: name.into(),
                predicate: Predicate::Normalized,
                measured_error: error,
            })
        } else {
            Err(GenerateError::NormalizationViolation {
                name: name.into(),
                error,
            })
        }
    }

    /// Check `AB = BA` via `‖AB − BA‖_F`.
    pub fn validate_commutes(
        &self,
        a: &Matrix,
        b: &Matrix,
        name_a: &str,
        name_b: &str,
    ) -> GenerateResult<ValidationRecord> {
        let error = a.matmul(b)?.sub(&b.matmul(a)?)?.frobenius_norm();
        debug!(left = name_a, right = name_b, error, "commutation check");
        if error < self.tolerance {
            Ok(ValidationRecord {
                operator: format!("[{}, {}]", name_a, name_b),
                predicate: Predicate::Commuting,
                measured_error: error,
            })
        } else {
            Err(GenerateError::CommutationViolation {
                name_a: name_a.into(),
                name_b: name_b.into(),
                error,
            })
        }
    }

    /// Dispatch an operator to the predicate its variant demands.
    pub fn validate_operator(&self, operator: &Operator) -> GenerateResult<ValidationRecord> {
        match operator {
            Operator::Hamiltonian { name, matrix } => self.validate_hermitian(matrix, name),
            Operator::Unitary { name, matrix } => self.validate_unitary(matrix, name),
            Operator::State { name, vector } => self.validate_normalized(vector, name),
        }
    }
}
