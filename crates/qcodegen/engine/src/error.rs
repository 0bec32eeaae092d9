//! Error taxonomy for the generation pipeline.
//!
//! Every error here is fatal to the current request — there is no
//! partial result and no automatic retry. Messages carry only the
//! offending input, operator names, and measured error magnitudes.

use thiserror::Error;

use qcodegen_catalog::TemplateId;
use qcodegen_numeric::NumericError;

/// Errors that can abort a generation request.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GenerateError {
    /// The classifier exhausted its rule table.
    #[error("no matching template for '{query}'; recognized categories: {known_categories:?}")]
    NoMatchingTemplate {
        /// The offending query.
        query: String,
        /// Top-level category keywords the rule table recognizes.
        known_categories: Vec<String>,
    },

    /// The rule table or caller referenced a template the catalog does
    /// not hold, or the entry's body artifact is missing. A catalog
    /// defect, not user error.
    #[error("template not found in catalog: {0}")]
    TemplateNotFound(TemplateId),

    /// Placeholder tokens survived substitution.
    #[error("unresolved placeholders: {keys:?}")]
    UnresolvedPlaceholder {
        /// The leftover keys, sorted and deduplicated.
        keys: Vec<String>,
    },

    /// `‖H − H†‖_F` exceeded the tolerance.
    #[error("hermiticity violation for '{name}': error {error:.3e}")]
    HermiticityViolation {
        /// Operator name.
        name: String,
        /// Measured Frobenius-norm deviation.
        error: f64,
    },

    /// `‖U†U − I‖_F` exceeded the tolerance.
    #[error("unitarity violation for '{name}': error {error:.3e}")]
    UnitarityViolation {
        /// Operator name.
        name: String,
        /// Measured Frobenius-norm deviation.
        error: f64,
    },

    /// `|‖v‖ − 1|` exceeded the tolerance.
    #[error("normalization violation for '{name}': error {error:.3e}")]
    NormalizationViolation {
        /// State name.
        name: String,
        /// Measured norm deviation.
        error: f64,
    },

    /// `‖AB − BA‖_F` exceeded the tolerance.
    #[error("commutation violation for '{name_a}' and '{name_b}': error {error:.3e}")]
    CommutationViolation {
        /// Left operand name.
        name_a: String,
        /// Right operand name.
        name_b: String,
        /// Measured Frobenius-norm of the commutator.
        error: f64,
    },

    /// The numeric kernel received incompatible shapes — a defect in
    /// catalog data, not user input.
    #[error(transparent)]
    Numeric(#[from] NumericError),
}

/// Convenience result type for pipeline operations.
pub type GenerateResult<T> = Result<T, GenerateError>;
