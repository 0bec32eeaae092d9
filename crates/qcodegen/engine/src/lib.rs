//! # qcodegen-engine
//!
//! Quantum program generation pipeline:
//!
//! ```text
//! request ──▶ classifier ──▶ catalog lookup ──▶ substitution ──▶ validator ──▶ result
//! ```
//!
//! Every stage is deterministic — no scoring, no sampling, no model in
//! the loop. The classifier walks a fixed ordered rule table; the
//! substitution engine fills `{{KEY}}` placeholders from template
//! defaults merged with caller overrides; the physics validator checks
//! the template's reference operators numerically (Hermitian, unitary,
//! normalized, commuting) before any text is emitted. Identical
//! requests produce identical results.
//!
//! ```
//! use qcodegen_catalog::{Catalog, Framework};
//! use qcodegen_engine::{GenerationRequest, Generator};
//!
//! let generator = Generator::new(Catalog::builtin()?);
//! let request = GenerationRequest::new(Framework::Qiskit, "vqe ground state of h2")
//!     .with_substitution("OPTIMIZER", "SPSA");
//! let result = generator.generate(&request)?;
//! assert_eq!(result.template_id.as_str(), "vqe_h2_qiskit22");
//! assert!(result.source_text.contains("SPSA"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![deny(unsafe_code)]

pub mod classifier;
pub mod engine;
pub mod error;
pub mod quality;
pub mod substitute;
pub mod types;
pub mod validator;

// Re-exports
pub use classifier::Classifier;
pub use engine::Generator;
pub use error::{GenerateError, GenerateResult};
pub use substitute::SubstitutionEngine;
pub use types::{
    Classification, GenerationRequest, GenerationResult, GeneratorConfig, Predicate,
    ValidationRecord,
};
pub use validator::{PhysicsValidator, DEFAULT_TOLERANCE};
