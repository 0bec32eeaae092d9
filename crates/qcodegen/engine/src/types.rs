//! Request/response types and engine configuration.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use qcodegen_catalog::{ExpectedResult, Framework, TemplateId};

// ── Request ────────────────────────────────────────────────────────────

/// One generation request. Created and discarded per call; the pipeline
/// keeps no state across requests.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Target framework.
    pub framework: Framework,
    /// Free-text description of the desired program.
    pub query: String,
    /// Caller-supplied placeholder overrides; win over template defaults.
    pub substitutions: BTreeMap<String, String>,
}

impl GenerationRequest {
    /// A request with no substitution overrides.
    pub fn new(framework: Framework, query: impl Into<String>) -> Self {
        Self {
            framework,
            query: query.into(),
            substitutions: BTreeMap::new(),
        }
    }

    /// Add a placeholder override.
    pub fn with_substitution(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.substitutions.insert(key.into(), value.into());
        self
    }
}

// ── Classification ─────────────────────────────────────────────────────

/// Outcome of classifying a request against the rule table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    /// Selected template.
    pub template_id: TemplateId,
    /// Fixed confidence of the winning rule (leaf capped by its parent
    /// for nested dispatch).
    pub confidence: f64,
}

// ── Validation Records ─────────────────────────────────────────────────

/// Physical-correctness predicate applied to an operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Predicate {
    /// `H = H†`.
    Hermitian,
    /// `U†U = I`.
    Unitary,
    /// `‖v‖ = 1`.
    Normalized,
    /// `AB = BA`.
    Commuting,
}

impl std::fmt::Display for Predicate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hermitian => write!(f, "hermitian"),
            Self::Unitary => write!(f, "unitary"),
            Self::Normalized => write!(f, "normalized"),
            Self::Commuting => write!(f, "commuting"),
        }
    }
}

/// One passed validation, recorded for auditability.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValidationRecord {
    /// Operator name (for commutation: `[a, b]`).
    pub operator: String,
    /// Which predicate ran.
    pub predicate: Predicate,
    /// Measured deviation (below tolerance, or the record would not exist).
    pub measured_error: f64,
}

// ── Result ─────────────────────────────────────────────────────────────

/// Successful pipeline output: the emitted source plus the audit trail.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GenerationResult {
    /// Template the classifier selected.
    pub template_id: TemplateId,
    /// Body text after placeholder substitution.
    pub source_text: String,
    /// Every validation performed, with measured errors.
    pub validations: Vec<ValidationRecord>,
    /// Literature-cited reference value, when the template carries one.
    pub expected_result: Option<ExpectedResult>,
    /// Confidence of the winning classification rule.
    pub confidence: f64,
    /// Set when `confidence` fell below the configured threshold.
    /// A warning-level outcome — generation still succeeded.
    pub low_confidence: bool,
}

// ── Configuration ──────────────────────────────────────────────────────

/// Pipeline configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Absolute tolerance for every validator predicate.
    pub tolerance: f64,
    /// Classifications below this confidence are flagged `low_confidence`.
    pub confidence_threshold: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-10,
            confidence_threshold: 0.5,
        }
    }
}
