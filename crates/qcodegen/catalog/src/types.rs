//! Catalog types: framework tags, descriptors, match rules, operators.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use qcodegen_numeric::{Matrix, Vector};

// ── Framework ──────────────────────────────────────────────────────────

/// Target framework a template emits code for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Framework {
    /// Qiskit 2.x (the only framework with built-in templates).
    Qiskit,
    /// Cirq — reserved; no built-in templates yet.
    Cirq,
}

impl std::fmt::Display for Framework {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Qiskit => write!(f, "qiskit"),
            Self::Cirq => write!(f, "cirq"),
        }
    }
}

// ── Template Identifier ────────────────────────────────────────────────

/// Stable string id addressing one catalog entry.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TemplateId(pub String);

impl TemplateId {
    /// Wrap a stable id string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw id string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TemplateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── Operators ──────────────────────────────────────────────────────────

/// A named matrix or vector tagged with the property it must satisfy.
///
/// Fixed at catalog build time — never inferred from the emitted text.
/// The variant determines which validator predicate runs, so a payload
/// can never be paired with the wrong check.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Operator {
    /// Must be Hermitian: `H = H†`.
    Hamiltonian {
        /// Name carried into validation records and errors.
        name: String,
        /// The matrix.
        matrix: Matrix,
    },
    /// Must be unitary: `U†U = I`.
    Unitary {
        /// Name carried into validation records and errors.
        name: String,
        /// The matrix.
        matrix: Matrix,
    },
    /// Must be a normalized state vector.
    State {
        /// Name carried into validation records and errors.
        name: String,
        /// The amplitudes.
        vector: Vector,
    },
}

impl Operator {
    /// A matrix tagged Hermitian.
    pub fn hamiltonian(name: impl Into<String>, matrix: Matrix) -> Self {
        Self::Hamiltonian {
            name: name.into(),
            matrix,
        }
    }

    /// A matrix tagged unitary.
    pub fn unitary(name: impl Into<String>, matrix: Matrix) -> Self {
        Self::Unitary {
            name: name.into(),
            matrix,
        }
    }

    /// A vector tagged as a normalized state.
    pub fn state(name: impl Into<String>, vector: Vector) -> Self {
        Self::State {
            name: name.into(),
            vector,
        }
    }

    /// The operator's name.
    pub fn name(&self) -> &str {
        match self {
            Self::Hamiltonian { name, .. }
            | Self::Unitary { name, .. }
            | Self::State { name, .. } => name,
        }
    }
}

/// Two named matrices whose commutator must vanish.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OperatorPair {
    /// Name of the left operand.
    pub name_a: String,
    /// Left operand.
    pub a: Matrix,
    /// Name of the right operand.
    pub name_b: String,
    /// Right operand.
    pub b: Matrix,
}

// ── Expected Result ────────────────────────────────────────────────────

/// Literature-cited numeric result a caller can compare an external
/// execution of the emitted program against.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExpectedResult {
    /// Reference value (energy in Hartree, probability, phase, ...).
    pub value: f64,
    /// Acceptable absolute deviation.
    pub tolerance: f64,
    /// Where the reference value comes from.
    pub citation: String,
}

// ── Match Rules ────────────────────────────────────────────────────────

/// Terminal or nested outcome of a match rule.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum RuleOutcome {
    /// The rule selects this template directly.
    Template(TemplateId),
    /// The rule dispatches into a nested ordered rule list
    /// (e.g. molecule name under a VQE request).
    Nested(Vec<MatchRule>),
}

/// One entry in an ordered rule table.
///
/// A rule matches when every `required` substring appears in the
/// case-normalized query. The first fully-matching rule wins; table
/// order is the tie-break — there is no scoring.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchRule {
    /// Top-level category keyword family (surfaced in no-match guidance).
    pub category: String,
    /// Substrings that must all appear (lowercase). Empty = catch-all.
    pub required: Vec<String>,
    /// Fixed confidence: 1.0 for exact keyword rules, lower for fallbacks.
    pub confidence: f64,
    /// What the rule resolves to.
    pub outcome: RuleOutcome,
}

impl MatchRule {
    /// Rule resolving directly to a template.
    pub fn template(
        category: impl Into<String>,
        required: &[&str],
        confidence: f64,
        id: TemplateId,
    ) -> Self {
        Self {
            category: category.into(),
            required: required.iter().map(|s| s.to_string()).collect(),
            confidence,
            outcome: RuleOutcome::Template(id),
        }
    }

    /// Rule dispatching into a nested ordered list.
    pub fn nested(
        category: impl Into<String>,
        required: &[&str],
        confidence: f64,
        rules: Vec<MatchRule>,
    ) -> Self {
        Self {
            category: category.into(),
            required: required.iter().map(|s| s.to_string()).collect(),
            confidence,
            outcome: RuleOutcome::Nested(rules),
        }
    }

    /// Whether every required substring appears in the (lowercase) query.
    pub fn matches(&self, normalized_query: &str) -> bool {
        self.required.iter().all(|kw| normalized_query.contains(kw.as_str()))
    }
}

// ── Template Descriptor ────────────────────────────────────────────────

/// Immutable descriptor for one catalog entry.
///
/// Created once at catalog-load time; never mutated during a request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TemplateDescriptor {
    /// Stable id.
    pub id: TemplateId,
    /// Framework the body targets.
    pub framework: Framework,
    /// Placeholder keys the body contains.
    pub placeholders: BTreeSet<String>,
    /// Default value per placeholder; caller overrides win.
    pub defaults: BTreeMap<String, String>,
    /// Known-good operators validated before every emission.
    pub reference_operators: Vec<Operator>,
    /// Operator pairs whose commutator must vanish.
    pub commuting_pairs: Vec<OperatorPair>,
    /// Optional cited reference value.
    pub expected_result: Option<ExpectedResult>,
    /// Template body text. `None` models a missing artifact — an internal
    /// catalog inconsistency, reported as such by the pipeline.
    pub body: Option<String>,
}
