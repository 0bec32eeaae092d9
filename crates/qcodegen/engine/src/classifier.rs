//! Deterministic request classifier.
//!
//! Evaluates the catalog's ordered rule table top-to-bottom against the
//! case-normalized query. The first fully-matching rule wins — explicit
//! first-match, not best-match: when two rules would both match, the
//! earlier one is chosen. Nested rule lists (molecule dispatch under a
//! VQE request) follow the same policy recursively.
//!
//! Classification is a pure function of `(query, framework)` and the
//! fixed rule table, so results are safe to memoize.

use tracing::debug;

use qcodegen_catalog::{Catalog, Framework, MatchRule, RuleOutcome, TemplateId};

use crate::error::{GenerateError, GenerateResult};
use crate::types::Classification;

/// Rule-table classifier. Stateless; all state lives in the catalog.
pub struct Classifier;

impl Classifier {
    /// Map a request to exactly one template, or fail with
    /// [`GenerateError::NoMatchingTemplate`].
    pub fn classify(
        catalog: &Catalog,
        framework: Framework,
        query: &str,
    ) -> GenerateResult<Classification> {
        let normalized = query.to_lowercase();
        match Self::first_match(catalog.rules(framework), &normalized) {
            Some((template_id, confidence)) => {
                debug!(template = %template_id, confidence, "classified request");
                Ok(Classification {
                    template_id,
                    confidence,
                })
            }
            None => Err(GenerateError::NoMatchingTemplate {
                query: query.into(),
                known_categories: catalog.categories(framework),
            }),
        }
    }

    /// Walk an ordered rule list, recursing into nested dispatch.
    ///
    /// A nested miss falls through to the remaining outer rules; the
    /// leaf confidence is capped by its dispatching rule.
    fn first_match(rules: &[MatchRule], normalized: &str) -> Option<(TemplateId, f64)> {
        for rule in rules {
            if !rule.matches(normalized) {
                continue;
            }
            match &rule.outcome {
                RuleOutcome::Template(id) => return Some((id.clone(), rule.confidence)),
                RuleOutcome::Nested(sub) => {
                    if let Some((id, leaf)) = Self::first_match(sub, normalized) {
                        return Some((id, leaf.min(rule.confidence)));
                    }
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn catalog() -> Catalog {
        Catalog::builtin().unwrap()
    }

    fn classify(query: &str) -> GenerateResult<Classification> {
        Classifier::classify(&catalog(), Framework::Qiskit, query)
    }

    fn template_for(query: &str) -> String {
        classify(query).unwrap().template_id.to_string()
    }

    #[test]
    fn vqe_molecule_dispatch() {
        assert_eq!(template_for("VQE for the H2 molecule"), "vqe_h2_qiskit22");
        assert_eq!(template_for("vqe ground state of LiH"), "vqe_lih_qiskit22");
        assert_eq!(template_for("run VQE on h2o please"), "vqe_h2o_qiskit22");
        assert_eq!(template_for("vqe for water"), "vqe_h2o_qiskit22");
    }

    #[test]
    fn h2o_wins_over_h2_substring() {
        // "h2o" contains "h2"; rule order must route water correctly.
        assert_eq!(template_for("ground state energy of h2o"), "vqe_h2o_qiskit22");
    }

    #[test]
    fn vqe_without_molecule_falls_back_to_generic() {
        let c = classify("vqe for my custom hamiltonian").unwrap();
        assert_eq!(c.template_id.as_str(), "vqe_generic_qiskit22");
        assert!(c.confidence < 1.0);
    }

    #[test]
    fn qaoa_maxcut_variants() {
        assert_eq!(template_for("qaoa maxcut on a ring"), "qaoa_maxcut_qiskit22");
        assert_eq!(template_for("solve max-cut"), "qaoa_maxcut_qiskit22");
        assert_eq!(template_for("qaoa for portfolio"), "qaoa_generic_qiskit22");
    }

    #[test]
    fn search_and_transform_keywords() {
        assert_eq!(template_for("grover search for a marked item"), "grover_qiskit22");
        assert_eq!(template_for("quantum fourier transform"), "qft_qiskit22");
        assert_eq!(template_for("qpe of the t gate"), "qpe_qiskit22");
        assert_eq!(template_for("phase estimation circuit"), "qpe_qiskit22");
    }

    #[test]
    fn classification_is_case_insensitive() {
        assert_eq!(template_for("GROVER SEARCH"), "grover_qiskit22");
    }

    #[test]
    fn classification_is_deterministic() {
        let first = classify("vqe ground state of h2").unwrap();
        for _ in 0..10 {
            let again = classify("vqe ground state of h2").unwrap();
            assert_eq!(again.template_id, first.template_id);
            assert_eq!(again.confidence, first.confidence);
        }
    }

    #[test]
    fn nonsense_query_has_no_match() {
        let err = classify("make me a sandwich").unwrap_err();
        match err {
            GenerateError::NoMatchingTemplate {
                query,
                known_categories,
            } => {
                assert_eq!(query, "make me a sandwich");
                assert!(known_categories.iter().any(|c| c == "vqe"));
                assert!(known_categories.iter().any(|c| c == "grover"));
            }
            other => panic!("expected NoMatchingTemplate, got {:?}", other),
        }
    }

    #[test]
    fn unregistered_framework_never_matches() {
        let err = Classifier::classify(&catalog(), Framework::Cirq, "grover search").unwrap_err();
        assert!(matches!(err, GenerateError::NoMatchingTemplate { .. }));
    }

    #[test]
    fn first_match_beats_later_specificity() {
        // R1 (earlier, generic) and R2 (later, more specific) both match;
        // the classifier must return R1's template.
        let mut rules = BTreeMap::new();
        rules.insert(
            Framework::Qiskit,
            vec![
                MatchRule::template("demo", &["circuit"], 0.6, TemplateId::new("first")),
                MatchRule::template(
                    "demo",
                    &["circuit", "grover"],
                    1.0,
                    TemplateId::new("second"),
                ),
            ],
        );
        let catalog = Catalog::new(vec![], rules);
        let c = Classifier::classify(&catalog, Framework::Qiskit, "a grover circuit").unwrap();
        assert_eq!(c.template_id.as_str(), "first");
        assert_eq!(c.confidence, 0.6);
    }

    #[test]
    fn nested_confidence_capped_by_outer_rule() {
        // "energy" dispatches into molecule rules at 0.6; the exact "h2"
        // leaf (1.0) must not raise the final confidence above it.
        let c = classify("lowest energy of h2").unwrap();
        assert_eq!(c.template_id.as_str(), "vqe_h2_qiskit22");
        assert_eq!(c.confidence, 0.6);
    }
}
