//! The generation pipeline orchestrator.
//!
//! Fixed stage order per request: classify, look up the descriptor,
//! merge substitutions, substitute, validate. Any stage failure aborts
//! the request with its typed error; there is no partial output. The
//! generator holds only immutable state, so one instance serves
//! concurrent requests behind a shared reference.

use tracing::{info, warn};

use qcodegen_catalog::{Catalog, TemplateDescriptor};

use crate::classifier::Classifier;
use crate::error::{GenerateError, GenerateResult};
use crate::substitute::SubstitutionEngine;
use crate::types::{GenerationRequest, GenerationResult, GeneratorConfig, ValidationRecord};
use crate::validator::PhysicsValidator;

/// Template-selection, substitution, and validation pipeline.
pub struct Generator {
    catalog: Catalog,
    substitution: SubstitutionEngine,
    validator: PhysicsValidator,
    config: GeneratorConfig,
}

impl Generator {
    /// Generator over a catalog with default configuration.
    pub fn new(catalog: Catalog) -> Self {
        Self::with_config(catalog, GeneratorConfig::default())
    }

    /// Generator with an explicit configuration.
    pub fn with_config(catalog: Catalog, config: GeneratorConfig) -> Self {
        Self {
            catalog,
            substitution: SubstitutionEngine,
            validator: PhysicsValidator::new(config.tolerance),
            config,
        }
    }

    /// The catalog this generator serves.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Run the full pipeline for one request.
    pub fn generate(&self, request: &GenerationRequest) -> GenerateResult<GenerationResult> {
        let classification =
            Classifier::classify(&self.catalog, request.framework, &request.query)?;

        let descriptor = self
            .catalog
            .get(&classification.template_id)
            .ok_or_else(|| GenerateError::TemplateNotFound(classification.template_id.clone()))?;
        let body = descriptor
            .body
            .as_deref()
            .ok_or_else(|| GenerateError::TemplateNotFound(descriptor.id.clone()))?;

        // Defaults first, caller overrides win.
        let mut merged = descriptor.defaults.clone();
        merged.extend(
            request
                .substitutions
                .iter()
                .map(|(k, v)| (k.clone(), v.clone())),
        );
        let source_text = self.substitution.apply(body, &merged)?;

        let validations = self.validate_descriptor(descriptor)?;

        let low_confidence = classification.confidence < self.config.confidence_threshold;
        if low_confidence {
            warn!(
                template = %descriptor.id,
                confidence = classification.confidence,
                threshold = self.config.confidence_threshold,
                "low-confidence classification"
            );
        }
        info!(
            template = %descriptor.id,
            validations = validations.len(),
            "generated program"
        );

        Ok(GenerationResult {
            template_id: descriptor.id.clone(),
            source_text,
            validations,
            expected_result: descriptor.expected_result.clone(),
            confidence: classification.confidence,
            low_confidence,
        })
    }

    /// Run every validation a descriptor declares. The first failure
    /// aborts — a template with a bad reference operator never emits.
    fn validate_descriptor(
        &self,
        descriptor: &TemplateDescriptor,
    ) -> GenerateResult<Vec<ValidationRecord>> {
        let mut records = Vec::with_capacity(
            descriptor.reference_operators.len() + descriptor.commuting_pairs.len(),
        );
        for operator in &descriptor.reference_operators {
            records.push(self.validator.validate_operator(operator)?);
        }
        for pair in &descriptor.commuting_pairs {
            records.push(self.validator.validate_commutes(
                &pair.a,
                &pair.b,
                &pair.name_a,
                &pair.name_b,
            )?);
        }
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{BTreeMap, BTreeSet};

    use qcodegen_catalog::{
        Framework, MatchRule, Operator, RuleOutcome, TemplateDescriptor, TemplateId,
    };
    use qcodegen_numeric::{Complex, Matrix};

    use crate::types::Predicate;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    }

    fn builtin_generator() -> Generator {
        init_tracing();
        Generator::new(Catalog::builtin().unwrap())
    }

    fn qiskit_request(query: &str) -> GenerationRequest {
        GenerationRequest::new(Framework::Qiskit, query)
    }

    /// One-rule catalog routing every query to the given descriptor.
    fn single_template_catalog(descriptor: TemplateDescriptor) -> Catalog {
        let id = descriptor.id.clone();
        let mut rules = BTreeMap::new();
        rules.insert(
            Framework::Qiskit,
            vec![MatchRule::template("demo", &[], 1.0, id)],
        );
        Catalog::new(vec![descriptor], rules)
    }

    fn bare_descriptor(id: &str, body: Option<&str>) -> TemplateDescriptor {
        TemplateDescriptor {
            id: TemplateId::new(id),
            framework: Framework::Qiskit,
            placeholders: BTreeSet::new(),
            defaults: BTreeMap::new(),
            reference_operators: vec![],
            commuting_pairs: vec![],
            expected_result: None,
            body: body.map(|b| b.to_string()),
        }
    }

    #[test]
    fn vqe_h2_end_to_end() {
        let generator = builtin_generator();
        let result = generator
            .generate(&qiskit_request("VQE ground state of H2"))
            .unwrap();
        assert_eq!(result.template_id.as_str(), "vqe_h2_qiskit22");
        assert!(result.source_text.contains("H2"));
        assert!(result.source_text.contains("COBYLA"));
        assert!(!result.source_text.contains("{{"));
        assert!(!result.low_confidence);
        // hermiticity + unitarity + normalization over the references
        assert_eq!(result.validations.len(), 3);
        let expected = result.expected_result.unwrap();
        assert!((expected.value - (-1.137)).abs() < 1e-12);
        assert!(expected.citation.contains("O'Malley"));
    }

    #[test]
    fn every_builtin_family_generates() {
        let generator = builtin_generator();
        let cases = [
            ("vqe for h2", "vqe_h2_qiskit22"),
            ("vqe for lih", "vqe_lih_qiskit22"),
            ("vqe for h2o", "vqe_h2o_qiskit22"),
            ("vqe for something custom", "vqe_generic_qiskit22"),
            ("qaoa maxcut", "qaoa_maxcut_qiskit22"),
            ("qaoa for scheduling", "qaoa_generic_qiskit22"),
            ("grover search", "grover_qiskit22"),
            ("qft circuit", "qft_qiskit22"),
            ("phase estimation", "qpe_qiskit22"),
        ];
        for (query, expected_id) in cases {
            let result = generator.generate(&qiskit_request(query)).unwrap();
            assert_eq!(result.template_id.as_str(), expected_id, "query: {}", query);
            assert!(!result.source_text.contains("{{"), "query: {}", query);
            assert!(!result.validations.is_empty(), "query: {}", query);
        }
    }

    #[test]
    fn generation_is_deterministic() {
        let generator = builtin_generator();
        let request = qiskit_request("grover search");
        let first = generator.generate(&request).unwrap();
        let second = generator.generate(&request).unwrap();
        assert_eq!(first.template_id, second.template_id);
        assert_eq!(first.source_text, second.source_text);
        assert_eq!(first.validations, second.validations);
    }

    #[test]
    fn caller_override_beats_default() {
        let generator = builtin_generator();
        let request = qiskit_request("vqe for h2")
            .with_substitution("OPTIMIZER", "SPSA")
            .with_substitution("MAX_ITERATIONS", "500");
        let result = generator.generate(&request).unwrap();
        assert!(result.source_text.contains("SPSA"));
        assert!(!result.source_text.contains("COBYLA"));
        assert!(result.source_text.contains("500"));
    }

    #[test]
    fn maxcut_includes_commutation_check() {
        let generator = builtin_generator();
        let result = generator.generate(&qiskit_request("qaoa maxcut")).unwrap();
        let commutation = result
            .validations
            .iter()
            .find(|r| r.predicate == Predicate::Commuting)
            .unwrap();
        assert_eq!(commutation.operator, "[z0, z1]");
        assert!(commutation.measured_error < 1e-12);
    }

    #[test]
    fn nonsense_query_is_rejected() {
        let generator = builtin_generator();
        let err = generator
            .generate(&qiskit_request("make me a sandwich"))
            .unwrap_err();
        assert!(matches!(err, GenerateError::NoMatchingTemplate { .. }));
    }

    #[test]
    fn rule_pointing_at_missing_template_is_reported() {
        let mut rules = BTreeMap::new();
        rules.insert(
            Framework::Qiskit,
            vec![MatchRule {
                category: "demo".into(),
                required: vec![],
                confidence: 1.0,
                outcome: RuleOutcome::Template(TemplateId::new("ghost")),
            }],
        );
        let generator = Generator::new(Catalog::new(vec![], rules));
        let err = generator.generate(&qiskit_request("anything")).unwrap_err();
        match err {
            GenerateError::TemplateNotFound(id) => assert_eq!(id.as_str(), "ghost"),
            other => panic!("expected TemplateNotFound, got {:?}", other),
        }
    }

    #[test]
    fn missing_body_artifact_is_reported() {
        let catalog = single_template_catalog(bare_descriptor("bodyless", None));
        let generator = Generator::new(catalog);
        let err = generator.generate(&qiskit_request("anything")).unwrap_err();
        assert!(matches!(err, GenerateError::TemplateNotFound(_)));
    }

    #[test]
    fn missing_default_surfaces_as_unresolved_placeholder() {
        let catalog = single_template_catalog(bare_descriptor(
            "incomplete",
            Some("shots = {{SHOTS}}\n"),
        ));
        let generator = Generator::new(catalog);
        let err = generator.generate(&qiskit_request("anything")).unwrap_err();
        match err {
            GenerateError::UnresolvedPlaceholder { keys } => {
                assert_eq!(keys, vec!["SHOTS".to_string()]);
            }
            other => panic!("expected UnresolvedPlaceholder, got {:?}", other),
        }
    }

    #[test]
    fn request_override_can_fill_a_missing_default() {
        let catalog = single_template_catalog(bare_descriptor(
            "incomplete",
            Some("shots = {{SHOTS}}\n"),
        ));
        let generator = Generator::new(catalog);
        let result = generator
            .generate(&qiskit_request("anything").with_substitution("SHOTS", "4096"))
            .unwrap();
        assert_eq!(result.source_text, "shots = 4096\n");
    }

    #[test]
    fn bad_reference_operator_aborts_generation() {
        let mut descriptor = bare_descriptor("broken", Some("pass\n"));
        // [[0, 1], [0, 0]] is not Hermitian.
        descriptor.reference_operators = vec![Operator::hamiltonian(
            "raiser",
            Matrix::from_rows(vec![
                vec![Complex::ZERO, Complex::ONE],
                vec![Complex::ZERO, Complex::ZERO],
            ])
            .unwrap(),
        )];
        let generator = Generator::new(single_template_catalog(descriptor));
        let err = generator.generate(&qiskit_request("anything")).unwrap_err();
        match err {
            GenerateError::HermiticityViolation { name, error } => {
                assert_eq!(name, "raiser");
                assert!((error - std::f64::consts::SQRT_2).abs() < 1e-12);
            }
            other => panic!("expected HermiticityViolation, got {:?}", other),
        }
    }

    #[test]
    fn low_confidence_flags_but_does_not_fail() {
        let config = GeneratorConfig {
            tolerance: 1e-10,
            confidence_threshold: 0.75,
        };
        let generator = Generator::with_config(Catalog::builtin().unwrap(), config);
        // "energy" fallback dispatch carries confidence 0.6 < 0.75.
        let result = generator
            .generate(&qiskit_request("lowest energy of h2"))
            .unwrap();
        assert!(result.low_confidence);
        assert_eq!(result.confidence, 0.6);
        assert_eq!(result.template_id.as_str(), "vqe_h2_qiskit22");
        assert!(!result.source_text.is_empty());
    }

    #[test]
    fn confident_classification_is_not_flagged() {
        let generator = builtin_generator();
        let result = generator.generate(&qiskit_request("grover search")).unwrap();
        assert!(!result.low_confidence);
        assert_eq!(result.confidence, 1.0);
    }

    #[test]
    fn tightened_tolerance_rejects_borderline_operators() {
        // With an absurd tolerance of 0.0 nothing can pass validation.
        let config = GeneratorConfig {
            tolerance: 0.0,
            confidence_threshold: 0.5,
        };
        let generator = Generator::with_config(Catalog::builtin().unwrap(), config);
        let err = generator.generate(&qiskit_request("vqe for h2")).unwrap_err();
        assert!(matches!(
            err,
            GenerateError::HermiticityViolation { .. }
                | GenerateError::UnitarityViolation { .. }
                | GenerateError::NormalizationViolation { .. }
        ));
    }
}
