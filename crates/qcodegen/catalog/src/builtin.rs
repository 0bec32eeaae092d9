//! The built-in template set.
//!
//! Nine Qiskit templates: VQE for H2 / LiH / H2O / generic, QAOA for
//! MaxCut / generic, Grover, QFT, and QPE. Bodies are embedded at
//! compile time from `templates/`; reference operators and expected
//! results are fixed here, at catalog build time.

use std::collections::BTreeMap;

use qcodegen_numeric::{NumericResult, Vector};

use crate::operators;
use crate::store::Catalog;
use crate::types::{
    ExpectedResult, Framework, MatchRule, Operator, OperatorPair, TemplateDescriptor, TemplateId,
};

impl Catalog {
    /// Build the catalog of built-in templates.
    ///
    /// Fails only if the fixed operator data in [`operators`] is
    /// mis-shaped — a defect, caught by the catalog integrity tests.
    pub fn builtin() -> NumericResult<Self> {
        let templates = vec![
            vqe_h2()?,
            vqe_lih()?,
            vqe_h2o()?,
            vqe_generic()?,
            qaoa_maxcut()?,
            qaoa_generic()?,
            grover()?,
            qft()?,
            qpe()?,
        ];

        let mut rules = BTreeMap::new();
        rules.insert(Framework::Qiskit, qiskit_rules());

        Ok(Catalog::new(templates, rules))
    }
}

fn descriptor(
    id: &str,
    body: &'static str,
    defaults: &[(&str, &str)],
    reference_operators: Vec<Operator>,
    commuting_pairs: Vec<OperatorPair>,
    expected_result: Option<ExpectedResult>,
) -> TemplateDescriptor {
    let defaults: BTreeMap<String, String> = defaults
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    TemplateDescriptor {
        id: TemplateId::new(id),
        framework: Framework::Qiskit,
        placeholders: defaults.keys().cloned().collect(),
        defaults,
        reference_operators,
        commuting_pairs,
        expected_result,
        body: Some(body.into()),
    }
}

fn cited(value: f64, tolerance: f64, citation: &str) -> Option<ExpectedResult> {
    Some(ExpectedResult {
        value,
        tolerance,
        citation: citation.into(),
    })
}

// ── VQE ────────────────────────────────────────────────────────────────

fn vqe_h2() -> NumericResult<TemplateDescriptor> {
    Ok(descriptor(
        "vqe_h2_qiskit22",
        include_str!("../templates/vqe_h2_qiskit22.py"),
        &[
            ("MOLECULE_NAME", "H2"),
            ("BOND_LENGTH", "0.7414"),
            ("OPTIMIZER", "COBYLA"),
            ("MAX_ITERATIONS", "200"),
            ("ANSATZ_REPS", "2"),
        ],
        vec![
            Operator::hamiltonian("h2_hamiltonian", operators::h2_hamiltonian()?),
            Operator::unitary("cnot", operators::cnot()?),
            Operator::state("hartree_fock", operators::h2_hartree_fock()),
        ],
        vec![],
        cited(
            -1.137,
            2e-3,
            "O'Malley et al., Phys. Rev. X 6, 031007 (2016)",
        ),
    ))
}

fn vqe_lih() -> NumericResult<TemplateDescriptor> {
    Ok(descriptor(
        "vqe_lih_qiskit22",
        include_str!("../templates/vqe_lih_qiskit22.py"),
        &[
            ("MOLECULE_NAME", "LiH"),
            ("BOND_LENGTH", "1.5949"),
            ("OPTIMIZER", "COBYLA"),
            ("MAX_ITERATIONS", "300"),
            ("ANSATZ_REPS", "2"),
        ],
        vec![
            Operator::unitary("hadamard", operators::hadamard()?),
            Operator::unitary("cnot", operators::cnot()?),
            Operator::state("hartree_fock", Vector::basis(16, 0b0101)),
        ],
        vec![],
        cited(-7.882, 5e-3, "Kandala et al., Nature 549, 242-246 (2017)"),
    ))
}

fn vqe_h2o() -> NumericResult<TemplateDescriptor> {
    Ok(descriptor(
        "vqe_h2o_qiskit22",
        include_str!("../templates/vqe_h2o_qiskit22.py"),
        &[
            ("MOLECULE_NAME", "H2O"),
            ("OPTIMIZER", "COBYLA"),
            ("MAX_ITERATIONS", "400"),
            ("ANSATZ_REPS", "3"),
        ],
        vec![
            Operator::unitary("hadamard", operators::hadamard()?),
            Operator::unitary("cnot", operators::cnot()?),
            Operator::state("hartree_fock", Vector::basis(16, 0b0011)),
        ],
        vec![],
        None,
    ))
}

fn vqe_generic() -> NumericResult<TemplateDescriptor> {
    Ok(descriptor(
        "vqe_generic_qiskit22",
        include_str!("../templates/vqe_generic_qiskit22.py"),
        &[
            ("MOLECULE_NAME", "custom"),
            ("NUM_QUBITS", "4"),
            ("OPTIMIZER", "COBYLA"),
            ("MAX_ITERATIONS", "200"),
            ("ANSATZ_REPS", "2"),
        ],
        vec![
            Operator::unitary("hadamard", operators::hadamard()?),
            Operator::unitary("cnot", operators::cnot()?),
        ],
        vec![],
        None,
    ))
}

// ── QAOA ───────────────────────────────────────────────────────────────

fn qaoa_maxcut() -> NumericResult<TemplateDescriptor> {
    Ok(descriptor(
        "qaoa_maxcut_qiskit22",
        include_str!("../templates/qaoa_maxcut_qiskit22.py"),
        &[
            ("NUM_NODES", "4"),
            ("EDGE_LIST", "[(0, 1), (1, 2), (2, 3), (3, 0)]"),
            ("NUM_LAYERS", "2"),
            ("OPTIMIZER", "COBYLA"),
            ("MAX_ITERATIONS", "250"),
        ],
        vec![
            Operator::hamiltonian("maxcut_cost", operators::maxcut_cost_single_edge()?),
            Operator::hamiltonian("mixer", operators::qaoa_mixer()?),
        ],
        vec![OperatorPair {
            name_a: "z0".into(),
            a: operators::z_on_first()?,
            name_b: "z1".into(),
            b: operators::z_on_second()?,
        }],
        cited(
            4.0,
            0.1,
            "Farhi, Goldstone, Gutmann, arXiv:1411.4028 (2014)",
        ),
    ))
}

fn qaoa_generic() -> NumericResult<TemplateDescriptor> {
    Ok(descriptor(
        "qaoa_generic_qiskit22",
        include_str!("../templates/qaoa_generic_qiskit22.py"),
        &[
            ("NUM_QUBITS", "4"),
            ("NUM_LAYERS", "2"),
            ("OPTIMIZER", "COBYLA"),
            ("MAX_ITERATIONS", "250"),
        ],
        vec![Operator::hamiltonian("mixer", operators::qaoa_mixer()?)],
        vec![OperatorPair {
            name_a: "z0".into(),
            a: operators::z_on_first()?,
            name_b: "z1".into(),
            b: operators::z_on_second()?,
        }],
        None,
    ))
}

// ── Search / transforms ────────────────────────────────────────────────

fn grover() -> NumericResult<TemplateDescriptor> {
    Ok(descriptor(
        "grover_qiskit22",
        include_str!("../templates/grover_qiskit22.py"),
        &[
            ("NUM_QUBITS", "2"),
            ("MARKED_STATE", "11"),
            ("SHOTS", "1024"),
        ],
        vec![
            Operator::unitary("oracle", operators::grover_oracle_11()?),
            Operator::unitary("diffuser", operators::grover_diffuser()?),
            Operator::state("uniform", operators::uniform_2q()),
        ],
        vec![],
        // Two qubits, one marked item: a single iteration succeeds exactly.
        cited(1.0, 1e-9, "Grover, Phys. Rev. Lett. 79, 325 (1997)"),
    ))
}

fn qft() -> NumericResult<TemplateDescriptor> {
    Ok(descriptor(
        "qft_qiskit22",
        include_str!("../templates/qft_qiskit22.py"),
        &[("NUM_QUBITS", "3"), ("SHOTS", "1024")],
        vec![Operator::unitary("qft_3q", operators::qft(3)?)],
        vec![],
        None,
    ))
}

fn qpe() -> NumericResult<TemplateDescriptor> {
    Ok(descriptor(
        "qpe_qiskit22",
        include_str!("../templates/qpe_qiskit22.py"),
        &[("COUNTING_QUBITS", "3"), ("SHOTS", "2048")],
        vec![
            Operator::unitary("t_gate", operators::t_gate()?),
            Operator::unitary("inverse_qft_3q", operators::qft(3)?.conjugate_transpose()),
        ],
        vec![],
        cited(
            0.125,
            1e-9,
            "Nielsen & Chuang, Quantum Computation and Quantum Information, sec. 5.2",
        ),
    ))
}

// ── Rule table ─────────────────────────────────────────────────────────

/// Nested molecule dispatch shared by the VQE category rules.
///
/// `h2o` must come before `h2` — the substring `h2` is contained in
/// `h2o` and first-match would otherwise shadow water requests.
fn molecule_rules() -> Vec<MatchRule> {
    vec![
        MatchRule::template("molecule", &["h2o"], 1.0, TemplateId::new("vqe_h2o_qiskit22")),
        MatchRule::template("molecule", &["water"], 1.0, TemplateId::new("vqe_h2o_qiskit22")),
        MatchRule::template("molecule", &["lih"], 1.0, TemplateId::new("vqe_lih_qiskit22")),
        MatchRule::template(
            "molecule",
            &["lithium hydride"],
            1.0,
            TemplateId::new("vqe_lih_qiskit22"),
        ),
        MatchRule::template("molecule", &["h2"], 1.0, TemplateId::new("vqe_h2_qiskit22")),
        MatchRule::template(
            "molecule",
            &["hydrogen"],
            0.9,
            TemplateId::new("vqe_h2_qiskit22"),
        ),
        MatchRule::template("molecule", &[], 0.7, TemplateId::new("vqe_generic_qiskit22")),
    ]
}

fn qaoa_rules() -> Vec<MatchRule> {
    vec![
        MatchRule::template("qaoa", &["maxcut"], 1.0, TemplateId::new("qaoa_maxcut_qiskit22")),
        MatchRule::template("qaoa", &["max-cut"], 1.0, TemplateId::new("qaoa_maxcut_qiskit22")),
        MatchRule::template("qaoa", &["max cut"], 1.0, TemplateId::new("qaoa_maxcut_qiskit22")),
        MatchRule::template("qaoa", &[], 0.8, TemplateId::new("qaoa_generic_qiskit22")),
    ]
}

/// The ordered Qiskit rule table. First fully-matching rule wins.
fn qiskit_rules() -> Vec<MatchRule> {
    vec![
        MatchRule::nested("vqe", &["vqe"], 1.0, molecule_rules()),
        MatchRule::nested("vqe", &["ground state"], 0.9, molecule_rules()),
        MatchRule::nested("qaoa", &["qaoa"], 1.0, qaoa_rules()),
        MatchRule::template("qaoa", &["maxcut"], 1.0, TemplateId::new("qaoa_maxcut_qiskit22")),
        MatchRule::template("qaoa", &["max-cut"], 1.0, TemplateId::new("qaoa_maxcut_qiskit22")),
        MatchRule::template("grover", &["grover"], 1.0, TemplateId::new("grover_qiskit22")),
        MatchRule::template(
            "grover",
            &["amplitude amplification"],
            0.9,
            TemplateId::new("grover_qiskit22"),
        ),
        MatchRule::template(
            "grover",
            &["unstructured search"],
            0.8,
            TemplateId::new("grover_qiskit22"),
        ),
        MatchRule::template("qft", &["qft"], 1.0, TemplateId::new("qft_qiskit22")),
        MatchRule::template("qft", &["fourier"], 0.9, TemplateId::new("qft_qiskit22")),
        MatchRule::template("qpe", &["qpe"], 1.0, TemplateId::new("qpe_qiskit22")),
        MatchRule::template(
            "qpe",
            &["phase estimation"],
            1.0,
            TemplateId::new("qpe_qiskit22"),
        ),
        MatchRule::template("qpe", &["eigenvalue"], 0.7, TemplateId::new("qpe_qiskit22")),
        // Generic fallbacks — matched only when nothing above did.
        MatchRule::nested("vqe", &["molecule"], 0.7, molecule_rules()),
        MatchRule::nested("vqe", &["energy"], 0.6, molecule_rules()),
        MatchRule::template(
            "qaoa",
            &["optimization"],
            0.6,
            TemplateId::new("qaoa_generic_qiskit22"),
        ),
    ]
}
