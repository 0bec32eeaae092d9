//! Reference operators embedded in the built-in catalog.
//!
//! All matrices here are fixed known-good data associated with templates
//! at catalog build time. The validator re-checks them on every request,
//! which is what catches accidental edits to this file.

use std::f64::consts::{FRAC_1_SQRT_2, PI};

use qcodegen_numeric::{Complex, Matrix, NumericResult, Vector};

// ── Single-qubit gates ─────────────────────────────────────────────────

/// Pauli X.
pub fn pauli_x() -> NumericResult<Matrix> {
    Matrix::from_real_rows(vec![vec![0.0, 1.0], vec![1.0, 0.0]])
}

/// Pauli Y.
pub fn pauli_y() -> NumericResult<Matrix> {
    Matrix::from_rows(vec![
        vec![Complex::ZERO, -Complex::I],
        vec![Complex::I, Complex::ZERO],
    ])
}

/// Pauli Z.
pub fn pauli_z() -> NumericResult<Matrix> {
    Matrix::from_real_rows(vec![vec![1.0, 0.0], vec![0.0, -1.0]])
}

/// Hadamard: `[[1, 1], [1, -1]] / √2`. Both unitary and Hermitian.
pub fn hadamard() -> NumericResult<Matrix> {
    Matrix::from_real_rows(vec![
        vec![FRAC_1_SQRT_2, FRAC_1_SQRT_2],
        vec![FRAC_1_SQRT_2, -FRAC_1_SQRT_2],
    ])
}

/// T gate: `diag(1, e^{iπ/4})`. Its eigenphase 1/8 is the QPE reference.
pub fn t_gate() -> NumericResult<Matrix> {
    Matrix::from_rows(vec![
        vec![Complex::ONE, Complex::ZERO],
        vec![Complex::ZERO, Complex::from_polar(1.0, PI / 4.0)],
    ])
}

// ── Two-qubit gates ────────────────────────────────────────────────────

/// CNOT (control on the first qubit): permutes |10⟩ ↔ |11⟩.
pub fn cnot() -> NumericResult<Matrix> {
    Matrix::from_real_rows(vec![
        vec![1.0, 0.0, 0.0, 0.0],
        vec![0.0, 1.0, 0.0, 0.0],
        vec![0.0, 0.0, 0.0, 1.0],
        vec![0.0, 0.0, 1.0, 0.0],
    ])
}

/// Grover diffuser on two qubits: `2|s⟩⟨s| − I` with uniform `|s⟩`.
pub fn grover_diffuser() -> NumericResult<Matrix> {
    let half = 0.5;
    Matrix::from_real_rows(vec![
        vec![half - 1.0, half, half, half],
        vec![half, half - 1.0, half, half],
        vec![half, half, half - 1.0, half],
        vec![half, half, half, half - 1.0],
    ])
}

/// Phase oracle marking |11⟩: `diag(1, 1, 1, −1)`.
pub fn grover_oracle_11() -> NumericResult<Matrix> {
    Matrix::from_real_rows(vec![
        vec![1.0, 0.0, 0.0, 0.0],
        vec![0.0, 1.0, 0.0, 0.0],
        vec![0.0, 0.0, 1.0, 0.0],
        vec![0.0, 0.0, 0.0, -1.0],
    ])
}

/// Quantum Fourier transform on `n` qubits: `U[j][k] = ω^{jk}/√N`.
pub fn qft(n_qubits: u32) -> NumericResult<Matrix> {
    let dim = 1usize << n_qubits;
    let scale = 1.0 / (dim as f64).sqrt();
    let rows = (0..dim)
        .map(|j| {
            (0..dim)
                .map(|k| Complex::from_polar(scale, 2.0 * PI * (j * k) as f64 / dim as f64))
                .collect()
        })
        .collect();
    Matrix::from_rows(rows)
}

// ── Hamiltonians ───────────────────────────────────────────────────────

/// Two-qubit H2 Hamiltonian at the equilibrium bond length (0.7414 Å),
/// in the reduced parity mapping:
///
/// `H = g0·II + g1·ZI + g2·IZ + g3·ZZ + g4·XX + g5·YY`
///
/// Coefficients from O'Malley et al., Phys. Rev. X 6, 031007 (2016).
pub fn h2_hamiltonian() -> NumericResult<Matrix> {
    let (g0, g1, g2, g3, g4, g5) = (-0.4804, 0.3435, -0.4347, 0.5716, 0.0910, 0.0910);
    let id = Matrix::identity(2);
    let x = pauli_x()?;
    let y = pauli_y()?;
    let z = pauli_z()?;

    let mut h = Matrix::identity(4).scale(g0);
    h = h.add(&z.kron(&id).scale(g1))?;
    h = h.add(&id.kron(&z).scale(g2))?;
    h = h.add(&z.kron(&z).scale(g3))?;
    h = h.add(&x.kron(&x).scale(g4))?;
    h = h.add(&y.kron(&y).scale(g5))?;
    Ok(h)
}

/// MaxCut cost Hamiltonian for a single edge: `(I − Z⊗Z) / 2`.
pub fn maxcut_cost_single_edge() -> NumericResult<Matrix> {
    let z = pauli_z()?;
    Matrix::identity(4).sub(&z.kron(&z)).map(|m| m.scale(0.5))
}

/// Transverse-field mixer on two qubits: `X⊗I + I⊗X`.
pub fn qaoa_mixer() -> NumericResult<Matrix> {
    let x = pauli_x()?;
    let id = Matrix::identity(2);
    x.kron(&id).add(&id.kron(&x))
}

/// `Z⊗I` — one term of a diagonal cost Hamiltonian.
pub fn z_on_first() -> NumericResult<Matrix> {
    Ok(pauli_z()?.kron(&Matrix::identity(2)))
}

/// `I⊗Z` — the other term; commutes with [`z_on_first`] exactly.
pub fn z_on_second() -> NumericResult<Matrix> {
    Ok(Matrix::identity(2).kron(&pauli_z()?))
}

// ── States ─────────────────────────────────────────────────────────────

/// Hartree–Fock reference state |01⟩ for the 2-qubit H2 mapping.
pub fn h2_hartree_fock() -> Vector {
    Vector::basis(4, 1)
}

/// Uniform superposition over two qubits.
pub fn uniform_2q() -> Vector {
    Vector::from_real(vec![0.5, 0.5, 0.5, 0.5])
}

/// |+⟩ = H|0⟩.
pub fn plus_state() -> Vector {
    Vector::from_real(vec![FRAC_1_SQRT_2, FRAC_1_SQRT_2])
}
