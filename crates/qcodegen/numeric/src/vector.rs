//! Complex state vector.

use serde::{Deserialize, Serialize};

use crate::complex::Complex;

/// Ordered sequence of [`Complex`] amplitudes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vector(Vec<Complex>);

impl Vector {
    /// Wrap a list of amplitudes.
    pub fn new(entries: Vec<Complex>) -> Self {
        Self(entries)
    }

    /// Build from real amplitudes.
    pub fn from_real(entries: Vec<f64>) -> Self {
        Self(entries.into_iter().map(Complex::real).collect())
    }

    /// Computational basis state `|index⟩` in the given dimension.
    ///
    /// Indices past the dimension yield the zero vector; callers building
    /// catalog data are expected to pass valid indices.
    pub fn basis(dim: usize, index: usize) -> Self {
        let mut entries = vec![Complex::ZERO; dim];
        if index < dim {
            entries[index] = Complex::ONE;
        }
        Self(entries)
    }

    /// Number of amplitudes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the vector is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Amplitude at `index`.
    #[inline]
    pub fn at(&self, index: usize) -> Complex {
        self.0[index]
    }

    /// Amplitudes as a slice.
    pub fn entries(&self) -> &[Complex] {
        &self.0
    }

    /// Euclidean norm `sqrt(Σ|aᵢ|²)`.
    pub fn norm(&self) -> f64 {
        self.0.iter().map(|z| z.norm_sq()).sum::<f64>().sqrt()
    }

    /// Entry-wise difference with another vector of the same length.
    ///
    /// Callers compare states of known equal dimension; unequal lengths
    /// are a caller bug, not recoverable data.
    pub fn distance(&self, other: &Vector) -> f64 {
        debug_assert_eq!(
            self.len(),
            other.len(),
            "distance requires equal-length vectors"
        );
        self.0
            .iter()
            .zip(&other.0)
            .map(|(a, b)| (*a - *b).norm_sq())
            .sum::<f64>()
            .sqrt()
    }
}
