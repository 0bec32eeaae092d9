//! Dense row-major complex matrix.
//!
//! Shapes are checked at every binary operation; incompatible operands
//! surface as [`NumericError::DimensionMismatch`] rather than panicking,
//! since mis-shaped data indicates a catalog defect the pipeline must
//! report, not a programming error.

use serde::{Deserialize, Serialize};

use crate::complex::Complex;
use crate::error::{NumericError, NumericResult};
use crate::vector::Vector;

/// Dense matrix of [`Complex`] entries, row-major.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<Complex>,
}

impl Matrix {
    /// Build from nested rows. Fails if rows have unequal lengths.
    pub fn from_rows(rows: Vec<Vec<Complex>>) -> NumericResult<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, |r| r.len());
        let mut data = Vec::with_capacity(n_rows * n_cols);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != n_cols {
                return Err(NumericError::RaggedRows {
                    row: i,
                    expected: n_cols,
                    found: row.len(),
                });
            }
            data.extend(row);
        }
        Ok(Self {
            rows: n_rows,
            cols: n_cols,
            data,
        })
    }

    /// Build from nested rows of real values.
    pub fn from_real_rows(rows: Vec<Vec<f64>>) -> NumericResult<Self> {
        Self::from_rows(
            rows.into_iter()
                .map(|r| r.into_iter().map(Complex::real).collect())
                .collect(),
        )
    }

    /// n×n identity.
    pub fn identity(n: usize) -> Self {
        let mut data = vec![Complex::ZERO; n * n];
        for i in 0..n {
            data[i * n + i] = Complex::ONE;
        }
        Self {
            rows: n,
            cols: n,
            data,
        }
    }

    /// n×n zero matrix.
    pub fn zeros(n: usize) -> Self {
        Self {
            rows: n,
            cols: n,
            data: vec![Complex::ZERO; n * n],
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether the matrix is square.
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Entry at (i, j).
    #[inline]
    pub fn at(&self, i: usize, j: usize) -> Complex {
        self.data[i * self.cols + j]
    }

    /// Conjugate transpose `M†` where `(M†)[j][i] = conj(M[i][j])`.
    pub fn conjugate_transpose(&self) -> Self {
        let mut data = vec![Complex::ZERO; self.rows * self.cols];
        for i in 0..self.rows {
            for j in 0..self.cols {
                data[j * self.rows + i] = self.at(i, j).conj();
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            data,
        }
    }

    /// Standard matrix product. Fails when `cols(self) != rows(rhs)`.
    pub fn matmul(&self, rhs: &Matrix) -> NumericResult<Matrix> {
        if self.cols != rhs.rows {
            return Err(self.mismatch("matmul", rhs));
        }
        let mut data = vec![Complex::ZERO; self.rows * rhs.cols];
        for i in 0..self.rows {
            for k in 0..self.cols {
                let a = self.at(i, k);
                for j in 0..rhs.cols {
                    data[i * rhs.cols + j] += a * rhs.at(k, j);
                }
            }
        }
        Ok(Matrix {
            rows: self.rows,
            cols: rhs.cols,
            data,
        })
    }

    /// Entry-wise sum. Fails on shape mismatch.
    pub fn add(&self, rhs: &Matrix) -> NumericResult<Matrix> {
        if self.rows != rhs.rows || self.cols != rhs.cols {
            return Err(self.mismatch("add", rhs));
        }
        let data = self
            .data
            .iter()
            .zip(&rhs.data)
            .map(|(a, b)| *a + *b)
            .collect();
        Ok(Matrix {
            rows: self.rows,
            cols: self.cols,
            data,
        })
    }

    /// Entry-wise difference. Fails on shape mismatch.
    pub fn sub(&self, rhs: &Matrix) -> NumericResult<Matrix> {
        if self.rows != rhs.rows || self.cols != rhs.cols {
            return Err(self.mismatch("sub", rhs));
        }
        let data = self
            .data
            .iter()
            .zip(&rhs.data)
            .map(|(a, b)| *a - *b)
            .collect();
        Ok(Matrix {
            rows: self.rows,
            cols: self.cols,
            data,
        })
    }

    /// Multiply every entry by a real scalar.
    pub fn scale(&self, factor: f64) -> Matrix {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|z| *z * factor).collect(),
        }
    }

    /// Kronecker product `self ⊗ rhs`.
    pub fn kron(&self, rhs: &Matrix) -> Matrix {
        let rows = self.rows * rhs.rows;
        let cols = self.cols * rhs.cols;
        let mut data = vec![Complex::ZERO; rows * cols];
        for i in 0..self.rows {
            for j in 0..self.cols {
                let a = self.at(i, j);
                for k in 0..rhs.rows {
                    for l in 0..rhs.cols {
                        data[(i * rhs.rows + k) * cols + (j * rhs.cols + l)] = a * rhs.at(k, l);
                    }
                }
            }
        }
        Matrix { rows, cols, data }
    }

    /// Matrix–vector product. Fails when `cols(self) != len(v)`.
    pub fn apply(&self, v: &Vector) -> NumericResult<Vector> {
        if self.cols != v.len() {
            return Err(NumericError::DimensionMismatch {
                op: "apply",
                lhs_rows: self.rows,
                lhs_cols: self.cols,
                rhs_rows: v.len(),
                rhs_cols: 1,
            });
        }
        let mut out = vec![Complex::ZERO; self.rows];
        for i in 0..self.rows {
            for j in 0..self.cols {
                out[i] += self.at(i, j) * v.at(j);
            }
        }
        Ok(Vector::new(out))
    }

    /// Frobenius norm `sqrt(Σ|entry|²)`.
    pub fn frobenius_norm(&self) -> f64 {
        self.data.iter().map(|z| z.norm_sq()).sum::<f64>().sqrt()
    }

    fn mismatch(&self, op: &'static str, rhs: &Matrix) -> NumericError {
        NumericError::DimensionMismatch {
            op,
            lhs_rows: self.rows,
            lhs_cols: self.cols,
            rhs_rows: rhs.rows,
            rhs_cols: rhs.cols,
        }
    }
}
