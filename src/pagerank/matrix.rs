//! Dense square matrix used for the PageRank transition probabilities
//!
//! Row-major storage; the engine only needs whole-row operations and a
//! row-vector times matrix product.

use rayon::prelude::*;

/// A square `n x n` matrix of `f64` stored row-major
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix {
    n: usize,
    data: Vec<f64>,
}

impl DenseMatrix {
    /// Create an `n x n` matrix filled with zeros
    pub fn zeros(n: usize) -> Self {
        Self {
            n,
            data: vec![0.0; n * n],
        }
    }

    /// Number of rows (and columns)
    pub fn dim(&self) -> usize {
        self.n
    }

    /// Read one cell
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.n + col]
    }

    /// Write one cell
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.data[row * self.n + col] = value;
    }

    /// Borrow a row
    pub fn row(&self, row: usize) -> &[f64] {
        &self.data[row * self.n..(row + 1) * self.n]
    }

    /// Mutably borrow a row
    pub fn row_mut(&mut self, row: usize) -> &mut [f64] {
        let n = self.n;
        &mut self.data[row * n..(row + 1) * n]
    }

    /// Sum of the entries of a row
    pub fn row_sum(&self, row: usize) -> f64 {
        self.row(row).iter().sum()
    }

    /// Largest entry of a row
    pub fn row_max(&self, row: usize) -> f64 {
        self.row(row).iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Set every entry of a row to `value`
    pub fn fill_row(&mut self, row: usize, value: f64) {
        self.row_mut(row).fill(value);
    }

    /// Multiply every entry of a row by `factor`
    pub fn scale_row(&mut self, row: usize, factor: f64) {
        for x in self.row_mut(row) {
            *x *= factor;
        }
    }

    /// Divide every entry of a row by `divisor`
    pub fn divide_row(&mut self, row: usize, divisor: f64) {
        for x in self.row_mut(row) {
            *x /= divisor;
        }
    }

    /// Apply `f` to every cell
    pub fn map_in_place(&mut self, f: impl Fn(f64) -> f64) {
        for x in &mut self.data {
            *x = f(*x);
        }
    }

    /// Row vector times matrix: `out[j] = sum_i state[i] * m[i][j]`.
    ///
    /// The input is never modified; the product is written to a fresh vector.
    pub fn left_multiply(&self, state: &[f64]) -> Vec<f64> {
        debug_assert_eq!(state.len(), self.n);
        let mut out = vec![0.0; self.n];
        for (i, &p) in state.iter().enumerate() {
            for (o, &m) in out.iter_mut().zip(self.row(i)) {
                *o += p * m;
            }
        }
        out
    }

    /// Column-parallel variant of [`left_multiply`](Self::left_multiply).
    ///
    /// Each column is summed over rows in ascending order, the same order the
    /// sequential product uses, so both return bitwise-identical vectors.
    pub fn left_multiply_parallel(&self, state: &[f64]) -> Vec<f64> {
        debug_assert_eq!(state.len(), self.n);
        let n = self.n;
        (0..n)
            .into_par_iter()
            .map(|col| {
                state
                    .iter()
                    .enumerate()
                    .fold(0.0, |acc, (row, &p)| acc + p * self.data[row * n + col])
            })
            .collect()
    }
}
