use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use std::ops::{Index, IndexMut};

/// Dense weight matrix.
///
/// One row per destination neuron, one column per source neuron (bias column included).
/// All cells are stored altogether, row after row:
/// `data = [row_1][row_2] ... [row_N]`
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Box<[f64]>,
}

impl Matrix {
    /// Returns `rows` x `cols` matrix with every cell set to `value`.
    ///
    /// # Examples
    /// ```
    /// # use shallownet::Matrix;
    /// let m = Matrix::filled(2, 3, 0.0);
    /// assert_eq!(m.row(1), &[0.0, 0.0, 0.0]);
    /// ```
    pub fn filled(rows: usize, cols: usize, value: f64) -> Matrix {
        Matrix {
            rows,
            cols,
            data: vec![value; rows * cols].into_boxed_slice(),
        }
    }

    /// Returns `rows` x `cols` matrix with every cell drawn independently
    /// and uniformly from `[lower, upper)`.
    ///
    /// # Panics
    /// If `lower >= upper`.
    pub fn random<R: Rng + ?Sized>(
        rows: usize,
        cols: usize,
        lower: f64,
        upper: f64,
        rng: &mut R,
    ) -> Matrix {
        let between = Uniform::from(lower..upper);
        let mut data = Vec::with_capacity(rows * cols);
        data.extend(between.sample_iter(rng).take(rows * cols));

        Matrix {
            rows,
            cols,
            data: data.into_boxed_slice(),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Weights of the `i`-th destination neuron.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    pub fn row_mut(&mut self, i: usize) -> &mut [f64] {
        &mut self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// All cells, row after row.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        &self.data[row * self.cols + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        &mut self.data[row * self.cols + col]
    }
}

/// Calculates scalar (dot) product of the two given vectors.
/// Callers keep both slices the same length; extra tail values are ignored.
pub(crate) fn scalar_product(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b.iter()).map(|(a, b)| a * b).sum()
}
