//! Python FFI
use pyo3::prelude::*;

use crate::Matrix;

mod feedforward;
mod gen_macros;
mod rbf;

#[pymodule]
fn shallownet(_py: Python, m: &PyModule) -> PyResult<()> {
    feedforward::construct_module(m)?;
    rbf::construct_module(m)?;
    Ok(())
}

/// Weights as nested lists, one list per destination neuron.
fn matrix_rows(matrix: &Matrix) -> Vec<Vec<f64>> {
    (0..matrix.rows()).map(|i| matrix.row(i).to_vec()).collect()
}
