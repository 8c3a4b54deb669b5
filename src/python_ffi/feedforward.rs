use pyo3::{prelude::*, wrap_pymodule};

use super::matrix_rows;
use crate::{ensure_len, Impl_to_PyErr};
use crate::{Mlp as InnerMlp, NetConfig, NetError, Network, SizeMismatch};

#[pyclass]
pub struct Mlp {
    net: InnerMlp,
}

#[pymethods]
impl Mlp {
    #[new]
    pub fn new(
        inputs: usize,
        hidden: usize,
        outputs: usize,
        regression: bool,
        learning_rate: Option<f64>,
        momentum: Option<f64>,
        seed: Option<u64>,
    ) -> Self {
        let defaults = NetConfig::default();
        let config = NetConfig {
            learning_rate: learning_rate.unwrap_or(defaults.learning_rate),
            momentum: momentum.unwrap_or(defaults.momentum),
            seed,
            ..defaults
        };
        Self {
            net: InnerMlp::with_config(inputs, hidden, outputs, regression, config),
        }
    }

    pub fn forward(&mut self, input: Vec<f64>) -> Result<Vec<f64>, NetError> {
        Ok(self.net.forward(&input)?.to_vec())
    }

    pub fn feedback(&mut self, target: Vec<f64>) -> Result<(), SizeMismatch> {
        ensure_len!(target, self.net.output_len());
        self.net.feedback(&target);
        Ok(())
    }

    pub fn calc_error(&self, target: Vec<f64>) -> Result<f64, SizeMismatch> {
        ensure_len!(target, self.net.output_len());
        Ok(self.net.calc_error(&target))
    }

    pub fn train(
        &mut self,
        inputs: Vec<Vec<f64>>,
        targets: Vec<Vec<f64>>,
        iterations: usize,
    ) -> Result<(), NetError> {
        self.net.train(&inputs, &targets, iterations)
    }

    /// Returns `(input -> hidden, hidden -> output)` weights.
    pub fn export(&self) -> (Vec<Vec<f64>>, Vec<Vec<f64>>) {
        let (hidden, output) = self.net.weights();
        (matrix_rows(hidden), matrix_rows(output))
    }
}

#[pymodule]
fn feedforward(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<Mlp>()?;
    Ok(())
}

pub fn construct_module(m: &PyModule) -> PyResult<()> {
    m.add_wrapped(wrap_pymodule!(feedforward))?;
    Ok(())
}

Impl_to_PyErr!(for NetError, SizeMismatch);
