use pyo3::{prelude::*, wrap_pymodule};

use super::matrix_rows;
use crate::ensure_len;
use crate::{KMeans, NetConfig, NetError, Network, Rbf as InnerRbf, SizeMismatch};

#[pyclass]
pub struct Rbf {
    net: InnerRbf,
}

#[pymethods]
impl Rbf {
    /// `kmeans_iterations` switches center selection from random subsampling to k-means.
    #[new]
    pub fn new(
        inputs: usize,
        outputs: usize,
        centers: usize,
        regression: bool,
        learning_rate: Option<f64>,
        momentum: Option<f64>,
        seed: Option<u64>,
        kmeans_iterations: Option<usize>,
    ) -> Self {
        let defaults = NetConfig::default();
        let config = NetConfig {
            learning_rate: learning_rate.unwrap_or(defaults.learning_rate),
            momentum: momentum.unwrap_or(defaults.momentum),
            seed,
            logging: crate::Logging::Silent,
        };
        let net = InnerRbf::with_config(inputs, outputs, centers, regression, config);
        Self {
            net: match kmeans_iterations {
                Some(iterations) => net.center_selection(KMeans { iterations }),
                None => net,
            },
        }
    }

    pub fn forward(&mut self, input: Vec<f64>) -> Result<Vec<f64>, NetError> {
        Ok(self.net.forward(&input)?.to_vec())
    }

    pub fn basis_vector(&self, input: Vec<f64>) -> Result<Vec<f64>, NetError> {
        self.net.basis_vector(&input)
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

    pub fn centers(&self) -> Vec<Vec<f64>> {
        self.net.centers().iter().map(|c| c.to_vec()).collect()
    }

    /// Returns `basis -> output` weights.
    pub fn export(&self) -> Vec<Vec<f64>> {
        matrix_rows(self.net.weights())
    }
}

#[pymodule]
fn rbf(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<Rbf>()?;
    Ok(())
}

pub fn construct_module(m: &PyModule) -> PyResult<()> {
    m.add_wrapped(wrap_pymodule!(rbf))?;
    Ok(())
}
