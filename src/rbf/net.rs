use rand::rngs::StdRng;

use super::centers::{squared_distance, CenterSelection, RandomSubsample};
use crate::activation::{dsigmoid, sigmoid};
use crate::config::NetConfig;
use crate::error::{NetError, SizeMismatch};
use crate::matrix::{scalar_product, Matrix};
use crate::network::{momentum_step, Network, BIAS};
use crate::trainer::{run_epochs, validate_samples, Logging, OwnsRng};

/// Width coefficient of the Gaussian kernel: `exp(-KERNEL_WIDTH * distance^2)`.
pub const KERNEL_WIDTH: f64 = 8.0;

/// RBF network structure.
pub struct Rbf {
    /// Number of raw input values.
    input_count: usize,
    center_count: usize,
    /// Empty until the first `train`, then exactly `center_count` vectors.
    centers: Vec<Box<[f64]>>,
    /// Set by the first `train` that selects centers, even if there are none.
    trained: bool,

    /// `[basis activations]bias`, one activation per center.
    input_layer: Box<[f64]>,
    output_layer: Box<[f64]>,

    /// `output_len` x `center_count + 1`
    weight_output: Matrix,
    /// Previous changes of `weight_output`, for momentum.
    last_change_output: Matrix,

    regression: bool,
    learning_rate: f64,
    momentum: f64,
    logging: Logging,
    rng: StdRng,
    selection: Box<dyn CenterSelection>,
}

impl Rbf {
    /// Returns net with default hyperparameters (see `NetConfig`), without training logs.
    pub fn new(inputs: usize, outputs: usize, centers: usize, regression: bool) -> Rbf {
        let config = NetConfig::default().logging(Logging::Silent);
        Rbf::with_config(inputs, outputs, centers, regression, config)
    }

    /// Returns net with given learning rate and momentum, without training logs.
    pub fn with_rates(
        inputs: usize,
        outputs: usize,
        centers: usize,
        regression: bool,
        learning_rate: f64,
        momentum: f64,
    ) -> Rbf {
        let config = NetConfig::default()
            .learning_rate(learning_rate)
            .momentum(momentum)
            .logging(Logging::Silent);
        Rbf::with_config(inputs, outputs, centers, regression, config)
    }

    /// Returns net for given geometry.
    /// Weights are random from range [-1,1), momentum starts at zero, centers are
    /// chosen by `RandomSubsample` when training starts.
    ///
    /// # Arguments
    /// * `inputs` - number of input values;
    /// * `outputs` - number of output neurons;
    /// * `centers` - number of centers, at most the number of training samples;
    /// * `regression` - linear output layer if `true`, sigmoid otherwise;
    /// * `config` - hyperparameters, seed and logging.
    pub fn with_config(
        inputs: usize,
        outputs: usize,
        centers: usize,
        regression: bool,
        config: NetConfig,
    ) -> Rbf {
        let mut rng = config.rng();
        let weight_output = Matrix::random(outputs, centers + 1, -1.0, 1.0, &mut rng);

        Rbf {
            input_count: inputs,
            center_count: centers,
            centers: Vec::with_capacity(centers),
            trained: false,
            input_layer: vec![0.0; centers + 1].into_boxed_slice(),
            output_layer: vec![0.0; outputs].into_boxed_slice(),
            last_change_output: Matrix::filled(outputs, centers + 1, 0.0),
            weight_output,
            regression,
            learning_rate: config.learning_rate,
            momentum: config.momentum,
            logging: config.logging,
            rng,
            selection: Box::new(RandomSubsample),
        }
    }

    /// Replaces the way centers are chosen from training inputs.
    ///
    /// # Examples
    /// ```
    /// # use shallownet::{KMeans, Rbf};
    /// let net = Rbf::new(2, 1, 3, true).center_selection(KMeans { iterations: 10 });
    /// ```
    pub fn center_selection<S: CenterSelection + 'static>(mut self, selection: S) -> Rbf {
        self.selection = Box::new(selection);
        self
    }

    pub fn center_count(&self) -> usize {
        self.center_count
    }

    /// Centers chosen by the last `train`, empty before it.
    pub fn centers(&self) -> &[Box<[f64]>] {
        &self.centers
    }

    /// Whether centers were selected by `train`.
    pub fn is_trained(&self) -> bool {
        self.trained
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn momentum(&self) -> f64 {
        self.momentum
    }

    /// Exports `basis -> output` weights from network.
    pub fn weights(&self) -> &Matrix {
        &self.weight_output
    }

    /// Normalized Gaussian responses of all centers to `input`.
    ///
    /// # Returns
    /// * `Ok(basis)` with `center_count` values summing to 1;
    /// * `Err(NetError::BadInputs)` if `input` has wrong size;
    /// * `Err(NetError::Untrained)` if centers are not selected yet.
    pub fn basis_vector(&self, input: &[f64]) -> Result<Vec<f64>, NetError> {
        if input.len() != self.input_count {
            return Err(NetError::BadInputs(SizeMismatch {
                expected: self.input_count,
                got: input.len(),
            }));
        }
        if !self.is_trained() {
            return Err(NetError::Untrained);
        }
        Ok(self.transform(input))
    }

    /// Implements the formula:
    /// `basis_j = exp(-KERNEL_WIDTH * d_j) / sum_k(exp(-KERNEL_WIDTH * d_k))`,
    /// where `d_j` is the squared distance from `input` to center `j`.
    fn transform(&self, input: &[f64]) -> Vec<f64> {
        let n = self.input_count;
        let distances: Vec<f64> = self
            .centers
            .iter()
            .map(|c| squared_distance(&input[..n], &c[..n]))
            .collect();

        // Shifting by the smallest distance leaves the ratios unchanged,
        // but keeps the largest response at 1 so the sum can't underflow.
        let closest = distances.iter().cloned().fold(f64::INFINITY, f64::min);
        let mut basis: Vec<f64> = distances
            .iter()
            .map(|&d| (-KERNEL_WIDTH * (d - closest)).exp())
            .collect();

        let total: f64 = basis.iter().sum();
        for b in &mut basis {
            *b /= total;
        }
        basis
    }

    /// Calculates outputs from an already computed basis vector (see `basis_vector`).
    ///
    /// # Returns
    /// * `Ok(outputs)` if `basis` has `center_count` values;
    /// * `Err(NetError::BadInputs)` otherwise.
    pub fn forward_basis(&mut self, basis: &[f64]) -> Result<&[f64], NetError> {
        let n = self.center_count;
        if basis.len() != n {
            return Err(NetError::BadInputs(SizeMismatch {
                expected: n,
                got: basis.len(),
            }));
        }

        self.input_layer[..n].copy_from_slice(basis);
        self.input_layer[n] = BIAS;

        let regression = self.regression;
        for (i, o) in self.output_layer.iter_mut().enumerate() {
            let sum = scalar_product(&self.input_layer, self.weight_output.row(i));
            *o = if regression { sum } else { sigmoid(sum) };
        }

        Ok(&self.output_layer[..])
    }
}

impl OwnsRng for Rbf {
    fn rng_mut(&mut self) -> &mut StdRng {
        &mut self.rng
    }
}

impl Network for Rbf {
    fn input_len(&self) -> usize {
        self.input_count
    }

    fn output_len(&self) -> usize {
        self.output_layer.len()
    }

    fn outputs(&self) -> &[f64] {
        &self.output_layer
    }

    fn is_regression(&self) -> bool {
        self.regression
    }

    fn forward(&mut self, input: &[f64]) -> Result<&[f64], NetError> {
        let basis = self.basis_vector(input)?;
        self.forward_basis(&basis)
    }

    /// Delta rule on the `basis -> output` weights; centers are left as they are.
    fn feedback(&mut self, target: &[f64]) {
        assert_eq!(
            target.len(),
            self.output_layer.len(),
            "targets length mismatch"
        );

        let Rbf {
            input_layer,
            output_layer,
            weight_output,
            last_change_output,
            regression,
            learning_rate,
            momentum,
            ..
        } = self;

        for (j, (&o, &t)) in output_layer.iter().zip(target.iter()).enumerate() {
            let err = o - t;
            let delta = if *regression { err } else { err * dsigmoid(o) };
            momentum_step(
                weight_output.row_mut(j),
                last_change_output.row_mut(j),
                &input_layer[..],
                delta,
                *learning_rate,
                *momentum,
            );
        }
    }

    /// Selects centers among `inputs`, then trains the output stage.
    ///
    /// Basis vectors of all samples are computed once, right after center selection,
    /// and reused by every epoch.
    fn train<I, T>(
        &mut self,
        inputs: &[I],
        targets: &[T],
        iterations: usize,
    ) -> Result<(), NetError>
    where
        I: AsRef<[f64]>,
        T: AsRef<[f64]>,
    {
        validate_samples(inputs, targets, self.input_count, self.output_len())?;
        if self.center_count > inputs.len() {
            return Err(NetError::TooManyCenters {
                centers: self.center_count,
                samples: inputs.len(),
            });
        }

        let samples: Vec<&[f64]> = inputs.iter().map(|i| i.as_ref()).collect();
        self.centers = self
            .selection
            .select(&samples, self.center_count, &mut self.rng);
        debug_assert_eq!(self.centers.len(), self.center_count);
        self.trained = true;

        let basis: Vec<Vec<f64>> = samples.iter().map(|s| self.transform(s)).collect();

        let logging = self.logging;
        run_epochs(self, inputs.len(), iterations, logging, |net, index| {
            let target = targets[index].as_ref();
            net.forward_basis(&basis[index])?;
            net.feedback(target);
            Ok(net.calc_error(target))
        })
    }
}
