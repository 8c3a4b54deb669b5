use rand::rngs::StdRng;

use crate::activation::{dsigmoid, sigmoid};
use crate::config::NetConfig;
use crate::error::{NetError, SizeMismatch};
use crate::matrix::{scalar_product, Matrix};
use crate::network::{momentum_step, Network, BIAS};
use crate::trainer::{run_epochs, validate_samples, Logging, OwnsRng};

/// Multilayer perceptron structure.
///
/// `input -> sigmoid hidden layer -> output`, where the output layer is linear in
/// regression mode and sigmoid-activated otherwise. Input and hidden layers carry
/// an extra bias neuron fixed to `1.0`.
pub struct Mlp {
    /// `[inputs]bias`
    input_layer: Box<[f64]>,
    /// `[hidden activations]bias`
    hidden_layer: Box<[f64]>,
    output_layer: Box<[f64]>,

    /// `hidden_len` x `input_len + 1`
    weight_hidden: Matrix,
    /// `output_len` x `hidden_len + 1`
    weight_output: Matrix,

    /// Previous changes of `weight_hidden`, for momentum.
    last_change_hidden: Matrix,
    /// Previous changes of `weight_output`, for momentum.
    last_change_output: Matrix,

    /// Scratch buffers of `feedback`, meaningless outside of it.
    err_hidden: Box<[f64]>,
    err_output: Box<[f64]>,

    regression: bool,
    learning_rate: f64,
    momentum: f64,
    logging: Logging,
    rng: StdRng,
}

impl Mlp {
    /// Returns net with default hyperparameters (see `NetConfig`).
    ///
    /// # Examples
    /// ```
    /// # use shallownet::{Mlp, Network};
    /// let mut net = Mlp::new(2, 3, 1, false);
    /// let output = net.forward(&[0.0, 1.0]).unwrap();
    /// assert!(output[0] > 0.0 && output[0] < 1.0);
    /// ```
    pub fn new(inputs: usize, hidden: usize, outputs: usize, regression: bool) -> Mlp {
        Mlp::with_config(inputs, hidden, outputs, regression, NetConfig::default())
    }

    /// Returns net with given learning rate and momentum.
    pub fn with_rates(
        inputs: usize,
        hidden: usize,
        outputs: usize,
        regression: bool,
        learning_rate: f64,
        momentum: f64,
    ) -> Mlp {
        let config = NetConfig::default()
            .learning_rate(learning_rate)
            .momentum(momentum);
        Mlp::with_config(inputs, hidden, outputs, regression, config)
    }

    /// Returns net for given geometry.
    /// Weights are random from range [-1,1), momentum starts at zero.
    ///
    /// # Arguments
    /// * `inputs` - number of input values (bias is added internally);
    /// * `hidden` - number of hidden neurons (bias is added internally);
    /// * `outputs` - number of output neurons;
    /// * `regression` - linear output layer if `true`, sigmoid otherwise;
    /// * `config` - hyperparameters, seed and logging.
    pub fn with_config(
        inputs: usize,
        hidden: usize,
        outputs: usize,
        regression: bool,
        config: NetConfig,
    ) -> Mlp {
        let mut rng = config.rng();

        let weight_hidden = Matrix::random(hidden, inputs + 1, -1.0, 1.0, &mut rng);
        let weight_output = Matrix::random(outputs, hidden + 1, -1.0, 1.0, &mut rng);

        Mlp {
            input_layer: vec![0.0; inputs + 1].into_boxed_slice(),
            hidden_layer: vec![0.0; hidden + 1].into_boxed_slice(),
            output_layer: vec![0.0; outputs].into_boxed_slice(),
            last_change_hidden: Matrix::filled(hidden, inputs + 1, 0.0),
            last_change_output: Matrix::filled(outputs, hidden + 1, 0.0),
            weight_hidden,
            weight_output,
            err_hidden: vec![0.0; hidden].into_boxed_slice(),
            err_output: vec![0.0; outputs].into_boxed_slice(),
            regression,
            learning_rate: config.learning_rate,
            momentum: config.momentum,
            logging: config.logging,
            rng,
        }
    }

    /// Number of hidden neurons, bias excluded.
    pub fn hidden_len(&self) -> usize {
        self.hidden_layer.len() - 1
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn momentum(&self) -> f64 {
        self.momentum
    }

    /// Exports weights from network.
    ///
    /// # Returns
    /// `(input -> hidden, hidden -> output)`.
    pub fn weights(&self) -> (&Matrix, &Matrix) {
        (&self.weight_hidden, &self.weight_output)
    }
}

impl OwnsRng for Mlp {
    fn rng_mut(&mut self) -> &mut StdRng {
        &mut self.rng
    }
}

impl Network for Mlp {
    fn input_len(&self) -> usize {
        self.input_layer.len() - 1
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
        let n = self.input_len();
        if input.len() != n {
            return Err(NetError::BadInputs(SizeMismatch {
                expected: n,
                got: input.len(),
            }));
        }

        self.input_layer[..n].copy_from_slice(input);
        self.input_layer[n] = BIAS;

        // Hidden layer is always sigmoid-activated
        let hidden = self.hidden_len();
        for i in 0..hidden {
            self.hidden_layer[i] = sigmoid(scalar_product(
                &self.input_layer,
                self.weight_hidden.row(i),
            ));
        }
        self.hidden_layer[hidden] = BIAS;

        let regression = self.regression;
        for (i, o) in self.output_layer.iter_mut().enumerate() {
            let sum = scalar_product(&self.hidden_layer, self.weight_output.row(i));
            *o = if regression { sum } else { sigmoid(sum) };
        }

        Ok(&self.output_layer[..])
    }

    fn feedback(&mut self, target: &[f64]) {
        assert_eq!(
            target.len(),
            self.output_layer.len(),
            "targets length mismatch"
        );

        let Mlp {
            input_layer,
            hidden_layer,
            output_layer,
            weight_hidden,
            weight_output,
            last_change_hidden,
            last_change_output,
            err_hidden,
            err_output,
            regression,
            learning_rate,
            momentum,
            ..
        } = self;
        let (regression, rate, momentum) = (*regression, *learning_rate, *momentum);

        for ((e, &o), &t) in err_output
            .iter_mut()
            .zip(output_layer.iter())
            .zip(target.iter())
        {
            *e = o - t;
        }

        // Linear outputs have derivative 1
        let output_delta = |j: usize| {
            if regression {
                err_output[j]
            } else {
                err_output[j] * dsigmoid(output_layer[j])
            }
        };

        // Errors of hidden neurons are taken against weights before this update
        for (i, e) in err_hidden.iter_mut().enumerate() {
            *e = (0..output_layer.len())
                .map(|j| output_delta(j) * weight_output[(j, i)])
                .sum();
        }

        for j in 0..output_layer.len() {
            momentum_step(
                weight_output.row_mut(j),
                last_change_output.row_mut(j),
                &hidden_layer[..],
                output_delta(j),
                rate,
                momentum,
            );
        }

        for (i, &e) in err_hidden.iter().enumerate() {
            momentum_step(
                weight_hidden.row_mut(i),
                last_change_hidden.row_mut(i),
                &input_layer[..],
                e * dsigmoid(hidden_layer[i]),
                rate,
                momentum,
            );
        }
    }

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
        validate_samples(inputs, targets, self.input_len(), self.output_len())?;

        let logging = self.logging;
        run_epochs(self, inputs.len(), iterations, logging, |net, index| {
            let target = targets[index].as_ref();
            net.forward(inputs[index].as_ref())?;
            net.feedback(target);
            Ok(net.calc_error(target))
        })
    }
}
