//! Capability shared by `Mlp` and `Rbf`.

use crate::error::NetError;

/// Value of every bias neuron.
pub(crate) const BIAS: f64 = 1.0;

/// A trainable feedforward net with a single trainable output stage.
///
/// Nets keep their layer activations in internal buffers, which are overwritten
/// by every `forward` call. The returned output slice borrows the net, so one
/// computation owns the buffers at a time; `feedback` must follow the `forward`
/// of the same sample.
pub trait Network {
    /// Number of raw inputs the net accepts.
    fn input_len(&self) -> usize;

    /// Number of output neurons.
    fn output_len(&self) -> usize;

    /// Output layer of the last `forward` call.
    fn outputs(&self) -> &[f64];

    /// `true` when the output layer is linear, `false` when it is sigmoid-activated.
    fn is_regression(&self) -> bool;

    /// Calculates outputs of the net for the given input.
    ///
    /// # Returns
    /// * `Ok(outputs)` if `input` has `input_len` values;
    /// * `Err(NetError)` otherwise, with the net left untouched.
    fn forward(&mut self, input: &[f64]) -> Result<&[f64], NetError>;

    /// Adjusts weights towards `target`, using activations of the last `forward` call.
    ///
    /// # Panics
    /// If `target` doesn't have `output_len` values.
    fn feedback(&mut self, target: &[f64]);

    /// Half squared error of the last outputs against `target`.
    ///
    /// # Panics
    /// If `target` doesn't have `output_len` values.
    fn calc_error(&self, target: &[f64]) -> f64 {
        half_squared_error(self.outputs(), target)
    }

    /// Runs `iterations` epochs of stochastic gradient descent over the samples,
    /// presenting them in a fresh random order every epoch.
    ///
    /// All samples are validated before the first weight changes.
    fn train<I, T>(
        &mut self,
        inputs: &[I],
        targets: &[T],
        iterations: usize,
    ) -> Result<(), NetError>
    where
        I: AsRef<[f64]>,
        T: AsRef<[f64]>;
}

/// Implements the formula:
/// `sum(0.5 * (outputs - targets)^2)`.
///
/// # Examples
/// ```
/// # use shallownet::half_squared_error;
/// assert_eq!(half_squared_error(&[1.0, 0.0], &[0.0, 2.0]), 2.5);
/// ```
pub fn half_squared_error(outputs: &[f64], targets: &[f64]) -> f64 {
    assert_eq!(outputs.len(), targets.len(), "targets length mismatch");
    outputs
        .iter()
        .zip(targets.iter())
        .map(|(&o, &t)| 0.5 * (o - t) * (o - t))
        .sum()
}

/// Gradient step with momentum for one destination neuron.
///
/// For every weight `j`:
/// `change = rate * delta * sources[j] + momentum * last_changes[j]`,
/// the weight is decreased by `change` and `change` is remembered.
pub(crate) fn momentum_step(
    weights: &mut [f64],
    last_changes: &mut [f64],
    sources: &[f64],
    delta: f64,
    rate: f64,
    momentum: f64,
) {
    for ((w, last), &s) in weights
        .iter_mut()
        .zip(last_changes.iter_mut())
        .zip(sources.iter())
    {
        let change = rate * delta * s + momentum * *last;
        *w -= change;
        *last = change;
    }
}
