//! Epoch loop shared by both network kinds.

use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::error::NetError;
use crate::shuffle::random_permutation;

/// How often an in-epoch progress line is emitted, in samples.
const PROGRESS_STEP: usize = 1000;

/// Logging frequency to use during training
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Logging {
    /// No logs will be emitted
    Silent,
    /// A summary will be emitted every tenth of the epochs (every epoch for less than 10)
    Coarse,
    /// A summary will be emitted after every `n` epochs
    Every(usize),
}

impl Logging {
    /// Number of epochs between two summaries, `None` when silent.
    fn interval(&self, iterations: usize) -> Option<usize> {
        match *self {
            Logging::Silent => None,
            Logging::Coarse => Some(((iterations + 9) / 10).max(1)),
            Logging::Every(n) => Some(n.max(1)),
        }
    }

    /// Performs logging inside the epoch, on every `PROGRESS_STEP`th sample.
    fn progress(&self, epoch: usize, step: usize, samples: usize) {
        if *self == Logging::Silent || (step + 1) % PROGRESS_STEP != 0 {
            return;
        }
        debug!(
            epoch = epoch + 1,
            "progress {:.2} %",
            step as f64 * 100.0 / samples as f64
        );
    }

    /// Performs logging at the end of `epoch`.
    fn epoch(&self, epoch: usize, iterations: usize, mse: f64) {
        if let Some(interval) = self.interval(iterations) {
            if (epoch + 1) % interval == 0 {
                info!(epoch = epoch + 1, "MSE: {:.5}", mse);
            }
        }
    }

    /// Performs logging at the end of training.
    fn completion(&self, iterations: usize) {
        if *self != Logging::Silent {
            info!(iterations, "training done");
        }
    }
}

/// Gives the epoch loop access to the generator owned by a net.
pub(crate) trait OwnsRng {
    fn rng_mut(&mut self) -> &mut StdRng;
}

/// Checks the whole training set against the net's dimensions.
///
/// # Arguments
/// * `inputs` - input vectors, one per sample;
/// * `targets` - desired outputs, parallel to `inputs`;
/// * `input_len` - number of values every input must have;
/// * `output_len` - number of values every target must have.
pub(crate) fn validate_samples<I, T>(
    inputs: &[I],
    targets: &[T],
    input_len: usize,
    output_len: usize,
) -> Result<(), NetError>
where
    I: AsRef<[f64]>,
    T: AsRef<[f64]>,
{
    if inputs.is_empty() {
        return Err(NetError::EmptyTrainingSet);
    }
    if inputs.len() != targets.len() {
        return Err(NetError::SamplesCountMismatch {
            inputs: inputs.len(),
            targets: targets.len(),
        });
    }
    for (index, (input, target)) in inputs.iter().zip(targets.iter()).enumerate() {
        let (input, target) = (input.as_ref(), target.as_ref());
        if input.len() != input_len {
            return Err(NetError::WrongSampleInputsCount {
                index,
                expected: input_len,
                got: input.len(),
            });
        }
        if target.len() != output_len {
            return Err(NetError::WrongSampleTargetsCount {
                index,
                expected: output_len,
                got: target.len(),
            });
        }
    }
    Ok(())
}

/// Runs `iterations` epochs over `samples` samples.
///
/// Every epoch draws a fresh order from the net's generator and calls
/// `step(net, sample_index)` for each sample; `step` returns the sample's error,
/// which is summed into the epoch error. `samples` must not be zero.
pub(crate) fn run_epochs<N, F>(
    net: &mut N,
    samples: usize,
    iterations: usize,
    logging: Logging,
    mut step: F,
) -> Result<(), NetError>
where
    N: OwnsRng,
    F: FnMut(&mut N, usize) -> Result<f64, NetError>,
{
    for epoch in 0..iterations {
        let order = random_permutation(samples, net.rng_mut());
        let mut epoch_error = 0.0;
        for (i, &index) in order.iter().enumerate() {
            epoch_error += step(net, index)?;
            logging.progress(epoch, i, samples);
        }
        logging.epoch(epoch, iterations, epoch_error / samples as f64);
    }
    logging.completion(iterations);
    Ok(())
}
