//! Hyperparameters shared by both network kinds.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::trainer::Logging;

/// Net hyperparameters.
///
/// The defaults are:
///
/// * A learning rate of 0.25.
/// * A momentum of 0.1.
/// * No seed (the generator is seeded from system entropy).
/// * Coarse logging, a summary every tenth of the training.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct NetConfig {
    /// Scale of every gradient step.
    pub learning_rate: f64,
    /// Fraction of the previous weight change added to the next one.
    pub momentum: f64,
    /// Seed of the net's own random generator.
    pub seed: Option<u64>,
    /// Training progress reports.
    pub logging: Logging,
}

impl Default for NetConfig {
    fn default() -> Self {
        NetConfig {
            learning_rate: 0.25,
            momentum: 0.1,
            seed: None,
            logging: Logging::Coarse,
        }
    }
}

impl NetConfig {
    /// Sets the learning rate.
    pub fn learning_rate(mut self, rate: f64) -> Self {
        self.learning_rate = rate;
        self
    }

    /// Sets the momentum coefficient.
    pub fn momentum(mut self, momentum: f64) -> Self {
        self.momentum = momentum;
        self
    }

    /// Makes every random draw of the net reproducible.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the type of logging to be emitted during training.
    pub fn logging(mut self, logging: Logging) -> Self {
        self.logging = logging;
        self
    }

    /// Builds the generator owned by a new net.
    pub(crate) fn rng(&self) -> StdRng {
        debug_assert!(
            self.learning_rate.is_finite() && self.momentum.is_finite(),
            "rates must be finite"
        );
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
