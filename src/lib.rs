//! Shallow feedforward networks for small in-memory datasets.
//!
//! * [`Mlp`] - one sigmoid hidden layer, trained by backpropagation with momentum;
//! * [`Rbf`] - normalized Gaussian responses to centers drawn from the training data,
//!   followed by a linear stage trained by the delta rule with momentum.
//!
//! Both nets work in regression mode (linear outputs) or classification mode
//! (sigmoid outputs) and share the [`Network`] interface.
//!
//! # Example
//!
//! ```
//! use shallownet::{Logging, Mlp, NetConfig, Network};
//!
//! let inputs = [[0.0, 0.0], [0.0, 1.0], [1.0, 0.0], [1.0, 1.0]];
//! let targets = [[0.0], [1.0], [1.0], [2.0]];
//!
//! let config = NetConfig::default().seed(5).logging(Logging::Silent);
//! let mut net = Mlp::with_config(2, 4, 1, true, config);
//! net.train(&inputs, &targets, 1000).unwrap();
//!
//! let output = net.forward(&[1.0, 1.0]).unwrap();
//! println!("1 + 1 = {:.2}", output[0]);
//! ```

pub mod activation;
mod config;
mod error;
pub mod feedforward;
mod matrix;
mod network;
pub mod rbf;
mod shuffle;
mod trainer;

#[cfg(feature = "python")]
mod python_ffi;

pub use config::NetConfig;
pub use error::{NetError, SizeMismatch};
pub use feedforward::Mlp;
pub use matrix::Matrix;
pub use network::{half_squared_error, Network};
pub use rbf::{CenterSelection, KMeans, RandomSubsample, Rbf, KERNEL_WIDTH};
pub use shuffle::random_permutation;
pub use trainer::Logging;
