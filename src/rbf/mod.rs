//! Radial basis function network
//!
//! Hidden representation of an input is the normalized Gaussian response of a set of
//! centers drawn from the training inputs. Centers are frozen once training starts;
//! only the linear `basis -> output` stage is trained, by the delta rule with momentum.
//!
//! # Example
//!
//! ```
//! # use shallownet::{NetConfig, Network, Rbf};
//! let inputs = [[0.0, 0.0], [0.0, 1.0], [1.0, 0.0], [1.0, 1.0]];
//! let targets = [[0.0], [1.0], [1.0], [2.0]];
//!
//! let mut net = Rbf::with_config(2, 1, 4, true, NetConfig::default().seed(1));
//! net.train(&inputs, &targets, 1000).unwrap();
//!
//! let sum = net.forward(&[1.0, 1.0]).unwrap()[0];
//! assert!((sum - 2.0).abs() < 0.1);
//! ```

mod centers;
mod net;

pub use centers::*;
pub use net::*;
