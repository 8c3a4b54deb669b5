//! Multilayer perceptron with one hidden layer, trained by backpropagation with momentum

mod net;

pub use net::*;
