//! Logistic activation shared by both network kinds.

/// Sigmoid function.
/// Implements the formula:
/// `1 / (1 + exp(-x))`.
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Sigmoid derivative function, expressed in terms of sigmoid itself.
/// Implements the formula:
/// `s * (1 - s)`.
///
/// `s` must be an already activated value, never a raw weighted sum.
pub fn dsigmoid(s: f64) -> f64 {
    s * (1.0 - s)
}
