use std::fmt;
use thiserror::Error;

/// Error structure for collections size mismatch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeMismatch {
    pub expected: usize,
    pub got: usize,
}

impl fmt::Display for SizeMismatch {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Expected {} values, but got {}!",
            self.expected, self.got
        )
    }
}

/// Errors reported by `Mlp` and `Rbf`.
///
/// Every check happens before any state is touched, so a network that returned
/// an error is left exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetError {
    #[error("Expected {} input(s), but got {}!", .0.expected, .0.got)]
    BadInputs(SizeMismatch),

    #[error("Expected {expected} input(s), but samples[{index}] got {got}!")]
    WrongSampleInputsCount {
        index: usize,
        expected: usize,
        got: usize,
    },

    #[error("Expected {expected} target(s), but samples[{index}] got {got}!")]
    WrongSampleTargetsCount {
        index: usize,
        expected: usize,
        got: usize,
    },

    #[error("Got {inputs} input samples, but {targets} target samples!")]
    SamplesCountMismatch { inputs: usize, targets: usize },

    #[error("Training set is empty!")]
    EmptyTrainingSet,

    #[error("Net has {centers} centers, but only {samples} samples to draw them from!")]
    TooManyCenters { centers: usize, samples: usize },

    #[error("Centers are not selected yet, train the net first!")]
    Untrained,
}

impl NetError {
    /// Whether the error is about vector lengths not matching the net's layers.
    pub fn is_dimension_mismatch(&self) -> bool {
        matches!(
            self,
            NetError::BadInputs(_)
                | NetError::WrongSampleInputsCount { .. }
                | NetError::WrongSampleTargetsCount { .. }
                | NetError::SamplesCountMismatch { .. }
        )
    }
}
