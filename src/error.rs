use std::{
    error::Error,
    fmt::{self, Display},
    io,
};

/// The result type used in the entire perceptron crate.
pub type Result<T> = std::result::Result<T, PerceptronErr>;

/// The perceptron crate's error type.
#[derive(Debug)]
pub enum PerceptronErr {
    /// The weight vector and an input vector have different lengths.
    DimensionMismatch {
        got: usize,
        expected: usize,
    },
    InvalidLabel {
        got: f64,
    },
    SizeMismatch {
        what: &'static str,
        got: usize,
        expected: usize,
    },
    InvalidConfig(String),
    Io(io::Error),
    Json(serde_json::Error),
}

impl Display for PerceptronErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PerceptronErr::DimensionMismatch { got, expected } => write!(
                f,
                "dimension of weight vector should be same as input vector, got {got} inputs and {expected} weights"
            ),
            PerceptronErr::InvalidLabel { got } => {
                write!(f, "a target label must be either 0 or 1, got {got}")
            }
            PerceptronErr::SizeMismatch {
                what,
                got,
                expected,
            } => write!(
                f,
                "there's a size mismatch for {what}, got {got} and expected {expected}"
            ),
            PerceptronErr::InvalidConfig(msg) => write!(f, "invalid configuration: {msg}"),
            PerceptronErr::Io(e) => write!(f, "io error: {e}"),
            PerceptronErr::Json(e) => write!(f, "invalid JSON: {e}"),
        }
    }
}

impl Error for PerceptronErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PerceptronErr::Io(e) => Some(e),
            PerceptronErr::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for PerceptronErr {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for PerceptronErr {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}
