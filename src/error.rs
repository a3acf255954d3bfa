use thiserror::Error;

/// Custom error type for eulerbench
///
/// This error type is used to wrap all possible errors that can occur when integrating or benchmarking
#[derive(Error, Debug)]
pub enum EulerBenchError {
    #[error("Invalid input: {0}")]
    InvalidInputError(#[from] InvalidInputError),
    #[error("Configuration error: {0}")]
    ConfigurationIndexError(#[from] ConfigurationIndexError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Error: {0}")]
    Other(String),
}

/// Malformed initial state, time grid or benchmark configuration
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidInputError {
    #[error("Initial state must have at least one element")]
    EmptyState,
    #[error("Time grid must have at least one point")]
    EmptyTimeGrid,
    #[error(
        "Time grid must be strictly ascending: t[{index}] = {current} is not greater than the preceding point {previous}"
    )]
    NonAscendingTimeGrid {
        index: usize,
        previous: f64,
        current: f64,
    },
    #[error("State has wrong length: expected {expected}, got {found}")]
    StateLengthMismatch { expected: usize, found: usize },
    #[error("Trajectory has wrong number of rows: expected {expected}, got {found}")]
    GridLengthMismatch { expected: usize, found: usize },
    #[error("Time step must be finite and positive, got {step}")]
    InvalidTimeStep { step: f64 },
    #[error("Repeat count must be greater than 0")]
    ZeroRepeatCount,
}

/// A benchmark configuration was selected that does not exist
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration index {index} is out of range, {len} configurations available")]
pub struct ConfigurationIndexError {
    pub index: usize,
    pub len: usize,
}

#[macro_export]
macro_rules! invalid_input_error {
    ($variant:ident) => {
        EulerBenchError::from(InvalidInputError::$variant)
    };
    ($variant:ident { $($field:ident: $value:expr),* $(,)? }) => {
        EulerBenchError::from(InvalidInputError::$variant { $($field: $value),* })
    };
}

#[macro_export]
macro_rules! other_error {
    ($msg:expr) => {
        EulerBenchError::Other($msg.to_string())
    };
}
