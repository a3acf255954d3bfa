use nalgebra::DVector;
use serde::{Deserialize, Serialize};

use crate::{
    error::{EulerBenchError, InvalidInputError},
    invalid_input_error,
    ode_solver::time_grid::{check_inputs, uniform_grid},
    scalar::scalar,
    Scalar,
};

pub const DEFAULT_REPEAT: usize = 20;
pub const DEFAULT_STEP: f64 = 0.01;
pub const DEFAULT_NTIMES: usize = 1000;

/// Inputs shared by every configuration of a benchmark run. Use the `with_*` methods to
/// override the defaults, then hand the config to [crate::BenchmarkHarness::new].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = ""))]
pub struct BenchmarkConfig<T: Scalar> {
    pub repeat: usize,
    pub x0: Vec<T>,
    pub t: Vec<T>,
}

impl<T: Scalar> Default for BenchmarkConfig<T> {
    /// - repeat = 20
    /// - x0 = [0, 1]
    /// - t = arange(0, 10, 0.01), 1000 points
    fn default() -> Self {
        Self {
            repeat: DEFAULT_REPEAT,
            x0: vec![T::zero(), T::one()],
            t: uniform_grid(T::zero(), scalar(DEFAULT_STEP), DEFAULT_NTIMES),
        }
    }
}

impl<T: Scalar> BenchmarkConfig<T> {
    pub fn new(repeat: usize, x0: Vec<T>, t: Vec<T>) -> Self {
        Self { repeat, x0, t }
    }

    /// Set the number of timed calls per configuration.
    pub fn with_repeat(mut self, repeat: usize) -> Self {
        self.repeat = repeat;
        self
    }

    pub fn with_initial_state(mut self, x0: impl IntoIterator<Item = T>) -> Self {
        self.x0 = x0.into_iter().collect();
        self
    }

    pub fn with_time_grid(mut self, t: impl IntoIterator<Item = T>) -> Self {
        self.t = t.into_iter().collect();
        self
    }

    pub fn initial_state(&self) -> DVector<T> {
        DVector::from_column_slice(&self.x0)
    }

    pub fn validate(&self) -> Result<(), EulerBenchError> {
        if self.repeat == 0 {
            return Err(invalid_input_error!(ZeroRepeatCount));
        }
        check_inputs(&self.initial_state(), &self.t)
    }
}
