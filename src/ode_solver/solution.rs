use nalgebra::{ComplexField, DVector};

use crate::{
    error::{EulerBenchError, InvalidInputError},
    invalid_input_error, Scalar, Trajectory,
};

pub struct SolutionPoint<T: Scalar> {
    pub state: DVector<T>,
    pub t: T,
}

/// Exact states of a test problem sampled on its time grid, used to measure integration error.
pub struct ReferenceSolution<T: Scalar> {
    pub solution_points: Vec<SolutionPoint<T>>,
}

impl<T: Scalar> Default for ReferenceSolution<T> {
    fn default() -> Self {
        Self {
            solution_points: Vec::new(),
        }
    }
}

impl<T: Scalar> ReferenceSolution<T> {
    /// Sample `exact` at every point of the time grid `t`.
    pub fn from_fn(t: &[T], exact: impl Fn(T) -> DVector<T>) -> Self {
        let mut soln = Self::default();
        for &ti in t {
            soln.push(exact(ti), ti);
        }
        soln
    }

    pub fn push(&mut self, state: DVector<T>, t: T) {
        self.solution_points.push(SolutionPoint { state, t });
    }

    pub fn len(&self) -> usize {
        self.solution_points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solution_points.is_empty()
    }

    /// Largest absolute difference between `trajectory` and the exact states, over every row
    /// and component. Returns NaN as soon as any difference is NaN.
    pub fn max_abs_error(&self, trajectory: &Trajectory<T>) -> Result<T, EulerBenchError> {
        if trajectory.len() != self.len() {
            return Err(invalid_input_error!(GridLengthMismatch {
                expected: self.len(),
                found: trajectory.len(),
            }));
        }
        let y = trajectory.as_matrix();
        let mut max_error = T::zero();
        for (n, point) in self.solution_points.iter().enumerate() {
            if point.state.len() != trajectory.nstates() {
                return Err(invalid_input_error!(StateLengthMismatch {
                    expected: point.state.len(),
                    found: trajectory.nstates(),
                }));
            }
            for (i, exact) in point.state.iter().enumerate() {
                let error = ComplexField::abs(y[(n, i)] - *exact);
                if error.as_f64().is_nan() {
                    return Ok(error);
                }
                if error > max_error {
                    max_error = error;
                }
            }
        }
        Ok(max_error)
    }
}
