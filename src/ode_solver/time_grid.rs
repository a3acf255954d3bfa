use nalgebra::DVector;

use crate::{
    error::{EulerBenchError, InvalidInputError},
    invalid_input_error, other_error,
    scalar::scalar,
    Scalar,
};

/// Evenly spaced time points in the half-open interval `[start, stop)`.
///
/// Follows the NumPy `arange` convention: the grid has `ceil((stop - start) / step)` points
/// and point `i` is `start + i * step`, so no rounding error accumulates along the grid.
/// An empty grid is returned when `stop <= start`.
pub fn arange<T: Scalar>(start: T, stop: T, step: T) -> Result<Vec<T>, EulerBenchError> {
    if !(step > T::zero()) || !step.as_f64().is_finite() {
        return Err(invalid_input_error!(InvalidTimeStep {
            step: step.as_f64()
        }));
    }
    if !start.as_f64().is_finite() || !stop.as_f64().is_finite() {
        return Err(other_error!(format!(
            "Time grid bounds must be finite, got start = {start}, stop = {stop}"
        )));
    }
    if stop <= start {
        return Ok(Vec::new());
    }
    let n = ((stop - start) / step).as_f64().ceil();
    // the point count must fit in an allocation of T
    let max_points = isize::MAX as usize / std::mem::size_of::<T>();
    if !(n <= max_points as f64) {
        return Err(invalid_input_error!(InvalidTimeStep {
            step: step.as_f64()
        }));
    }
    Ok(uniform_grid(start, step, n as usize))
}

pub(crate) fn uniform_grid<T: Scalar>(start: T, step: T, n: usize) -> Vec<T> {
    (0..n).map(|i| start + scalar::<T>(i as f64) * step).collect()
}

/// Check that a time grid is non-empty and strictly ascending.
pub fn check_time_grid<T: Scalar>(t: &[T]) -> Result<(), EulerBenchError> {
    if t.is_empty() {
        return Err(invalid_input_error!(EmptyTimeGrid));
    }
    // a NaN anywhere makes the comparison false, so it is reported here too
    if let Some(i) = t.windows(2).position(|w| !(w[1] > w[0])) {
        return Err(invalid_input_error!(NonAscendingTimeGrid {
            index: i + 1,
            previous: t[i].as_f64(),
            current: t[i + 1].as_f64(),
        }));
    }
    Ok(())
}

/// Validate the inputs of an integration run.
pub fn check_inputs<T: Scalar>(x0: &DVector<T>, t: &[T]) -> Result<(), EulerBenchError> {
    check_time_grid(t)?;
    if x0.is_empty() {
        return Err(invalid_input_error!(EmptyState));
    }
    Ok(())
}
