use std::fmt;

use nalgebra::DVector;
use serde::{Deserialize, Serialize};

use crate::{
    error::{EulerBenchError, InvalidInputError},
    invalid_input_error,
    ode_solver::{stepper::euler_step_inplace, time_grid::check_inputs},
    DerivativeFn, OdeSystem, Scalar, Trajectory,
};

/// How the integrator obtains the derivative on each step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DispatchStrategy {
    /// A function pointer handed to [accum], called indirectly on every step.
    Callback,
    /// An [OdeSystem] trait object handed to [accum_polymorphic], called through its vtable.
    Polymorphic,
    /// A concrete [OdeSystem] type handed to [accum_monomorphic], statically dispatched.
    Monomorphic,
}

impl DispatchStrategy {
    pub fn name(&self) -> &'static str {
        match self {
            DispatchStrategy::Callback => "callback",
            DispatchStrategy::Polymorphic => "polymorphic",
            DispatchStrategy::Monomorphic => "monomorphic",
        }
    }
}

impl fmt::Display for DispatchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Integrate `dx/dt = f(x, t)` with fixed-step explicit Euler on the grid `t`, calling the
/// callback `f` for the derivative.
///
/// Row 0 of the result is `x0`; row `n` is the state after stepping from `t[n-1]` to `t[n]`,
/// using the derivative evaluated at the previous state and time.
///
/// # Errors
/// [InvalidInputError] if `t` is empty or not strictly ascending, or `x0` is empty.
/// Nothing is computed in that case.
pub fn accum<T: Scalar>(
    f: DerivativeFn<T>,
    x0: &DVector<T>,
    t: &[T],
) -> Result<Trajectory<T>, EulerBenchError> {
    march(x0, t, f)
}

/// Same contract as [accum], with the derivative provided by an [OdeSystem] trait object
/// bound once before the loop.
///
/// # Errors
/// As [accum], plus [InvalidInputError::StateLengthMismatch] if `system.nstates()` differs
/// from `x0.len()`.
pub fn accum_polymorphic<T: Scalar>(
    system: &dyn OdeSystem<T>,
    x0: &DVector<T>,
    t: &[T],
) -> Result<Trajectory<T>, EulerBenchError> {
    check_nstates(system.nstates(), x0)?;
    march(x0, t, |x: &DVector<T>, t: T, dxdt: &mut DVector<T>| {
        system.derivative_inplace(x, t, dxdt)
    })
}

/// Same contract as [accum_polymorphic], generic over the concrete system type so the
/// derivative call can be inlined into the stepping loop.
pub fn accum_monomorphic<T: Scalar, S: OdeSystem<T>>(
    system: &S,
    x0: &DVector<T>,
    t: &[T],
) -> Result<Trajectory<T>, EulerBenchError> {
    check_nstates(system.nstates(), x0)?;
    march(x0, t, |x: &DVector<T>, t: T, dxdt: &mut DVector<T>| {
        system.derivative_inplace(x, t, dxdt)
    })
}

fn check_nstates<T: Scalar>(nstates: usize, x0: &DVector<T>) -> Result<(), EulerBenchError> {
    if !x0.is_empty() && nstates != x0.len() {
        return Err(invalid_input_error!(StateLengthMismatch {
            expected: nstates,
            found: x0.len(),
        }));
    }
    Ok(())
}

// The time-marching loop shared by every entry point. The derivative buffer is allocated
// once per run and owned by this call.
fn march<T, F>(x0: &DVector<T>, t: &[T], mut derivative: F) -> Result<Trajectory<T>, EulerBenchError>
where
    T: Scalar,
    F: FnMut(&DVector<T>, T, &mut DVector<T>),
{
    check_inputs(x0, t)?;
    let mut trajectory = Trajectory::new(x0, t.len());
    let mut x = x0.clone();
    let mut dxdt = DVector::zeros(x0.len());
    for (n, w) in t.windows(2).enumerate() {
        let (t_last, t_cur) = (w[0], w[1]);
        derivative(&x, t_last, &mut dxdt);
        euler_step_inplace(&mut x, &dxdt, t_cur - t_last);
        trajectory.set_row(n + 1, &x);
    }
    Ok(trajectory)
}

#[cfg(test)]
mod tests {
    use nalgebra::DVector;

    use super::*;
    use crate::ode_equations::test_models::{
        exponential_decay::{exponential_decay_problem, ExponentialDecay},
        harmonic_oscillator::{harmonic_oscillator, harmonic_oscillator_problem, HarmonicOscillator},
    };
    use crate::{arange, Closure};

    fn x0() -> DVector<f64> {
        DVector::from_vec(vec![0.0, 1.0])
    }

    #[test]
    fn test_trajectory_shape_and_initial_row() {
        let t = arange(0.0, 1.0, 0.1).unwrap();
        let x0 = x0();
        for trajectory in [
            accum(harmonic_oscillator, &x0, &t).unwrap(),
            accum_polymorphic(&HarmonicOscillator, &x0, &t).unwrap(),
            accum_monomorphic(&HarmonicOscillator, &x0, &t).unwrap(),
        ] {
            assert_eq!(trajectory.len(), t.len());
            assert_eq!(trajectory.nstates(), x0.len());
            assert!(trajectory.rows().all(|row| row.len() == 2));
            assert_eq!(trajectory.initial_state(), x0);
        }
    }

    #[test]
    fn test_single_time_point_returns_initial_state() {
        let x0 = x0();
        let trajectory = accum(harmonic_oscillator, &x0, &[0.5]).unwrap();
        assert_eq!(trajectory.len(), 1);
        assert_eq!(trajectory.row(0), x0);
        let trajectory = accum_polymorphic(&HarmonicOscillator, &x0, &[0.5]).unwrap();
        assert_eq!(trajectory.len(), 1);
        assert_eq!(trajectory.row(0), x0);
    }

    #[test]
    fn test_first_step_follows_euler_law() {
        let trajectory = accum(harmonic_oscillator, &x0(), &[0.0, 0.01]).unwrap();
        assert_eq!(trajectory.row(1).as_slice(), &[0.01, 1.0]);
    }

    #[test]
    fn test_dispatch_forms_are_bit_identical() {
        let (x0, t, _soln) = harmonic_oscillator_problem::<f64>(0.01).unwrap();
        let callback = accum(harmonic_oscillator, &x0, &t).unwrap();
        let polymorphic = accum_polymorphic(&HarmonicOscillator, &x0, &t).unwrap();
        let monomorphic = accum_monomorphic(&HarmonicOscillator, &x0, &t).unwrap();
        let f: DerivativeFn<f64> = harmonic_oscillator;
        let wrapped = accum_polymorphic(&Closure::new(f, 2), &x0, &t).unwrap();
        assert!(callback.bitwise_eq(&polymorphic));
        assert!(callback.bitwise_eq(&monomorphic));
        assert!(callback.bitwise_eq(&wrapped));
    }

    #[test]
    fn test_initial_state_is_copied_not_aliased() {
        let mut x0 = x0();
        let t = [0.0, 0.5, 1.0];
        let trajectory = accum(harmonic_oscillator, &x0, &t).unwrap();
        x0[0] = 42.0;
        assert_eq!(trajectory.row(0).as_slice(), &[0.0, 1.0]);
    }

    #[test]
    fn test_harmonic_oscillator_error_is_first_order() {
        let (x0, t, soln) = harmonic_oscillator_problem::<f64>(0.01).unwrap();
        let coarse = soln
            .max_abs_error(&accum(harmonic_oscillator, &x0, &t).unwrap())
            .unwrap();
        // global error of explicit Euler is bounded by C * dt over t in [0, 10)
        assert!(coarse < 10.0 * 0.01, "error {coarse} too large");

        let (x0, t, soln) = harmonic_oscillator_problem::<f64>(0.005).unwrap();
        let fine = soln
            .max_abs_error(&accum(harmonic_oscillator, &x0, &t).unwrap())
            .unwrap();
        let ratio = coarse / fine;
        assert!(ratio > 1.7 && ratio < 2.3, "convergence ratio {ratio}");
    }

    #[test]
    fn test_exponential_decay_converges() {
        let (decay, x0, t, soln) = exponential_decay_problem::<f64>(0.01).unwrap();
        let trajectory = accum_monomorphic(&decay, &x0, &t).unwrap();
        let error = soln.max_abs_error(&trajectory).unwrap();
        assert!(error < 0.01, "error {error} too large");
        assert!(trajectory
            .final_state()
            .iter()
            .all(|&y| y > 0.0 && y < x0[0]));
    }

    #[test]
    fn test_f32_integration() {
        let t = arange(0.0f32, 1.0, 0.25).unwrap();
        let x0 = DVector::from_vec(vec![0.0f32, 1.0]);
        let trajectory = accum(harmonic_oscillator, &x0, &t).unwrap();
        assert_eq!(trajectory.len(), 4);
        assert_eq!(trajectory.row(1).as_slice(), &[0.25f32, 1.0]);
    }

    #[test]
    fn test_rejects_non_ascending_grid() {
        let x0 = x0();
        for t in [vec![0.0, 0.1, 0.1], vec![0.0, 0.2, 0.1], vec![1.0, 0.0]] {
            for result in [
                accum(harmonic_oscillator, &x0, &t),
                accum_polymorphic(&HarmonicOscillator, &x0, &t),
                accum_monomorphic(&HarmonicOscillator, &x0, &t),
            ] {
                assert!(matches!(
                    result,
                    Err(EulerBenchError::InvalidInputError(
                        InvalidInputError::NonAscendingTimeGrid { .. }
                    ))
                ));
            }
        }
    }

    #[test]
    fn test_rejects_empty_inputs() {
        let empty = DVector::<f64>::zeros(0);
        assert!(matches!(
            accum(harmonic_oscillator, &empty, &[0.0, 1.0]),
            Err(EulerBenchError::InvalidInputError(InvalidInputError::EmptyState))
        ));
        assert!(matches!(
            accum_polymorphic(&HarmonicOscillator, &empty, &[0.0, 1.0]),
            Err(EulerBenchError::InvalidInputError(InvalidInputError::EmptyState))
        ));
        assert!(matches!(
            accum(harmonic_oscillator, &x0(), &[]),
            Err(EulerBenchError::InvalidInputError(InvalidInputError::EmptyTimeGrid))
        ));
    }

    #[test]
    fn test_rejects_state_length_mismatch() {
        let decay = ExponentialDecay::new(0.1, 3);
        assert!(matches!(
            accum_polymorphic(&decay, &x0(), &[0.0, 1.0]),
            Err(EulerBenchError::InvalidInputError(
                InvalidInputError::StateLengthMismatch {
                    expected: 3,
                    found: 2
                }
            ))
        ));
        assert!(accum_monomorphic(&decay, &x0(), &[0.0, 1.0]).is_err());
    }

    #[test]
    fn test_strategy_names() {
        assert_eq!(DispatchStrategy::Callback.to_string(), "callback");
        assert_eq!(format!("{:<12}|", DispatchStrategy::Polymorphic), "polymorphic |");
        assert_eq!(DispatchStrategy::Monomorphic.name(), "monomorphic");
    }
}
