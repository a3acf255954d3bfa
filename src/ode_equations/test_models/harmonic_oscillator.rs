use nalgebra::DVector;

use crate::{
    arange, error::EulerBenchError, ode_solver::solution::ReferenceSolution, scalar::scalar,
    OdeSystem, Scalar,
};

// harmonic oscillator
// dx0/dt = x1
// dx1/dt = -x0
pub fn harmonic_oscillator<T: Scalar>(x: &DVector<T>, _t: T, dxdt: &mut DVector<T>) {
    dxdt[0] = x[1];
    dxdt[1] = -x[0];
}

/// The harmonic oscillator as an [OdeSystem], numerically identical to [harmonic_oscillator].
#[derive(Debug, Clone, Copy, Default)]
pub struct HarmonicOscillator;

impl<T: Scalar> OdeSystem<T> for HarmonicOscillator {
    fn nstates(&self) -> usize {
        2
    }
    #[inline]
    fn derivative_inplace(&self, x: &DVector<T>, _t: T, dxdt: &mut DVector<T>) {
        dxdt[0] = x[1];
        dxdt[1] = -x[0];
    }
}

/// Initial state `[0, 1]` and the grid `arange(0, 10, dt)`, with the exact solution
/// `(sin t, cos t)` sampled on that grid.
#[allow(clippy::type_complexity)]
pub fn harmonic_oscillator_problem<T: Scalar>(
    dt: f64,
) -> Result<(DVector<T>, Vec<T>, ReferenceSolution<T>), EulerBenchError> {
    let x0 = DVector::from_vec(vec![T::zero(), T::one()]);
    let t = arange(T::zero(), scalar(10.0), scalar(dt))?;
    let soln = ReferenceSolution::from_fn(&t, |t| DVector::from_vec(vec![t.sin(), t.cos()]));
    Ok((x0, t, soln))
}
