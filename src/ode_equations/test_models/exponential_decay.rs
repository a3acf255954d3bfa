use nalgebra::DVector;

use crate::{
    arange, error::EulerBenchError, ode_solver::solution::ReferenceSolution, scalar::scalar,
    OdeSystem, Scalar,
};

/// Exponential decay `dy/dt = -a y`, applied independently to each of `nstates` components.
#[derive(Debug, Clone, Copy)]
pub struct ExponentialDecay<T: Scalar> {
    rate: T,
    nstates: usize,
}

impl<T: Scalar> ExponentialDecay<T> {
    pub fn new(rate: T, nstates: usize) -> Self {
        Self { rate, nstates }
    }

    pub fn rate(&self) -> T {
        self.rate
    }
}

impl<T: Scalar> OdeSystem<T> for ExponentialDecay<T> {
    fn nstates(&self) -> usize {
        self.nstates
    }
    fn derivative_inplace(&self, x: &DVector<T>, _t: T, dxdt: &mut DVector<T>) {
        dxdt.copy_from(x);
        *dxdt *= -self.rate;
    }
}

/// Decay rate 0.1 with two components starting at 1, on the grid `arange(0, 10, dt)`,
/// with the exact solution `y0 exp(-a t)`.
#[allow(clippy::type_complexity)]
pub fn exponential_decay_problem<T: Scalar>(
    dt: f64,
) -> Result<
    (
        ExponentialDecay<T>,
        DVector<T>,
        Vec<T>,
        ReferenceSolution<T>,
    ),
    EulerBenchError,
> {
    let decay: ExponentialDecay<T> = ExponentialDecay::new(scalar(0.1), 2);
    let x0 = DVector::from_element(2, T::one());
    let t = arange(T::zero(), scalar(10.0), scalar(dt))?;
    let soln = ReferenceSolution::from_fn(&t, |t| x0.clone() * (-decay.rate() * t).exp());
    Ok((decay, x0, t, soln))
}
