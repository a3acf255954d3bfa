use nalgebra::DVector;

use crate::Scalar;

pub mod closure;

/// Callback form of a derivative function: `f(x, t, dxdt)` writes the derivative of state `x`
/// at time `t` into `dxdt`.
///
/// A plain function pointer, so it carries no hidden state and is invoked indirectly.
pub type DerivativeFn<T> = fn(&DVector<T>, T, &mut DVector<T>);

/// Polymorphic form of a derivative function.
///
/// An ODE system `dx/dt = f(x, t)` with a fixed number of states. Implementors only need to
/// provide [OdeSystem::nstates] and [OdeSystem::derivative_inplace]; the integrator calls the
/// latter once per step, either through a trait object or a generic parameter.
pub trait OdeSystem<T: Scalar> {
    /// Return the number of states (i.e. the length of `x` and `dxdt`).
    fn nstates(&self) -> usize;

    /// Compute the derivative at a given state and time, writing it into `dxdt`.
    fn derivative_inplace(&self, x: &DVector<T>, t: T, dxdt: &mut DVector<T>);

    /// Compute the derivative at a given state and time into a newly allocated vector.
    fn derivative(&self, x: &DVector<T>, t: T) -> DVector<T> {
        let mut dxdt = DVector::zeros(self.nstates());
        self.derivative_inplace(x, t, &mut dxdt);
        dxdt
    }
}

impl<T: Scalar, S: OdeSystem<T> + ?Sized> OdeSystem<T> for &S {
    fn nstates(&self) -> usize {
        S::nstates(*self)
    }
    fn derivative_inplace(&self, x: &DVector<T>, t: T, dxdt: &mut DVector<T>) {
        S::derivative_inplace(*self, x, t, dxdt)
    }
}

impl<T: Scalar, S: OdeSystem<T> + ?Sized> OdeSystem<T> for Box<S> {
    fn nstates(&self) -> usize {
        S::nstates(self.as_ref())
    }
    fn derivative_inplace(&self, x: &DVector<T>, t: T, dxdt: &mut DVector<T>) {
        S::derivative_inplace(self.as_ref(), x, t, dxdt)
    }
}
