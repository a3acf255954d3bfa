use nalgebra::DVector;

use crate::{OdeSystem, Scalar};

/// Binds a derivative callback as an [OdeSystem], so a free function can be driven through
/// the polymorphic or monomorphic integrator entry points.
pub struct Closure<F> {
    func: F,
    nstates: usize,
}

impl<F> Closure<F> {
    pub fn new(func: F, nstates: usize) -> Self {
        Self { func, nstates }
    }
}

impl<T, F> OdeSystem<T> for Closure<F>
where
    T: Scalar,
    F: Fn(&DVector<T>, T, &mut DVector<T>),
{
    fn nstates(&self) -> usize {
        self.nstates
    }
    fn derivative_inplace(&self, x: &DVector<T>, t: T, dxdt: &mut DVector<T>) {
        (self.func)(x, t, dxdt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ode_equations::test_models::harmonic_oscillator::harmonic_oscillator;
    use crate::DerivativeFn;

    #[test]
    fn test_closure_calls_wrapped_function() {
        let f: DerivativeFn<f64> = harmonic_oscillator;
        let closure = Closure::new(f, 2);
        let x = DVector::from_vec(vec![0.0, 1.0]);
        let mut direct = DVector::zeros(2);
        f(&x, 0.0, &mut direct);
        assert_eq!(OdeSystem::<f64>::nstates(&closure), 2);
        assert_eq!(closure.derivative(&x, 0.0), direct);
    }

    #[test]
    fn test_closure_accepts_capturing_closure() {
        let rate = 3.0;
        let closure = Closure::new(
            move |x: &DVector<f64>, _t: f64, dxdt: &mut DVector<f64>| {
                dxdt.copy_from(x);
                *dxdt *= -rate;
            },
            1,
        );
        let x = DVector::from_element(1, 2.0);
        assert_eq!(closure.derivative(&x, 0.0)[0], -6.0);
    }
}
