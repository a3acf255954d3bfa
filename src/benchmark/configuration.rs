use std::fmt;

use nalgebra::DVector;

use crate::{
    accum, accum_monomorphic, accum_polymorphic, error::EulerBenchError, harmonic_oscillator,
    Closure, DerivativeFn, DispatchStrategy, HarmonicOscillator, OdeSystem, Scalar, Trajectory,
};

type Statement<T> = Box<dyn Fn(&DVector<T>, &[T]) -> Result<Trajectory<T>, EulerBenchError>>;

/// One cell of the benchmark matrix: an integrator entry point bound to a derivative function.
pub struct Configuration<T: Scalar> {
    label: String,
    strategy: DispatchStrategy,
    nstates: usize,
    statement: Statement<T>,
}

impl<T: Scalar> Configuration<T> {
    pub fn new(
        label: impl Into<String>,
        strategy: DispatchStrategy,
        nstates: usize,
        statement: impl Fn(&DVector<T>, &[T]) -> Result<Trajectory<T>, EulerBenchError> + 'static,
    ) -> Self {
        Self {
            label: label.into(),
            strategy,
            nstates,
            statement: Box::new(statement),
        }
    }

    /// Run [accum] with the callback `f`, which expects states of length `nstates`.
    pub fn callback(label: impl Into<String>, f: DerivativeFn<T>, nstates: usize) -> Self {
        Self::new(
            label,
            DispatchStrategy::Callback,
            nstates,
            move |x0: &DVector<T>, t: &[T]| accum(f, x0, t),
        )
    }

    /// Run [accum_polymorphic] with `system` behind a trait object.
    pub fn polymorphic(label: impl Into<String>, system: Box<dyn OdeSystem<T>>) -> Self {
        Self::new(
            label,
            DispatchStrategy::Polymorphic,
            system.nstates(),
            move |x0: &DVector<T>, t: &[T]| accum_polymorphic(system.as_ref(), x0, t),
        )
    }

    /// Run [accum_monomorphic] specialised for the concrete type `S`.
    pub fn monomorphic<S: OdeSystem<T> + 'static>(label: impl Into<String>, system: S) -> Self {
        Self::new(
            label,
            DispatchStrategy::Monomorphic,
            system.nstates(),
            move |x0: &DVector<T>, t: &[T]| accum_monomorphic(&system, x0, t),
        )
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn strategy(&self) -> DispatchStrategy {
        self.strategy
    }

    /// Length of the state vectors the derivative function accepts.
    pub fn nstates(&self) -> usize {
        self.nstates
    }

    pub fn run(&self, x0: &DVector<T>, t: &[T]) -> Result<Trajectory<T>, EulerBenchError> {
        (self.statement)(x0, t)
    }
}

impl<T: Scalar> fmt::Debug for Configuration<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Configuration")
            .field("label", &self.label)
            .field("strategy", &self.strategy)
            .field("nstates", &self.nstates)
            .finish_non_exhaustive()
    }
}

/// The harmonic oscillator crossed with every dispatch strategy: the free function and the
/// method as callbacks, the struct and the wrapped free function as trait objects, and the
/// struct as a concrete type.
pub fn default_configurations<T: Scalar>() -> Vec<Configuration<T>> {
    let f: DerivativeFn<T> = harmonic_oscillator;
    let method: DerivativeFn<T> = |x, t, dxdt| HarmonicOscillator.derivative_inplace(x, t, dxdt);
    vec![
        Configuration::callback("accum(harmonic_oscillator)", f, 2),
        Configuration::callback("accum(HarmonicOscillator::derivative_inplace)", method, 2),
        Configuration::polymorphic(
            "accum_polymorphic(HarmonicOscillator)",
            Box::new(HarmonicOscillator),
        ),
        Configuration::polymorphic(
            "accum_polymorphic(Closure(harmonic_oscillator))",
            Box::new(Closure::new(f, 2)),
        ),
        Configuration::monomorphic("accum_monomorphic(HarmonicOscillator)", HarmonicOscillator),
    ]
}
