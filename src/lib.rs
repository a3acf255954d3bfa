pub mod benchmark;
pub mod error;
pub mod ode_equations;
pub mod ode_solver;
pub mod op;
pub mod scalar;

pub use benchmark::{
    config::BenchmarkConfig,
    configuration::{default_configurations, Configuration},
    harness::BenchmarkHarness,
    plot::TrajectoryPlotter,
    report::{BenchmarkRecord, BenchmarkReport},
};
#[cfg(feature = "plotly")]
pub use benchmark::plot::PlotlyPlotter;
pub use error::{ConfigurationIndexError, EulerBenchError, InvalidInputError};
pub use ode_equations::test_models::harmonic_oscillator::{harmonic_oscillator, HarmonicOscillator};
pub use ode_solver::{
    integrator::{accum, accum_monomorphic, accum_polymorphic, DispatchStrategy},
    solution::{ReferenceSolution, SolutionPoint},
    stepper::{euler_step, euler_step_inplace},
    time_grid::{arange, check_inputs, check_time_grid},
    trajectory::Trajectory,
};
pub use op::{closure::Closure, DerivativeFn, OdeSystem};
pub use scalar::{scalar, Scalar};

#[cfg(test)]
mod tests {
    use crate::{accum, accum_polymorphic, arange, harmonic_oscillator, HarmonicOscillator};
    use nalgebra::DVector;

    #[test]
    fn test_callback_and_polymorphic_agree() {
        let x0 = DVector::from_vec(vec![0.0, 1.0]);
        let t = arange(0.0, 10.0, 0.01).unwrap();

        let y = accum(harmonic_oscillator, &x0, &t).unwrap();
        let y2 = accum_polymorphic(&HarmonicOscillator, &x0, &t).unwrap();

        assert_eq!(y.len(), 1000);
        assert!(y.bitwise_eq(&y2));
    }
}
