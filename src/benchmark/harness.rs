use std::{
    hint::black_box,
    time::{Duration, Instant},
};

use log::{debug, info};
use nalgebra::DVector;

use crate::{
    default_configurations,
    error::{ConfigurationIndexError, EulerBenchError, InvalidInputError},
    invalid_input_error,
    BenchmarkConfig, BenchmarkRecord, BenchmarkReport, Configuration, Scalar, Trajectory,
    TrajectoryPlotter,
};

/// Runs a list of [Configuration]s against one validated [BenchmarkConfig].
///
/// All setup happens in [BenchmarkHarness::new], so the timed region of
/// [BenchmarkHarness::run_all] covers the integration call only.
#[derive(Debug)]
pub struct BenchmarkHarness<T: Scalar> {
    config: BenchmarkConfig<T>,
    x0: DVector<T>,
    configurations: Vec<Configuration<T>>,
}

impl<T: Scalar> BenchmarkHarness<T> {
    /// # Errors
    /// [InvalidInputError] if `config` is invalid or its initial state does not have the
    /// length some configuration expects.
    pub fn new(
        config: BenchmarkConfig<T>,
        configurations: Vec<Configuration<T>>,
    ) -> Result<Self, EulerBenchError> {
        config.validate()?;
        let x0 = config.initial_state();
        if let Some(configuration) = configurations.iter().find(|c| c.nstates() != x0.len()) {
            return Err(invalid_input_error!(StateLengthMismatch {
                expected: configuration.nstates(),
                found: x0.len(),
            }));
        }
        Ok(Self {
            config,
            x0,
            configurations,
        })
    }

    /// A harness over [default_configurations].
    pub fn with_default_configurations(config: BenchmarkConfig<T>) -> Result<Self, EulerBenchError> {
        Self::new(config, default_configurations())
    }

    pub fn config(&self) -> &BenchmarkConfig<T> {
        &self.config
    }

    pub fn configurations(&self) -> &[Configuration<T>] {
        &self.configurations
    }

    pub fn len(&self) -> usize {
        self.configurations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.configurations.is_empty()
    }

    fn configuration(&self, index: usize) -> Result<&Configuration<T>, ConfigurationIndexError> {
        self.configurations.get(index).ok_or(ConfigurationIndexError {
            index,
            len: self.configurations.len(),
        })
    }

    /// Time configuration `index` over `repeat` calls.
    pub fn time(&self, index: usize) -> Result<BenchmarkRecord, EulerBenchError> {
        let configuration = self.configuration(index)?;
        let repeat = self.config.repeat;
        debug!(
            "timing configuration {index} '{}' ({}) over {repeat} calls",
            configuration.label(),
            configuration.strategy()
        );
        let mut total = Duration::ZERO;
        for _ in 0..repeat {
            let start = Instant::now();
            let trajectory = configuration.run(&self.x0, &self.config.t)?;
            total += start.elapsed();
            black_box(trajectory);
        }
        Ok(BenchmarkRecord::new(
            configuration.label(),
            configuration.strategy(),
            repeat,
            total,
        ))
    }

    /// Time every configuration in order.
    pub fn run_all(&self) -> Result<BenchmarkReport, EulerBenchError> {
        let mut report = BenchmarkReport::default();
        for index in 0..self.configurations.len() {
            report.push(self.time(index)?);
        }
        info!(
            "benchmarked {} configurations, {} calls each on {} time points",
            report.len(),
            self.config.repeat,
            self.config.t.len()
        );
        Ok(report)
    }

    /// Run configuration `index` once and return its trajectory.
    ///
    /// # Errors
    /// [ConfigurationIndexError] if `index` is out of range; nothing is run in that case.
    pub fn run_one(&self, index: usize) -> Result<Trajectory<T>, EulerBenchError> {
        let configuration = self.configuration(index)?;
        debug!("running configuration {index} '{}'", configuration.label());
        configuration.run(&self.x0, &self.config.t)
    }

    /// Run configuration `index` once and forward the trajectory to `plotter`.
    pub fn plot_one(
        &self,
        index: usize,
        mut plotter: impl TrajectoryPlotter<T>,
    ) -> Result<Trajectory<T>, EulerBenchError> {
        let trajectory = self.run_one(index)?;
        let label = self.configurations[index].label();
        plotter.plot(label, &self.config.t, &trajectory)?;
        Ok(trajectory)
    }
}
