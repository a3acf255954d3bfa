//! Timing harness for the integrator entry points.
//!
//! A [Configuration] pairs an entry point with a derivative function. The
//! [BenchmarkHarness] times every configuration over a shared [BenchmarkConfig] and
//! collects the results in a [BenchmarkReport], or runs a single configuration and hands
//! its trajectory to a [TrajectoryPlotter].

pub mod config;
pub mod configuration;
pub mod harness;
pub mod plot;
pub mod report;

pub use config::BenchmarkConfig;
pub use configuration::Configuration;
pub use harness::BenchmarkHarness;
pub use plot::TrajectoryPlotter;
pub use report::BenchmarkReport;
