//! Explicit-Euler dispatch benchmark
//!
//! Integrates the harmonic oscillator `dx0/dt = x1, dx1/dt = -x0` from `[0, 1]` over
//! `arange(0, 10, 0.01)` with every default configuration and reports the mean latency of
//! each, or runs one configuration and plots its trajectory.
//!
//! ## Usage
//!
//!   eulerbench                          # time every configuration
//!   eulerbench --repeat 100             # ... with 100 calls each
//!   eulerbench 2                        # plot configuration 2 to trajectory.html
//!   eulerbench 2 --output osc.html

use anyhow::{bail, Context, Result};
use eulerbench::{BenchmarkConfig, BenchmarkHarness, PlotlyPlotter};
use tracing_subscriber::EnvFilter;

const DEFAULT_OUTPUT: &str = "trajectory.html";

#[derive(Debug, PartialEq)]
struct Args {
    index: Option<usize>,
    repeat: Option<usize>,
    output: String,
}

fn parse_args(args: &[String]) -> Result<Args> {
    let mut parsed = Args {
        index: None,
        repeat: None,
        output: DEFAULT_OUTPUT.to_string(),
    };
    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--repeat" => {
                let value = iter.next().context("--repeat needs a value")?;
                let repeat = value
                    .parse::<usize>()
                    .with_context(|| format!("invalid repeat count '{value}'"))?;
                parsed.repeat = Some(repeat);
            }
            "--output" => {
                parsed.output = iter.next().context("--output needs a path")?.clone();
            }
            flag if flag.starts_with("--") => bail!("unknown option '{flag}'"),
            value => {
                if parsed.index.is_some() {
                    bail!("unexpected argument '{value}'");
                }
                let index = value
                    .parse::<usize>()
                    .with_context(|| format!("configuration index must be a non-negative integer, got '{value}'"))?;
                parsed.index = Some(index);
            }
        }
    }
    Ok(parsed)
}

// `RUST_LOG` directives when set and valid, otherwise warnings only
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .init();

    let args: Vec<String> = std::env::args().collect();
    let args = parse_args(&args)?;

    let mut config = BenchmarkConfig::<f64>::default();
    if let Some(repeat) = args.repeat {
        config = config.with_repeat(repeat);
    }
    let harness = BenchmarkHarness::with_default_configurations(config)?;

    match args.index {
        None => {
            let report = harness.run_all()?;
            println!("{report}");
        }
        Some(index) => {
            let plotter = PlotlyPlotter::new(&args.output);
            harness.plot_one(index, plotter)?;
            println!(
                "stmt: {} plotted to {}",
                harness.configurations()[index].label(),
                args.output
            );
        }
    }
    Ok(())
}
