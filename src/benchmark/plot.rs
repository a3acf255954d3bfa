#[cfg(feature = "plotly")]
use std::{fs, path::PathBuf};

#[cfg(feature = "plotly")]
use plotly::{common::Mode, layout::Axis, Layout, Plot, Scatter};

use crate::{error::EulerBenchError, Scalar, Trajectory};

/// Receives a trajectory together with the time grid it was computed on.
pub trait TrajectoryPlotter<T: Scalar> {
    fn plot(&mut self, label: &str, t: &[T], trajectory: &Trajectory<T>)
        -> Result<(), EulerBenchError>;
}

impl<T: Scalar, P: TrajectoryPlotter<T> + ?Sized> TrajectoryPlotter<T> for &mut P {
    fn plot(
        &mut self,
        label: &str,
        t: &[T],
        trajectory: &Trajectory<T>,
    ) -> Result<(), EulerBenchError> {
        P::plot(*self, label, t, trajectory)
    }
}

/// Writes one line per state component against time to a standalone HTML file.
#[cfg(feature = "plotly")]
#[derive(Debug, Clone)]
pub struct PlotlyPlotter {
    path: PathBuf,
}

#[cfg(feature = "plotly")]
impl PlotlyPlotter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    pub fn build_plot<T: Scalar>(label: &str, t: &[T], trajectory: &Trajectory<T>) -> Plot {
        let time: Vec<f64> = t.iter().map(|&ti| ti.as_f64()).collect();
        let mut plot = Plot::new();
        for i in 0..trajectory.nstates() {
            let x: Vec<f64> = trajectory
                .component(i)
                .into_iter()
                .map(|xi| xi.as_f64())
                .collect();
            let line = Scatter::new(time.clone(), x)
                .mode(Mode::Lines)
                .name(&format!("x{i}"));
            plot.add_trace(line);
        }
        let layout = Layout::new()
            .title(label)
            .x_axis(Axis::new().title("t"))
            .y_axis(Axis::new().title("x"));
        plot.set_layout(layout);
        plot
    }
}

#[cfg(feature = "plotly")]
impl<T: Scalar> TrajectoryPlotter<T> for PlotlyPlotter {
    fn plot(
        &mut self,
        label: &str,
        t: &[T],
        trajectory: &Trajectory<T>,
    ) -> Result<(), EulerBenchError> {
        let plot = Self::build_plot(label, t, trajectory);
        let plot_html = plot.to_inline_html(Some("trajectory"));
        fs::write(&self.path, plot_html)?;
        log::info!("wrote trajectory of '{label}' to {}", self.path.display());
        Ok(())
    }
}
