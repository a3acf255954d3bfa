use std::{fmt, time::Duration};

use serde::Serialize;

use crate::DispatchStrategy;

/// Timing of one configuration over `repeat` calls.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkRecord {
    pub label: String,
    pub strategy: DispatchStrategy,
    pub repeat: usize,
    pub total_seconds: f64,
    pub mean_latency_us: f64,
}

impl BenchmarkRecord {
    pub fn new(
        label: impl Into<String>,
        strategy: DispatchStrategy,
        repeat: usize,
        total: Duration,
    ) -> Self {
        let total_seconds = total.as_secs_f64();
        let mean_latency_us = if repeat == 0 {
            0.0
        } else {
            total_seconds * 1e6 / repeat as f64
        };
        Self {
            label: label.into(),
            strategy,
            repeat,
            total_seconds,
            mean_latency_us,
        }
    }
}

/// Records in configuration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BenchmarkReport {
    records: Vec<BenchmarkRecord>,
}

impl BenchmarkReport {
    pub fn from_records(records: Vec<BenchmarkRecord>) -> Self {
        Self { records }
    }

    pub fn push(&mut self, record: BenchmarkRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[BenchmarkRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The record with the lowest mean latency.
    pub fn fastest(&self) -> Option<&BenchmarkRecord> {
        self.records
            .iter()
            .min_by(|a, b| a.mean_latency_us.total_cmp(&b.mean_latency_us))
    }

    /// Mean latency of `record` as a multiple of the fastest record's.
    pub fn relative_latency(&self, record: &BenchmarkRecord) -> f64 {
        match self.fastest() {
            Some(fastest) if fastest.mean_latency_us > 0.0 => {
                record.mean_latency_us / fastest.mean_latency_us
            }
            _ => 1.0,
        }
    }
}

impl fmt::Display for BenchmarkReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const LABEL_HEADER: &str = "configuration";
        let width = self
            .records
            .iter()
            .map(|r| r.label.len())
            .max()
            .unwrap_or(0)
            .max(LABEL_HEADER.len());
        write!(
            f,
            "{:<width$}  {:<11}  {:>12}  {:>8}",
            LABEL_HEADER, "strategy", "mean [us]", "relative"
        )?;
        for record in &self.records {
            write!(
                f,
                "\n{:<width$}  {:<11}  {:>12.3}  {:>8.2}",
                record.label,
                record.strategy,
                record.mean_latency_us,
                self.relative_latency(record)
            )?;
        }
        Ok(())
    }
}
