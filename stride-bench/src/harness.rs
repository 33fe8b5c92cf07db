//! Trial harness: runs a (setup, measured) pair through warmup and timed
//! rounds, timing only the measured closure.

use std::hint::black_box;
use std::time::Duration;

use serde::Serialize;
use tracing::debug;

use stride_primitives::BenchTimer;

use crate::stats::TrialStats;

/// Number of warmup and timed rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrialConfig {
    pub trials: u32,
    pub warmup: u32,
}

impl TrialConfig {
    /// Total setup + measured executions.
    pub fn rounds(&self) -> u32 {
        self.warmup + self.trials
    }
}

/// Raw outcome of a harness run.
#[derive(Debug, Clone)]
pub struct TrialReport {
    /// Elapsed time of each timed `measured()` call, in trial order.
    pub samples: Vec<Duration>,
    pub warmup: u32,
    /// Value returned by the last `measured()` call.
    pub checksum: u64,
}

/// Run `setup` then `measured` for `config.warmup` untimed rounds followed by
/// `config.trials` timed rounds.
///
/// `measured` returns a value derived from the kernel's output; it passes
/// through `black_box` before the timer stops, so the kernel cannot be
/// discarded as dead code or moved out of the timed region. Panics in either
/// closure propagate.
pub fn run<S, M>(
    config: &TrialConfig,
    mut setup: S,
    mut measured: M,
    progress_cb: Option<&dyn Fn(&str)>,
) -> TrialReport
where
    S: FnMut(),
    M: FnMut() -> u64,
{
    for round in 0..config.warmup {
        if let Some(cb) = progress_cb {
            cb(&format!("warmup {}/{}", round + 1, config.warmup));
        }
        setup();
        black_box(measured());
    }

    let mut samples = Vec::with_capacity(config.trials as usize);
    let mut checksum = 0;
    for trial in 0..config.trials {
        if let Some(cb) = progress_cb {
            cb(&format!("trial {}/{}", trial + 1, config.trials));
        }
        setup();

        let timer = BenchTimer::start();
        let observed = black_box(measured());
        let elapsed = timer.elapsed();

        debug!(trial, elapsed_ms = elapsed.as_secs_f64() * 1000.0, "trial complete");
        samples.push(elapsed);
        checksum = observed;
    }

    TrialReport {
        samples,
        warmup: config.warmup,
        checksum,
    }
}

/// Aggregated result for one benchmark invocation.
#[derive(Debug, Clone, Serialize)]
pub struct BenchResult {
    pub test_case: String,
    pub size: usize,
    pub row_length: usize,
    pub row_count: usize,
    pub warmup: u32,
    pub stats: TrialStats,
    /// Estimated memory traffic per trial divided by the mean trial time.
    pub gb_per_sec: f64,
    pub melem_per_sec: f64,
    pub checksum: u64,
}

impl BenchResult {
    pub fn new(
        test_case: &str,
        shape: stride_primitives::Shape,
        bytes_per_trial: u64,
        report: &TrialReport,
    ) -> Self {
        let stats = TrialStats::from_samples(&report.samples);
        let (gb_per_sec, melem_per_sec) = if stats.mean_ms > 0.0 {
            let secs = stats.mean_ms / 1000.0;
            (
                bytes_per_trial as f64 / secs / 1e9,
                shape.size() as f64 / secs / 1e6,
            )
        } else {
            (0.0, 0.0)
        };

        Self {
            test_case: test_case.to_string(),
            size: shape.size(),
            row_length: shape.row_length(),
            row_count: shape.row_count(),
            warmup: report.warmup,
            stats,
            gb_per_sec,
            melem_per_sec,
            checksum: report.checksum,
        }
    }
}

/// Format a size number for display (e.g., 1000000 -> "1M").
pub fn format_size(size: usize) -> String {
    if size >= 1_000_000 && size % 1_000_000 == 0 {
        format!("{}M", size / 1_000_000)
    } else if size >= 1_000 && size % 1_000 == 0 {
        format!("{}K", size / 1_000)
    } else {
        format!("{}", size)
    }
}
