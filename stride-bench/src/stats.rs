use std::time::Duration;

use serde::Serialize;

/// Summary of the timed trials, in milliseconds.
#[derive(Debug, Clone, Serialize)]
pub struct TrialStats {
    pub trials: usize,
    pub mean_ms: f64,
    pub median_ms: f64,
    /// Fastest trial.
    pub best_ms: f64,
    /// Slowest trial.
    pub worst_ms: f64,
    /// Sample standard deviation (n - 1).
    pub stddev_ms: f64,
    pub cv_percent: f64,
}

impl TrialStats {
    /// Compute statistics over all samples; nothing is discarded.
    pub fn from_samples(samples: &[Duration]) -> Self {
        let mut ms: Vec<f64> = samples.iter().map(|d| d.as_secs_f64() * 1000.0).collect();
        if ms.is_empty() {
            return Self {
                trials: 0,
                mean_ms: 0.0,
                median_ms: 0.0,
                best_ms: 0.0,
                worst_ms: 0.0,
                stddev_ms: 0.0,
                cv_percent: 0.0,
            };
        }
        ms.sort_by(|a, b| a.total_cmp(b));

        let n = ms.len();
        let mean = ms.iter().sum::<f64>() / n as f64;
        let median = if n % 2 == 0 {
            (ms[n / 2 - 1] + ms[n / 2]) / 2.0
        } else {
            ms[n / 2]
        };
        let stddev = if n > 1 {
            (ms.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1) as f64).sqrt()
        } else {
            0.0
        };
        let cv_percent = if mean > 0.0 { stddev / mean * 100.0 } else { 0.0 };

        Self {
            trials: n,
            mean_ms: mean,
            median_ms: median,
            best_ms: ms[0],
            worst_ms: ms[n - 1],
            stddev_ms: stddev,
            cv_percent,
        }
    }
}
