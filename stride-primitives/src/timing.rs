//! Stopwatch for the timed region of a trial.

use std::time::{Duration, Instant};

/// Started on construction; read any number of times.
pub struct BenchTimer {
    start: Instant,
}

impl BenchTimer {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// [`elapsed`](Self::elapsed) as fractional milliseconds, for log fields.
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed().as_secs_f64() * 1000.0
    }
}
