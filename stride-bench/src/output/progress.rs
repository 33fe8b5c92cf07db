//! Progress bar output using indicatif.
//!
//! One tick per warmup or timed round, drawn on stderr. indicatif hides the
//! bar when stderr is not a terminal.

use indicatif::{ProgressBar, ProgressStyle};

/// A progress reporter counting harness rounds.
pub struct BenchProgress {
    bar: ProgressBar,
}

impl BenchProgress {
    pub fn new(test_case: &str, rounds: u32) -> Self {
        let bar = ProgressBar::new(rounds as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.cyan} {prefix} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=> "),
        );
        bar.set_prefix(test_case.to_string());
        Self { bar }
    }

    /// Finish and clear the bar.
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }

    /// Callback for `harness::run`; advances the bar once per round.
    pub fn callback(&self) -> impl Fn(&str) + '_ {
        move |msg: &str| {
            self.bar.set_message(msg.to_string());
            self.bar.inc(1);
        }
    }
}
