//! Driver: validates the command line, allocates buffers and wires each test
//! case to a (setup, measured) pair for the trial harness.
//!
//! Every validation failure is detected before any buffer is allocated or
//! any kernel runs.

use std::hint::black_box;

use tracing::{debug, info, warn};

use stride_primitives::{
    alloc_buffer, compact, fill_with, mask_for_ratio, observe, scan, scan2d, BenchTimer, Buffer,
    FillPattern, Shape, ShapeError,
};

use crate::cli::{FillArg, OutputFormat, StrideArgs};
use crate::config::{parse_count, resolve_trials, ConfigError};
use crate::harness::{self, BenchResult, TrialConfig};
use crate::verify;

/// Reasons the driver refuses to run a benchmark.
///
/// Each `Display` string is the one-line diagnostic printed on stdout.
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("Usage: stride-bench test-case input-size row-length row-count (thread-count)")]
    Usage,

    #[error("{field} should be an integer.")]
    NotAnInteger { field: &'static str },

    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error("Unknown test case.")]
    UnknownTestCase,

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// The benchmarks selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestCase {
    ScanSequential,
    ScanMultidimSequential,
    ScanInplaceSequential,
    ScanInplaceMultidimSequential,
    Compact2Sequential,
    Compact8Sequential,
}

impl TestCase {
    pub const ALL: [TestCase; 6] = [
        TestCase::ScanSequential,
        TestCase::ScanMultidimSequential,
        TestCase::ScanInplaceSequential,
        TestCase::ScanInplaceMultidimSequential,
        TestCase::Compact2Sequential,
        TestCase::Compact8Sequential,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TestCase::ScanSequential => "scan-sequential",
            TestCase::ScanMultidimSequential => "scan-multidim-sequential",
            TestCase::ScanInplaceSequential => "scan-inplace-sequential",
            TestCase::ScanInplaceMultidimSequential => "scan-inplace-multidim-sequential",
            TestCase::Compact2Sequential => "compact-2-sequential",
            TestCase::Compact8Sequential => "compact-8-sequential",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tc| tc.name() == name)
    }

    /// Compaction ratio for the compact cases.
    pub fn compaction_ratio(self) -> Option<u64> {
        match self {
            TestCase::Compact2Sequential => Some(2),
            TestCase::Compact8Sequential => Some(8),
            _ => None,
        }
    }

    /// The kernel writes its result over its input.
    pub fn is_in_place(self) -> bool {
        matches!(
            self,
            TestCase::ScanInplaceSequential | TestCase::ScanInplaceMultidimSequential
        )
    }

    /// The scan is applied per row rather than over the whole buffer.
    pub fn is_multidim(self) -> bool {
        matches!(
            self,
            TestCase::ScanMultidimSequential | TestCase::ScanInplaceMultidimSequential
        )
    }

    /// The input is refilled before every round. The in-place cases need it
    /// to undo the previous scan; the compaction cases refill as well so
    /// every trial starts from the same cache state.
    pub fn refills_input(self) -> bool {
        self.is_in_place() || self.compaction_ratio().is_some()
    }

    /// Estimated bytes read plus written by one trial.
    pub fn bytes_per_trial(self, size: usize) -> u64 {
        let element = std::mem::size_of::<u64>() as u64;
        let size = size as u64;
        match self.compaction_ratio() {
            Some(ratio) => size * element + size / ratio * element,
            None => 2 * size * element,
        }
    }
}

/// A fully validated benchmark request.
#[derive(Debug, Clone)]
pub struct Request {
    pub test_case: TestCase,
    pub shape: Shape,
    /// Accepted when a positive integer, never used by any kernel.
    pub thread_count: Option<usize>,
    pub trials: TrialConfig,
    pub fill: FillPattern,
    pub format: OutputFormat,
    pub verify: bool,
}

/// Validate the command line in order: argument count, input size, row
/// length, row count, shape product, test case, then the trial settings.
///
/// A thread count that is not a positive integer is logged and dropped, as
/// are positionals after it.
pub fn prepare(args: &StrideArgs) -> Result<Request, DriverError> {
    let (Some(name), Some(raw_size), Some(raw_row_length), Some(raw_row_count)) = (
        args.test_case.as_deref(),
        args.input_size.as_deref(),
        args.row_length.as_deref(),
        args.row_count.as_deref(),
    ) else {
        return Err(DriverError::Usage);
    };

    let size = parse_dimension("input-size", raw_size)?;
    let row_length = parse_dimension("row-length", raw_row_length)?;
    let row_count = parse_dimension("row-count", raw_row_count)?;
    let shape = Shape::new(size, row_length, row_count)?;

    let test_case =
        TestCase::from_name(name).ok_or(DriverError::UnknownTestCase)?;

    let thread_count = args.thread_count.as_deref().and_then(|raw| match parse_count(raw) {
        Ok(n) if n > 0 => usize::try_from(n).ok(),
        _ => {
            warn!(thread_count = raw, "thread-count is not a positive integer, ignoring it");
            None
        }
    });
    if !args.extra.is_empty() {
        debug!(extra = ?args.extra, "ignoring extra positional arguments");
    }

    let trials = resolve_trials(args.profile.as_deref(), args.trials, args.warmup)?;

    let fill = match args.fill {
        FillArg::IndexHash => FillPattern::IndexHash,
        FillArg::Seeded => FillPattern::Seeded(args.seed),
    };

    Ok(Request {
        test_case,
        shape,
        thread_count,
        trials,
        fill,
        format: args.format,
        verify: args.verify,
    })
}

fn parse_dimension(field: &'static str, raw: &str) -> Result<i64, DriverError> {
    let value = parse_count(raw).map_err(|_| DriverError::NotAnInteger { field })?;
    stride_primitives::shape::require_positive(field, value)?;
    Ok(value)
}

/// Run the test case's kernel once. Returns the length of the valid output
/// prefix in [`result_buffer`].
fn run_kernel(test_case: TestCase, shape: Shape, input: &Buffer, output: &Buffer) -> usize {
    match test_case {
        TestCase::ScanSequential => {
            scan(input, output);
            shape.size()
        }
        TestCase::ScanMultidimSequential => {
            scan2d(shape, input, output);
            shape.size()
        }
        TestCase::ScanInplaceSequential => {
            scan(input, input);
            shape.size()
        }
        TestCase::ScanInplaceMultidimSequential => {
            scan2d(shape, input, input);
            shape.size()
        }
        TestCase::Compact2Sequential | TestCase::Compact8Sequential => {
            let ratio = test_case.compaction_ratio().unwrap_or(2);
            compact(mask_for_ratio(ratio), input, output)
        }
    }
}

/// The buffer holding the kernel's result.
fn result_buffer<'a>(test_case: TestCase, input: &'a Buffer, output: &'a Buffer) -> &'a Buffer {
    if test_case.is_in_place() {
        input
    } else {
        output
    }
}

/// Allocate, seed, optionally verify, then time the request.
pub fn execute(request: &Request, progress_cb: Option<&dyn Fn(&str)>) -> BenchResult {
    let test_case = request.test_case;
    let shape = request.shape;
    let size = shape.size();

    if let Some(threads) = request.thread_count {
        info!(threads, "thread-count ignored: all kernels run on one thread");
    }

    let timer = BenchTimer::start();
    let input = alloc_buffer(size);
    let output = alloc_buffer(size);
    fill_with(request.fill, &input);
    debug!(size, elapsed_ms = timer.elapsed_ms(), "buffers allocated and filled");

    if request.verify {
        fill_with(request.fill, &input);
        let len = run_kernel(test_case, shape, &input, &output);
        match verify::check(test_case, shape, request.fill, result_buffer(test_case, &input, &output), len) {
            Ok(()) => info!(test_case = test_case.name(), "verification passed"),
            Err(e) => {
                tracing::warn!(test_case = test_case.name(), error = %e, "verification failed");
                eprintln!("WARNING: {} verification failed: {}", test_case.name(), e);
            }
        }
        fill_with(request.fill, &input);
    }

    info!(
        test_case = test_case.name(),
        size,
        row_length = shape.row_length(),
        row_count = shape.row_count(),
        trials = request.trials.trials,
        warmup = request.trials.warmup,
        "running benchmark"
    );

    let report = harness::run(
        &request.trials,
        || {
            if test_case.refills_input() {
                fill_with(request.fill, &input);
            }
        },
        || {
            let len = run_kernel(test_case, shape, black_box(&input), black_box(&output));
            observe(result_buffer(test_case, &input, &output), len)
        },
        progress_cb,
    );

    BenchResult::new(
        test_case.name(),
        shape,
        test_case.bytes_per_trial(size),
        &report,
    )
}
