use clap::{Parser, ValueEnum};

/// Sequential scan and compaction microbenchmark
///
/// Positional arguments are optional to clap so that missing or malformed
/// values are reported by the driver with a one-line diagnostic.
#[derive(Parser, Debug)]
#[command(name = "stride-bench", version, about, allow_negative_numbers = true)]
pub struct StrideArgs {
    /// Test case: scan-sequential, scan-multidim-sequential,
    /// scan-inplace-sequential, scan-inplace-multidim-sequential,
    /// compact-2-sequential, compact-8-sequential
    #[arg(value_name = "TEST_CASE")]
    pub test_case: Option<String>,

    /// Number of u64 elements (e.g., 1000000, 64M, 100K)
    #[arg(value_name = "INPUT_SIZE")]
    pub input_size: Option<String>,

    /// Elements per row for the multidimensional cases
    #[arg(value_name = "ROW_LENGTH")]
    pub row_length: Option<String>,

    /// Number of rows; row-length * row-count must equal input-size
    #[arg(value_name = "ROW_COUNT")]
    pub row_count: Option<String>,

    /// Accepted for compatibility; every kernel runs on one thread
    #[arg(value_name = "THREAD_COUNT")]
    pub thread_count: Option<String>,

    /// Further positionals are ignored
    #[arg(value_name = "IGNORED", hide = true)]
    pub extra: Vec<String>,

    /// Number of timed trials (default 10, or the profile's value)
    #[arg(long)]
    pub trials: Option<u32>,

    /// Untimed rounds before measurement (default 1, or the profile's value)
    #[arg(long)]
    pub warmup: Option<u32>,

    /// Trial profile: quick (3/1), standard (10/1), thorough (30/3)
    #[arg(long)]
    pub profile: Option<String>,

    /// Input fill pattern
    #[arg(long, value_enum, default_value_t = FillArg::IndexHash)]
    pub fill: FillArg,

    /// Seed for --fill seeded
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Report format written to stdout
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Check the kernel output against a reference before timing
    #[arg(long)]
    pub verify: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FillArg {
    /// Hash of the element index (default)
    IndexHash,
    /// Pseudo-random values from --seed
    Seeded,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Table plus one `result key=value` line
    Table,
    /// One JSON object per run
    Json,
}
