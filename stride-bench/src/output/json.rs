//! JSON output: one object per run on a single stdout line.

use serde::Serialize;

use crate::harness::BenchResult;

#[derive(Serialize)]
struct JsonReport<'a> {
    host: HostHeader,
    #[serde(flatten)]
    result: &'a BenchResult,
}

#[derive(Serialize)]
struct HostHeader {
    arch: &'static str,
    os: &'static str,
    crate_version: &'static str,
}

/// Serialize a result with a host header.
pub fn to_json_line(result: &BenchResult) -> Result<String, String> {
    let report = JsonReport {
        host: HostHeader {
            arch: std::env::consts::ARCH,
            os: std::env::consts::OS,
            crate_version: env!("CARGO_PKG_VERSION"),
        },
        result,
    };
    serde_json::to_string(&report).map_err(|e| format!("JSON serialization failed: {}", e))
}

/// Print the JSON line to stdout.
pub fn render(result: &BenchResult) -> Result<(), String> {
    println!("{}", to_json_line(result)?);
    Ok(())
}
