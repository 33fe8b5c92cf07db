//! End-to-end CLI tests.
//!
//! stride-bench <test-case> <input-size> <row-length> <row-count> [thread-count]
//!
//! Runs the compiled binary via std::process::Command. Validation failures
//! must print one line on stdout and still exit 0.

use std::process::Command;

/// Run stride-bench with given args and return (stdout, stderr, exit_code).
fn run_cli(args: &[&str]) -> (String, String, i32) {
    let bin = env!("CARGO_BIN_EXE_stride-bench");
    let output = Command::new(bin)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap_or_else(|e| panic!("failed to run {}: {}", bin, e));

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);
    (stdout, stderr, code)
}

fn assert_diagnostic(args: &[&str], expected: &str) {
    let (stdout, stderr, code) = run_cli(args);
    assert_eq!(code, 0, "exit code should be 0, stderr: {}", stderr);
    assert_eq!(stdout.trim_end(), expected, "args {:?}", args);
    assert!(!stdout.contains("result "), "no benchmark should run: {}", stdout);
}

/// Extract `key=value` from the result line.
fn result_field<'a>(stdout: &'a str, key: &str) -> Option<&'a str> {
    let line = stdout.lines().find(|l| l.starts_with("result "))?;
    line.split_whitespace()
        .find_map(|kv| kv.strip_prefix(key)?.strip_prefix('='))
}

// ---- Validation ----

#[test]
fn test_usage() {
    let usage = "Usage: stride-bench test-case input-size row-length row-count (thread-count)";
    assert_diagnostic(&[], usage);
    assert_diagnostic(&["scan-sequential", "100"], usage);
}

#[test]
fn test_non_positive_size() {
    assert_diagnostic(&["scan-sequential", "0", "1", "1"], "input-size should be positive.");
    assert_diagnostic(&["scan-sequential", "-10", "5", "2"], "input-size should be positive.");
}

#[test]
fn test_non_positive_rows() {
    assert_diagnostic(&["scan-sequential", "10", "0", "2"], "row-length should be positive.");
    assert_diagnostic(&["scan-sequential", "10", "5", "-2"], "row-count should be positive.");
}

#[test]
fn test_shape_mismatch() {
    assert_diagnostic(
        &["scan-multidim-sequential", "10", "3", "3"],
        "combination of row-count and row-length should match the input-size",
    );
}

#[test]
fn test_unknown_test_case() {
    assert_diagnostic(&["scan-tbb", "10", "5", "2"], "Unknown test case.");
}

#[test]
fn test_non_integer() {
    assert_diagnostic(&["scan-sequential", "ten", "5", "2"], "input-size should be an integer.");
}

#[test]
fn test_zero_trials() {
    assert_diagnostic(&["scan-sequential", "6", "3", "2", "--trials", "0"], "trials should be positive.");
}

#[test]
fn test_flag_errors_are_one_line_on_stdout() {
    for args in [
        &["scan-sequential", "6", "3", "2", "--bogus"][..],
        &["scan-sequential", "6", "3", "2", "--trials", "many"][..],
    ] {
        let (stdout, stderr, code) = run_cli(args);
        assert_eq!(code, 0, "args {:?}, stderr: {}", args, stderr);
        assert_eq!(stdout.lines().count(), 1, "args {:?}: {}", args, stdout);
        assert!(stdout.starts_with("error:"), "args {:?}: {}", args, stdout);
        assert!(!stdout.contains("result "));
    }
}

// ---- Runs ----

#[test]
fn test_every_case_reports_result() {
    for case in [
        "scan-sequential",
        "scan-multidim-sequential",
        "scan-inplace-sequential",
        "scan-inplace-multidim-sequential",
        "compact-2-sequential",
        "compact-8-sequential",
    ] {
        let (stdout, stderr, code) = run_cli(&[case, "10000", "100", "100", "--trials", "3"]);
        assert_eq!(code, 0, "{} failed, stderr: {}", case, stderr);
        assert_eq!(result_field(&stdout, "test_case"), Some(case), "{}", stdout);
        assert_eq!(result_field(&stdout, "size"), Some("10000"));
        assert_eq!(result_field(&stdout, "trials"), Some("3"));
        let mean: f64 = result_field(&stdout, "mean_ms").unwrap().parse().unwrap();
        assert!(mean >= 0.0);
    }
}

#[test]
fn test_thread_count_accepted() {
    let (stdout, _, code) = run_cli(&["scan-sequential", "1000", "1000", "1", "8", "--trials", "1"]);
    assert_eq!(code, 0);
    assert_eq!(result_field(&stdout, "trials"), Some("1"));
}

#[test]
fn test_invalid_thread_count_ignored() {
    for raw in ["0", "-2", "many"] {
        let (stdout, stderr, code) =
            run_cli(&["scan-sequential", "1000", "1000", "1", raw, "--trials", "1"]);
        assert_eq!(code, 0, "stderr: {}", stderr);
        assert_eq!(result_field(&stdout, "test_case"), Some("scan-sequential"), "{}", stdout);
    }
}

#[test]
fn test_extra_positionals_ignored() {
    let (stdout, stderr, code) =
        run_cli(&["scan-sequential", "6", "3", "2", "4", "extra", "--trials", "1"]);
    assert_eq!(code, 0, "stderr: {}", stderr);
    assert_eq!(result_field(&stdout, "size"), Some("6"), "{}", stdout);
}

#[test]
fn test_size_suffix() {
    let (stdout, _, code) = run_cli(&["scan-sequential", "10K", "1K", "10", "--profile", "quick"]);
    assert_eq!(code, 0);
    assert_eq!(result_field(&stdout, "size"), Some("10000"));
    assert_eq!(result_field(&stdout, "trials"), Some("3"));
}

#[test]
fn test_verify_passes_silently() {
    let (_, stderr, code) = run_cli(&[
        "compact-8-sequential", "4096", "64", "64", "--trials", "1", "--verify", "--fill", "seeded",
    ]);
    assert_eq!(code, 0);
    assert!(!stderr.contains("verification failed"), "{}", stderr);
}

#[test]
fn test_json_format() {
    let (stdout, stderr, code) = run_cli(&[
        "scan-inplace-multidim-sequential", "600", "60", "10", "--trials", "2", "--format", "json",
    ]);
    assert_eq!(code, 0, "stderr: {}", stderr);
    let line = stdout.lines().find(|l| l.starts_with('{')).expect("json line");
    assert!(line.contains("\"test_case\":\"scan-inplace-multidim-sequential\""), "{}", line);
    assert!(line.contains("\"row_length\":60"), "{}", line);
    assert!(line.contains("\"trials\":2"), "{}", line);
}
