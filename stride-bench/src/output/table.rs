//! Table output using comfy-table, followed by one `key=value` result line
//! for scripts.

use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::harness::{format_size, BenchResult};

/// Coefficient of variation above which the timing is flagged as noisy.
const NOISY_CV_PERCENT: f64 = 5.0;

/// Build the summary table for one result.
pub fn build_table(result: &BenchResult) -> Table {
    let mut table = Table::new();
    table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Size").add_attribute(Attribute::Bold),
            Cell::new("Rows").add_attribute(Attribute::Bold),
            Cell::new("Mean (ms)").add_attribute(Attribute::Bold),
            Cell::new("Median (ms)").add_attribute(Attribute::Bold),
            Cell::new("Best (ms)").add_attribute(Attribute::Bold),
            Cell::new("CV%").add_attribute(Attribute::Bold),
            Cell::new("GB/s").add_attribute(Attribute::Bold),
            Cell::new("Melem/s").add_attribute(Attribute::Bold),
        ]);

    let stats = &result.stats;
    let cv = format!("{:.1}", stats.cv_percent);
    let cv_cell = if stats.cv_percent > NOISY_CV_PERCENT {
        Cell::new(&cv).fg(Color::Yellow)
    } else {
        Cell::new(&cv).fg(Color::Green)
    };

    table.add_row(vec![
        Cell::new(format_size(result.size)).set_alignment(CellAlignment::Right),
        Cell::new(format!("{} x {}", result.row_count, result.row_length))
            .set_alignment(CellAlignment::Right),
        Cell::new(format!("{:.3}", stats.mean_ms)).set_alignment(CellAlignment::Right),
        Cell::new(format!("{:.3}", stats.median_ms)).set_alignment(CellAlignment::Right),
        Cell::new(format!("{:.3}", stats.best_ms)).set_alignment(CellAlignment::Right),
        cv_cell.set_alignment(CellAlignment::Right),
        Cell::new(format!("{:.2}", result.gb_per_sec)).set_alignment(CellAlignment::Right),
        Cell::new(format!("{:.1}", result.melem_per_sec)).set_alignment(CellAlignment::Right),
    ]);

    table
}

/// The machine-readable summary line.
pub fn result_line(result: &BenchResult) -> String {
    format!(
        "result test_case={} size={} trials={} mean_ms={:.6} best_ms={:.6}",
        result.test_case, result.size, result.stats.trials, result.stats.mean_ms, result.stats.best_ms,
    )
}

/// Print the table and the result line to stdout.
pub fn render(result: &BenchResult) {
    println!(
        "\n=== {} ({} trials, {} warmup) ===",
        result.test_case, result.stats.trials, result.warmup
    );
    println!("{}", build_table(result));
    println!("{}", result_line(result));
}
