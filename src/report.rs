//! Aggregation of trial results and their presentation.
//!
//! Everything here only reads `TrialResult` values. The renderers are pure and return `String`s,
//! `write_report` is the only place that touches an output stream.

use std::io::Write;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::config::BenchConfig;
use crate::error::BenchError;
use crate::trial::TrialResult;

/// Averages over a non-empty set of trials.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub trials: usize,
    pub avg_comparisons_disordered: f64,
    pub avg_comparisons_ordered: f64,
    /// `(disordered - ordered) / ordered * 100`. Infinite or NaN if the ordered average is zero,
    /// which serializes as JSON `null`.
    pub percentage_difference: f64,
    pub avg_primes_disordered: f64,
    pub avg_primes_ordered: f64,
}

impl Summary {
    pub fn from_results(results: &[TrialResult]) -> Result<Self, BenchError> {
        if results.is_empty() {
            return Err(BenchError::NoData);
        }

        let n = results.len() as f64;
        let avg = |f: fn(&TrialResult) -> f64| results.iter().map(f).sum::<f64>() / n;

        let avg_comparisons_disordered = avg(|r| r.comparisons_disordered as f64);
        let avg_comparisons_ordered = avg(|r| r.comparisons_ordered as f64);

        Ok(Self {
            trials: results.len(),
            avg_comparisons_disordered,
            avg_comparisons_ordered,
            percentage_difference: percentage_difference(
                avg_comparisons_disordered,
                avg_comparisons_ordered,
            ),
            avg_primes_disordered: avg(|r| r.primes_disordered as f64),
            avg_primes_ordered: avg(|r| r.primes_ordered as f64),
        })
    }
}

/// Relative difference of `disordered` over `ordered`, in percent.
pub fn percentage_difference(disordered: f64, ordered: f64) -> f64 {
    (disordered - ordered) / ordered * 100.0
}

// --- TABLE ---

const COLUMN_WIDTHS: [usize; 10] = [4, 15, 15, 15, 15, 15, 15, 15, 17, 12];

const HEADERS: [&str; 10] = [
    "Run",
    "Array Gen ms",
    "Sort D ms",
    "Prime D ms",
    "Total D ms",
    "Sort O ms",
    "Prime O ms",
    "Total O ms",
    "Comparisons D/O",
    "Primes D/O",
];

// Every cell is padded by one space on both sides.
static RULE: Lazy<String> = Lazy::new(|| {
    let mut rule = String::from("+");
    for width in COLUMN_WIDTHS {
        rule.push_str(&"-".repeat(width + 2));
        rule.push('+');
    }
    rule
});

fn table_row<S: AsRef<str>>(cells: &[S]) -> String {
    let mut row = String::from("|");
    for (cell, width) in cells.iter().zip(COLUMN_WIDTHS) {
        row.push_str(&format!(" {:<width$} |", cell.as_ref()));
    }
    row
}

fn ms_cell(ms: f64) -> String {
    format!("{ms:.6}ms")
}

/// Renders the array size box followed by one row per trial.
pub fn render_table(array_size: usize, results: &[TrialResult]) -> String {
    let rule = RULE.as_str();
    // Width inside the box, without the `| ` and ` |` borders.
    let inner = rule.len() - 4;

    let mut lines = vec![
        String::new(),
        rule.to_owned(),
        format!("| {:<inner$} |", format!("Array size: {array_size}")),
        rule.to_owned(),
        table_row(&HEADERS),
        rule.to_owned(),
    ];

    lines.extend(results.iter().map(|r| {
        table_row(&[
            r.run.to_string(),
            ms_cell(r.array_gen_ms()),
            ms_cell(r.sort_disordered_ms()),
            ms_cell(r.prime_disordered_ms()),
            ms_cell(r.total_disordered_ms()),
            ms_cell(r.sort_ordered_ms()),
            ms_cell(r.prime_ordered_ms()),
            ms_cell(r.total_ordered_ms()),
            format!("{} / {}", r.comparisons_disordered, r.comparisons_ordered),
            format!("{} / {}", r.primes_disordered, r.primes_ordered),
        ])
    }));

    lines.push(rule.to_owned());

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

pub fn render_summary(summary: &Summary) -> String {
    format!(
        "Average comparisons (disordered): {:.2}\n\
         Average comparisons (ordered): {:.2}\n\
         Percentage difference: {:.2}%\n\
         Average primes (disordered): {:.2}\n\
         Average primes (ordered): {:.2}\n",
        summary.avg_comparisons_disordered,
        summary.avg_comparisons_ordered,
        summary.percentage_difference,
        summary.avg_primes_disordered,
        summary.avg_primes_ordered,
    )
}

#[derive(Serialize)]
struct JsonReport<'a> {
    array_size: usize,
    results: &'a [TrialResult],
    summary: &'a Summary,
}

pub fn render_json(
    array_size: usize,
    results: &[TrialResult],
    summary: &Summary,
) -> Result<String, BenchError> {
    let report = JsonReport {
        array_size,
        results,
        summary,
    };

    Ok(serde_json::to_string_pretty(&report)?)
}

/// Writes the table, the summary block and, if enabled in `config`, the JSON document.
///
/// Nothing is written when `results` is empty.
pub fn write_report<W: Write>(
    out: &mut W,
    config: &BenchConfig,
    results: &[TrialResult],
) -> Result<Summary, BenchError> {
    let summary = Summary::from_results(results)?;

    out.write_all(render_table(config.array_size, results).as_bytes())?;
    writeln!(out)?;
    out.write_all(render_summary(&summary).as_bytes())?;

    if config.json {
        writeln!(out)?;
        writeln!(out, "{}", render_json(config.array_size, results, &summary)?)?;
    }

    out.flush()?;
    Ok(summary)
}
