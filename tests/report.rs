use std::time::Duration;

use prime_sort_bench::report::{
    percentage_difference, render_json, render_summary, render_table, write_report,
};
use prime_sort_bench::{BenchConfig, BenchError, Summary, TrialResult, TrialRunner};
use regex::Regex;

fn result(run: usize, comparisons: (u64, u64), primes: (usize, usize)) -> TrialResult {
    let us = Duration::from_micros;
    TrialResult {
        run,
        array_gen: us(40),
        sort_disordered: us(120),
        prime_disordered: us(300),
        total_disordered: us(425),
        sort_ordered: us(90),
        prime_ordered: us(290),
        total_ordered: us(385),
        primes_disordered: primes.0,
        primes_ordered: primes.1,
        comparisons_disordered: comparisons.0,
        comparisons_ordered: comparisons.1,
    }
}

fn sample() -> Vec<TrialResult> {
    vec![
        result(1, (14_000, 10_000), (50, 50)),
        result(2, (16_000, 10_000), (52, 52)),
    ]
}

#[test]
fn summary_averages() {
    let summary = Summary::from_results(&sample()).unwrap();

    assert_eq!(summary.trials, 2);
    assert_eq!(summary.avg_comparisons_disordered, 15_000.0);
    assert_eq!(summary.avg_comparisons_ordered, 10_000.0);
    assert_eq!(summary.percentage_difference, 50.0);
    assert_eq!(summary.avg_primes_disordered, 51.0);
    assert_eq!(summary.avg_primes_ordered, 51.0);
}

#[test]
fn summary_needs_data() {
    assert!(matches!(Summary::from_results(&[]), Err(BenchError::NoData)));
}

#[test]
fn percentage_difference_zero_ordered() {
    assert_eq!(percentage_difference(10.0, 0.0), f64::INFINITY);
    assert!(percentage_difference(0.0, 0.0).is_nan());
    assert_eq!(percentage_difference(5.0, 10.0), -50.0);
}

#[test]
fn table_layout() {
    let table = render_table(1_000, &sample());
    let lines: Vec<&str> = table.lines().collect();

    // Leading blank line, size box (3), header (2), rows, closing rule.
    assert_eq!(lines.len(), 1 + 3 + 2 + 2 + 1);
    assert_eq!(lines[0], "");

    let rule = lines[1];
    assert!(Regex::new(r"^\+(-+\+){10}$").unwrap().is_match(rule));
    for line in &lines[1..] {
        assert_eq!(line.len(), rule.len(), "{line}");
    }
    assert_eq!(lines[3], rule);
    assert_eq!(lines[5], rule);
    assert_eq!(lines[8], rule);

    assert!(Regex::new(r"^\| Array size: 1000 +\|$").unwrap().is_match(lines[2]));
    assert!(lines[4].starts_with("| Run  | Array Gen ms    | Sort D ms "));

    let row = Regex::new(
        r"^\| (\d+) +\|( \d+\.\d{6}ms +\|){7} (\d+) / (\d+) +\| (\d+) / (\d+) +\|$",
    )
    .unwrap();
    let caps = row.captures(lines[6]).unwrap();
    assert_eq!(&caps[1], "1");
    assert_eq!(&caps[3], "14000");
    assert_eq!(&caps[4], "10000");
    assert_eq!(&caps[5], "50");
    assert!(lines[6].contains("| 0.040000ms      |"));
    assert!(row.is_match(lines[7]));
}

#[test]
fn table_without_rows() {
    let table = render_table(0, &[]);
    assert_eq!(table.lines().count(), 7);
}

#[test]
fn summary_lines() {
    let text = render_summary(&Summary::from_results(&sample()).unwrap());

    let expected = [
        r"^Average comparisons \(disordered\): 15000\.00$",
        r"^Average comparisons \(ordered\): 10000\.00$",
        r"^Percentage difference: 50\.00%$",
        r"^Average primes \(disordered\): 51\.00$",
        r"^Average primes \(ordered\): 51\.00$",
    ];

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), expected.len());
    for (line, pattern) in lines.iter().zip(expected) {
        assert!(Regex::new(pattern).unwrap().is_match(line), "{line}");
    }
}

#[test]
fn json_document() {
    let results = sample();
    let summary = Summary::from_results(&results).unwrap();
    let json = render_json(1_000, &results, &summary).unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["array_size"], 1_000);
    assert_eq!(value["results"].as_array().unwrap().len(), 2);
    assert_eq!(value["results"][1]["comparisons_disordered"], 16_000);
    let array_gen_ms = value["results"][0]["array_gen"].as_f64().unwrap();
    assert!((array_gen_ms - 0.04).abs() < 1e-9);
    assert_eq!(value["summary"]["percentage_difference"], 50.0);
}

#[test]
fn json_undefined_percentage_is_null() {
    let results = vec![result(1, (0, 0), (0, 0))];
    let summary = Summary::from_results(&results).unwrap();
    let json = render_json(0, &results, &summary).unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert!(value["summary"]["percentage_difference"].is_null());
}

#[test]
fn write_full_report() {
    let config = BenchConfig {
        array_size: 200,
        trials: 3,
        seed: Some(11),
        json: true,
    };
    let results = TrialRunner::from_seed(11).run(&config);

    let mut out = Vec::new();
    let summary = write_report(&mut out, &config, &results).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert_eq!(summary.trials, 3);
    assert!(text.contains("| Array size: 200 "));
    assert!(text.contains("\n\nAverage comparisons (disordered): "));
    assert!(text.contains("Average primes (ordered): "));

    let json_start = text.find('{').unwrap();
    let value: serde_json::Value = serde_json::from_str(&text[json_start..]).unwrap();
    assert_eq!(value["results"].as_array().unwrap().len(), 3);
}

#[test]
fn write_report_without_results_writes_nothing() {
    let mut out = Vec::new();
    let err = write_report(&mut out, &BenchConfig::default(), &[]).unwrap_err();

    assert!(matches!(err, BenchError::NoData));
    assert!(out.is_empty());
}
