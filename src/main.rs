use std::io;

use prime_sort_bench::{report, trial, BenchConfig, BenchError, TrialRunner};

fn main() {
    // Logs go to stderr so they never mix with the report on stdout.
    let _ = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .try_init();

    if let Err(err) = run(&BenchConfig::default()) {
        tracing::error!("{err}");
        std::process::exit(1);
    }
}

fn run(config: &BenchConfig) -> Result<(), BenchError> {
    let seed = config.seed.unwrap_or_else(trial::clock_seed);
    tracing::info!(seed, "seeded generator");

    let results = TrialRunner::from_seed(seed).run(config);

    let stdout = io::stdout();
    let summary = report::write_report(&mut stdout.lock(), config, &results)?;
    tracing::info!(
        percentage_difference = summary.percentage_difference,
        "report written"
    );

    Ok(())
}
