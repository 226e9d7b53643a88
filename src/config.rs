/// Number of elements generated for every trial.
pub const ARRAY_SIZE: usize = 1_000;

/// Number of trials per process run.
pub const TRIALS: usize = 10;

/// Generated values are uniform in `0..MAX_VALUE`.
pub const MAX_VALUE: i64 = 999_999_999;

/// Fixed parameters of a benchmark run.
///
/// Nothing at runtime changes these. The binary always uses `BenchConfig::default()`, tests build
/// their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    pub array_size: usize,
    pub trials: usize,
    /// Seed for the process wide generator. `None` derives one from the system clock.
    pub seed: Option<u64>,
    /// Emit the JSON document after the text report.
    pub json: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            array_size: ARRAY_SIZE,
            trials: TRIALS,
            seed: None,
            json: cfg!(feature = "json_report"),
        }
    }
}
