//! One trial generates a random array, sorts a copy of it (disordered pass), scans the result for
//! primes, and then repeats sort and scan on a copy of the sorted data (ordered pass).

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Serialize, Serializer};

use crate::config::{BenchConfig, MAX_VALUE};
use crate::prime;
use crate::quicksort::{self, Comparisons};

/// Measurements of a single trial. Durations serialize as fractional milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrialResult {
    /// 1-based position of the trial within its run.
    pub run: usize,
    #[serde(serialize_with = "serialize_ms")]
    pub array_gen: Duration,
    #[serde(serialize_with = "serialize_ms")]
    pub sort_disordered: Duration,
    #[serde(serialize_with = "serialize_ms")]
    pub prime_disordered: Duration,
    #[serde(serialize_with = "serialize_ms")]
    pub total_disordered: Duration,
    #[serde(serialize_with = "serialize_ms")]
    pub sort_ordered: Duration,
    #[serde(serialize_with = "serialize_ms")]
    pub prime_ordered: Duration,
    #[serde(serialize_with = "serialize_ms")]
    pub total_ordered: Duration,
    pub primes_disordered: usize,
    pub primes_ordered: usize,
    pub comparisons_disordered: u64,
    pub comparisons_ordered: u64,
}

/// Trial results in run order.
pub type ResultsCollection = Vec<TrialResult>;

impl TrialResult {
    pub fn array_gen_ms(&self) -> f64 {
        to_ms(self.array_gen)
    }

    pub fn sort_disordered_ms(&self) -> f64 {
        to_ms(self.sort_disordered)
    }

    pub fn prime_disordered_ms(&self) -> f64 {
        to_ms(self.prime_disordered)
    }

    pub fn total_disordered_ms(&self) -> f64 {
        to_ms(self.total_disordered)
    }

    pub fn sort_ordered_ms(&self) -> f64 {
        to_ms(self.sort_ordered)
    }

    pub fn prime_ordered_ms(&self) -> f64 {
        to_ms(self.prime_ordered)
    }

    pub fn total_ordered_ms(&self) -> f64 {
        to_ms(self.total_ordered)
    }
}

fn to_ms(d: Duration) -> f64 {
    d.as_secs_f64() * 1_000.0
}

fn serialize_ms<S: Serializer>(d: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(to_ms(*d))
}

/// Seed derived from the wall clock, meant to be taken once per process.
///
/// Two processes started within the same clock tick of a coarse clock get the same seed.
pub fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

/// Drives trials with a generator it owns for its whole lifetime, so consecutive trials draw
/// from one stream instead of reseeding.
#[derive(Debug)]
pub struct TrialRunner<R> {
    rng: R,
}

impl TrialRunner<StdRng> {
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> TrialRunner<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Returns `size` values uniform in `0..MAX_VALUE`.
    pub fn generate_array(&mut self, size: usize) -> Vec<i64> {
        (0..size).map(|_| self.rng.gen_range(0..MAX_VALUE)).collect()
    }

    /// Runs one full disordered + ordered measurement cycle over a fresh array of `size` values.
    pub fn run_trial(&mut self, run: usize, size: usize) -> TrialResult {
        let start_gen = Instant::now();
        let generated = self.generate_array(size);
        let array_gen = start_gen.elapsed();

        let mut cmp = Comparisons::new();

        // Disordered pass, on a copy so `generated` stays untouched.
        let start_disordered = Instant::now();
        let mut sorted = generated.clone();
        quicksort::sort(&mut sorted, &mut cmp);
        let sort_disordered = start_disordered.elapsed();
        let comparisons_disordered = cmp.count();

        let start_prime = Instant::now();
        let primes_disordered = prime::count_primes(&sorted);
        let prime_disordered = start_prime.elapsed();

        let total_disordered = start_disordered.elapsed();

        // Ordered pass, re-sorting an independent copy of the already sorted data.
        cmp.reset();
        let start_ordered = Instant::now();
        let mut resorted = sorted.clone();
        quicksort::sort(&mut resorted, &mut cmp);
        let sort_ordered = start_ordered.elapsed();
        let comparisons_ordered = cmp.count();

        let start_prime = Instant::now();
        let primes_ordered = prime::count_primes(&resorted);
        let prime_ordered = start_prime.elapsed();

        let total_ordered = start_ordered.elapsed();

        debug_assert_eq!(sorted, resorted);

        tracing::debug!(
            run,
            size,
            comparisons_disordered,
            comparisons_ordered,
            primes_disordered,
            primes_ordered,
            "trial finished"
        );

        TrialResult {
            run,
            array_gen,
            sort_disordered,
            prime_disordered,
            total_disordered,
            sort_ordered,
            prime_ordered,
            total_ordered,
            primes_disordered,
            primes_ordered,
            comparisons_disordered,
            comparisons_ordered,
        }
    }

    /// Runs `config.trials` trials back to back. Run indices start at 1.
    pub fn run(&mut self, config: &BenchConfig) -> ResultsCollection {
        tracing::info!(
            array_size = config.array_size,
            trials = config.trials,
            "starting trials"
        );

        let results: ResultsCollection = (1..=config.trials)
            .map(|run| self.run_trial(run, config.array_size))
            .collect();

        tracing::info!(completed = results.len(), "trials done");
        results
    }
}
