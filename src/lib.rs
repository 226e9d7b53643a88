//! Measures an instrumented median-of-three quicksort and a 6k±1 primality scan on random
//! integer arrays, once on the freshly generated (disordered) data and once more on the
//! already sorted (ordered) result.

pub mod config;
pub mod error;
pub mod prime;
pub mod quicksort;
pub mod report;
pub mod trial;

pub use config::BenchConfig;
pub use error::BenchError;
pub use quicksort::Comparisons;
pub use report::Summary;
pub use trial::{ResultsCollection, TrialResult, TrialRunner};
