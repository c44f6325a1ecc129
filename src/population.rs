//! Population initialization and scoring.
//!
//! The first generation is drawn from a triangular weight distribution.
//! Every population is scored by the ratio of its mean weight to the
//! goal weight; a score of 1.0 or above means the goal is met.

use crate::config::WeightRange;
use rand::Rng;
use rand_distr::{Distribution, Triangular};

/// Draws an initial population of `size` weights.
///
/// Each weight is one sample from the triangular distribution over
/// `[range.min, range.max]` peaking at `range.mode`, rounded to the
/// nearest gram. No ordering is guaranteed.
///
/// # Panics
/// Panics if the range is degenerate (`min >= max` or mode outside the
/// bounds). [`SimConfig::validate`](crate::SimConfig::validate) rejects
/// such ranges before a run starts.
pub fn populate<R: Rng>(size: usize, range: &WeightRange, rng: &mut R) -> Vec<u32> {
    let dist = Triangular::new(range.min as f64, range.max as f64, range.mode as f64)
        .expect("invalid weight range");
    (0..size).map(|_| dist.sample(rng).round() as u32).collect()
}

/// Mean weight of a population, exact for integer weights.
///
/// # Panics
/// Panics if the population is empty.
pub fn mean(population: &[u32]) -> f64 {
    assert!(
        !population.is_empty(),
        "cannot score an empty population"
    );
    let sum: u64 = population.iter().map(|&w| u64::from(w)).sum();
    sum as f64 / population.len() as f64
}

/// Scores a population as `mean / goal`.
///
/// Monotonic in the population mean and exactly 1.0 when the mean
/// equals the goal. The order of individuals is irrelevant.
///
/// # Panics
/// Panics if the population is empty.
pub fn fitness(population: &[u32], goal: u32) -> f64 {
    mean(population) / goal as f64
}
