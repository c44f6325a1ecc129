//! Genetic operators: pair breeding and scalar mutation.
//!
//! Breeding pairs the two selected pools by shuffled index and draws
//! each offspring uniformly between its parents' weights. Mutation
//! independently rescales offspring by a random factor.

use crate::config::ScalarRange;
use rand::seq::SliceRandom;
use rand::Rng;

/// Breeds the selected pools and returns the combined litters.
///
/// Both pools are copied and shuffled independently, which establishes
/// a random pairing by index. Each of the `min(|females|, |males|)`
/// pairs produces `litter_size` offspring, every one an independent
/// uniform draw from the pair's inclusive weight range.
///
/// The output holds `litter_size * min(|females|, |males|)` weights in
/// no meaningful order.
pub fn breed<R: Rng>(
    females: &[u32],
    males: &[u32],
    litter_size: usize,
    rng: &mut R,
) -> Vec<u32> {
    let mut females = females.to_vec();
    let mut males = males.to_vec();
    females.shuffle(rng);
    males.shuffle(rng);

    let pairs = females.len().min(males.len());
    let mut litter = Vec::with_capacity(pairs * litter_size);
    for i in 0..pairs {
        let lo = females[i].min(males[i]);
        let hi = females[i].max(males[i]);
        for _ in 0..litter_size {
            litter.push(rng.random_range(lo..=hi));
        }
    }
    litter
}

/// Mutates a litter in place.
///
/// Each weight independently, with probability `odds`, is replaced by
/// `round(weight * u)` for a fresh uniform `u` in
/// `[scalar.min, scalar.max)`. Elements that do not mutate are left
/// untouched; there is no correlation between elements.
///
/// # Panics
/// Panics if the scalar range is empty (`min >= max`).
pub fn mutate<R: Rng>(litter: &mut [u32], odds: f64, scalar: &ScalarRange, rng: &mut R) {
    assert!(
        scalar.min < scalar.max,
        "mutation scalar range requires min < max"
    );

    for weight in litter.iter_mut() {
        if rng.random_range(0.0..1.0) < odds {
            let factor = rng.random_range(scalar.min..scalar.max);
            *weight = (*weight as f64 * factor).round() as u32;
        }
    }
}
