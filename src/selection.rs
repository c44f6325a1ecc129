//! Parent selection.
//!
//! Individuals carry no sex attribute. Each generation the population
//! is sorted by weight and split positionally: the lower half forms the
//! female pool, the upper half the male pool. This is a modeling
//! simplification, not persistent identity; the pools are recomputed
//! from scratch every cycle.
//!
//! Within each pool the heaviest individuals are retained, so selection
//! always pushes the population upward. A goal below the current mean
//! will therefore never converge; the generation limit still terminates
//! such runs.

/// Selects breeding parents from a population.
///
/// Sorts ascending, splits into a lower (female) and upper (male) pool,
/// and keeps the `retain / 2` heaviest of each. For an odd-sized
/// population the male pool holds the extra individual; the split stays
/// purely positional.
///
/// Returns `(females, males)`, each of length `retain / 2` and sorted
/// ascending.
///
/// # Panics
/// Panics if `retain` is odd or exceeds the population size.
pub fn select(population: &[u32], retain: usize) -> (Vec<u32>, Vec<u32>) {
    assert!(retain % 2 == 0, "retain must be even");
    assert!(
        retain <= population.len(),
        "retain exceeds population size"
    );

    let mut sorted = population.to_vec();
    sorted.sort_unstable();

    let per_pool = retain / 2;
    let (females, males) = sorted.split_at(sorted.len() / 2);
    let selected_females = females[females.len() - per_pool..].to_vec();
    let selected_males = males[males.len() - per_pool..].to_vec();

    (selected_females, selected_males)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn counts(values: &[u32]) -> HashMap<u32, usize> {
        let mut map = HashMap::new();
        for &v in values {
            *map.entry(v).or_insert(0) += 1;
        }
        map
    }

    #[test]
    fn test_select_lengths() {
        let pop = [300, 250, 410, 520, 280, 330, 600, 210];
        let (females, males) = select(&pop, 4);
        assert_eq!(females.len(), 2);
        assert_eq!(males.len(), 2);
    }

    #[test]
    fn test_select_top_tail_of_each_pool() {
        let pop = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let (females, males) = select(&pop, 4);
        // Lower pool [1..=5], upper pool [6..=10]; heaviest two of each.
        assert_eq!(females, vec![4, 5]);
        assert_eq!(males, vec![9, 10]);
    }

    #[test]
    fn test_select_input_order_irrelevant() {
        let a = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let b = [10, 3, 7, 1, 9, 2, 8, 4, 6, 5];
        assert_eq!(select(&a, 6), select(&b, 6));
    }

    #[test]
    fn test_select_union_is_sub_multiset() {
        let pop = [300, 300, 410, 520, 280, 330, 600, 300];
        let (females, males) = select(&pop, 6);

        let mut selected = females;
        selected.extend(males);
        assert_eq!(selected.len(), 6);

        let pop_counts = counts(&pop);
        for (value, count) in counts(&selected) {
            assert!(
                pop_counts.get(&value).copied().unwrap_or(0) >= count,
                "selected {value} more times than it appears in the population"
            );
        }
    }

    #[test]
    fn test_select_females_below_males() {
        let pop = [300, 250, 410, 520, 280, 330, 600, 210];
        let (females, males) = select(&pop, 4);
        let heaviest_female = *females.last().unwrap();
        let lightest_male = *males.first().unwrap();
        assert!(heaviest_female <= lightest_male);
    }

    #[test]
    fn test_select_whole_population() {
        let pop = [4, 1, 3, 2];
        let (females, males) = select(&pop, 4);
        assert_eq!(females, vec![1, 2]);
        assert_eq!(males, vec![3, 4]);
    }

    #[test]
    fn test_select_odd_population() {
        // Positional split: male pool gets the extra individual.
        let pop = [1, 2, 3, 4, 5];
        let (females, males) = select(&pop, 4);
        assert_eq!(females, vec![1, 2]);
        assert_eq!(males, vec![4, 5]);
    }

    #[test]
    #[should_panic(expected = "retain must be even")]
    fn test_select_odd_retain_panics() {
        select(&[1, 2, 3, 4], 3);
    }

    #[test]
    #[should_panic(expected = "retain exceeds population size")]
    fn test_select_retain_too_large_panics() {
        select(&[1, 2, 3, 4], 6);
    }
}
