//! Breeding loop execution.
//!
//! [`SimRunner`] orchestrates the complete run: initialization and
//! scoring, then selection → breeding → mutation → rescoring per
//! generation until the population converges on the goal weight or the
//! generation limit is reached.

use crate::config::{PopulationPolicy, SimConfig};
use crate::operators::{breed, mutate};
use crate::population::{fitness, mean, populate};
use crate::selection::select;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Why a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    /// The population mean reached the goal (fitness >= 1.0).
    Converged,

    /// The generation limit was hit first.
    LimitReached,
}

/// Snapshot of one completed generation, handed to the observer.
///
/// The values describe the reassembled population, after breeding and
/// mutation. Observers consume these for reporting; they cannot
/// influence the run.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    /// 0-based generation index.
    pub generation: usize,

    /// Fitness of the new population.
    pub fitness: f64,

    /// Mean weight of the new population, in grams.
    pub mean_weight: f64,

    /// Number of individuals in the new population.
    pub population_size: usize,
}

/// Result of a breeding run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimResult {
    /// Why the run ended.
    pub termination: Termination,

    /// Number of completed generations.
    pub generations: usize,

    /// Elapsed breeding years: `generations / litters_per_year`,
    /// integer division.
    pub years: usize,

    /// Fitness of the final population.
    pub final_fitness: f64,

    /// Mean weight of each completed generation, oldest first. Empty
    /// when the run terminated before the first cycle.
    pub mean_history: Vec<f64>,

    /// The final population's weights.
    pub population: Vec<u32>,
}

/// Executes the breeding loop.
///
/// # Usage
///
/// ```
/// use breedsim::{SimConfig, SimRunner};
///
/// let config = SimConfig::default()
///     .with_generation_limit(25)
///     .with_seed(42);
/// let result = SimRunner::run(&config);
/// assert!(result.generations <= 25);
/// assert_eq!(result.mean_history.len(), result.generations);
/// ```
pub struct SimRunner;

impl SimRunner {
    /// Runs the simulation.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call
    /// [`SimConfig::validate`] first to get a descriptive error).
    pub fn run(config: &SimConfig) -> SimResult {
        Self::run_with_observer(config, |_| {})
    }

    /// Runs the simulation, invoking `observer` once per completed
    /// generation.
    ///
    /// The observer is a pure consumer for reporting and cannot
    /// influence the run. A run that terminates before the first cycle (zero
    /// generation limit, or a goal already met by the initial
    /// population) never invokes it.
    pub fn run_with_observer<F>(config: &SimConfig, mut observer: F) -> SimResult
    where
        F: FnMut(&GenerationStats),
    {
        config.validate().expect("invalid SimConfig");

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let retain = config.retain_count();

        let mut population = populate(config.population_size, &config.init_weight, &mut rng);
        let mut score = fitness(&population, config.goal);

        let mut mean_history = Vec::with_capacity(config.generation_limit);
        let mut generation = 0usize;

        while score < 1.0 && generation < config.generation_limit {
            let (females, males) = select(&population, retain);
            let mut litter = breed(&females, &males, config.litter_size, &mut rng);
            mutate(
                &mut litter,
                config.mutation_odds,
                &config.mutation_scalar,
                &mut rng,
            );

            let mut next = Vec::with_capacity(retain + litter.len());
            next.extend_from_slice(&females);
            next.extend_from_slice(&males);
            next.append(&mut litter);
            if config.policy == PopulationPolicy::Fixed {
                // Surplus offspring sit at the tail; parents survive.
                next.truncate(config.population_size);
            }
            population = next;

            score = fitness(&population, config.goal);
            let mean_weight = mean(&population);
            mean_history.push(mean_weight);

            observer(&GenerationStats {
                generation,
                fitness: score,
                mean_weight,
                population_size: population.len(),
            });

            generation += 1;
        }

        let termination = if score >= 1.0 {
            Termination::Converged
        } else {
            Termination::LimitReached
        };

        SimResult {
            termination,
            generations: generation,
            years: generation / config.litters_per_year,
            final_fitness: score,
            mean_history,
            population,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
