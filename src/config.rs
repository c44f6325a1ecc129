//! Simulation configuration.
//!
//! [`SimConfig`] holds all parameters that control the breeding loop.

/// Bounds of the initial weight distribution, in grams.
///
/// The first generation is drawn from a triangular distribution over
/// `[min, max]` peaking at `mode`, so most starting weights cluster
/// around the mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeightRange {
    /// Lowest possible initial weight. Must be positive and below `max`.
    pub min: u32,

    /// Highest possible initial weight.
    pub max: u32,

    /// Most common initial weight. Must lie in `[min, max]`.
    pub mode: u32,
}

/// Bounds of the mutation scalar.
///
/// A mutated weight is rescaled by a uniform factor in `[min, max)`.
/// With the defaults (0.2–1.2) most mutations are harmful and a few
/// push past both parents.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScalarRange {
    /// Smallest mutation factor. Must be non-negative and below `max`.
    pub min: f64,

    /// Largest mutation factor (exclusive).
    pub max: f64,
}

/// Population-size policy across generations.
///
/// Each cycle reassembles the population as retained parents plus the
/// full set of mutated offspring. The policy decides what happens to
/// the surplus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PopulationPolicy {
    /// Keep every offspring. From generation 1 on the population holds
    /// `retain + litter_size * retain / 2` individuals.
    #[default]
    Growing,

    /// Truncate the reassembled population back to `population_size`,
    /// dropping surplus offspring. Parents are never dropped.
    Fixed,
}

/// Configuration for a breeding run.
///
/// # Defaults
///
/// ```
/// use breedsim::SimConfig;
///
/// let config = SimConfig::default();
/// assert_eq!(config.goal, 60_000);
/// assert_eq!(config.population_size, 20);
/// assert_eq!(config.generation_limit, 500);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use breedsim::{PopulationPolicy, SimConfig};
///
/// let config = SimConfig::default()
///     .with_goal(30_000)
///     .with_population_size(40)
///     .with_policy(PopulationPolicy::Fixed)
///     .with_retain(10)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Target mean weight in grams. The run converges when the
    /// population mean reaches it.
    pub goal: u32,

    /// Number of individuals in the initial population, and the default
    /// retain count. Always even; the builder rounds odd values up.
    pub population_size: usize,

    /// Initial weight distribution.
    pub init_weight: WeightRange,

    /// Probability that an offspring mutates (0.0–1.0).
    pub mutation_odds: f64,

    /// Scalar range applied to mutated weights.
    pub mutation_scalar: ScalarRange,

    /// Offspring produced per breeding pair each generation.
    pub litter_size: usize,

    /// Litters per year, used only to derive elapsed years from the
    /// generation count.
    pub litters_per_year: usize,

    /// Maximum number of generations. Zero is valid and terminates the
    /// run immediately after initialization.
    pub generation_limit: usize,

    /// Parents retained each generation, split evenly between the two
    /// pools. `None` retains `population_size` individuals, matching a
    /// colony kept at its founding headcount.
    pub retain: Option<usize>,

    /// What happens to surplus offspring at reassembly.
    pub policy: PopulationPolicy,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            goal: 60_000,
            population_size: 20,
            init_weight: WeightRange {
                min: 200,
                max: 600,
                mode: 300,
            },
            mutation_odds: 0.1,
            mutation_scalar: ScalarRange { min: 0.2, max: 1.2 },
            litter_size: 8,
            litters_per_year: 7,
            generation_limit: 500,
            retain: None,
            policy: PopulationPolicy::Growing,
            seed: None,
        }
    }
}

impl SimConfig {
    /// Sets the goal weight in grams.
    pub fn with_goal(mut self, goal: u32) -> Self {
        self.goal = goal;
        self
    }

    /// Sets the population size, rounding odd values up to the next
    /// even number.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n + n % 2;
        self
    }

    /// Sets the initial weight distribution.
    pub fn with_init_weight(mut self, min: u32, max: u32, mode: u32) -> Self {
        self.init_weight = WeightRange { min, max, mode };
        self
    }

    /// Sets the mutation probability, clamped to `[0, 1]`.
    pub fn with_mutation_odds(mut self, odds: f64) -> Self {
        self.mutation_odds = odds.clamp(0.0, 1.0);
        self
    }

    /// Sets the mutation scalar range.
    pub fn with_mutation_scalar(mut self, min: f64, max: f64) -> Self {
        self.mutation_scalar = ScalarRange { min, max };
        self
    }

    /// Sets the litter size.
    pub fn with_litter_size(mut self, n: usize) -> Self {
        self.litter_size = n;
        self
    }

    /// Sets the number of litters per year.
    pub fn with_litters_per_year(mut self, n: usize) -> Self {
        self.litters_per_year = n;
        self
    }

    /// Sets the generation limit.
    pub fn with_generation_limit(mut self, n: usize) -> Self {
        self.generation_limit = n;
        self
    }

    /// Sets the retain count, rounding odd values up to the next even
    /// number.
    pub fn with_retain(mut self, n: usize) -> Self {
        self.retain = Some(n + n % 2);
        self
    }

    /// Sets the population-size policy.
    pub fn with_policy(mut self, policy: PopulationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The effective retain count: `retain`, or `population_size` when
    /// unset.
    pub fn retain_count(&self) -> usize {
        self.retain.unwrap_or(self.population_size)
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    /// The runner checks this before the first cycle, so an invalid
    /// configuration can never start a run.
    pub fn validate(&self) -> Result<(), String> {
        if self.population_size < 2 {
            return Err("population_size must be at least 2".into());
        }
        if self.population_size % 2 != 0 {
            return Err(
                "population_size must be even (with_population_size rounds up)".into(),
            );
        }
        if self.goal == 0 {
            return Err("goal must be positive".into());
        }
        let w = &self.init_weight;
        if w.min == 0 {
            return Err("init_weight.min must be positive".into());
        }
        if w.min >= w.max {
            return Err("init_weight requires min < max".into());
        }
        if w.mode < w.min || w.mode > w.max {
            return Err("init_weight.mode must lie in [min, max]".into());
        }
        if !(0.0..=1.0).contains(&self.mutation_odds) {
            return Err("mutation_odds must be in [0, 1]".into());
        }
        let s = &self.mutation_scalar;
        if s.min < 0.0 {
            return Err("mutation_scalar.min must be non-negative".into());
        }
        if s.min >= s.max {
            return Err("mutation_scalar requires min < max".into());
        }
        if self.litter_size == 0 {
            return Err("litter_size must be at least 1".into());
        }
        if self.litters_per_year == 0 {
            return Err("litters_per_year must be at least 1".into());
        }
        let retain = self.retain_count();
        if retain < 2 {
            return Err("retain must be at least 2".into());
        }
        if retain % 2 != 0 {
            return Err("retain must be even (with_retain rounds up)".into());
        }
        if retain > self.population_size {
            return Err("retain must not exceed population_size".into());
        }
        if self.policy == PopulationPolicy::Fixed {
            if retain >= self.population_size {
                return Err(
                    "fixed policy requires retain below population_size".into(),
                );
            }
            if retain + self.litter_size * retain / 2 < self.population_size {
                return Err(
                    "fixed policy cannot refill the population: \
                     retain + litter_size * retain / 2 < population_size"
                        .into(),
                );
            }
        }
        Ok(())
    }
}
