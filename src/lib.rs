//! Selective-breeding simulator.
//!
//! Evolves a population of weights toward a goal value with a simple
//! generational loop: draw a founding population from a triangular
//! distribution, then repeatedly select the heaviest individuals of
//! each pool, breed them pairwise, mutate the offspring, and rescore,
//! until the population mean reaches the goal or a generation limit
//! is hit.
//!
//! # Key Types
//!
//! - [`SimConfig`]: All run parameters (goal, population, mutation,
//!   litters, termination), validated before the first cycle
//! - [`SimRunner`]: Executes the breeding loop
//! - [`SimResult`]: Final outcome with the per-generation mean history
//! - [`GenerationStats`]: Per-generation snapshot for observers
//!
//! # Modules
//!
//! - [`population`]: Triangular initialization, mean, and fitness
//! - [`selection`]: Sorted-half split and top-tail retention
//! - [`operators`]: Pair breeding and scalar mutation
//!
//! # Example
//!
//! ```
//! use breedsim::{SimConfig, SimRunner};
//!
//! let config = SimConfig::default()
//!     .with_goal(1_000)
//!     .with_generation_limit(100)
//!     .with_seed(42);
//!
//! let result = SimRunner::run_with_observer(&config, |stats| {
//!     // An external reporter would print these.
//!     let _ = (stats.generation, stats.fitness, stats.mean_weight);
//! });
//!
//! assert_eq!(result.mean_history.len(), result.generations);
//! ```

pub mod config;
pub mod operators;
pub mod population;
pub mod runner;
pub mod selection;

pub use config::{PopulationPolicy, ScalarRange, SimConfig, WeightRange};
pub use runner::{GenerationStats, SimResult, SimRunner, Termination};
