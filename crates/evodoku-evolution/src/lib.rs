//! A small, domain-free generational genetic algorithm runtime.
//!
//! The crate knows how to run an evolutionary search but not what is being
//! searched for. A concrete domain plugs in through the [`Problem`] trait,
//! which supplies the genome type and the five capabilities the driver needs:
//! initialize, evaluate, mutate, crossover and the solved check.
//!
//! # How a Run Works
//!
//! 1. **Initialize** - build a population of random genomes
//! 2. **Evaluate** - score every individual (in parallel, deterministic)
//! 3. **Record** - update the best-ever individual and per-generation statistics
//! 4. **Terminate?** - stop when the problem is solved or the generation cap is hit
//! 5. **Reproduce** - keep the elites, then select parents, recombine and mutate
//!    until the next generation is full
//! 6. **Repeat** from step 2
//!
//! # Modules
//!
//! - [`problem`] - the [`Problem`] strategy trait
//! - [`params`] - [`EvolutionParams`] and their validation
//! - [`selection`] - roulette, rank and tournament parent selection
//! - [`population`] - [`Individual`] and [`Population`]
//! - [`statistics`] - best-ever tracking and per-generation summaries
//! - [`driver`] - the [`GeneticAlgorithm`] state machine
//!
//! # Randomness
//!
//! The driver owns a single random number generator supplied by the caller
//! and threads it through every stochastic operation. Seeding that generator
//! makes a run reproducible; fitness evaluation consumes no randomness, which
//! is what lets it run on several threads without changing results.

pub use self::{
    driver::{GeneticAlgorithm, Outcome, Phase, TerminationReason},
    params::{EvolutionParams, ParamsError},
    population::{Individual, Population},
    problem::Problem,
    selection::Selection,
    statistics::{GenerationSummary, RunStatistics},
};

pub mod driver;
pub mod params;
pub mod population;
pub mod problem;
pub mod selection;
pub mod statistics;
