//! Evolution parameters and their validation.
//!
//! Parameters are checked once, before the first generation runs. An invalid
//! configuration is a fatal startup error: [`GeneticAlgorithm::new`] refuses to
//! build a driver from it and nothing is retried.
//!
//! [`GeneticAlgorithm::new`]: crate::driver::GeneticAlgorithm::new

use serde::Serialize;

use crate::selection::Selection;

/// Default number of individuals per generation.
pub const DEFAULT_POPULATION_SIZE: usize = 820;
/// Default cap on evaluated generations.
pub const DEFAULT_MAX_GENERATIONS: usize = 2500;
/// Default per-gene mutation probability.
pub const DEFAULT_MUTATION_RATE: f32 = 0.01;
/// Default per-mating crossover probability.
pub const DEFAULT_CROSSOVER_RATE: f32 = 0.9;
/// Default number of best individuals carried over unchanged.
pub const DEFAULT_ELITE_COUNT: usize = 1;

/// Controls how a population evolves from one generation to the next.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvolutionParams {
    /// Number of individuals in every generation (constant across the run)
    pub population_size: usize,
    /// Maximum number of evaluated generations, including the initial one
    pub max_generations: usize,
    /// Probability that a single gene undergoes mutation
    pub mutation_rate: f32,
    /// Probability that a mating event recombines its parents instead of cloning them
    pub crossover_rate: f32,
    /// Number of top individuals preserved unchanged (elitism)
    pub elite_count: usize,
    /// Fitness-biased parent selection policy
    pub selection: Selection,
}

impl Default for EvolutionParams {
    fn default() -> Self {
        Self {
            population_size: DEFAULT_POPULATION_SIZE,
            max_generations: DEFAULT_MAX_GENERATIONS,
            mutation_rate: DEFAULT_MUTATION_RATE,
            crossover_rate: DEFAULT_CROSSOVER_RATE,
            elite_count: DEFAULT_ELITE_COUNT,
            selection: Selection::default(),
        }
    }
}

/// A configuration error detected before evolution starts.
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum ParamsError {
    #[display("population size must be greater than zero")]
    EmptyPopulation,
    #[display("generation cap must be greater than zero")]
    NoGenerations,
    #[display("{name} must be within [0, 1], got {value}")]
    RateOutOfRange { name: &'static str, value: f32 },
    #[display("elite count {elite_count} exceeds population size {population_size}")]
    TooManyElites {
        elite_count: usize,
        population_size: usize,
    },
    #[display("tournament size must be greater than zero")]
    EmptyTournament,
}

impl EvolutionParams {
    /// Checks every tunable, returning the first violation found.
    ///
    /// # Examples
    ///
    /// ```
    /// use evodoku_evolution::params::{EvolutionParams, ParamsError};
    ///
    /// assert!(EvolutionParams::default().validate().is_ok());
    ///
    /// let params = EvolutionParams {
    ///     mutation_rate: 1.5,
    ///     ..EvolutionParams::default()
    /// };
    /// assert!(matches!(
    ///     params.validate(),
    ///     Err(ParamsError::RateOutOfRange { name: "mutation rate", .. })
    /// ));
    /// ```
    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.population_size == 0 {
            return Err(ParamsError::EmptyPopulation);
        }
        if self.max_generations == 0 {
            return Err(ParamsError::NoGenerations);
        }
        check_rate("mutation rate", self.mutation_rate)?;
        check_rate("crossover rate", self.crossover_rate)?;
        if self.elite_count > self.population_size {
            return Err(ParamsError::TooManyElites {
                elite_count: self.elite_count,
                population_size: self.population_size,
            });
        }
        if let Selection::Tournament { size: 0 } = self.selection {
            return Err(ParamsError::EmptyTournament);
        }
        Ok(())
    }
}

fn check_rate(name: &'static str, value: f32) -> Result<(), ParamsError> {
    // NaN fails the range check as well
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ParamsError::RateOutOfRange { name, value })
    }
}
