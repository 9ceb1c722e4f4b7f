//! Evolutionary generation of complete 9×9 Sudoku boards.
//!
//! This crate supplies the Sudoku side of the search; the generic loop lives
//! in `evodoku-evolution`.
//!
//! # Representation
//!
//! A [`Genome`] is 81 digits in row-major order; [`Grid`] is its 9×9 view.
//! Every genome built by the [`operators`] keeps each row a permutation of
//! 1 to 9, so a candidate is always "row-valid" and the search only has to
//! fix columns and boxes.
//!
//! # Modules
//!
//! - [`core`] - genome, grid and the index mapping between them
//! - [`fitness`] - distinct-digit counting over columns and boxes (max 162)
//! - [`operators`] - row-shuffle initializer, in-row swap mutation, row-cut crossover
//! - [`problem`] - [`SudokuProblem`], the strategy plugged into the driver
//!
//! # Example
//!
//! ```
//! use evodoku_evolution::{EvolutionParams, GeneticAlgorithm};
//! use evodoku_sudoku::SudokuProblem;
//! use rand::SeedableRng as _;
//!
//! let params = EvolutionParams {
//!     population_size: 50,
//!     max_generations: 20,
//!     ..EvolutionParams::default()
//! };
//! let rng = rand_pcg::Pcg64::seed_from_u64(1);
//! let outcome = GeneticAlgorithm::new(SudokuProblem::default(), params, rng)
//!     .unwrap()
//!     .run();
//! assert!(outcome.generations <= 20);
//! assert!(outcome.best.genome().check_rows().is_ok());
//! ```

pub use self::{
    core::{Genome, Grid, ParseGenomeError, RowPermutationError},
    problem::SudokuProblem,
};

pub mod core;
pub mod fitness;
pub mod operators;
pub mod problem;

#[cfg(test)]
mod testing;
