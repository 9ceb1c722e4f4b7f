//! Sudoku generation as a [`Problem`] for the generic driver.

use evodoku_evolution::{Problem, RunStatistics};
use rand::Rng;

use crate::{core::Genome, fitness, operators};

/// Fitness at which a run is considered solved unless configured otherwise.
///
/// One below [`fitness::MAX_FITNESS`].
pub const DEFAULT_EXPECTED_FITNESS: f32 = 161.0;

/// Generates a complete 9×9 Sudoku board from scratch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SudokuProblem {
    expected_fitness: f32,
}

impl Default for SudokuProblem {
    fn default() -> Self {
        Self::new(DEFAULT_EXPECTED_FITNESS)
    }
}

impl SudokuProblem {
    /// Creates a problem that counts as solved once the best-ever fitness
    /// reaches `expected_fitness`.
    #[must_use]
    pub fn new(expected_fitness: f32) -> Self {
        Self { expected_fitness }
    }

    #[must_use]
    pub fn expected_fitness(&self) -> f32 {
        self.expected_fitness
    }
}

impl Problem for SudokuProblem {
    type Genome = Genome;

    fn initialize<R>(&self, rng: &mut R) -> Genome
    where
        R: Rng + ?Sized,
    {
        operators::initialize(rng)
    }

    #[expect(clippy::cast_precision_loss)]
    fn evaluate(&self, genome: &Genome) -> f32 {
        fitness::fitness(genome) as f32
    }

    fn mutate<R>(&self, genome: &mut Genome, rate: f32, rng: &mut R) -> usize
    where
        R: Rng + ?Sized,
    {
        operators::mutate(genome, rate, rng)
    }

    fn crossover<R>(
        &self,
        parent1: &Genome,
        parent2: &Genome,
        child1: Option<&mut Genome>,
        child2: Option<&mut Genome>,
        rng: &mut R,
    ) -> usize
    where
        R: Rng + ?Sized,
    {
        operators::crossover(parent1, parent2, child1, child2, rng)
    }

    fn is_solved(&self, stats: &RunStatistics<Genome>) -> bool {
        stats.max_ever() >= self.expected_fitness
    }
}
