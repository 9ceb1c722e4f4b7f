//! The strategy interface between the generic driver and a concrete domain.

use rand::Rng;

use crate::statistics::RunStatistics;

/// A search problem the genetic algorithm can evolve solutions for.
///
/// The driver knows nothing about what a genome means; everything
/// domain-specific is provided through this trait. Any structural invariant
/// of the genome (for example "every row is a permutation") is a contract
/// between [`initialize`](Self::initialize), [`mutate`](Self::mutate) and
/// [`crossover`](Self::crossover): each of them must preserve it, and the
/// driver never re-checks it.
///
/// Randomness is always passed in explicitly so that a run is reproducible
/// from its seed.
pub trait Problem: Sync {
    /// Encoded candidate solution.
    type Genome: Clone + Send + Sync;

    /// Creates a fresh random genome for the initial population.
    fn initialize<R>(&self, rng: &mut R) -> Self::Genome
    where
        R: Rng + ?Sized;

    /// Scores a genome. Higher is better.
    ///
    /// Must be deterministic: the driver evaluates individuals on several
    /// threads at once and relies on equal genomes scoring equal.
    fn evaluate(&self, genome: &Self::Genome) -> f32;

    /// Perturbs a genome in place, each gene with probability `rate`.
    ///
    /// Returns the number of mutation events attempted.
    fn mutate<R>(&self, genome: &mut Self::Genome, rate: f32, rng: &mut R) -> usize
    where
        R: Rng + ?Sized;

    /// Recombines two parents into up to two child slots.
    ///
    /// An absent slot means that child is not wanted. Returns the number of
    /// children actually written (0, 1 or 2).
    fn crossover<R>(
        &self,
        parent1: &Self::Genome,
        parent2: &Self::Genome,
        child1: Option<&mut Self::Genome>,
        child2: Option<&mut Self::Genome>,
        rng: &mut R,
    ) -> usize
    where
        R: Rng + ?Sized;

    /// Returns `true` once the run has found a good enough solution.
    ///
    /// Checked after every evaluation. The driver's generation cap applies
    /// regardless of what this returns.
    fn is_solved(&self, stats: &RunStatistics<Self::Genome>) -> bool {
        let _ = stats;
        false
    }
}
