//! Generational driver: the evolutionary loop as an explicit state machine.
//!
//! ```text
//! Initializing -> Evaluating -> (Reproducing -> Evaluating)* -> Terminated
//! ```
//!
//! - **Initializing** - build `population_size` individuals with
//!   [`Problem::initialize`].
//! - **Evaluating** - score every individual, update [`RunStatistics`], then
//!   check for termination.
//! - **Reproducing** - carry the elites over unchanged, then fill the rest of
//!   the next generation by selecting parents, recombining them with
//!   probability `crossover_rate` (cloning them otherwise), and mutating every
//!   child. Selection, recombination and mutation are interleaved per mating
//!   event, so they share one phase.
//! - **Terminated** - the problem reports itself solved, or `max_generations`
//!   generations have been evaluated, whichever comes first.
//!
//! The initial population counts as the first evaluated generation, so a run
//! never evaluates more than `max_generations` generations.

use std::{iter, mem};

use rand::Rng;

use crate::{
    params::{EvolutionParams, ParamsError},
    population::{Individual, Population},
    problem::Problem,
    statistics::{BreedingCounts, RunStatistics},
};

/// Why a run stopped.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, derive_more::Display, derive_more::IsVariant,
)]
#[serde(rename_all = "snake_case")]
pub enum TerminationReason {
    /// [`Problem::is_solved`] returned `true`.
    #[display("fitness threshold reached")]
    ProblemSolved,
    /// The generation cap was hit first.
    #[display("generation limit reached")]
    GenerationLimit,
}

/// Current state of a [`GeneticAlgorithm`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Phase {
    Initializing,
    Evaluating,
    Reproducing,
    Terminated(TerminationReason),
}

/// Final result of a run.
#[derive(Debug, Clone)]
pub struct Outcome<G> {
    /// Best individual seen over the whole run.
    pub best: Individual<G>,
    /// Number of evaluated generations.
    pub generations: usize,
    pub reason: TerminationReason,
    pub statistics: RunStatistics<G>,
}

/// A generational genetic algorithm over a [`Problem`].
///
/// # Example
///
/// ```
/// use evodoku_evolution::{
///     EvolutionParams, GeneticAlgorithm, Problem, RunStatistics, Selection,
/// };
/// use rand::{Rng, SeedableRng as _};
///
/// /// Maximise the number of set bits.
/// struct CountOnes;
///
/// impl Problem for CountOnes {
///     type Genome = [bool; 16];
///
///     fn initialize<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::Genome {
///         std::array::from_fn(|_| rng.random_bool(0.5))
///     }
///
///     fn evaluate(&self, genome: &Self::Genome) -> f32 {
///         genome.iter().filter(|&&bit| bit).count() as f32
///     }
///
///     fn mutate<R: Rng + ?Sized>(&self, genome: &mut Self::Genome, rate: f32, rng: &mut R) -> usize {
///         let mut flips = 0;
///         for bit in genome {
///             if rng.random_bool(rate.into()) {
///                 *bit = !*bit;
///                 flips += 1;
///             }
///         }
///         flips
///     }
///
///     fn crossover<R: Rng + ?Sized>(
///         &self,
///         parent1: &Self::Genome,
///         parent2: &Self::Genome,
///         child1: Option<&mut Self::Genome>,
///         child2: Option<&mut Self::Genome>,
///         rng: &mut R,
///     ) -> usize {
///         let cut = rng.random_range(0..=16);
///         let mut produced = 0;
///         for (child, head, tail) in [(child1, parent1, parent2), (child2, parent2, parent1)] {
///             if let Some(child) = child {
///                 child[..cut].copy_from_slice(&head[..cut]);
///                 child[cut..].copy_from_slice(&tail[cut..]);
///                 produced += 1;
///             }
///         }
///         produced
///     }
///
///     fn is_solved(&self, stats: &RunStatistics<Self::Genome>) -> bool {
///         stats.max_ever() >= 16.0
///     }
/// }
///
/// let params = EvolutionParams {
///     population_size: 30,
///     max_generations: 200,
///     selection: Selection::Tournament { size: 3 },
///     ..EvolutionParams::default()
/// };
/// let ga = GeneticAlgorithm::new(CountOnes, params, rand_pcg::Pcg64::seed_from_u64(7))?;
/// let outcome = ga.run();
/// assert!(outcome.generations <= 200);
/// assert!(outcome.best.fitness() <= 16.0);
/// # Ok::<(), evodoku_evolution::ParamsError>(())
/// ```
pub struct GeneticAlgorithm<P, R>
where
    P: Problem,
{
    problem: P,
    params: EvolutionParams,
    rng: R,
    population: Population<P::Genome>,
    statistics: RunStatistics<P::Genome>,
    pending_counts: BreedingCounts,
    phase: Phase,
}

impl<P, R> GeneticAlgorithm<P, R>
where
    P: Problem,
    R: Rng,
{
    /// Creates a driver in the [`Phase::Initializing`] state.
    ///
    /// Fails if `params` do not pass [`EvolutionParams::validate`].
    pub fn new(problem: P, params: EvolutionParams, rng: R) -> Result<Self, ParamsError> {
        params.validate()?;
        Ok(Self {
            problem,
            params,
            rng,
            population: Population::from_individuals(Vec::new()),
            statistics: RunStatistics::default(),
            pending_counts: BreedingCounts::default(),
            phase: Phase::Initializing,
        })
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn params(&self) -> &EvolutionParams {
        &self.params
    }

    #[must_use]
    pub fn problem(&self) -> &P {
        &self.problem
    }

    #[must_use]
    pub fn population(&self) -> &Population<P::Genome> {
        &self.population
    }

    #[must_use]
    pub fn statistics(&self) -> &RunStatistics<P::Genome> {
        &self.statistics
    }

    /// Executes the current phase and moves to the next one.
    ///
    /// Calling this on a terminated driver does nothing.
    pub fn step(&mut self) -> Phase {
        self.phase = match self.phase {
            Phase::Initializing => {
                self.population =
                    Population::random(&self.problem, self.params.population_size, &mut self.rng);
                Phase::Evaluating
            }
            Phase::Evaluating => self.evaluate(),
            Phase::Reproducing => {
                self.reproduce();
                Phase::Evaluating
            }
            terminated @ Phase::Terminated(_) => terminated,
        };
        self.phase
    }

    /// Runs until termination and returns the best individual ever seen.
    ///
    /// # Panics
    ///
    /// Panics if the population is empty, which validated parameters rule out.
    #[must_use]
    pub fn run(mut self) -> Outcome<P::Genome> {
        let reason = loop {
            if let Phase::Terminated(reason) = self.step() {
                break reason;
            }
        };
        let generations = self.statistics.generation();
        let best = self
            .statistics
            .best_individual()
            .or_else(|| self.population.best())
            .cloned()
            .expect("a validated population holds at least one individual");
        Outcome {
            best,
            generations,
            reason,
            statistics: self.statistics,
        }
    }

    fn evaluate(&mut self) -> Phase {
        self.population.evaluate_fitness(&self.problem);
        self.statistics
            .record(&self.population, mem::take(&mut self.pending_counts));

        if let Some(summary) = self.statistics.latest() {
            log::debug!(
                "generation {:>5}: max {:.1} mean {:.2} min {:.1} (best ever {:.1}, {} mutations, {} crossovers)",
                summary.generation,
                summary.max,
                summary.mean,
                summary.min,
                summary.best_ever,
                summary.mutations,
                summary.crossovers,
            );
        }

        let reason = if self.problem.is_solved(&self.statistics) {
            Some(TerminationReason::ProblemSolved)
        } else if self.statistics.generation() >= self.params.max_generations {
            Some(TerminationReason::GenerationLimit)
        } else {
            None
        };

        match reason {
            Some(reason) => {
                log::info!(
                    "terminated after {} generations: {reason} (best fitness {:.1})",
                    self.statistics.generation(),
                    self.statistics.max_ever(),
                );
                Phase::Terminated(reason)
            }
            None => Phase::Reproducing,
        }
    }

    /// Breeds the next generation from the current, evaluated one.
    fn reproduce(&mut self) {
        let Self {
            problem,
            params,
            rng,
            population,
            ..
        } = self;
        debug_assert!(population.is_sorted());

        let target = params.population_size;
        let mut counts = BreedingCounts::default();
        let mut next = Vec::with_capacity(target);

        // elite selection
        next.extend(
            population
                .individuals()
                .iter()
                .take(params.elite_count)
                .cloned()
                .map(|ind| Individual::unevaluated(ind.into_genome())),
        );

        let sampler = params.selection.sampler(population.individuals());
        while next.len() < target {
            let (Some(mom), Some(dad)) = (sampler.sample(rng), sampler.sample(rng)) else {
                break;
            };

            // the second child is only bred when there is room for it
            let mut child1 = mom.genome().clone();
            let mut child2 = (target - next.len() >= 2).then(|| dad.genome().clone());

            if rng.random_bool(params.crossover_rate.into()) {
                problem.crossover(
                    mom.genome(),
                    dad.genome(),
                    Some(&mut child1),
                    child2.as_mut(),
                    rng,
                );
                counts.crossovers += 1;
            }

            for mut child in iter::once(child1).chain(child2) {
                counts.mutations += problem.mutate(&mut child, params.mutation_rate, rng);
                next.push(Individual::unevaluated(child));
            }
        }

        self.population = Population::from_individuals(next);
        self.pending_counts = counts;
    }
}
