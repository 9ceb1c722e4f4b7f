use std::{num::NonZero, thread};

use rand::Rng;

use crate::problem::Problem;

/// A single candidate solution together with its fitness score.
#[derive(Debug, Clone, PartialEq)]
pub struct Individual<G> {
    genome: G,
    fitness: f32,
}

impl<G> Individual<G> {
    /// Wraps a genome that has not been scored yet.
    ///
    /// Its fitness reads as [`f32::MIN`] until the next evaluation.
    #[must_use]
    pub fn unevaluated(genome: G) -> Self {
        Self {
            genome,
            fitness: f32::MIN,
        }
    }

    #[cfg(test)]
    pub(crate) fn scored(genome: G, fitness: f32) -> Self {
        Self { genome, fitness }
    }

    #[must_use]
    pub fn genome(&self) -> &G {
        &self.genome
    }

    #[must_use]
    pub fn fitness(&self) -> f32 {
        self.fitness
    }

    #[must_use]
    pub fn into_genome(self) -> G {
        self.genome
    }

    /// Fitness used for ordering individuals. NaN ranks below every number.
    pub(crate) fn rank_fitness(&self) -> f32 {
        if self.fitness.is_nan() {
            f32::NEG_INFINITY
        } else {
            self.fitness
        }
    }
}

/// A fixed-size collection of individuals making up one generation.
///
/// After [`evaluate_fitness`](Self::evaluate_fitness) the individuals are
/// sorted by fitness, best first. Selection and elitism rely on that order.
#[derive(Debug, Clone)]
pub struct Population<G> {
    individuals: Vec<Individual<G>>,
}

impl<G> Population<G> {
    /// Creates a population of `count` freshly initialized individuals.
    pub fn random<P, R>(problem: &P, count: usize, rng: &mut R) -> Self
    where
        P: Problem<Genome = G>,
        R: Rng + ?Sized,
    {
        let individuals = (0..count)
            .map(|_| Individual::unevaluated(problem.initialize(rng)))
            .collect();
        Self { individuals }
    }

    pub(crate) fn from_individuals(individuals: Vec<Individual<G>>) -> Self {
        Self { individuals }
    }

    #[must_use]
    pub fn individuals(&self) -> &[Individual<G>] {
        &self.individuals
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Returns the best individual of the last evaluation.
    #[must_use]
    pub fn best(&self) -> Option<&Individual<G>> {
        self.individuals.first()
    }

    #[must_use]
    pub fn is_sorted(&self) -> bool {
        self.individuals
            .is_sorted_by(|a, b| a.rank_fitness() >= b.rank_fitness())
    }

    /// Scores every individual, then sorts the population best first.
    ///
    /// Individuals are split into one chunk per available core and scored on
    /// scoped threads. Evaluation draws no randomness, so the outcome is the
    /// same as scoring them one by one.
    pub fn evaluate_fitness<P>(&mut self, problem: &P)
    where
        P: Problem<Genome = G>,
        G: Send + Sync,
    {
        let workers = thread::available_parallelism().map_or(1, NonZero::get);
        let chunk_size = self.individuals.len().div_ceil(workers).max(1);

        thread::scope(|s| {
            for chunk in self.individuals.chunks_mut(chunk_size) {
                s.spawn(move || {
                    for ind in chunk {
                        ind.fitness = problem.evaluate(&ind.genome);
                    }
                });
            }
        });

        self.sort_by_fitness();
    }

    // descending, NaN last
    fn sort_by_fitness(&mut self) {
        self.individuals
            .sort_by(|a, b| b.rank_fitness().total_cmp(&a.rank_fitness()));
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64;

    use super::*;
    use crate::problem::testing::OneMax;

    #[test]
    fn test_random_population_is_unevaluated() {
        let problem = OneMax {
            len: 16,
            target: None,
        };
        let mut rng = Pcg64::seed_from_u64(1);
        let population = Population::random(&problem, 10, &mut rng);
        assert_eq!(population.len(), 10);
        assert!(
            population
                .individuals()
                .iter()
                .all(|ind| ind.fitness() == f32::MIN && ind.genome().len() == 16)
        );
    }

    #[test]
    fn test_evaluate_fitness_scores_and_sorts() {
        let problem = OneMax {
            len: 4,
            target: None,
        };
        let genomes = [
            vec![true, false, false, false],
            vec![true, true, true, true],
            vec![false; 4],
            vec![true, true, false, false],
        ];
        let mut population = Population::from_individuals(
            genomes.iter().cloned().map(Individual::unevaluated).collect(),
        );
        population.evaluate_fitness(&problem);

        let fitness: Vec<f32> = population.individuals().iter().map(Individual::fitness).collect();
        assert_eq!(fitness, vec![4.0, 2.0, 1.0, 0.0]);
        assert!(population.is_sorted());
        assert_eq!(population.best().map(Individual::genome), Some(&genomes[1]));
    }

    #[test]
    fn test_parallel_evaluation_matches_sequential() {
        let problem = OneMax {
            len: 32,
            target: None,
        };
        let mut rng = Pcg64::seed_from_u64(7);
        let mut population = Population::random(&problem, 257, &mut rng);
        let mut expected: Vec<f32> = population
            .individuals()
            .iter()
            .map(|ind| problem.evaluate(ind.genome()))
            .collect();
        expected.sort_by(|a, b| b.total_cmp(a));

        population.evaluate_fitness(&problem);
        let actual: Vec<f32> = population.individuals().iter().map(Individual::fitness).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_nan_sorts_after_every_number() {
        let mut population = Population::from_individuals(vec![
            Individual::scored(0, f32::NAN),
            Individual::scored(1, f32::NEG_INFINITY),
            Individual::scored(2, 1.0),
            Individual::scored(3, -f32::NAN),
            Individual::scored(4, f32::MIN),
        ]);
        population.sort_by_fitness();

        assert!(population.is_sorted());
        let order: Vec<i32> = population.individuals().iter().map(|ind| *ind.genome()).collect();
        assert_eq!(&order[..2], &[2, 4]);
        assert!(population.individuals()[2..].iter().all(|ind| ind.rank_fitness() == f32::NEG_INFINITY));
    }

    #[test]
    fn test_evaluate_empty_population() {
        let problem = OneMax {
            len: 4,
            target: None,
        };
        let mut population: Population<Vec<bool>> = Population::from_individuals(vec![]);
        population.evaluate_fitness(&problem);
        assert!(population.is_empty());
        assert!(population.best().is_none());
    }
}
