//! Run statistics tracked across generations.
//!
//! [`RunStatistics`] keeps the best individual ever seen (its fitness never
//! decreases over a run) and one [`GenerationSummary`] per evaluated
//! generation. Termination predicates read it through
//! [`Problem::is_solved`](crate::problem::Problem::is_solved).

use serde::Serialize;

use crate::population::{Individual, Population};

/// Fitness distribution and operator activity of a single generation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationSummary {
    /// 1-based index of the evaluated generation.
    pub generation: usize,
    pub min: f32,
    pub max: f32,
    pub mean: f32,
    pub std_dev: f32,
    /// Best fitness seen up to and including this generation.
    pub best_ever: f32,
    /// Mutation events attempted while breeding this generation.
    pub mutations: usize,
    /// Mating events that applied crossover while breeding this generation.
    pub crossovers: usize,
}

impl GenerationSummary {
    #[expect(clippy::cast_precision_loss)]
    fn from_fitness<I>(generation: usize, best_ever: f32, fitness: I) -> Self
    where
        I: IntoIterator<Item = f32>,
    {
        let mut count = 0_usize;
        let mut sum = 0.0_f64;
        let mut sum_sq = 0.0_f64;
        let mut min = f32::INFINITY;
        let mut max = f32::NEG_INFINITY;
        for value in fitness {
            count += 1;
            sum += f64::from(value);
            sum_sq += f64::from(value).powi(2);
            min = min.min(value);
            max = max.max(value);
        }
        if count == 0 {
            return Self {
                generation,
                min: 0.0,
                max: 0.0,
                mean: 0.0,
                std_dev: 0.0,
                best_ever,
                mutations: 0,
                crossovers: 0,
            };
        }
        let n = count as f64;
        let mean = sum / n;
        let variance = (sum_sq / n - mean.powi(2)).max(0.0);
        #[expect(clippy::cast_possible_truncation)]
        let (mean, std_dev) = (mean as f32, variance.sqrt() as f32);
        Self {
            generation,
            min,
            max,
            mean,
            std_dev,
            best_ever,
            mutations: 0,
            crossovers: 0,
        }
    }
}

/// Operator activity counted while breeding one generation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BreedingCounts {
    pub mutations: usize,
    pub crossovers: usize,
}

/// Statistics accumulated over a whole run.
#[derive(Debug, Clone)]
pub struct RunStatistics<G> {
    best_ever: Option<Individual<G>>,
    history: Vec<GenerationSummary>,
}

impl<G> Default for RunStatistics<G> {
    fn default() -> Self {
        Self {
            best_ever: None,
            history: Vec::new(),
        }
    }
}

impl<G> RunStatistics<G> {
    /// Number of generations evaluated so far.
    #[must_use]
    pub fn generation(&self) -> usize {
        self.history.len()
    }

    /// Highest fitness seen so far, or [`f32::MIN`] before the first evaluation.
    #[must_use]
    pub fn max_ever(&self) -> f32 {
        self.best_ever.as_ref().map_or(f32::MIN, Individual::fitness)
    }

    /// The individual that achieved [`max_ever`](Self::max_ever).
    #[must_use]
    pub fn best_individual(&self) -> Option<&Individual<G>> {
        self.best_ever.as_ref()
    }

    #[must_use]
    pub fn history(&self) -> &[GenerationSummary] {
        &self.history
    }

    #[must_use]
    pub fn latest(&self) -> Option<&GenerationSummary> {
        self.history.last()
    }
}

impl<G> RunStatistics<G>
where
    G: Clone,
{
    /// Records a freshly evaluated generation.
    ///
    /// The first recorded generation always sets the best-ever individual,
    /// whatever its fitness. After that it is only replaced on a strict
    /// improvement, so ties keep the earliest individual that reached that
    /// fitness. NaN never counts as an improvement.
    pub fn record(&mut self, population: &Population<G>, counts: BreedingCounts) {
        let improves = |candidate: &&Individual<G>| {
            self.best_ever
                .as_ref()
                .is_none_or(|current| candidate.rank_fitness() > current.rank_fitness())
        };
        if let Some(best) = population.best().filter(improves) {
            self.best_ever = Some(best.clone());
        }

        let generation = self.history.len() + 1;
        let mut summary = GenerationSummary::from_fitness(
            generation,
            self.max_ever(),
            population.individuals().iter().map(Individual::fitness),
        );
        summary.mutations = counts.mutations;
        summary.crossovers = counts.crossovers;
        self.history.push(summary);
    }
}
