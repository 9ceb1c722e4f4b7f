//! Fitness-biased parent selection.
//!
//! Every policy here gives fitter individuals a higher chance of
//! reproducing; they differ in how strong that bias is.
//!
//! - **Roulette** - probability proportional to linearly scaled fitness.
//!   Scaling maps the mean fitness onto itself and the best fitness onto
//!   [`SCALING_MULTIPLIER`] times the mean, so pressure survives even when
//!   raw values are packed closely together late in a run.
//! - **Rank** - linear ranking. Pressure depends only on the order of
//!   individuals, not on the spread of their fitness values. The default.
//! - **Tournament** - draw `size` individuals and keep the fittest. Larger
//!   tournaments mean stronger pressure.

use rand::{
    Rng,
    distr::{Distribution as _, weighted::WeightedIndex},
    seq::IndexedRandom,
};
use serde::Serialize;

use crate::population::Individual;

/// Expected number of copies of the best individual, relative to an average
/// one, under roulette selection.
pub const SCALING_MULTIPLIER: f64 = 1.2;

/// Parent selection policy.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Selection {
    /// Fitness-proportionate selection over linearly scaled fitness.
    /// Negative and non-finite fitness counts as zero.
    #[display("roulette")]
    Roulette,
    /// Linear ranking over the fitness-sorted population.
    #[default]
    #[display("rank")]
    Rank,
    /// Best of `size` individuals drawn uniformly without replacement.
    #[display("tournament(size={size})")]
    Tournament { size: usize },
}

impl Selection {
    /// Prepares a sampler over one evaluated generation.
    ///
    /// `individuals` must be sorted by fitness, best first; weight tables
    /// are built once here and reused for every draw of the generation.
    #[must_use]
    pub fn sampler<'a, G>(&self, individuals: &'a [Individual<G>]) -> ParentSampler<'a, G> {
        let kind = match *self {
            Selection::Roulette => {
                let raw: Vec<f64> = individuals
                    .iter()
                    .map(|ind| f64::from(ind.fitness()))
                    .map(|f| if f.is_finite() { f.max(0.0) } else { 0.0 })
                    .collect();
                weighted_or_uniform(linear_scaling(&raw, SCALING_MULTIPLIER))
            }
            Selection::Rank => {
                let n = individuals.len();
                #[expect(clippy::cast_precision_loss)]
                let weights = (0..n).map(move |rank| (n - rank) as f64);
                weighted_or_uniform(weights)
            }
            Selection::Tournament { size } => SamplerKind::Tournament(size),
        };
        ParentSampler { individuals, kind }
    }
}

/// Goldberg's linear fitness scaling `f' = a * f + b`.
///
/// The mean is preserved and the maximum becomes `multiplier` times the
/// mean. When that would push the minimum below zero, the coefficients are
/// chosen to map the minimum to zero instead. Identical values all get
/// weight 1.
fn linear_scaling(raw: &[f64], multiplier: f64) -> Vec<f64> {
    if raw.is_empty() {
        return Vec::new();
    }
    let (min, max, sum) = raw.iter().fold(
        (f64::INFINITY, f64::NEG_INFINITY, 0.0),
        |(min, max, sum), &f| (min.min(f), max.max(f), sum + f),
    );
    #[expect(clippy::cast_precision_loss)]
    let avg = sum / raw.len() as f64;
    if max <= avg {
        return vec![1.0; raw.len()];
    }

    let (a, b) = if min > (multiplier * avg - max) / (multiplier - 1.0) {
        let delta = max - avg;
        (
            (multiplier - 1.0) * avg / delta,
            avg * (max - multiplier * avg) / delta,
        )
    } else {
        let delta = avg - min;
        (avg / delta, -min * avg / delta)
    };
    raw.iter().map(|&f| (a * f + b).max(0.0)).collect()
}

fn weighted_or_uniform<I>(weights: I) -> SamplerKind
where
    I: IntoIterator<Item = f64>,
{
    // all-zero weights fall back to uniform mating
    match WeightedIndex::new(weights) {
        Ok(index) => SamplerKind::Weighted(index),
        Err(_) => SamplerKind::Uniform,
    }
}

#[derive(Debug, Clone)]
enum SamplerKind {
    Weighted(WeightedIndex<f64>),
    Uniform,
    Tournament(usize),
}

/// Draws parents from one generation according to a [`Selection`] policy.
#[derive(Debug, Clone)]
pub struct ParentSampler<'a, G> {
    individuals: &'a [Individual<G>],
    kind: SamplerKind,
}

impl<'a, G> ParentSampler<'a, G> {
    /// Draws one parent. Returns `None` only for an empty generation.
    pub fn sample<R>(&self, rng: &mut R) -> Option<&'a Individual<G>>
    where
        R: Rng + ?Sized,
    {
        match &self.kind {
            SamplerKind::Weighted(index) => self.individuals.get(index.sample(rng)),
            SamplerKind::Uniform => self.individuals.choose(rng),
            SamplerKind::Tournament(size) => tournament_select(self.individuals, *size, rng),
        }
    }
}

/// Selects an individual using tournament selection.
///
/// Randomly selects `tournament_size` individuals and returns the one with
/// the highest fitness.
fn tournament_select<'a, G, R>(
    population: &'a [Individual<G>],
    tournament_size: usize,
    rng: &mut R,
) -> Option<&'a Individual<G>>
where
    R: Rng + ?Sized,
{
    population
        .choose_multiple(rng, tournament_size.max(1))
        .max_by(|a, b| a.rank_fitness().total_cmp(&b.rank_fitness()))
}
