use std::{
    io::{self, Write as _},
    path::PathBuf,
    time::Instant,
};

use anyhow::Context as _;
use chrono::Utc;
use evodoku_evolution::{
    EvolutionParams, GeneticAlgorithm, Selection,
    params::{
        DEFAULT_CROSSOVER_RATE, DEFAULT_ELITE_COUNT, DEFAULT_MAX_GENERATIONS,
        DEFAULT_MUTATION_RATE, DEFAULT_POPULATION_SIZE,
    },
};
use evodoku_sudoku::{SudokuProblem, fitness, problem::DEFAULT_EXPECTED_FITNESS};
use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg64;

use crate::{render::BoardDisplay, schema::report::RunReport, util};

const DEFAULT_TOURNAMENT_SIZE: usize = 2;

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, derive_more::FromStr)]
pub enum SelectionKind {
    Roulette,
    #[default]
    Rank,
    Tournament,
}

#[derive(Debug, Clone, PartialEq, clap::Args)]
pub(crate) struct GenerateArg {
    /// Number of individuals per generation
    #[arg(long, default_value_t = DEFAULT_POPULATION_SIZE)]
    population: usize,
    /// Maximum number of generations to evaluate
    #[arg(long, default_value_t = DEFAULT_MAX_GENERATIONS)]
    generations: usize,
    /// Per-gene mutation probability
    #[arg(long, default_value_t = DEFAULT_MUTATION_RATE)]
    mutation_rate: f32,
    /// Per-mating crossover probability
    #[arg(long, default_value_t = DEFAULT_CROSSOVER_RATE)]
    crossover_rate: f32,
    /// Best-ever fitness at which the search stops (a solved board scores 162)
    #[arg(long, default_value_t = DEFAULT_EXPECTED_FITNESS)]
    expected_fitness: f32,
    /// Number of best individuals copied unchanged into the next generation
    #[arg(long, default_value_t = DEFAULT_ELITE_COUNT)]
    elite_count: usize,
    /// Parent selection policy (roulette, rank, tournament)
    #[arg(long, default_value = "rank")]
    selection: SelectionKind,
    /// Tournament size for tournament selection
    #[arg(long, default_value_t = DEFAULT_TOURNAMENT_SIZE)]
    tournament_size: usize,
    /// Random seed (drawn from the OS when omitted)
    #[arg(long)]
    seed: Option<u64>,
    /// Write a JSON run report to this path (`-` for stdout)
    #[arg(long)]
    report: Option<PathBuf>,
}

impl Default for GenerateArg {
    fn default() -> Self {
        Self {
            population: DEFAULT_POPULATION_SIZE,
            generations: DEFAULT_MAX_GENERATIONS,
            mutation_rate: DEFAULT_MUTATION_RATE,
            crossover_rate: DEFAULT_CROSSOVER_RATE,
            expected_fitness: DEFAULT_EXPECTED_FITNESS,
            elite_count: DEFAULT_ELITE_COUNT,
            selection: SelectionKind::default(),
            tournament_size: DEFAULT_TOURNAMENT_SIZE,
            seed: None,
            report: None,
        }
    }
}

impl GenerateArg {
    fn evolution_params(&self) -> EvolutionParams {
        let selection = match self.selection {
            SelectionKind::Roulette => Selection::Roulette,
            SelectionKind::Rank => Selection::Rank,
            SelectionKind::Tournament => Selection::Tournament {
                size: self.tournament_size,
            },
        };
        EvolutionParams {
            population_size: self.population,
            max_generations: self.generations,
            mutation_rate: self.mutation_rate,
            crossover_rate: self.crossover_rate,
            elite_count: self.elite_count,
            selection,
        }
    }
}

pub(crate) fn run(arg: &GenerateArg) -> anyhow::Result<()> {
    let start = Instant::now();

    let params = arg.evolution_params();
    anyhow::ensure!(
        !arg.expected_fitness.is_nan(),
        "expected fitness must be a number"
    );
    let problem = SudokuProblem::new(arg.expected_fitness);
    let seed = arg.seed.unwrap_or_else(|| rand::rng().random());
    let ga = GeneticAlgorithm::new(problem, params.clone(), Pcg64::seed_from_u64(seed))
        .context("Invalid evolution parameters")?;

    log::info!(
        "evolving: population {}, max generations {}, mutation rate {}, crossover rate {}, {} selection, seed {seed}",
        params.population_size,
        params.max_generations,
        params.mutation_rate,
        params.crossover_rate,
        params.selection,
    );

    let outcome = ga.run();
    let best = *outcome.best.genome();
    best.check_rows()
        .context("Best genome broke the row permutation invariant")?;
    let elapsed = start.elapsed();

    {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "Fitness: {}", outcome.best.fitness())?;
        write!(stdout, "{}", BoardDisplay::new(&best.to_grid()))?;
        writeln!(stdout, "Elapsed: {} ms", elapsed.as_millis())?;
        stdout.flush()?;
    }

    if let Some(path) = &arg.report {
        let report = RunReport {
            finished_at: Utc::now(),
            seed,
            params,
            expected_fitness: arg.expected_fitness,
            generations: outcome.generations,
            termination: outcome.reason,
            fitness: outcome.best.fitness(),
            solved: fitness::is_solved(&best),
            board: best,
            elapsed_ms: u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
            history: outcome.statistics.history().to_vec(),
        };
        util::save_json(&report, path)?;
        log::info!("report written to {}", path.display());
    }

    Ok(())
}
