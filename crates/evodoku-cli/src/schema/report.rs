use chrono::{DateTime, Utc};
use evodoku_evolution::{EvolutionParams, GenerationSummary, TerminationReason};
use evodoku_sudoku::Genome;
use serde::Serialize;

/// Summary of one `generate` run, written with `--report`.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub finished_at: DateTime<Utc>,
    pub seed: u64,
    pub params: EvolutionParams,
    pub expected_fitness: f32,
    pub generations: usize,
    pub termination: TerminationReason,
    pub fitness: f32,
    /// Whether the board is a valid solved Sudoku
    pub solved: bool,
    pub board: Genome,
    pub elapsed_ms: u64,
    pub history: Vec<GenerationSummary>,
}
