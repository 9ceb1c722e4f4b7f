use std::io::{self, Write as _};

use anyhow::Context as _;
use evodoku_sudoku::{
    Genome,
    fitness::{self, MAX_FITNESS},
};

use crate::{render::BoardDisplay, util};

#[derive(Default, Debug, Clone, PartialEq, Eq, clap::Args)]
pub(crate) struct ScoreArg {
    /// Board as 81 digits in row-major order (read from stdin when omitted)
    ///
    /// Whitespace and the separators `|`, `-`, `+`, `/` are ignored, so the
    /// output of `generate` can be fed back in.
    board: Option<String>,
}

/// Scores of a single board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Scorecard {
    columns: u32,
    boxes: u32,
    rows_valid: bool,
    solved: bool,
}

impl Scorecard {
    fn new(genome: &Genome) -> Self {
        let grid = genome.to_grid();
        Self {
            columns: fitness::column_score(&grid),
            boxes: fitness::box_score(&grid),
            rows_valid: genome.check_rows().is_ok(),
            solved: fitness::is_solved(genome),
        }
    }

    fn fitness(&self) -> u32 {
        self.columns + self.boxes
    }
}

pub(crate) fn run(arg: &ScoreArg) -> anyhow::Result<()> {
    let text = match &arg.board {
        Some(board) => board.clone(),
        None => util::read_stdin()?,
    };
    let genome: Genome = text.parse().context("Failed to parse board")?;
    if let Err(err) = genome.check_rows() {
        log::warn!("{err}");
    }
    let card = Scorecard::new(&genome);

    let mut stdout = io::stdout().lock();
    write!(stdout, "{}", BoardDisplay::new(&genome.to_grid()))?;
    writeln!(stdout, "Fitness: {} / {MAX_FITNESS}", card.fitness())?;
    writeln!(stdout, "  columns: {}", card.columns)?;
    writeln!(stdout, "  boxes:   {}", card.boxes)?;
    writeln!(stdout, "Rows valid: {}", card.rows_valid)?;
    writeln!(stdout, "Solved: {}", card.solved)?;
    stdout.flush()?;
    Ok(())
}
