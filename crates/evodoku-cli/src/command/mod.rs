use clap::{Parser, Subcommand};

use self::{generate::GenerateArg, score::ScoreArg};

mod generate;
mod score;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Evolve a complete Sudoku board (the default)
    Generate(#[clap(flatten)] GenerateArg),
    /// Score a given board
    Score(#[clap(flatten)] ScoreArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode.unwrap_or(Mode::Generate(GenerateArg::default())) {
        Mode::Generate(arg) => generate::run(&arg)?,
        Mode::Score(arg) => score::run(&arg)?,
    }
    Ok(())
}
