//! Fitness evaluation: how close a board is to a solved Sudoku.
//!
//! Fitness counts distinct digits. Each column contributes the number of
//! different digits it holds (at most 9), and so does each 3×3 box. Rows are
//! not scored: every genome built by this crate's operators has permutation
//! rows, so they would add a constant 81.
//!
//! ```text
//! fitness = Σ distinct(column) + Σ distinct(box)    (0 ..= 162)
//! ```
//!
//! For a board with permutation rows, 162 is reached exactly when the board
//! is a valid solved Sudoku.

use crate::core::{Genome, Grid, SIZE};

/// Fitness of a solved board.
pub const MAX_FITNESS: u32 = 162;

/// Scores a genome. Deterministic and free of side effects.
///
/// Digits outside 1 to 9 are counted like any other value; they never occur
/// in genomes produced by the operators.
///
/// # Examples
///
/// ```
/// use evodoku_sudoku::{Genome, fitness};
///
/// // nine identical rows: 1 distinct digit per column, 3 per box
/// let genome: Genome = "123456789".repeat(9).parse().unwrap();
/// assert_eq!(fitness::fitness(&genome), 9 + 27);
/// ```
#[must_use]
pub fn fitness(genome: &Genome) -> u32 {
    let grid = genome.to_grid();
    column_score(&grid) + box_score(&grid)
}

/// Sum over all columns of the number of distinct digits in the column.
#[must_use]
pub fn column_score(grid: &Grid) -> u32 {
    (0..SIZE).map(|col| count_distinct(grid.column(col))).sum()
}

/// Sum over all boxes of the number of distinct digits in the box.
#[must_use]
pub fn box_score(grid: &Grid) -> u32 {
    (0..SIZE).map(|b| count_distinct(grid.box_cells(b))).sum()
}

/// Returns `true` if every row is a permutation and fitness is maximal.
#[must_use]
pub fn is_solved(genome: &Genome) -> bool {
    genome.check_rows().is_ok() && fitness(genome) == MAX_FITNESS
}

fn count_distinct<I>(digits: I) -> u32
where
    I: IntoIterator<Item = u8>,
{
    let mut seen = [false; 256];
    let mut count = 0;
    for digit in digits {
        let slot = &mut seen[usize::from(digit)];
        if !*slot {
            *slot = true;
            count += 1;
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use rand::{Rng as _, SeedableRng as _};
    use rand_pcg::Pcg64;

    use super::*;
    use crate::{
        core::{GENOME_LEN, index},
        operators,
        testing::{SOLVED, identical_rows},
    };

    #[test]
    fn test_solved_board_scores_max() {
        let genome: Genome = SOLVED.parse().unwrap();
        let grid = genome.to_grid();
        assert_eq!(column_score(&grid), 81);
        assert_eq!(box_score(&grid), 81);
        assert_eq!(fitness(&genome), MAX_FITNESS);
        assert!(is_solved(&genome));
    }

    #[test]
    fn test_identical_rows_score_36() {
        let genome = identical_rows();
        let grid = genome.to_grid();
        assert_eq!(column_score(&grid), 9);
        assert_eq!(box_score(&grid), 27);
        assert_eq!(fitness(&genome), 36);
        assert!(!is_solved(&genome));
    }

    #[test]
    fn test_swap_within_row_breaks_solution() {
        let mut cells = *SOLVED.parse::<Genome>().unwrap().cells();
        cells.swap(index(0, 0), index(0, 4));
        let genome = Genome::from_cells(cells);
        assert!(genome.check_rows().is_ok());
        assert!(fitness(&genome) < MAX_FITNESS);
        assert!(!is_solved(&genome));
    }

    #[test]
    fn test_max_fitness_with_broken_rows_is_not_solved() {
        // swapping two cells of one column inside one box keeps every column
        // and box complete but duplicates a digit in both rows
        let mut cells = *SOLVED.parse::<Genome>().unwrap().cells();
        cells.swap(index(0, 0), index(1, 0));
        let genome = Genome::from_cells(cells);
        assert!(genome.check_rows().is_err());
        assert_eq!(fitness(&genome), MAX_FITNESS);
        assert!(!is_solved(&genome));
    }

    #[test]
    fn test_counts_distinct_not_occurrences() {
        assert_eq!(count_distinct([1, 1, 1, 2, 2, 3]), 3);
        assert_eq!(count_distinct([]), 0);
        // out-of-range values are distinct values of their own
        assert_eq!(count_distinct([0, 10, 255, 0, 1]), 4);
    }

    #[test]
    fn test_fitness_is_bounded_for_arbitrary_digits() {
        let mut rng = Pcg64::seed_from_u64(11);
        for _ in 0..500 {
            let mut cells = [0; GENOME_LEN];
            for cell in &mut cells {
                *cell = rng.random_range(1..=9);
            }
            let score = fitness(&Genome::from_cells(cells));
            // every column and box holds at least one digit
            assert!((18..=MAX_FITNESS).contains(&score), "score {score}");
        }
    }

    #[test]
    fn test_fitness_is_deterministic() {
        let mut rng = Pcg64::seed_from_u64(12);
        for _ in 0..50 {
            let genome = operators::initialize(&mut rng);
            let copy = genome;
            assert_eq!(fitness(&genome), fitness(&copy));
        }
    }

    #[test]
    fn test_max_fitness_only_for_valid_boards() {
        let mut rng = Pcg64::seed_from_u64(13);
        for _ in 0..1000 {
            let genome = operators::initialize(&mut rng);
            let score = fitness(&genome);
            assert!(score <= MAX_FITNESS);
            assert_eq!(score == MAX_FITNESS, is_solved(&genome));
        }
    }
}
