use std::str::FromStr;

use serde::Serialize;

use super::{DIGITS, GENOME_LEN, Grid, SIZE, position};

/// A candidate board: 81 digits in row-major order.
///
/// Genomes produced by this crate's operators keep every row a permutation
/// of 1 to 9. That invariant is maintained by construction and is not
/// re-checked during a run; [`check_rows`](Self::check_rows) verifies it on
/// demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "Grid")]
pub struct Genome {
    cells: [u8; GENOME_LEN],
}

/// A row that is not a permutation of the digits 1 to 9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("row {row} is not a permutation of 1-9 (missing digit {missing})")]
pub struct RowPermutationError {
    pub row: usize,
    pub missing: u8,
}

/// Failure to read a board from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseGenomeError {
    #[display("unexpected character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },
    #[display("expected 81 digits, found {found}")]
    WrongLength { found: usize },
}

impl Genome {
    #[must_use]
    pub const fn from_cells(cells: [u8; GENOME_LEN]) -> Self {
        Self { cells }
    }

    #[must_use]
    pub fn cells(&self) -> &[u8; GENOME_LEN] {
        &self.cells
    }

    /// Returns the digit at flat index `index`.
    #[must_use]
    pub fn gene(&self, index: usize) -> u8 {
        self.cells[index]
    }

    #[must_use]
    pub fn row(&self, row: usize) -> &[u8] {
        &self.cells[row * SIZE..(row + 1) * SIZE]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.cells.chunks_exact(SIZE)
    }

    pub(crate) fn rows_mut(&mut self) -> impl Iterator<Item = &mut [u8]> {
        self.cells.chunks_exact_mut(SIZE)
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [u8; GENOME_LEN] {
        &mut self.cells
    }

    /// Converts to the 9×9 grid view (`grid[row][col] = genome[row * 9 + col]`).
    #[must_use]
    pub fn to_grid(&self) -> Grid {
        let mut rows = [[0; SIZE]; SIZE];
        for (i, &digit) in self.cells.iter().enumerate() {
            let (row, col) = position(i);
            rows[row][col] = digit;
        }
        Grid::from_rows(rows)
    }

    /// Verifies that every row is a permutation of 1 to 9.
    ///
    /// A failure means an operator broke the row invariant, which is an
    /// internal consistency fault rather than a recoverable condition.
    pub fn check_rows(&self) -> Result<(), RowPermutationError> {
        for (row, cells) in self.rows().enumerate() {
            if let Some(&missing) = DIGITS.iter().find(|d| !cells.contains(d)) {
                return Err(RowPermutationError { row, missing });
            }
        }
        Ok(())
    }
}

impl FromStr for Genome {
    type Err = ParseGenomeError;

    /// Reads 81 digits in row-major order.
    ///
    /// Whitespace and the separator characters `|`, `-`, `+` and `/` are
    /// skipped, so boards printed with box separators read back as-is.
    ///
    /// ```
    /// use evodoku_sudoku::Genome;
    ///
    /// let genome: Genome = "123456789 ".repeat(9).parse().unwrap();
    /// assert_eq!(genome.row(8), &[1, 2, 3, 4, 5, 6, 7, 8, 9]);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [0; GENOME_LEN];
        let mut found = 0;
        for (position, character) in s.chars().enumerate() {
            if character.is_whitespace() || matches!(character, '|' | '-' | '+' | '/') {
                continue;
            }
            let Some(digit) = character.to_digit(10) else {
                return Err(ParseGenomeError::InvalidCharacter {
                    character,
                    position,
                });
            };
            if let Some(cell) = cells.get_mut(found) {
                #[expect(clippy::cast_possible_truncation)]
                let digit = digit as u8;
                *cell = digit;
            }
            found += 1;
        }
        if found != GENOME_LEN {
            return Err(ParseGenomeError::WrongLength { found });
        }
        Ok(Self { cells })
    }
}
