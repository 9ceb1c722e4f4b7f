use serde::Serialize;

use super::{BOX_SIZE, GENOME_LEN, Genome, SIZE, box_indices, position};

/// A 9×9 view of a board, addressed as `cells[row][col]`.
///
/// Serializes as nine arrays of nine digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Grid {
    cells: [[u8; SIZE]; SIZE],
}

impl Grid {
    #[must_use]
    pub const fn from_rows(cells: [[u8; SIZE]; SIZE]) -> Self {
        Self { cells }
    }

    #[must_use]
    pub fn rows(&self) -> &[[u8; SIZE]; SIZE] {
        &self.cells
    }

    #[must_use]
    pub fn row(&self, row: usize) -> &[u8; SIZE] {
        &self.cells[row]
    }

    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> u8 {
        self.cells[row][col]
    }

    /// Digits of column `col`, top to bottom.
    pub fn column(&self, col: usize) -> impl Iterator<Item = u8> + '_ {
        self.cells.iter().map(move |row| row[col])
    }

    /// Digits of box `b` (numbered row-major), read row by row.
    pub fn box_cells(&self, b: usize) -> impl Iterator<Item = u8> + '_ {
        debug_assert!(b < BOX_SIZE * BOX_SIZE);
        box_indices(b).map(|i| {
            let (row, col) = position(i);
            self.cells[row][col]
        })
    }

    /// Flattens the grid back into a genome.
    #[must_use]
    pub fn to_genome(&self) -> Genome {
        let mut cells = [0; GENOME_LEN];
        for (dst, src) in cells.iter_mut().zip(self.cells.iter().flatten()) {
            *dst = *src;
        }
        Genome::from_cells(cells)
    }
}

impl From<Genome> for Grid {
    fn from(genome: Genome) -> Self {
        genome.to_grid()
    }
}

impl From<Grid> for Genome {
    fn from(grid: Grid) -> Self {
        grid.to_genome()
    }
}
