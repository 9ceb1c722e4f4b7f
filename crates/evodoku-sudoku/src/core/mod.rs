//! Board representation: the flat genome and its 9×9 grid view.
//!
//! A [`Genome`] is 81 cells in row-major order; a [`Grid`] is the same cells
//! addressed by `(row, col)`. The two are related by
//! `index = row * 9 + col` and convert into each other without any
//! validation. Whether a board is a legal Sudoku is a property of the
//! producer, checked separately by [`Genome::check_rows`] and the fitness
//! evaluator.

pub use self::{genome::*, grid::*};

mod genome;
mod grid;

/// Number of rows, columns, boxes, and digits.
pub const SIZE: usize = 9;
/// Width and height of one box.
pub const BOX_SIZE: usize = 3;
/// Number of cells on the board (and genes in a genome).
pub const GENOME_LEN: usize = SIZE * SIZE;

/// The digits every row, column and box of a solved board contains.
pub const DIGITS: [u8; SIZE] = [1, 2, 3, 4, 5, 6, 7, 8, 9];

/// Flat genome index of the cell at `(row, col)`.
#[must_use]
pub const fn index(row: usize, col: usize) -> usize {
    row * SIZE + col
}

/// `(row, col)` of the cell at a flat genome index.
#[must_use]
pub const fn position(index: usize) -> (usize, usize) {
    (index / SIZE, index % SIZE)
}

/// Flat indices of the cells in box `b` (numbered row-major, 0 to 8).
pub fn box_indices(b: usize) -> impl Iterator<Item = usize> {
    let top = (b / BOX_SIZE) * BOX_SIZE;
    let left = (b % BOX_SIZE) * BOX_SIZE;
    (top..top + BOX_SIZE)
        .flat_map(move |row| (left..left + BOX_SIZE).map(move |col| index(row, col)))
}
