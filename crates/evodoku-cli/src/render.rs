use std::fmt;

use evodoku_sudoku::{Grid, core::BOX_SIZE};

const SEPARATOR: &str = " -----------------------";

/// Text rendering of a board with box separators.
///
/// ```text
///  -----------------------
/// | 1 2 3 | 4 5 6 | 7 8 9 |
/// ...
///  -----------------------
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BoardDisplay<'a> {
    grid: &'a Grid,
}

impl<'a> BoardDisplay<'a> {
    pub fn new(grid: &'a Grid) -> Self {
        Self { grid }
    }
}

impl fmt::Display for BoardDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.grid.rows().iter().enumerate() {
            if row % BOX_SIZE == 0 {
                writeln!(f, "{SEPARATOR}")?;
            }
            for (col, digit) in cells.iter().enumerate() {
                if col % BOX_SIZE == 0 {
                    write!(f, "| ")?;
                }
                write!(f, "{digit} ")?;
            }
            writeln!(f, "|")?;
        }
        writeln!(f, "{SEPARATOR}")
    }
}
