//! Fixture boards shared by the unit tests.

use crate::core::{DIGITS, GENOME_LEN, Genome, SIZE};

/// A valid solved board.
pub(crate) const SOLVED: &str = "
    123 456 789
    456 789 123
    789 123 456
    234 567 891
    567 891 234
    891 234 567
    345 678 912
    678 912 345
    912 345 678
";

/// Nine copies of the row `1 2 3 4 5 6 7 8 9`.
pub(crate) fn identical_rows() -> Genome {
    let mut cells = [0; GENOME_LEN];
    for row in cells.chunks_exact_mut(SIZE) {
        row.copy_from_slice(&DIGITS);
    }
    Genome::from_cells(cells)
}
