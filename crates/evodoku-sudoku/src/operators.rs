//! Genetic operators over Sudoku genomes.
//!
//! Every operator here preserves the row invariant: each 9-cell row of the
//! genome stays a permutation of 1 to 9.
//!
//! - [`initialize`] shuffles each row independently.
//! - [`mutate`] only swaps genes *within* a row.
//! - [`crossover`] copies whole rows, never mixing cells of one row.
//!
//! With rows fixed, the search only has to repair columns and boxes.

use rand::{Rng, seq::SliceRandom as _};

use crate::core::{DIGITS, GENOME_LEN, Genome, SIZE};

/// Creates a genome whose rows are independent uniform shuffles of 1 to 9.
pub fn initialize<R>(rng: &mut R) -> Genome
where
    R: Rng + ?Sized,
{
    let mut genome = Genome::from_cells([0; GENOME_LEN]);
    initialize_into(&mut genome, rng);
    genome
}

/// Like [`initialize`], but overwrites an existing genome.
pub fn initialize_into<R>(genome: &mut Genome, rng: &mut R)
where
    R: Rng + ?Sized,
{
    for row in genome.rows_mut() {
        let mut digits = DIGITS;
        digits.shuffle(rng);
        row.copy_from_slice(&digits);
    }
}

/// Swap mutation restricted to rows.
///
/// Every gene, independently with probability `rate`, is swapped with a gene
/// at a uniformly drawn column of the same row. The drawn column may be the
/// gene's own, which makes the swap a no-op but still counts as an event.
///
/// Returns the number of swap attempts. A `rate` of zero (or NaN) leaves the
/// genome untouched; rates above one behave like one.
pub fn mutate<R>(genome: &mut Genome, rate: f32, rng: &mut R) -> usize
where
    R: Rng + ?Sized,
{
    if rate.is_nan() || rate <= 0.0 {
        return 0;
    }
    let p = f64::from(rate.min(1.0));

    let mut count = 0;
    for row in genome.rows_mut() {
        for col in 0..SIZE {
            if rng.random_bool(p) {
                let other = rng.random_range(0..SIZE);
                row.swap(col, other);
                count += 1;
            }
        }
    }
    count
}

/// Single-cut, row-wise crossover.
///
/// Draws a cut row `r` uniformly from 0 to 8, then fills the requested child
/// slots as described in [`crossover_at`]. When neither slot is requested
/// nothing is drawn and 0 is returned.
pub fn crossover<R>(
    parent1: &Genome,
    parent2: &Genome,
    child1: Option<&mut Genome>,
    child2: Option<&mut Genome>,
    rng: &mut R,
) -> usize
where
    R: Rng + ?Sized,
{
    if child1.is_none() && child2.is_none() {
        return 0;
    }
    let cut_row = rng.random_range(0..SIZE);
    crossover_at(cut_row, parent1, parent2, child1, child2)
}

/// Row-wise crossover at a fixed cut row.
///
/// - `child1` gets rows `0..=cut_row` from `parent1` and the rest from `parent2`.
/// - `child2` gets rows `0..=cut_row` from `parent2` and the rest from `parent1`.
///
/// Returns the number of children written.
///
/// # Panics
///
/// Panics if `cut_row` is not a valid row index.
pub fn crossover_at(
    cut_row: usize,
    parent1: &Genome,
    parent2: &Genome,
    child1: Option<&mut Genome>,
    child2: Option<&mut Genome>,
) -> usize {
    assert!(cut_row < SIZE, "cut row {cut_row} out of range");
    let split = (cut_row + 1) * SIZE;

    let mut produced = 0;
    for (child, head, tail) in [(child1, parent1, parent2), (child2, parent2, parent1)] {
        if let Some(child) = child {
            let cells = child.cells_mut();
            cells[..split].copy_from_slice(&head.cells()[..split]);
            cells[split..].copy_from_slice(&tail.cells()[split..]);
            produced += 1;
        }
    }
    produced
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64;

    use super::*;
    use crate::testing::{SOLVED, identical_rows};

    #[test]
    fn test_initialize_rows_are_permutations() {
        let mut rng = Pcg64::seed_from_u64(1);
        for _ in 0..1000 {
            let genome = initialize(&mut rng);
            assert_eq!(genome.check_rows(), Ok(()));
        }
    }

    #[test]
    fn test_initialize_shuffles_rows_independently() {
        let mut rng = Pcg64::seed_from_u64(2);
        let genome = initialize(&mut rng);
        let distinct_rows = genome
            .rows()
            .collect::<std::collections::HashSet<_>>()
            .len();
        // nine identical shuffles out of 9! are practically impossible
        assert!(distinct_rows > 1);
    }

    #[test]
    fn test_initialize_is_unbiased_per_cell() {
        let mut rng = Pcg64::seed_from_u64(3);
        let mut counts = [[0_u32; SIZE]; SIZE];
        for _ in 0..9000 {
            let genome = initialize(&mut rng);
            for (col, &digit) in genome.row(0).iter().enumerate() {
                counts[col][usize::from(digit - 1)] += 1;
            }
        }
        // expected 1000 per (column, digit)
        for (col, row) in counts.iter().enumerate() {
            for (digit, &count) in row.iter().enumerate() {
                assert!(
                    (800..1200).contains(&count),
                    "digit {} in column {col}: {count}",
                    digit + 1
                );
            }
        }
    }

    #[test]
    fn test_initialize_into_overwrites() {
        let mut rng = Pcg64::seed_from_u64(4);
        let mut genome = Genome::from_cells([0; GENOME_LEN]);
        initialize_into(&mut genome, &mut rng);
        assert_eq!(genome.check_rows(), Ok(()));
    }

    #[test]
    fn test_mutate_with_zero_rate_is_noop() {
        let mut rng = Pcg64::seed_from_u64(5);
        let original = initialize(&mut rng);
        let mut genome = original;
        assert_eq!(mutate(&mut genome, 0.0, &mut rng), 0);
        assert_eq!(genome, original);
        assert_eq!(mutate(&mut genome, f32::NAN, &mut rng), 0);
        assert_eq!(genome, original);
    }

    #[test]
    fn test_mutate_with_full_rate_touches_every_gene() {
        let mut rng = Pcg64::seed_from_u64(6);
        for _ in 0..100 {
            let mut genome = initialize(&mut rng);
            assert_eq!(mutate(&mut genome, 1.0, &mut rng), GENOME_LEN);
            assert_eq!(genome.check_rows(), Ok(()));
        }
    }

    #[test]
    fn test_mutate_preserves_row_contents() {
        let mut rng = Pcg64::seed_from_u64(7);
        let original: Genome = SOLVED.parse().unwrap();
        let mut genome = original;
        let events = mutate(&mut genome, 0.3, &mut rng);
        assert!(events > 0);
        for (mutated, before) in genome.rows().zip(original.rows()) {
            let mut a = mutated.to_vec();
            let mut b = before.to_vec();
            a.sort_unstable();
            b.sort_unstable();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_mutation_count_tracks_rate() {
        let mut rng = Pcg64::seed_from_u64(8);
        let mut genome = initialize(&mut rng);
        let total: usize = (0..1000)
            .map(|_| mutate(&mut genome, 0.1, &mut rng))
            .sum();
        // expected 8100 events
        assert!((7500..8700).contains(&total), "total {total}");
        assert_eq!(genome.check_rows(), Ok(()));
    }

    #[test]
    fn test_crossover_child_counts() {
        let mut rng = Pcg64::seed_from_u64(9);
        let p1 = initialize(&mut rng);
        let p2 = initialize(&mut rng);
        let mut c1 = p1;
        let mut c2 = p2;

        assert_eq!(crossover(&p1, &p2, Some(&mut c1), Some(&mut c2), &mut rng), 2);
        assert_eq!(crossover(&p1, &p2, Some(&mut c1), None, &mut rng), 1);
        assert_eq!(crossover(&p1, &p2, None, Some(&mut c2), &mut rng), 1);
        assert_eq!(crossover(&p1, &p2, None, None, &mut rng), 0);
    }

    #[test]
    fn test_crossover_without_children_draws_nothing() {
        let mut rng = Pcg64::seed_from_u64(10);
        let p1 = initialize(&mut rng);
        let p2 = initialize(&mut rng);

        let mut used = rng.clone();
        let mut untouched = rng.clone();
        crossover(&p1, &p2, None, None, &mut used);
        assert_eq!(
            used.random::<u64>(),
            untouched.random::<u64>(),
            "random stream advanced without producing children"
        );
    }

    #[test]
    fn test_crossover_at_copies_whole_rows() {
        let p1: Genome = SOLVED.parse().unwrap();
        let p2 = identical_rows();
        for cut_row in 0..SIZE {
            let mut c1 = Genome::from_cells([0; GENOME_LEN]);
            let mut c2 = Genome::from_cells([0; GENOME_LEN]);
            assert_eq!(
                crossover_at(cut_row, &p1, &p2, Some(&mut c1), Some(&mut c2)),
                2
            );
            for row in 0..SIZE {
                let (first, second) = if row <= cut_row { (&p1, &p2) } else { (&p2, &p1) };
                assert_eq!(c1.row(row), first.row(row), "child 1, cut {cut_row}, row {row}");
                assert_eq!(c2.row(row), second.row(row), "child 2, cut {cut_row}, row {row}");
            }
            assert_eq!(c1.check_rows(), Ok(()));
            assert_eq!(c2.check_rows(), Ok(()));
        }
    }

    #[test]
    fn test_crossover_at_last_row_clones_parents() {
        let p1: Genome = SOLVED.parse().unwrap();
        let p2 = identical_rows();
        let mut c1 = p2;
        let mut c2 = p1;
        crossover_at(SIZE - 1, &p1, &p2, Some(&mut c1), Some(&mut c2));
        assert_eq!(c1, p1);
        assert_eq!(c2, p2);
    }

    #[test]
    fn test_crossover_at_single_child() {
        let p1: Genome = SOLVED.parse().unwrap();
        let p2 = identical_rows();
        let mut c2 = Genome::from_cells([0; GENOME_LEN]);
        assert_eq!(crossover_at(2, &p1, &p2, None, Some(&mut c2)), 1);
        assert_eq!(c2.row(0), p2.row(0));
        assert_eq!(c2.row(3), p1.row(3));
    }

    #[test]
    #[should_panic(expected = "cut row 9 out of range")]
    fn test_crossover_at_rejects_bad_row() {
        let p: Genome = SOLVED.parse().unwrap();
        let mut c = p;
        crossover_at(SIZE, &p, &p, Some(&mut c), None);
    }

    #[test]
    fn test_operators_preserve_rows_over_many_rounds() {
        let mut rng = Pcg64::seed_from_u64(11);
        let mut pool: Vec<Genome> = (0..20).map(|_| initialize(&mut rng)).collect();
        for _ in 0..200 {
            let i = rng.random_range(0..pool.len());
            let j = rng.random_range(0..pool.len());
            let (p1, p2) = (pool[i], pool[j]);
            let mut c1 = p1;
            let mut c2 = p2;
            crossover(&p1, &p2, Some(&mut c1), Some(&mut c2), &mut rng);
            mutate(&mut c1, 0.05, &mut rng);
            mutate(&mut c2, 0.05, &mut rng);
            assert_eq!(c1.check_rows(), Ok(()));
            assert_eq!(c2.check_rows(), Ok(()));
            pool[i] = c1;
            pool[j] = c2;
        }
    }
}
