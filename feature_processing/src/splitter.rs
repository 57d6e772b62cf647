use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::error::{FeatureError, Result};

pub const DEFAULT_TEST_SIZE: f64 = 0.2;
pub const DEFAULT_SEED: u64 = 42;

#[derive(Debug, Clone, PartialEq)]
pub struct Split<T> {
    pub train: Vec<T>,
    pub test: Vec<T>,
}

/// Shuffled train/test partition. The test side gets `ceil(n * test_size)` rows.
/// The same `seed` always yields the same partition.
pub fn train_test_split<T: Clone>(rows: &[T], test_size: f64, seed: u64) -> Result<Split<T>> {
    if !(test_size > 0.0 && test_size < 1.0) {
        return Err(FeatureError::InvalidTestSize(test_size));
    }

    let total = rows.len();
    let test = (total as f64 * test_size).ceil() as usize;
    let train = total.saturating_sub(test);
    if test == 0 || train == 0 {
        return Err(FeatureError::EmptyPartition { total, train, test });
    }

    let mut order: Vec<usize> = (0..total).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    order.shuffle(&mut rng);

    let (test_idx, train_idx) = order.split_at(test);
    debug!("Split {} rows into {} train / {} test", total, train, test);

    Ok(Split {
        train: train_idx.iter().map(|&i| rows[i].clone()).collect(),
        test: test_idx.iter().map(|&i| rows[i].clone()).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn split_is_disjoint_and_exhaustive() {
        let rows: Vec<u32> = (0..103).collect();
        let split = train_test_split(&rows, 0.2, DEFAULT_SEED).unwrap();

        assert_eq!(split.test.len(), 21);
        assert_eq!(split.train.len(), 82);

        let train: BTreeSet<_> = split.train.iter().copied().collect();
        let test: BTreeSet<_> = split.test.iter().copied().collect();
        assert!(train.is_disjoint(&test));
        let all: BTreeSet<_> = train.union(&test).copied().collect();
        assert_eq!(all, rows.iter().copied().collect());
    }

    #[test]
    fn same_seed_same_partition() {
        let rows: Vec<u32> = (0..50).collect();
        let a = train_test_split(&rows, 0.2, 42).unwrap();
        let b = train_test_split(&rows, 0.2, 42).unwrap();
        assert_eq!(a, b);

        let c = train_test_split(&rows, 0.2, 7).unwrap();
        assert_ne!(a.test, c.test);
    }

    #[test]
    fn ten_rows_give_two_test_rows() {
        let rows: Vec<u32> = (0..10).collect();
        let split = train_test_split(&rows, DEFAULT_TEST_SIZE, DEFAULT_SEED).unwrap();
        assert_eq!(split.train.len(), 8);
        assert_eq!(split.test.len(), 2);
    }

    #[test]
    fn degenerate_splits_are_rejected() {
        assert!(matches!(
            train_test_split(&[1u8], 0.2, 42),
            Err(FeatureError::EmptyPartition { total: 1, train: 0, test: 1 })
        ));
        assert!(matches!(
            train_test_split::<u8>(&[], 0.2, 42),
            Err(FeatureError::EmptyPartition { total: 0, .. })
        ));
        for bad in [0.0, 1.0, -0.5, f64::NAN] {
            assert!(matches!(
                train_test_split(&[1u8, 2, 3], bad, 42),
                Err(FeatureError::InvalidTestSize(_))
            ));
        }
    }
}
