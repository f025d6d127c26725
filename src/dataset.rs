//! Tabular dataset container and randomized partitioning.

use ndarray::{Axis, s};
use rand::Rng;

use crate::error::{Error, Result};
use crate::{Matrix, Vector};

/// Rows of features with one target value per row.
///
/// Estimators and the evaluation harness never mutate a dataset; partitioning
/// and selection produce owned copies.
#[derive(Clone, Debug)]
pub struct Dataset {
    pub features: Matrix,
    pub targets: Vector,
}

impl Dataset {
    pub fn new(features: Matrix, targets: Vector) -> Result<Self> {
        if features.nrows() != targets.len() {
            return Err(Error::ShapeMismatch {
                expected: format!("{} target values", features.nrows()),
                actual: format!("{}", targets.len()),
            });
        }
        Ok(Self { features, targets })
    }

    /// Builds a dataset from raw records where the last column of every row
    /// is the target and all preceding columns are features.
    pub fn from_rows(records: &Matrix) -> Result<Self> {
        if records.ncols() < 2 {
            return Err(Error::ShapeMismatch {
                expected: "at least 2 columns (features plus target)".to_string(),
                actual: format!("{} columns", records.ncols()),
            });
        }
        let last = records.ncols() - 1;
        let features = records.slice(s![.., ..last]).to_owned();
        let targets = records.column(last).to_owned();
        Self::new(features, targets)
    }

    pub fn n_samples(&self) -> usize {
        self.features.nrows()
    }

    pub fn n_features(&self) -> usize {
        self.features.ncols()
    }

    /// Gathers the given rows into a new dataset.
    pub fn select(&self, indices: &[usize]) -> Self {
        Self {
            features: self.features.select(Axis(0), indices),
            targets: self.targets.select(Axis(0), indices),
        }
    }

    /// Randomized train/test split by fraction.
    ///
    /// Rows are drawn uniformly without replacement into the train set while
    /// `train_len < train_fraction * n`. The train set therefore holds
    /// `ceil(train_fraction * n)` rows when the product is fractional and
    /// exactly `train_fraction * n` rows when it is whole; the rows left in
    /// the pool form the test set. A fraction that leaves the test side empty
    /// is an error, surfaced before any training.
    pub fn train_test_split<R: Rng>(
        &self,
        train_fraction: f64,
        rng: &mut R,
    ) -> Result<(Self, Self)> {
        if !(train_fraction > 0.0 && train_fraction < 1.0) {
            return Err(Error::InvalidParameter {
                name: "train_fraction".to_string(),
                value: train_fraction.to_string(),
                reason: "must be strictly between 0 and 1".to_string(),
            });
        }
        let n = self.n_samples();
        if n == 0 {
            return Err(Error::EmptyPartition(
                "dataset has no rows to split".to_string(),
            ));
        }

        let threshold = train_fraction * n as f64;
        let mut pool: Vec<usize> = (0..n).collect();
        let mut train_indices = Vec::new();
        while (train_indices.len() as f64) < threshold {
            let drawn = rng.gen_range(0..pool.len());
            train_indices.push(pool.swap_remove(drawn));
        }
        if pool.is_empty() {
            return Err(Error::EmptyPartition(format!(
                "train_fraction {} leaves no test rows out of {}",
                train_fraction, n
            )));
        }

        Ok((self.select(&train_indices), self.select(&pool)))
    }

    /// Randomized k-fold partition of row indices.
    ///
    /// Each fold receives `floor(n / n_folds)` rows drawn uniformly without
    /// replacement. When `n` is not evenly divisible the remainder rows are
    /// left out of the partition entirely; this lossy behavior is intentional
    /// and keeps the folds equally sized.
    pub fn k_fold_split<R: Rng>(&self, n_folds: usize, rng: &mut R) -> Result<Vec<Vec<usize>>> {
        if n_folds < 2 {
            return Err(Error::InvalidParameter {
                name: "n_folds".to_string(),
                value: n_folds.to_string(),
                reason: "must be at least 2".to_string(),
            });
        }
        let n = self.n_samples();
        let fold_size = n / n_folds;
        if fold_size == 0 {
            return Err(Error::EmptyPartition(format!(
                "{} folds over {} rows would leave folds empty",
                n_folds, n
            )));
        }

        let mut pool: Vec<usize> = (0..n).collect();
        let folds = (0..n_folds)
            .map(|_| {
                (0..fold_size)
                    .map(|_| pool.swap_remove(rng.gen_range(0..pool.len())))
                    .collect()
            })
            .collect();
        Ok(folds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sequential_dataset(n: usize) -> Dataset {
        let features = Matrix::from_shape_fn((n, 1), |(i, _)| i as f64);
        let targets = Vector::from_shape_fn(n, |i| i as f64);
        Dataset::new(features, targets).unwrap()
    }

    #[test]
    fn test_dataset_creation() {
        let features = array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]];
        let targets = array![1.0, 2.0, 3.0];

        let dataset = Dataset::new(features, targets).unwrap();
        assert_eq!(dataset.n_samples(), 3);
        assert_eq!(dataset.n_features(), 2);
    }

    #[test]
    fn test_dataset_row_count_mismatch() {
        let features = array![[1.0], [2.0]];
        let targets = array![1.0, 2.0, 3.0];
        assert!(Dataset::new(features, targets).is_err());
    }

    #[test]
    fn test_from_rows_slices_last_column() {
        let records = array![[1.0, 2.0, 10.0], [3.0, 4.0, 20.0]];
        let dataset = Dataset::from_rows(&records).unwrap();

        assert_eq!(dataset.n_features(), 2);
        assert_eq!(dataset.features, array![[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(dataset.targets, array![10.0, 20.0]);
    }

    #[test]
    fn test_from_rows_needs_target_column() {
        let records = array![[1.0], [2.0]];
        assert!(Dataset::from_rows(&records).is_err());
    }

    #[test]
    fn test_select_gathers_rows() {
        let dataset = sequential_dataset(5);
        let picked = dataset.select(&[4, 0, 2]);

        assert_eq!(picked.targets, array![4.0, 0.0, 2.0]);
        assert_eq!(picked.features.column(0).to_owned(), array![4.0, 0.0, 2.0]);
    }

    #[test]
    fn test_train_test_split_sizes() {
        let dataset = sequential_dataset(10);
        let mut rng = StdRng::seed_from_u64(42);

        let (train, test) = dataset.train_test_split(0.6, &mut rng).unwrap();
        assert_eq!(train.n_samples(), 6);
        assert_eq!(test.n_samples(), 4);
    }

    #[test]
    fn test_train_test_split_rounds_up_on_fractional_threshold() {
        // 0.5 * 5 = 2.5, so drawing stops at 3 train rows
        let dataset = sequential_dataset(5);
        let mut rng = StdRng::seed_from_u64(1);

        let (train, test) = dataset.train_test_split(0.5, &mut rng).unwrap();
        assert_eq!(train.n_samples(), 3);
        assert_eq!(test.n_samples(), 2);
    }

    #[test]
    fn test_train_test_split_is_exact_cover() {
        let dataset = sequential_dataset(20);
        let mut rng = StdRng::seed_from_u64(9);

        let (train, test) = dataset.train_test_split(0.7, &mut rng).unwrap();
        let mut seen: Vec<f64> = train.targets.iter().chain(test.targets.iter()).copied().collect();
        seen.sort_by(|a, b| a.partial_cmp(b).unwrap());

        let expected: Vec<f64> = (0..20).map(|i| i as f64).collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn test_train_test_split_reproducible_with_seed() {
        let dataset = sequential_dataset(12);

        let mut rng_a = StdRng::seed_from_u64(7);
        let mut rng_b = StdRng::seed_from_u64(7);
        let (train_a, _) = dataset.train_test_split(0.6, &mut rng_a).unwrap();
        let (train_b, _) = dataset.train_test_split(0.6, &mut rng_b).unwrap();

        assert_eq!(train_a.targets, train_b.targets);
    }

    #[test]
    fn test_train_test_split_invalid_fraction() {
        let dataset = sequential_dataset(4);
        let mut rng = StdRng::seed_from_u64(0);

        assert!(dataset.train_test_split(0.0, &mut rng).is_err());
        assert!(dataset.train_test_split(1.0, &mut rng).is_err());
    }

    #[test]
    fn test_train_test_split_rejects_empty_test_side() {
        // 0.9 * 2 = 1.8, so both rows land in the train set
        let dataset = sequential_dataset(2);
        let mut rng = StdRng::seed_from_u64(0);

        assert!(matches!(
            dataset.train_test_split(0.9, &mut rng),
            Err(Error::EmptyPartition(_))
        ));
    }

    #[test]
    fn test_k_fold_split_sizes_and_disjointness() {
        let dataset = sequential_dataset(10);
        let mut rng = StdRng::seed_from_u64(3);

        let folds = dataset.k_fold_split(3, &mut rng).unwrap();
        assert_eq!(folds.len(), 3);

        let mut all: Vec<usize> = folds.iter().flatten().copied().collect();
        // 3 folds of 3 rows; the tenth row is dropped
        assert_eq!(all.len(), 9);
        all.sort_unstable();
        all.dedup();
        assert_eq!(all.len(), 9);
        for fold in &folds {
            assert_eq!(fold.len(), 3);
        }
    }

    #[test]
    fn test_k_fold_split_even_division_covers_all_rows() {
        let dataset = sequential_dataset(12);
        let mut rng = StdRng::seed_from_u64(5);

        let folds = dataset.k_fold_split(4, &mut rng).unwrap();
        let mut all: Vec<usize> = folds.iter().flatten().copied().collect();
        all.sort_unstable();
        assert_eq!(all, (0..12).collect::<Vec<usize>>());
    }

    #[test]
    fn test_k_fold_split_more_folds_than_rows() {
        let dataset = sequential_dataset(3);
        let mut rng = StdRng::seed_from_u64(0);

        assert!(matches!(
            dataset.k_fold_split(5, &mut rng),
            Err(Error::EmptyPartition(_))
        ));
    }

    #[test]
    fn test_k_fold_split_requires_two_folds() {
        let dataset = sequential_dataset(6);
        let mut rng = StdRng::seed_from_u64(0);

        assert!(matches!(
            dataset.k_fold_split(1, &mut rng),
            Err(Error::InvalidParameter { .. })
        ));
    }
}
