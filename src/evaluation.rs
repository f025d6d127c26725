//! Evaluation harness: drives an estimator through a partitioning protocol
//! and scores its predictions against held-out rows.

use rand::Rng;

use crate::dataset::Dataset;
use crate::error::Result;
use crate::linear_model::{LinearModel, LinearRegression, LogisticModel, LogisticRegression};
use crate::{Matrix, Vector};

/// A scoring function comparing held-out targets against predictions.
pub type Metric = fn(&Vector, &Vector) -> Result<f64>;

/// The capability set the harness drives.
///
/// `fit` produces a fresh model value per training round; `predict` maps
/// held-out features to one value per row. Held-out targets are never shown
/// to either operation, only to the metric afterwards.
pub trait Estimator {
    type Model;

    fn fit(&self, features: &Matrix, targets: &Vector) -> Result<Self::Model>;
    fn predict(&self, model: &Self::Model, features: &Matrix) -> Result<Vector>;
}

impl Estimator for LinearRegression {
    type Model = LinearModel;

    fn fit(&self, features: &Matrix, targets: &Vector) -> Result<LinearModel> {
        LinearRegression::fit(self, features, targets)
    }

    fn predict(&self, model: &LinearModel, features: &Matrix) -> Result<Vector> {
        model.predict(features)
    }
}

impl Estimator for LogisticRegression {
    type Model = LogisticModel;

    fn fit(&self, features: &Matrix, targets: &Vector) -> Result<LogisticModel> {
        LogisticRegression::fit(self, features, targets)
    }

    // class labels rather than probabilities: the metric compares against
    // 0/1 targets
    fn predict(&self, model: &LogisticModel, features: &Matrix) -> Result<Vector> {
        model.predict(features)
    }
}

/// Holdout protocol: one fraction split, one fit, one score.
pub fn evaluate_holdout<E, R>(
    estimator: &E,
    data: &Dataset,
    train_fraction: f64,
    metric: Metric,
    rng: &mut R,
) -> Result<f64>
where
    E: Estimator,
    R: Rng,
{
    let (train, test) = data.train_test_split(train_fraction, rng)?;
    let model = estimator.fit(&train.features, &train.targets)?;
    let predicted = estimator.predict(&model, &test.features)?;
    metric(&test.targets, &predicted)
}

/// K-fold protocol: each fold is held out once while the union of the other
/// folds trains a fresh model.
///
/// Returns one score per fold, in fold order; averaging is left to the
/// caller.
pub fn evaluate_k_fold<E, R>(
    estimator: &E,
    data: &Dataset,
    n_folds: usize,
    metric: Metric,
    rng: &mut R,
) -> Result<Vec<f64>>
where
    E: Estimator,
    R: Rng,
{
    let folds = data.k_fold_split(n_folds, rng)?;

    let mut scores = Vec::with_capacity(folds.len());
    for held_out in 0..folds.len() {
        let train_indices: Vec<usize> = folds
            .iter()
            .enumerate()
            .filter(|&(fold, _)| fold != held_out)
            .flat_map(|(_, indices)| indices.iter().copied())
            .collect();
        let train = data.select(&train_indices);
        let test = data.select(&folds[held_out]);

        let model = estimator.fit(&train.features, &train.targets)?;
        let predicted = estimator.predict(&model, &test.features)?;
        scores.push(metric(&test.targets, &predicted)?);
    }
    Ok(scores)
}
