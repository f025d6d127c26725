use ndarray::ArrayView1;

use crate::error::{Error, Result};
use crate::{Matrix, Vector};

/// Binary logistic regression trained by stochastic gradient descent.
///
/// Training always runs exactly `n_epochs` full passes at a constant
/// learning rate; there is no convergence check or early stop. Rows are
/// visited in the order given, so any shuffling happens upstream at
/// partitioning time. Features are assumed min-max scaled to [0, 1] for
/// stable gradient steps; the estimator does not normalize internally.
#[derive(Clone, Debug)]
pub struct LogisticRegression {
    learning_rate: f64,
    n_epochs: usize,
}

impl LogisticRegression {
    pub fn new() -> Self {
        Self {
            learning_rate: 0.1,
            n_epochs: 100,
        }
    }

    pub fn with_params(learning_rate: f64, n_epochs: usize) -> Self {
        Self {
            learning_rate,
            n_epochs,
        }
    }

    /// Fits a weight vector of length `n_features + 1` (bias at index 0),
    /// starting from all zeros.
    pub fn fit(&self, x: &Matrix, y: &Vector) -> Result<LogisticModel> {
        if x.nrows() != y.len() {
            return Err(Error::ShapeMismatch {
                expected: format!("{} target values", x.nrows()),
                actual: format!("{}", y.len()),
            });
        }
        if x.ncols() == 0 {
            return Err(Error::ShapeMismatch {
                expected: "at least 1 feature column".to_string(),
                actual: "0 columns".to_string(),
            });
        }
        validate_labels(y)?;

        let mut weights = Vector::zeros(x.ncols() + 1);
        for _ in 0..self.n_epochs {
            for (row, &target) in x.rows().into_iter().zip(y.iter()) {
                weights = step(weights, row, target, self.learning_rate);
            }
        }
        Ok(LogisticModel { weights })
    }
}

impl Default for LogisticRegression {
    fn default() -> Self {
        Self::new()
    }
}

/// One SGD update: consumes the current weights and returns the next ones.
///
/// `g = learning_rate * (target - yhat) * yhat * (1 - yhat)`, added to the
/// bias as-is and to each remaining weight scaled by its feature value.
fn step(weights: Vector, features: ArrayView1<'_, f64>, target: f64, learning_rate: f64) -> Vector {
    let yhat = predict_row(&weights, features);
    let gradient = learning_rate * (target - yhat) * yhat * (1.0 - yhat);

    let mut next = weights;
    next[0] += gradient;
    for (i, &value) in features.iter().enumerate() {
        next[i + 1] += gradient * value;
    }
    next
}

fn predict_row(weights: &Vector, features: ArrayView1<'_, f64>) -> f64 {
    let z = weights[0]
        + features
            .iter()
            .zip(weights.iter().skip(1))
            .map(|(value, coef)| coef * value)
            .sum::<f64>();
    sigmoid(z)
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

fn validate_labels(y: &Vector) -> Result<()> {
    for &label in y.iter() {
        if label != 0.0 && label != 1.0 {
            return Err(Error::InvalidLabel);
        }
    }
    Ok(())
}

/// Fitted weights of a logistic regression; index 0 is the bias term.
#[derive(Clone, Debug)]
pub struct LogisticModel {
    pub weights: Vector,
}

impl LogisticModel {
    /// Probability of the positive class for each row.
    ///
    /// Values lie in the open interval (0, 1); exactly 0.0 or 1.0 appears
    /// only through floating-point saturation at extreme magnitudes.
    pub fn predict_proba(&self, x: &Matrix) -> Result<Vector> {
        if x.ncols() == 0 {
            return Err(Error::ShapeMismatch {
                expected: "at least 1 feature column".to_string(),
                actual: "0 columns".to_string(),
            });
        }
        if x.ncols() + 1 != self.weights.len() {
            return Err(Error::ShapeMismatch {
                expected: format!("{} feature columns", self.weights.len() - 1),
                actual: format!("{} columns", x.ncols()),
            });
        }
        Ok(x.rows()
            .into_iter()
            .map(|row| predict_row(&self.weights, row))
            .collect())
    }

    /// Class labels: each probability rounded to the nearest integer.
    ///
    /// `f64::round` rounds half away from zero, so a probability of exactly
    /// 0.5 becomes class 1.
    pub fn predict(&self, x: &Matrix) -> Result<Vector> {
        Ok(self.predict_proba(x)?.mapv(f64::round))
    }
}
