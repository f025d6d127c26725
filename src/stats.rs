//! Statistics primitives backing the closed-form least-squares fit.

use crate::Vector;
use crate::error::{Error, Result};

/// Arithmetic mean of a non-empty sequence.
///
/// An empty sequence is rejected rather than dividing zero by zero.
pub fn mean(values: &Vector) -> Result<f64> {
    if values.is_empty() {
        return Err(Error::EmptyInput);
    }
    Ok(values.sum() / values.len() as f64)
}

/// Sum of squared deviations from `mean`.
///
/// Not divided by the count: this is the denominator of the closed-form
/// slope, not the sample variance.
pub fn variance(values: &Vector, mean: f64) -> f64 {
    values.iter().map(|v| (v - mean).powi(2)).sum()
}

/// Sum of paired deviation products `(x_i - mean_x) * (y_i - mean_y)`.
pub fn covariance(x: &Vector, mean_x: f64, y: &Vector, mean_y: f64) -> Result<f64> {
    if x.len() != y.len() {
        return Err(Error::ShapeMismatch {
            expected: format!("{} paired values", x.len()),
            actual: format!("{}", y.len()),
        });
    }
    Ok(x.iter()
        .zip(y.iter())
        .map(|(a, b)| (a - mean_x) * (b - mean_y))
        .sum())
}
