//! Scoring functions comparing held-out targets against predictions.
//!
//! Every metric has the same shape, `fn(&Vector, &Vector) -> Result<f64>`,
//! so any of them can be handed to the evaluation protocols directly.

use crate::Vector;
use crate::error::{Error, Result};

fn validate(y_true: &Vector, y_pred: &Vector) -> Result<()> {
    if y_true.len() != y_pred.len() {
        return Err(Error::ShapeMismatch {
            expected: format!("{} predictions", y_true.len()),
            actual: format!("{}", y_pred.len()),
        });
    }
    if y_true.is_empty() {
        return Err(Error::EmptyInput);
    }
    Ok(())
}

pub fn mean_squared_error(y_true: &Vector, y_pred: &Vector) -> Result<f64> {
    validate(y_true, y_pred)?;

    let diff = y_true - y_pred;
    Ok(diff.mapv(|v| v * v).sum() / y_true.len() as f64)
}

pub fn root_mean_squared_error(y_true: &Vector, y_pred: &Vector) -> Result<f64> {
    Ok(mean_squared_error(y_true, y_pred)?.sqrt())
}

pub fn mean_absolute_error(y_true: &Vector, y_pred: &Vector) -> Result<f64> {
    validate(y_true, y_pred)?;

    let diff = y_true - y_pred;
    Ok(diff.mapv(f64::abs).sum() / y_true.len() as f64)
}

/// Percentage of predicted class labels matching the true labels.
pub fn accuracy_percentage(y_true: &Vector, y_pred: &Vector) -> Result<f64> {
    validate(y_true, y_pred)?;

    let correct = y_true
        .iter()
        .zip(y_pred.iter())
        .filter(|&(actual, predicted)| (actual - predicted).abs() < 1e-10)
        .count();
    Ok(100.0 * correct as f64 / y_true.len() as f64)
}
