use crate::error::{Error, Result};
use crate::{Matrix, Vector, stats};

/// Simple least-squares regression over a single feature column.
///
/// Coefficients come straight from the closed form
/// `slope = cov(x, y) / var(x)`, `intercept = mean(y) - slope * mean(x)`;
/// no iterative solver is involved.
#[derive(Clone, Debug)]
pub struct LinearRegression;

impl LinearRegression {
    pub fn new() -> Self {
        Self
    }

    /// Fits intercept and slope on rows of exactly one feature column.
    ///
    /// A feature column whose values are all identical has zero variance and
    /// no defined slope; that case is an error, not a fallback coefficient.
    pub fn fit(&self, x: &Matrix, y: &Vector) -> Result<LinearModel> {
        if x.nrows() != y.len() {
            return Err(Error::ShapeMismatch {
                expected: format!("{} target values", x.nrows()),
                actual: format!("{}", y.len()),
            });
        }
        if x.ncols() != 1 {
            return Err(Error::ShapeMismatch {
                expected: "exactly 1 feature column".to_string(),
                actual: format!("{} columns", x.ncols()),
            });
        }

        let xs = x.column(0).to_owned();
        let mean_x = stats::mean(&xs)?;
        let mean_y = stats::mean(y)?;

        let var_x = stats::variance(&xs, mean_x);
        if var_x == 0.0 {
            return Err(Error::ZeroVariance);
        }

        let slope = stats::covariance(&xs, mean_x, y, mean_y)? / var_x;
        let intercept = mean_y - slope * mean_x;
        Ok(LinearModel { intercept, slope })
    }
}

impl Default for LinearRegression {
    fn default() -> Self {
        Self::new()
    }
}

/// Fitted state of a simple linear regression.
#[derive(Clone, Debug)]
pub struct LinearModel {
    pub intercept: f64,
    pub slope: f64,
}

impl LinearModel {
    /// `intercept + slope * x` for each row's single feature value.
    pub fn predict(&self, x: &Matrix) -> Result<Vector> {
        if x.ncols() != 1 {
            return Err(Error::ShapeMismatch {
                expected: "exactly 1 feature column".to_string(),
                actual: format!("{} columns", x.ncols()),
            });
        }
        Ok(x.column(0).mapv(|v| self.intercept + self.slope * v))
    }
}
