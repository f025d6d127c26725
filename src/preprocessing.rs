//! Feature scaling applied before training, never inside the estimators.

use ndarray::Axis;

use crate::error::{Error, Result};
use crate::{Matrix, Vector};

/// Scales each feature column to the [0, 1] range.
///
/// Minimum and maximum are taken over every row passed to `fit`. The
/// classification path assumes its features were scaled this way over the
/// whole dataset before any split, so fit on the full feature block and
/// transform once, upstream of partitioning.
pub struct MinMaxScaler {
    min: Option<Vector>,
    max: Option<Vector>,
}

impl MinMaxScaler {
    pub fn new() -> Self {
        Self {
            min: None,
            max: None,
        }
    }

    pub fn fit(&mut self, data: &Matrix) -> Result<()> {
        if data.nrows() == 0 {
            return Err(Error::EmptyInput);
        }
        let min = data.fold_axis(Axis(0), f64::INFINITY, |acc, &v| acc.min(v));
        let max = data.fold_axis(Axis(0), f64::NEG_INFINITY, |acc, &v| acc.max(v));

        self.min = Some(min);
        self.max = Some(max);
        Ok(())
    }

    /// Maps each value to `(v - min) / (max - min)`. A constant column has no
    /// range to scale by and maps to 0.0.
    pub fn transform(&self, data: &Matrix) -> Result<Matrix> {
        let min = self.min.as_ref().ok_or(Error::NotFitted)?;
        let max = self.max.as_ref().ok_or(Error::NotFitted)?;

        if data.ncols() != min.len() {
            return Err(Error::ShapeMismatch {
                expected: format!("{} columns", min.len()),
                actual: format!("{} columns", data.ncols()),
            });
        }

        let mut result = data.clone();
        for mut row in result.axis_iter_mut(Axis(0)) {
            for (j, value) in row.iter_mut().enumerate() {
                let range = max[j] - min[j];
                *value = if range == 0.0 {
                    0.0
                } else {
                    (*value - min[j]) / range
                };
            }
        }
        Ok(result)
    }

    pub fn fit_transform(&mut self, data: &Matrix) -> Result<Matrix> {
        self.fit(data)?;
        self.transform(data)
    }
}

impl Default for MinMaxScaler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_min_max_scaler_maps_to_unit_range() {
        let data = array![[1.0, 10.0], [2.0, 30.0], [3.0, 20.0]];
        let mut scaler = MinMaxScaler::new();

        let scaled = scaler.fit_transform(&data).unwrap();
        assert_eq!(scaled.shape(), data.shape());
        assert_eq!(scaled.column(0).to_owned(), array![0.0, 0.5, 1.0]);
        assert_eq!(scaled.column(1).to_owned(), array![0.0, 1.0, 0.5]);
    }

    #[test]
    fn test_min_max_scaler_constant_column() {
        let data = array![[5.0], [5.0], [5.0]];
        let mut scaler = MinMaxScaler::new();

        let scaled = scaler.fit_transform(&data).unwrap();
        assert!(scaled.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_transform_before_fit() {
        let data = array![[1.0], [2.0]];
        let scaler = MinMaxScaler::new();

        assert_eq!(scaler.transform(&data), Err(Error::NotFitted));
    }

    #[test]
    fn test_transform_column_mismatch() {
        let mut scaler = MinMaxScaler::new();
        scaler.fit(&array![[1.0, 2.0], [3.0, 4.0]]).unwrap();

        assert!(scaler.transform(&array![[1.0], [2.0]]).is_err());
    }
}
