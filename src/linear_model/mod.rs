//! Linear models for regression and classification.
//!
//! This module provides the two estimators of the crate:
//! - `LinearRegression`: closed-form simple least squares over one feature
//! - `LogisticRegression`: binary classification trained by per-row SGD
//!
//! Fitting produces a fresh model value (`LinearModel` / `LogisticModel`)
//! rather than mutating the estimator, so one configured estimator can be
//! driven through many evaluation rounds.
//!
//! # Examples
//!
//! ## Linear Regression
//! ```rust
//! use minilearn::LinearRegression;
//! use ndarray::array;
//!
//! let x = array![[1.0], [2.0], [3.0], [4.0]];
//! let y = array![5.0, 7.0, 9.0, 11.0];
//!
//! let model = LinearRegression::new().fit(&x, &y).unwrap();
//! let predictions = model.predict(&x).unwrap();
//! ```
//!
//! ## Logistic Regression
//! ```rust
//! use minilearn::LogisticRegression;
//! use ndarray::array;
//!
//! let x = array![[0.1], [0.2], [0.8], [0.9]];
//! let y = array![0.0, 0.0, 1.0, 1.0];
//!
//! let model = LogisticRegression::new().fit(&x, &y).unwrap();
//! let probabilities = model.predict_proba(&x).unwrap();
//! let classes = model.predict(&x).unwrap();
//! ```

mod linear_regression;
mod logistic_regression;

pub use linear_regression::{LinearModel, LinearRegression};
pub use logistic_regression::{LogisticModel, LogisticRegression};
