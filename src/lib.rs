pub use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

pub mod dataset;
pub mod error;
pub mod evaluation;
pub mod linear_model;
pub mod metrics;
pub mod preprocessing;
pub mod stats;

pub type Vector = Array1<f64>;
pub type Matrix = Array2<f64>;

pub use dataset::Dataset;
pub use error::{Error, Result};
pub use evaluation::{Estimator, evaluate_holdout, evaluate_k_fold};
pub use linear_model::{LinearModel, LinearRegression, LogisticModel, LogisticRegression};
pub use preprocessing::MinMaxScaler;
