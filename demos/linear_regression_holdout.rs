use minilearn::metrics::root_mean_squared_error;
use minilearn::{Dataset, LinearRegression, Matrix, evaluate_holdout};
use ndarray::array;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Linear Regression Holdout Evaluation ===\n");

    // Feature: years of experience, Target: salary in 10k units
    let records: Matrix = array![
        [1.0, 3.9],
        [2.0, 4.5],
        [3.0, 5.7],
        [4.0, 6.2],
        [5.0, 7.4],
        [6.0, 8.1],
        [7.0, 8.7],
        [8.0, 10.2],
        [9.0, 11.0],
        [10.0, 11.9],
        [11.0, 12.6],
        [12.0, 14.1],
    ];
    let dataset = Dataset::from_rows(&records)?;

    println!("Rows: {}", dataset.n_samples());
    println!("Train fraction: 0.6 (seed 42)");

    let mut rng = StdRng::seed_from_u64(42);
    let rmse = evaluate_holdout(
        &LinearRegression::new(),
        &dataset,
        0.6,
        root_mean_squared_error,
        &mut rng,
    )?;

    println!("\nHeld-out RMSE: {:.4}", rmse);

    // Fit on everything to show the recovered line
    let model = LinearRegression::new().fit(&dataset.features, &dataset.targets)?;
    println!(
        "Full-data fit: y = {:.3} + {:.3} * x",
        model.intercept, model.slope
    );

    Ok(())
}
