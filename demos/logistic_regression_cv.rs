use minilearn::metrics::accuracy_percentage;
use minilearn::{Dataset, LogisticRegression, Matrix, MinMaxScaler, evaluate_k_fold};
use ndarray::array;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Logistic Regression 5-Fold Cross-Validation ===\n");

    // Features: exam score, hours slept; Target: admitted (1) or not (0)
    let records: Matrix = array![
        [34.0, 5.5, 0.0],
        [41.5, 6.0, 0.0],
        [45.2, 4.5, 0.0],
        [50.1, 7.0, 0.0],
        [52.8, 5.0, 0.0],
        [55.3, 6.5, 0.0],
        [58.7, 5.5, 0.0],
        [60.2, 4.0, 0.0],
        [61.8, 6.0, 0.0],
        [63.4, 5.0, 0.0],
        [66.9, 7.5, 1.0],
        [68.3, 6.5, 1.0],
        [71.6, 8.0, 1.0],
        [74.2, 7.0, 1.0],
        [77.8, 6.0, 1.0],
        [80.4, 7.5, 1.0],
        [83.1, 8.5, 1.0],
        [86.7, 7.0, 1.0],
        [90.3, 8.0, 1.0],
        [94.9, 9.0, 1.0],
    ];
    let raw = Dataset::from_rows(&records)?;

    // Scale over the whole dataset before any split; the estimator expects
    // features in [0, 1]
    let mut scaler = MinMaxScaler::new();
    let scaled = scaler.fit_transform(&raw.features)?;
    let dataset = Dataset::new(scaled, raw.targets)?;

    println!("Rows: {}, features: {}", dataset.n_samples(), dataset.n_features());
    println!("Learning rate: 0.3, epochs: 100 (seed 7)\n");

    let mut rng = StdRng::seed_from_u64(7);
    let scores = evaluate_k_fold(
        &LogisticRegression::with_params(0.3, 100),
        &dataset,
        5,
        accuracy_percentage,
        &mut rng,
    )?;

    for (fold, score) in scores.iter().enumerate() {
        println!("Fold {}: {:.1}%", fold + 1, score);
    }
    let mean = scores.iter().sum::<f64>() / scores.len() as f64;
    println!("\nMean accuracy: {:.1}%", mean);

    Ok(())
}
