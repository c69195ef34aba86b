//! Goodness-of-fit scoring for externally fitted curves. The parameter
//! estimation itself is not our business, callers bring their own solver.

/// Coefficient of determination, `R² = 1 - SS_res / SS_tot`.
///
/// Ranges over `(-inf, 1]` where 1 is a perfect fit. Returns NaN for an empty
/// series and for a constant observed series (zero total variance leaves the
/// ratio undefined).
pub fn coefficient_of_determination(observed: &[f64], predicted: &[f64]) -> f64 {
    assert_eq!(observed.len(), predicted.len());

    if observed.is_empty() {
        return f64::NAN;
    }

    let mean = observed.iter().sum::<f64>() / observed.len() as f64;

    let residual_square_sum: f64 = observed.iter()
        .zip(predicted.iter())
        .map(|(y, fitted)| (y - fitted) * (y - fitted))
        .sum();

    let total_square_sum: f64 = observed.iter()
        .map(|y| (y - mean) * (y - mean))
        .sum();

    if total_square_sum == 0.0 {
        return f64::NAN;
    }

    1.0 - residual_square_sum / total_square_sum
}

/// Fits `model` to the points `(x, y)` with the supplied `solver` and scores
/// the result. The model maps one x value and a parameter vector to a
/// prediction, the solver produces the parameter vector.
pub fn regression<M, S>(
    solver: S,
    model: M,
    x: &[f64],
    y: &[f64],
) -> (Vec<f64>, f64)
    where
        M: Fn(f64, &[f64]) -> f64,
        S: Fn(&M, &[f64], &[f64]) -> Vec<f64> {

    let parameter_values = solver(&model, x, y);

    let predicted: Vec<f64> = x.iter()
        .map(|&value| model(value, &parameter_values))
        .collect();

    let r_squared = coefficient_of_determination(y, &predicted);

    (parameter_values, r_squared)
}

#[cfg(test)]
mod tests {

    use super::*;

    // least squares for y = a * x, closed form
    fn fit_proportional(_: &impl Fn(f64, &[f64]) -> f64, x: &[f64], y: &[f64]) -> Vec<f64> {
        let numerator: f64 = x.iter().zip(y.iter()).map(|(a, b)| a * b).sum();
        let denominator: f64 = x.iter().map(|a| a * a).sum();
        vec![numerator / denominator]
    }

    #[test]
    fn perfect_fit_scores_one() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let y = [2.0, 4.0, 6.0, 8.0];

        let (parameters, r_squared) = regression(
            fit_proportional,
            |value, theta: &[f64]| theta[0] * value,
            &x,
            &y,
        );

        assert!((parameters[0] - 2.0).abs() < 1e-12);
        assert!((r_squared - 1.0).abs() < 1e-12);
    }

    #[test]
    fn predicting_the_mean_scores_zero() {
        let observed = [1.0, 2.0, 3.0];
        let predicted = [2.0, 2.0, 2.0];

        let r_squared = coefficient_of_determination(&observed, &predicted);

        assert!(r_squared.abs() < 1e-12);
    }

    #[test]
    fn worse_than_the_mean_goes_negative() {
        let observed = [1.0, 2.0, 3.0];
        let predicted = [3.0, 1.0, 5.0];

        assert!(coefficient_of_determination(&observed, &predicted) < 0.0);
    }

    #[test]
    fn degenerate_series_score_nan() {
        assert!(coefficient_of_determination(&[], &[]).is_nan());
        assert!(coefficient_of_determination(&[1.0, 1.0], &[1.0, 1.0]).is_nan());
    }
}
