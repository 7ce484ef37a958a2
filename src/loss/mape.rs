use crate::error::LossError;
use crate::loss::validate;

const NAME: &str = "mean_absolute_percentage_error";
const LENGTH_MESSAGE: &str = "The length of the two arrays should be the same.";

/// Mean absolute percentage error, as a fraction (0.1 means 10%).
///
/// Exact-zero ground-truth entries are replaced by ε before both the
/// subtraction and the division.
pub struct MapeLoss;

impl MapeLoss {
    /// Scalar MAPE: mean(|(y_true - y_pred) / y_true|)
    pub fn loss(y_true: &[f64], y_pred: &[f64], epsilon: f64) -> Result<f64, LossError> {
        validate::paired(NAME, y_true, y_pred, LENGTH_MESSAGE)?;

        let terms = y_true.iter().zip(y_pred.iter()).map(|(&y, p)| {
            let y = if y == 0.0 { epsilon } else { y };
            ((y - p) / y).abs()
        });
        Ok(validate::mean(terms, y_true.len()))
    }

    /// Per-output subgradient: sign(p - y) / (|y|·n)
    pub fn derivative(y_true: &[f64], y_pred: &[f64], epsilon: f64) -> Result<Vec<f64>, LossError> {
        validate::paired(NAME, y_true, y_pred, LENGTH_MESSAGE)?;

        let n = y_true.len() as f64;
        Ok(y_true.iter().zip(y_pred.iter())
            .map(|(&y, p)| {
                let y = if y == 0.0 { epsilon } else { y };
                let diff = p - y;
                if diff == 0.0 { 0.0 } else { diff.signum() / (y.abs() * n) }
            })
            .collect())
    }
}

pub fn mean_absolute_percentage_error(y_true: &[f64], y_pred: &[f64], epsilon: f64) -> Result<f64, LossError> {
    MapeLoss::loss(y_true, y_pred, epsilon)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loss::DEFAULT_EPSILON;
    use approx::assert_relative_eq;

    #[test]
    fn test_mape_reference_values() {
        let loss = mean_absolute_percentage_error(&[10.0, 20.0, 30.0, 40.0], &[12.0, 18.0, 33.0, 45.0], DEFAULT_EPSILON)
            .unwrap();
        assert_eq!(loss, 0.13125);

        let loss = mean_absolute_percentage_error(&[1.0, 2.0, 3.0, 4.0], &[2.0, 3.0, 4.0, 5.0], DEFAULT_EPSILON)
            .unwrap();
        assert_relative_eq!(loss, 0.5208333333333333, epsilon = 1e-12);

        let y_true = [34.0, 37.0, 44.0, 47.0, 48.0, 48.0, 46.0, 43.0, 32.0, 27.0, 26.0, 24.0];
        let y_pred = [37.0, 40.0, 46.0, 44.0, 46.0, 50.0, 45.0, 44.0, 34.0, 30.0, 22.0, 23.0];
        let loss = mean_absolute_percentage_error(&y_true, &y_pred, DEFAULT_EPSILON).unwrap();
        assert_relative_eq!(loss, 0.064671076436071, epsilon = 1e-12);
    }

    #[test]
    fn test_mape_zero_truth_uses_epsilon() {
        let loss = mean_absolute_percentage_error(&[0.0, 2.0], &[1.0, 2.0], DEFAULT_EPSILON).unwrap();
        assert!(loss.is_finite());
        // |(ε - 1) / ε| / 2
        assert_relative_eq!(loss, ((1e-15 - 1.0) / 1e-15f64).abs() / 2.0, max_relative = 1e-12);
    }

    #[test]
    fn test_mape_length_mismatch() {
        let err = mean_absolute_percentage_error(&[1.0, 2.0], &[1.0], DEFAULT_EPSILON).unwrap_err();
        assert_eq!(err.message(), LENGTH_MESSAGE);
    }

    #[test]
    fn test_mape_derivative() {
        let grad = MapeLoss::derivative(&[10.0, -4.0], &[12.0, -5.0], DEFAULT_EPSILON).unwrap();
        assert_relative_eq!(grad[0], 1.0 / 20.0, epsilon = 1e-12);
        assert_relative_eq!(grad[1], -1.0 / 8.0, epsilon = 1e-12);
    }
}
