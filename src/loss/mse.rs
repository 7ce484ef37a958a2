use crate::error::LossError;
use crate::loss::validate::{self, SAME_LENGTH};

const NAME: &str = "mean_squared_error";

pub struct MseLoss;

impl MseLoss {
    /// Scalar MSE: mean((y_true - y_pred)²)
    pub fn loss(y_true: &[f64], y_pred: &[f64]) -> Result<f64, LossError> {
        validate::paired(NAME, y_true, y_pred, SAME_LENGTH)?;

        let terms = y_true.iter().zip(y_pred.iter()).map(|(a, b)| (a - b).powi(2));
        Ok(validate::mean(terms, y_true.len()))
    }

    /// Per-output gradient of the mean w.r.t. y_pred: 2·(y_pred - y_true) / n
    pub fn derivative(y_true: &[f64], y_pred: &[f64]) -> Result<Vec<f64>, LossError> {
        validate::paired(NAME, y_true, y_pred, SAME_LENGTH)?;

        let n = y_true.len() as f64;
        Ok(y_true.iter().zip(y_pred.iter())
            .map(|(a, b)| 2.0 * (b - a) / n)
            .collect())
    }
}

pub fn mean_squared_error(y_true: &[f64], y_pred: &[f64]) -> Result<f64, LossError> {
    MseLoss::loss(y_true, y_pred)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::matrix::Matrix;
    use approx::assert_relative_eq;

    #[test]
    fn test_mse_reference_value() {
        let loss = mean_squared_error(&[1.0, 2.0, 3.0, 4.0, 5.0], &[0.8, 2.1, 2.9, 4.2, 5.2]).unwrap();
        assert_relative_eq!(loss, 0.028, epsilon = 1e-9);
    }

    #[test]
    fn test_mse_length_mismatch() {
        let err = mean_squared_error(&[1.0, 2.0, 3.0, 4.0, 5.0], &[0.3, 0.8, 0.9, 0.2]).unwrap_err();
        assert_eq!(err.message(), "Input arrays must have the same length.");
    }

    #[test]
    fn test_mse_of_identical_arrays_is_zero() {
        let y = Matrix::random(1, 64);
        assert_eq!(mean_squared_error(y.row(0), y.row(0)).unwrap(), 0.0);
    }

    #[test]
    fn test_mse_rejects_empty() {
        let err = mean_squared_error(&[], &[]).unwrap_err();
        assert_eq!(err.message(), "Input arrays must not be empty.");
    }

    #[test]
    fn test_mse_derivative() {
        let grad = MseLoss::derivative(&[1.0, 2.0], &[2.0, 0.0]).unwrap();
        assert_eq!(grad, vec![1.0, -2.0]);
    }
}
