use crate::error::LossError;
use crate::loss::validate::{self, SAME_LENGTH};

const NAME: &str = "mean_absolute_error";

pub struct MaeLoss;

impl MaeLoss {
    /// Scalar MAE: mean(|y_true - y_pred|)
    pub fn loss(y_true: &[f64], y_pred: &[f64]) -> Result<f64, LossError> {
        validate::paired(NAME, y_true, y_pred, SAME_LENGTH)?;

        let terms = y_true.iter().zip(y_pred.iter()).map(|(y, p)| (y - p).abs());
        Ok(validate::mean(terms, y_true.len()))
    }

    /// Per-output subgradient: sign(p - y) / n  (0 when equal)
    pub fn derivative(y_true: &[f64], y_pred: &[f64]) -> Result<Vec<f64>, LossError> {
        validate::paired(NAME, y_true, y_pred, SAME_LENGTH)?;

        let n = y_true.len() as f64;
        Ok(y_true.iter().zip(y_pred.iter())
            .map(|(y, p)| {
                let diff = p - y;
                if diff > 0.0 { 1.0 / n } else if diff < 0.0 { -1.0 / n } else { 0.0 }
            })
            .collect())
    }
}

pub fn mean_absolute_error(y_true: &[f64], y_pred: &[f64]) -> Result<f64, LossError> {
    MaeLoss::loss(y_true, y_pred)
}
