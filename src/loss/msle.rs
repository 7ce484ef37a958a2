use crate::error::LossError;
use crate::loss::validate::{self, SAME_LENGTH};

const NAME: &str = "mean_squared_logarithmic_error";

/// Mean squared logarithmic error, for targets spanning several orders of
/// magnitude where relative error matters more than absolute error.
///
/// Values must be greater than -1; outside that domain `ln_1p` yields NaN
/// and so does the loss.
pub struct MsleLoss;

impl MsleLoss {
    /// Scalar MSLE: mean((ln(1 + y_true) - ln(1 + y_pred))²)
    pub fn loss(y_true: &[f64], y_pred: &[f64]) -> Result<f64, LossError> {
        validate::paired(NAME, y_true, y_pred, SAME_LENGTH)?;

        let terms = y_true.iter().zip(y_pred.iter()).map(|(y, p)| (y.ln_1p() - p.ln_1p()).powi(2));
        Ok(validate::mean(terms, y_true.len()))
    }

    /// Per-output gradient: -2·(ln(1 + y) - ln(1 + p)) / ((1 + p)·n)
    pub fn derivative(y_true: &[f64], y_pred: &[f64]) -> Result<Vec<f64>, LossError> {
        validate::paired(NAME, y_true, y_pred, SAME_LENGTH)?;

        let n = y_true.len() as f64;
        Ok(y_true.iter().zip(y_pred.iter())
            .map(|(y, p)| -2.0 * (y.ln_1p() - p.ln_1p()) / ((1.0 + p) * n))
            .collect())
    }
}

pub fn mean_squared_logarithmic_error(y_true: &[f64], y_pred: &[f64]) -> Result<f64, LossError> {
    MsleLoss::loss(y_true, y_pred)
}
