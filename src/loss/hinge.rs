use crate::error::LossError;
use crate::loss::validate;

const NAME: &str = "hinge_loss";
const LENGTH_MESSAGE: &str = "Length of predicted and actual array must be same.";
const LABEL_MESSAGE: &str = "y_true can have values -1 or 1 only.";

/// Hinge loss for maximum-margin (SVM-style) classifiers, labels in {-1, 1}.
pub struct HingeLoss;

impl HingeLoss {
    /// Scalar hinge: mean(max(0, 1 - y·p))
    pub fn loss(y_true: &[f64], y_pred: &[f64]) -> Result<f64, LossError> {
        Self::check(y_true, y_pred)?;

        let terms = y_true.iter().zip(y_pred.iter()).map(|(y, p)| (1.0 - y * p).max(0.0));
        Ok(validate::mean(terms, y_true.len()))
    }

    /// Per-output subgradient: -y / n inside the margin, 0 outside
    pub fn derivative(y_true: &[f64], y_pred: &[f64]) -> Result<Vec<f64>, LossError> {
        Self::check(y_true, y_pred)?;

        let n = y_true.len() as f64;
        Ok(y_true.iter().zip(y_pred.iter())
            .map(|(y, p)| if 1.0 - y * p > 0.0 { -y / n } else { 0.0 })
            .collect())
    }

    fn check(y_true: &[f64], y_pred: &[f64]) -> Result<(), LossError> {
        validate::paired(NAME, y_true, y_pred, LENGTH_MESSAGE)?;
        validate::labels_in(NAME, y_true, &[-1.0, 1.0], LABEL_MESSAGE)
    }
}

pub fn hinge_loss(y_true: &[f64], y_pred: &[f64]) -> Result<f64, LossError> {
    HingeLoss::loss(y_true, y_pred)
}
