use crate::error::LossError;
use crate::loss::validate::{self, SAME_LENGTH};

const NAME: &str = "binary_cross_entropy";

pub struct BceLoss;

impl BceLoss {
    /// Scalar BCE: -mean(y·ln(p) + (1-y)·ln(1-p)), p clipped to [ε, 1-ε]
    pub fn loss(y_true: &[f64], y_pred: &[f64], epsilon: f64) -> Result<f64, LossError> {
        validate::paired(NAME, y_true, y_pred, SAME_LENGTH)?;

        let terms = y_true.iter().zip(y_pred.iter()).map(|(y, p)| {
            let p = validate::clip(*p, epsilon, 1.0 - epsilon);
            -(y * p.ln() + (1.0 - y) * (1.0 - p).ln())
        });
        Ok(validate::mean(terms, y_true.len()))
    }

    /// Per-output gradient of the mean: (p - y) / (p·(1 - p)·n)
    pub fn derivative(y_true: &[f64], y_pred: &[f64], epsilon: f64) -> Result<Vec<f64>, LossError> {
        validate::paired(NAME, y_true, y_pred, SAME_LENGTH)?;

        let n = y_true.len() as f64;
        Ok(y_true.iter().zip(y_pred.iter())
            .map(|(y, p)| {
                let p = validate::clip(*p, epsilon, 1.0 - epsilon);
                (p - y) / (p * (1.0 - p) * n)
            })
            .collect())
    }
}

pub fn binary_cross_entropy(y_true: &[f64], y_pred: &[f64], epsilon: f64) -> Result<f64, LossError> {
    BceLoss::loss(y_true, y_pred, epsilon)
}
