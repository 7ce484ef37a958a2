use crate::error::LossError;
use crate::loss::validate::{self, SAME_LENGTH};

const NAME: &str = "huber_loss";

pub struct HuberLoss;

impl HuberLoss {
    /// Scalar Huber: mean(h(y_true − y_pred))
    /// where h(x) = 0.5·x²  if |x| ≤ δ
    ///              δ·(|x| − 0.5·δ)  otherwise
    pub fn loss(y_true: &[f64], y_pred: &[f64], delta: f64) -> Result<f64, LossError> {
        validate::paired(NAME, y_true, y_pred, SAME_LENGTH)?;

        let terms = y_true.iter().zip(y_pred.iter()).map(|(y, p)| {
            let x = y - p;
            if x.abs() <= delta {
                0.5 * x * x
            } else {
                delta * (x.abs() - 0.5 * delta)
            }
        });
        Ok(validate::mean(terms, y_true.len()))
    }

    /// Per-output gradient w.r.t. y_pred: x/n  if |x| ≤ δ,  else δ·sign(x)/n, x = p − y
    pub fn derivative(y_true: &[f64], y_pred: &[f64], delta: f64) -> Result<Vec<f64>, LossError> {
        validate::paired(NAME, y_true, y_pred, SAME_LENGTH)?;

        let n = y_true.len() as f64;
        Ok(y_true.iter().zip(y_pred.iter())
            .map(|(y, p)| {
                let x = p - y;
                if x.abs() <= delta { x / n } else { delta * x.signum() / n }
            })
            .collect())
    }
}

pub fn huber_loss(y_true: &[f64], y_pred: &[f64], delta: f64) -> Result<f64, LossError> {
    HuberLoss::loss(y_true, y_pred, delta)
}
