use crate::error::LossError;
use crate::loss::validate;
use crate::math::matrix::Matrix;

const NAME: &str = "categorical_cross_entropy";

/// Categorical cross-entropy over a batch of one-hot targets.
pub struct CrossEntropyLoss;

impl CrossEntropyLoss {
    /// Computes the scalar cross-entropy loss summed over the whole batch:
    ///   L = -Σ y_true[i][j] · ln(clip(y_pred[i][j], ε, 1))
    ///
    /// `y_true` — one-hot rows, shape [batch, n_classes]
    /// `y_pred` — probability rows, same shape, each summing to 1 within
    ///            `|s - 1| <= ε + ε`
    ///
    /// The same ε is both the clip floor and the normalization tolerance.
    pub fn loss(y_true: &Matrix, y_pred: &Matrix, epsilon: f64) -> Result<f64, LossError> {
        if y_true.shape() != y_pred.shape() {
            return Err(validate::reject(NAME, "Input arrays must have the same shape."));
        }

        let one_hot = y_true.iter_rows().all(|row| {
            row.iter().all(|&v| v == 0.0 || v == 1.0) && row.iter().sum::<f64>() == 1.0
        });
        if !one_hot {
            return Err(validate::reject(NAME, "y_true must be one-hot encoded."));
        }

        let normalized = y_pred
            .row_sums()
            .iter()
            .all(|&s| (s - 1.0).abs() <= epsilon + epsilon * 1.0);
        if !normalized {
            return Err(validate::reject(NAME, "Predicted probabilities must sum to approximately 1."));
        }

        let clipped = y_pred.map(|p| validate::clip(p, epsilon, 1.0));
        let total: f64 = y_true
            .iter_rows()
            .zip(clipped.iter_rows())
            .flat_map(|(t, p)| t.iter().zip(p.iter()))
            .map(|(t, p)| t * p.ln())
            .sum();
        Ok(-total)
    }
}

pub fn categorical_cross_entropy(y_true: &Matrix, y_pred: &Matrix, epsilon: f64) -> Result<f64, LossError> {
    CrossEntropyLoss::loss(y_true, y_pred, epsilon)
}
