use crate::error::LossError;
use crate::loss::validate;
use crate::math::matrix::Matrix;

const NAME: &str = "contrastive_loss";

/// Contrastive loss over a batch of vector pairs.
///
/// Each batch entry is a `2 × n` matrix holding the two vectors of a pair.
/// `target` marks the pair as similar (0) or dissimilar (1). With d the
/// Euclidean distance between the two vectors:
///
///   L = Σ_{target = 0} d + Σ_{target = 1} max(0, m - d)
///
/// Similar pairs are pulled together, dissimilar pairs are pushed at least
/// `m` apart. The result is a sum over the batch, not a mean.
pub struct ContrastiveLoss;

impl ContrastiveLoss {
    pub fn loss(inputs: &[Matrix], target: &[f64], m: f64) -> Result<f64, LossError> {
        if inputs.len() != target.len() {
            return Err(validate::reject(NAME, "batch size of inputs and target parameter must be equal."));
        }
        if inputs.iter().any(|pair| pair.rows() != 2) {
            return Err(validate::reject(NAME, "inputs shape must be equal to (batch_size, 2, n)"));
        }
        if let Some(first) = inputs.first() {
            if inputs.iter().any(|pair| pair.cols() != first.cols()) {
                return Err(validate::reject(NAME, "inputs shape must be equal to (batch_size, 2, n)"));
            }
        }
        validate::labels_in(NAME, target, &[0.0, 1.0], "target values must be either 0 or 1.")?;

        let mut error_similar = 0.0;
        let mut error_dissimilar = 0.0;
        for (pair, &t) in inputs.iter().zip(target.iter()) {
            let d = pair_distance(pair);
            if t == 0.0 {
                error_similar += d;
            } else {
                error_dissimilar += (m - d).max(0.0);
            }
        }

        Ok(error_similar + error_dissimilar)
    }
}

/// ‖row(0) − row(1)‖₂
fn pair_distance(pair: &Matrix) -> f64 {
    pair.row(0)
        .iter()
        .zip(pair.row(1).iter())
        .map(|(a, b)| (a - b).powi(2))
        .sum::<f64>()
        .sqrt()
}

pub fn contrastive_loss(inputs: &[Matrix], target: &[f64], m: f64) -> Result<f64, LossError> {
    ContrastiveLoss::loss(inputs, target, m)
}
