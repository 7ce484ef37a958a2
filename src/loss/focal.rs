use crate::error::LossError;
use crate::loss::validate::{self, SAME_LENGTH};

const NAME: &str = "binary_focal_cross_entropy";

/// Binary focal cross-entropy (Lin et al., 2018).
///
/// Scales each BCE term by a modulating factor so that well-classified
/// examples contribute less:
///
///   L = -mean(α·(1-p)^γ·y·ln(p) + (1-α)·p^γ·(1-y)·ln(1-p))
///
/// With γ = 0 and α = 0.5 this is half the plain BCE.
pub struct FocalLoss;

impl FocalLoss {
    pub fn loss(
        y_true: &[f64],
        y_pred: &[f64],
        gamma: f64,
        alpha: f64,
        epsilon: f64,
    ) -> Result<f64, LossError> {
        validate::paired(NAME, y_true, y_pred, SAME_LENGTH)?;

        let terms = y_true.iter().zip(y_pred.iter()).map(|(y, p)| {
            let p = validate::clip(*p, epsilon, 1.0 - epsilon);
            -(alpha * (1.0 - p).powf(gamma) * y * p.ln()
                + (1.0 - alpha) * p.powf(gamma) * (1.0 - y) * (1.0 - p).ln())
        });
        Ok(validate::mean(terms, y_true.len()))
    }

    /// Per-output gradient of the mean w.r.t. the clipped prediction.
    pub fn derivative(
        y_true: &[f64],
        y_pred: &[f64],
        gamma: f64,
        alpha: f64,
        epsilon: f64,
    ) -> Result<Vec<f64>, LossError> {
        validate::paired(NAME, y_true, y_pred, SAME_LENGTH)?;

        let n = y_true.len() as f64;
        Ok(y_true.iter().zip(y_pred.iter())
            .map(|(y, p)| {
                let p = validate::clip(*p, epsilon, 1.0 - epsilon);
                let q = 1.0 - p;
                // d/dp [(1-p)^γ·ln(p)] and d/dp [p^γ·ln(1-p)]
                let positive = -gamma * q.powf(gamma - 1.0) * p.ln() + q.powf(gamma) / p;
                let negative = gamma * p.powf(gamma - 1.0) * q.ln() - p.powf(gamma) / q;
                -(alpha * y * positive + (1.0 - alpha) * (1.0 - y) * negative) / n
            })
            .collect())
    }
}

pub fn binary_focal_cross_entropy(
    y_true: &[f64],
    y_pred: &[f64],
    gamma: f64,
    alpha: f64,
    epsilon: f64,
) -> Result<f64, LossError> {
    FocalLoss::loss(y_true, y_pred, gamma, alpha, epsilon)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loss::bce::binary_cross_entropy;
    use crate::loss::{DEFAULT_ALPHA, DEFAULT_EPSILON, DEFAULT_GAMMA};
    use approx::assert_relative_eq;

    const Y_TRUE: [f64; 5] = [0.0, 1.0, 1.0, 0.0, 1.0];
    const Y_PRED: [f64; 5] = [0.2, 0.7, 0.9, 0.3, 0.8];

    #[test]
    fn test_focal_reference_value() {
        let loss = binary_focal_cross_entropy(&Y_TRUE, &Y_PRED, DEFAULT_GAMMA, DEFAULT_ALPHA, DEFAULT_EPSILON)
            .unwrap();
        assert_relative_eq!(loss, 0.008257977659239775, epsilon = 1e-12);
    }

    #[test]
    fn test_focal_without_focusing_is_half_bce() {
        let focal = binary_focal_cross_entropy(&Y_TRUE, &Y_PRED, 0.0, 0.5, DEFAULT_EPSILON).unwrap();
        let bce = binary_cross_entropy(&Y_TRUE, &Y_PRED, DEFAULT_EPSILON).unwrap();
        assert_relative_eq!(focal, 0.5 * bce, epsilon = 1e-12);
    }

    #[test]
    fn test_focal_length_mismatch() {
        let err = binary_focal_cross_entropy(&Y_TRUE, &[0.3, 0.8, 0.9, 0.2], DEFAULT_GAMMA, DEFAULT_ALPHA, DEFAULT_EPSILON)
            .unwrap_err();
        assert_eq!(err.message(), "Input arrays must have the same length.");
    }

    #[test]
    fn test_focal_derivative_matches_finite_difference() {
        let y_true = [1.0, 0.0];
        let y_pred = [0.6, 0.35];
        let grad = FocalLoss::derivative(&y_true, &y_pred, DEFAULT_GAMMA, DEFAULT_ALPHA, DEFAULT_EPSILON).unwrap();

        let h = 1e-6;
        for i in 0..2 {
            let mut up = y_pred;
            let mut down = y_pred;
            up[i] += h;
            down[i] -= h;
            let numeric = (FocalLoss::loss(&y_true, &up, DEFAULT_GAMMA, DEFAULT_ALPHA, DEFAULT_EPSILON).unwrap()
                - FocalLoss::loss(&y_true, &down, DEFAULT_GAMMA, DEFAULT_ALPHA, DEFAULT_EPSILON).unwrap())
                / (2.0 * h);
            assert_relative_eq!(grad[i], numeric, epsilon = 1e-6);
        }
    }
}
