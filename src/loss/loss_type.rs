use serde::{Serialize, Deserialize};

use crate::error::LossError;
use crate::loss::bce::BceLoss;
use crate::loss::focal::FocalLoss;
use crate::loss::hinge::HingeLoss;
use crate::loss::huber::HuberLoss;
use crate::loss::mae::MaeLoss;
use crate::loss::mape::MapeLoss;
use crate::loss::mse::MseLoss;
use crate::loss::msle::MsleLoss;
use crate::loss::{DEFAULT_ALPHA, DEFAULT_EPSILON, DEFAULT_GAMMA};

/// Selects one of the element-wise losses together with its hyperparameters.
///
/// - `BinaryCrossEntropy`          — labels in {0, 1}, predictions in (0, 1).
/// - `BinaryFocalCrossEntropy`     — BCE down-weighting easy examples.
/// - `Hinge`                       — labels in {-1, 1}, raw margins.
/// - `Huber`                       — quadratic within `delta`, linear outside.
/// - `MeanSquaredError`, `MeanAbsoluteError`, `MeanSquaredLogarithmicError`
///                                 — regression errors.
/// - `MeanAbsolutePercentageError` — relative regression error.
///
/// Serialized internally tagged, e.g. `{"type": "huber", "delta": 1.0}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LossType {
    BinaryCrossEntropy {
        #[serde(default = "default_epsilon")]
        epsilon: f64,
    },
    BinaryFocalCrossEntropy {
        #[serde(default = "default_gamma")]
        gamma: f64,
        #[serde(default = "default_alpha")]
        alpha: f64,
        #[serde(default = "default_epsilon")]
        epsilon: f64,
    },
    Hinge,
    Huber { delta: f64 },
    MeanSquaredError,
    MeanAbsoluteError,
    MeanSquaredLogarithmicError,
    MeanAbsolutePercentageError {
        #[serde(default = "default_epsilon")]
        epsilon: f64,
    },
}

fn default_epsilon() -> f64 {
    DEFAULT_EPSILON
}

fn default_gamma() -> f64 {
    DEFAULT_GAMMA
}

fn default_alpha() -> f64 {
    DEFAULT_ALPHA
}

impl LossType {
    /// Evaluates the selected loss.
    pub fn loss(&self, y_true: &[f64], y_pred: &[f64]) -> Result<f64, LossError> {
        match *self {
            LossType::BinaryCrossEntropy { epsilon } => BceLoss::loss(y_true, y_pred, epsilon),
            LossType::BinaryFocalCrossEntropy { gamma, alpha, epsilon } => {
                FocalLoss::loss(y_true, y_pred, gamma, alpha, epsilon)
            }
            LossType::Hinge => HingeLoss::loss(y_true, y_pred),
            LossType::Huber { delta } => HuberLoss::loss(y_true, y_pred, delta),
            LossType::MeanSquaredError => MseLoss::loss(y_true, y_pred),
            LossType::MeanAbsoluteError => MaeLoss::loss(y_true, y_pred),
            LossType::MeanSquaredLogarithmicError => MsleLoss::loss(y_true, y_pred),
            LossType::MeanAbsolutePercentageError { epsilon } => MapeLoss::loss(y_true, y_pred, epsilon),
        }
    }

    /// Per-element gradient of the selected loss w.r.t. `y_pred`.
    pub fn derivative(&self, y_true: &[f64], y_pred: &[f64]) -> Result<Vec<f64>, LossError> {
        match *self {
            LossType::BinaryCrossEntropy { epsilon } => BceLoss::derivative(y_true, y_pred, epsilon),
            LossType::BinaryFocalCrossEntropy { gamma, alpha, epsilon } => {
                FocalLoss::derivative(y_true, y_pred, gamma, alpha, epsilon)
            }
            LossType::Hinge => HingeLoss::derivative(y_true, y_pred),
            LossType::Huber { delta } => HuberLoss::derivative(y_true, y_pred, delta),
            LossType::MeanSquaredError => MseLoss::derivative(y_true, y_pred),
            LossType::MeanAbsoluteError => MaeLoss::derivative(y_true, y_pred),
            LossType::MeanSquaredLogarithmicError => MsleLoss::derivative(y_true, y_pred),
            LossType::MeanAbsolutePercentageError { epsilon } => {
                MapeLoss::derivative(y_true, y_pred, epsilon)
            }
        }
    }

    /// Name of the matching free function, e.g. `"huber_loss"`.
    pub fn name(&self) -> &'static str {
        match self {
            LossType::BinaryCrossEntropy { .. } => "binary_cross_entropy",
            LossType::BinaryFocalCrossEntropy { .. } => "binary_focal_cross_entropy",
            LossType::Hinge => "hinge_loss",
            LossType::Huber { .. } => "huber_loss",
            LossType::MeanSquaredError => "mean_squared_error",
            LossType::MeanAbsoluteError => "mean_absolute_error",
            LossType::MeanSquaredLogarithmicError => "mean_squared_logarithmic_error",
            LossType::MeanAbsolutePercentageError { .. } => "mean_absolute_percentage_error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_loss_type_dispatch() {
        let y_true = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y_pred = [0.8, 2.1, 2.9, 4.2, 5.2];
        assert_relative_eq!(LossType::MeanSquaredError.loss(&y_true, &y_pred).unwrap(), 0.028, epsilon = 1e-9);
        assert_relative_eq!(LossType::MeanAbsoluteError.loss(&y_true, &y_pred).unwrap(), 0.16, epsilon = 1e-9);
        assert_eq!(
            LossType::Huber { delta: 1.0 }.derivative(&y_true, &y_pred).unwrap(),
            HuberLoss::derivative(&y_true, &y_pred, 1.0).unwrap()
        );
    }

    #[test]
    fn test_loss_type_json_defaults() {
        let parsed: LossType = serde_json::from_str(r#"{"type":"binary_focal_cross_entropy"}"#).unwrap();
        assert_eq!(
            parsed,
            LossType::BinaryFocalCrossEntropy { gamma: 2.0, alpha: 0.25, epsilon: 1e-15 }
        );
        assert_eq!(parsed.name(), "binary_focal_cross_entropy");
    }

    #[test]
    fn test_loss_type_json_tagging() {
        let json = serde_json::to_string(&LossType::Huber { delta: 1.5 }).unwrap();
        assert_eq!(json, r#"{"type":"huber","delta":1.5}"#);

        let unit: LossType = serde_json::from_str(r#"{"type":"hinge"}"#).unwrap();
        assert_eq!(unit, LossType::Hinge);
    }

    #[test]
    fn test_loss_type_propagates_validation() {
        let err = LossType::Hinge.loss(&[0.0], &[1.0]).unwrap_err();
        assert_eq!(err.message(), "y_true can have values -1 or 1 only.");
    }
}
