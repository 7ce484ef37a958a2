use serde::{Serialize, Deserialize};
use thiserror::Error;

use crate::error::LossError;
use crate::loss::loss_type::LossType;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Invalid(#[from] LossError),
}

/// A named, JSON-persisted choice of loss and hyperparameters.
///
/// Saved independently of any data so that an evaluation setup can be
/// stored and reloaded, e.g.
///
/// ```json
/// { "name": "robust-regression", "loss": { "type": "huber", "delta": 1.0 } }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LossConfig {
    pub name: String,
    pub loss: LossType,
    #[serde(default)]
    pub description: Option<String>,
}

impl LossConfig {
    pub fn new(name: impl Into<String>, loss: LossType) -> Self {
        LossConfig {
            name: name.into(),
            loss,
            description: None,
        }
    }

    /// Checks the hyperparameters the loss functions themselves take on trust:
    /// ε in (0, 0.5), γ ≥ 0, α in [0, 1], δ > 0.
    pub fn validate(&self) -> Result<(), LossError> {
        match self.loss {
            LossType::BinaryCrossEntropy { epsilon }
            | LossType::MeanAbsolutePercentageError { epsilon } => check_epsilon(epsilon),
            LossType::BinaryFocalCrossEntropy { gamma, alpha, epsilon } => {
                check_epsilon(epsilon)?;
                if gamma.is_nan() || gamma < 0.0 {
                    return Err(LossError::invalid(format!("gamma must be non-negative, got {gamma}.")));
                }
                if !(0.0..=1.0).contains(&alpha) {
                    return Err(LossError::invalid(format!("alpha must be in [0, 1], got {alpha}.")));
                }
                Ok(())
            }
            LossType::Huber { delta } => {
                if delta.is_nan() || delta <= 0.0 {
                    return Err(LossError::invalid(format!("delta must be positive, got {delta}.")));
                }
                Ok(())
            }
            LossType::Hinge
            | LossType::MeanSquaredError
            | LossType::MeanAbsoluteError
            | LossType::MeanSquaredLogarithmicError => Ok(()),
        }
    }

    /// Serializes the config to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<(), ConfigError> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes and validates a config previously written by `save_json`.
    pub fn load_json(path: &str) -> Result<LossConfig, ConfigError> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let config: LossConfig = serde_json::from_reader(reader)?;
        config.validate()?;
        log::debug!("loaded loss config '{}' ({})", config.name, config.loss.name());
        Ok(config)
    }
}

fn check_epsilon(epsilon: f64) -> Result<(), LossError> {
    if !(epsilon > 0.0 && epsilon < 0.5) {
        return Err(LossError::invalid(format!("epsilon must be in (0, 0.5), got {epsilon}.")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_defaults() {
        let focal: LossType = serde_json::from_str(r#"{"type":"binary_focal_cross_entropy"}"#).unwrap();
        assert!(LossConfig::new("focal", focal).validate().is_ok());
        assert!(LossConfig::new("mse", LossType::MeanSquaredError).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_hyperparameters() {
        let cases = [
            LossType::Huber { delta: 0.0 },
            LossType::Huber { delta: f64::NAN },
            LossType::BinaryCrossEntropy { epsilon: 0.0 },
            LossType::MeanAbsolutePercentageError { epsilon: 0.5 },
            LossType::BinaryFocalCrossEntropy { gamma: -1.0, alpha: 0.25, epsilon: 1e-15 },
            LossType::BinaryFocalCrossEntropy { gamma: 2.0, alpha: 1.5, epsilon: 1e-15 },
        ];
        for loss in cases {
            assert!(LossConfig::new("bad", loss).validate().is_err(), "{loss:?} should be rejected");
        }
    }

    #[test]
    fn test_description_is_optional() {
        let config: LossConfig =
            serde_json::from_str(r#"{"name":"svm","loss":{"type":"hinge"}}"#).unwrap();
        assert_eq!(config, LossConfig::new("svm", LossType::Hinge));
    }
}
