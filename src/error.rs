use thiserror::Error;

/// Error returned by every loss function when its inputs break a contract.
///
/// All checks run before any arithmetic, so an `Err` never carries a
/// partially computed loss.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LossError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl LossError {
    pub fn invalid(message: impl Into<String>) -> Self {
        LossError::InvalidInput(message.into())
    }

    /// The human-readable contract violation, without the `Invalid input:` prefix.
    pub fn message(&self) -> &str {
        match self {
            LossError::InvalidInput(msg) => msg,
        }
    }
}
