//! Fail-fast precondition checks shared by the losses.
//!
//! Each helper logs the rejection at `debug` under the calling loss's name and
//! returns `LossError::InvalidInput` with the message the caller supplies.

use crate::error::LossError;

pub(crate) const SAME_LENGTH: &str = "Input arrays must have the same length.";
pub(crate) const NOT_EMPTY: &str = "Input arrays must not be empty.";

/// Builds the error and records which loss rejected its input.
pub(crate) fn reject(loss: &str, message: &str) -> LossError {
    log::debug!("{loss}: rejected input: {message}");
    LossError::invalid(message)
}

pub(crate) fn same_length(
    loss: &str,
    y_true: &[f64],
    y_pred: &[f64],
    message: &str,
) -> Result<(), LossError> {
    if y_true.len() != y_pred.len() {
        return Err(reject(loss, message));
    }
    Ok(())
}

/// Mean-reduced losses have no value over zero elements.
pub(crate) fn non_empty(loss: &str, len: usize) -> Result<(), LossError> {
    if len == 0 {
        return Err(reject(loss, NOT_EMPTY));
    }
    Ok(())
}

/// Length check followed by the emptiness check, the preamble of every
/// element-wise loss.
pub(crate) fn paired(
    loss: &str,
    y_true: &[f64],
    y_pred: &[f64],
    message: &str,
) -> Result<(), LossError> {
    same_length(loss, y_true, y_pred, message)?;
    non_empty(loss, y_true.len())
}

/// Every value must be one of `allowed`, compared exactly.
pub(crate) fn labels_in(
    loss: &str,
    values: &[f64],
    allowed: &[f64],
    message: &str,
) -> Result<(), LossError> {
    if values.iter().any(|v| !allowed.contains(v)) {
        return Err(reject(loss, message));
    }
    Ok(())
}

/// Limits `x` to [lo, hi]. NaN passes through unchanged.
pub(crate) fn clip(x: f64, lo: f64, hi: f64) -> f64 {
    if x < lo {
        lo
    } else if x > hi {
        hi
    } else {
        x
    }
}

pub(crate) fn mean(values: impl Iterator<Item = f64>, n: usize) -> f64 {
    values.sum::<f64>() / n as f64
}
