use crate::error::LossError;
use crate::loss::validate;
use crate::math::matrix::Matrix;

const NAME: &str = "perplexity_loss";

/// Perplexity of a language model over a batch of label-encoded sentences.
///
/// For each sentence b:
///
///   PP(b) = exp(-1/T · Σ_t ln(clip(y_pred[b][t][y_true[b][t]], ε, 1)))
///
/// and the loss is the mean of PP(b) over the batch.
pub struct PerplexityLoss;

impl PerplexityLoss {
    /// `y_true` — class indices, shape [batch, sentence_length]
    /// `y_pred` — one `sentence_length × vocab_size` probability matrix per sentence
    ///
    /// The label bound check rejects labels greater than the vocabulary size.
    /// A label equal to the vocabulary size passes that check but selects no
    /// column, and is rejected by the one-hot selection instead.
    pub fn loss(y_true: &[Vec<usize>], y_pred: &[Matrix], epsilon: f64) -> Result<f64, LossError> {
        if y_true.len() != y_pred.len() {
            return Err(validate::reject(NAME, "Batch size of y_true and y_pred must be equal."));
        }
        validate::non_empty(NAME, y_true.len())?;

        let vocab_size = y_pred[0].cols();
        if y_pred.iter().any(|sentence| sentence.cols() != vocab_size) {
            return Err(validate::reject(NAME, "Vocabulary size must be equal for every sentence."));
        }
        if y_true.iter().zip(y_pred.iter()).any(|(labels, probs)| labels.len() != probs.rows()) {
            return Err(validate::reject(NAME, "Sentence length of y_true and y_pred must be equal."));
        }
        if y_true.iter().flatten().any(|&label| label > vocab_size) {
            return Err(validate::reject(NAME, "Label value must not be greater than vocabulary size."));
        }
        if y_true.iter().any(|labels| labels.is_empty()) {
            return Err(validate::reject(NAME, validate::NOT_EMPTY));
        }

        let mut filter = vec![0.0; vocab_size];
        let mut perplexities = Vec::with_capacity(y_true.len());
        for (labels, probs) in y_true.iter().zip(y_pred.iter()) {
            let mut log_sum = 0.0;
            for (&label, row) in labels.iter().zip(probs.iter_rows()) {
                let p = validate::clip(select_true_class(&mut filter, label, row)?, epsilon, 1.0);
                log_sum += p.ln();
            }
            perplexities.push((-(log_sum / labels.len() as f64)).exp());
        }

        Ok(validate::mean(perplexities.into_iter(), y_true.len()))
    }
}

/// Σ_v onehot(label)[v] · row[v], reusing `filter` as the one-hot buffer.
fn select_true_class(filter: &mut [f64], label: usize, row: &[f64]) -> Result<f64, LossError> {
    let slot = filter
        .get_mut(label)
        .ok_or_else(|| validate::reject(NAME, "Label index out of range for one-hot selection."))?;
    *slot = 1.0;
    let selected = filter.iter().zip(row.iter()).map(|(f, p)| f * p).sum::<f64>();
    filter[label] = 0.0;
    Ok(selected)
}

pub fn perplexity_loss(y_true: &[Vec<usize>], y_pred: &[Matrix], epsilon: f64) -> Result<f64, LossError> {
    PerplexityLoss::loss(y_true, y_pred, epsilon)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loss::PERPLEXITY_EPSILON;
    use approx::assert_relative_eq;

    fn predictions(extra_row: bool) -> Vec<Matrix> {
        let mut first = vec![
            vec![0.28, 0.19, 0.21, 0.15, 0.15],
            vec![0.24, 0.19, 0.09, 0.18, 0.27],
        ];
        let mut second = vec![
            vec![0.03, 0.26, 0.21, 0.18, 0.30],
            vec![0.28, 0.10, 0.33, 0.15, 0.12],
        ];
        if extra_row {
            first.push(vec![0.30, 0.10, 0.20, 0.15, 0.25]);
            second.push(vec![0.30, 0.10, 0.20, 0.15, 0.25]);
        }
        vec![Matrix::from_data(first).unwrap(), Matrix::from_data(second).unwrap()]
    }

    #[test]
    fn test_perplexity_reference_value() {
        let loss = perplexity_loss(&[vec![1, 4], vec![2, 3]], &predictions(false), PERPLEXITY_EPSILON).unwrap();
        assert_relative_eq!(loss, 5.0247347775367945, epsilon = 1e-9);
    }

    #[test]
    fn test_perplexity_sentence_length_mismatch() {
        let err = perplexity_loss(&[vec![1, 4], vec![2, 3]], &predictions(true), PERPLEXITY_EPSILON).unwrap_err();
        assert_eq!(err.message(), "Sentence length of y_true and y_pred must be equal.");
    }

    #[test]
    fn test_perplexity_label_above_vocab_size() {
        let err = perplexity_loss(&[vec![1, 4], vec![2, 11]], &predictions(false), PERPLEXITY_EPSILON).unwrap_err();
        assert_eq!(err.message(), "Label value must not be greater than vocabulary size.");
    }

    #[test]
    fn test_perplexity_label_equal_to_vocab_size_passes_bound_check() {
        // 5 == vocab_size: not caught by the `>` bound, caught by the selection.
        let err = perplexity_loss(&[vec![1, 4], vec![2, 5]], &predictions(false), PERPLEXITY_EPSILON).unwrap_err();
        assert_eq!(err.message(), "Label index out of range for one-hot selection.");
    }

    #[test]
    fn test_perplexity_batch_size_mismatch() {
        let err = perplexity_loss(&[vec![1, 4]], &predictions(false), PERPLEXITY_EPSILON).unwrap_err();
        assert_eq!(err.message(), "Batch size of y_true and y_pred must be equal.");
    }

    #[test]
    fn test_perplexity_certain_model_is_one() {
        let probs = Matrix::from_data(vec![vec![0.0, 1.0], vec![1.0, 0.0]]).unwrap();
        let loss = perplexity_loss(&[vec![1, 0]], &[probs], PERPLEXITY_EPSILON).unwrap();
        assert_relative_eq!(loss, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_perplexity_zero_probability_is_clipped() {
        let probs = Matrix::from_data(vec![vec![1.0, 0.0]]).unwrap();
        let loss = perplexity_loss(&[vec![1]], &[probs], PERPLEXITY_EPSILON).unwrap();
        assert_relative_eq!(loss, 1.0 / PERPLEXITY_EPSILON, max_relative = 1e-9);
    }
}
