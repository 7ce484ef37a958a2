use crate::error::LossError;
use crate::loss::{self, DEFAULT_ALPHA, DEFAULT_EPSILON, DEFAULT_GAMMA, PERPLEXITY_EPSILON};
use crate::math::matrix::Matrix;
use crate::selftest::report::CaseResult;

/// A literal example and the result it must reproduce.
pub struct Case {
    pub name: &'static str,
    pub function: &'static str,
    pub expected: CaseResult,
    pub eval: fn() -> Result<f64, LossError>,
}

fn value(value: f64) -> CaseResult {
    CaseResult::Value { value }
}

fn error(message: &str) -> CaseResult {
    CaseResult::Error { message: message.to_owned() }
}

const SAME_LENGTH: &str = "Input arrays must have the same length.";

const BINARY_TRUE: [f64; 5] = [0.0, 1.0, 1.0, 0.0, 1.0];
const BINARY_PRED: [f64; 5] = [0.2, 0.7, 0.9, 0.3, 0.8];
const SHORT_PRED: [f64; 4] = [0.3, 0.8, 0.9, 0.2];
const REGRESSION_TRUE: [f64; 5] = [1.0, 2.0, 3.0, 4.0, 5.0];
const REGRESSION_PRED: [f64; 5] = [0.8, 2.1, 2.9, 4.2, 5.2];

fn sentence_predictions(extra_row: bool) -> Result<Vec<Matrix>, LossError> {
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
    Ok(vec![Matrix::from_data(first)?, Matrix::from_data(second)?])
}

fn vector_pairs() -> Result<Vec<Matrix>, LossError> {
    Ok(vec![
        Matrix::from_data(vec![
            vec![0.06796051, 0.86319405, 0.83875762, 0.4246106, 0.4142061],
            vec![0.1648123, 0.23396954, 0.26760326, 0.90300768, 0.82789254],
        ])?,
        Matrix::from_data(vec![
            vec![0.73989664, 0.929347, 0.37955765, 0.17692685, 0.09868801],
            vec![0.23727054, 0.41889803, 0.44162983, 0.9783071, 0.06199906],
        ])?,
    ])
}

fn vector_triples() -> Result<Vec<Matrix>, LossError> {
    Ok(vec![
        Matrix::from_data(vec![
            vec![0.06796051, 0.86319405, 0.83875762, 0.4246106, 0.4142061],
            vec![0.23727054, 0.41889803, 0.44162983, 0.9783071, 0.06199906],
            vec![0.1648123, 0.23396954, 0.26760326, 0.90300768, 0.82789254],
        ])?,
        Matrix::from_data(vec![
            vec![0.73989664, 0.929347, 0.37955765, 0.17692685, 0.09868801],
            vec![0.23727054, 0.41889803, 0.44162983, 0.9783071, 0.06199906],
            vec![0.69836355, 0.13875306, 0.7171909, 0.25053484, 0.54151793],
        ])?,
    ])
}

/// Every built-in example, in a stable order.
pub fn all() -> Vec<Case> {
    vec![
        Case {
            name: "five labels",
            function: "binary_cross_entropy",
            expected: value(0.2529995012327421),
            eval: || loss::binary_cross_entropy(&BINARY_TRUE, &BINARY_PRED, DEFAULT_EPSILON),
        },
        Case {
            name: "length mismatch",
            function: "binary_cross_entropy",
            expected: error(SAME_LENGTH),
            eval: || loss::binary_cross_entropy(&BINARY_TRUE, &SHORT_PRED, DEFAULT_EPSILON),
        },
        Case {
            name: "five labels",
            function: "binary_focal_cross_entropy",
            expected: value(0.008257977659239775),
            eval: || {
                loss::binary_focal_cross_entropy(&BINARY_TRUE, &BINARY_PRED, DEFAULT_GAMMA, DEFAULT_ALPHA, DEFAULT_EPSILON)
            },
        },
        Case {
            name: "length mismatch",
            function: "binary_focal_cross_entropy",
            expected: error(SAME_LENGTH),
            eval: || {
                loss::binary_focal_cross_entropy(&BINARY_TRUE, &SHORT_PRED, DEFAULT_GAMMA, DEFAULT_ALPHA, DEFAULT_EPSILON)
            },
        },
        Case {
            name: "three one-hot rows",
            function: "categorical_cross_entropy",
            expected: value(0.567395975254385),
            eval: || {
                let y_true = Matrix::from_data(vec![vec![1.0, 0.0, 0.0], vec![0.0, 1.0, 0.0], vec![0.0, 0.0, 1.0]])?;
                let y_pred = Matrix::from_data(vec![vec![0.9, 0.1, 0.0], vec![0.2, 0.7, 0.1], vec![0.0, 0.1, 0.9]])?;
                loss::categorical_cross_entropy(&y_true, &y_pred, DEFAULT_EPSILON)
            },
        },
        Case {
            name: "shape mismatch",
            function: "categorical_cross_entropy",
            expected: error("Input arrays must have the same shape."),
            eval: || {
                let y_true = Matrix::from_data(vec![vec![1.0, 0.0], vec![0.0, 1.0]])?;
                let y_pred = Matrix::from_data(vec![vec![0.9, 0.1, 0.0], vec![0.2, 0.7, 0.1]])?;
                loss::categorical_cross_entropy(&y_true, &y_pred, DEFAULT_EPSILON)
            },
        },
        Case {
            name: "label outside {0, 1}",
            function: "categorical_cross_entropy",
            expected: error("y_true must be one-hot encoded."),
            eval: || {
                let y_true = Matrix::from_data(vec![vec![2.0, 0.0, 1.0], vec![1.0, 0.0, 0.0]])?;
                let y_pred = Matrix::from_data(vec![vec![0.9, 0.1, 0.0], vec![0.2, 0.7, 0.1]])?;
                loss::categorical_cross_entropy(&y_true, &y_pred, DEFAULT_EPSILON)
            },
        },
        Case {
            name: "two hot entries in a row",
            function: "categorical_cross_entropy",
            expected: error("y_true must be one-hot encoded."),
            eval: || {
                let y_true = Matrix::from_data(vec![vec![1.0, 0.0, 1.0], vec![1.0, 0.0, 0.0]])?;
                let y_pred = Matrix::from_data(vec![vec![0.9, 0.1, 0.0], vec![0.2, 0.7, 0.1]])?;
                loss::categorical_cross_entropy(&y_true, &y_pred, DEFAULT_EPSILON)
            },
        },
        Case {
            name: "predictions not normalized",
            function: "categorical_cross_entropy",
            expected: error("Predicted probabilities must sum to approximately 1."),
            eval: || {
                let y_true = Matrix::from_data(vec![vec![1.0, 0.0, 0.0], vec![0.0, 1.0, 0.0]])?;
                let y_pred = Matrix::from_data(vec![vec![0.9, 0.1, 0.1], vec![0.2, 0.7, 0.1]])?;
                loss::categorical_cross_entropy(&y_true, &y_pred, DEFAULT_EPSILON)
            },
        },
        Case {
            name: "five margins",
            function: "hinge_loss",
            expected: value(1.52),
            eval: || loss::hinge_loss(&[-1.0, 1.0, 1.0, -1.0, 1.0], &[-4.0, -0.3, 0.7, 5.0, 10.0]),
        },
        Case {
            name: "length mismatch",
            function: "hinge_loss",
            expected: error("Length of predicted and actual array must be same."),
            eval: || loss::hinge_loss(&[-1.0, 1.0, 1.0, -1.0, 1.0, 1.0], &[-4.0, -0.3, 0.7, 5.0, 10.0]),
        },
        Case {
            name: "label outside {-1, 1}",
            function: "hinge_loss",
            expected: error("y_true can have values -1 or 1 only."),
            eval: || loss::hinge_loss(&[-1.0, 1.0, 10.0, -1.0, 1.0], &[-4.0, -0.3, 0.7, 5.0, 10.0]),
        },
        Case {
            name: "delta 1, mixed regime",
            function: "huber_loss",
            expected: value(2.102),
            eval: || loss::huber_loss(&[0.9, 10.0, 2.0, 1.0, 5.2], &[0.8, 2.1, 2.9, 4.2, 5.2], 1.0),
        },
        Case {
            name: "delta 1, large outlier",
            function: "huber_loss",
            expected: value(1.80164),
            eval: || loss::huber_loss(&[11.0, 21.0, 3.32, 4.0, 5.0], &[8.3, 20.8, 2.9, 11.2, 5.0], 1.0),
        },
        Case {
            name: "length mismatch",
            function: "huber_loss",
            expected: error(SAME_LENGTH),
            eval: || loss::huber_loss(&[11.0, 21.0, 3.32, 4.0], &[8.3, 20.8, 2.9, 11.2, 5.0], 1.0),
        },
        Case {
            name: "five values",
            function: "mean_squared_error",
            expected: value(0.028),
            eval: || loss::mean_squared_error(&REGRESSION_TRUE, &REGRESSION_PRED),
        },
        Case {
            name: "length mismatch",
            function: "mean_squared_error",
            expected: error(SAME_LENGTH),
            eval: || loss::mean_squared_error(&REGRESSION_TRUE, &SHORT_PRED),
        },
        Case {
            name: "five values",
            function: "mean_absolute_error",
            expected: value(0.16),
            eval: || loss::mean_absolute_error(&REGRESSION_TRUE, &REGRESSION_PRED),
        },
        Case {
            name: "length mismatch",
            function: "mean_absolute_error",
            expected: error(SAME_LENGTH),
            eval: || loss::mean_absolute_error(&REGRESSION_TRUE, &[0.3, 0.8, 0.9, 5.2]),
        },
        Case {
            name: "five values",
            function: "mean_squared_logarithmic_error",
            expected: value(0.0030860877925181344),
            eval: || loss::mean_squared_logarithmic_error(&REGRESSION_TRUE, &REGRESSION_PRED),
        },
        Case {
            name: "length mismatch",
            function: "mean_squared_logarithmic_error",
            expected: error(SAME_LENGTH),
            eval: || loss::mean_squared_logarithmic_error(&REGRESSION_TRUE, &SHORT_PRED),
        },
        Case {
            name: "four values",
            function: "mean_absolute_percentage_error",
            expected: value(0.13125),
            eval: || {
                loss::mean_absolute_percentage_error(&[10.0, 20.0, 30.0, 40.0], &[12.0, 18.0, 33.0, 45.0], DEFAULT_EPSILON)
            },
        },
        Case {
            name: "off by one",
            function: "mean_absolute_percentage_error",
            expected: value(0.5208333333333333),
            eval: || {
                loss::mean_absolute_percentage_error(&[1.0, 2.0, 3.0, 4.0], &[2.0, 3.0, 4.0, 5.0], DEFAULT_EPSILON)
            },
        },
        Case {
            name: "twelve months",
            function: "mean_absolute_percentage_error",
            expected: value(0.064671076436071),
            eval: || {
                loss::mean_absolute_percentage_error(
                    &[34.0, 37.0, 44.0, 47.0, 48.0, 48.0, 46.0, 43.0, 32.0, 27.0, 26.0, 24.0],
                    &[37.0, 40.0, 46.0, 44.0, 46.0, 50.0, 45.0, 44.0, 34.0, 30.0, 22.0, 23.0],
                    DEFAULT_EPSILON,
                )
            },
        },
        Case {
            name: "two sentences, vocab 5",
            function: "perplexity_loss",
            expected: value(5.0247347775367945),
            eval: || loss::perplexity_loss(&[vec![1, 4], vec![2, 3]], &sentence_predictions(false)?, PERPLEXITY_EPSILON),
        },
        Case {
            name: "sentence length mismatch",
            function: "perplexity_loss",
            expected: error("Sentence length of y_true and y_pred must be equal."),
            eval: || loss::perplexity_loss(&[vec![1, 4], vec![2, 3]], &sentence_predictions(true)?, PERPLEXITY_EPSILON),
        },
        Case {
            name: "label above vocabulary",
            function: "perplexity_loss",
            expected: error("Label value must not be greater than vocabulary size."),
            eval: || loss::perplexity_loss(&[vec![1, 4], vec![2, 11]], &sentence_predictions(false)?, PERPLEXITY_EPSILON),
        },
        Case {
            name: "batch size mismatch",
            function: "perplexity_loss",
            expected: error("Batch size of y_true and y_pred must be equal."),
            eval: || loss::perplexity_loss(&[vec![1, 4]], &sentence_predictions(false)?, PERPLEXITY_EPSILON),
        },
        Case {
            name: "similar and dissimilar pair, m = 10",
            function: "contrastive_loss",
            expected: value(9.986418202141381),
            eval: || loss::contrastive_loss(&vector_pairs()?, &[0.0, 1.0], 10.0),
        },
        Case {
            name: "target outside {0, 1}",
            function: "contrastive_loss",
            expected: error("target values must be either 0 or 1."),
            eval: || loss::contrastive_loss(&vector_pairs()?, &[0.0, 5.0], 10.0),
        },
        Case {
            name: "triples instead of pairs",
            function: "contrastive_loss",
            expected: error("inputs shape must be equal to (batch_size, 2, n)"),
            eval: || loss::contrastive_loss(&vector_triples()?, &[0.0, 1.0], 10.0),
        },
    ]
}
