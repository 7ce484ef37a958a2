pub mod error;
pub mod math;
pub mod loss;
pub mod config;
pub mod selftest;

// Convenience re-exports
pub use error::LossError;
pub use math::matrix::Matrix;
pub use loss::loss_type::LossType;
pub use config::LossConfig;
pub use loss::{
    binary_cross_entropy, binary_focal_cross_entropy, categorical_cross_entropy, contrastive_loss,
    hinge_loss, huber_loss, mean_absolute_error, mean_absolute_percentage_error, mean_squared_error,
    mean_squared_logarithmic_error, perplexity_loss,
};
pub use loss::{DEFAULT_ALPHA, DEFAULT_EPSILON, DEFAULT_GAMMA, PERPLEXITY_EPSILON};
