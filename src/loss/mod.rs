pub mod bce;
pub mod focal;
pub mod cross_entropy;
pub mod hinge;
pub mod huber;
pub mod mse;
pub mod mae;
pub mod msle;
pub mod mape;
pub mod perplexity;
pub mod contrastive;
pub mod loss_type;
pub(crate) mod validate;

/// Clip bound for the cross-entropy losses and MAPE.
pub const DEFAULT_EPSILON: f64 = 1e-15;
/// Clip floor for the true-class probability in perplexity.
pub const PERPLEXITY_EPSILON: f64 = 1e-7;
pub const DEFAULT_GAMMA: f64 = 2.0;
pub const DEFAULT_ALPHA: f64 = 0.25;

pub use bce::{BceLoss, binary_cross_entropy};
pub use focal::{FocalLoss, binary_focal_cross_entropy};
pub use cross_entropy::{CrossEntropyLoss, categorical_cross_entropy};
pub use hinge::{HingeLoss, hinge_loss};
pub use huber::{HuberLoss, huber_loss};
pub use mse::{MseLoss, mean_squared_error};
pub use mae::{MaeLoss, mean_absolute_error};
pub use msle::{MsleLoss, mean_squared_logarithmic_error};
pub use mape::{MapeLoss, mean_absolute_percentage_error};
pub use perplexity::{PerplexityLoss, perplexity_loss};
pub use contrastive::{ContrastiveLoss, contrastive_loss};
pub use loss_type::LossType;
