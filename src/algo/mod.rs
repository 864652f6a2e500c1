//! Learning algorithms — the base contract and bundled predictors.

pub mod base;
pub mod baselines;

pub use base::{AlgoBase, Algorithm, TrainingStyle};
pub use baselines::MeanPredictor;
