//! Error types for the recsys crate.

use thiserror::Error;

/// Top-level error type for recommender operations.
#[derive(Debug, Error)]
pub enum RecError {
    #[error("Dataset error: {0}")]
    Dataset(String),

    #[error("Training error: {0}")]
    Training(String),

    /// Raised by an algorithm's `estimate` when no prediction can be made
    /// for the given user/item pair. The prediction layer catches this and
    /// falls back to the trainset global mean.
    #[error("Prediction impossible: {0}")]
    PredictionImpossible(String),

    /// The algorithm has never been trained: no trainset is stored.
    #[error("Algorithm is not fitted: {0}")]
    NotFitted(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl RecError {
    pub fn dataset(msg: impl Into<String>) -> Self {
        Self::Dataset(msg.into())
    }

    pub fn training(msg: impl Into<String>) -> Self {
        Self::Training(msg.into())
    }

    pub fn impossible(msg: impl Into<String>) -> Self {
        Self::PredictionImpossible(msg.into())
    }

    pub fn not_fitted(msg: impl Into<String>) -> Self {
        Self::NotFitted(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
