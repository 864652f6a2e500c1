//! Prediction results produced by [`Algorithm::predict`](crate::Algorithm::predict).

use crate::data::trainset::{ItemId, UserId};
use serde::{Deserialize, Serialize};

/// Extra information about how a prediction was made.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictionDetails {
    /// Whether the algorithm could not estimate this pair and the global-mean
    /// fallback was used instead.
    pub was_impossible: bool,
    #[serde(default)]
    pub reason: Option<String>,
}

impl PredictionDetails {
    pub fn possible() -> Self {
        Self::default()
    }

    pub fn impossible(reason: impl Into<String>) -> Self {
        Self {
            was_impossible: true,
            reason: Some(reason.into()),
        }
    }
}

/// One predicted rating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub uid: UserId,
    pub iid: ItemId,
    /// The true rating, when known (e.g. while testing on a held-out fold).
    pub r_ui: Option<f64>,
    /// The estimated rating, clipped to the trainset rating scale.
    pub est: f64,
    pub details: PredictionDetails,
}

impl Prediction {
    /// Absolute error against the true rating, when it is known.
    pub fn abs_error(&self) -> Option<f64> {
        self.r_ui.map(|r| (r - self.est).abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abs_error() {
        let pred = Prediction {
            uid: 1,
            iid: 2,
            r_ui: Some(4.0),
            est: 3.5,
            details: PredictionDetails::possible(),
        };
        assert_eq!(pred.abs_error(), Some(0.5));

        let blind = Prediction { r_ui: None, ..pred };
        assert_eq!(blind.abs_error(), None);
    }
}
