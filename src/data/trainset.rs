//! Training data as seen by an algorithm.

use serde::{Deserialize, Serialize};

/// Inner id of a user.
pub type UserId = u32;
/// Inner id of an item.
pub type ItemId = u32;

/// A single observed rating.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub uid: UserId,
    pub iid: ItemId,
    pub rating: f64,
}

impl Rating {
    pub fn new(uid: UserId, iid: ItemId, rating: f64) -> Self {
        Self { uid, iid, rating }
    }
}

/// The closed interval ratings live in. Estimates are clipped to it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingScale {
    #[serde(default = "default_scale_min")]
    pub min: f64,
    #[serde(default = "default_scale_max")]
    pub max: f64,
}

impl Default for RatingScale {
    fn default() -> Self {
        Self {
            min: default_scale_min(),
            max: default_scale_max(),
        }
    }
}

fn default_scale_min() -> f64 {
    1.0
}
fn default_scale_max() -> f64 {
    5.0
}

impl RatingScale {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn clip(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }
}

/// The data one training invocation runs on.
///
/// Owned by the algorithm instance once `fit`/`train` stores it. The global
/// mean is computed up front: it is the constant fallback that variant hooks
/// and the prediction layer read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trainset {
    ratings: Vec<Rating>,
    rating_scale: RatingScale,
    global_mean: f64,
}

impl Trainset {
    pub fn new(ratings: Vec<Rating>, rating_scale: RatingScale) -> Self {
        // An empty trainset has no mean; fall back to the scale midpoint so
        // the prediction fallback stays within the scale.
        let global_mean = if ratings.is_empty() {
            rating_scale.midpoint()
        } else {
            ratings.iter().map(|r| r.rating).sum::<f64>() / ratings.len() as f64
        };
        Self {
            ratings,
            rating_scale,
            global_mean,
        }
    }

    pub fn ratings(&self) -> &[Rating] {
        &self.ratings
    }

    pub fn n_ratings(&self) -> usize {
        self.ratings.len()
    }

    pub fn rating_scale(&self) -> RatingScale {
        self.rating_scale
    }

    pub fn global_mean(&self) -> f64 {
        self.global_mean
    }
}
