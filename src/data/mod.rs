//! Ratings data — loading, trainsets, fold splitting.

pub mod dataset;
pub mod trainset;

pub use dataset::{Dataset, KFold, Reader};
pub use trainset::{ItemId, Rating, RatingScale, Trainset, UserId};
