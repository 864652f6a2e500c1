//! # recsys — lightweight recommender-system toolkit
//!
//! The core of this crate is the [`Algorithm`] trait and its dual training
//! entry points: `fit` is the canonical one, `train` the deprecated name kept
//! for pre-existing custom code. An algorithm declares which training hooks
//! it implements via a [`TrainingStyle`] tag at construction, and either
//! entry point dispatches to the right hook after running shared setup, so
//! callers and algorithm authors can mix the two names freely without double
//! execution or missed setup.
//!
//! ```
//! use recsys::{Algorithm, Dataset, KFold, MeanPredictor, Rating, RatingScale};
//!
//! let data = Dataset::from_ratings(
//!     vec![
//!         Rating::new(1, 10, 4.0),
//!         Rating::new(1, 11, 3.0),
//!         Rating::new(2, 10, 5.0),
//!         Rating::new(2, 11, 2.0),
//!     ],
//!     RatingScale::default(),
//! );
//! let mut algo = MeanPredictor::new();
//! for (trainset, testset) in KFold::new(2).split(&data)? {
//!     algo.fit(trainset)?;
//!     let predictions = algo.test(&testset)?;
//!     assert_eq!(predictions.len(), testset.len());
//! }
//! # Ok::<(), recsys::RecError>(())
//! ```

pub mod algo;
pub mod data;
pub mod error;
pub mod prediction;

pub use algo::base::{AlgoBase, Algorithm, TrainingStyle};
pub use algo::baselines::MeanPredictor;
pub use data::dataset::{Dataset, KFold, Reader};
pub use data::trainset::{ItemId, Rating, RatingScale, Trainset, UserId};
pub use error::RecError;
pub use prediction::{Prediction, PredictionDetails};
