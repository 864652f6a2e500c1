//! The algorithm base contract — dual `fit`/`train` entry points.
//!
//! `fit` is the canonical training entry point; `train` is kept for
//! pre-existing custom code. A concrete algorithm declares once, at
//! construction, which training hooks it implements (its [`TrainingStyle`]),
//! and the provided `fit`/`train` methods dispatch on that tag: the matching
//! hook runs when present, the other hook runs when only it is present, and
//! neither runs for a bookkeeping-only algorithm. Shared setup (storing the
//! trainset) always runs first, inside the entry point itself, so a training
//! invocation by either name executes setup exactly once and variant logic
//! exactly once, in that order.

use crate::data::trainset::{ItemId, Trainset, UserId};
use crate::error::RecError;
use crate::prediction::{Prediction, PredictionDetails};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which training hooks a concrete algorithm implements.
///
/// Resolved once at construction; dispatch is a fixed match on this tag, so
/// behavior is deterministic and independent of call order or call count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingStyle {
    /// Implements `fit_hook` only.
    NewStyle,
    /// Implements `train_hook` only. Deprecated; emits one warning per
    /// construction.
    Legacy,
    /// Implements both hooks; each entry point runs its own, no delegation.
    Both,
    /// Implements neither hook; training is shared setup only.
    BaseOnly,
}

impl TrainingStyle {
    pub fn implements_fit(self) -> bool {
        matches!(self, Self::NewStyle | Self::Both)
    }

    pub fn implements_train(self) -> bool {
        matches!(self, Self::Legacy | Self::Both)
    }
}

/// Shared state every algorithm carries: the declared training style, the
/// trainset of the latest training invocation, and bookkeeping.
#[derive(Debug, Clone)]
pub struct AlgoBase {
    style: TrainingStyle,
    trainset: Option<Trainset>,
    fit_count: usize,
    last_fit_at: Option<DateTime<Utc>>,
    deprecation_notice: Option<String>,
}

impl AlgoBase {
    pub fn new(style: TrainingStyle) -> Self {
        let deprecation_notice = if style == TrainingStyle::Legacy {
            let notice = "algorithm implements only train_hook(); the train() \
                          entry point is deprecated, implement fit_hook() instead";
            tracing::warn!(target: "recsys::algo", "{notice}");
            Some(notice.to_string())
        } else {
            None
        };
        Self {
            style,
            trainset: None,
            fit_count: 0,
            last_fit_at: None,
            deprecation_notice,
        }
    }

    pub fn style(&self) -> TrainingStyle {
        self.style
    }

    /// The trainset of the latest training invocation, if any.
    pub fn trainset(&self) -> Option<&Trainset> {
        self.trainset.as_ref()
    }

    /// Like [`AlgoBase::trainset`] but an error when never trained. This is
    /// the surface where a skipped-setup contract violation shows up.
    pub fn current_trainset(&self) -> Result<&Trainset, RecError> {
        self.trainset
            .as_ref()
            .ok_or_else(|| RecError::not_fitted("fit() or train() has not been called"))
    }

    /// How many training invocations have completed setup on this instance.
    pub fn fit_count(&self) -> usize {
        self.fit_count
    }

    pub fn last_fit_at(&self) -> Option<DateTime<Utc>> {
        self.last_fit_at
    }

    /// The deprecation notice recorded at construction, for `Legacy`
    /// algorithms only.
    pub fn deprecation_notice(&self) -> Option<&str> {
        self.deprecation_notice.as_deref()
    }

    /// Shared setup. The provided `fit`/`train` entry points call this once
    /// per invocation, before any variant hook; an algorithm overriding an
    /// entry point wholesale must do the same.
    pub fn begin_fit(&mut self, trainset: Trainset) {
        self.trainset = Some(trainset);
        self.fit_count += 1;
        self.last_fit_at = Some(Utc::now());
        tracing::debug!(
            target: "recsys::algo",
            fit_count = self.fit_count,
            "trainset stored"
        );
    }
}

/// The capability set of a learning algorithm.
///
/// Implementors embed an [`AlgoBase`], expose it through `base`/`base_mut`,
/// supply `estimate`, and implement the hook(s) matching their declared
/// [`TrainingStyle`]. Hooks read the freshly stored trainset through
/// `self.base().current_trainset()`.
pub trait Algorithm {
    fn base(&self) -> &AlgoBase;
    fn base_mut(&mut self) -> &mut AlgoBase;

    /// Estimate a rating for a user/item pair.
    /// `Err(RecError::PredictionImpossible)` makes [`Algorithm::predict`]
    /// fall back to the trainset global mean.
    fn estimate(&self, uid: UserId, iid: ItemId) -> Result<f64, RecError>;

    /// Variant training logic for new-style algorithms. Runs after shared
    /// setup; no-op by default.
    fn fit_hook(&mut self) -> Result<(), RecError> {
        Ok(())
    }

    /// Variant training logic for legacy algorithms. Runs after shared
    /// setup; no-op by default.
    fn train_hook(&mut self) -> Result<(), RecError> {
        Ok(())
    }

    /// Train on `trainset`. Shared setup first, then exactly one variant
    /// hook: `fit_hook` when declared, otherwise `train_hook` for a `Legacy`
    /// algorithm, otherwise nothing.
    fn fit(&mut self, trainset: Trainset) -> Result<&mut Self, RecError>
    where
        Self: Sized,
    {
        self.base_mut().begin_fit(trainset);
        let style = self.base().style();
        if style.implements_fit() {
            self.fit_hook()?;
        } else if style.implements_train() {
            self.train_hook()?;
        }
        Ok(self)
    }

    /// Deprecated training entry point. Shared setup first, then exactly one
    /// variant hook: `train_hook` when declared, otherwise `fit_hook` for a
    /// new-style algorithm, otherwise nothing.
    fn train(&mut self, trainset: Trainset) -> Result<&mut Self, RecError>
    where
        Self: Sized,
    {
        self.base_mut().begin_fit(trainset);
        let style = self.base().style();
        if style.implements_train() {
            self.train_hook()?;
        } else if style.implements_fit() {
            self.fit_hook()?;
        }
        Ok(self)
    }

    /// Predict the rating of `uid` for `iid`. The estimate is clipped to the
    /// trainset rating scale; an impossible estimate falls back to the global
    /// mean with `was_impossible` set.
    fn predict(
        &self,
        uid: UserId,
        iid: ItemId,
        r_ui: Option<f64>,
    ) -> Result<Prediction, RecError> {
        let trainset = self.base().current_trainset()?;
        let scale = trainset.rating_scale();
        let global_mean = trainset.global_mean();
        let (est, details) = match self.estimate(uid, iid) {
            Ok(est) => (est, PredictionDetails::possible()),
            Err(RecError::PredictionImpossible(reason)) => {
                (global_mean, PredictionDetails::impossible(reason))
            }
            Err(e) => return Err(e),
        };
        Ok(Prediction {
            uid,
            iid,
            r_ui,
            est: scale.clip(est),
            details,
        })
    }

    /// Predict every rating in `testset`.
    fn test(
        &self,
        testset: &[crate::data::trainset::Rating],
    ) -> Result<Vec<Prediction>, RecError> {
        testset
            .iter()
            .map(|r| self.predict(r.uid, r.iid, Some(r.rating)))
            .collect()
    }
}
