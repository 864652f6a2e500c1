//! Trivial bundled predictors.

use crate::algo::base::{AlgoBase, Algorithm, TrainingStyle};
use crate::data::trainset::{ItemId, UserId};
use crate::error::RecError;
use std::collections::HashMap;

/// Predicts the trainset global mean plus per-user and per-item bias terms.
///
/// A new-style algorithm: it implements only `fit_hook`, and calling either
/// `fit` or `train` trains it.
#[derive(Debug, Clone)]
pub struct MeanPredictor {
    base: AlgoBase,
    mean: f64,
    user_bias: HashMap<UserId, f64>,
    item_bias: HashMap<ItemId, f64>,
}

impl MeanPredictor {
    pub fn new() -> Self {
        Self {
            base: AlgoBase::new(TrainingStyle::NewStyle),
            mean: 0.0,
            user_bias: HashMap::new(),
            item_bias: HashMap::new(),
        }
    }
}

impl Default for MeanPredictor {
    fn default() -> Self {
        Self::new()
    }
}

fn mean_offsets<K: std::hash::Hash + Eq>(
    pairs: impl Iterator<Item = (K, f64)>,
    global_mean: f64,
) -> HashMap<K, f64> {
    let mut sums: HashMap<K, (f64, usize)> = HashMap::new();
    for (key, rating) in pairs {
        let entry = sums.entry(key).or_insert((0.0, 0));
        entry.0 += rating;
        entry.1 += 1;
    }
    sums.into_iter()
        .map(|(key, (sum, count))| (key, sum / count as f64 - global_mean))
        .collect()
}

impl Algorithm for MeanPredictor {
    fn base(&self) -> &AlgoBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut AlgoBase {
        &mut self.base
    }

    fn fit_hook(&mut self) -> Result<(), RecError> {
        let (mean, user_bias, item_bias) = {
            let ts = self.base.current_trainset()?;
            let mean = ts.global_mean();
            (
                mean,
                mean_offsets(ts.ratings().iter().map(|r| (r.uid, r.rating)), mean),
                mean_offsets(ts.ratings().iter().map(|r| (r.iid, r.rating)), mean),
            )
        };
        self.mean = mean;
        self.user_bias = user_bias;
        self.item_bias = item_bias;
        tracing::debug!(
            target: "recsys::algo",
            n_users = self.user_bias.len(),
            n_items = self.item_bias.len(),
            "mean predictor fitted"
        );
        Ok(())
    }

    fn estimate(&self, uid: UserId, iid: ItemId) -> Result<f64, RecError> {
        let bu = self.user_bias.get(&uid);
        let bi = self.item_bias.get(&iid);
        if bu.is_none() && bi.is_none() {
            return Err(RecError::impossible(format!(
                "user {uid} and item {iid} are both unknown"
            )));
        }
        Ok(self.mean + bu.copied().unwrap_or(0.0) + bi.copied().unwrap_or(0.0))
    }
}
