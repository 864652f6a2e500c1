//! End-to-end checks that new-style and legacy algorithms behave identically
//! through both training entry points, across repeated folds.

use pretty_assertions::assert_eq;
use recsys::{
    AlgoBase, Algorithm, Dataset, ItemId, KFold, Rating, RatingScale, RecError, TrainingStyle,
    Trainset, UserId,
};

fn two_fold_data() -> Vec<(Trainset, Vec<Rating>)> {
    let ratings = (0..20)
        .map(|i| Rating::new(i % 5, 10 + i % 4, 1.0 + (i % 5) as f64))
        .collect();
    let data = Dataset::from_ratings(ratings, RatingScale::default());
    KFold::new(2).split(&data).unwrap()
}

/// Implements only `fit_hook`: constant estimate 3, unit biases, and a
/// counter starting at -1 incremented once per training invocation.
struct NewStyleConstant {
    base: AlgoBase,
    est: f64,
    bu: f64,
    bi: f64,
    cnt: i64,
}

impl NewStyleConstant {
    fn new() -> Self {
        Self {
            base: AlgoBase::new(TrainingStyle::NewStyle),
            est: 0.0,
            bu: 0.0,
            bi: 0.0,
            cnt: -1,
        }
    }
}

impl Algorithm for NewStyleConstant {
    fn base(&self) -> &AlgoBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut AlgoBase {
        &mut self.base
    }

    fn fit_hook(&mut self) -> Result<(), RecError> {
        // Shared setup must already have stored the trainset.
        self.base.current_trainset()?;
        self.est = 3.0;
        self.bu = 1.0;
        self.bi = 1.0;
        self.cnt += 1;
        Ok(())
    }

    fn estimate(&self, _uid: UserId, _iid: ItemId) -> Result<f64, RecError> {
        Ok(self.est)
    }
}

/// The legacy twin: identical logic, but implemented in `train_hook` only.
struct LegacyConstant {
    base: AlgoBase,
    est: f64,
    bu: f64,
    bi: f64,
    cnt: i64,
}

impl LegacyConstant {
    fn new() -> Self {
        Self {
            base: AlgoBase::new(TrainingStyle::Legacy),
            est: 0.0,
            bu: 0.0,
            bi: 0.0,
            cnt: -1,
        }
    }
}

impl Algorithm for LegacyConstant {
    fn base(&self) -> &AlgoBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut AlgoBase {
        &mut self.base
    }

    fn train_hook(&mut self) -> Result<(), RecError> {
        self.base.current_trainset()?;
        self.est = 3.0;
        self.bu = 1.0;
        self.bi = 1.0;
        self.cnt += 1;
        Ok(())
    }

    fn estimate(&self, _uid: UserId, _iid: ItemId) -> Result<f64, RecError> {
        Ok(self.est)
    }
}

fn assert_cycle_state(est: f64, bu: f64, bi: f64, cnt: i64, fold: i64, base: &AlgoBase) {
    // Shared setup ran: the trainset is stored.
    assert!(base.trainset().is_some());
    // Variant logic ran, after setup, exactly once per invocation.
    assert_eq!((bu, bi), (1.0, 1.0));
    assert_eq!(cnt, fold);
    assert_eq!(est, 3.0);
}

#[test]
fn test_new_style_algo_via_fit() {
    let mut algo = NewStyleConstant::new();
    assert!(algo.base().deprecation_notice().is_none());
    for (i, (trainset, testset)) in two_fold_data().into_iter().enumerate() {
        algo.fit(trainset).unwrap();
        let predictions = algo.test(&testset).unwrap();
        assert!(predictions.iter().all(|p| p.est == 3.0));
        assert_cycle_state(algo.est, algo.bu, algo.bi, algo.cnt, i as i64, algo.base());
    }
}

#[test]
fn test_new_style_algo_via_train() {
    let mut algo = NewStyleConstant::new();
    for (i, (trainset, testset)) in two_fold_data().into_iter().enumerate() {
        algo.train(trainset).unwrap();
        let predictions = algo.test(&testset).unwrap();
        assert!(predictions.iter().all(|p| p.est == 3.0));
        assert_cycle_state(algo.est, algo.bu, algo.bi, algo.cnt, i as i64, algo.base());
    }
}

#[test]
fn test_legacy_algo_via_fit() {
    let algo = LegacyConstant::new();
    // Exactly one notice, recorded at construction.
    assert!(algo.base().deprecation_notice().is_some());

    let mut algo = algo;
    for (i, (trainset, testset)) in two_fold_data().into_iter().enumerate() {
        algo.fit(trainset).unwrap();
        let predictions = algo.test(&testset).unwrap();
        assert!(predictions.iter().all(|p| p.est == 3.0));
        assert_cycle_state(algo.est, algo.bu, algo.bi, algo.cnt, i as i64, algo.base());
    }
}

#[test]
fn test_legacy_algo_via_train() {
    let mut algo = LegacyConstant::new();
    assert!(algo.base().deprecation_notice().is_some());
    for (i, (trainset, testset)) in two_fold_data().into_iter().enumerate() {
        algo.train(trainset).unwrap();
        let predictions = algo.test(&testset).unwrap();
        assert!(predictions.iter().all(|p| p.est == 3.0));
        assert_cycle_state(algo.est, algo.bu, algo.bi, algo.cnt, i as i64, algo.base());
    }
}

#[test]
fn test_both_styles_yield_identical_observable_state() {
    let folds = two_fold_data();

    let mut new_style = NewStyleConstant::new();
    let mut legacy = LegacyConstant::new();
    for (trainset, _) in &folds {
        new_style.fit(trainset.clone()).unwrap();
        legacy.fit(trainset.clone()).unwrap();
    }

    assert_eq!(new_style.cnt, legacy.cnt);
    assert_eq!((new_style.bu, new_style.bi), (legacy.bu, legacy.bi));
    assert_eq!(new_style.base().fit_count(), legacy.base().fit_count());
    assert_eq!(
        new_style.base().trainset().unwrap(),
        legacy.base().trainset().unwrap()
    );
}
