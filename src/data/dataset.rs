//! Dataset loading and fold splitting.

use crate::data::trainset::{Rating, RatingScale, Trainset};
use crate::error::RecError;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// How to parse a ratings file: one `user item rating [timestamp]` record per
/// line, ml-100k style. Extra fields past the rating are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reader {
    /// Field separator; `None` splits on any whitespace.
    #[serde(default)]
    pub sep: Option<char>,
    /// Header lines to skip.
    #[serde(default)]
    pub skip_lines: usize,
    #[serde(default)]
    pub rating_scale: RatingScale,
}

impl Default for Reader {
    fn default() -> Self {
        Self {
            sep: None,
            skip_lines: 0,
            rating_scale: RatingScale::default(),
        }
    }
}

/// A full set of observed ratings, not yet split for training.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    ratings: Vec<Rating>,
    rating_scale: RatingScale,
}

impl Dataset {
    pub fn from_ratings(ratings: Vec<Rating>, rating_scale: RatingScale) -> Self {
        Self {
            ratings,
            rating_scale,
        }
    }

    /// Load a ratings file according to `reader`.
    pub fn load_from_file(path: impl AsRef<Path>, reader: &Reader) -> Result<Self, RecError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let mut ratings = Vec::new();
        for (lineno, line) in content.lines().enumerate().skip(reader.skip_lines) {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let fields: Vec<&str> = match reader.sep {
                Some(sep) => line.split(sep).map(str::trim).collect(),
                None => line.split_whitespace().collect(),
            };
            if fields.len() < 3 {
                return Err(RecError::dataset(format!(
                    "line {}: expected at least 3 fields, got {}",
                    lineno + 1,
                    fields.len()
                )));
            }
            let parse_id = |field: &str, what: &str| -> Result<u32, RecError> {
                field.parse().map_err(|_| {
                    RecError::dataset(format!("line {}: invalid {what}: {field:?}", lineno + 1))
                })
            };
            ratings.push(Rating {
                uid: parse_id(fields[0], "user id")?,
                iid: parse_id(fields[1], "item id")?,
                rating: fields[2].parse().map_err(|_| {
                    RecError::dataset(format!(
                        "line {}: invalid rating: {:?}",
                        lineno + 1,
                        fields[2]
                    ))
                })?,
            });
        }
        tracing::debug!(n_ratings = ratings.len(), "loaded ratings file");
        Ok(Self {
            ratings,
            rating_scale: reader.rating_scale,
        })
    }

    pub fn ratings(&self) -> &[Rating] {
        &self.ratings
    }

    pub fn rating_scale(&self) -> RatingScale {
        self.rating_scale
    }
}

/// K-fold split configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KFold {
    #[serde(default = "default_n_folds")]
    pub n_folds: usize,
    #[serde(default = "default_shuffle")]
    pub shuffle: bool,
    #[serde(default = "default_random_state")]
    pub random_state: Option<u64>,
}

impl Default for KFold {
    fn default() -> Self {
        Self {
            n_folds: default_n_folds(),
            shuffle: default_shuffle(),
            random_state: default_random_state(),
        }
    }
}

fn default_n_folds() -> usize {
    5
}
fn default_shuffle() -> bool {
    true
}
fn default_random_state() -> Option<u64> {
    Some(42)
}

impl KFold {
    pub fn new(n_folds: usize) -> Self {
        Self {
            n_folds,
            ..Self::default()
        }
    }

    /// Split `data` into `n_folds` (trainset, testset) pairs. Each rating
    /// appears in exactly one testset.
    pub fn split(&self, data: &Dataset) -> Result<Vec<(Trainset, Vec<Rating>)>, RecError> {
        let n = data.ratings().len();
        if self.n_folds < 2 {
            return Err(RecError::invalid_input("n_folds must be at least 2"));
        }
        if self.n_folds > n {
            return Err(RecError::invalid_input(format!(
                "cannot split {n} ratings into {} folds",
                self.n_folds
            )));
        }

        let mut indices: Vec<usize> = (0..n).collect();
        if self.shuffle {
            let mut rng = match self.random_state {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            indices.shuffle(&mut rng);
        }

        // The first n % n_folds folds get one extra rating.
        let base_size = n / self.n_folds;
        let remainder = n % self.n_folds;
        let mut folds = Vec::with_capacity(self.n_folds);
        let mut start = 0;
        for fold in 0..self.n_folds {
            let size = base_size + usize::from(fold < remainder);
            let test_idx = &indices[start..start + size];
            let testset: Vec<Rating> = test_idx.iter().map(|&i| data.ratings()[i]).collect();
            let train: Vec<Rating> = indices[..start]
                .iter()
                .chain(&indices[start + size..])
                .map(|&i| data.ratings()[i])
                .collect();
            folds.push((Trainset::new(train, data.rating_scale()), testset));
            start += size;
        }
        Ok(folds)
    }
}
