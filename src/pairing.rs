use ndarray_rand::rand::{seq::SliceRandom, Rng};

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// Ordered pair of feature indices selecting a two dimensional subspace.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IndexPair {
    pub first: usize,
    pub second: usize,
}

impl IndexPair {
    pub fn new(first: usize, second: usize) -> Self {
        IndexPair { first, second }
    }
}

/// Shuffles `0..num_features` and links every index to its successor,
/// wrapping the last one back to the first.
///
/// Each index shows up once as `first` and once as `second`, so exactly
/// `num_features` pairs come back. Callers guarantee `num_features >= 2`.
pub(crate) fn cyclic_pairing<R: Rng>(num_features: usize, rng: &mut R) -> Vec<IndexPair> {
    let mut features: Vec<usize> = (0..num_features).collect();
    features.shuffle(rng);
    features
        .iter()
        .zip(features.iter().cycle().skip(1))
        .map(|(&first, &second)| IndexPair::new(first, second))
        .collect()
}
