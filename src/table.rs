//! Absence tables over two dimensional binary subspaces.
use crate::pairing::IndexPair;

use ndarray::{Array2, ArrayView1};

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// Number of features in every subspace.
pub const SUBSPACE_SIZE: usize = 2;

/// All value pairs a two feature binary subspace can take, in code order.
pub const DOMAIN: [(u8, u8); 4] = [(0, 0), (0, 1), (1, 0), (1, 1)];

#[inline]
fn code(a: u8, b: u8) -> usize {
    (2 * a + b) as usize
}

/// Marks each of the four value pairs of a subspace with 0 when it was seen
/// in the subsample and 1 when it was not.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndicatorTable {
    indicators: [u8; 4],
}

impl IndicatorTable {
    /// Expects every value in the projection to be 0 or 1.
    pub(crate) fn from_projection<I: IntoIterator<Item = (u8, u8)>>(projection: I) -> Self {
        let mut indicators = [1u8; 4];
        for (a, b) in projection {
            indicators[code(a, b)] = 0;
        }
        IndicatorTable { indicators }
    }

    /// Indicator of the value pair `(a, b)`, `None` outside the binary domain.
    pub fn indicator(&self, a: u8, b: u8) -> Option<u8> {
        if a > 1 || b > 1 {
            return None;
        }
        Some(self.indicators[code(a, b)])
    }

    /// Number of value pairs never observed.
    pub fn absent(&self) -> usize {
        self.indicators.iter().map(|&v| v as usize).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = ((u8, u8), u8)> + '_ {
        DOMAIN.iter().copied().zip(self.indicators.iter().copied())
    }
}

/// One ensemble member: an indicator table for every generated index pair.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Debug, PartialEq)]
pub struct ProbabilityTable {
    entries: Vec<(IndexPair, IndicatorTable)>,
}

impl ProbabilityTable {
    /// Builds the table from the rows of `records` listed in `sample`.
    pub(crate) fn build(records: &Array2<u8>, sample: &[usize], pairs: &[IndexPair]) -> Self {
        let entries = pairs
            .iter()
            .map(|&pair| {
                let projection = sample
                    .iter()
                    .map(|&row| (records[(row, pair.first)], records[(row, pair.second)]));
                (pair, IndicatorTable::from_projection(projection))
            })
            .collect();
        ProbabilityTable { entries }
    }

    pub fn entries(&self) -> &[(IndexPair, IndicatorTable)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, pair: IndexPair) -> Option<&IndicatorTable> {
        self.entries
            .iter()
            .find(|(p, _)| *p == pair)
            .map(|(_, table)| table)
    }

    /// Counts the subspaces where `row`'s value pair was absent. `row` must be binary.
    pub(crate) fn score_row(&self, row: &ArrayView1<u8>) -> usize {
        self.entries
            .iter()
            .map(|(pair, table)| table.indicators[code(row[pair.first], row[pair.second])] as usize)
            .sum()
    }
}
