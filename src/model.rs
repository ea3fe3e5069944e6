use crate::data::{binarize, unique_rows};
use crate::error::{Result, ZeroError};
use crate::pairing::cyclic_pairing;
use crate::sampler::Subsampler;
use crate::table::ProbabilityTable;

use linfa::{
    dataset::DatasetBase,
    traits::{Fit, Predict},
    Float,
};
use ndarray::{Array1, ArrayBase, Axis, Data, Ix1, Ix2};
use ndarray_rand::rand::{Rng, SeedableRng};
use rand_isaac::Isaac64Rng;
use std::cell::RefCell;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// Hyperparameters of a Zero++ ensemble and the generator that drives fitting.
///
/// Every `fit` advances the owned generator, so fitting the same params twice
/// gives two different models; rebuild the params from the seed to reproduce one.
#[derive(Clone, Debug)]
pub struct ZeroParams<R: Rng> {
    num_tables: usize,
    subsample_size: usize,
    rng: RefCell<R>,
}

impl<R: Rng + Clone> ZeroParams<R> {
    pub fn new(num_tables: usize, subsample_size: usize, rng: R) -> Self {
        Self {
            num_tables,
            subsample_size,
            rng: RefCell::new(rng),
        }
    }

    pub fn with_num_tables(mut self, num_tables: usize) -> Self {
        self.num_tables = num_tables;
        self
    }

    pub fn with_subsample_size(mut self, subsample_size: usize) -> Self {
        self.subsample_size = subsample_size;
        self
    }

    pub fn with_rng<R2: Rng + Clone>(self, rng: R2) -> ZeroParams<R2> {
        ZeroParams {
            num_tables: self.num_tables,
            subsample_size: self.subsample_size,
            rng: RefCell::new(rng),
        }
    }

    pub fn with_seed(self, seed: u64) -> ZeroParams<Isaac64Rng> {
        self.with_rng(Isaac64Rng::seed_from_u64(seed))
    }

    pub fn num_tables(&self) -> usize {
        self.num_tables
    }

    /// Requested subsample size, before clamping to the number of unique rows.
    pub fn subsample_size(&self) -> usize {
        self.subsample_size
    }

    pub fn validate(&self) -> Result<()> {
        if self.num_tables == 0 {
            return Err(ZeroError::InvalidParameter(
                "number of tables must be at least 1".to_string(),
            ));
        }
        if self.subsample_size == 0 {
            return Err(ZeroError::InvalidParameter(
                "subsample size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl ZeroParams<Isaac64Rng> {
    pub fn from_seed(num_tables: usize, subsample_size: usize, seed: u64) -> Self {
        Self::new(num_tables, subsample_size, Isaac64Rng::seed_from_u64(seed))
    }
}

/// Fitted Zero++ ensemble.
///
/// Holds one [`ProbabilityTable`] per ensemble member. A query row is scored by
/// counting, over every member and every index pair, how often its value pair
/// was missing from that member's subsample.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Debug, PartialEq)]
pub struct ZeroModel {
    tables: Vec<ProbabilityTable>,
    num_features: usize,
    subsample_size: usize,
}

impl ZeroModel {
    pub fn tables(&self) -> &[ProbabilityTable] {
        &self.tables
    }

    pub fn num_tables(&self) -> usize {
        self.tables.len()
    }

    pub fn num_features(&self) -> usize {
        self.num_features
    }

    /// Subsample size actually used, after clamping.
    pub fn subsample_size(&self) -> usize {
        self.subsample_size
    }

    /// Largest raw score a row can get.
    pub fn max_score(&self) -> usize {
        self.tables.iter().map(|table| table.len()).sum()
    }

    /// Raw absence count of every row of `x`.
    pub fn raw_scores<F: Float, D: Data<Elem = F>>(
        &self,
        x: &ArrayBase<D, Ix2>,
    ) -> Result<Vec<usize>> {
        if x.ncols() != self.num_features {
            return Err(ZeroError::DimensionMismatch {
                expected: self.num_features,
                found: x.ncols(),
            });
        }
        let records = binarize(x)?;
        let scores: Vec<usize> = records
            .outer_iter()
            .map(|row| {
                self.tables
                    .iter()
                    .map(|table| table.score_row(&row))
                    .sum::<usize>()
            })
            .collect();
        Ok(scores)
    }

    pub fn score_instance<F: Float, D: Data<Elem = F>>(
        &self,
        row: &ArrayBase<D, Ix1>,
    ) -> Result<usize> {
        let x = row.view().insert_axis(Axis(0));
        let scores = self.raw_scores(&x)?;
        Ok(scores[0])
    }

    /// Raw scores as floats; higher means more anomalous.
    pub fn decision_function<F: Float, D: Data<Elem = F>>(
        &self,
        x: &ArrayBase<D, Ix2>,
    ) -> Result<Array1<F>> {
        let scores: Vec<F> = self
            .raw_scores(x)?
            .into_iter()
            .map(|score| F::from_usize(score).unwrap_or_else(F::infinity))
            .collect();
        Ok(Array1::from(scores))
    }
}

impl<F: Float, R: Rng + Clone, D: Data<Elem = F>, T> Fit<ArrayBase<D, Ix2>, T, ZeroError>
    for ZeroParams<R>
{
    type Object = ZeroModel;

    fn fit(&self, dataset: &DatasetBase<ArrayBase<D, Ix2>, T>) -> Result<ZeroModel> {
        self.validate()?;

        let records = binarize(dataset.records())?;
        if records.nrows() == 0 {
            return Err(ZeroError::NotEnoughSamples);
        }
        let num_features = records.ncols();
        if num_features < 2 {
            return Err(ZeroError::DegenerateDimension(num_features));
        }

        let unique = unique_rows(&records)?;
        let ref mut rng = *self.rng.borrow_mut();
        let mut sampler = Subsampler::new(unique.nrows(), self.subsample_size);

        let mut tables = Vec::with_capacity(self.num_tables);
        for round in 0..self.num_tables {
            let pairs = cyclic_pairing(num_features, rng);
            let sample = sampler.next_sample(rng);
            let table = ProbabilityTable::build(&unique, sample, &pairs);
            log::trace!(
                "round {}: {} pairs, {} absent value pairs",
                round,
                table.len(),
                table.entries().iter().map(|(_, t)| t.absent()).sum::<usize>()
            );
            tables.push(table);
        }

        log::debug!(
            "fitted {} tables on {} unique of {} rows, {} features, subsample size {}",
            tables.len(),
            unique.nrows(),
            records.nrows(),
            num_features,
            sampler.sample_size()
        );

        Ok(ZeroModel {
            tables,
            num_features,
            subsample_size: sampler.sample_size(),
        })
    }
}

/// Negated raw scores, so that larger values rank as more normal.
impl<F: Float, D: Data<Elem = F>> Predict<&ArrayBase<D, Ix2>, Result<Array1<F>>> for ZeroModel {
    fn predict(&self, x: &ArrayBase<D, Ix2>) -> Result<Array1<F>> {
        let scores = self.decision_function(x)?;
        Ok(scores.mapv(|v| -v))
    }
}
