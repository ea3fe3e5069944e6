use crate::error::{Result, ZeroError};
use crate::model::{ZeroModel, ZeroParams};

use linfa::{
    dataset::DatasetBase,
    traits::{Fit, Predict},
    Float,
};
use ndarray::{Array1, ArrayBase, Data, Ix2};
use ndarray_rand::rand::Rng;
use rand_isaac::Isaac64Rng;

/// Hyperparameters together with the model of the last successful fit.
#[derive(Clone, Debug)]
pub struct ZeroEstimator<R: Rng = Isaac64Rng> {
    params: ZeroParams<R>,
    model: Option<ZeroModel>,
}

impl ZeroEstimator<Isaac64Rng> {
    pub fn new(num_tables: usize, subsample_size: usize, seed: u64) -> Self {
        Self::from_params(ZeroParams::from_seed(num_tables, subsample_size, seed))
    }
}

impl<R: Rng + Clone> ZeroEstimator<R> {
    pub fn from_params(params: ZeroParams<R>) -> Self {
        ZeroEstimator {
            params,
            model: None,
        }
    }

    pub fn params(&self) -> &ZeroParams<R> {
        &self.params
    }

    pub fn model(&self) -> Option<&ZeroModel> {
        self.model.as_ref()
    }

    pub fn is_fitted(&self) -> bool {
        self.model.is_some()
    }

    /// Fits a new model, replacing the previous one. A failed fit keeps the
    /// previous model.
    pub fn fit<F: Float, D: Data<Elem = F>>(
        &mut self,
        x: &ArrayBase<D, Ix2>,
    ) -> Result<&ZeroModel> {
        let dataset = DatasetBase::new(x.view(), ());
        let model = self.params.fit(&dataset)?;
        Ok(&*self.model.insert(model))
    }

    pub fn predict<F: Float, D: Data<Elem = F>>(
        &self,
        x: &ArrayBase<D, Ix2>,
    ) -> Result<Array1<F>> {
        let model = self.model.as_ref().ok_or(ZeroError::NotFitted)?;
        model.predict(x)
    }

    pub fn decision_function<F: Float, D: Data<Elem = F>>(
        &self,
        x: &ArrayBase<D, Ix2>,
    ) -> Result<Array1<F>> {
        let model = self.model.as_ref().ok_or(ZeroError::NotFitted)?;
        model.decision_function(x)
    }
}
