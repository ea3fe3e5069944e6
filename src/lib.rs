//! Zero++ outlier scoring for one-hot encoded data.
//!
//! An ensemble of tables records, for random pairs of binary features, which of
//! the four value combinations never showed up in a random subsample of the
//! training rows. A query row scores one point for every such miss.
pub mod data;
pub mod error;
pub mod estimator;
pub mod model;
pub mod pairing;
mod sampler;
pub mod table;
pub use data::records_from_rows;
pub use error::{Result, ZeroError};
pub use estimator::ZeroEstimator;
pub use model::{ZeroModel, ZeroParams};
pub use pairing::IndexPair;
pub use table::{IndicatorTable, ProbabilityTable, DOMAIN, SUBSPACE_SIZE};
