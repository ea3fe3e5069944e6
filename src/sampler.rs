use ndarray_rand::rand::{seq::SliceRandom, Rng};

/// Draws subsamples without replacement from the deduplicated training rows.
///
/// One buffer of row indices is reshuffled for every round and its first
/// `sample_size` entries form that round's subsample.
#[derive(Clone, Debug)]
pub(crate) struct Subsampler {
    order: Vec<usize>,
    sample_size: usize,
}

impl Subsampler {
    /// `sample_size` is clamped to `nrows`.
    pub fn new(nrows: usize, sample_size: usize) -> Self {
        if sample_size > nrows {
            log::debug!(
                "subsample size {} exceeds {} unique rows, clamping",
                sample_size,
                nrows
            );
        }
        Subsampler {
            order: (0..nrows).collect(),
            sample_size: sample_size.min(nrows),
        }
    }

    pub fn sample_size(&self) -> usize {
        self.sample_size
    }

    pub fn next_sample<R: Rng>(&mut self, rng: &mut R) -> &[usize] {
        self.order.shuffle(rng);
        &self.order[..self.sample_size]
    }
}
