//! Pluggable randomness for the sampling estimator

use crate::error::{LinkRankError, Result};
use rand::distr::weighted::WeightedIndex;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Categorical distribution over page indices, prepared once and drawn
/// from many times.
#[derive(Debug, Clone)]
pub struct WeightedTable {
    weights: Vec<f64>,
    index: WeightedIndex<f64>,
}

impl WeightedTable {
    /// Fails when a weight is negative or not finite, or all are zero
    pub fn new(weights: Vec<f64>) -> Result<Self> {
        let index = WeightedIndex::new(&weights)
            .map_err(|e| LinkRankError::invalid(format!("unusable transition weights: {e}")))?;
        Ok(Self { weights, index })
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }
}

/// Source of the two random choices a random walk needs.
///
/// Indices refer to the corpus' lexicographic page order.
pub trait RandomSource {
    /// Pick an index in `0..len` with equal probability
    fn pick_uniform(&mut self, len: usize) -> usize;

    /// Pick an index with probability proportional to its weight in `table`
    fn pick_weighted(&mut self, table: &WeightedTable) -> Result<usize>;
}

/// [`RandomSource`] backed by any `rand` generator
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<ChaCha8Rng> {
    /// Reproducible source: the same seed yields the same walk
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Source seeded from the thread-local generator
    pub fn from_entropy() -> Self {
        Self::seeded(rand::random())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn pick_uniform(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }

    fn pick_weighted(&mut self, table: &WeightedTable) -> Result<usize> {
        Ok(self.rng.sample(&table.index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_sources_agree() {
        let mut a = RngSource::seeded(7);
        let mut b = RngSource::seeded(7);
        let table = WeightedTable::new(vec![0.1, 0.2, 0.7]).unwrap();
        for _ in 0..100 {
            assert_eq!(a.pick_uniform(10), b.pick_uniform(10));
            assert_eq!(a.pick_weighted(&table).unwrap(), b.pick_weighted(&table).unwrap());
        }
    }

    #[test]
    fn test_zero_weight_is_never_picked() {
        let mut source = RngSource::seeded(1);
        let table = WeightedTable::new(vec![0.5, 0.0, 0.5]).unwrap();
        for _ in 0..1_000 {
            assert_ne!(source.pick_weighted(&table).unwrap(), 1);
        }
    }

    #[test]
    fn test_unusable_weights_are_rejected() {
        for weights in [vec![0.0, 0.0], vec![], vec![0.5, -0.1], vec![f64::NAN, 1.0]] {
            let err = WeightedTable::new(weights.clone()).unwrap_err();
            assert!(
                matches!(err, LinkRankError::InvalidArgument(_)),
                "accepted {weights:?}"
            );
        }
    }

    #[test]
    fn test_table_keeps_weights() {
        let table = WeightedTable::new(vec![0.25, 0.75]).unwrap();
        assert_eq!(table.weights(), &[0.25, 0.75]);
    }

    #[test]
    fn test_uniform_in_range() {
        let mut source = RngSource::from_entropy();
        for _ in 0..1_000 {
            assert!(source.pick_uniform(3) < 3);
        }
    }
}
