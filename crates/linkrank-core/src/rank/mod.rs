//! PageRank estimation
//!
//! Two independent estimators over the damped random-surfer model:
//! - [`sample_rank`]: Monte Carlo random walk, visit frequency as rank
//! - [`iterate_rank`]: synchronous fixed-point iteration of the PageRank
//!   equation with uniform redistribution of dangling mass
//!
//! Both return a [`Distribution`] covering every page of the corpus.

mod iteration;
mod random;
mod sampling;
mod transition;

pub use iteration::{iterate_rank, iterate_rank_with, Convergence, IterationOptions};
pub use random::{RandomSource, RngSource, WeightedTable};
pub use sampling::{sample_rank, sample_visits, VisitCounts};
pub use transition::transition;

use crate::corpus::Corpus;
use crate::error::{LinkRankError, Result};
use serde::Serialize;
use std::collections::BTreeMap;

/// Probability mass per page, keyed and ordered by page identifier
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Distribution {
    ranks: BTreeMap<String, f64>,
}

impl Distribution {
    /// Pair `values` with `pages`; both must be in the same order
    pub(crate) fn from_values<'a>(
        pages: impl IntoIterator<Item = &'a str>,
        values: Vec<f64>,
    ) -> Self {
        let ranks = pages
            .into_iter()
            .zip(values)
            .map(|(page, value)| (page.to_string(), value))
            .collect();
        Self { ranks }
    }

    pub fn get(&self, page: &str) -> Option<f64> {
        self.ranks.get(page).copied()
    }

    /// Pages and their mass in lexicographic page order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.ranks.iter().map(|(page, rank)| (page.as_str(), *rank))
    }

    pub fn total(&self) -> f64 {
        self.ranks.values().sum()
    }

    /// Largest absolute per-page difference against `other`
    pub fn max_difference(&self, other: &Distribution) -> f64 {
        self.ranks
            .iter()
            .map(|(page, rank)| (rank - other.get(page).unwrap_or(0.0)).abs())
            .fold(0.0, f64::max)
    }
}

fn ensure_non_empty(corpus: &Corpus) -> Result<()> {
    if corpus.is_empty() {
        return Err(LinkRankError::invalid("corpus has no pages"));
    }
    Ok(())
}

fn ensure_damping(damping_factor: f64) -> Result<()> {
    // Written so that NaN fails too
    if !(damping_factor > 0.0 && damping_factor < 1.0) {
        return Err(LinkRankError::invalid(format!(
            "damping factor must be in (0, 1), got {damping_factor}"
        )));
    }
    Ok(())
}
