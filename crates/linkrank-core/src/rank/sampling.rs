//! Monte Carlo random-surfer estimator

use super::random::{RandomSource, WeightedTable};
use super::transition::transition_weights;
use super::{ensure_damping, ensure_non_empty, Distribution};
use crate::corpus::Corpus;
use crate::error::{LinkRankError, Result};
use std::collections::{BTreeMap, BTreeSet};

/// Visits recorded by a random walk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitCounts {
    counts: BTreeMap<String, usize>,
    samples: usize,
}

impl VisitCounts {
    pub fn get(&self, page: &str) -> Option<usize> {
        self.counts.get(page).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.counts.iter().map(|(page, count)| (page.as_str(), *count))
    }

    /// Number of samples drawn, equal to the sum of all counts
    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Visit frequency of each page
    pub fn to_distribution(&self) -> Distribution {
        let samples = self.samples as f64;
        let pages = self.counts.keys().map(String::as_str);
        let values = self.counts.values().map(|&c| c as f64 / samples).collect();
        Distribution::from_values(pages, values)
    }
}

/// Estimate PageRank as the visit frequency of a random walk of `samples` steps.
pub fn sample_rank<S>(
    corpus: &Corpus,
    damping_factor: f64,
    samples: usize,
    source: &mut S,
) -> Result<Distribution>
where
    S: RandomSource + ?Sized,
{
    let visits = sample_visits(corpus, damping_factor, samples, source)?;
    Ok(visits.to_distribution())
}

/// Walk the corpus for `samples` steps and count the visits to each page.
///
/// The first page is drawn uniformly; each later page is drawn from the
/// transition model of the page before it. Every draw is counted, so the
/// counts always add up to `samples`.
pub fn sample_visits<S>(
    corpus: &Corpus,
    damping_factor: f64,
    samples: usize,
    source: &mut S,
) -> Result<VisitCounts>
where
    S: RandomSource + ?Sized,
{
    ensure_non_empty(corpus)?;
    ensure_damping(damping_factor)?;
    if samples == 0 {
        return Err(LinkRankError::invalid("sample count must be at least 1"));
    }

    let pages: Vec<&str> = corpus.pages().collect();
    let links: Vec<&BTreeSet<String>> = corpus.iter().map(|(_, links)| links).collect();
    let mut counts = vec![0usize; pages.len()];
    let mut tables: Vec<Option<WeightedTable>> = vec![None; pages.len()];

    let mut current = checked_index(source.pick_uniform(pages.len()), pages.len())?;
    counts[current] += 1;

    for _ in 1..samples {
        let table: &WeightedTable = match &mut tables[current] {
            Some(table) => &*table,
            slot => slot.insert(WeightedTable::new(transition_weights(
                &pages,
                links[current],
                damping_factor,
            ))?),
        };
        current = checked_index(source.pick_weighted(table)?, pages.len())?;
        counts[current] += 1;
    }

    tracing::info!(pages = pages.len(), samples, "sampling finished");

    let counts = pages
        .iter()
        .zip(counts)
        .map(|(page, count)| (page.to_string(), count))
        .collect();
    Ok(VisitCounts { counts, samples })
}

fn checked_index(index: usize, len: usize) -> Result<usize> {
    if index >= len {
        return Err(LinkRankError::invalid(format!(
            "random source returned index {index} for {len} pages"
        )));
    }
    Ok(index)
}
