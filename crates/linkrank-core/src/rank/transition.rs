//! Random-surfer transition model

use super::{ensure_damping, ensure_non_empty, Distribution};
use crate::corpus::Corpus;
use crate::error::{LinkRankError, Result};
use std::collections::BTreeSet;

/// Distribution over the page the surfer visits next from `page`.
///
/// With probability `damping_factor` the surfer follows one of the page's
/// links uniformly; otherwise it jumps to any page of the corpus. A page
/// without links sends the surfer to every page with equal probability.
pub fn transition(corpus: &Corpus, page: &str, damping_factor: f64) -> Result<Distribution> {
    ensure_non_empty(corpus)?;
    ensure_damping(damping_factor)?;
    let links = corpus
        .links(page)
        .ok_or_else(|| LinkRankError::invalid(format!("page not in corpus: {page}")))?;

    let pages: Vec<&str> = corpus.pages().collect();
    let weights = transition_weights(&pages, links, damping_factor);
    Ok(Distribution::from_values(pages, weights))
}

/// Transition probabilities in `pages` order for a page with outgoing `links`
pub(crate) fn transition_weights(
    pages: &[&str],
    links: &BTreeSet<String>,
    damping_factor: f64,
) -> Vec<f64> {
    let total = pages.len() as f64;

    if links.is_empty() {
        return vec![1.0 / total; pages.len()];
    }

    let teleport = (1.0 - damping_factor) / total;
    let follow = damping_factor / links.len() as f64;

    pages
        .iter()
        .map(|&candidate| {
            if links.contains(candidate) {
                teleport + follow
            } else {
                teleport
            }
        })
        .collect()
}
