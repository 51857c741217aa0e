//! Fixed-point PageRank iteration

use super::{ensure_damping, ensure_non_empty, Distribution};
use crate::config::{
    RankConfig, DEFAULT_CONVERGENCE_THRESHOLD, DEFAULT_DAMPING_FACTOR, DEFAULT_MAX_ROUNDS,
};
use crate::corpus::Corpus;
use crate::error::{LinkRankError, Result};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterationOptions {
    pub damping_factor: f64,
    /// Stop once the largest absolute rank change of a round is below this
    pub threshold: f64,
    pub max_rounds: usize,
}

impl Default for IterationOptions {
    fn default() -> Self {
        Self {
            damping_factor: DEFAULT_DAMPING_FACTOR,
            threshold: DEFAULT_CONVERGENCE_THRESHOLD,
            max_rounds: DEFAULT_MAX_ROUNDS,
        }
    }
}

impl From<&RankConfig> for IterationOptions {
    fn from(config: &RankConfig) -> Self {
        Self {
            damping_factor: config.damping_factor,
            threshold: config.convergence_threshold,
            max_rounds: config.max_rounds,
        }
    }
}

/// Converged ranks plus how they were reached
#[derive(Debug, Clone, PartialEq)]
pub struct Convergence {
    pub ranks: Distribution,
    pub rounds: usize,
    /// Largest rank change in the final round
    pub delta: f64,
}

/// Iterate the PageRank equation with the default threshold of 0.001.
pub fn iterate_rank(corpus: &Corpus, damping_factor: f64) -> Result<Distribution> {
    let options = IterationOptions {
        damping_factor,
        ..IterationOptions::default()
    };
    Ok(iterate_rank_with(corpus, &options)?.ranks)
}

/// Iterate the PageRank equation until no rank moves by `threshold` or more.
///
/// Each round reads only the previous round's ranks:
///
/// `new[p] = (1 - d) / N + d * (sum(old[q] / out(q) for q -> p) + sum(old[q] / N for dangling q))`
///
/// A dangling page spreads its rank over every page, itself included.
pub fn iterate_rank_with(corpus: &Corpus, options: &IterationOptions) -> Result<Convergence> {
    ensure_non_empty(corpus)?;
    ensure_damping(options.damping_factor)?;
    if !(options.threshold.is_finite() && options.threshold > 0.0) {
        return Err(LinkRankError::invalid(format!(
            "convergence threshold must be positive, got {}",
            options.threshold
        )));
    }
    if options.max_rounds == 0 {
        return Err(LinkRankError::invalid("max_rounds must be at least 1"));
    }

    let pages: Vec<&str> = corpus.pages().collect();
    let n = pages.len();
    let n_f64 = n as f64;

    let out_degrees: Vec<usize> = corpus.iter().map(|(_, links)| links.len()).collect();
    let dangling: Vec<usize> = (0..n).filter(|&q| out_degrees[q] == 0).collect();
    let mut incoming: Vec<Vec<usize>> = vec![Vec::new(); n];
    for (source, (_, links)) in corpus.iter().enumerate() {
        for target in links {
            // Corpus links always resolve to a page
            if let Ok(target) = pages.binary_search(&target.as_str()) {
                incoming[target].push(source);
            }
        }
    }

    let damping = options.damping_factor;
    let teleport = (1.0 - damping) / n_f64;
    let mut ranks = vec![1.0 / n_f64; n];
    let mut new_ranks = vec![0.0; n];
    let mut delta = f64::INFINITY;

    for round in 1..=options.max_rounds {
        let dangling_share: f64 = dangling.iter().map(|&q| ranks[q]).sum::<f64>() / n_f64;

        for (p, new_rank) in new_ranks.iter_mut().enumerate() {
            let inbound: f64 = incoming[p]
                .iter()
                .map(|&q| ranks[q] / out_degrees[q] as f64)
                .sum();
            *new_rank = teleport + damping * (inbound + dangling_share);
        }

        delta = ranks
            .iter()
            .zip(new_ranks.iter())
            .map(|(old, new)| (old - new).abs())
            .fold(0.0, f64::max);
        std::mem::swap(&mut ranks, &mut new_ranks);
        tracing::debug!(round, delta, "iteration round");

        if delta < options.threshold {
            tracing::info!(pages = n, rounds = round, delta, "iteration converged");
            return Ok(Convergence {
                ranks: Distribution::from_values(pages, ranks),
                rounds: round,
                delta,
            });
        }
    }

    Err(LinkRankError::NotConverged {
        rounds: options.max_rounds,
        delta,
    })
}
