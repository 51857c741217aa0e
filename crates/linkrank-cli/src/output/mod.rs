//! Output formatters

pub mod csv;
pub mod json;
pub mod markdown;
pub mod terminal;
pub mod xml;

use crate::app::OutputFormat;
use linkrank_core::{Convergence, Distribution};

/// How a report's ranks were estimated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Estimator {
    Sampling { samples: usize },
    Iteration { rounds: usize },
}

impl Estimator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Estimator::Sampling { .. } => "sampling",
            Estimator::Iteration { .. } => "iteration",
        }
    }
}

/// One labeled set of rank estimates
#[derive(Debug, Clone)]
pub struct RankReport {
    pub estimator: Estimator,
    pub ranks: Distribution,
}

impl RankReport {
    pub fn sampling(samples: usize, ranks: Distribution) -> Self {
        Self {
            estimator: Estimator::Sampling { samples },
            ranks,
        }
    }

    pub fn iteration(convergence: Convergence) -> Self {
        Self {
            estimator: Estimator::Iteration {
                rounds: convergence.rounds,
            },
            ranks: convergence.ranks,
        }
    }

    pub fn label(&self) -> String {
        match self.estimator {
            Estimator::Sampling { samples } => {
                format!("PageRank Results from Sampling (n = {samples})")
            }
            Estimator::Iteration { .. } => "PageRank Results from Iteration".to_string(),
        }
    }
}

/// Format rank reports
pub fn format_reports(reports: &[RankReport], format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => json::format_reports(reports),
        OutputFormat::Csv => csv::format_reports(reports),
        OutputFormat::Xml => xml::format_reports(reports),
        OutputFormat::Md => markdown::format_reports(reports),
        OutputFormat::Cli => terminal::format_reports(reports),
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::RankReport;
    use linkrank_core::{iterate_rank_with, sample_rank, Corpus, IterationOptions, RngSource};

    pub fn reports() -> Vec<RankReport> {
        let corpus = Corpus::new([
            ("1.html", vec!["2.html"]),
            ("2.html", vec!["1.html", "3.html"]),
            ("3.html", vec!["2.html"]),
        ]);
        let sampled = sample_rank(&corpus, 0.85, 100, &mut RngSource::seeded(5)).unwrap();
        let iterated = iterate_rank_with(&corpus, &IterationOptions::default()).unwrap();
        vec![
            RankReport::sampling(100, sampled),
            RankReport::iteration(iterated),
        ]
    }
}
