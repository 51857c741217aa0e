//! Rank command: crawl the corpus and run the selected estimators

use crate::app::Cli;
use crate::output::{self, RankReport};
use anyhow::{Context, Result};
use linkrank_core::{
    crawl, iterate_rank_with, sample_rank, IterationOptions, RngSource, ScanOptions,
};

pub fn run(cli: &Cli) -> Result<()> {
    let config = cli.rank_config()?;
    tracing::debug!(?config, "effective configuration");

    let options = ScanOptions::with_pattern(config.pattern.as_str());
    let corpus = crawl(&cli.corpus, &options)
        .with_context(|| format!("failed to crawl {}", cli.corpus.display()))?;

    let mut reports = Vec::new();

    if cli.method.runs_sampling() {
        let mut source = match config.seed {
            Some(seed) => RngSource::seeded(seed),
            None => RngSource::from_entropy(),
        };
        let ranks = sample_rank(
            &corpus,
            config.damping_factor,
            config.sample_count,
            &mut source,
        )?;
        reports.push(RankReport::sampling(config.sample_count, ranks));
    }

    if cli.method.runs_iteration() {
        let convergence = iterate_rank_with(&corpus, &IterationOptions::from(&config))?;
        reports.push(RankReport::iteration(convergence));
    }

    print!("{}", output::format_reports(&reports, cli.format));
    Ok(())
}
