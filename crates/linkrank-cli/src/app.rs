//! CLI argument definitions

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use linkrank_core::RankConfig;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "linkrank")]
#[command(
    author,
    version,
    about = "Rank the pages of a local HTML corpus with PageRank"
)]
pub struct Cli {
    /// Directory containing the corpus pages
    pub corpus: PathBuf,

    /// Probability of following a link instead of jumping to a random page
    #[arg(short, long)]
    pub damping: Option<f64>,

    /// Number of random-walk samples
    #[arg(short = 'n', long)]
    pub samples: Option<usize>,

    /// Seed for a reproducible random walk
    #[arg(long)]
    pub seed: Option<u64>,

    /// Absolute convergence threshold for iteration
    #[arg(long)]
    pub threshold: Option<f64>,

    /// Glob pattern selecting corpus documents
    #[arg(long)]
    pub pattern: Option<String>,

    /// Estimators to run
    #[arg(long, value_enum, default_value = "both")]
    pub method: Method,

    /// Configuration file (YAML)
    #[arg(long, env = "LINKRANK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "cli")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Merge defaults, config file, environment and flags, then validate
    pub fn rank_config(&self) -> Result<RankConfig> {
        let config = match &self.config {
            Some(path) => RankConfig::load_from(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => RankConfig::load()?,
        };
        let mut config = config.apply_env()?;

        if let Some(damping) = self.damping {
            config.damping_factor = damping;
        }
        if let Some(samples) = self.samples {
            config.sample_count = samples;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(threshold) = self.threshold {
            config.convergence_threshold = threshold;
        }
        if let Some(pattern) = &self.pattern {
            config.pattern = pattern.clone();
        }

        config.validate()?;
        Ok(config)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Method {
    Sampling,
    Iteration,
    Both,
}

impl Method {
    pub fn runs_sampling(self) -> bool {
        matches!(self, Method::Sampling | Method::Both)
    }

    pub fn runs_iteration(self) -> bool {
        matches!(self, Method::Iteration | Method::Both)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Cli,
    Json,
    Csv,
    Md,
    Xml,
}
