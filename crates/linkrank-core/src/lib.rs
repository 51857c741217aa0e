//! Linkrank Core Library
//!
//! PageRank estimation over a small, closed corpus of hyperlinked pages.
//!
//! # Features
//! - Corpus crawling: anchor links extracted from a directory of HTML files
//! - Random-surfer transition model with damping
//! - Monte Carlo sampling estimator with a pluggable random source
//! - Fixed-point iteration estimator with dangling-mass redistribution

pub mod config;
pub mod corpus;
pub mod error;
pub mod rank;

pub use config::RankConfig;
pub use corpus::{crawl, extract_links, Corpus, ScanOptions};
pub use error::{LinkRankError, Error, Result};
pub use rank::{
    iterate_rank, iterate_rank_with, sample_rank, sample_visits, transition, Convergence,
    Distribution, IterationOptions, RandomSource, RngSource, VisitCounts,
    WeightedTable,
};

/// Default config directory name
pub const CONFIG_DIR_NAME: &str = "linkrank";
